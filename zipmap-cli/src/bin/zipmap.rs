// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::io;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::Level;
use zipmap_cli::{cli, ZipMapCliOptions};

/// Apply a builtin function element-wise over lines of input
#[derive(Parser)]
struct Args {
    /// Name of the function to apply
    #[clap(required_unless_present = "list")]
    function: Option<String>,
    /// Function arguments: `-` reads lines from stdin, `@path` reads lines from a file, anything
    /// else is a constant. Constants parse as JSON unless the function expects a string there, in
    /// which case the text is passed as-is (quote it as `'"..."'` to pass a JSON string)
    #[clap(allow_hyphen_values = true)]
    args: Vec<String>,
    /// Maximum number of results to print
    #[clap(long)]
    limit: Option<usize>,
    /// Print results as JSON
    #[clap(long)]
    json: bool,
    /// List the available functions
    #[clap(long)]
    list: bool,
    /// Log level
    #[clap(long, env = "ZIPMAP_LOG", default_value = "warn")]
    log_level: Level,
}
impl Into<ZipMapCliOptions> for Args {
    fn into(self) -> ZipMapCliOptions {
        ZipMapCliOptions {
            function: self.function,
            args: self.args,
            limit: self.limit,
            json: self.json,
            list: self.list,
        }
    }
}

pub fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = cli(args.into(), stdin.lock(), &mut stdout.lock())?;
    if summary.num_errors > 0 {
        bail!(
            "{} of {} elements failed",
            summary.num_errors,
            summary.num_errors + summary.num_results
        );
    }
    Ok(())
}
