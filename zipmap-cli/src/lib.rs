// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    iter::repeat,
    path::PathBuf,
    str::FromStr,
};

use anyhow::{anyhow, bail, Context, Result};
use tracing::{debug, error};
use zipmap::{
    core::{ArgType, Arity},
    zip_map, Arg, Driver, Error,
};
use zipmap_stdlib::{Stdlib, Value};

pub struct ZipMapCliOptions {
    pub function: Option<String>,
    pub args: Vec<String>,
    pub limit: Option<usize>,
    pub json: bool,
    pub list: bool,
}

#[derive(PartialEq, Debug)]
pub struct CliSummary {
    pub num_results: usize,
    pub num_errors: usize,
}

/// Where the values for a single argument slot come from
#[derive(PartialEq, Debug)]
pub enum ArgSource {
    /// One element per line of standard input
    Stdin,
    /// One element per line of the given file
    File(PathBuf),
    /// JSON value, or the raw text when the slot expects a string or the argument is not JSON
    Constant(Value),
}
impl ArgSource {
    pub fn parse(arg: &str, arg_type: Option<ArgType>) -> Self {
        if arg == "-" {
            return Self::Stdin;
        }
        if let Some(path) = arg.strip_prefix('@') {
            return Self::File(PathBuf::from(path));
        }
        match serde_json::from_str::<serde_json::Value>(arg) {
            Ok(value) if arg_type == Some(ArgType::String) && !value.is_string() => {
                Self::Constant(Value::from(arg))
            }
            Ok(value) => Self::Constant(Value::from(value)),
            Err(_) => Self::Constant(Value::from(arg)),
        }
    }
}

pub fn cli<'a>(
    options: ZipMapCliOptions,
    input: impl BufRead + 'a,
    output: &mut impl Write,
) -> Result<CliSummary> {
    if options.list {
        for builtin in Stdlib::entries() {
            writeln!(output, "{} ({})", builtin.name(), builtin.arity())?;
        }
        return Ok(CliSummary {
            num_results: 0,
            num_errors: 0,
        });
    }
    let name = options
        .function
        .as_deref()
        .ok_or_else(|| anyhow!("No function specified"))?;
    let builtin =
        Stdlib::from_str(name).map_err(|_| anyhow!("Unknown function: {}", name))?;
    let args = create_args(&options.args, &builtin.arity(), input)?;
    let results = zip_map(builtin, args)
        .with_context(|| format!("Invalid arguments for {}", builtin))?;
    if results.num_drivers() == 0 && options.limit.is_none() {
        bail!("All arguments to {} are constant, specify --limit to bound the output", builtin);
    }
    let results: Box<dyn Iterator<Item = Result<Value, Error>> + 'a> = match options.limit {
        Some(limit) => Box::new(results.take(limit)),
        None => Box::new(results),
    };
    let mut summary = CliSummary {
        num_results: 0,
        num_errors: 0,
    };
    for (index, result) in results.enumerate() {
        match result {
            Ok(value) => {
                writeln!(output, "{}", format_value(&value, options.json)?)?;
                summary.num_results += 1;
            }
            Err(Error::Apply(message)) => {
                error!(index, %builtin, "{}", message);
                summary.num_errors += 1;
            }
            Err(err) => return Err(err).context("Failed to read input"),
        }
    }
    debug!(
        num_results = summary.num_results,
        num_errors = summary.num_errors,
        "finished"
    );
    Ok(summary)
}

fn create_args<'a>(
    args: &[String],
    arity: &Arity,
    input: impl BufRead + 'a,
) -> Result<Vec<Arg<'a, Value>>> {
    let mut input = Some(input);
    let arg_types = arity.iter().map(Some).chain(repeat(None));
    args.iter()
        .zip(arg_types)
        .map(|(arg, arg_type)| match ArgSource::parse(arg, arg_type) {
            ArgSource::Constant(value) => Ok(Arg::Constant(value)),
            ArgSource::Stdin => match input.take() {
                Some(input) => Ok(Arg::Driver(lines_driver(input))),
                None => Err(anyhow!("Standard input can only be read by one argument")),
            },
            ArgSource::File(path) => {
                let file = File::open(&path)
                    .with_context(|| format!("Failed to open input file {}", path.display()))?;
                Ok(Arg::Driver(lines_driver(BufReader::new(file))))
            }
        })
        .collect()
}

fn lines_driver<'a>(input: impl BufRead + 'a) -> Driver<'a, Value> {
    Driver::try_new(input.lines().map(|line| line.map(Value::from)))
}

fn format_value(value: &Value, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string(value).context("Failed to serialize result");
    }
    Ok(match value.to_text() {
        Some(text) => text.into_owned(),
        None => format!("{}", value),
    })
}
