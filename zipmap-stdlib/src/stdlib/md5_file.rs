// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::fs;

use md5::{Digest, Md5 as Md5Hasher};
use tracing::debug;
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{digest_output, format_args, next_arg, optional_bool},
    value::Value,
};

pub struct Md5File;
impl Md5File {
    pub const UUID: Uuid = uuid!("b3dbd46e-6c8e-435a-81ee-91bb7d568f26");
    const ARITY: FunctionArity<1, 1> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::Boolean],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Md5File {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Md5File {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let raw = args.next();
        match (target.as_str(), optional_bool(raw.as_ref(), false)) {
            (Some(path), Some(raw)) => {
                debug!(path, "md5_file");
                let contents = fs::read(path)
                    .map_err(|err| format!("Failed to read file {}: {}", path, err))?;
                Ok(digest_output(&Md5Hasher::digest(&contents), raw))
            }
            _ => Err(format!(
                "Expected (String, Boolean?), received ({})",
                format_args(&[Some(&target), raw.as_ref()])
            )),
        }
    }
}
