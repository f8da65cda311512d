// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use md5::{Digest, Md5 as Md5Hasher};
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{digest_output, format_args, next_arg, optional_bool},
    value::Value,
};

pub struct Md5;
impl Md5 {
    pub const UUID: Uuid = uuid!("63d7d152-0dce-4cf3-a15e-f91787810436");
    const ARITY: FunctionArity<1, 1> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::Boolean],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Md5 {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Md5 {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let raw = args.next();
        match (target.as_bytes(), optional_bool(raw.as_ref(), false)) {
            (Some(input), Some(raw)) => Ok(digest_output(&Md5Hasher::digest(input), raw)),
            _ => Err(format!(
                "Expected (String, Boolean?), received ({})",
                format_args(&[Some(&target), raw.as_ref()])
            )),
        }
    }
}
