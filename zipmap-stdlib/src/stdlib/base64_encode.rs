// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use base64::{engine::general_purpose::STANDARD, Engine};
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct Base64Encode;
impl Base64Encode {
    pub const UUID: Uuid = uuid!("fa6523c2-3ee2-4603-bd52-177bc5308522");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Base64Encode {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Base64Encode {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_bytes() {
            Some(input) => Ok(Value::String(STANDARD.encode(input))),
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}
