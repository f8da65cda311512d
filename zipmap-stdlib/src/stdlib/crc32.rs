// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::{IntValue, Value}};

pub struct Crc32;
impl Crc32 {
    pub const UUID: Uuid = uuid!("67876def-5f72-44bf-8ced-9395570e038a");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Crc32 {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Crc32 {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_bytes() {
            Some(input) => Ok(Value::Int(crc32fast::hash(input) as IntValue)),
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}
