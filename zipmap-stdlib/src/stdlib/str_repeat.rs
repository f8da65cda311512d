// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{checked_result_length, next_arg},
    value::Value,
};

pub struct StrRepeat;
impl StrRepeat {
    pub const UUID: Uuid = uuid!("e3d411f9-8270-40c8-83b8-3647159c9856");
    const ARITY: FunctionArity<2, 0> = FunctionArity {
        required: [ArgType::String, ArgType::Int],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for StrRepeat {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for StrRepeat {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let count = next_arg(&mut args)?;
        match (target.as_bytes(), count.as_int()) {
            (Some(_), Some(count)) if count < 0 => {
                Err(String::from("Repeat count must be greater than or equal to 0"))
            }
            (Some(input), Some(_)) if input.is_empty() => Ok(Value::from("")),
            (Some(input), Some(count)) => {
                let length = usize::try_from(count)
                    .ok()
                    .and_then(|count| input.len().checked_mul(count));
                let length = checked_result_length(length)?;
                Ok(Value::from_bytes(input.repeat(length / input.len())))
            }
            _ => Err(format!(
                "Expected (String, Int), received ({}, {})",
                target, count
            )),
        }
    }
}
