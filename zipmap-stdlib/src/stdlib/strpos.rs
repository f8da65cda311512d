// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{find_bytes, format_args, next_arg, optional_int},
    value::{IntValue, Value},
};

pub struct Strpos;
impl Strpos {
    pub const UUID: Uuid = uuid!("78ab7e14-75a3-4340-a59d-a42638e511c3");
    const ARITY: FunctionArity<2, 1> = FunctionArity {
        required: [ArgType::String, ArgType::String],
        optional: [ArgType::Int],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Strpos {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Strpos {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let haystack = next_arg(&mut args)?;
        let needle = next_arg(&mut args)?;
        let offset = args.next();
        match (
            haystack.as_bytes(),
            needle.as_bytes(),
            optional_int(offset.as_ref(), 0),
        ) {
            (Some(input), Some(search), Some(offset)) => {
                let length = input.len() as IntValue;
                let start = if offset < 0 { length + offset } else { offset };
                if start < 0 || start > length {
                    return Err(String::from("Offset not contained in string"));
                }
                Ok(match find_bytes(input, search, start as usize) {
                    Some(index) => Value::Int(index as IntValue),
                    None => Value::Boolean(false),
                })
            }
            _ => Err(format!(
                "Expected (String, String, Int?), received ({})",
                format_args(&[Some(&haystack), Some(&needle), offset.as_ref()])
            )),
        }
    }
}
