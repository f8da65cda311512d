// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{format_args, next_arg, optional_bytes},
    value::Value,
};

pub struct Ucwords;
impl Ucwords {
    pub const UUID: Uuid = uuid!("931c66c1-a7d2-41c9-99ec-e3f19a907466");
    const ARITY: FunctionArity<1, 1> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::String],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Ucwords {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Ucwords {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let delimiters = args.next();
        match (
            target.as_bytes(),
            optional_bytes(delimiters.as_ref(), b" \t\r\n\x0C\x0B"),
        ) {
            (Some(input), Some(delimiters)) => {
                let mut result = input.to_vec();
                let mut at_word_start = true;
                for byte in result.iter_mut() {
                    if at_word_start {
                        byte.make_ascii_uppercase();
                    }
                    at_word_start = delimiters.contains(byte);
                }
                Ok(Value::from_bytes(result))
            }
            _ => Err(format!(
                "Expected (String, String?), received ({})",
                format_args(&[Some(&target), delimiters.as_ref()])
            )),
        }
    }
}
