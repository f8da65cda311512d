// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct Lcfirst;
impl Lcfirst {
    pub const UUID: Uuid = uuid!("db78b0e9-c7fd-4c2e-9126-62d05fc5c531");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Lcfirst {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Lcfirst {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_bytes() {
            Some(input) => {
                let mut result = input.to_vec();
                if let Some(first) = result.first_mut() {
                    first.make_ascii_lowercase();
                }
                Ok(Value::from_bytes(result))
            }
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}
