// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::{IntValue, Value}};

pub struct Ord;
impl Ord {
    pub const UUID: Uuid = uuid!("6be85e72-59d3-4282-bce9-af0761c85503");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Ord {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Ord {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_bytes() {
            Some(input) => Ok(Value::Int(
                input.first().copied().map(IntValue::from).unwrap_or(0),
            )),
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_byte() {
        assert_eq!(Ord.apply(vec![Value::from("abc")].into_iter()), Ok(Value::Int(97)));
        assert_eq!(Ord.apply(vec![Value::from("☺")].into_iter()), Ok(Value::Int(226)));
        assert_eq!(Ord.apply(vec![Value::from("")].into_iter()), Ok(Value::Int(0)));
    }
}
