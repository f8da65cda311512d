// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{format_args, next_arg, optional_int},
    value::Value,
};

pub struct StrSplit;
impl StrSplit {
    pub const UUID: Uuid = uuid!("5d6a9f0b-a2e0-4d41-a410-1ce8d6a28df5");
    const ARITY: FunctionArity<1, 1> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::Int],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for StrSplit {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for StrSplit {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let length = args.next();
        match (target.as_bytes(), optional_int(length.as_ref(), 1)) {
            (Some(_), Some(length)) if length < 1 => {
                Err(String::from("Length must be greater than 0"))
            }
            (Some(input), Some(length)) => Ok(Value::List(
                input
                    .chunks(length as usize)
                    .map(|chunk| Value::from_bytes(chunk.to_vec()))
                    .collect(),
            )),
            _ => Err(format!(
                "Expected (String, Int?), received ({})",
                format_args(&[Some(&target), length.as_ref()])
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_into_chunks() {
        assert_eq!(
            StrSplit.apply(vec![Value::from("abc")].into_iter()),
            Ok(Value::List(vec![
                Value::from("a"),
                Value::from("b"),
                Value::from("c")
            ]))
        );
        assert_eq!(
            StrSplit.apply(vec![Value::from("Friend"), Value::from(4)].into_iter()),
            Ok(Value::List(vec![Value::from("Frie"), Value::from("nd")]))
        );
        assert_eq!(
            StrSplit.apply(vec![Value::from("")].into_iter()),
            Ok(Value::List(Vec::new()))
        );
        assert!(StrSplit
            .apply(vec![Value::from("abc"), Value::from(0)].into_iter())
            .is_err());
    }
}
