// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{format_args, next_arg},
    value::{IntValue, Value},
};

pub struct Substr;
impl Substr {
    pub const UUID: Uuid = uuid!("122ef5ce-cf04-4005-b898-ab9211f7a6f1");
    const ARITY: FunctionArity<2, 1> = FunctionArity {
        required: [ArgType::String, ArgType::Int],
        optional: [ArgType::Int],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Substr {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Substr {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let offset = next_arg(&mut args)?;
        let length = args.next();
        let num_chars = match &length {
            None | Some(Value::Null) => Some(None),
            Some(value) => value.as_int().map(Some),
        };
        match (target.as_bytes(), offset.as_int(), num_chars) {
            (Some(input), Some(offset), Some(num_chars)) => {
                Ok(Value::from_bytes(substr(input, offset, num_chars).to_vec()))
            }
            _ => Err(format!(
                "Expected (String, Int, Int?), received ({})",
                format_args(&[Some(&target), Some(&offset), length.as_ref()])
            )),
        }
    }
}

fn substr(input: &[u8], offset: IntValue, length: Option<IntValue>) -> &[u8] {
    let len = input.len() as IntValue;
    if offset > len {
        return &input[0..0];
    }
    let start = if offset < 0 { (len + offset).max(0) } else { offset };
    let available = len - start;
    let end = match length {
        None => len,
        Some(length) if length < 0 => start + (available + length).max(0),
        Some(length) => start + length.min(available),
    };
    &input[start as usize..end as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn substr(args: Vec<Value>) -> Result<Value, String> {
        Substr.apply(args.into_iter())
    }

    #[test]
    fn positive_offsets() {
        assert_eq!(substr(vec![Value::from("abcdef"), Value::from(1)]), Ok(Value::from("bcdef")));
        assert_eq!(
            substr(vec![Value::from("abcdef"), Value::from(1), Value::from(3)]),
            Ok(Value::from("bcd"))
        );
        assert_eq!(
            substr(vec![Value::from("abcdef"), Value::from(0), Value::from(10)]),
            Ok(Value::from("abcdef"))
        );
        assert_eq!(substr(vec![Value::from("abc"), Value::from(3)]), Ok(Value::from("")));
        assert_eq!(substr(vec![Value::from("abc"), Value::from(5)]), Ok(Value::from("")));
    }

    #[test]
    fn negative_offsets() {
        assert_eq!(substr(vec![Value::from("abcdef"), Value::from(-1)]), Ok(Value::from("f")));
        assert_eq!(
            substr(vec![Value::from("abcdef"), Value::from(-3), Value::from(1)]),
            Ok(Value::from("d"))
        );
        assert_eq!(
            substr(vec![Value::from("abcdef"), Value::from(0), Value::from(-1)]),
            Ok(Value::from("abcde"))
        );
        assert_eq!(
            substr(vec![Value::from("abcdef"), Value::from(4), Value::from(-4)]),
            Ok(Value::from(""))
        );
        assert_eq!(
            substr(vec![Value::from("abc"), Value::from(-10), Value::Null]),
            Ok(Value::from("abc"))
        );
    }
}
