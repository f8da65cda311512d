// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{checked_result_length, format_args, next_arg, optional_bytes, optional_int},
    value::{IntValue, Value},
};

pub struct StrPad;
impl StrPad {
    pub const UUID: Uuid = uuid!("ee9d9102-3314-49b8-9ab8-7a72c860c203");
    const ARITY: FunctionArity<2, 2> = FunctionArity {
        required: [ArgType::String, ArgType::Int],
        optional: [ArgType::String, ArgType::Int],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for StrPad {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for StrPad {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let length = next_arg(&mut args)?;
        let padding = args.next();
        let pad_type = args.next();
        match (
            target.as_bytes(),
            length.as_int(),
            optional_bytes(padding.as_ref(), b" "),
            optional_int(pad_type.as_ref(), STR_PAD_RIGHT),
        ) {
            (Some(_), Some(_), Some(padding), Some(_)) if padding.is_empty() => {
                Err(String::from("Padding string must be a non-empty string"))
            }
            (Some(_), Some(_), Some(_), Some(pad_type))
                if !matches!(pad_type, STR_PAD_LEFT | STR_PAD_RIGHT | STR_PAD_BOTH) =>
            {
                Err(String::from(
                    "Pad type must be one of STR_PAD_LEFT, STR_PAD_RIGHT, or STR_PAD_BOTH",
                ))
            }
            (Some(input), Some(length), Some(padding), Some(pad_type)) => {
                let length = checked_result_length(usize::try_from(length.max(0)).ok())?;
                let num_padding = length.saturating_sub(input.len());
                let (left, right) = match pad_type {
                    STR_PAD_LEFT => (num_padding, 0),
                    STR_PAD_BOTH => (num_padding / 2, num_padding - num_padding / 2),
                    _ => (0, num_padding),
                };
                let mut result = Vec::with_capacity(input.len() + num_padding);
                result.extend(padding.iter().cycle().take(left));
                result.extend_from_slice(input);
                result.extend(padding.iter().cycle().take(right));
                Ok(Value::from_bytes(result))
            }
            _ => Err(format!(
                "Expected (String, Int, String?, Int?), received ({})",
                format_args(&[Some(&target), Some(&length), padding.as_ref(), pad_type.as_ref()])
            )),
        }
    }
}

const STR_PAD_LEFT: IntValue = 0;
const STR_PAD_RIGHT: IntValue = 1;
const STR_PAD_BOTH: IntValue = 2;

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(args: Vec<Value>) -> Result<Value, String> {
        StrPad.apply(args.into_iter())
    }

    #[test]
    fn pad_right_by_default() {
        assert_eq!(
            pad(vec![Value::from("Alien"), Value::from(10)]),
            Ok(Value::from("Alien     "))
        );
        assert_eq!(
            pad(vec![Value::from("Alien"), Value::from(3)]),
            Ok(Value::from("Alien"))
        );
    }

    #[test]
    fn pad_types() {
        assert_eq!(
            pad(vec![
                Value::from("Alien"),
                Value::from(10),
                Value::from("-="),
                Value::from(0),
            ]),
            Ok(Value::from("-=-=-Alien"))
        );
        assert_eq!(
            pad(vec![
                Value::from("Alien"),
                Value::from(10),
                Value::from("_"),
                Value::from(2),
            ]),
            Ok(Value::from("__Alien___"))
        );
        assert_eq!(
            pad(vec![
                Value::from("Alien"),
                Value::from(6),
                Value::from("___"),
            ]),
            Ok(Value::from("Alien_"))
        );
    }

    #[test]
    fn invalid_padding() {
        assert_eq!(
            pad(vec![Value::from("Alien"), Value::from(10), Value::from("")]),
            Err(String::from("Padding string must be a non-empty string"))
        );
        assert!(pad(vec![
            Value::from("Alien"),
            Value::from(10),
            Value::from(" "),
            Value::from(3),
        ])
        .is_err());
    }

    #[test]
    fn oversized_result() {
        assert_eq!(
            pad(vec![Value::from("Alien"), Value::Int(IntValue::MAX)]),
            Err(String::from("Result is too big"))
        );
        assert_eq!(
            pad(vec![Value::from("Alien"), Value::Int(IntValue::MIN)]),
            Ok(Value::from("Alien"))
        );
    }
}
