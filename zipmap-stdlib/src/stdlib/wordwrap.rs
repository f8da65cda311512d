// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{format_args, next_arg, optional_bool, optional_bytes, optional_int},
    value::Value,
};

pub struct Wordwrap;
impl Wordwrap {
    pub const UUID: Uuid = uuid!("5df9d846-bc09-4cde-85a6-db6261e1ba79");
    const ARITY: FunctionArity<1, 3> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::Int, ArgType::String, ArgType::Boolean],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Wordwrap {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Wordwrap {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let width = args.next();
        let line_break = args.next();
        let cut = args.next();
        match (
            target.as_bytes(),
            optional_int(width.as_ref(), 75),
            optional_bytes(line_break.as_ref(), b"\n"),
            optional_bool(cut.as_ref(), false),
        ) {
            (Some(_), Some(_), Some(line_break), Some(_)) if line_break.is_empty() => {
                Err(String::from("Break string cannot be empty"))
            }
            (Some(_), Some(0), Some(_), Some(true)) => {
                Err(String::from("Can't force cut when width is zero"))
            }
            (Some(input), Some(width), Some(line_break), Some(cut)) => Ok(Value::from_bytes(
                wordwrap(input, width.max(0) as usize, line_break, cut),
            )),
            _ => Err(format!(
                "Expected (String, Int?, String?, Boolean?), received ({})",
                format_args(&[Some(&target), width.as_ref(), line_break.as_ref(), cut.as_ref()])
            )),
        }
    }
}

fn wordwrap(input: &[u8], width: usize, line_break: &[u8], cut: bool) -> Vec<u8> {
    let mut result = Vec::with_capacity(input.len() + input.len() / width.max(1) * line_break.len());
    let mut line_start = 0;
    let mut last_space = 0;
    let mut current = 0;
    while current < input.len() {
        if input[current..].starts_with(line_break) && current + line_break.len() < input.len() {
            result.extend_from_slice(&input[line_start..current + line_break.len()]);
            current += line_break.len() - 1;
            line_start = current + 1;
            last_space = current + 1;
        } else if input[current] == b' ' {
            if current - line_start >= width {
                result.extend_from_slice(&input[line_start..current]);
                result.extend_from_slice(line_break);
                line_start = current + 1;
            }
            last_space = current;
        } else if current - line_start >= width && cut && line_start >= last_space {
            result.extend_from_slice(&input[line_start..current]);
            result.extend_from_slice(line_break);
            line_start = current;
            last_space = current;
        } else if current - line_start >= width && line_start < last_space {
            result.extend_from_slice(&input[line_start..last_space]);
            result.extend_from_slice(line_break);
            line_start = last_space + 1;
            last_space = line_start;
        }
        current += 1;
    }
    if line_start < input.len() {
        result.extend_from_slice(&input[line_start..]);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(args: Vec<Value>) -> Result<Value, String> {
        Wordwrap.apply(args.into_iter())
    }

    #[test]
    fn wrap_at_spaces() {
        assert_eq!(
            wrap(vec![
                Value::from("The quick brown fox sat over the lazy dog"),
                Value::from(15),
                Value::from("<br />\n"),
            ]),
            Ok(Value::from("The quick brown<br />\nfox sat over<br />\nthe lazy dog"))
        );
        assert_eq!(
            wrap(vec![
                Value::from("A very long woooooooooooooooooord. and something"),
                Value::from(8),
                Value::from("\n"),
                Value::from(false),
            ]),
            Ok(Value::from("A very\nlong\nwoooooooooooooooooord.\nand\nsomething"))
        );
        assert_eq!(wrap(vec![Value::from("short")]), Ok(Value::from("short")));
    }

    #[test]
    fn cut_long_words() {
        assert_eq!(
            wrap(vec![
                Value::from("A very long woooooooooooord."),
                Value::from(8),
                Value::from("\n"),
                Value::from(true),
            ]),
            Ok(Value::from("A very\nlong\nwooooooo\nooooord."))
        );
    }

    #[test]
    fn existing_line_breaks() {
        assert_eq!(
            wrap(vec![Value::from("line one\nline two is longer"), Value::from(8)]),
            Ok(Value::from("line one\nline two\nis\nlonger"))
        );
    }

    #[test]
    fn invalid_arguments() {
        assert_eq!(
            wrap(vec![Value::from("abc"), Value::from(0), Value::from("\n"), Value::from(true)]),
            Err(String::from("Can't force cut when width is zero"))
        );
        assert_eq!(
            wrap(vec![Value::from("abc"), Value::from(2), Value::from("")]),
            Err(String::from("Break string cannot be empty"))
        );
    }
}
