// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{format_args, next_arg, optional_bool},
    value::Value,
};

pub struct Nl2br;
impl Nl2br {
    pub const UUID: Uuid = uuid!("ba9b736c-d387-44a1-a2c1-69a9d913f500");
    const ARITY: FunctionArity<1, 1> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::Boolean],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Nl2br {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Nl2br {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let is_xhtml = args.next();
        match (target.as_bytes(), optional_bool(is_xhtml.as_ref(), true)) {
            (Some(input), Some(is_xhtml)) => {
                let tag: &[u8] = if is_xhtml { b"<br />" } else { b"<br>" };
                let mut result = Vec::with_capacity(input.len());
                let mut index = 0;
                while index < input.len() {
                    match (input[index], input.get(index + 1)) {
                        (b'\r', Some(b'\n')) | (b'\n', Some(b'\r')) => {
                            result.extend_from_slice(tag);
                            result.extend_from_slice(&input[index..index + 2]);
                            index += 2;
                        }
                        (byte @ (b'\r' | b'\n'), _) => {
                            result.extend_from_slice(tag);
                            result.push(byte);
                            index += 1;
                        }
                        (byte, _) => {
                            result.push(byte);
                            index += 1;
                        }
                    }
                }
                Ok(Value::from_bytes(result))
            }
            _ => Err(format!(
                "Expected (String, Boolean?), received ({})",
                format_args(&[Some(&target), is_xhtml.as_ref()])
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_line_breaks() {
        assert_eq!(
            Nl2br.apply(vec![Value::from("foo isn't\n bar")].into_iter()),
            Ok(Value::from("foo isn't<br />\n bar"))
        );
        assert_eq!(
            Nl2br.apply(vec![Value::from("a\r\nb\n\rc\rd"), Value::from(false)].into_iter()),
            Ok(Value::from("a<br>\r\nb<br>\n\rc<br>\rd"))
        );
    }
}
