// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct Quotemeta;
impl Quotemeta {
    pub const UUID: Uuid = uuid!("855861c7-f5b5-4718-bf8a-da6f774c9716");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Quotemeta {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Quotemeta {
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
                let mut result = Vec::with_capacity(input.len());
                for byte in input.iter().copied() {
                    if b".\\+*?[^]$()".contains(&byte) {
                        result.push(b'\\');
                    }
                    result.push(byte);
                }
                Ok(Value::from_bytes(result))
            }
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_metacharacters() {
        assert_eq!(
            Quotemeta.apply(vec![Value::from("1+1=2? (maybe) [x] ^$")].into_iter()),
            Ok(Value::from("1\\+1=2\\? \\(maybe\\) \\[x\\] \\^\\$"))
        );
    }
}
