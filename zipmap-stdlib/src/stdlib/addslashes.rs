// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct Addslashes;
impl Addslashes {
    pub const UUID: Uuid = uuid!("527ccbd7-9fcb-4c59-aef4-bfad6c8af1db");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Addslashes {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Addslashes {
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
                    match byte {
                        b'\'' | b'"' | b'\\' => result.extend([b'\\', byte]),
                        0 => result.extend(b"\\0"),
                        byte => result.push(byte),
                    }
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
    fn escape_quotes() {
        assert_eq!(
            Addslashes.apply(vec![Value::from("O'Reilly \"\\\0")].into_iter()),
            Ok(Value::from("O\\'Reilly \\\"\\\\\\0"))
        );
    }
}
