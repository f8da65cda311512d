// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use base64::{engine::general_purpose::STANDARD, Engine};
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct Base64Decode;
impl Base64Decode {
    pub const UUID: Uuid = uuid!("42bea2bd-7f64-4e23-aab0-cf52fa016ebb");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Base64Decode {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Base64Decode {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_bytes() {
            Some(input) => STANDARD
                .decode(input)
                .map(Value::from_bytes)
                .map_err(|err| format!("Invalid base64 input: {}", err)),
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_base64() {
        assert_eq!(
            Base64Decode.apply(vec![Value::from("aGVsbG8gd29ybGQ=")].into_iter()),
            Ok(Value::from("hello world"))
        );
        assert_eq!(
            Base64Decode.apply(vec![Value::from("/w==")].into_iter()),
            Ok(Value::Bytes(vec![0xff]))
        );
        assert!(Base64Decode
            .apply(vec![Value::from("not base64!")].into_iter())
            .is_err());
    }
}
