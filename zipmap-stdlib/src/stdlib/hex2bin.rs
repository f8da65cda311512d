// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use hex::FromHexError;
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct Hex2Bin;
impl Hex2Bin {
    pub const UUID: Uuid = uuid!("cfb3d706-64bb-436e-ad1b-f1b1a559ced3");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Hex2Bin {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Hex2Bin {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_bytes() {
            Some(input) => match hex::decode(input) {
                Ok(bytes) => Ok(Value::from_bytes(bytes)),
                Err(FromHexError::OddLength) => Err(String::from(
                    "Hexadecimal input string must have an even length",
                )),
                Err(_) => Err(String::from("Input string must be hexadecimal string")),
            },
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_decode() {
        assert_eq!(
            Hex2Bin.apply(vec![Value::from("6578616d706c65")].into_iter()),
            Ok(Value::from("example"))
        );
        assert_eq!(
            Hex2Bin.apply(vec![Value::from("ff")].into_iter()),
            Ok(Value::Bytes(vec![0xff]))
        );
    }

    #[test]
    fn invalid_hex() {
        assert_eq!(
            Hex2Bin.apply(vec![Value::from("abc")].into_iter()),
            Err(String::from("Hexadecimal input string must have an even length"))
        );
        assert_eq!(
            Hex2Bin.apply(vec![Value::from("zz")].into_iter()),
            Err(String::from("Input string must be hexadecimal string"))
        );
    }
}
