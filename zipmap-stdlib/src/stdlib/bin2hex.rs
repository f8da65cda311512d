// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct Bin2Hex;
impl Bin2Hex {
    pub const UUID: Uuid = uuid!("f11890ae-535b-4815-baed-09d82169ad03");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Bin2Hex {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Bin2Hex {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_bytes() {
            Some(input) => Ok(Value::String(hex::encode(input))),
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_encode() {
        assert_eq!(
            Bin2Hex.apply(vec![Value::from("abc")].into_iter()),
            Ok(Value::from("616263"))
        );
        assert_eq!(
            Bin2Hex.apply(vec![Value::Bytes(vec![0xde, 0xad])].into_iter()),
            Ok(Value::from("dead"))
        );
    }
}
