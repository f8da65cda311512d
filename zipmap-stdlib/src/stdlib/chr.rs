// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct Chr;
impl Chr {
    pub const UUID: Uuid = uuid!("2152a80e-325e-4d60-b1ca-60875d3cc38f");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::Int],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Chr {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Chr {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_int() {
            Some(code) => Ok(Value::from_bytes(vec![code.rem_euclid(256) as u8])),
            None => Err(format!("Expected Int, received {}", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_from_code() {
        assert_eq!(Chr.apply(vec![Value::from(65)].into_iter()), Ok(Value::from("A")));
        assert_eq!(Chr.apply(vec![Value::from(321)].into_iter()), Ok(Value::from("A")));
        assert_eq!(Chr.apply(vec![Value::from(-159)].into_iter()), Ok(Value::from("a")));
        assert_eq!(
            Chr.apply(vec![Value::from(255)].into_iter()),
            Ok(Value::Bytes(vec![255]))
        );
    }
}
