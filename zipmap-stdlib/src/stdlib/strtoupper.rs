// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct Strtoupper;
impl Strtoupper {
    pub const UUID: Uuid = uuid!("a7efbab0-0c0e-4467-ad70-f4e2c9b347ac");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Strtoupper {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Strtoupper {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_bytes() {
            Some(input) => Ok(Value::from_bytes(input.to_ascii_uppercase())),
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_ascii() {
        assert_eq!(
            Strtoupper.apply(vec![Value::from("Mary had a little lamb")].into_iter()),
            Ok(Value::from("MARY HAD A LITTLE LAMB"))
        );
    }
}
