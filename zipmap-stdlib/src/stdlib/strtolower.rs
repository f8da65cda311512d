// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct Strtolower;
impl Strtolower {
    pub const UUID: Uuid = uuid!("e2b57051-bd5d-4161-9357-e4bf711318fc");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Strtolower {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Strtolower {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_bytes() {
            Some(input) => Ok(Value::from_bytes(input.to_ascii_lowercase())),
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_ascii() {
        assert_eq!(
            Strtolower.apply(vec![Value::from("Mary Had A Little LAMB")].into_iter()),
            Ok(Value::from("mary had a little lamb"))
        );
        assert_eq!(
            Strtolower.apply(vec![Value::from("ÄB")].into_iter()),
            Ok(Value::from("Äb"))
        );
    }
}
