// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::apply_trim, value::Value};

pub struct Trim;
impl Trim {
    pub const UUID: Uuid = uuid!("fc9c0501-2b00-44f4-bbdc-c1624c1c793d");
    const ARITY: FunctionArity<1, 1> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::String],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Trim {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Trim {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        apply_trim(args, true, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_both_ends() {
        assert_eq!(
            Trim.apply(vec![Value::from("\t\tThese are a few words :) ...  ")].into_iter()),
            Ok(Value::from("These are a few words :) ..."))
        );
        assert_eq!(
            Trim.apply(vec![Value::from("Hello World"), Value::from("Hdle")].into_iter()),
            Ok(Value::from("o Wor"))
        );
        assert_eq!(
            Trim.apply(vec![Value::from("  x  "), Value::from(3)].into_iter()),
            Err(String::from("Expected (String, String?), received (\"  x  \", 3)"))
        );
    }
}
