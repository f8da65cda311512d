// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct StrStartsWith;
impl StrStartsWith {
    pub const UUID: Uuid = uuid!("ddce2058-a583-42f8-b54b-0a062173cf7b");
    const ARITY: FunctionArity<2, 0> = FunctionArity {
        required: [ArgType::String, ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for StrStartsWith {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for StrStartsWith {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let haystack = next_arg(&mut args)?;
        let needle = next_arg(&mut args)?;
        match (haystack.as_bytes(), needle.as_bytes()) {
            (Some(haystack), Some(needle)) => Ok(Value::Boolean(haystack.starts_with(needle))),
            _ => Err(format!(
                "Expected (String, String), received ({}, {})",
                haystack, needle
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_prefix() {
        assert_eq!(
            StrStartsWith.apply(vec![Value::from("zipmap"), Value::from("zip")].into_iter()),
            Ok(Value::Boolean(true))
        );
        assert_eq!(
            StrStartsWith.apply(vec![Value::from("zipmap"), Value::from("map")].into_iter()),
            Ok(Value::Boolean(false))
        );
        assert_eq!(
            StrStartsWith.apply(vec![Value::from("zipmap"), Value::from(1)].into_iter()),
            Err(String::from("Expected (String, String), received (\"zipmap\", 1)"))
        );
    }
}
