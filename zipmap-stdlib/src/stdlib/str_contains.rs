// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{find_bytes, next_arg},
    value::Value,
};

pub struct StrContains;
impl StrContains {
    pub const UUID: Uuid = uuid!("d775c1f6-fd56-4448-a5b7-8346e60db777");
    const ARITY: FunctionArity<2, 0> = FunctionArity {
        required: [ArgType::String, ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for StrContains {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for StrContains {
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
            (Some(haystack), Some(needle)) => {
                Ok(Value::Boolean(find_bytes(haystack, needle, 0).is_some()))
            }
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
    fn contains_substring() {
        let contains = |haystack: &str, needle: &str| {
            StrContains.apply(vec![Value::from(haystack), Value::from(needle)].into_iter())
        };
        assert_eq!(contains("abc", "b"), Ok(Value::Boolean(true)));
        assert_eq!(contains("abc", "d"), Ok(Value::Boolean(false)));
        assert_eq!(contains("abc", ""), Ok(Value::Boolean(true)));
        assert_eq!(contains("", "a"), Ok(Value::Boolean(false)));
    }
}
