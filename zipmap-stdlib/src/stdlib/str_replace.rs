// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{find_bytes, next_arg},
    value::Value,
};

pub struct StrReplace;
impl StrReplace {
    pub const UUID: Uuid = uuid!("f13fb2c7-fa88-4e06-8863-c197dcdde7cd");
    const ARITY: FunctionArity<3, 0> = FunctionArity {
        required: [ArgType::String, ArgType::String, ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for StrReplace {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for StrReplace {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let search = next_arg(&mut args)?;
        let replace = next_arg(&mut args)?;
        let subject = next_arg(&mut args)?;
        match (search.as_bytes(), replace.as_bytes(), subject.as_bytes()) {
            (Some(search), Some(_), Some(input)) if search.is_empty() => {
                Ok(Value::from_bytes(input.to_vec()))
            }
            (Some(search), Some(replace), Some(input)) => {
                let mut result = Vec::with_capacity(input.len());
                let mut offset = 0;
                while let Some(index) = find_bytes(input, search, offset) {
                    result.extend_from_slice(&input[offset..index]);
                    result.extend_from_slice(replace);
                    offset = index + search.len();
                }
                result.extend_from_slice(&input[offset..]);
                Ok(Value::from_bytes(result))
            }
            _ => Err(format!(
                "Expected (String, String, String), received ({}, {}, {})",
                search, replace, subject
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replace(search: &str, replace: &str, subject: &str) -> Result<Value, String> {
        StrReplace.apply(
            vec![Value::from(search), Value::from(replace), Value::from(subject)].into_iter(),
        )
    }

    #[test]
    fn replace_occurrences() {
        assert_eq!(
            replace("%body%", "black", "<body text='%body%'>"),
            Ok(Value::from("<body text='black'>"))
        );
        assert_eq!(replace("aa", "b", "aaaaa"), Ok(Value::from("bba")));
        assert_eq!(replace("", "b", "abc"), Ok(Value::from("abc")));
    }
}
