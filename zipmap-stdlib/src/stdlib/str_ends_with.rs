// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct StrEndsWith;
impl StrEndsWith {
    pub const UUID: Uuid = uuid!("143d978b-9c49-493d-92d3-10269c70dbd0");
    const ARITY: FunctionArity<2, 0> = FunctionArity {
        required: [ArgType::String, ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for StrEndsWith {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for StrEndsWith {
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
            (Some(haystack), Some(needle)) => Ok(Value::Boolean(haystack.ends_with(needle))),
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
    fn ends_with_suffix() {
        assert_eq!(
            StrEndsWith.apply(vec![Value::from("file.rs"), Value::from(".rs")].into_iter()),
            Ok(Value::Boolean(true))
        );
        assert_eq!(
            StrEndsWith.apply(vec![Value::from("file.rs"), Value::from("file")].into_iter()),
            Ok(Value::Boolean(false))
        );
    }
}
