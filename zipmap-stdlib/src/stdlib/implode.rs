// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct Implode;
impl Implode {
    pub const UUID: Uuid = uuid!("c82e5a03-ed3e-4202-8db5-8b25a8f812d9");
    const ARITY: FunctionArity<2, 0> = FunctionArity {
        required: [ArgType::String, ArgType::List],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Implode {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Implode {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let separator = next_arg(&mut args)?;
        let pieces = next_arg(&mut args)?;
        match (separator.as_str(), pieces.as_list()) {
            (Some(separator), Some(items)) => items
                .iter()
                .map(|item| {
                    item.to_text()
                        .ok_or_else(|| format!("Expected scalar list item, received {}", item))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|items| Value::String(items.join(separator))),
            _ => Err(format!(
                "Expected (String, List), received ({}, {})",
                separator, pieces
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_items() {
        assert_eq!(
            Implode.apply(
                vec![
                    Value::from(", "),
                    Value::List(vec![
                        Value::from("a"),
                        Value::from(1),
                        Value::from(true),
                        Value::Null
                    ]),
                ]
                .into_iter()
            ),
            Ok(Value::from("a, 1, 1, "))
        );
    }

    #[test]
    fn nested_lists() {
        assert_eq!(
            Implode.apply(
                vec![Value::from(","), Value::List(vec![Value::List(Vec::new())])].into_iter()
            ),
            Err(String::from("Expected scalar list item, received []"))
        );
    }
}
