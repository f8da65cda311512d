// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

/// Alias of `implode`
pub struct Join;
impl Join {
    pub const UUID: Uuid = uuid!("b226561b-6ed1-4063-9d96-16704cf7df1e");
    const ARITY: FunctionArity<2, 0> = FunctionArity {
        required: [ArgType::String, ArgType::List],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Join {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Join {
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
