// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{format_args, next_arg, optional_int},
    value::{IntValue, Value},
};

pub struct Explode;
impl Explode {
    pub const UUID: Uuid = uuid!("2bd7e1ab-a9d8-4f4c-8842-ea72b9cd7044");
    const ARITY: FunctionArity<2, 1> = FunctionArity {
        required: [ArgType::String, ArgType::String],
        optional: [ArgType::Int],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Explode {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Explode {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let separator = next_arg(&mut args)?;
        let target = next_arg(&mut args)?;
        let limit = args.next();
        match (
            separator.as_str(),
            target.as_str(),
            optional_int(limit.as_ref(), IntValue::MAX),
        ) {
            (Some(""), Some(_), Some(_)) => Err(String::from("Separator cannot be empty")),
            (Some(separator), Some(input), Some(limit)) => {
                let items: Vec<&str> = if limit > 0 {
                    input
                        .splitn(usize::try_from(limit).unwrap_or(usize::MAX), separator)
                        .collect()
                } else if limit == 0 {
                    vec![input]
                } else {
                    let items = input.split(separator).collect::<Vec<_>>();
                    let num_items = items
                        .len()
                        .saturating_sub(usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX));
                    items.into_iter().take(num_items).collect()
                };
                Ok(Value::List(items.into_iter().map(Value::from).collect()))
            }
            _ => Err(format!(
                "Expected (String, String, Int?), received ({})",
                format_args(&[Some(&separator), Some(&target), limit.as_ref()])
            )),
        }
    }
}
