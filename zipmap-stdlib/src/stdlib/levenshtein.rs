// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{format_args, next_arg, optional_int},
    value::{IntValue, Value},
};

pub struct Levenshtein;
impl Levenshtein {
    pub const UUID: Uuid = uuid!("ca1c2c38-7900-4427-8ea2-b1b49daf066c");
    const ARITY: FunctionArity<2, 3> = FunctionArity {
        required: [ArgType::String, ArgType::String],
        optional: [ArgType::Int, ArgType::Int, ArgType::Int],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Levenshtein {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Levenshtein {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let source = next_arg(&mut args)?;
        let target = next_arg(&mut args)?;
        let insertion_cost = args.next();
        let replacement_cost = args.next();
        let deletion_cost = args.next();
        match (
            source.as_bytes(),
            target.as_bytes(),
            optional_int(insertion_cost.as_ref(), 1),
            optional_int(replacement_cost.as_ref(), 1),
            optional_int(deletion_cost.as_ref(), 1),
        ) {
            (Some(source), Some(target), Some(insertion), Some(replacement), Some(deletion)) => {
                Ok(Value::Int(levenshtein(
                    source,
                    target,
                    insertion,
                    replacement,
                    deletion,
                )))
            }
            _ => Err(format!(
                "Expected (String, String, Int?, Int?, Int?), received ({})",
                format_args(&[
                    Some(&source),
                    Some(&target),
                    insertion_cost.as_ref(),
                    replacement_cost.as_ref(),
                    deletion_cost.as_ref(),
                ])
            )),
        }
    }
}

fn levenshtein(
    source: &[u8],
    target: &[u8],
    insertion: IntValue,
    replacement: IntValue,
    deletion: IntValue,
) -> IntValue {
    // Costs saturate at the integer bounds rather than overflowing
    if source.is_empty() {
        return (target.len() as IntValue).saturating_mul(insertion);
    }
    if target.is_empty() {
        return (source.len() as IntValue).saturating_mul(deletion);
    }
    let mut previous = (0..=target.len())
        .map(|index| (index as IntValue).saturating_mul(insertion))
        .collect::<Vec<_>>();
    let mut current = vec![0; target.len() + 1];
    for source_byte in source {
        current[0] = previous[0].saturating_add(deletion);
        for (index, target_byte) in target.iter().enumerate() {
            let replace = previous[index]
                .saturating_add(if source_byte == target_byte { 0 } else { replacement });
            let delete = previous[index + 1].saturating_add(deletion);
            let insert = current[index].saturating_add(insertion);
            current[index + 1] = replace.min(delete).min(insert);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[target.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(args: Vec<Value>) -> Result<Value, String> {
        Levenshtein.apply(args.into_iter())
    }

    #[test]
    fn edit_distance() {
        assert_eq!(
            distance(vec![Value::from("kitten"), Value::from("sitting")]),
            Ok(Value::Int(3))
        );
        assert_eq!(distance(vec![Value::from(""), Value::from("abc")]), Ok(Value::Int(3)));
        assert_eq!(distance(vec![Value::from("abc"), Value::from("abc")]), Ok(Value::Int(0)));
    }

    #[test]
    fn weighted_edit_distance() {
        assert_eq!(
            distance(vec![
                Value::from("abc"),
                Value::from("abd"),
                Value::from(1),
                Value::from(5),
                Value::from(1),
            ]),
            Ok(Value::Int(2))
        );
        assert_eq!(
            distance(vec![
                Value::from("ab"),
                Value::from(""),
                Value::from(1),
                Value::from(1),
                Value::from(4),
            ]),
            Ok(Value::Int(8))
        );
    }

    #[test]
    fn saturating_costs() {
        assert_eq!(
            distance(vec![
                Value::from(""),
                Value::from("abc"),
                Value::Int(IntValue::MAX),
                Value::from(1),
                Value::from(1),
            ]),
            Ok(Value::Int(IntValue::MAX))
        );
        assert_eq!(
            distance(vec![
                Value::from("ab"),
                Value::from("cd"),
                Value::Int(IntValue::MAX),
                Value::Int(IntValue::MAX),
                Value::Int(IntValue::MAX),
            ]),
            Ok(Value::Int(IntValue::MAX))
        );
        assert_eq!(
            distance(vec![
                Value::from("ab"),
                Value::from("abc"),
                Value::Int(IntValue::MIN),
                Value::Int(IntValue::MIN),
                Value::Int(IntValue::MIN),
            ]),
            Ok(Value::Int(IntValue::MIN))
        );
    }
}
