// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{format_args, next_arg, optional_int},
    value::{IntValue, Value},
};

pub struct CountChars;
impl CountChars {
    pub const UUID: Uuid = uuid!("c5c68626-0c3e-4666-b530-02e1fba0c4d3");
    const ARITY: FunctionArity<1, 1> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::Int],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for CountChars {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for CountChars {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let mode = args.next();
        match (target.as_bytes(), optional_int(mode.as_ref(), 0)) {
            (Some(input), Some(mode)) => {
                let mut counts = [0 as IntValue; 256];
                for byte in input {
                    counts[*byte as usize] += 1;
                }
                let pairs = |used: bool| {
                    Value::List(
                        counts
                            .iter()
                            .enumerate()
                            .filter(|(_, count)| (**count > 0) == used)
                            .map(|(byte, count)| {
                                Value::List(vec![Value::Int(byte as IntValue), Value::Int(*count)])
                            })
                            .collect(),
                    )
                };
                let bytes = |used: bool| {
                    Value::from_bytes(
                        (0..=255u8)
                            .filter(|byte| (counts[*byte as usize] > 0) == used)
                            .collect(),
                    )
                };
                match mode {
                    0 => Ok(Value::List(counts.iter().copied().map(Value::Int).collect())),
                    1 => Ok(pairs(true)),
                    2 => Ok(pairs(false)),
                    3 => Ok(bytes(true)),
                    4 => Ok(bytes(false)),
                    _ => Err(String::from("Mode must be between 0 and 4 (inclusive)")),
                }
            }
            _ => Err(format!(
                "Expected (String, Int?), received ({})",
                format_args(&[Some(&target), mode.as_ref()])
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_byte_occurrences() {
        let result = CountChars
            .apply(vec![Value::from("abba")].into_iter())
            .unwrap();
        let counts = result.as_list().unwrap();
        assert_eq!(counts.len(), 256);
        assert_eq!(counts[b'a' as usize], Value::Int(2));
        assert_eq!(counts[b'c' as usize], Value::Int(0));
        assert_eq!(
            CountChars.apply(vec![Value::from("abba"), Value::from(1)].into_iter()),
            Ok(Value::List(vec![
                Value::List(vec![Value::Int(97), Value::Int(2)]),
                Value::List(vec![Value::Int(98), Value::Int(2)]),
            ]))
        );
    }

    #[test]
    fn unique_bytes() {
        assert_eq!(
            CountChars.apply(vec![Value::from("Two Ts and one F."), Value::from(3)].into_iter()),
            Ok(Value::from(" .FTadenosw"))
        );
        assert_eq!(
            CountChars.apply(vec![Value::from("abc"), Value::from(5)].into_iter()),
            Err(String::from("Mode must be between 0 and 4 (inclusive)"))
        );
    }
}
