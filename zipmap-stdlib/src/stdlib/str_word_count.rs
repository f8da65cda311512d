// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::{IntValue, Value}};

pub struct StrWordCount;
impl StrWordCount {
    pub const UUID: Uuid = uuid!("0bc83fbc-6652-4eff-a7da-bebe9b60d216");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for StrWordCount {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for StrWordCount {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_bytes() {
            Some(input) => Ok(Value::Int(count_words(input))),
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'\'' || byte == b'-'
}

/// Words may contain but not start with `'` or `-`, and a trailing `-` is ignored
fn count_words(input: &[u8]) -> IntValue {
    let input = match input.first() {
        Some(b'\'' | b'-') => &input[1..],
        _ => input,
    };
    let input = input.strip_suffix(b"-").unwrap_or(input);
    let mut count = 0;
    let mut index = 0;
    while index < input.len() {
        let start = index;
        while index < input.len() && is_word_byte(input[index]) {
            index += 1;
        }
        if index > start {
            count += 1;
        } else {
            index += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_words_in_sentence() {
        assert_eq!(
            StrWordCount.apply(
                vec![Value::from("Hello fri3nd, you're looking good today!")].into_iter()
            ),
            Ok(Value::Int(7))
        );
        assert_eq!(
            StrWordCount.apply(vec![Value::from("-well- 'quoted' words-")].into_iter()),
            Ok(Value::Int(3))
        );
        assert_eq!(StrWordCount.apply(vec![Value::from("")].into_iter()), Ok(Value::Int(0)));
    }
}
