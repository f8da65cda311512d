// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct ConvertUudecode;
impl ConvertUudecode {
    pub const UUID: Uuid = uuid!("01315462-32b8-48bb-94fe-a0214313e963");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for ConvertUudecode {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for ConvertUudecode {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_bytes() {
            Some(input) => uudecode(input).map(Value::from_bytes),
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}

fn decode_char(byte: u8) -> u8 {
    byte.wrapping_sub(b' ') & 0o77
}

fn uudecode(input: &[u8]) -> Result<Vec<u8>, String> {
    let mut result = Vec::with_capacity(input.len() * 3 / 4);
    for line in input.split(|byte| *byte == b'\n') {
        let (length, encoded) = match line.split_first() {
            None => continue,
            Some((length, encoded)) => (decode_char(*length) as usize, encoded),
        };
        if length == 0 {
            return Ok(result);
        }
        let num_chars = (length + 2) / 3 * 4;
        if encoded.len() < num_chars {
            return Err(String::from("Argument is not a validly uuencoded string"));
        }
        let mut decoded = Vec::with_capacity(num_chars / 4 * 3);
        for group in encoded[..num_chars].chunks(4) {
            let [a, b, c, d] = [group[0], group[1], group[2], group[3]].map(decode_char);
            decoded.push((a << 2) | (b >> 4));
            decoded.push((b << 4) | (c >> 2));
            decoded.push((c << 6) | d);
        }
        decoded.truncate(length);
        result.extend(decoded);
    }
    Err(String::from("Argument is not a validly uuencoded string"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_uuencoded_data() {
        assert_eq!(
            ConvertUudecode.apply(vec![Value::from("#0V%T\n`\n")].into_iter()),
            Ok(Value::from("Cat"))
        );
        assert_eq!(
            ConvertUudecode.apply(vec![Value::from("\"0V$`\n`\n")].into_iter()),
            Ok(Value::from("Ca"))
        );
    }

    #[test]
    fn malformed_input() {
        assert!(ConvertUudecode
            .apply(vec![Value::from("#0V\n`\n")].into_iter())
            .is_err());
        assert!(ConvertUudecode
            .apply(vec![Value::from("#0V%T\n")].into_iter())
            .is_err());
    }
}
