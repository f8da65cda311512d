// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct ConvertUuencode;
impl ConvertUuencode {
    pub const UUID: Uuid = uuid!("f04f0bd2-67de-4dd1-ad78-481f3d045c5a");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for ConvertUuencode {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for ConvertUuencode {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_bytes() {
            Some(input) => Ok(Value::from_bytes(uuencode(input))),
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}

const LINE_LENGTH: usize = 45;

fn encode_char(bits: u8) -> u8 {
    match bits & 0o77 {
        0 => b'`',
        bits => bits + b' ',
    }
}

fn uuencode(input: &[u8]) -> Vec<u8> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut result = Vec::with_capacity(input.len() * 4 / 3 + input.len() / LINE_LENGTH * 2 + 8);
    for line in input.chunks(LINE_LENGTH) {
        result.push(encode_char(line.len() as u8));
        for group in line.chunks(3) {
            let a = group[0];
            let b = group.get(1).copied().unwrap_or(0);
            let c = group.get(2).copied().unwrap_or(0);
            result.push(encode_char(a >> 2));
            result.push(encode_char((a << 4) | (b >> 4)));
            result.push(encode_char((b << 2) | (c >> 6)));
            result.push(encode_char(c));
        }
        result.push(b'\n');
    }
    result.extend(b"`\n");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_data() {
        assert_eq!(
            ConvertUuencode.apply(vec![Value::from("Cat")].into_iter()),
            Ok(Value::from("#0V%T\n`\n"))
        );
        assert_eq!(
            ConvertUuencode.apply(vec![Value::from("")].into_iter()),
            Ok(Value::from(""))
        );
    }

    #[test]
    fn wrap_long_input() {
        let input = "x".repeat(50);
        let encoded = ConvertUuencode
            .apply(vec![Value::from(input.as_str())].into_iter())
            .unwrap();
        let lines = encoded
            .as_str()
            .unwrap()
            .split('\n')
            .map(|line| line.len())
            .collect::<Vec<_>>();
        assert_eq!(lines, vec![61, 9, 1, 0]);
    }
}
