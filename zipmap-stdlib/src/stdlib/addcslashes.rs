// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{charlist_mask, next_arg},
    value::Value,
};

pub struct Addcslashes;
impl Addcslashes {
    pub const UUID: Uuid = uuid!("d9ea41be-5e94-499e-bfa0-f39cfd806c79");
    const ARITY: FunctionArity<2, 0> = FunctionArity {
        required: [ArgType::String, ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Addcslashes {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Addcslashes {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let charlist = next_arg(&mut args)?;
        match (target.as_bytes(), charlist.as_bytes()) {
            (Some(input), Some(charlist)) => {
                let mask = charlist_mask(charlist);
                let mut result = Vec::with_capacity(input.len());
                for byte in input.iter().copied() {
                    if !mask[byte as usize] {
                        result.push(byte);
                        continue;
                    }
                    result.push(b'\\');
                    match byte {
                        b'\n' => result.push(b'n'),
                        b'\t' => result.push(b't'),
                        b'\r' => result.push(b'r'),
                        0x07 => result.push(b'a'),
                        0x0B => result.push(b'v'),
                        0x08 => result.push(b'b'),
                        0x0C => result.push(b'f'),
                        byte if byte < 32 || byte > 126 => {
                            result.extend(format!("{:03o}", byte).bytes())
                        }
                        byte => result.push(byte),
                    }
                }
                Ok(Value::from_bytes(result))
            }
            _ => Err(format!(
                "Expected (String, String), received ({}, {})",
                target, charlist
            )),
        }
    }
}
