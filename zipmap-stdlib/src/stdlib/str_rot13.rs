// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::next_arg, value::Value};

pub struct StrRot13;
impl StrRot13 {
    pub const UUID: Uuid = uuid!("d93d3b44-a496-4499-aada-9dcd5aaca2e8");
    const ARITY: FunctionArity<1, 0> = FunctionArity {
        required: [ArgType::String],
        optional: [],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for StrRot13 {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for StrRot13 {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        match target.as_bytes() {
            Some(input) => Ok(Value::from_bytes(
                input
                    .iter()
                    .map(|byte| match *byte {
                        b'a'..=b'z' => (byte - b'a' + 13) % 26 + b'a',
                        b'A'..=b'Z' => (byte - b'A' + 13) % 26 + b'A',
                        byte => byte,
                    })
                    .collect(),
            )),
            None => Err(format!("Expected String, received {}", target)),
        }
    }
}
