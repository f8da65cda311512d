// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{format_args, next_arg, optional_bytes, optional_int},
    value::Value,
};

pub struct ChunkSplit;
impl ChunkSplit {
    pub const UUID: Uuid = uuid!("04aaa6f2-b37e-4142-90c1-366ae3ba1bdd");
    const ARITY: FunctionArity<1, 2> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::Int, ArgType::String],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for ChunkSplit {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for ChunkSplit {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let length = args.next();
        let separator = args.next();
        match (
            target.as_bytes(),
            optional_int(length.as_ref(), 76),
            optional_bytes(separator.as_ref(), b"\r\n"),
        ) {
            (Some(_), Some(length), Some(_)) if length < 1 => {
                Err(String::from("Chunk length must be greater than 0"))
            }
            (Some(input), Some(length), Some(separator)) => {
                let mut result = Vec::with_capacity(input.len() + separator.len());
                if input.is_empty() {
                    result.extend_from_slice(separator);
                }
                for chunk in input.chunks(length as usize) {
                    result.extend_from_slice(chunk);
                    result.extend_from_slice(separator);
                }
                Ok(Value::from_bytes(result))
            }
            _ => Err(format!(
                "Expected (String, Int?, String?), received ({})",
                format_args(&[Some(&target), length.as_ref(), separator.as_ref()])
            )),
        }
    }
}
