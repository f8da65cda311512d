// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::Sha256;
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{digest_output, format_args, next_arg, optional_bool},
    value::Value,
};

pub struct Hash;
impl Hash {
    pub const UUID: Uuid = uuid!("5d29164d-a8f9-4cf3-a50f-78cec2f496ae");
    const ARITY: FunctionArity<2, 1> = FunctionArity {
        required: [ArgType::String, ArgType::String],
        optional: [ArgType::Boolean],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Hash {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Hash {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let algorithm = next_arg(&mut args)?;
        let target = next_arg(&mut args)?;
        let raw = args.next();
        match (
            algorithm.as_str(),
            target.as_bytes(),
            optional_bool(raw.as_ref(), false),
        ) {
            (Some(algorithm), Some(input), Some(raw)) => {
                let digest = match algorithm.to_ascii_lowercase().as_str() {
                    "md5" => Md5::digest(input).to_vec(),
                    "sha1" => Sha1::digest(input).to_vec(),
                    "sha256" => Sha256::digest(input).to_vec(),
                    "crc32b" => crc32fast::hash(input).to_be_bytes().to_vec(),
                    _ => return Err(format!("Unknown hashing algorithm: {}", algorithm)),
                };
                Ok(digest_output(&digest, raw))
            }
            _ => Err(format!(
                "Expected (String, String, Boolean?), received ({})",
                format_args(&[Some(&algorithm), Some(&target), raw.as_ref()])
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(algorithm: &str, input: &str) -> Result<Value, String> {
        Hash.apply(vec![Value::from(algorithm), Value::from(input)].into_iter())
    }

    #[test]
    fn supported_algorithms() {
        assert_eq!(
            hash("md5", "hello"),
            Ok(Value::from("5d41402abc4b2a76b9719d911017c592"))
        );
        assert_eq!(
            hash("sha1", "hello"),
            Ok(Value::from("aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"))
        );
        assert_eq!(
            hash("SHA256", "hello"),
            Ok(Value::from(
                "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
            ))
        );
        assert_eq!(hash("crc32b", "hello"), Ok(Value::from("3610a686")));
    }

    #[test]
    fn unknown_algorithm() {
        assert_eq!(
            hash("whirlpool", "hello"),
            Err(String::from("Unknown hashing algorithm: whirlpool"))
        );
    }

    #[test]
    fn raw_output() {
        assert_eq!(
            Hash.apply(
                vec![Value::from("crc32b"), Value::from("hello"), Value::from(true)].into_iter()
            ),
            Ok(Value::Bytes(vec![0x36, 0x10, 0xa6, 0x86]))
        );
    }
}
