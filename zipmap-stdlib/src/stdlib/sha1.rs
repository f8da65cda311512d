// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use sha1::{Digest, Sha1 as Sha1Hasher};
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{digest_output, format_args, next_arg, optional_bool},
    value::Value,
};

pub struct Sha1;
impl Sha1 {
    pub const UUID: Uuid = uuid!("4ad3b845-e5e4-47b9-a3cd-981979263070");
    const ARITY: FunctionArity<1, 1> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::Boolean],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Sha1 {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Sha1 {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let raw = args.next();
        match (target.as_bytes(), optional_bool(raw.as_ref(), false)) {
            (Some(input), Some(raw)) => Ok(digest_output(&Sha1Hasher::digest(input), raw)),
            _ => Err(format!(
                "Expected (String, Boolean?), received ({})",
                format_args(&[Some(&target), raw.as_ref()])
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha1_digest() {
        assert_eq!(
            Sha1.apply(vec![Value::from("apple")].into_iter()),
            Ok(Value::from("d0be2dc421be4fcd0172e5afceea3970e2f3d940"))
        );
        assert_eq!(
            Sha1.apply(vec![Value::from("apple"), Value::from("yes")].into_iter()),
            Err(String::from(
                "Expected (String, Boolean?), received (\"apple\", \"yes\")"
            ))
        );
    }
}
