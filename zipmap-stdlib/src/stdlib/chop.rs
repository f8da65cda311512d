// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::apply_trim, value::Value};

/// Alias of `rtrim`
pub struct Chop;
impl Chop {
    pub const UUID: Uuid = uuid!("de002c88-49ae-47c3-a80f-82c4d511809e");
    const ARITY: FunctionArity<1, 1> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::String],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Chop {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Chop {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        apply_trim(args, false, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chop_is_rtrim() {
        assert_eq!(
            Chop.apply(vec![Value::from("  foo  \n")].into_iter()),
            Ok(Value::from("  foo"))
        );
    }
}
