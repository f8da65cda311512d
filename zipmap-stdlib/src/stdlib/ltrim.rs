// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::apply_trim, value::Value};

pub struct Ltrim;
impl Ltrim {
    pub const UUID: Uuid = uuid!("083cab1d-8fa8-4fc2-9010-520cc4be7cd5");
    const ARITY: FunctionArity<1, 1> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::String],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Ltrim {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Ltrim {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        apply_trim(args, true, false)
    }
}
