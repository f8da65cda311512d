// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{utils::apply_trim, value::Value};

pub struct Rtrim;
impl Rtrim {
    pub const UUID: Uuid = uuid!("97b17729-0eeb-44eb-ad02-614109b02384");
    const ARITY: FunctionArity<1, 1> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::String],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Rtrim {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Rtrim {
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
