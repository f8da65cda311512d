// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{encode_html, format_args, next_arg, optional_bool, optional_int, ENT_COMPAT},
    value::Value,
};

pub struct Htmlspecialchars;
impl Htmlspecialchars {
    pub const UUID: Uuid = uuid!("1cb7edcc-c189-4715-abff-91f8c65e8172");
    const ARITY: FunctionArity<1, 2> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::Int, ArgType::Boolean],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for Htmlspecialchars {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for Htmlspecialchars {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let flags = args.next();
        let double_encode = args.next();
        match (
            target.as_str(),
            optional_int(flags.as_ref(), ENT_COMPAT),
            optional_bool(double_encode.as_ref(), true),
        ) {
            (Some(input), Some(flags), Some(double_encode)) => Ok(Value::String(encode_html(
                input,
                flags,
                double_encode,
                false,
            ))),
            _ => Err(format!(
                "Expected (String, Int?, Boolean?), received ({})",
                format_args(&[Some(&target), flags.as_ref(), double_encode.as_ref()])
            )),
        }
    }
}
