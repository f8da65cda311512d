// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{decode_html, format_args, next_arg, optional_int, ENT_COMPAT},
    value::Value,
};

pub struct HtmlspecialcharsDecode;
impl HtmlspecialcharsDecode {
    pub const UUID: Uuid = uuid!("cd1fd753-a98f-4384-818a-d2f1b05d4e86");
    const ARITY: FunctionArity<1, 1> = FunctionArity {
        required: [ArgType::String],
        optional: [ArgType::Int],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for HtmlspecialcharsDecode {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for HtmlspecialcharsDecode {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let flags = args.next();
        match (target.as_str(), optional_int(flags.as_ref(), ENT_COMPAT)) {
            (Some(input), Some(flags)) => Ok(Value::String(decode_html(input, flags, false))),
            _ => Err(format!(
                "Expected (String, Int?), received ({})",
                format_args(&[Some(&target), flags.as_ref()])
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_special_characters() {
        assert_eq!(
            HtmlspecialcharsDecode.apply(
                vec![Value::from("<p>this -&gt; &quot;</p> &copy;")].into_iter()
            ),
            Ok(Value::from("<p>this -> \"</p> &copy;"))
        );
        assert_eq!(
            HtmlspecialcharsDecode.apply(
                vec![Value::from("<p>this -&gt; &quot;</p>"), Value::from(0)].into_iter()
            ),
            Ok(Value::from("<p>this -> &quot;</p>"))
        );
    }
}
