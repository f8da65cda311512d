// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use zipmap::core::{uuid, Applicable, ArgType, Arity, FunctionArity, Uid, Uuid};

use crate::{
    utils::{format_args, next_arg, optional_int},
    value::{FloatValue, IntValue, Value},
};

pub struct NumberFormat;
impl NumberFormat {
    pub const UUID: Uuid = uuid!("e6777830-93d9-4374-9333-0dfbcbabdbf8");
    const ARITY: FunctionArity<1, 3> = FunctionArity {
        required: [ArgType::Float],
        optional: [ArgType::Int, ArgType::String, ArgType::String],
        variadic: None,
    };
    pub fn arity() -> Arity {
        Arity::from(&Self::ARITY)
    }
}
impl Uid for NumberFormat {
    fn uid(&self) -> Uuid {
        Self::UUID
    }
}
impl Applicable<Value> for NumberFormat {
    fn arity(&self) -> Option<Arity> {
        Some(Self::arity())
    }
    fn apply(
        &self,
        mut args: impl ExactSizeIterator<Item = Value>,
    ) -> Result<Value, String> {
        let target = next_arg(&mut args)?;
        let decimals = args.next();
        let decimal_separator = args.next();
        let thousands_separator = args.next();
        match (
            target.as_float(),
            optional_int(decimals.as_ref(), 0),
            optional_str(decimal_separator.as_ref(), "."),
            optional_str(thousands_separator.as_ref(), ","),
        ) {
            (Some(value), Some(decimals), Some(decimal_separator), Some(thousands_separator)) => {
                Ok(Value::String(number_format(
                    value,
                    decimals.clamp(0, MAX_DECIMALS as IntValue) as usize,
                    decimal_separator,
                    thousands_separator,
                )))
            }
            _ => Err(format!(
                "Expected (Float, Int?, String?, String?), received ({})",
                format_args(&[
                    Some(&target),
                    decimals.as_ref(),
                    decimal_separator.as_ref(),
                    thousands_separator.as_ref(),
                ])
            )),
        }
    }
}

/// Digits beyond this are always zero for a double
const MAX_DECIMALS: usize = 1100;

/// Scaled values at or above this have no fractional part left to round
const MAX_EXACT_INTEGER: FloatValue = 9007199254740992.0;

fn optional_str<'a>(arg: Option<&'a Value>, default: &'a str) -> Option<&'a str> {
    match arg {
        None => Some(default),
        Some(value) => value.as_str(),
    }
}

fn number_format(
    value: FloatValue,
    decimals: usize,
    decimal_separator: &str,
    thousands_separator: &str,
) -> String {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    let rounded = if scaled.abs() < MAX_EXACT_INTEGER {
        scaled.round() / factor
    } else {
        value
    };
    let digits = format!("{:.*}", decimals, rounded.abs());
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };
    let mut result = String::with_capacity(digits.len() * 2);
    if rounded < 0.0 {
        result.push('-');
    }
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            result.push_str(thousands_separator);
        }
        result.push(digit);
    }
    if let Some(fraction) = fraction {
        result.push_str(decimal_separator);
        result.push_str(fraction);
    }
    result
}
