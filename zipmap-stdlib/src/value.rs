// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use zipmap::core::Truthy;

pub type IntValue = i64;
pub type FloatValue = f64;

/// Dynamically-typed scalar passed into and out of builtin functions
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Boolean(bool),
    Int(IntValue),
    Float(FloatValue),
    String(String),
    List(Vec<Value>),
    /** Byte string that is not valid UTF-8 */
    Bytes(Vec<u8>),
}
impl Value {
    /// Wrap the output of a byte-oriented operation, preferring `String` where possible
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(value) => Self::String(value),
            Err(err) => Self::Bytes(err.into_bytes()),
        }
    }
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::List(_) => "List",
            Self::Bytes(_) => "Bytes",
        }
    }
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }
    /// Raw bytes of string-like values
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::String(value) => Some(value.as_bytes()),
            Self::Bytes(value) => Some(value.as_slice()),
            _ => None,
        }
    }
    pub fn as_int(&self) -> Option<IntValue> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(value) if value.fract() == 0.0 => Some(*value as IntValue),
            _ => None,
        }
    }
    pub fn as_float(&self) -> Option<FloatValue> {
        match self {
            Self::Int(value) => Some(*value as FloatValue),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
    /// String form of a scalar value when it is joined or printed, or `None` for lists
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => Some(Cow::Borrowed("")),
            Self::Boolean(true) => Some(Cow::Borrowed("1")),
            Self::Boolean(false) => Some(Cow::Borrowed("")),
            Self::Int(value) => Some(Cow::Owned(format!("{}", value))),
            Self::Float(value) => Some(Cow::Owned(format!("{}", value))),
            Self::String(value) => Some(Cow::Borrowed(value.as_str())),
            Self::Bytes(value) => Some(String::from_utf8_lossy(value)),
            Self::List(_) => None,
        }
    }
}
impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Boolean(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::String(value) => !value.is_empty() && value != "0",
            Self::List(items) => !items.is_empty(),
            Self::Bytes(value) => !value.is_empty(),
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(value) => write!(f, "{}", value),
            Self::Int(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::String(value) => write!(f, "{:?}", value),
            Self::Bytes(value) => write!(f, "<{} bytes>", value.len()),
            Self::List(items) => write!(
                f,
                "[{}]",
                items
                    .iter()
                    .map(|item| format!("{}", item))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl From<IntValue> for Value {
    fn from(value: IntValue) -> Self {
        Self::Int(value)
    }
}
impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value as IntValue)
    }
}
impl From<FloatValue> for Value {
    fn from(value: FloatValue) -> Self {
        Self::Float(value)
    }
}
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}
impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(value) => Self::Boolean(value),
            serde_json::Value::Number(value) => match value.as_i64() {
                Some(value) => Self::Int(value),
                None => Self::Float(value.as_f64().unwrap_or(FloatValue::NAN)),
            },
            serde_json::Value::String(value) => Self::String(value),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::List(
                entries
                    .into_iter()
                    .map(|(key, value)| Self::List(vec![Self::String(key), Self::from(value)]))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_strings() {
        assert_eq!(
            Value::from_bytes(b"hello".to_vec()),
            Value::String(String::from("hello"))
        );
        assert_eq!(
            Value::from_bytes(vec![0xff, 0xfe]),
            Value::Bytes(vec![0xff, 0xfe])
        );
        assert_eq!(Value::Bytes(vec![0xff]).as_bytes(), Some(&[0xff][..]));
        assert_eq!(Value::Bytes(vec![0xff]).as_str(), None);
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from("0").is_truthy());
        assert!(Value::from("00").is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(Value::from(-1).is_truthy());
        assert!(!Value::List(Vec::new()).is_truthy());
    }

    #[test]
    fn text_conversion() {
        assert_eq!(Value::from(true).to_text().as_deref(), Some("1"));
        assert_eq!(Value::from(false).to_text().as_deref(), Some(""));
        assert_eq!(Value::from(3).to_text().as_deref(), Some("3"));
        assert_eq!(Value::from(1.5).to_text().as_deref(), Some("1.5"));
        assert_eq!(Value::List(Vec::new()).to_text(), None);
    }

    #[test]
    fn json_conversion() {
        let value = Value::from(serde_json::json!([1, 2.5, "foo", null, true]));
        assert_eq!(
            value,
            Value::List(vec![
                Value::Int(1),
                Value::Float(2.5),
                Value::from("foo"),
                Value::Null,
                Value::Boolean(true),
            ])
        );
        assert_eq!(
            format!("{}", value),
            "[1, 2.5, \"foo\", null, true]"
        );
        assert_eq!(
            serde_json::to_string(&Value::from("foo")).unwrap(),
            "\"foo\""
        );
    }
}
