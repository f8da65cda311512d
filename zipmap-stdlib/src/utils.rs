// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use crate::value::Value;

pub(crate) const DEFAULT_TRIM_CHARLIST: &[u8] = b" \t\n\r\0\x0B";

pub(crate) const ENT_HTML_QUOTE_SINGLE: i64 = 1;
pub(crate) const ENT_HTML_QUOTE_DOUBLE: i64 = 2;
pub(crate) const ENT_COMPAT: i64 = ENT_HTML_QUOTE_DOUBLE;

/// Largest string (in bytes) a builtin may allocate for its result
pub(crate) const MAX_RESULT_LENGTH: usize = i32::MAX as usize;

pub(crate) fn next_arg(args: &mut impl Iterator<Item = Value>) -> Result<Value, String> {
    args.next()
        .ok_or_else(|| String::from("Missing required argument"))
}

/// Lookup table of the bytes named in a character list, where `a..z` denotes an inclusive range
pub(crate) fn charlist_mask(charlist: &[u8]) -> [bool; 256] {
    let mut mask = [false; 256];
    let mut index = 0;
    while index < charlist.len() {
        let start = charlist[index];
        let is_range = index + 3 < charlist.len()
            && charlist[index + 1] == b'.'
            && charlist[index + 2] == b'.'
            && charlist[index + 3] >= start;
        if is_range {
            for byte in start..=charlist[index + 3] {
                mask[byte as usize] = true;
            }
            index += 4;
        } else {
            mask[start as usize] = true;
            index += 1;
        }
    }
    mask
}

pub(crate) fn trim_bytes<'a>(input: &'a [u8], mask: &[bool; 256], left: bool, right: bool) -> &'a [u8] {
    let start = if left {
        input
            .iter()
            .position(|byte| !mask[*byte as usize])
            .unwrap_or(input.len())
    } else {
        0
    };
    let end = if right {
        input
            .iter()
            .rposition(|byte| !mask[*byte as usize])
            .map(|index| index + 1)
            .unwrap_or(0)
    } else {
        input.len()
    };
    if start >= end {
        &input[0..0]
    } else {
        &input[start..end]
    }
}

/// Shared implementation of the `trim` family
pub(crate) fn apply_trim(
    mut args: impl Iterator<Item = Value>,
    left: bool,
    right: bool,
) -> Result<Value, String> {
    let target = next_arg(&mut args)?;
    let charlist = args.next();
    let mask = match &charlist {
        None => Some(charlist_mask(DEFAULT_TRIM_CHARLIST)),
        Some(charlist) => charlist.as_bytes().map(charlist_mask),
    };
    match (target.as_bytes(), mask) {
        (Some(input), Some(mask)) => Ok(Value::from_bytes(
            trim_bytes(input, &mask, left, right).to_vec(),
        )),
        _ => Err(format!(
            "Expected (String, String?), received ({}, {})",
            target,
            charlist.unwrap_or(Value::Null)
        )),
    }
}

/// Resolve an optional integer argument, falling back to a default when omitted
pub(crate) fn optional_int(arg: Option<&Value>, default: i64) -> Option<i64> {
    match arg {
        None => Some(default),
        Some(value) => value.as_int(),
    }
}

pub(crate) fn optional_bool(arg: Option<&Value>, default: bool) -> Option<bool> {
    match arg {
        None => Some(default),
        Some(value) => value.as_bool(),
    }
}

pub(crate) fn optional_bytes<'a>(arg: Option<&'a Value>, default: &'a [u8]) -> Option<&'a [u8]> {
    match arg {
        None => Some(default),
        Some(value) => value.as_bytes(),
    }
}

pub(crate) fn format_args(args: &[Option<&Value>]) -> String {
    args.iter()
        .filter_map(|arg| arg.map(|arg| format!("{}", arg)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate a computed result length, where `None` means the computation overflowed
pub(crate) fn checked_result_length(length: Option<usize>) -> Result<usize, String> {
    length
        .filter(|length| *length <= MAX_RESULT_LENGTH)
        .ok_or_else(|| String::from("Result is too big"))
}

/// Byte offset of the first occurrence of `needle` at or after `from`
pub(crate) fn find_bytes(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    let remaining = haystack.get(from..)?;
    if needle.is_empty() {
        return Some(from);
    }
    remaining
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|index| index + from)
}

/// Format a digest either as raw bytes or as a lowercase hex string
pub(crate) fn digest_output(digest: &[u8], raw: bool) -> Value {
    if raw {
        Value::from_bytes(digest.to_vec())
    } else {
        Value::String(hex::encode(digest))
    }
}

pub(crate) const NAMED_ENTITIES: [(&str, char); 24] = [
    ("nbsp", '\u{a0}'),
    ("iexcl", '¡'),
    ("cent", '¢'),
    ("pound", '£'),
    ("yen", '¥'),
    ("sect", '§'),
    ("copy", '©'),
    ("laquo", '«'),
    ("reg", '®'),
    ("deg", '°'),
    ("plusmn", '±'),
    ("micro", 'µ'),
    ("para", '¶'),
    ("middot", '·'),
    ("raquo", '»'),
    ("frac12", '½'),
    ("times", '×'),
    ("divide", '÷'),
    ("ndash", '–'),
    ("mdash", '—'),
    ("hellip", '…'),
    ("euro", '€'),
    ("trade", '™'),
    ("eacute", 'é'),
];

/// Length of the well-formed entity reference starting at `input[0] == '&'`, if any
fn entity_length(input: &str) -> Option<usize> {
    let body = input.get(1..)?;
    let end = body.find(';')?;
    let name = &body[..end];
    let is_valid = if let Some(digits) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit())
    } else if let Some(digits) = name.strip_prefix('#') {
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    } else {
        name.chars().next().map(|c| c.is_ascii_alphabetic()).unwrap_or(false)
            && name.chars().all(|c| c.is_ascii_alphanumeric())
    };
    if is_valid {
        Some(end + 2)
    } else {
        None
    }
}

pub(crate) fn encode_html(input: &str, flags: i64, double_encode: bool, all_entities: bool) -> String {
    let mut result = String::with_capacity(input.len());
    for (index, c) in input.char_indices() {
        match c {
            '&' if !double_encode && entity_length(&input[index..]).is_some() => result.push('&'),
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if flags & ENT_HTML_QUOTE_DOUBLE != 0 => result.push_str("&quot;"),
            '\'' if flags & ENT_HTML_QUOTE_SINGLE != 0 => result.push_str("&#039;"),
            c if all_entities => match NAMED_ENTITIES.iter().find(|(_, value)| *value == c) {
                Some((name, _)) => {
                    result.push('&');
                    result.push_str(name);
                    result.push(';');
                }
                None => result.push(c),
            },
            c => result.push(c),
        }
    }
    result
}

fn decode_entity(name: &str, flags: i64, all_entities: bool) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" if flags & ENT_HTML_QUOTE_DOUBLE != 0 => Some('"'),
        "#039" | "#39" | "#x27" | "#X27" if flags & ENT_HTML_QUOTE_SINGLE != 0 => Some('\''),
        "#34" | "#x22" | "#X22" if flags & ENT_HTML_QUOTE_DOUBLE != 0 => Some('"'),
        "#039" | "#39" | "#x27" | "#X27" | "#34" | "#x22" | "#X22" => None,
        _ if !all_entities => None,
        name => {
            if let Some(digits) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
            } else if let Some(digits) = name.strip_prefix('#') {
                digits.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                NAMED_ENTITIES
                    .iter()
                    .find(|(entity, _)| *entity == name)
                    .map(|(_, value)| *value)
            }
        }
    }
}

pub(crate) fn decode_html(input: &str, flags: i64, all_entities: bool) -> String {
    let mut result = String::with_capacity(input.len());
    let mut remaining = input;
    while let Some(index) = remaining.find('&') {
        result.push_str(&remaining[..index]);
        let candidate = &remaining[index..];
        let decoded = entity_length(candidate).and_then(|length| {
            decode_entity(&candidate[1..length - 1], flags, all_entities).map(|c| (c, length))
        });
        match decoded {
            Some((c, length)) => {
                result.push(c);
                remaining = &candidate[length..];
            }
            None => {
                result.push('&');
                remaining = &candidate[1..];
            }
        }
    }
    result.push_str(remaining);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charlist_ranges() {
        let mask = charlist_mask(b"a..c_");
        assert!(mask[b'a' as usize] && mask[b'b' as usize] && mask[b'c' as usize]);
        assert!(mask[b'_' as usize]);
        assert!(!mask[b'd' as usize]);
        let mask = charlist_mask(b"z..A");
        assert!(mask[b'z' as usize] && mask[b'.' as usize] && mask[b'A' as usize]);
        assert!(!mask[b'B' as usize]);
    }

    #[test]
    fn trim_both_ends() {
        let mask = charlist_mask(DEFAULT_TRIM_CHARLIST);
        assert_eq!(trim_bytes(b"  foo \n", &mask, true, true), b"foo");
        assert_eq!(trim_bytes(b"  foo \n", &mask, true, false), b"foo \n");
        assert_eq!(trim_bytes(b"  foo \n", &mask, false, true), b"  foo");
        assert_eq!(trim_bytes(b" \t ", &mask, true, true), b"");
    }

    #[test]
    fn substring_search() {
        assert_eq!(find_bytes(b"hello world", b"o", 0), Some(4));
        assert_eq!(find_bytes(b"hello world", b"o", 5), Some(7));
        assert_eq!(find_bytes(b"hello world", b"z", 0), None);
        assert_eq!(find_bytes(b"hello", b"", 2), Some(2));
        assert_eq!(find_bytes(b"hello", b"lo", 10), None);
    }

    #[test]
    fn result_length_limit() {
        assert_eq!(checked_result_length(Some(0)), Ok(0));
        assert_eq!(checked_result_length(Some(MAX_RESULT_LENGTH)), Ok(MAX_RESULT_LENGTH));
        assert_eq!(
            checked_result_length(Some(MAX_RESULT_LENGTH + 1)),
            Err(String::from("Result is too big"))
        );
        assert_eq!(
            checked_result_length(None),
            Err(String::from("Result is too big"))
        );
    }

    #[test]
    fn html_round_trip_of_special_characters() {
        let encoded = encode_html("<a href='x'>T&amp;C</a>", ENT_COMPAT, true, false);
        assert_eq!(encoded, "&lt;a href='x'&gt;T&amp;amp;C&lt;/a&gt;");
        let encoded = encode_html("T&amp;C & more", ENT_COMPAT, false, false);
        assert_eq!(encoded, "T&amp;C &amp; more");
        assert_eq!(decode_html("&lt;p&gt; &amp;amp; &foo", ENT_COMPAT, false), "<p> &amp; &foo");
    }
}
