// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::convert::TryFrom;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};
use tracing::trace;
use zipmap::core::{Applicable, Arity, Uid, Uuid};

use crate::value::Value;

pub use addcslashes::*;
pub use addslashes::*;
pub use base64_decode::*;
pub use base64_encode::*;
pub use bin2hex::*;
pub use chop::*;
pub use chr::*;
pub use chunk_split::*;
pub use convert_uudecode::*;
pub use convert_uuencode::*;
pub use count_chars::*;
pub use crc32::*;
pub use explode::*;
pub use hash::*;
pub use hex2bin::*;
pub use html_entity_decode::*;
pub use htmlentities::*;
pub use htmlspecialchars::*;
pub use htmlspecialchars_decode::*;
pub use implode::*;
pub use join::*;
pub use lcfirst::*;
pub use levenshtein::*;
pub use ltrim::*;
pub use md5::*;
pub use md5_file::*;
pub use nl2br::*;
pub use number_format::*;
pub use ord::*;
pub use quotemeta::*;
pub use rtrim::*;
pub use sha1::*;
pub use str_contains::*;
pub use str_ends_with::*;
pub use str_pad::*;
pub use str_repeat::*;
pub use str_replace::*;
pub use str_rot13::*;
pub use str_split::*;
pub use str_starts_with::*;
pub use str_word_count::*;
pub use strlen::*;
pub use strpos::*;
pub use strrev::*;
pub use strtolower::*;
pub use strtoupper::*;
pub use substr::*;
pub use trim::*;
pub use ucfirst::*;
pub use ucwords::*;
pub use wordwrap::*;

mod addcslashes;
mod addslashes;
mod base64_decode;
mod base64_encode;
mod bin2hex;
mod chop;
mod chr;
mod chunk_split;
mod convert_uudecode;
mod convert_uuencode;
mod count_chars;
mod crc32;
mod explode;
mod hash;
mod hex2bin;
mod html_entity_decode;
mod htmlentities;
mod htmlspecialchars;
mod htmlspecialchars_decode;
mod implode;
mod join;
mod lcfirst;
mod levenshtein;
mod ltrim;
mod md5;
mod md5_file;
mod nl2br;
mod number_format;
mod ord;
mod quotemeta;
mod rtrim;
mod sha1;
mod str_contains;
mod str_ends_with;
mod str_pad;
mod str_repeat;
mod str_replace;
mod str_rot13;
mod str_split;
mod str_starts_with;
mod str_word_count;
mod strlen;
mod strpos;
mod strrev;
mod strtolower;
mod strtoupper;
mod substr;
mod trim;
mod ucfirst;
mod ucwords;
mod wordwrap;

/// Builtin functions addressable by name or by UUID
#[derive(
    Hash,
    Eq,
    PartialEq,
    Clone,
    Copy,
    Debug,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Stdlib {
    #[serde(rename = "addcslashes")]
    #[strum(serialize = "addcslashes")]
    Addcslashes,
    #[serde(rename = "addslashes")]
    #[strum(serialize = "addslashes")]
    Addslashes,
    #[serde(rename = "base64_decode")]
    #[strum(serialize = "base64_decode")]
    Base64Decode,
    #[serde(rename = "base64_encode")]
    #[strum(serialize = "base64_encode")]
    Base64Encode,
    #[serde(rename = "bin2hex")]
    #[strum(serialize = "bin2hex")]
    Bin2Hex,
    #[serde(rename = "chop")]
    #[strum(serialize = "chop")]
    Chop,
    #[serde(rename = "chr")]
    #[strum(serialize = "chr")]
    Chr,
    #[serde(rename = "chunk_split")]
    #[strum(serialize = "chunk_split")]
    ChunkSplit,
    #[serde(rename = "convert_uudecode")]
    #[strum(serialize = "convert_uudecode")]
    ConvertUudecode,
    #[serde(rename = "convert_uuencode")]
    #[strum(serialize = "convert_uuencode")]
    ConvertUuencode,
    #[serde(rename = "count_chars")]
    #[strum(serialize = "count_chars")]
    CountChars,
    #[serde(rename = "crc32")]
    #[strum(serialize = "crc32")]
    Crc32,
    #[serde(rename = "explode")]
    #[strum(serialize = "explode")]
    Explode,
    #[serde(rename = "hash")]
    #[strum(serialize = "hash")]
    Hash,
    #[serde(rename = "hex2bin")]
    #[strum(serialize = "hex2bin")]
    Hex2Bin,
    #[serde(rename = "html_entity_decode")]
    #[strum(serialize = "html_entity_decode")]
    HtmlEntityDecode,
    #[serde(rename = "htmlentities")]
    #[strum(serialize = "htmlentities")]
    Htmlentities,
    #[serde(rename = "htmlspecialchars")]
    #[strum(serialize = "htmlspecialchars")]
    Htmlspecialchars,
    #[serde(rename = "htmlspecialchars_decode")]
    #[strum(serialize = "htmlspecialchars_decode")]
    HtmlspecialcharsDecode,
    #[serde(rename = "implode")]
    #[strum(serialize = "implode")]
    Implode,
    #[serde(rename = "join")]
    #[strum(serialize = "join")]
    Join,
    #[serde(rename = "lcfirst")]
    #[strum(serialize = "lcfirst")]
    Lcfirst,
    #[serde(rename = "levenshtein")]
    #[strum(serialize = "levenshtein")]
    Levenshtein,
    #[serde(rename = "ltrim")]
    #[strum(serialize = "ltrim")]
    Ltrim,
    #[serde(rename = "md5")]
    #[strum(serialize = "md5")]
    Md5,
    #[serde(rename = "md5_file")]
    #[strum(serialize = "md5_file")]
    Md5File,
    #[serde(rename = "nl2br")]
    #[strum(serialize = "nl2br")]
    Nl2br,
    #[serde(rename = "number_format")]
    #[strum(serialize = "number_format")]
    NumberFormat,
    #[serde(rename = "ord")]
    #[strum(serialize = "ord")]
    Ord,
    #[serde(rename = "quotemeta")]
    #[strum(serialize = "quotemeta")]
    Quotemeta,
    #[serde(rename = "rtrim")]
    #[strum(serialize = "rtrim")]
    Rtrim,
    #[serde(rename = "sha1")]
    #[strum(serialize = "sha1")]
    Sha1,
    #[serde(rename = "str_contains")]
    #[strum(serialize = "str_contains")]
    StrContains,
    #[serde(rename = "str_ends_with")]
    #[strum(serialize = "str_ends_with")]
    StrEndsWith,
    #[serde(rename = "str_pad")]
    #[strum(serialize = "str_pad")]
    StrPad,
    #[serde(rename = "str_repeat")]
    #[strum(serialize = "str_repeat")]
    StrRepeat,
    #[serde(rename = "str_replace")]
    #[strum(serialize = "str_replace")]
    StrReplace,
    #[serde(rename = "str_rot13")]
    #[strum(serialize = "str_rot13")]
    StrRot13,
    #[serde(rename = "str_split")]
    #[strum(serialize = "str_split")]
    StrSplit,
    #[serde(rename = "str_starts_with")]
    #[strum(serialize = "str_starts_with")]
    StrStartsWith,
    #[serde(rename = "str_word_count")]
    #[strum(serialize = "str_word_count")]
    StrWordCount,
    #[serde(rename = "strlen")]
    #[strum(serialize = "strlen")]
    Strlen,
    #[serde(rename = "strpos")]
    #[strum(serialize = "strpos")]
    Strpos,
    #[serde(rename = "strrev")]
    #[strum(serialize = "strrev")]
    Strrev,
    #[serde(rename = "strtolower")]
    #[strum(serialize = "strtolower")]
    Strtolower,
    #[serde(rename = "strtoupper")]
    #[strum(serialize = "strtoupper")]
    Strtoupper,
    #[serde(rename = "substr")]
    #[strum(serialize = "substr")]
    Substr,
    #[serde(rename = "trim")]
    #[strum(serialize = "trim")]
    Trim,
    #[serde(rename = "ucfirst")]
    #[strum(serialize = "ucfirst")]
    Ucfirst,
    #[serde(rename = "ucwords")]
    #[strum(serialize = "ucwords")]
    Ucwords,
    #[serde(rename = "wordwrap")]
    #[strum(serialize = "wordwrap")]
    Wordwrap,
}
impl Stdlib {
    pub fn entries() -> impl Iterator<Item = Self> {
        Self::iter()
    }
    pub fn name(&self) -> &'static str {
        self.into()
    }
}
impl std::fmt::Display for Stdlib {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl TryFrom<Uuid> for Stdlib {
    type Error = ();
    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        match uuid {
            Addcslashes::UUID => Ok(Self::Addcslashes),
            Addslashes::UUID => Ok(Self::Addslashes),
            Base64Decode::UUID => Ok(Self::Base64Decode),
            Base64Encode::UUID => Ok(Self::Base64Encode),
            Bin2Hex::UUID => Ok(Self::Bin2Hex),
            Chop::UUID => Ok(Self::Chop),
            Chr::UUID => Ok(Self::Chr),
            ChunkSplit::UUID => Ok(Self::ChunkSplit),
            ConvertUudecode::UUID => Ok(Self::ConvertUudecode),
            ConvertUuencode::UUID => Ok(Self::ConvertUuencode),
            CountChars::UUID => Ok(Self::CountChars),
            Crc32::UUID => Ok(Self::Crc32),
            Explode::UUID => Ok(Self::Explode),
            Hash::UUID => Ok(Self::Hash),
            Hex2Bin::UUID => Ok(Self::Hex2Bin),
            HtmlEntityDecode::UUID => Ok(Self::HtmlEntityDecode),
            Htmlentities::UUID => Ok(Self::Htmlentities),
            Htmlspecialchars::UUID => Ok(Self::Htmlspecialchars),
            HtmlspecialcharsDecode::UUID => Ok(Self::HtmlspecialcharsDecode),
            Implode::UUID => Ok(Self::Implode),
            Join::UUID => Ok(Self::Join),
            Lcfirst::UUID => Ok(Self::Lcfirst),
            Levenshtein::UUID => Ok(Self::Levenshtein),
            Ltrim::UUID => Ok(Self::Ltrim),
            Md5::UUID => Ok(Self::Md5),
            Md5File::UUID => Ok(Self::Md5File),
            Nl2br::UUID => Ok(Self::Nl2br),
            NumberFormat::UUID => Ok(Self::NumberFormat),
            Ord::UUID => Ok(Self::Ord),
            Quotemeta::UUID => Ok(Self::Quotemeta),
            Rtrim::UUID => Ok(Self::Rtrim),
            Sha1::UUID => Ok(Self::Sha1),
            StrContains::UUID => Ok(Self::StrContains),
            StrEndsWith::UUID => Ok(Self::StrEndsWith),
            StrPad::UUID => Ok(Self::StrPad),
            StrRepeat::UUID => Ok(Self::StrRepeat),
            StrReplace::UUID => Ok(Self::StrReplace),
            StrRot13::UUID => Ok(Self::StrRot13),
            StrSplit::UUID => Ok(Self::StrSplit),
            StrStartsWith::UUID => Ok(Self::StrStartsWith),
            StrWordCount::UUID => Ok(Self::StrWordCount),
            Strlen::UUID => Ok(Self::Strlen),
            Strpos::UUID => Ok(Self::Strpos),
            Strrev::UUID => Ok(Self::Strrev),
            Strtolower::UUID => Ok(Self::Strtolower),
            Strtoupper::UUID => Ok(Self::Strtoupper),
            Substr::UUID => Ok(Self::Substr),
            Trim::UUID => Ok(Self::Trim),
            Ucfirst::UUID => Ok(Self::Ucfirst),
            Ucwords::UUID => Ok(Self::Ucwords),
            Wordwrap::UUID => Ok(Self::Wordwrap),
            _ => Err(()),
        }
    }
}
impl Uid for Stdlib {
    fn uid(&self) -> Uuid {
        match self {
            Self::Addcslashes => Uid::uid(&Addcslashes),
            Self::Addslashes => Uid::uid(&Addslashes),
            Self::Base64Decode => Uid::uid(&Base64Decode),
            Self::Base64Encode => Uid::uid(&Base64Encode),
            Self::Bin2Hex => Uid::uid(&Bin2Hex),
            Self::Chop => Uid::uid(&Chop),
            Self::Chr => Uid::uid(&Chr),
            Self::ChunkSplit => Uid::uid(&ChunkSplit),
            Self::ConvertUudecode => Uid::uid(&ConvertUudecode),
            Self::ConvertUuencode => Uid::uid(&ConvertUuencode),
            Self::CountChars => Uid::uid(&CountChars),
            Self::Crc32 => Uid::uid(&Crc32),
            Self::Explode => Uid::uid(&Explode),
            Self::Hash => Uid::uid(&Hash),
            Self::Hex2Bin => Uid::uid(&Hex2Bin),
            Self::HtmlEntityDecode => Uid::uid(&HtmlEntityDecode),
            Self::Htmlentities => Uid::uid(&Htmlentities),
            Self::Htmlspecialchars => Uid::uid(&Htmlspecialchars),
            Self::HtmlspecialcharsDecode => Uid::uid(&HtmlspecialcharsDecode),
            Self::Implode => Uid::uid(&Implode),
            Self::Join => Uid::uid(&Join),
            Self::Lcfirst => Uid::uid(&Lcfirst),
            Self::Levenshtein => Uid::uid(&Levenshtein),
            Self::Ltrim => Uid::uid(&Ltrim),
            Self::Md5 => Uid::uid(&Md5),
            Self::Md5File => Uid::uid(&Md5File),
            Self::Nl2br => Uid::uid(&Nl2br),
            Self::NumberFormat => Uid::uid(&NumberFormat),
            Self::Ord => Uid::uid(&Ord),
            Self::Quotemeta => Uid::uid(&Quotemeta),
            Self::Rtrim => Uid::uid(&Rtrim),
            Self::Sha1 => Uid::uid(&Sha1),
            Self::StrContains => Uid::uid(&StrContains),
            Self::StrEndsWith => Uid::uid(&StrEndsWith),
            Self::StrPad => Uid::uid(&StrPad),
            Self::StrRepeat => Uid::uid(&StrRepeat),
            Self::StrReplace => Uid::uid(&StrReplace),
            Self::StrRot13 => Uid::uid(&StrRot13),
            Self::StrSplit => Uid::uid(&StrSplit),
            Self::StrStartsWith => Uid::uid(&StrStartsWith),
            Self::StrWordCount => Uid::uid(&StrWordCount),
            Self::Strlen => Uid::uid(&Strlen),
            Self::Strpos => Uid::uid(&Strpos),
            Self::Strrev => Uid::uid(&Strrev),
            Self::Strtolower => Uid::uid(&Strtolower),
            Self::Strtoupper => Uid::uid(&Strtoupper),
            Self::Substr => Uid::uid(&Substr),
            Self::Trim => Uid::uid(&Trim),
            Self::Ucfirst => Uid::uid(&Ucfirst),
            Self::Ucwords => Uid::uid(&Ucwords),
            Self::Wordwrap => Uid::uid(&Wordwrap),
        }
    }
}
impl Stdlib {
    pub fn arity(&self) -> Arity {
        match self {
            Self::Addcslashes => Addcslashes::arity(),
            Self::Addslashes => Addslashes::arity(),
            Self::Base64Decode => Base64Decode::arity(),
            Self::Base64Encode => Base64Encode::arity(),
            Self::Bin2Hex => Bin2Hex::arity(),
            Self::Chop => Chop::arity(),
            Self::Chr => Chr::arity(),
            Self::ChunkSplit => ChunkSplit::arity(),
            Self::ConvertUudecode => ConvertUudecode::arity(),
            Self::ConvertUuencode => ConvertUuencode::arity(),
            Self::CountChars => CountChars::arity(),
            Self::Crc32 => Crc32::arity(),
            Self::Explode => Explode::arity(),
            Self::Hash => Hash::arity(),
            Self::Hex2Bin => Hex2Bin::arity(),
            Self::HtmlEntityDecode => HtmlEntityDecode::arity(),
            Self::Htmlentities => Htmlentities::arity(),
            Self::Htmlspecialchars => Htmlspecialchars::arity(),
            Self::HtmlspecialcharsDecode => HtmlspecialcharsDecode::arity(),
            Self::Implode => Implode::arity(),
            Self::Join => Join::arity(),
            Self::Lcfirst => Lcfirst::arity(),
            Self::Levenshtein => Levenshtein::arity(),
            Self::Ltrim => Ltrim::arity(),
            Self::Md5 => Md5::arity(),
            Self::Md5File => Md5File::arity(),
            Self::Nl2br => Nl2br::arity(),
            Self::NumberFormat => NumberFormat::arity(),
            Self::Ord => Ord::arity(),
            Self::Quotemeta => Quotemeta::arity(),
            Self::Rtrim => Rtrim::arity(),
            Self::Sha1 => Sha1::arity(),
            Self::StrContains => StrContains::arity(),
            Self::StrEndsWith => StrEndsWith::arity(),
            Self::StrPad => StrPad::arity(),
            Self::StrRepeat => StrRepeat::arity(),
            Self::StrReplace => StrReplace::arity(),
            Self::StrRot13 => StrRot13::arity(),
            Self::StrSplit => StrSplit::arity(),
            Self::StrStartsWith => StrStartsWith::arity(),
            Self::StrWordCount => StrWordCount::arity(),
            Self::Strlen => Strlen::arity(),
            Self::Strpos => Strpos::arity(),
            Self::Strrev => Strrev::arity(),
            Self::Strtolower => Strtolower::arity(),
            Self::Strtoupper => Strtoupper::arity(),
            Self::Substr => Substr::arity(),
            Self::Trim => Trim::arity(),
            Self::Ucfirst => Ucfirst::arity(),
            Self::Ucwords => Ucwords::arity(),
            Self::Wordwrap => Wordwrap::arity(),
        }
    }
}
impl Applicable<Value> for Stdlib {
    fn arity(&self) -> Option<Arity> {
        Some(Stdlib::arity(self))
    }
    fn apply(&self, args: impl ExactSizeIterator<Item = Value>) -> Result<Value, String> {
        let arity = Stdlib::arity(self);
        if !arity.accepts(args.len()) {
            return Err(format!(
                "Expected {} arguments, received {}",
                arity,
                args.len()
            ));
        }
        trace!(builtin = self.name(), num_args = args.len(), "apply builtin");
        match self {
            Self::Addcslashes => Addcslashes.apply(args),
            Self::Addslashes => Addslashes.apply(args),
            Self::Base64Decode => Base64Decode.apply(args),
            Self::Base64Encode => Base64Encode.apply(args),
            Self::Bin2Hex => Bin2Hex.apply(args),
            Self::Chop => Chop.apply(args),
            Self::Chr => Chr.apply(args),
            Self::ChunkSplit => ChunkSplit.apply(args),
            Self::ConvertUudecode => ConvertUudecode.apply(args),
            Self::ConvertUuencode => ConvertUuencode.apply(args),
            Self::CountChars => CountChars.apply(args),
            Self::Crc32 => Crc32.apply(args),
            Self::Explode => Explode.apply(args),
            Self::Hash => Hash.apply(args),
            Self::Hex2Bin => Hex2Bin.apply(args),
            Self::HtmlEntityDecode => HtmlEntityDecode.apply(args),
            Self::Htmlentities => Htmlentities.apply(args),
            Self::Htmlspecialchars => Htmlspecialchars.apply(args),
            Self::HtmlspecialcharsDecode => HtmlspecialcharsDecode.apply(args),
            Self::Implode => Implode.apply(args),
            Self::Join => Join.apply(args),
            Self::Lcfirst => Lcfirst.apply(args),
            Self::Levenshtein => Levenshtein.apply(args),
            Self::Ltrim => Ltrim.apply(args),
            Self::Md5 => Md5.apply(args),
            Self::Md5File => Md5File.apply(args),
            Self::Nl2br => Nl2br.apply(args),
            Self::NumberFormat => NumberFormat.apply(args),
            Self::Ord => Ord.apply(args),
            Self::Quotemeta => Quotemeta.apply(args),
            Self::Rtrim => Rtrim.apply(args),
            Self::Sha1 => Sha1.apply(args),
            Self::StrContains => StrContains.apply(args),
            Self::StrEndsWith => StrEndsWith.apply(args),
            Self::StrPad => StrPad.apply(args),
            Self::StrRepeat => StrRepeat.apply(args),
            Self::StrReplace => StrReplace.apply(args),
            Self::StrRot13 => StrRot13.apply(args),
            Self::StrSplit => StrSplit.apply(args),
            Self::StrStartsWith => StrStartsWith.apply(args),
            Self::StrWordCount => StrWordCount.apply(args),
            Self::Strlen => Strlen.apply(args),
            Self::Strpos => Strpos.apply(args),
            Self::Strrev => Strrev.apply(args),
            Self::Strtolower => Strtolower.apply(args),
            Self::Strtoupper => Strtoupper.apply(args),
            Self::Substr => Substr.apply(args),
            Self::Trim => Trim.apply(args),
            Self::Ucfirst => Ucfirst.apply(args),
            Self::Ucwords => Ucwords.apply(args),
            Self::Wordwrap => Wordwrap.apply(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, str::FromStr};

    use zipmap::{zip_map, Arg, Driver, Error};
    use zipmap_test_utils::ObservedIter;

    use super::*;

    #[test]
    fn builtin_identifiers() {
        let uids = Stdlib::entries().map(|builtin| builtin.uid()).collect::<HashSet<_>>();
        assert_eq!(uids.len(), Stdlib::entries().count());
        for builtin in Stdlib::entries() {
            assert_eq!(Stdlib::try_from(builtin.uid()), Ok(builtin));
            assert_eq!(Stdlib::from_str(builtin.name()), Ok(builtin));
        }
        assert_eq!(Stdlib::try_from(Uuid::nil()), Err(()));
        assert!(Stdlib::from_str("metaphone").is_err());
    }

    #[test]
    fn builtin_names() {
        assert_eq!(Stdlib::Bin2Hex.name(), "bin2hex");
        assert_eq!(format!("{}", Stdlib::StrPad), "str_pad");
        assert_eq!(serde_json::to_string(&Stdlib::Md5File).unwrap(), "\"md5_file\"");
        assert_eq!(
            serde_json::from_str::<Stdlib>("\"htmlspecialchars_decode\"").unwrap(),
            Stdlib::HtmlspecialcharsDecode
        );
    }

    #[test]
    fn dispatch_by_name() {
        let builtin = Stdlib::from_str("str_repeat").unwrap();
        assert_eq!(
            builtin.apply(vec![Value::from("ab"), Value::from(2)].into_iter()),
            Ok(Value::from("abab"))
        );
        assert_eq!(
            builtin.apply(vec![Value::from("ab")].into_iter()),
            Err(String::from("Expected 2 arguments, received 1"))
        );
    }

    #[test]
    fn map_builtin_over_driver() {
        let results = zip_map(
            Stdlib::Trim,
            vec![Arg::driver(vec![
                Value::from("  a "),
                Value::from("b\n"),
                Value::from("\tc"),
            ])],
        )
        .unwrap()
        .collect::<Result<Vec<_>, _>>();
        assert_eq!(
            results,
            Ok(vec![Value::from("a"), Value::from("b"), Value::from("c")])
        );
    }

    #[test]
    fn map_builtin_with_constant_arguments() {
        let source = ObservedIter::new("lines", vec![Value::from("a,b"), Value::from("c")]);
        let pulls = source.counter();
        let results = zip_map(
            Stdlib::Explode,
            vec![Arg::constant(","), Arg::Driver(Driver::new(source))],
        )
        .unwrap()
        .collect::<Result<Vec<_>, _>>();
        assert_eq!(
            results,
            Ok(vec![
                Value::List(vec![Value::from("a"), Value::from("b")]),
                Value::List(vec![Value::from("c")]),
            ])
        );
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn builtin_type_errors_do_not_stop_iteration() {
        let mut results = zip_map(
            Stdlib::Strtoupper,
            vec![Arg::driver(vec![Value::from("a"), Value::from(1), Value::from("c")])],
        )
        .unwrap();
        assert_eq!(results.next(), Some(Ok(Value::from("A"))));
        assert_eq!(
            results.next(),
            Some(Err(Error::Apply(String::from("Expected String, received 1"))))
        );
        assert_eq!(results.next(), Some(Ok(Value::from("C"))));
        assert_eq!(results.next(), None);
    }

    #[test]
    fn builtin_arity_is_validated_at_construction() {
        let result = zip_map(
            Stdlib::Strlen,
            vec![Arg::constant("a"), Arg::constant("b")],
        );
        assert_eq!(
            result.err(),
            Some(Error::InvalidArity {
                expected: Strlen::arity(),
                received: 2,
            })
        );
    }

    #[test]
    fn constant_arguments_repeat_indefinitely() {
        let results = zip_map(
            Stdlib::StrRepeat,
            vec![Arg::constant("ab"), Arg::constant(2)],
        )
        .unwrap()
        .take(3)
        .collect::<Result<Vec<_>, _>>();
        assert_eq!(
            results,
            Ok(vec![Value::from("abab"), Value::from("abab"), Value::from("abab")])
        );
    }
}
