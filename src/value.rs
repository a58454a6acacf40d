//! Value type tags and the lenient string codec.
//!
//! Every property on the wire carries a numeric tag describing how its string
//! values decode. Decoding is deliberately lenient: malformed input degrades
//! a single field to its zero value with a logged diagnostic instead of
//! aborting the surrounding load. Upstream has no validation layer, so
//! partial-data tolerance is the contract, not an accident.

use tracing::warn;

use crate::error::CatalogError;

/// Wire-level value type tag carried by every property.
///
/// The tags 0..=3 are fixed by the file format. The `isArray` marker that
/// occupies the scalar value's position in array properties is a sentinel
/// chunk, not a fifth type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueType {
    Int32,
    Float,
    Text,
    Boolean,
}

impl ValueType {
    /// Numeric tag used in the encoded form.
    pub fn tag(self) -> i32 {
        match self {
            ValueType::Int32 => 0,
            ValueType::Float => 1,
            ValueType::Text => 2,
            ValueType::Boolean => 3,
        }
    }

    /// Resolve a wire tag, if it names a known value type.
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            0 => Some(ValueType::Int32),
            1 => Some(ValueType::Float),
            2 => Some(ValueType::Text),
            3 => Some(ValueType::Boolean),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Int32 => "int32",
            ValueType::Float => "float",
            ValueType::Text => "text",
            ValueType::Boolean => "boolean",
        }
    }
}

/// Parse a signed decimal integer; malformed input logs and yields `0`.
pub fn decode_i32(value: &str) -> i32 {
    match value.parse::<i32>() {
        Ok(parsed) => parsed,
        Err(_) => {
            let err = CatalogError::ValueParse {
                value: value.to_string(),
                expected: ValueType::Int32.as_str(),
            };
            warn!(%err, "defaulting to 0");
            0
        }
    }
}

/// Parse a decimal float; malformed input logs and yields `0.0`.
pub fn decode_f32(value: &str) -> f32 {
    match value.parse::<f32>() {
        Ok(parsed) => parsed,
        Err(_) => {
            let err = CatalogError::ValueParse {
                value: value.to_string(),
                expected: ValueType::Float.as_str(),
            };
            warn!(%err, "defaulting to 0.0");
            0.0
        }
    }
}

/// Text values pass through unchanged.
pub fn decode_text(value: &str) -> String {
    value.to_string()
}

/// Decode a boolean: `"0"`/`"false"` are false, `"1"`/`"true"` are true.
///
/// Anything else logs and yields `false`. Encoding uses the same mapping in
/// reverse, so booleans round-trip.
pub fn decode_bool(value: &str) -> bool {
    match value {
        "0" | "false" => false,
        "1" | "true" => true,
        other => {
            let err = CatalogError::ValueParse {
                value: other.to_string(),
                expected: ValueType::Boolean.as_str(),
            };
            warn!(%err, "defaulting to false");
            false
        }
    }
}

pub fn encode_i32(value: i32) -> String {
    value.to_string()
}

pub fn encode_f32(value: f32) -> String {
    value.to_string()
}

pub fn encode_text(value: &str) -> String {
    value.to_string()
}

pub fn encode_bool(value: bool) -> String {
    if value { "1".to_string() } else { "0".to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for vt in [
            ValueType::Int32,
            ValueType::Float,
            ValueType::Text,
            ValueType::Boolean,
        ] {
            assert_eq!(ValueType::from_tag(vt.tag()), Some(vt));
        }
        assert_eq!(ValueType::from_tag(4), None);
        assert_eq!(ValueType::from_tag(-1), None);
    }

    #[test]
    fn malformed_scalars_default_to_zero() {
        assert_eq!(decode_i32("eleven"), 0);
        assert_eq!(decode_i32(""), 0);
        assert_eq!(decode_f32("3.5.1"), 0.0);
        assert!(!decode_bool("maybe"));
    }

    #[test]
    fn well_formed_scalars_decode() {
        assert_eq!(decode_i32("-42"), -42);
        assert_eq!(decode_f32("11.5"), 11.5);
        assert_eq!(decode_text("plain text"), "plain text");
        assert!(decode_bool("1"));
        assert!(decode_bool("true"));
        assert!(!decode_bool("0"));
        assert!(!decode_bool("false"));
    }

    #[test]
    fn bool_codec_is_symmetric() {
        assert_eq!(encode_bool(decode_bool("0")), "0");
        assert_eq!(encode_bool(decode_bool("1")), "1");
        assert!(decode_bool(&encode_bool(true)));
        assert!(!decode_bool(&encode_bool(false)));
    }

    #[test]
    fn numeric_encodes_match_parse() {
        assert_eq!(encode_i32(1347), "1347");
        assert_eq!(decode_f32(&encode_f32(0.25)), 0.25);
    }
}
