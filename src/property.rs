//! Property model: the serialized intermediate form of one record field.
//!
//! A property never holds a typed value, only the string encoding plus a
//! [`ValueType`] tag describing how to interpret it. The chunk codec here
//! converts between a `,`-split token list and the model; binding the model
//! onto typed record fields is the projection layer's job.

use tracing::warn;

use crate::chunk::{TOKEN_DELIMITER, join_chunks, split_chunks};
use crate::error::CatalogError;
use crate::value::ValueType;

/// Sentinel token that marks a property as array-valued.
///
/// It occupies the position a scalar value would take, so a chunk list longer
/// than three tokens is only well-formed when this marker sits at index 2.
pub const IS_ARRAY_MARKER: &str = "isArray";

/// One named field in its serialized form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    pub name: String,
    pub value_type: ValueType,
    /// String encodings of the value(s). Exactly one element when
    /// `is_array` is false; any number, including zero, when true.
    pub values: Vec<String>,
    pub is_array: bool,
}

impl Property {
    /// Build a scalar property from a single encoded value.
    pub fn scalar(name: impl Into<String>, value_type: ValueType, value: String) -> Self {
        Property {
            name: name.into(),
            value_type,
            values: vec![value],
            is_array: false,
        }
    }

    /// Build an array property from its encoded elements.
    pub fn array(name: impl Into<String>, value_type: ValueType, values: Vec<String>) -> Self {
        Property {
            name: name.into(),
            value_type,
            values,
            is_array: true,
        }
    }
}

/// Decode one `,`-split token list into a [`Property`].
///
/// Layout: `[valueTypeTag, name, value]` for scalars,
/// `[valueTypeTag, name, "isArray", value...]` for arrays.
pub fn decode_property(chunks: &[String]) -> Result<Property, CatalogError> {
    if chunks.len() < 3 {
        return Err(CatalogError::TokenizeMismatch {
            count: chunks.len(),
            expected: 3,
        });
    }

    let tag: i32 = chunks[0]
        .parse()
        .map_err(|_| CatalogError::UnknownValueType {
            tag: chunks[0].clone(),
        })?;
    let value_type = ValueType::from_tag(tag).ok_or_else(|| CatalogError::UnknownValueType {
        tag: chunks[0].clone(),
    })?;
    let name = chunks[1].clone();

    if chunks.len() == 3 {
        return Ok(Property::scalar(name, value_type, chunks[2].clone()));
    }

    // More than three tokens only encodes an array; the marker keeps a long
    // scalar chunk from being misread as one.
    if chunks[2] != IS_ARRAY_MARKER {
        return Err(CatalogError::TokenizeMismatch {
            count: chunks.len(),
            expected: 3,
        });
    }

    Ok(Property::array(name, value_type, chunks[3..].to_vec()))
}

/// Encode a [`Property`] back into its `,`-joined chunk form.
pub fn encode_property(prop: &Property) -> String {
    let mut chunks: Vec<String> = vec![prop.value_type.tag().to_string(), prop.name.clone()];
    if prop.is_array {
        chunks.push(IS_ARRAY_MARKER.to_string());
        chunks.extend(prop.values.iter().cloned());
    } else {
        chunks.extend(prop.values.iter().cloned());
    }
    join_chunks(&chunks, TOKEN_DELIMITER)
}

/// Decode every property chunk of a `;`-split line body.
///
/// Empty chunks (the artifact of the line's trailing `;`) are skipped
/// without comment; malformed chunks are logged and dropped so the rest of
/// the record still decodes.
pub fn decode_properties(prop_chunks: &[String]) -> Vec<Property> {
    let mut properties = Vec::new();
    for chunk in prop_chunks {
        if chunk.is_empty() {
            continue;
        }
        let tokens = split_chunks(chunk, TOKEN_DELIMITER);
        match decode_property(&tokens) {
            Ok(prop) => properties.push(prop),
            Err(err) => warn!(chunk = chunk.as_str(), %err, "skipping malformed property chunk"),
        }
    }
    properties
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(raw: &str) -> Vec<String> {
        split_chunks(raw, TOKEN_DELIMITER)
    }

    #[test]
    fn scalar_chunk_decodes() {
        let prop = decode_property(&chunks("0,prop1,1347")).unwrap();
        assert_eq!(prop.name, "prop1");
        assert_eq!(prop.value_type, ValueType::Int32);
        assert_eq!(prop.values, vec!["1347"]);
        assert!(!prop.is_array);
    }

    #[test]
    fn array_chunk_decodes() {
        let prop = decode_property(&chunks("3,prop2,isArray,5,6,7")).unwrap();
        assert_eq!(prop.name, "prop2");
        assert_eq!(prop.value_type, ValueType::Boolean);
        assert_eq!(prop.values, vec!["5", "6", "7"]);
        assert!(prop.is_array);
    }

    #[test]
    fn empty_array_decodes_to_no_values() {
        let prop = decode_property(&chunks("2,tags,isArray,")).unwrap();
        assert!(prop.is_array);
        assert_eq!(prop.values, vec![""]);
    }

    #[test]
    fn short_chunk_is_a_tokenize_mismatch() {
        let err = decode_property(&chunks("0,prop1")).unwrap_err();
        assert!(matches!(err, CatalogError::TokenizeMismatch { count: 2, .. }));
    }

    #[test]
    fn long_chunk_without_marker_is_rejected() {
        let err = decode_property(&chunks("0,prop1,5,6,7")).unwrap_err();
        assert!(matches!(err, CatalogError::TokenizeMismatch { .. }));
    }

    #[test]
    fn unknown_value_tag_is_rejected() {
        let err = decode_property(&chunks("9,prop1,5")).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownValueType { .. }));
        let err = decode_property(&chunks("x,prop1,5")).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownValueType { .. }));
    }

    #[test]
    fn encode_inverts_decode() {
        for raw in ["0,id,7", "3,flags,isArray,0,1,1", "2,label,hello"] {
            let prop = decode_property(&chunks(raw)).unwrap();
            assert_eq!(encode_property(&prop), raw);
        }
    }

    #[test]
    fn line_body_skips_empty_and_malformed_chunks() {
        let body = split_chunks("0,id,7;bad;;1,ratio,0.5;", ';');
        let props = decode_properties(&body);
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].name, "id");
        assert_eq!(props[1].name, "ratio");
    }
}
