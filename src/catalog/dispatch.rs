//! Per-kind dispatch between encoded lines and typed records.
//!
//! The kind tag at the head of a line selects which record type decodes the
//! rest. The match on [`Kind`] below is the entire dispatch table: callers
//! never need compile-time knowledge of which kind a line holds, and a new
//! kind costs exactly one new arm.

use crate::catalog::kind::Kind;
use crate::catalog::model::{StaticRecord, Type1Record, Type2Record};
use crate::catalog::registry::{KindSlot, StaticCatalog};
use crate::chunk::{PROP_DELIMITER, split_chunks};
use crate::error::CatalogError;
use crate::projection::{apply_properties, collect_properties};
use crate::property::{Property, decode_properties, encode_property};

/// Decode one encoded line and insert the resulting record into the catalog.
///
/// Fails only when the leading kind tag is missing or unrecognized; that is
/// fatal to this line, never to the surrounding load. Damaged property
/// chunks inside a recognized line degrade individual fields instead.
pub fn ingest_line(catalog: &mut StaticCatalog, line: &str) -> Result<Kind, CatalogError> {
    let chunks = split_chunks(line, PROP_DELIMITER);
    // split_chunks never returns an empty vec.
    let tag_chunk = &chunks[0];
    let kind = tag_chunk
        .parse::<i32>()
        .ok()
        .and_then(Kind::from_tag)
        .ok_or_else(|| CatalogError::UnknownKind {
            tag: tag_chunk.clone(),
        })?;

    let properties = decode_properties(&chunks[1..]);
    match kind {
        Kind::Type1 => insert_decoded::<Type1Record>(catalog, &properties),
        Kind::Type2 => insert_decoded::<Type2Record>(catalog, &properties),
    }
    Ok(kind)
}

fn insert_decoded<R: KindSlot + 'static>(catalog: &mut StaticCatalog, properties: &[Property]) {
    let mut record = R::default();
    apply_properties(&mut record, R::bindings(), properties);
    catalog.insert(record);
}

/// Encode one record as a line: kind tag, then every property, each
/// terminated by `;`. The caller appends the line break.
pub fn encode_line<R: StaticRecord + 'static>(record: &R) -> String {
    let mut line = R::KIND.tag().to_string();
    line.push(PROP_DELIMITER);
    for prop in collect_properties(record, R::bindings()) {
        line.push_str(&encode_property(&prop));
        line.push(PROP_DELIMITER);
    }
    line
}
