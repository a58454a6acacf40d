//! Schema-driven loader for delimited static-data catalogs.
//!
//! The crate decodes typed game-design records from a flat text file (one
//! record per `;`-delimited line, `,`-delimited tokens within each property)
//! and can re-serialize the in-memory catalog back to the same format. The
//! interesting part is the generic codec: a two-level tokenizer, a property
//! intermediate form tagged with its value type, a lenient string codec, and
//! a declarative field-binding table per record kind that drives both
//! directions without per-record parsing code.
//!
//! Hosts construct a [`StaticCatalog`], call [`StaticCatalog::load`] once at
//! startup, and read records by id afterward:
//!
//! ```rust,ignore
//! let mut catalog = StaticCatalog::new();
//! catalog.load(Path::new("StaticData.txt"))?;
//! let entry = catalog.get::<Type1Record>(7);
//! ```
//!
//! Loading is partial-tolerant by contract: a malformed value degrades a
//! single field to its default and an unrecognized kind tag skips its line,
//! each with a logged diagnostic. Only an unreadable file fails a load.

pub mod catalog;
pub mod chunk;
pub mod error;
pub mod projection;
pub mod property;
pub mod value;

pub use catalog::{
    Kind, KindSlot, StaticCatalog, StaticRecord, Type1Record, Type2Record, encode_line,
    ingest_line,
};
pub use chunk::{PROP_DELIMITER, TOKEN_DELIMITER, join_chunks, split_chunks};
pub use error::CatalogError;
pub use projection::{
    Direction, FieldBinding, FieldSlot, apply_properties, collect_properties, project,
};
pub use property::{IS_ARRAY_MARKER, Property, decode_properties, decode_property, encode_property};
pub use value::ValueType;
