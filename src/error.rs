//! Error taxonomy for the catalog codec.
//!
//! Only [`CatalogError::File`] aborts a load or save. Every other variant is
//! recovered where it occurs: the offending property or line is skipped with
//! a logged diagnostic and the affected field keeps its default, so a damaged
//! record degrades instead of taking the whole catalog down with it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// A property chunk had the wrong token count for its shape.
    #[error("property chunk has {count} tokens, expected at least {expected}")]
    TokenizeMismatch { count: usize, expected: usize },

    /// The value type tag on a property does not name a known type.
    #[error("unknown value type tag '{tag}'")]
    UnknownValueType { tag: String },

    /// A property's declared value type disagrees with the bound field.
    #[error("property '{name}' is {declared} but the field expects {expected}")]
    ValueTypeMismatch {
        name: String,
        declared: &'static str,
        expected: &'static str,
    },

    /// A value string could not be parsed as its declared type.
    #[error("value '{value}' is not a valid {expected}")]
    ValueParse {
        value: String,
        expected: &'static str,
    },

    /// A declared field had no matching property in the input list.
    #[error("property '{name}' not found")]
    PropertyNotFound { name: String },

    /// The line's leading tag does not name a known kind.
    #[error("unknown kind tag '{tag}'")]
    UnknownKind { tag: String },

    /// The catalog file could not be opened, read, or written. Fatal.
    #[error("catalog file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
