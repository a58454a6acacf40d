//! Static-data catalog wiring.
//!
//! This module ties the generic codec layers to the concrete record kinds:
//! kind identity, record shapes with their binding tables, per-kind dispatch
//! for encoded lines, and the id-keyed registry with bulk load/save. Hosts
//! use [`StaticCatalog`] as the single entry point.

pub mod dispatch;
pub mod kind;
pub mod model;
pub mod registry;

pub use dispatch::{encode_line, ingest_line};
pub use kind::Kind;
pub use model::{StaticRecord, Type1Record, Type2Record};
pub use registry::{KindSlot, StaticCatalog};
