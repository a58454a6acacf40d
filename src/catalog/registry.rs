//! The in-memory catalog: one id-keyed map per kind plus a loaded flag.
//!
//! The registry is created empty, populated once by an explicit [`load`],
//! and read afterward. No update or delete operations exist for the loaded
//! data; a host that needs fresh data builds a new catalog and loads again.
//! Maps are `BTreeMap` so `save` and the CLI surface iterate in stable id
//! order.
//!
//! [`load`]: StaticCatalog::load

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::catalog::dispatch::{encode_line, ingest_line};
use crate::catalog::kind::Kind;
use crate::catalog::model::{StaticRecord, Type1Record, Type2Record};
use crate::error::CatalogError;

/// Selects the per-kind collection inside the catalog for a record type.
///
/// This is the dispatch seam between the generic registry surface and the
/// concrete per-kind maps: `get::<Type1Record>` resolves to the `type1` map
/// at compile time, without the registry knowing which kind the caller meant.
pub trait KindSlot: StaticRecord {
    fn slot(catalog: &StaticCatalog) -> &BTreeMap<i32, Self>;
    fn slot_mut(catalog: &mut StaticCatalog) -> &mut BTreeMap<i32, Self>;
}

impl KindSlot for Type1Record {
    fn slot(catalog: &StaticCatalog) -> &BTreeMap<i32, Self> {
        &catalog.type1
    }
    fn slot_mut(catalog: &mut StaticCatalog) -> &mut BTreeMap<i32, Self> {
        &mut catalog.type1
    }
}

impl KindSlot for Type2Record {
    fn slot(catalog: &StaticCatalog) -> &BTreeMap<i32, Self> {
        &catalog.type2
    }
    fn slot_mut(catalog: &mut StaticCatalog) -> &mut BTreeMap<i32, Self> {
        &mut catalog.type2
    }
}

/// In-memory store for every kind's records, keyed by id.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    type1: BTreeMap<i32, Type1Record>,
    type2: BTreeMap<i32, Type2Record>,
    loaded: bool,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog file at `path`, one record per line.
    ///
    /// Only a file that cannot be read fails the load. A line whose kind tag
    /// is unrecognized, or whose body is damaged, is logged and skipped so
    /// the rest of the file still lands. Records are newline-terminated:
    /// empty lines and a trailing unterminated fragment are not records.
    /// The loaded flag flips only after every line has been processed.
    pub fn load(&mut self, path: &Path) -> Result<(), CatalogError> {
        let data = fs::read_to_string(path).map_err(|source| CatalogError::File {
            path: path.to_path_buf(),
            source,
        })?;

        let mut lines: Vec<&str> = data.split('\n').collect();
        // The fragment after the last newline is either empty or an
        // unterminated partial record; neither is loadable.
        lines.pop();

        for line in lines {
            if line.is_empty() {
                continue;
            }
            if let Err(err) = ingest_line(self, line) {
                warn!(line, %err, "skipping unloadable line");
            }
        }

        self.loaded = true;
        info!(
            path = %path.display(),
            type1 = self.type1.len(),
            type2 = self.type2.len(),
            "static data loaded"
        );
        Ok(())
    }

    /// Whether a load has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Look up a record by id.
    ///
    /// A missing id is a normal outcome: it logs a diagnostic and returns
    /// `None` rather than failing.
    pub fn get<R: KindSlot>(&self, id: i32) -> Option<&R> {
        let record = R::slot(self).get(&id);
        if record.is_none() {
            warn!(kind = R::KIND.as_str(), id, "no record with requested id");
        }
        record
    }

    /// Insert a record into its kind's collection, keyed by id.
    ///
    /// Inserting a second record with the same id overwrites the first.
    pub fn insert<R: KindSlot>(&mut self, record: R) {
        R::slot_mut(self).insert(record.id(), record);
    }

    /// Iterate one kind's records in id order.
    pub fn records<'a, R: KindSlot + 'a>(&'a self) -> impl Iterator<Item = &'a R> {
        R::slot(self).values()
    }

    /// Number of records held for `kind`.
    pub fn count(&self, kind: Kind) -> usize {
        match kind {
            Kind::Type1 => self.type1.len(),
            Kind::Type2 => self.type2.len(),
        }
    }

    /// Total records across every kind.
    pub fn len(&self) -> usize {
        Kind::ALL.iter().map(|kind| self.count(*kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize the whole catalog back to the line format at `path`.
    ///
    /// Every kind in tag order, every record in id order, one line per
    /// record. Output is canonical regardless of the field order the input
    /// file used.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let mut out = String::new();
        for kind in Kind::ALL {
            match kind {
                Kind::Type1 => append_kind_lines(&self.type1, &mut out),
                Kind::Type2 => append_kind_lines(&self.type2, &mut out),
            }
        }

        fs::write(path, out).map_err(|source| CatalogError::File {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn append_kind_lines<R: StaticRecord + 'static>(records: &BTreeMap<i32, R>, out: &mut String) {
    for record in records.values() {
        out.push_str(&encode_line(record));
        out.push('\n');
    }
}
