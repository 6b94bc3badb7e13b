//! The instrument catalog.
//!
//! A [`Catalog`] is built once at startup, validated as a whole, and then only
//! read. There is no way to mutate a catalog after construction, so it can be
//! shared behind an `Arc` by any number of concurrent readers.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use log::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::types::InstrumentRecord;

/// Immutable, validated list of instruments in definition order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<InstrumentRecord>,
}

impl Catalog {
    /// Builds a catalog, checking every record and the catalog-wide invariants.
    ///
    /// # Errors
    ///
    /// - `CoreError::EmptyCatalog` if `records` is empty
    /// - `CoreError::InvalidInstrument` for the first record failing validation
    /// - `CoreError::DuplicateId` if two records share an id
    pub fn new(records: Vec<InstrumentRecord>) -> CoreResult<Self> {
        if records.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id.as_str()) {
                return Err(CoreError::duplicate_id(record.id.as_str()));
            }
        }

        debug!("validated catalog of {} instruments", records.len());
        Ok(Self { records })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            records: builtin::records(),
        }
    }

    /// Parses and validates a catalog from a JSON array of instrument records.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let records: Vec<InstrumentRecord> =
            serde_json::from_str(json).map_err(|e| CoreError::catalog_parse(e.to_string()))?;
        Self::new(records)
    }

    /// Reads a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::CatalogIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let catalog = Self::from_json_str(&content)?;
        info!(
            "loaded {} instruments from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Records in definition order.
    pub fn records(&self) -> &[InstrumentRecord] {
        &self.records
    }

    /// Iterates records in definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, InstrumentRecord> {
        self.records.iter()
    }

    /// Number of instruments.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a InstrumentRecord;
    type IntoIter = std::slice::Iter<'a, InstrumentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
