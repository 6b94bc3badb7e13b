//! Error types for the Yieldboard core.
//!
//! Every error here describes catalog data that must not be served. They are
//! raised while the catalog is loaded, never while a request is handled.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A catalog record violates an invariant.
    #[error("Invalid instrument '{id}': {field} {reason}")]
    InvalidInstrument {
        /// Identifier of the offending record.
        id: String,
        /// Name of the offending field.
        field: &'static str,
        /// Description of the violation.
        reason: String,
    },

    /// Two catalog records share an identifier.
    #[error("Duplicate instrument id: {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },

    /// The catalog contains no records.
    #[error("Instrument catalog is empty")]
    EmptyCatalog,

    /// The catalog source could not be read.
    #[error("Failed to read catalog from {path}: {reason}")]
    CatalogIo {
        /// Path of the catalog file.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The catalog source is not valid JSON for a list of instruments.
    #[error("Failed to parse catalog: {reason}")]
    CatalogParse {
        /// Underlying parse failure.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid instrument error.
    #[must_use]
    pub fn invalid_instrument(
        id: impl Into<String>,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInstrument {
            id: id.into(),
            field,
            reason: reason.into(),
        }
    }

    /// Creates a duplicate id error.
    #[must_use]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Creates a catalog parse error.
    #[must_use]
    pub fn catalog_parse(reason: impl Into<String>) -> Self {
        Self::CatalogParse {
            reason: reason.into(),
        }
    }
}
