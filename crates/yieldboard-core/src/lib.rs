//! # Yieldboard Core
//!
//! Core types and the instrument catalog for the Yieldboard return comparison service.
//!
//! This crate provides the foundational building blocks used throughout Yieldboard:
//!
//! - **Types**: `InstrumentRecord`, `InstrumentId`, `RiskLevel`
//! - **Catalog**: The immutable, validated list of instruments loaded once at startup
//! - **Errors**: `CoreError` for malformed catalog data
//!
//! ## Example
//!
//! ```rust
//! use yieldboard_core::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.len(), 9);
//! assert!(catalog.iter().any(|r| r.id == InstrumentId::new("tbill-91")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod catalog;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{InstrumentId, InstrumentRecord, RiskLevel};
}

// Re-export commonly used types at crate root
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use types::{InstrumentId, InstrumentRecord, RiskLevel};
