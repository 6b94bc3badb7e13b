//! Error types for return calculations.

use thiserror::Error;

/// Error type for analytics operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// An input lies outside the documented domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Floating point evaluation produced a non-finite value.
    #[error("numerical error: {0}")]
    Numerical(String),

    /// Decimal arithmetic exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
