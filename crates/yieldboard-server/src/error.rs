//! Startup errors.

use thiserror::Error;

use yieldboard_core::CoreError;

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration file could not be parsed.
    #[error("invalid configuration in {path}: {reason}")]
    Config {
        /// Source of the configuration.
        path: String,
        /// Parse failure.
        reason: String,
    },

    /// Instrument catalog is missing or malformed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CoreError),

    /// Bind address is not a valid IP address.
    #[error("invalid bind address '{0}'")]
    InvalidAddress(String),

    /// I/O failure while reading configuration or serving.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
