//! Server configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use yieldboard_core::Catalog;

use crate::error::ServerError;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON instrument catalog; the built-in catalog is used when unset
    pub catalog_file: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_file: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ServerError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ServerError> {
        toml::from_str(content).map_err(|e| ServerError::Config {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Load the catalog named by this configuration.
    ///
    /// Any invalid record is fatal: serving projections from bad data is worse
    /// than not starting.
    pub fn load_catalog(&self) -> Result<Catalog, ServerError> {
        match &self.catalog_file {
            Some(path) => Ok(Catalog::from_json_file(path)?),
            None => Ok(Catalog::builtin()),
        }
    }
}
