//! # Yieldboard Server
//!
//! REST server ranking the instrument catalog by projected return.
//!
//! ## Endpoints
//!
//! - `GET /api/instruments` - the catalog as defined
//! - `GET /api/instruments/compare?capital=&period=` - ranked by compound earnings
//! - `GET /api/instruments/ytd?capital=` - ranked by year-to-date rate
//! - `GET /health` - liveness and catalog size
//!
//! ## Usage
//!
//! ```ignore
//! use yieldboard_server::{Server, ServerConfig};
//!
//! let config = ServerConfig::default();
//! let catalog = config.load_catalog()?;
//! Server::new(config, catalog).start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod routes;

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use yieldboard_analytics::RankingLimits;
use yieldboard_core::Catalog;

pub use config::ServerConfig;
pub use error::ServerError;

/// The Yieldboard server.
pub struct Server {
    config: ServerConfig,
    catalog: Arc<Catalog>,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.catalog.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .config
            .host
            .parse()
            .map_err(|_| ServerError::InvalidAddress(self.config.host.clone()))?;
        Ok(SocketAddr::new(ip, self.config.port))
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), ServerError> {
        let addr = self.bind_addr()?;

        info!(
            "Starting Yieldboard server on {} ({} instruments)",
            addr,
            self.catalog.len()
        );
        let limits = RankingLimits::for_catalog(&self.catalog);
        info!(
            "Accepting capital up to {} and periods up to {}",
            limits.max_capital(),
            limits.max_period()
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
