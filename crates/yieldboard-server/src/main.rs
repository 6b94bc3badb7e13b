//! Yieldboard server entry point.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yieldboard_server::{Server, ServerConfig, ServerError};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,yieldboard=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Yieldboard Server v{}", env!("CARGO_PKG_VERSION"));

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/yieldboard.toml".to_string());

    let server_config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };

    // A malformed catalog stops startup
    let catalog = server_config.load_catalog()?;
    match &server_config.catalog_file {
        Some(path) => info!("Catalog: {} instruments from {}", catalog.len(), path),
        None => info!("Catalog: {} built-in instruments", catalog.len()),
    }

    let server = Server::new(server_config, catalog);
    server.start().await
}
