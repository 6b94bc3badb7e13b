//! Route definitions.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use yieldboard_core::Catalog;

use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `catalog` - The instrument catalog shared by all handlers
pub fn create_router(catalog: Arc<Catalog>) -> Router {
    let state = Arc::new(AppState::new(catalog));

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/health", get(handlers::health))
        // Catalog
        .route("/api/instruments", get(handlers::list_instruments))
        // Rankings
        .route("/api/instruments/compare", get(handlers::compare_instruments))
        .route("/api/instruments/ytd", get(handlers::ytd_instruments))
        // State
        .with_state(state)
}
