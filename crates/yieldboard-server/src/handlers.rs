//! Request handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use tracing::debug;

use yieldboard_analytics::{
    rank_by_return, rank_by_ytd, ComparisonReport, RankingLimits, YtdReport,
};
use yieldboard_core::{Catalog, InstrumentRecord};

use crate::query::{capital_or_default, period_or_default, CompareQuery, QueryPairs, YtdQuery};

/// Application state.
pub struct AppState {
    /// The instrument catalog, read-only for the life of the process
    pub catalog: Arc<Catalog>,
    /// Largest request inputs the catalog can be ranked with
    pub limits: RankingLimits,
}

impl AppState {
    /// Wraps a catalog together with its ranking limits.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let limits = RankingLimits::for_catalog(&catalog);
        Self { catalog, limits }
    }
}

/// Health check response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: String,
    version: String,
    instrument_count: usize,
}

/// Health check handler.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        instrument_count: state.catalog.len(),
    })
}

/// List the catalog as defined, without computed fields.
pub async fn list_instruments(State(state): State<Arc<AppState>>) -> Json<Vec<InstrumentRecord>> {
    Json(state.catalog.records().to_vec())
}

/// Rank instruments by projected earnings over a holding period.
pub async fn compare_instruments(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> Json<ComparisonReport> {
    let query = CompareQuery::from_pairs(&pairs);
    let capital = capital_or_default(query.capital.as_deref(), &state.limits);
    let period = period_or_default(query.period.as_deref(), &state.limits);
    debug!(%capital, %period, "ranking by compound return");

    Json(rank_by_return(capital, period, &state.catalog))
}

/// Rank instruments by year-to-date rate.
pub async fn ytd_instruments(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> Json<YtdReport> {
    let query = YtdQuery::from_pairs(&pairs);
    let capital = capital_or_default(query.capital.as_deref(), &state.limits);
    debug!(%capital, "ranking by YTD rate");

    Json(rank_by_ytd(capital, &state.catalog))
}
