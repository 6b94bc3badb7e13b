//! Catalog-wide projections and their ordering.
//!
//! Both rankings project every instrument in the catalog (no filtering) and
//! order the results with a stable sort, so instruments with equal keys keep
//! their catalog order. Neither can fail: inputs within
//! [`RankingLimits`](crate::params::RankingLimits) project exactly, and
//! amounts beyond them saturate at `Decimal::MAX`.

use serde::Serialize;

use yieldboard_core::{Catalog, InstrumentRecord};

use crate::params::{Capital, HoldingPeriod};
use crate::returns::{
    compound_return_saturating, ytd_projection_saturating, CompoundReturn, YtdProjection,
};

/// An instrument together with its compound projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// The catalog record.
    #[serde(flatten)]
    pub instrument: InstrumentRecord,
    /// Projection for the requested capital and period.
    #[serde(flatten)]
    pub projection: CompoundReturn,
}

/// Instruments ranked by projected earnings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    /// Capital the projections were computed for.
    pub capital: Capital,
    /// Holding period the projections were computed for.
    pub period_months: HoldingPeriod,
    /// Number of instruments ranked; equals the catalog size.
    pub instrument_count: usize,
    /// Results, highest earnings first.
    pub results: Vec<ComparisonResult>,
}

/// An instrument together with its year-to-date projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YtdResult {
    /// The catalog record.
    #[serde(flatten)]
    pub instrument: InstrumentRecord,
    /// Projection for the requested capital.
    #[serde(flatten)]
    pub projection: YtdProjection,
}

/// Instruments ranked by year-to-date rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YtdReport {
    /// Capital the projections were computed for.
    pub capital: Capital,
    /// Number of instruments ranked; equals the catalog size.
    pub instrument_count: usize,
    /// Results, highest YTD rate first.
    pub results: Vec<YtdResult>,
}

/// Projects every instrument over `period` and ranks by earnings, descending.
pub fn rank_by_return(
    capital: Capital,
    period: HoldingPeriod,
    catalog: &Catalog,
) -> ComparisonReport {
    let mut results: Vec<ComparisonResult> = catalog
        .iter()
        .map(|instrument| ComparisonResult {
            instrument: instrument.clone(),
            projection: compound_return_saturating(
                capital.amount(),
                instrument.annual_rate,
                period.as_decimal(),
            ),
        })
        .collect();

    results.sort_by(|a, b| b.projection.earnings.cmp(&a.projection.earnings));

    ComparisonReport {
        capital,
        period_months: period,
        instrument_count: results.len(),
        results,
    }
}

/// Projects every instrument at its YTD rate and ranks by that rate, descending.
///
/// The key is the quoted rate, not the computed earnings; with one capital per
/// request the two orderings agree except where rounding would tie earnings.
pub fn rank_by_ytd(capital: Capital, catalog: &Catalog) -> YtdReport {
    let mut results: Vec<YtdResult> = catalog
        .iter()
        .map(|instrument| YtdResult {
            instrument: instrument.clone(),
            projection: ytd_projection_saturating(capital.amount(), instrument.ytd_rate),
        })
        .collect();

    results.sort_by(|a, b| b.instrument.ytd_rate.cmp(&a.instrument.ytd_rate));

    YtdReport {
        capital,
        instrument_count: results.len(),
        results,
    }
}
