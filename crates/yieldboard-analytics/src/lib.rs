//! # Yieldboard Analytics
//!
//! Return projections and rankings over the instrument catalog.
//!
//! - **Returns**: Compound projection over a holding period, simple year-to-date projection
//! - **Parameters**: Validated request inputs (`Capital`, `HoldingPeriod`) and the
//!   per-catalog `RankingLimits` keeping projections in decimal range
//! - **Ranking**: Catalog-wide projections ordered by earnings or by YTD rate
//!
//! Every function here is pure: the same catalog and parameters always give
//! the same, identically ordered output.
//!
//! ## Usage
//!
//! ```rust
//! use yieldboard_analytics::prelude::*;
//! use yieldboard_core::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let report = rank_by_return(Capital::DEFAULT, HoldingPeriod::DEFAULT, &catalog);
//! assert_eq!(report.instrument_count, catalog.len());
//! assert_eq!(report.results[0].instrument.id.as_str(), "achieve-fixed");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod params;
pub mod ranking;
pub mod returns;

pub use error::{AnalyticsError, AnalyticsResult};
pub use params::{Capital, HoldingPeriod, RankingLimits};
pub use ranking::{rank_by_return, rank_by_ytd, ComparisonReport, ComparisonResult, YtdReport, YtdResult};
pub use returns::{compute_compound_return, compute_ytd_projection, CompoundReturn, YtdProjection};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::params::{Capital, HoldingPeriod, RankingLimits};
    pub use crate::ranking::{rank_by_return, rank_by_ytd, ComparisonReport, YtdReport};
    pub use crate::returns::{compute_compound_return, compute_ytd_projection};
}
