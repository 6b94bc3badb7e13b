//! Validated request parameters.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

use yieldboard_core::Catalog;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Largest capital accepted for any catalog.
const CAPITAL_CEILING: Decimal = dec!(1_000_000_000_000);

/// Amount a user proposes to invest. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Capital(Decimal);

impl Capital {
    /// Capital used when a request does not supply a usable amount.
    pub const DEFAULT: Capital = Capital(dec!(1000));

    /// Creates a capital amount.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidInput` if `amount` is negative.
    pub fn new(amount: Decimal) -> AnalyticsResult<Self> {
        if amount < Decimal::ZERO {
            return Err(AnalyticsError::InvalidInput(format!(
                "capital must not be negative, got {}",
                amount
            )));
        }
        Ok(Self(amount))
    }

    /// Returns the amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl Default for Capital {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Capital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Holding period in whole months, at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HoldingPeriod(u32);

impl HoldingPeriod {
    /// Period used when a request does not supply a usable one.
    pub const DEFAULT: HoldingPeriod = HoldingPeriod(12);

    /// Creates a holding period.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidInput` if `months` is zero.
    pub fn new(months: u32) -> AnalyticsResult<Self> {
        if months == 0 {
            return Err(AnalyticsError::InvalidInput(
                "holding period must be at least one month".to_string(),
            ));
        }
        Ok(Self(months))
    }

    /// Returns the number of months.
    #[must_use]
    pub fn months(&self) -> u32 {
        self.0
    }

    /// Returns the number of months as a decimal.
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl Default for HoldingPeriod {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for HoldingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.0)
    }
}

/// Inputs up to which every projection over a catalog stays in `Decimal` range.
///
/// Any capital up to [`max_capital`](Self::max_capital) combined with any
/// period up to [`max_period`](Self::max_period) projects every instrument
/// without overflow. The period bound is where the highest annual rate in the
/// catalog, compounded from the largest capital, reaches one tenth of
/// `Decimal::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingLimits {
    max_capital: Capital,
    max_period: HoldingPeriod,
}

impl RankingLimits {
    /// Derives the limits from the highest rates quoted in `catalog`.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let max_annual = catalog
            .iter()
            .map(|r| r.annual_rate)
            .max()
            .unwrap_or(Decimal::ZERO);
        let max_ytd = catalog
            .iter()
            .map(|r| r.ytd_rate)
            .max()
            .unwrap_or(Decimal::ZERO);

        let ceiling = Decimal::MAX.to_f64().unwrap_or(f64::MAX) / 10.0;
        let annual_growth = 1.0 + percent_as_fraction(max_annual);
        let shortest_growth =
            (1.0 + percent_as_fraction(max_ytd)).max(annual_growth.powf(1.0 / 12.0));

        let max_capital = Decimal::from_f64((ceiling / shortest_growth).floor())
            .map_or(CAPITAL_CEILING, |amount| amount.min(CAPITAL_CEILING));

        let headroom = ceiling / max_capital.to_f64().unwrap_or(1.0).max(1.0);
        let months = if annual_growth > 1.0 {
            12.0 * headroom.ln() / annual_growth.ln()
        } else {
            f64::INFINITY
        };
        let months = months.floor().clamp(1.0, f64::from(u32::MAX)) as u32;

        Self {
            max_capital: Capital(max_capital),
            max_period: HoldingPeriod(months),
        }
    }

    /// Largest capital accepted.
    #[must_use]
    pub fn max_capital(&self) -> Capital {
        self.max_capital
    }

    /// Longest period accepted.
    #[must_use]
    pub fn max_period(&self) -> HoldingPeriod {
        self.max_period
    }

    /// Returns the capital if it is non-negative and within the limit.
    #[must_use]
    pub fn capital(&self, amount: Decimal) -> Option<Capital> {
        (Decimal::ZERO..=self.max_capital.0)
            .contains(&amount)
            .then_some(Capital(amount))
    }

    /// Returns the period if it is at least one month and within the limit.
    #[must_use]
    pub fn period(&self, months: u32) -> Option<HoldingPeriod> {
        (1..=self.max_period.0)
            .contains(&months)
            .then_some(HoldingPeriod(months))
    }
}

fn percent_as_fraction(rate: Decimal) -> f64 {
    (rate / Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
}
