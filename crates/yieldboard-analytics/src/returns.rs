//! Return projections for a single instrument.
//!
//! Two distinct models live here and are deliberately kept apart:
//!
//! - [`compute_compound_return`]: annual compounding over a holding period
//!   expressed in months, with a fractional-year exponent.
//! - [`compute_ytd_projection`]: a simple (non-compounded) application of a
//!   realized year-to-date rate.
//!
//! All outputs are rounded to two decimal places, half away from zero, each
//! from its own unrounded value.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Decimal places kept in every published amount and rate.
pub const OUTPUT_DECIMAL_PLACES: u32 = 2;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Rounds to [`OUTPUT_DECIMAL_PLACES`], half away from zero.
#[must_use]
pub fn round_output(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(OUTPUT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Outcome of compounding a principal over a holding period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundReturn {
    /// Principal plus earnings at the end of the period.
    pub total_return: Decimal,
    /// `total_return - principal`.
    pub earnings: Decimal,
    /// Percentage growth over the whole period.
    pub effective_rate: Decimal,
}

/// Outcome of applying a year-to-date rate to a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YtdProjection {
    /// `principal * ytd_rate / 100`.
    pub ytd_earnings: Decimal,
    /// `principal + ytd_earnings`.
    pub projected_value: Decimal,
}

/// Projects a principal compounded annually over `period_months`.
///
/// # Formula
///
/// ```text
/// growth        = (1 + rate/100) ^ (months/12)
/// total_return  = principal * growth
/// earnings      = total_return - principal
/// effective     = (growth - 1) * 100
/// ```
///
/// # Arguments
///
/// * `principal` - Amount invested, `>= 0`
/// * `annual_rate_percent` - Nominal annual rate in percent (27.5 for 27.5%), `>= 0`
/// * `period_months` - Holding period in months, `> 0`, fractions allowed
///
/// # Errors
///
/// - `AnalyticsError::InvalidInput` for a negative principal or rate, or a non-positive period
/// - `AnalyticsError::Numerical` if the growth factor is not finite
/// - `AnalyticsError::Overflow` if the amounts exceed the decimal range
///
/// # Example
///
/// ```rust
/// use yieldboard_analytics::compute_compound_return;
/// use rust_decimal_macros::dec;
///
/// let r = compute_compound_return(dec!(1000), dec!(27.5), dec!(12)).unwrap();
/// assert_eq!(r.total_return, dec!(1275.00));
/// assert_eq!(r.earnings, dec!(275.00));
/// assert_eq!(r.effective_rate, dec!(27.50));
/// ```
pub fn compute_compound_return(
    principal: Decimal,
    annual_rate_percent: Decimal,
    period_months: Decimal,
) -> AnalyticsResult<CompoundReturn> {
    ensure_non_negative("principal", principal)?;
    ensure_non_negative("annual rate", annual_rate_percent)?;
    if period_months <= Decimal::ZERO {
        return Err(AnalyticsError::InvalidInput(format!(
            "period must be positive, got {} months",
            period_months
        )));
    }

    let growth = growth_factor(annual_rate_percent, period_months)?;

    let total_return = principal
        .checked_mul(growth)
        .ok_or_else(|| AnalyticsError::Overflow(format!("{} x {}", principal, growth)))?;
    let effective_rate = (growth - Decimal::ONE)
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(|| AnalyticsError::Overflow(format!("effective rate of {}", growth)))?;

    Ok(compound_outcome(principal, total_return, effective_rate))
}

/// Compound projection for inputs already known to be non-negative.
///
/// Never fails: a growth factor past the decimal range and any product past
/// it saturate at `Decimal::MAX`.
pub(crate) fn compound_return_saturating(
    principal: Decimal,
    annual_rate_percent: Decimal,
    period_months: Decimal,
) -> CompoundReturn {
    let growth = growth_factor(annual_rate_percent, period_months).unwrap_or(Decimal::MAX);
    let total_return = principal.saturating_mul(growth);
    let effective_rate = (growth - Decimal::ONE).saturating_mul(Decimal::ONE_HUNDRED);
    compound_outcome(principal, total_return, effective_rate)
}

fn compound_outcome(
    principal: Decimal,
    total_return: Decimal,
    effective_rate: Decimal,
) -> CompoundReturn {
    CompoundReturn {
        total_return: round_output(total_return),
        earnings: round_output(total_return - principal),
        effective_rate: round_output(effective_rate),
    }
}

/// Projects a principal at a simple year-to-date rate.
///
/// ```text
/// ytd_earnings    = principal * ytd_rate/100
/// projected_value = principal + ytd_earnings
/// ```
///
/// # Errors
///
/// - `AnalyticsError::InvalidInput` for a negative principal or rate
/// - `AnalyticsError::Overflow` if the amounts exceed the decimal range
///
/// # Example
///
/// ```rust
/// use yieldboard_analytics::compute_ytd_projection;
/// use rust_decimal_macros::dec;
///
/// let p = compute_ytd_projection(dec!(1000), dec!(26.8)).unwrap();
/// assert_eq!(p.ytd_earnings, dec!(268.00));
/// assert_eq!(p.projected_value, dec!(1268.00));
/// ```
pub fn compute_ytd_projection(
    principal: Decimal,
    ytd_rate_percent: Decimal,
) -> AnalyticsResult<YtdProjection> {
    ensure_non_negative("principal", principal)?;
    ensure_non_negative("YTD rate", ytd_rate_percent)?;

    let ytd_earnings = principal
        .checked_mul(ytd_rate_percent / Decimal::ONE_HUNDRED)
        .ok_or_else(|| {
            AnalyticsError::Overflow(format!("{} at {}%", principal, ytd_rate_percent))
        })?;
    let projected_value = principal
        .checked_add(ytd_earnings)
        .ok_or_else(|| AnalyticsError::Overflow(format!("{} + {}", principal, ytd_earnings)))?;

    Ok(YtdProjection {
        ytd_earnings: round_output(ytd_earnings),
        projected_value: round_output(projected_value),
    })
}

/// YTD projection for inputs already known to be non-negative; saturates at
/// `Decimal::MAX` instead of failing.
pub(crate) fn ytd_projection_saturating(
    principal: Decimal,
    ytd_rate_percent: Decimal,
) -> YtdProjection {
    let ytd_earnings = principal.saturating_mul(ytd_rate_percent / Decimal::ONE_HUNDRED);
    let projected_value = principal.saturating_add(ytd_earnings);
    YtdProjection {
        ytd_earnings: round_output(ytd_earnings),
        projected_value: round_output(projected_value),
    }
}

/// `(1 + rate/100) ^ (months/12)`.
///
/// The fractional power is taken in `f64` and brought back into `Decimal`.
fn growth_factor(annual_rate_percent: Decimal, period_months: Decimal) -> AnalyticsResult<Decimal> {
    let rate = (annual_rate_percent / Decimal::ONE_HUNDRED)
        .to_f64()
        .ok_or_else(|| AnalyticsError::Numerical(format!("rate {}", annual_rate_percent)))?;
    let years = (period_months / MONTHS_PER_YEAR)
        .to_f64()
        .ok_or_else(|| AnalyticsError::Numerical(format!("period {}", period_months)))?;

    let growth = (1.0 + rate).powf(years);
    if !growth.is_finite() {
        return Err(AnalyticsError::Numerical(format!(
            "growth factor for {}% over {} years is not finite",
            annual_rate_percent, years
        )));
    }

    Decimal::from_f64(growth).ok_or_else(|| {
        AnalyticsError::Overflow(format!("growth factor {} out of decimal range", growth))
    })
}

fn ensure_non_negative(what: &str, value: Decimal) -> AnalyticsResult<()> {
    if value < Decimal::ZERO {
        return Err(AnalyticsError::InvalidInput(format!(
            "{} must not be negative, got {}",
            what, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_one_year_at_27_5() {
        let r = compute_compound_return(dec!(1000), dec!(27.5), dec!(12)).unwrap();
        assert_eq!(r.total_return, dec!(1275.00));
        assert_eq!(r.earnings, dec!(275.00));
        assert_eq!(r.effective_rate, dec!(27.50));
    }

    #[test]
    fn test_half_year_uses_fractional_exponent() {
        // 1.275^0.5 = 1.12915897...
        let r = compute_compound_return(dec!(1000), dec!(27.5), dec!(6)).unwrap();
        assert_eq!(r.total_return, dec!(1129.16));
        assert_eq!(r.earnings, dec!(129.16));
        assert_eq!(r.effective_rate, dec!(12.92));
    }

    #[test]
    fn test_not_monthly_compounding() {
        // Monthly compounding of 30% would give 1344.89 after a year.
        let r = compute_compound_return(dec!(1000), dec!(30), dec!(12)).unwrap();
        assert_eq!(r.total_return, dec!(1300.00));
    }

    #[test]
    fn test_multi_year() {
        // 1.3^2 = 1.69
        let r = compute_compound_return(dec!(5000), dec!(30), dec!(24)).unwrap();
        assert_eq!(r.total_return, dec!(8450.00));
        assert_eq!(r.earnings, dec!(3450.00));
        assert_eq!(r.effective_rate, dec!(69.00));
    }

    #[test]
    fn test_fractional_months() {
        let r = compute_compound_return(dec!(1000), dec!(30), dec!(1.5)).unwrap();
        let expected = 1000.0 * 1.3_f64.powf(0.125);
        assert_relative_eq!(
            r.total_return.to_f64().unwrap(),
            expected,
            max_relative = 1e-5
        );
    }

    #[test]
    fn test_zero_principal() {
        let r = compute_compound_return(Decimal::ZERO, dec!(27.5), dec!(12)).unwrap();
        assert_eq!(r.total_return, Decimal::ZERO);
        assert_eq!(r.earnings, Decimal::ZERO);
        assert_eq!(r.effective_rate, dec!(27.50));
    }

    #[test]
    fn test_zero_rate() {
        let r = compute_compound_return(dec!(1000), Decimal::ZERO, dec!(36)).unwrap();
        assert_eq!(r.total_return, dec!(1000));
        assert_eq!(r.earnings, Decimal::ZERO);
        assert_eq!(r.effective_rate, Decimal::ZERO);
    }

    #[test]
    fn test_negative_principal_rejected() {
        let err = compute_compound_return(dec!(-1), dec!(27.5), dec!(12)).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput(_)));

        let err = compute_ytd_projection(dec!(-1), dec!(26.8)).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput(_)));
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(matches!(
            compute_compound_return(dec!(1000), dec!(-2), dec!(12)),
            Err(AnalyticsError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_ytd_projection(dec!(1000), dec!(-2)),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_positive_period_rejected() {
        assert!(matches!(
            compute_compound_return(dec!(1000), dec!(27.5), Decimal::ZERO),
            Err(AnalyticsError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_compound_return(dec!(1000), dec!(27.5), dec!(-6)),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_overflow_reported() {
        let err = compute_compound_return(Decimal::MAX, dec!(50), dec!(12)).unwrap_err();
        assert!(matches!(err, AnalyticsError::Overflow(_)));
    }

    #[test]
    fn test_saturating_matches_checked_in_range() {
        for (principal, rate, months) in [
            (dec!(1000), dec!(27.5), dec!(12)),
            (dec!(1000), dec!(27.5), dec!(6)),
            (dec!(5000), dec!(30), dec!(24)),
            (Decimal::ZERO, dec!(20), dec!(1)),
        ] {
            assert_eq!(
                compound_return_saturating(principal, rate, months),
                compute_compound_return(principal, rate, months).unwrap()
            );
        }
        assert_eq!(
            ytd_projection_saturating(dec!(2500), dec!(29.1)),
            compute_ytd_projection(dec!(2500), dec!(29.1)).unwrap()
        );
    }

    #[test]
    fn test_saturating_out_of_range() {
        let r = compound_return_saturating(dec!(1000), dec!(30), Decimal::from(u32::MAX));
        assert_eq!(r.total_return, Decimal::MAX);
        assert_eq!(r.effective_rate, Decimal::MAX);
        assert!(r.earnings > Decimal::ZERO);

        let p = ytd_projection_saturating(Decimal::MAX, dec!(29.1));
        assert_eq!(p.projected_value, Decimal::MAX);
    }

    #[test]
    fn test_ytd_projection() {
        let p = compute_ytd_projection(dec!(1000), dec!(26.8)).unwrap();
        assert_eq!(p.ytd_earnings, dec!(268.00));
        assert_eq!(p.projected_value, dec!(1268.00));
    }

    #[test]
    fn test_ytd_is_simple_not_compounded() {
        let p = compute_ytd_projection(dec!(2500), dec!(29.1)).unwrap();
        assert_eq!(p.ytd_earnings, dec!(727.50));
        assert_eq!(p.projected_value, dec!(3227.50));
    }

    #[test]
    fn test_ytd_rounding_half_away_from_zero() {
        // 0.125 * 1 = 0.125 -> 0.13
        let p = compute_ytd_projection(dec!(0.5), dec!(25)).unwrap();
        assert_eq!(p.ytd_earnings, dec!(0.13));
        assert_eq!(p.projected_value, dec!(0.63));
    }

    #[test]
    fn test_round_output() {
        assert_eq!(round_output(dec!(1.005)), dec!(1.01));
        assert_eq!(round_output(dec!(1.004)), dec!(1.00));
        assert_eq!(round_output(dec!(-1.005)), dec!(-1.01));
    }

    #[test]
    fn test_growth_factor_matches_f64() {
        let growth = growth_factor(dec!(28.2), dec!(18)).unwrap();
        assert_relative_eq!(growth.to_f64().unwrap(), 1.282_f64.powf(1.5), max_relative = 1e-12);
    }

    #[test]
    fn test_serialized_field_names() {
        let r = compute_compound_return(dec!(1000), dec!(27.5), dec!(12)).unwrap();
        let value = serde_json::to_value(r).unwrap();
        assert_eq!(value["totalReturn"].as_f64(), Some(1275.0));
        assert_eq!(value["earnings"].as_f64(), Some(275.0));
        assert_eq!(value["effectiveRate"].as_f64(), Some(27.5));

        let p = compute_ytd_projection(dec!(1000), dec!(26.8)).unwrap();
        let value = serde_json::to_value(p).unwrap();
        assert_eq!(value["ytdEarnings"].as_f64(), Some(268.0));
        assert_eq!(value["projectedValue"].as_f64(), Some(1268.0));
    }

    proptest! {
        #[test]
        fn prop_total_return_never_below_principal(
            principal_cents in 0u64..10_000_000_000,
            rate_bps in 0u32..10_000,
            months in 1u32..=120,
        ) {
            let principal = Decimal::new(principal_cents as i64, 2);
            let rate = Decimal::new(i64::from(rate_bps), 2);
            let r = compute_compound_return(principal, rate, Decimal::from(months)).unwrap();

            prop_assert!(r.total_return >= principal);
            prop_assert!(r.earnings >= Decimal::ZERO);
            let diff = (r.earnings - (r.total_return - principal)).abs();
            prop_assert!(diff <= dec!(0.01));
        }

        #[test]
        fn prop_ytd_value_is_principal_plus_earnings(
            principal_cents in 0u64..10_000_000_000,
            rate_bps in 0u32..10_000,
        ) {
            let principal = Decimal::new(principal_cents as i64, 2);
            let rate = Decimal::new(i64::from(rate_bps), 2);
            let p = compute_ytd_projection(principal, rate).unwrap();

            prop_assert!(p.projected_value >= principal);
            let diff = (p.projected_value - (principal + p.ytd_earnings)).abs();
            prop_assert!(diff <= dec!(0.01));
        }
    }
}
