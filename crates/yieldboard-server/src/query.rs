//! Lenient parsing of numeric query parameters.
//!
//! Bad numeric input never produces an error response. A parameter is read
//! from its leading number (`"2500abc"` reads as 2500) and anything that does
//! not yield a usable value falls back to the documented default. Each
//! parameter falls back on its own; a bad `capital` leaves `period` intact.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use yieldboard_analytics::{Capital, HoldingPeriod, RankingLimits};

/// Raw key/value pairs of a query string, in order of appearance.
pub type QueryPairs = Vec<(String, String)>;

/// Query string of `/api/instruments/compare`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CompareQuery {
    /// Capital to invest.
    pub capital: Option<String>,
    /// Holding period in months.
    pub period: Option<String>,
}

impl CompareQuery {
    /// Picks the parameters out of decoded query pairs. A repeated key keeps
    /// its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            capital: first_value(pairs, "capital"),
            period: first_value(pairs, "period"),
        }
    }
}

/// Query string of `/api/instruments/ytd`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct YtdQuery {
    /// Capital to invest.
    pub capital: Option<String>,
}

impl YtdQuery {
    /// Picks the parameters out of decoded query pairs.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            capital: first_value(pairs, "capital"),
        }
    }
}

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Reads the capital parameter.
///
/// Missing, unparseable, zero and negative amounts all become
/// [`Capital::DEFAULT`], as do amounts above
/// [`RankingLimits::max_capital`].
pub fn capital_or_default(raw: Option<&str>, limits: &RankingLimits) -> Capital {
    let parsed = raw
        .and_then(leading_decimal)
        .filter(|amount| *amount > Decimal::ZERO)
        .and_then(|amount| limits.capital(amount));

    match parsed {
        Some(capital) => capital,
        None => {
            if raw.is_some() {
                debug!(raw = ?raw, "unusable capital, using default");
            }
            Capital::DEFAULT
        }
    }
}

/// Reads the period parameter.
///
/// Only the leading integer counts (`"6.5"` reads as 6). Missing,
/// unparseable and non-positive periods all become
/// [`HoldingPeriod::DEFAULT`], as do periods above
/// [`RankingLimits::max_period`], past which growth leaves decimal range.
pub fn period_or_default(raw: Option<&str>, limits: &RankingLimits) -> HoldingPeriod {
    let parsed = raw
        .and_then(leading_integer)
        .and_then(|months| u32::try_from(months).ok())
        .and_then(|months| limits.period(months));

    match parsed {
        Some(period) => period,
        None => {
            if raw.is_some() {
                debug!(raw = ?raw, "unusable period, using default");
            }
            HoldingPeriod::DEFAULT
        }
    }
}

/// Longest prefix of `input` (after leading whitespace) that reads as a
/// decimal number with an optional exponent.
fn float_prefix(input: &str) -> Option<&str> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let digits_from = |mut i: usize| {
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if end < len && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        digits += frac_end - (end + 1);
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < len && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

fn leading_decimal(input: &str) -> Option<Decimal> {
    let number = float_prefix(input)?;
    Decimal::from_str(number)
        .or_else(|_| Decimal::from_scientific(number))
        .ok()
        .or_else(|| number.parse::<f64>().ok().and_then(Decimal::from_f64))
}

fn leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let sign_len = usize::from(matches!(s.as_bytes().first(), Some(b'+' | b'-')));
    let digit_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_len == 0 {
        return None;
    }
    s[..sign_len + digit_len].parse().ok()
}
