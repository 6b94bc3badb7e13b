//! Instrument records and identifiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::RiskLevel;
use crate::error::{CoreError, CoreResult};

/// Instrument identifier, stable across catalog reloads.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct InstrumentId(pub String);

impl InstrumentId {
    /// Create a new instrument ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for InstrumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for InstrumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One row of the instrument catalog.
///
/// Rates are percentages (`27.5` means 27.5%). `annual_rate` drives the
/// compound projection and `ytd_rate` drives the year-to-date projection;
/// the two are independent quotes.
///
/// # Example
///
/// ```rust
/// use yieldboard_core::{InstrumentRecord, RiskLevel};
/// use rust_decimal_macros::dec;
///
/// let bill = InstrumentRecord {
///     id: "tbill-91".into(),
///     name: "91-Day Treasury Bill".into(),
///     provider: "Bank of Ghana".into(),
///     kind: "T-Bill".into(),
///     annual_rate: dec!(27.5),
///     ytd_rate: dec!(26.8),
///     maturity_days: Some(91),
///     min_investment: dec!(100),
///     risk_level: RiskLevel::Low,
///     description: String::new(),
/// };
/// assert!(bill.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentRecord {
    /// Unique identifier.
    pub id: InstrumentId,
    /// Display name.
    pub name: String,
    /// Issuing institution.
    pub provider: String,
    /// Product category (T-Bill, Mutual Fund, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Nominal annual rate, in percent.
    pub annual_rate: Decimal,
    /// Average year-to-date rate, in percent.
    pub ytd_rate: Decimal,
    /// Days to maturity; `None` for open-ended products.
    pub maturity_days: Option<u32>,
    /// Minimum capital accepted by the provider.
    pub min_investment: Decimal,
    /// Risk band.
    pub risk_level: RiskLevel,
    /// Short description for display.
    #[serde(default)]
    pub description: String,
}

impl InstrumentRecord {
    /// Checks the record-level invariants.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInstrument` naming the first offending field.
    pub fn validate(&self) -> CoreResult<()> {
        let id = self.id.as_str();

        if id.trim().is_empty() {
            return Err(CoreError::invalid_instrument(id, "id", "must not be empty"));
        }
        if self.annual_rate < Decimal::ZERO {
            return Err(CoreError::invalid_instrument(
                id,
                "annualRate",
                format!("must not be negative (got {})", self.annual_rate),
            ));
        }
        if self.ytd_rate < Decimal::ZERO {
            return Err(CoreError::invalid_instrument(
                id,
                "ytdRate",
                format!("must not be negative (got {})", self.ytd_rate),
            ));
        }
        if self.min_investment < Decimal::ZERO {
            return Err(CoreError::invalid_instrument(
                id,
                "minInvestment",
                format!("must not be negative (got {})", self.min_investment),
            ));
        }
        if self.maturity_days == Some(0) {
            return Err(CoreError::invalid_instrument(
                id,
                "maturityDays",
                "must be positive when present",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> InstrumentRecord {
        InstrumentRecord {
            id: InstrumentId::new("mfund"),
            name: "M-Fund".to_string(),
            provider: "Databank".to_string(),
            kind: "Mutual Fund".to_string(),
            annual_rate: dec!(27.0),
            ytd_rate: dec!(26.3),
            maturity_days: None,
            min_investment: dec!(200),
            risk_level: RiskLevel::Medium,
            description: "Flagship fund.".to_string(),
        }
    }

    #[test]
    fn test_valid_record() {
        let record = sample();
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_negative_annual_rate_rejected() {
        let mut record = sample();
        record.annual_rate = dec!(-0.5);
        let err = record.validate().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidInstrument { field: "annualRate", .. }
        ));
    }

    #[test]
    fn test_negative_ytd_rate_rejected() {
        let mut record = sample();
        record.ytd_rate = dec!(-1);
        assert!(matches!(
            record.validate(),
            Err(CoreError::InvalidInstrument { field: "ytdRate", .. })
        ));
    }

    #[test]
    fn test_negative_min_investment_rejected() {
        let mut record = sample();
        record.min_investment = dec!(-50);
        assert!(matches!(
            record.validate(),
            Err(CoreError::InvalidInstrument { field: "minInvestment", .. })
        ));
    }

    #[test]
    fn test_zero_maturity_rejected() {
        let mut record = sample();
        record.maturity_days = Some(0);
        assert!(matches!(
            record.validate(),
            Err(CoreError::InvalidInstrument { field: "maturityDays", .. })
        ));
    }

    #[test]
    fn test_blank_id_rejected() {
        let mut record = sample();
        record.id = InstrumentId::new("  ");
        assert!(matches!(
            record.validate(),
            Err(CoreError::InvalidInstrument { field: "id", .. })
        ));
    }

    #[test]
    fn test_zero_rates_allowed() {
        let mut record = sample();
        record.annual_rate = Decimal::ZERO;
        record.ytd_rate = Decimal::ZERO;
        record.min_investment = Decimal::ZERO;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "id",
            "name",
            "provider",
            "type",
            "annualRate",
            "ytdRate",
            "maturityDays",
            "minInvestment",
            "riskLevel",
            "description",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj["maturityDays"], serde_json::Value::Null);
        assert_eq!(obj["riskLevel"], "MEDIUM RISK");
        assert_eq!(obj["annualRate"].as_f64(), Some(27.0));
    }

    #[test]
    fn test_description_optional_on_input() {
        let json = r#"{
            "id": "epack",
            "name": "E-Pack",
            "provider": "Databank",
            "type": "Money Market",
            "annualRate": 24.5,
            "ytdRate": 23.8,
            "maturityDays": null,
            "minInvestment": 100,
            "riskLevel": "LOW RISK"
        }"#;
        let record: InstrumentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.annual_rate, dec!(24.5));
        assert_eq!(record.min_investment, dec!(100));
        assert!(record.description.is_empty());
    }
}
