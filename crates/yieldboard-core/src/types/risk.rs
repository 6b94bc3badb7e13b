//! Risk classification of an instrument.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk band quoted for an instrument.
///
/// Serialized with the display labels used on the wire (`"LOW RISK"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Government paper, guaranteed deposits.
    #[serde(rename = "LOW RISK")]
    Low,
    /// Diversified funds.
    #[serde(rename = "MEDIUM RISK")]
    Medium,
    /// Anything else.
    #[serde(rename = "HIGH RISK")]
    High,
}

impl RiskLevel {
    /// Returns the wire label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_labels() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Medium).unwrap(),
            "\"MEDIUM RISK\""
        );
        let parsed: RiskLevel = serde_json::from_str("\"HIGH RISK\"").unwrap();
        assert_eq!(parsed, RiskLevel::High);
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert!(serde_json::from_str::<RiskLevel>("\"EXTREME RISK\"").is_err());
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(RiskLevel::Low.to_string(), "LOW RISK");
    }
}
