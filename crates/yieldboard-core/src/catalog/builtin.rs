//! Instruments compiled into the binary.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{InstrumentId, InstrumentRecord, RiskLevel};

#[allow(clippy::too_many_arguments)]
fn instrument(
    id: &str,
    name: &str,
    provider: &str,
    kind: &str,
    rates: (Decimal, Decimal),
    maturity_days: Option<u32>,
    min_investment: Decimal,
    risk_level: RiskLevel,
    description: &str,
) -> InstrumentRecord {
    InstrumentRecord {
        id: InstrumentId::new(id),
        name: name.to_string(),
        provider: provider.to_string(),
        kind: kind.to_string(),
        annual_rate: rates.0,
        ytd_rate: rates.1,
        maturity_days,
        min_investment,
        risk_level,
        description: description.to_string(),
    }
}

/// Ghanaian T-bills, funds and deposit products, `(annual, ytd)` rates in percent.
pub(super) fn records() -> Vec<InstrumentRecord> {
    vec![
        instrument(
            "tbill-91",
            "91-Day Treasury Bill",
            "Bank of Ghana",
            "T-Bill",
            (dec!(27.5), dec!(26.8)),
            Some(91),
            dec!(100),
            RiskLevel::Low,
            "Short-term government security with 91-day maturity period.",
        ),
        instrument(
            "tbill-182",
            "182-Day Treasury Bill",
            "Bank of Ghana",
            "T-Bill",
            (dec!(28.2), dec!(27.5)),
            Some(182),
            dec!(100),
            RiskLevel::Low,
            "Medium-term government security with 182-day maturity period.",
        ),
        instrument(
            "tbill-365",
            "365-Day Treasury Bill",
            "Bank of Ghana",
            "T-Bill",
            (dec!(29.5), dec!(28.9)),
            Some(365),
            dec!(100),
            RiskLevel::Low,
            "Long-term government security with 1-year maturity period.",
        ),
        instrument(
            "achieve-digisave",
            "Achieve Digisave Mutual Fund",
            "Achieve Financial Services",
            "Mutual Fund",
            (dec!(25.0), dec!(24.2)),
            None,
            dec!(50),
            RiskLevel::Medium,
            "Digital savings mutual fund offering competitive returns with flexible access.",
        ),
        instrument(
            "achieve-fixed",
            "Achieve Fixed Deposit",
            "Achieve Financial Services",
            "Fixed Deposit",
            (dec!(30.0), dec!(29.1)),
            Some(365),
            dec!(500),
            RiskLevel::Low,
            "Fixed deposit product with guaranteed returns over a fixed term.",
        ),
        instrument(
            "ic-wealth",
            "IC Wealth Mutual Fund",
            "IC Securities",
            "Mutual Fund",
            (dec!(26.5), dec!(25.8)),
            None,
            dec!(100),
            RiskLevel::Medium,
            "Diversified mutual fund managed by IC Securities for wealth growth.",
        ),
        instrument(
            "affinity-future",
            "Affinity Future Account",
            "Affinity Capital",
            "Savings",
            (dec!(22.0), dec!(21.5)),
            None,
            dec!(50),
            RiskLevel::Low,
            "Future-focused savings account with competitive interest rates.",
        ),
        instrument(
            "epack",
            "E-Pack",
            "Databank",
            "Money Market",
            (dec!(24.5), dec!(23.8)),
            None,
            dec!(100),
            RiskLevel::Low,
            "Databank's electronic investment package for money market instruments.",
        ),
        instrument(
            "mfund",
            "M-Fund",
            "Databank",
            "Mutual Fund",
            (dec!(27.0), dec!(26.3)),
            None,
            dec!(200),
            RiskLevel::Medium,
            "Databank's flagship mutual fund for medium to long-term wealth creation.",
        ),
    ]
}
