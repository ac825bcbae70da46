//! Split request, configuration and result types.

use rust_decimal::Decimal;
use serde::Serialize;

use coinsplit_shared::types::parse_decimal;

/// One leg of the split: which asset, and what share of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitLeg {
    /// Asset symbol, as keyed in the upstream rate set.
    pub symbol: &'static str,
    /// Whole-number percentage of the amount spent on this asset.
    pub percent: u32,
}

/// The two fixed legs of the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    major: SplitLeg,
    minor: SplitLeg,
}

impl SplitConfig {
    /// 70% BTC, 30% ETH.
    pub const STANDARD: Self = Self {
        major: SplitLeg {
            symbol: "BTC",
            percent: 70,
        },
        minor: SplitLeg {
            symbol: "ETH",
            percent: 30,
        },
    };

    /// The 70% leg.
    #[must_use]
    pub const fn major(&self) -> SplitLeg {
        self.major
    }

    /// The 30% leg.
    #[must_use]
    pub const fn minor(&self) -> SplitLeg {
        self.minor
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A validated amount to split.
///
/// Only non-negative values whose percentage products fit in a `Decimal`
/// can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRequest {
    amount: Decimal,
}

impl SplitRequest {
    /// Parses and validates a raw amount string.
    ///
    /// Returns `None` for non-numeric, negative, or out-of-range input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let amount = parse_decimal(raw)?;
        if amount < Decimal::ZERO {
            return None;
        }
        // The calculator multiplies by the percentage before dividing.
        amount.checked_mul(Decimal::ONE_HUNDRED)?;

        // "-0" parses with a negative sign
        let amount = if amount.is_zero() { Decimal::ZERO } else { amount };
        Some(Self { amount })
    }

    /// The validated amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }
}

/// One asset's share of the split.
///
/// Serialized as `{"coin", "rate", "hold", "spent"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetAllocation {
    /// Asset symbol.
    #[serde(rename = "coin")]
    pub symbol: String,
    /// Units of the asset per unit of base currency.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    /// Asset quantity bought: `spent * rate`.
    #[serde(with = "rust_decimal::serde::float")]
    pub hold: Decimal,
    /// Base-currency amount assigned to this asset.
    #[serde(with = "rust_decimal::serde::float")]
    pub spent: Decimal,
}

/// Result of splitting an amount 70/30.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitResult {
    /// The input amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// The 70% allocation.
    #[serde(rename = "70%")]
    pub major: AssetAllocation,
    /// The 30% allocation.
    #[serde(rename = "30%")]
    pub minor: AssetAllocation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_config() {
        let config = SplitConfig::default();
        assert_eq!(config.major().symbol, "BTC");
        assert_eq!(config.major().percent, 70);
        assert_eq!(config.minor().symbol, "ETH");
        assert_eq!(config.minor().percent, 30);
        assert_eq!(config.major().percent + config.minor().percent, 100);
    }

    #[rstest]
    #[case("1000", dec!(1000))]
    #[case("0", dec!(0))]
    #[case("-0", dec!(0))]
    #[case("0.01", dec!(0.01))]
    #[case("1e3", dec!(1000))]
    fn test_request_parse_valid(#[case] raw: &str, #[case] expected: Decimal) {
        let request = SplitRequest::parse(raw).unwrap();
        assert_eq!(request.amount(), expected);
        assert!(!request.amount().is_sign_negative());
    }

    #[rstest]
    #[case::empty("")]
    #[case::trailing_garbage("100abc")]
    #[case::negative("-5")]
    #[case::nan("NaN")]
    #[case::infinity("Inf")]
    #[case::too_large("79228162514264337593543950335")]
    fn test_request_parse_invalid(#[case] raw: &str) {
        assert_eq!(SplitRequest::parse(raw), None);
    }

    #[test]
    fn test_result_serialization() {
        let result = SplitResult {
            amount: dec!(1000),
            major: AssetAllocation {
                symbol: "BTC".to_string(),
                rate: dec!(0.5),
                hold: dec!(350),
                spent: dec!(700),
            },
            minor: AssetAllocation {
                symbol: "ETH".to_string(),
                rate: dec!(1),
                hold: dec!(300),
                spent: dec!(300),
            },
        };

        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "amount": 1000.0,
                "70%": {"coin": "BTC", "rate": 0.5, "hold": 350.0, "spent": 700.0},
                "30%": {"coin": "ETH", "rate": 1.0, "hold": 300.0, "spent": 300.0}
            })
        );
    }

    #[test]
    fn test_result_field_order() {
        let result = SplitResult {
            amount: dec!(0),
            major: AssetAllocation {
                symbol: "BTC".to_string(),
                rate: dec!(0),
                hold: dec!(0),
                spent: dec!(0),
            },
            minor: AssetAllocation {
                symbol: "ETH".to_string(),
                rate: dec!(0),
                hold: dec!(0),
                spent: dec!(0),
            },
        };

        let text = serde_json::to_string(&result).unwrap();

        assert!(text.starts_with(r#"{"amount":"#));
        assert!(text.find(r#""70%""#) < text.find(r#""30%""#));
        assert!(text.contains(r#"{"coin":"BTC","rate":"#));
    }
}
