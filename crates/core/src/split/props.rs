//! Property-based tests for the split calculator.
//!
//! - Spent legs always sum to the amount
//! - Each hold is exactly spent * rate
//! - Calculation is deterministic

use std::collections::BTreeMap;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::SplitCalculator;
use crate::rates::ExchangeRateSet;

/// Strategy to generate non-negative amounts (0 to 10,000,000 with up to 8 decimals).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000_000i64, 0u32..=8).prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Strategy to generate exchange rates (0.00000001 to 100,000).
fn rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_000_000i64).prop_map(|v| Decimal::new(v, 8))
}

fn rate_set(btc: Decimal, eth: Decimal) -> ExchangeRateSet {
    ExchangeRateSet::new(
        "USD".to_string(),
        BTreeMap::from([
            ("BTC".to_string(), btc.to_string()),
            ("ETH".to_string(), eth.to_string()),
        ]),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* non-negative amount, the two spent legs sum to the amount.
    #[test]
    fn prop_spent_sums_to_amount(
        amount in amount(),
        btc in rate(),
        eth in rate(),
    ) {
        let result = SplitCalculator::new()
            .compute_split(amount, &rate_set(btc, eth))
            .unwrap();

        prop_assert_eq!(result.major.spent + result.minor.spent, amount);
        prop_assert_eq!(result.amount, amount);
    }

    /// *For any* amount and rates, each hold equals spent * rate.
    #[test]
    fn prop_hold_is_spent_times_rate(
        amount in amount(),
        btc in rate(),
        eth in rate(),
    ) {
        let result = SplitCalculator::new()
            .compute_split(amount, &rate_set(btc, eth))
            .unwrap();

        prop_assert_eq!(result.major.rate, btc);
        prop_assert_eq!(result.minor.rate, eth);
        prop_assert_eq!(result.major.hold, result.major.spent * result.major.rate);
        prop_assert_eq!(result.minor.hold, result.minor.spent * result.minor.rate);
    }

    /// The major leg never receives less than the minor leg.
    #[test]
    fn prop_major_not_less_than_minor(amount in amount()) {
        let one = Decimal::ONE;
        let result = SplitCalculator::new()
            .compute_split(amount, &rate_set(one, one))
            .unwrap();

        prop_assert!(result.major.spent >= result.minor.spent);
    }

    /// Calling compute_split twice with the same inputs gives the same result.
    #[test]
    fn prop_split_is_deterministic(
        amount in amount(),
        btc in rate(),
        eth in rate(),
    ) {
        let calc = SplitCalculator::new();
        let rates = rate_set(btc, eth);

        let first = calc.compute_split(amount, &rates).unwrap();
        let second = calc.compute_split(amount, &rates).unwrap();

        prop_assert_eq!(first, second);
    }
}
