//! Split calculation.
//!
//! Each leg's spend is `amount * percent / 100`. Multiplying before dividing
//! keeps the result exact for every amount whose scale leaves two spare
//! digits, so the two legs always sum back to the amount.

use rust_decimal::Decimal;

use coinsplit_shared::types::parse_decimal;

use super::error::SplitError;
use super::types::{AssetAllocation, SplitConfig, SplitLeg, SplitResult};
use crate::rates::ExchangeRateSet;

/// Computes the fixed two-leg allocation. Stateless and `Copy`; safe to share
/// across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitCalculator {
    config: SplitConfig,
}

impl SplitCalculator {
    /// Creates a calculator for the standard 70/30 BTC/ETH split.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: SplitConfig::STANDARD,
        }
    }

    /// Splits `amount` between the two legs, valuing each at its current rate.
    ///
    /// # Errors
    ///
    /// - `MissingRate` / `InvalidRate` if either leg's rate is absent or not a
    ///   non-negative decimal. Unusable rates are never treated as zero.
    /// - `Overflow` if a product leaves the decimal range.
    pub fn compute_split(
        &self,
        amount: Decimal,
        rates: &ExchangeRateSet,
    ) -> Result<SplitResult, SplitError> {
        let major = allocate(amount, self.config.major(), rates)?;
        let minor = allocate(amount, self.config.minor(), rates)?;

        Ok(SplitResult {
            amount,
            major,
            minor,
        })
    }
}

fn allocate(
    amount: Decimal,
    leg: SplitLeg,
    rates: &ExchangeRateSet,
) -> Result<AssetAllocation, SplitError> {
    let rate = resolve_rate(rates, leg.symbol)?;
    let spent = percent_of(amount, leg.percent)?;
    let hold = spent.checked_mul(rate).ok_or(SplitError::Overflow)?;

    Ok(AssetAllocation {
        symbol: leg.symbol.to_string(),
        rate,
        hold,
        spent,
    })
}

/// `amount * percent / 100`, in that order.
pub(crate) fn percent_of(amount: Decimal, percent: u32) -> Result<Decimal, SplitError> {
    amount
        .checked_mul(Decimal::from(percent))
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .ok_or(SplitError::Overflow)
}

/// Converts the rate string for `symbol` to a decimal.
pub(crate) fn resolve_rate(rates: &ExchangeRateSet, symbol: &str) -> Result<Decimal, SplitError> {
    let raw = rates
        .raw_rate(symbol)
        .ok_or_else(|| SplitError::MissingRate(symbol.to_string()))?;

    parse_decimal(raw)
        .filter(|rate| *rate >= Decimal::ZERO)
        .ok_or_else(|| SplitError::InvalidRate {
            symbol: symbol.to_string(),
            value: raw.to_string(),
        })
}
