//! Exchange rate set types and the upstream wire payload.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Current exchange rates for one base currency.
///
/// Rates are kept exactly as the upstream sent them (decimal strings).
/// Converting a rate to a number is the consumer's job, so a malformed
/// entry only fails the lookup that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRateSet {
    currency: String,
    rates: BTreeMap<String, String>,
}

impl ExchangeRateSet {
    /// Creates a new rate set.
    #[must_use]
    pub const fn new(currency: String, rates: BTreeMap<String, String>) -> Self {
        Self { currency, rates }
    }

    /// Base currency the rates are quoted against (e.g. "USD").
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the rate string for `symbol`, if the upstream sent one.
    #[must_use]
    pub fn raw_rate(&self, symbol: &str) -> Option<&str> {
        self.rates.get(symbol).map(String::as_str)
    }

    /// Number of quoted assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no asset is quoted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// `{"data": {...}}` envelope returned by the price API.
#[derive(Debug, Deserialize)]
pub(crate) struct RatesPayload {
    pub(crate) data: RatesData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RatesData {
    pub(crate) currency: String,
    pub(crate) rates: BTreeMap<String, String>,
}

impl From<RatesPayload> for ExchangeRateSet {
    fn from(payload: RatesPayload) -> Self {
        Self::new(payload.data.currency, payload.data.rates)
    }
}
