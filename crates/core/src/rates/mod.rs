//! Exchange rates fetched from the upstream price-quote service.

pub mod error;
pub mod source;
pub mod types;

pub use error::RateSourceError;
pub use source::{HttpRateSource, RateSource, parse_rates};
pub use types::ExchangeRateSet;
