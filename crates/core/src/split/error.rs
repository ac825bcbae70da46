//! Split error types.

use coinsplit_shared::AppError;
use thiserror::Error;

/// Split calculation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// The rate set has no entry for a configured asset.
    #[error("No rate for {0} in the rate set")]
    MissingRate(String),

    /// A rate string is not a non-negative decimal.
    #[error("Invalid rate for {symbol}: {value:?}")]
    InvalidRate {
        /// Asset symbol.
        symbol: String,
        /// Rate as received.
        value: String,
    },

    /// A product exceeded the decimal range.
    #[error("Arithmetic overflow while splitting")]
    Overflow,
}

impl From<SplitError> for AppError {
    fn from(err: SplitError) -> Self {
        Self::Internal(err.to_string())
    }
}
