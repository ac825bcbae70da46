//! Rate source error types.

use coinsplit_shared::AppError;
use thiserror::Error;

/// Failures while fetching exchange rates from the upstream service.
#[derive(Debug, Error)]
pub enum RateSourceError {
    /// Transport failure: connection refused, DNS, TLS, or a broken body read.
    #[error("Rate request to {endpoint} failed: {source}")]
    Network {
        /// Endpoint that was queried.
        endpoint: String,
        /// Underlying transport error.
        source: reqwest::Error,
    },

    /// The response body did not match the expected rates schema.
    #[error("Malformed rates payload: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<RateSourceError> for AppError {
    fn from(err: RateSourceError) -> Self {
        Self::ExternalService(err.to_string())
    }
}
