//! Upstream price-quote client.

use async_trait::async_trait;
use tracing::debug;

use super::error::RateSourceError;
use super::types::{ExchangeRateSet, RatesPayload};

/// Provides the current exchange rates.
///
/// Implementations hold no per-request state and may be shared across
/// concurrent requests.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches a fresh rate set. Nothing is cached between calls.
    async fn fetch_rates(&self) -> Result<ExchangeRateSet, RateSourceError>;
}

/// Fetches rates over HTTP from a Coinbase-style `exchange-rates` endpoint.
#[derive(Debug, Clone)]
pub struct HttpRateSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRateSource {
    /// Creates a source for `endpoint` with a default client.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Creates a source that reuses an existing client's connection pool.
    #[must_use]
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Issues a single GET to `endpoint` and parses the body.
    ///
    /// The status code is not checked: an error page fails to parse and
    /// surfaces as [`RateSourceError::Parse`].
    pub async fn fetch_rates_from(
        &self,
        endpoint: &str,
    ) -> Result<ExchangeRateSet, RateSourceError> {
        let network = |source| RateSourceError::Network {
            endpoint: endpoint.to_string(),
            source,
        };

        let response = self.client.get(endpoint).send().await.map_err(network)?;
        let status = response.status();
        let body = response.bytes().await.map_err(network)?;

        debug!(
            endpoint = %endpoint,
            status = %status,
            bytes = body.len(),
            "Exchange rates received"
        );

        parse_rates(&body)
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn fetch_rates(&self) -> Result<ExchangeRateSet, RateSourceError> {
        self.fetch_rates_from(&self.endpoint).await
    }
}

/// Decodes an exchange-rates payload.
///
/// The whole body must match `{"data": {"currency": .., "rates": {..}}}` with
/// string-valued rates; otherwise nothing is returned.
pub fn parse_rates(body: &[u8]) -> Result<ExchangeRateSet, RateSourceError> {
    let payload: RatesPayload = serde_json::from_slice(body)?;
    Ok(payload.into())
}
