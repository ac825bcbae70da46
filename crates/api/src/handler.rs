//! Request handling for the split endpoint.
//!
//! One call per request: validate, fetch, compute, respond. Each failure
//! returns before anything else runs, so a request gets exactly one response.

use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use tracing::{Instrument, Span, error, warn};

use coinsplit_core::rates::RateSource;
use coinsplit_core::split::{SplitCalculator, SplitRequest, SplitResult};
use coinsplit_shared::{AppError, AppResult};

use crate::response::{ApiError, PrettyJson};

/// Turns a raw amount into a split response.
///
/// Holds no per-request state. Log events are emitted inside the span given
/// at construction.
pub struct SplitHandler {
    rate_source: Arc<dyn RateSource>,
    calculator: SplitCalculator,
    log: Span,
}

impl SplitHandler {
    /// Creates a handler with the standard 70/30 calculator.
    #[must_use]
    pub fn new(rate_source: Arc<dyn RateSource>, log: Span) -> Self {
        Self {
            rate_source,
            calculator: SplitCalculator::new(),
            log,
        }
    }

    /// Handles one request and maps the outcome to an HTTP response.
    ///
    /// `200` with the pretty-printed split, `400` for an invalid amount,
    /// `500` for any upstream or calculation failure.
    pub async fn handle(&self, raw_amount: &str) -> Response {
        match self.split(raw_amount).await {
            Ok(result) => PrettyJson(result).into_response(),
            Err(err) => ApiError(err).into_response(),
        }
    }

    /// Validates `raw_amount`, fetches rates and computes the split.
    pub async fn split(&self, raw_amount: &str) -> AppResult<SplitResult> {
        let Some(request) = SplitRequest::parse(raw_amount) else {
            self.log.in_scope(|| {
                warn!(event = "invalid_amount", value = %raw_amount, "Invalid amount");
            });
            return Err(AppError::invalid_amount(raw_amount));
        };

        let rates = match self
            .rate_source
            .fetch_rates()
            .instrument(self.log.clone())
            .await
        {
            Ok(rates) => rates,
            Err(e) => {
                self.log.in_scope(|| {
                    error!(event = "upstream_failure", error = %e, "Failed to fetch exchange rates");
                });
                return Err(e.into());
            }
        };

        self.calculator
            .compute_split(request.amount(), &rates)
            .map_err(|e| {
                self.log.in_scope(|| {
                    error!(event = "split_failure", error = %e, "Failed to compute split");
                });
                e.into()
            })
    }
}
