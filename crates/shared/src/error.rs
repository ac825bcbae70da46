//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Body message returned for every server-side failure.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client input rejected. The message is returned verbatim.
    #[error("{0}")]
    Validation(String),

    /// The upstream price service failed or sent an unusable payload.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Builds the validation error for an amount that failed to parse.
    #[must_use]
    pub fn invalid_amount(raw: &str) -> Self {
        Self::Validation(format!("Not a valid amount: {raw}"))
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::ExternalService(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the message safe to expose to the caller.
    ///
    /// Server-side causes are never leaked; they collapse to a generic message.
    #[must_use]
    pub fn public_message(&self) -> &str {
        match self {
            Self::Validation(msg) => msg.as_str(),
            Self::ExternalService(_) | Self::Internal(_) => INTERNAL_SERVER_ERROR_MESSAGE,
        }
    }
}
