//! Response types.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::error;

use coinsplit_shared::AppError;

/// Error body: `{"code": <status>, "message": <text>}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body.
    pub code: u16,
    /// Caller-facing message.
    pub message: String,
}

/// Wraps an `AppError` so it can be returned from a handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.status_code();
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            code,
            message: self.0.public_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON response indented with four spaces.
#[derive(Debug)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        let mut buf = Vec::with_capacity(256);
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));

        match self.0.serialize(&mut ser) {
            Ok(()) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                buf,
            )
                .into_response(),
            Err(e) => {
                error!(error = %e, "Failed to serialize response");
                ApiError(AppError::Internal(e.to_string())).into_response()
            }
        }
    }
}
