//! Error-to-HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors that surface to the HTTP caller. Translation failures never
/// appear here; the gateway recovers them silently.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected before the pipeline runs.
    #[error("{0}")]
    Validation(String),

    /// Classification failed; fatal to the request.
    #[error("Failed to analyze sentiment: {0}")]
    Analysis(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_error_message_format() {
        let error = ApiError::Analysis("model exploded".to_string());
        assert_eq!(error.to_string(), "Failed to analyze sentiment: model exploded");
    }
}
