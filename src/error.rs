//! Error types for request handling.
//!
//! Every handler resolves to either a JSON success body or an [`ApiError`];
//! no error propagates past the handler boundary. Error responses carry the
//! message as plain text with the mapped status code, matching the API's
//! original wire behavior (success bodies are JSON, errors are not).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Error taxonomy for the task API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, empty, or malformed input. Maps to 400 with the
    /// descriptive text.
    #[error("{0}")]
    Validation(String),

    /// Zero rows matched the requested key. Maps to 404.
    #[error("{0}")]
    NotFound(String),

    /// Any other failure. Maps to 500 carrying only the generic public
    /// message; the underlying cause is logged at the call site and never
    /// sent to the client.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::validation("required fields are missing: title");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "required fields are missing: title");
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            ApiError::not_found("task not found").status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn internal_maps_to_500() {
        assert_eq!(
            ApiError::internal("failed to create task").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
