//! Event domain error types

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use std::time::Duration;
use thiserror::Error;

/// Result type for event operations
pub type Result<T> = std::result::Result<T, EventError>;

/// Every variant is a store-operation failure; request decode failures are
/// rejected earlier by the extractor.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("no event matches ID '{id}'")]
    NotFound { id: String },

    #[error("{0}")]
    Database(#[from] mongodb::error::Error),

    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}

// Not-found maps to 500 like every other store failure.
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_is_internal_error() {
        let response = EventError::NotFound { id: "e1".into() }.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_timeout_message() {
        let err = EventError::Timeout {
            operation: "find_one",
            after: Duration::from_secs(30),
        };
        assert_eq!(err.to_string(), "find_one timed out after 30s");
    }
}
