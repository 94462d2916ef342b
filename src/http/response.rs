//! Error responses.
//!
//! # Responsibilities
//! - Define the tagged error type every handler returns
//! - Render errors as `{"message": ...}` with the matching status code
//! - Answer unmatched routes and caught panics with the same shape
//!
//! # Design Decisions
//! - Status and message travel with the error; nothing is inferred at render time
//! - Validation details are logged, not echoed to the client

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower::timeout::error::Elapsed;

use crate::orders::PayloadError;

/// Fallback message when a failure carries none.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Errors surfaced by the HTTP API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing resource or route.
    #[error("{message}")]
    NotFound { message: String },

    /// Order body failed validation.
    #[error("Invalid order payload")]
    InvalidPayload(#[source] PayloadError),

    /// Anything else, with the status it should be reported under.
    #[error("{message}")]
    Internal { status: StatusCode, message: String },
}

impl ApiError {
    /// A resource lookup that found nothing.
    pub fn resource_not_found() -> Self {
        ApiError::NotFound {
            message: "Not found".to_string(),
        }
    }

    /// A request no route matched.
    pub fn route_not_found() -> Self {
        ApiError::NotFound {
            message: "Not Found".to_string(),
        }
    }

    /// A 500 with the given message, or the generic one if it is empty.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// A failure reported under a specific status.
    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        ApiError::Internal {
            status,
            message: if message.is_empty() {
                INTERNAL_SERVER_ERROR.to_string()
            } else {
                message
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { status, .. } => *status,
        }
    }
}

impl From<PayloadError> for ApiError {
    fn from(e: PayloadError) -> Self {
        ApiError::InvalidPayload(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        }

        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Fallback for requests no route matched.
pub async fn not_found() -> ApiError {
    ApiError::route_not_found()
}

/// Convert an error raised by a fallible middleware layer.
pub async fn middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::with_status(StatusCode::REQUEST_TIMEOUT, "Request timed out")
    } else {
        ApiError::internal(err.to_string())
    }
}

/// Convert a caught handler panic into a 500 response.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        String::new()
    };

    ApiError::internal(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: ApiError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_messages() {
        let (status, body) = render(ApiError::resource_not_found()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Not found");

        let (status, body) = render(ApiError::route_not_found()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Not Found");
    }

    #[tokio::test]
    async fn test_invalid_payload_hides_detail() {
        let (status, body) = render(PayloadError::EmptyItems.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Invalid order payload");
    }

    #[tokio::test]
    async fn test_internal_defaults() {
        let (status, body) = render(ApiError::internal("")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, INTERNAL_SERVER_ERROR);

        let (status, body) =
            render(ApiError::with_status(StatusCode::PAYLOAD_TOO_LARGE, "too big")).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body.message, "too big");
    }

    #[tokio::test]
    async fn test_panic_payloads() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "boom");

        let response = panic_response(Box::new(42u8));
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, INTERNAL_SERVER_ERROR);
    }
}
