//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use receipt_processor_core::PointsError;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the receipt processor.
#[derive(Debug, Error)]
pub enum AppError {
    /// Receipt lookup or insert failed.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// The stored receipt could not be scored.
    #[error("{0}")]
    Points(#[from] PointsError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body exceeded the configured limit.
    #[error("Payload too large")]
    PayloadTooLarge,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}

impl AppError {
    /// HTTP status returned for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            // Generated ids colliding is our fault, not the client's
            Self::Store(StoreError::DuplicateId(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(_) | Self::Points(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Rejected request");
        }

        // Don't expose internal error details to clients
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
