//! Error taxonomy of the HTTP layer and its single encoding function.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use usersvc_core::ServiceError;

/// The request could not be turned into a typed value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed request body: {0}")]
    Body(String),

    /// Includes bodies over the extractor's size limit; these stay in the
    /// decode domain (400) rather than getting a dedicated 413.
    #[error("could not read request body: {0}")]
    Read(String),

    #[error("invalid path parameter '{name}': {reason}")]
    Path { name: &'static str, reason: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Failure while decoding the request.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Failure reported by the invoked service.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Missing or rejected bearer credentials.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Anything else, e.g. failing to sign a token.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Status code for this error.
    ///
    /// Identity errors from the service win over the generic mapping: a
    /// service that reports `NotFound` or `Unauthorized` gets 404/403, any
    /// other service failure is a failed downstream call (503).
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Service(ServiceError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::Unauthorized) => StatusCode::FORBIDDEN,
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Service(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        json_error(status, self.to_string())
    }
}

/// `{"error": "<message>"}` with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
