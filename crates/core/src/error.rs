//! Service error model.

use thiserror::Error;

/// Result type returned by [`crate::UserService`] operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure reported by the user service.
///
/// `NotFound` and `Unauthorized` are identity errors the transport maps to
/// dedicated status codes. Anything else is a failed downstream call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The requested user does not exist.
    #[error("not found")]
    NotFound,

    /// Credentials were rejected.
    #[error("unauthorized")]
    Unauthorized,

    /// The service (or something it depends on) could not complete the call.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

impl ServiceError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
