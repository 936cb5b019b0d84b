//! Transport decoding: raw HTTP request parts into typed values.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use usersvc_core::UserId;

use crate::app::dto::LoginRequest;
use crate::app::errors::{ApiError, DecodeError};

/// Parse a JSON body into `T`. Content-Type is not inspected.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(body).map_err(|e| DecodeError::Body(e.to_string()))
}

/// Both `username` and `password` must be present; values pass through as sent.
pub fn decode_login_request(body: &[u8]) -> Result<LoginRequest, DecodeError> {
    decode_json(body)
}

pub fn parse_user_id(raw: &str) -> Result<UserId, DecodeError> {
    raw.parse().map_err(|e: core::num::ParseIntError| DecodeError::Path {
        name: "id",
        reason: e.to_string(),
    })
}

/// JSON body extractor whose rejection is an [`ApiError::Decode`].
///
/// Unlike `axum::Json` this neither requires a JSON content type nor emits
/// plain-text rejections, so every decode failure uses the error envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| DecodeError::Read(e.body_text()))?;
        Ok(Self(decode_json(&bytes)?))
    }
}
