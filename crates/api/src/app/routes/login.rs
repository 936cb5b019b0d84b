use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;

use usersvc_auth::TokenIssuer;
use usersvc_core::UserService;

use crate::app::decode::JsonBody;
use crate::app::dto::LoginRequest;
use crate::app::endpoints;
use crate::app::errors::ApiError;

pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// `POST /login/:id` — check credentials, answer with the user and a bearer
/// token in `X-Auth-Token`.
///
/// The `:id` segment is only recorded; lookup is by username.
pub async fn login(
    Extension(service): Extension<Arc<dyn UserService>>,
    Extension(tokens): Extension<Arc<dyn TokenIssuer>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<Response, ApiError> {
    tracing::debug!(path_id = %id, username = %body.username, "login requested");

    let response = endpoints::login(service.as_ref(), body).await?;

    let token = tokens
        .issue(&response.user, Utc::now())
        .map_err(|e| ApiError::internal(e.to_string()))?;
    let token = HeaderValue::from_str(&token).map_err(|e| ApiError::internal(e.to_string()))?;

    let mut res = (StatusCode::OK, Json(response)).into_response();
    res.headers_mut()
        .insert(HeaderName::from_static(AUTH_TOKEN_HEADER), token);
    Ok(res)
}
