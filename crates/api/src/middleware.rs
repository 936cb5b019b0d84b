use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::Instrument;
use uuid::Uuid;

use usersvc_auth::JwtValidator;

use crate::app::errors::ApiError;
use crate::context::{AuthenticatedUser, CorrelationId};

pub const CORRELATION_ID_HEADER: &str = "x-api-correlation-id";

const MAX_CORRELATION_ID_LEN: usize = 128;

#[derive(Clone)]
pub struct AuthState {
    pub jwt: Arc<dyn JwtValidator>,
}

/// Reject requests without a valid bearer token; otherwise attach the caller.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(req.headers())?;

    let claims = state
        .jwt
        .validate(token, Utc::now())
        .map_err(|e| ApiError::Unauthenticated(e.to_string()))?;

    tracing::debug!(user_id = claims.user_id.get(), "bearer token accepted");
    req.extensions_mut()
        .insert(AuthenticatedUser::new(claims.user_id, claims.username));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let missing = || ApiError::Unauthenticated("missing bearer token".to_string());

    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(missing)?;

    let header = header.to_str().map_err(|_| missing())?;

    let token = header.strip_prefix("Bearer ").ok_or_else(missing)?.trim();
    if token.is_empty() {
        return Err(missing());
    }

    Ok(token)
}

/// Tag the request with a correlation id and log its completion.
///
/// A well-formed incoming `X-Api-Correlation-Id` is reused; otherwise a fresh
/// UUIDv7 is generated. The id is always echoed on the response.
pub async fn correlation_id(mut req: Request<Body>, next: Next) -> Response {
    let id = incoming_correlation_id(req.headers())
        .unwrap_or_else(|| CorrelationId::new(Uuid::now_v7().to_string()));

    let span = tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        correlation_id = %id
    );
    req.extensions_mut().insert(id.clone());

    let mut res = next.run(req).instrument(span.clone()).await;

    if let Ok(value) = HeaderValue::from_str(id.as_str()) {
        res.headers_mut()
            .insert(HeaderName::from_static(CORRELATION_ID_HEADER), value);
    }
    span.in_scope(|| tracing::info!(status = res.status().as_u16(), "request completed"));

    res
}

fn incoming_correlation_id(headers: &HeaderMap) -> Option<CorrelationId> {
    let value = headers.get(CORRELATION_ID_HEADER)?.to_str().ok()?.trim();
    if value.is_empty() || value.len() > MAX_CORRELATION_ID_LEN {
        return None;
    }
    Some(CorrelationId::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(HeaderName::from_static(*name), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn bearer_token_is_extracted_and_trimmed() {
        let map = headers(&[("authorization", "Bearer  abc.def ")]);
        assert_eq!(extract_bearer(&map).unwrap(), "abc.def");
    }

    #[test]
    fn non_bearer_or_empty_credentials_are_rejected() {
        assert!(extract_bearer(&HeaderMap::new()).is_err());
        assert!(extract_bearer(&headers(&[("authorization", "Basic abc")])).is_err());
        assert!(extract_bearer(&headers(&[("authorization", "Bearer   ")])).is_err());

        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, HeaderValue::from_static("bearer abc"));
        assert!(extract_bearer(&map).is_err());
    }

    #[test]
    fn incoming_correlation_id_is_reused_when_sane() {
        let map = headers(&[(CORRELATION_ID_HEADER, "1234")]);
        assert_eq!(
            incoming_correlation_id(&map),
            Some(CorrelationId::new("1234"))
        );

        let long = "x".repeat(MAX_CORRELATION_ID_LEN + 1);
        assert_eq!(
            incoming_correlation_id(&headers(&[(CORRELATION_ID_HEADER, long.as_str())])),
            None
        );
        assert_eq!(incoming_correlation_id(&HeaderMap::new()), None);
    }
}
