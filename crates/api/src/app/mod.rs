//! HTTP API application wiring (Axum router + middleware chain).
//!
//! - `decode.rs`: transport decoding (body and path parameters)
//! - `endpoints.rs`: adapt decoded requests into service calls
//! - `routes/`: HTTP handlers and the route table
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: error taxonomy, status mapping and the JSON error envelope

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use usersvc_auth::{Hs256Jwt, JwtValidator, TokenIssuer};
use usersvc_core::UserService;

use crate::middleware;

pub mod decode;
pub mod dto;
pub mod endpoints;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// All collaborators are injected; nothing is resolved from global state.
pub fn build_app(service: Arc<dyn UserService>, jwt: Arc<Hs256Jwt>) -> Router {
    let validator: Arc<dyn JwtValidator> = jwt.clone();
    let issuer: Arc<dyn TokenIssuer> = jwt;
    let auth_state = middleware::AuthState { jwt: validator };

    // `route_layer` so unknown paths still fall through to the 404 handler.
    let guarded = routes::guarded_router().route_layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .merge(routes::public_router())
        .merge(guarded)
        .fallback(routes::system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::correlation_id))
                .layer(Extension(service))
                .layer(Extension(issuer)),
        )
}
