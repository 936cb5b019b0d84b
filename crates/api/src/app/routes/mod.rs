use axum::{
    Router,
    routing::{get, post},
};

pub mod login;
pub mod system;
pub mod users;

// Every route carries a method fallback: wrong verbs get the JSON 405 envelope.

/// Routes reachable without credentials.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health).fallback(system::method_not_allowed))
        .route(
            "/login/:id",
            post(login::login).fallback(system::method_not_allowed),
        )
}

/// Routes that require an authenticated caller.
pub fn guarded_router() -> Router {
    Router::new().route(
        "/users/:id",
        post(users::get_user).fallback(system::method_not_allowed),
    )
}
