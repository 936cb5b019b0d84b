use axum::{http::StatusCode, response::Response};

use crate::app::errors;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn not_found() -> Response {
    errors::json_error(StatusCode::NOT_FOUND, "no such route")
}

pub async fn method_not_allowed() -> Response {
    errors::json_error(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}
