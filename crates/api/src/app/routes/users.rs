use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
};

use usersvc_core::{User, UserService};

use crate::app::decode;
use crate::app::endpoints;
use crate::app::errors::ApiError;
use crate::context::AuthenticatedUser;

/// `POST /users/:id` — fetch a user. Requires a bearer token.
pub async fn get_user(
    Extension(service): Extension<Arc<dyn UserService>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = decode::parse_user_id(&id)?;
    tracing::debug!(caller = caller.username(), id = id.get(), "get user requested");

    let user = endpoints::get_user(service.as_ref(), id).await?;
    Ok(Json(user))
}
