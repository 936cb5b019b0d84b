//! Endpoints: adapt decoded requests into calls on the [`UserService`].
//!
//! The returned `Result` is the tagged response value; handlers branch on it
//! to pick success or error encoding.

use usersvc_core::{ServiceResult, User, UserId, UserService};

use crate::app::dto::{LoginRequest, LoginResponse};

pub async fn login(service: &dyn UserService, request: LoginRequest) -> ServiceResult<LoginResponse> {
    let user = service.login(&request.username, &request.password).await?;
    Ok(LoginResponse { user })
}

pub async fn get_user(service: &dyn UserService, id: UserId) -> ServiceResult<User> {
    service.get_user(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use usersvc_core::{DirectoryService, InMemoryUserRepository, ServiceError};

    fn service() -> DirectoryService<InMemoryUserRepository> {
        DirectoryService::new(InMemoryUserRepository::new([User::new(
            UserId::new(1),
            "alice",
            "secret",
        )]))
    }

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn login_wraps_user_in_response() {
        let res = login(&service(), request("alice", "secret")).await.unwrap();
        assert_eq!(res.user.username, "alice");
    }

    #[tokio::test]
    async fn login_surfaces_service_errors_unchanged() {
        assert_eq!(
            login(&service(), request("alice", "nope")).await,
            Err(ServiceError::Unauthorized)
        );
        assert_eq!(
            login(&service(), request("bob", "secret")).await,
            Err(ServiceError::NotFound)
        );
    }

    #[tokio::test]
    async fn get_user_delegates_to_service() {
        assert_eq!(get_user(&service(), UserId::new(1)).await.unwrap().username, "alice");
        assert_eq!(
            get_user(&service(), UserId::new(2)).await,
            Err(ServiceError::NotFound)
        );
    }
}
