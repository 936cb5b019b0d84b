//! The user service capability and its reference implementations.

use std::time::Instant;

use async_trait::async_trait;

use crate::{ServiceError, ServiceResult, User, UserId, UserRepository};

/// Business capability consumed by the HTTP endpoints.
///
/// One method per use case. Implementations may be local or call out to
/// another system; a failed downstream call is reported as
/// [`ServiceError::Unavailable`].
#[async_trait]
pub trait UserService: Send + Sync {
    /// Check credentials and return the matching user.
    async fn login(&self, username: &str, password: &str) -> ServiceResult<User>;

    /// Fetch a user by id.
    async fn get_user(&self, id: UserId) -> ServiceResult<User>;
}

/// [`UserService`] backed by a [`UserRepository`].
#[derive(Debug, Clone)]
pub struct DirectoryService<R> {
    repository: R,
}

impl<R: UserRepository> DirectoryService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for DirectoryService<R> {
    async fn login(&self, username: &str, password: &str) -> ServiceResult<User> {
        let user = self.repository.by_username(username)?;
        if user.password != password {
            return Err(ServiceError::Unauthorized);
        }
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> ServiceResult<User> {
        self.repository.by_id(id)
    }
}

/// Decorator logging every call made to the wrapped service.
#[derive(Debug, Clone)]
pub struct LoggingService<S> {
    inner: S,
}

impl<S: UserService> LoggingService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: UserService> UserService for LoggingService<S> {
    async fn login(&self, username: &str, password: &str) -> ServiceResult<User> {
        let started = Instant::now();
        let result = self.inner.login(username, password).await;
        tracing::info!(
            method = "login",
            username,
            ok = result.is_ok(),
            error = result.as_ref().err().map(tracing::field::display),
            took_ms = started.elapsed().as_millis() as u64,
            "user service call"
        );
        result
    }

    async fn get_user(&self, id: UserId) -> ServiceResult<User> {
        let started = Instant::now();
        let result = self.inner.get_user(id).await;
        tracing::info!(
            method = "get_user",
            id = id.get(),
            ok = result.is_ok(),
            error = result.as_ref().err().map(tracing::field::display),
            took_ms = started.elapsed().as_millis() as u64,
            "user service call"
        );
        result
    }
}
