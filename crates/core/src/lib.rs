//! `usersvc-core` — user domain and the service capability consumed by the API.
//!
//! This crate contains **no transport concerns**: HTTP decoding, encoding and
//! status mapping live in `usersvc-api`.

pub mod error;
pub mod id;
pub mod repository;
pub mod service;
pub mod user;

pub use error::{ServiceError, ServiceResult};
pub use id::UserId;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::{DirectoryService, LoggingService, UserService};
pub use user::User;
