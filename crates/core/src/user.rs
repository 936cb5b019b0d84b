//! User value returned by the service.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// A user known to the service.
///
/// The password is kept for credential checks but never leaves the process:
/// it is skipped on serialization and defaults to empty on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    #[serde(rename = "type")]
    pub user_type: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            username: username.into(),
            user_type: String::new(),
            password: password.into(),
        }
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn with_type(mut self, user_type: impl Into<String>) -> Self {
        self.user_type = user_type.into();
        self
    }
}
