//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUser, User};

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(required, length(min = 1, max = 250))]
    pub username: Option<String>,

    #[validate(required, length(min = 1, max = 250))]
    pub password: Option<String>,
}

impl CreateUserRequest {
    /// Converts a validated request into domain input.
    ///
    /// Call only after `validate()` succeeded.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            username: self.username.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        }
    }
}

/// Serialized user.
#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            password: user.password,
        }
    }
}
