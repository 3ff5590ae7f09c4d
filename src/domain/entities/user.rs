//! User entity.

/// A registered blog user.
///
/// Users own favorites; deleting a user leaves its favorites in place with
/// `user_id` cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(id: i64, username: String, password: String) -> Self {
        Self {
            id,
            username,
            password,
        }
    }
}

/// Input data for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
