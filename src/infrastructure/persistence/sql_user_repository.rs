//! SQLx implementation of the user repository.

use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::{AnyPool, Row};
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// SQL repository for users.
pub struct SqlUserRepository {
    pool: Arc<AnyPool>,
}

impl SqlUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<AnyPool>) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: AnyRow) -> Result<User, sqlx::Error> {
    Ok(User::new(
        row.try_get("id")?,
        row.try_get("username")?,
        row.try_get("password")?,
    ))
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = sqlx::query(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password
            "#,
        )
        .bind(new_user.username)
        .bind(new_user.password)
        .try_map(user_from_row)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query("SELECT id, username, password FROM users WHERE id = $1")
            .bind(id)
            .try_map(user_from_row)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query("SELECT id, username, password FROM users ORDER BY id")
            .try_map(user_from_row)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(users)
    }

    async fn delete(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query("DELETE FROM users WHERE id = $1 RETURNING id, username, password")
            .bind(id)
            .try_map(user_from_row)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(user)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
