//! SQLx implementation of the favorite repository.

use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::{AnyPool, Row};
use std::sync::Arc;

use crate::domain::entities::{Favorite, NewFavorite};
use crate::domain::repositories::FavoriteRepository;
use crate::error::AppError;

/// SQL repository for favorites.
///
/// Relies on the `favorites` foreign keys: inserting a dangling reference fails
/// with a foreign key violation, and deleting a referenced row clears the column.
pub struct SqlFavoriteRepository {
    pool: Arc<AnyPool>,
}

impl SqlFavoriteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<AnyPool>) -> Self {
        Self { pool }
    }
}

fn favorite_from_row(row: AnyRow) -> Result<Favorite, sqlx::Error> {
    Ok(Favorite {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        planet_id: row.try_get("planet_id")?,
        character_id: row.try_get("character_id")?,
    })
}

#[async_trait]
impl FavoriteRepository for SqlFavoriteRepository {
    async fn create(&self, new_favorite: NewFavorite) -> Result<Favorite, AppError> {
        let favorite = sqlx::query(
            r#"
            INSERT INTO favorites (user_id, planet_id, character_id)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, planet_id, character_id
            "#,
        )
        .bind(new_favorite.user_id)
        .bind(new_favorite.planet_id)
        .bind(new_favorite.character_id)
        .try_map(favorite_from_row)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(favorite)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Favorite>, AppError> {
        let favorite = sqlx::query(
            "SELECT id, user_id, planet_id, character_id FROM favorites WHERE id = $1",
        )
        .bind(id)
        .try_map(favorite_from_row)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(favorite)
    }

    async fn list(&self) -> Result<Vec<Favorite>, AppError> {
        let favorites =
            sqlx::query("SELECT id, user_id, planet_id, character_id FROM favorites ORDER BY id")
                .try_map(favorite_from_row)
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(favorites)
    }

    async fn delete(&self, id: i64) -> Result<Option<Favorite>, AppError> {
        let favorite = sqlx::query(
            r#"
            DELETE FROM favorites
            WHERE id = $1
            RETURNING id, user_id, planet_id, character_id
            "#,
        )
        .bind(id)
        .try_map(favorite_from_row)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(favorite)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
