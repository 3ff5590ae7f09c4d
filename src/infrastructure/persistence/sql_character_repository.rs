//! SQLx implementation of the character repository.

use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::{AnyPool, Row};
use std::sync::Arc;

use crate::domain::entities::{Character, NewCharacter};
use crate::domain::repositories::CharacterRepository;
use crate::error::AppError;

/// SQL repository for characters.
pub struct SqlCharacterRepository {
    pool: Arc<AnyPool>,
}

impl SqlCharacterRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<AnyPool>) -> Self {
        Self { pool }
    }
}

fn character_from_row(row: AnyRow) -> Result<Character, sqlx::Error> {
    Ok(Character {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        height: row.try_get("height")?,
        hair_color: row.try_get("hair_color")?,
        eye_color: row.try_get("eye_color")?,
        gender: row.try_get("gender")?,
    })
}

#[async_trait]
impl CharacterRepository for SqlCharacterRepository {
    async fn create(&self, new_character: NewCharacter) -> Result<Character, AppError> {
        let character = sqlx::query(
            r#"
            INSERT INTO characters (name, height, hair_color, eye_color, gender)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, height, hair_color, eye_color, gender
            "#,
        )
        .bind(new_character.name)
        .bind(new_character.height)
        .bind(new_character.hair_color)
        .bind(new_character.eye_color)
        .bind(new_character.gender)
        .try_map(character_from_row)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(character)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Character>, AppError> {
        let character = sqlx::query(
            r#"
            SELECT id, name, height, hair_color, eye_color, gender
            FROM characters
            WHERE id = $1
            "#,
        )
        .bind(id)
        .try_map(character_from_row)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(character)
    }

    async fn list(&self) -> Result<Vec<Character>, AppError> {
        let characters = sqlx::query(
            r#"
            SELECT id, name, height, hair_color, eye_color, gender
            FROM characters
            ORDER BY id
            "#,
        )
        .try_map(character_from_row)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(characters)
    }

    async fn delete(&self, id: i64) -> Result<Option<Character>, AppError> {
        let character = sqlx::query(
            r#"
            DELETE FROM characters
            WHERE id = $1
            RETURNING id, name, height, hair_color, eye_color, gender
            "#,
        )
        .bind(id)
        .try_map(character_from_row)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(character)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM characters")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
