//! Character management service.

use crate::domain::entities::{Character, NewCharacter};
use crate::domain::repositories::CharacterRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for creating, reading and deleting characters.
pub struct CharacterService<R: CharacterRepository> {
    repository: Arc<R>,
}

impl<R: CharacterRepository> CharacterService<R> {
    /// Creates a new character service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create_character(
        &self,
        new_character: NewCharacter,
    ) -> Result<Character, AppError> {
        self.repository.create(new_character).await
    }

    /// Retrieves a character by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the character does not exist.
    pub async fn get_character(&self, id: i64) -> Result<Character, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Character not found", json!({"id": id})))
    }

    pub async fn list_characters(&self) -> Result<Vec<Character>, AppError> {
        self.repository.list().await
    }

    /// Deletes a character and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the character does not exist.
    pub async fn delete_character(&self, id: i64) -> Result<Character, AppError> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Character not found", json!({"id": id})))
    }

    pub async fn count_characters(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCharacterRepository;

    fn r2d2() -> NewCharacter {
        NewCharacter {
            name: "R2-D2".to_string(),
            height: "96".to_string(),
            hair_color: "n/a".to_string(),
            eye_color: "red".to_string(),
            gender: "n/a".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_character_success() {
        let mut mock_repo = MockCharacterRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(r2d2().with_id(id))));

        let service = CharacterService::new(Arc::new(mock_repo));

        let character = service.get_character(3).await.unwrap();
        assert_eq!(character.id, 3);
        assert_eq!(character.eye_color, "red");
    }

    #[tokio::test]
    async fn test_delete_character_not_found() {
        let mut mock_repo = MockCharacterRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(None));

        let service = CharacterService::new(Arc::new(mock_repo));

        let result = service.delete_character(3).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_characters_empty() {
        let mut mock_repo = MockCharacterRepository::new();

        mock_repo.expect_list().times(1).returning(|| Ok(vec![]));

        let service = CharacterService::new(Arc::new(mock_repo));

        assert!(service.list_characters().await.unwrap().is_empty());
    }
}
