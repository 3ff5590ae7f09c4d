//! Repository trait for characters.

use crate::domain::entities::{Character, NewCharacter};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing characters.
///
/// See [`crate::infrastructure::persistence::SqlCharacterRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Inserts a new character and returns it with its assigned id.
    async fn create(&self, new_character: NewCharacter) -> Result<Character, AppError>;

    /// Finds a character by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Character>, AppError>;

    /// Lists all characters ordered by id.
    async fn list(&self) -> Result<Vec<Character>, AppError>;

    /// Deletes a character, returning the removed row, or `None` if it did not exist.
    async fn delete(&self, id: i64) -> Result<Option<Character>, AppError>;

    /// Counts stored characters.
    async fn count(&self) -> Result<i64, AppError>;
}
