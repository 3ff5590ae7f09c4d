//! Repository trait for favorites.

use crate::domain::entities::{Favorite, NewFavorite};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing favorites.
///
/// Referential integrity is left to the store's foreign key constraints.
///
/// See [`crate::infrastructure::persistence::SqlFavoriteRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Inserts a new favorite and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced user, planet or character
    /// does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_favorite: NewFavorite) -> Result<Favorite, AppError>;

    /// Finds a favorite by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Favorite>, AppError>;

    /// Lists all favorites ordered by id.
    async fn list(&self) -> Result<Vec<Favorite>, AppError>;

    /// Deletes a favorite, returning the removed row, or `None` if it did not exist.
    async fn delete(&self, id: i64) -> Result<Option<Favorite>, AppError>;

    /// Counts stored favorites.
    async fn count(&self) -> Result<i64, AppError>;
}
