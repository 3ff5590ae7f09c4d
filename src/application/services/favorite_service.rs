//! Favorite management service.

use crate::domain::entities::{Favorite, NewFavorite};
use crate::domain::repositories::FavoriteRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for creating, reading and deleting favorites.
///
/// No existence checks are made on the referenced rows before inserting; the
/// store's foreign keys reject dangling references.
pub struct FavoriteService<R: FavoriteRepository> {
    repository: Arc<R>,
}

impl<R: FavoriteRepository> FavoriteService<R> {
    /// Creates a new favorite service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new favorite.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced record does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_favorite(&self, new_favorite: NewFavorite) -> Result<Favorite, AppError> {
        let favorite = self.repository.create(new_favorite).await?;
        tracing::debug!(
            favorite_id = favorite.id,
            user_id = new_favorite.user_id,
            "favorite created"
        );
        Ok(favorite)
    }

    /// Retrieves a favorite by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the favorite does not exist.
    pub async fn get_favorite(&self, id: i64) -> Result<Favorite, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Favorite not found", json!({"id": id})))
    }

    pub async fn list_favorites(&self) -> Result<Vec<Favorite>, AppError> {
        self.repository.list().await
    }

    /// Deletes a favorite and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the favorite does not exist.
    pub async fn delete_favorite(&self, id: i64) -> Result<Favorite, AppError> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Favorite not found", json!({"id": id})))
    }

    pub async fn count_favorites(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
