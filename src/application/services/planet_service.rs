//! Planet management service.

use crate::domain::entities::{NewPlanet, Planet};
use crate::domain::repositories::PlanetRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for creating, reading and deleting planets.
pub struct PlanetService<R: PlanetRepository> {
    repository: Arc<R>,
}

impl<R: PlanetRepository> PlanetService<R> {
    /// Creates a new planet service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new planet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_planet(&self, new_planet: NewPlanet) -> Result<Planet, AppError> {
        self.repository.create(new_planet).await
    }

    /// Retrieves a planet by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the planet does not exist.
    pub async fn get_planet(&self, id: i64) -> Result<Planet, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Planet not found", json!({"id": id})))
    }

    pub async fn list_planets(&self) -> Result<Vec<Planet>, AppError> {
        self.repository.list().await
    }

    /// Deletes a planet and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the planet does not exist.
    pub async fn delete_planet(&self, id: i64) -> Result<Planet, AppError> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Planet not found", json!({"id": id})))
    }

    pub async fn count_planets(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
