//! Repository trait for planets.

use crate::domain::entities::{NewPlanet, Planet};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing planets.
///
/// See [`crate::infrastructure::persistence::SqlPlanetRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Inserts a new planet and returns it with its assigned id.
    async fn create(&self, new_planet: NewPlanet) -> Result<Planet, AppError>;

    /// Finds a planet by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Planet>, AppError>;

    /// Lists all planets ordered by id.
    async fn list(&self) -> Result<Vec<Planet>, AppError>;

    /// Deletes a planet, returning the removed row, or `None` if it did not exist.
    async fn delete(&self, id: i64) -> Result<Option<Planet>, AppError>;

    /// Counts stored planets.
    async fn count(&self) -> Result<i64, AppError>;
}
