//! SQLx implementation of the planet repository.

use async_trait::async_trait;
use sqlx::any::AnyRow;
use sqlx::{AnyPool, Row};
use std::sync::Arc;

use crate::domain::entities::{NewPlanet, Planet};
use crate::domain::repositories::PlanetRepository;
use crate::error::AppError;

/// SQL repository for planets.
pub struct SqlPlanetRepository {
    pool: Arc<AnyPool>,
}

impl SqlPlanetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<AnyPool>) -> Self {
        Self { pool }
    }
}

fn planet_from_row(row: AnyRow) -> Result<Planet, sqlx::Error> {
    Ok(Planet {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        climate: row.try_get("climate")?,
        terrain: row.try_get("terrain")?,
        population: row.try_get("population")?,
    })
}

#[async_trait]
impl PlanetRepository for SqlPlanetRepository {
    async fn create(&self, new_planet: NewPlanet) -> Result<Planet, AppError> {
        let planet = sqlx::query(
            r#"
            INSERT INTO planets (name, climate, terrain, population)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, climate, terrain, population
            "#,
        )
        .bind(new_planet.name)
        .bind(new_planet.climate)
        .bind(new_planet.terrain)
        .bind(new_planet.population)
        .try_map(planet_from_row)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(planet)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Planet>, AppError> {
        let planet = sqlx::query(
            r#"
            SELECT id, name, climate, terrain, population
            FROM planets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .try_map(planet_from_row)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(planet)
    }

    async fn list(&self) -> Result<Vec<Planet>, AppError> {
        let planets = sqlx::query(
            r#"
            SELECT id, name, climate, terrain, population
            FROM planets
            ORDER BY id
            "#,
        )
        .try_map(planet_from_row)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(planets)
    }

    async fn delete(&self, id: i64) -> Result<Option<Planet>, AppError> {
        let planet = sqlx::query(
            r#"
            DELETE FROM planets
            WHERE id = $1
            RETURNING id, name, climate, terrain, population
            "#,
        )
        .bind(id)
        .try_map(planet_from_row)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(planet)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM planets")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
