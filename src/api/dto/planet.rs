//! DTOs for planet endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewPlanet, Planet};

/// Request body for `POST /planets`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlanetRequest {
    #[validate(required, length(min = 1, max = 250))]
    pub name: Option<String>,

    #[validate(required, length(min = 1, max = 250))]
    pub climate: Option<String>,

    #[validate(required, length(min = 1, max = 250))]
    pub terrain: Option<String>,

    #[validate(required, length(min = 1, max = 250))]
    pub population: Option<String>,
}

impl CreatePlanetRequest {
    /// Converts a validated request into domain input.
    pub fn into_new_planet(self) -> NewPlanet {
        NewPlanet {
            name: self.name.unwrap_or_default(),
            climate: self.climate.unwrap_or_default(),
            terrain: self.terrain.unwrap_or_default(),
            population: self.population.unwrap_or_default(),
        }
    }
}

/// Serialized planet.
#[derive(Debug, Serialize)]
pub struct PlanetItem {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: String,
}

impl From<Planet> for PlanetItem {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            population: planet.population,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_population_over_limit_fails_validation() {
        let request: CreatePlanetRequest = serde_json::from_value(json!({
            "name": "Coruscant",
            "climate": "temperate",
            "terrain": "cityscape",
            "population": "1".repeat(251),
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("population"));
    }
}
