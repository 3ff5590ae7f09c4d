//! Planet entity.

/// A planet that users can mark as favorite.
///
/// Attributes are free-form strings; values such as `"unknown"` are common for
/// `population`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: String,
}

/// Input data for creating a planet.
#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: String,
}

#[cfg(test)]
impl NewPlanet {
    /// Builds the stored record a mocked repository hands back.
    pub fn with_id(self, id: i64) -> Planet {
        Planet {
            id,
            name: self.name,
            climate: self.climate,
            terrain: self.terrain,
            population: self.population,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_planet_with_id() {
        let planet = NewPlanet {
            name: "Hoth".to_string(),
            climate: "frozen".to_string(),
            terrain: "tundra, ice caves, mountain ranges".to_string(),
            population: "unknown".to_string(),
        }
        .with_id(4);

        assert_eq!(planet.id, 4);
        assert_eq!(planet.name, "Hoth");
        assert_eq!(planet.population, "unknown");
    }
}
