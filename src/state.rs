//! Shared application state injected into every handler.

use sqlx::AnyPool;
use std::sync::Arc;

use crate::application::services::{CharacterService, FavoriteService, PlanetService, UserService};
use crate::infrastructure::persistence::{
    SqlCharacterRepository, SqlFavoriteRepository, SqlPlanetRepository, SqlUserRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<SqlUserRepository>>,
    pub planet_service: Arc<PlanetService<SqlPlanetRepository>>,
    pub character_service: Arc<CharacterService<SqlCharacterRepository>>,
    pub favorite_service: Arc<FavoriteService<SqlFavoriteRepository>>,
    pub pool: Arc<AnyPool>,
}

impl AppState {
    /// Wires repositories and services around one connection pool.
    pub fn new(pool: Arc<AnyPool>) -> Self {
        let user_repository = Arc::new(SqlUserRepository::new(pool.clone()));
        let planet_repository = Arc::new(SqlPlanetRepository::new(pool.clone()));
        let character_repository = Arc::new(SqlCharacterRepository::new(pool.clone()));
        let favorite_repository = Arc::new(SqlFavoriteRepository::new(pool.clone()));

        Self {
            user_service: Arc::new(UserService::new(user_repository)),
            planet_service: Arc::new(PlanetService::new(planet_repository)),
            character_service: Arc::new(CharacterService::new(character_repository)),
            favorite_service: Arc::new(FavoriteService::new(favorite_repository)),
            pool,
        }
    }
}
