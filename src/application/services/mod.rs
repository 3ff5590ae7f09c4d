//! Entity services for the application layer.

pub mod character_service;
pub mod favorite_service;
pub mod planet_service;
pub mod user_service;

pub use character_service::CharacterService;
pub use favorite_service::FavoriteService;
pub use planet_service::PlanetService;
pub use user_service::UserService;
