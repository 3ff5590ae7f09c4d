//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers a small API in which
//! absent records are errors rather than `None`.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - users
//! - [`services::planet_service::PlanetService`] - planets
//! - [`services::character_service::CharacterService`] - characters
//! - [`services::favorite_service::FavoriteService`] - favorites

pub mod services;
