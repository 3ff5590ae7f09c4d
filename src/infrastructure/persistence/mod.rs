//! SQLx repository implementations.
//!
//! All repositories share one [`sqlx::AnyPool`], so the same code runs against
//! PostgreSQL and SQLite. Queries use `$N` placeholders, which both backends accept.
//!
//! # Repositories
//!
//! - [`SqlUserRepository`] - users
//! - [`SqlPlanetRepository`] - planets
//! - [`SqlCharacterRepository`] - characters
//! - [`SqlFavoriteRepository`] - favorites

pub mod database;
pub mod sql_character_repository;
pub mod sql_favorite_repository;
pub mod sql_planet_repository;
pub mod sql_user_repository;

pub use database::{Backend, connect, ping, run_migrations};
pub use sql_character_repository::SqlCharacterRepository;
pub use sql_favorite_repository::SqlFavoriteRepository;
pub use sql_planet_repository::SqlPlanetRepository;
pub use sql_user_repository::SqlUserRepository;
