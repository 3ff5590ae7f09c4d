//! Repository traits abstracting the relational store.
//!
//! Each trait maps one entity to the handful of statements the API needs:
//! insert, lookup by id, full listing, delete and a row count. Deletes return the
//! removed record so callers can echo it back.

pub mod character_repository;
pub mod favorite_repository;
pub mod planet_repository;
pub mod user_repository;

pub use character_repository::CharacterRepository;
pub use favorite_repository::FavoriteRepository;
pub use planet_repository::PlanetRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use character_repository::MockCharacterRepository;
#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
#[cfg(test)]
pub use planet_repository::MockPlanetRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
