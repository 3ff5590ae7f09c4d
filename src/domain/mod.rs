//! Domain layer: record types and persistence contracts.
//!
//! - [`entities`] - users, planets, characters, favorites
//! - [`repositories`] - storage traits implemented in [`crate::infrastructure`]

pub mod entities;
pub mod repositories;
