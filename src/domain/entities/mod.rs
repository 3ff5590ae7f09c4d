//! Domain entities.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

pub use character::{Character, NewCharacter};
pub use favorite::{Favorite, NewFavorite};
pub use planet::{NewPlanet, Planet};
pub use user::{NewUser, User};
