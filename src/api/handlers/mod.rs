//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one entity.

pub mod characters;
pub mod favorites;
pub mod greeting;
pub mod health;
pub mod planets;
pub mod users;

pub use characters::{
    character_list_handler, create_character_handler, delete_character_handler,
    get_character_handler,
};
pub use favorites::{
    create_favorite_handler, delete_favorite_handler, favorite_list_handler,
    get_favorite_handler,
};
pub use greeting::greeting_handler;
pub use health::health_handler;
pub use planets::{
    create_planet_handler, delete_planet_handler, get_planet_handler, planet_list_handler,
};
pub use users::{create_user_handler, delete_user_handler, get_user_handler, user_list_handler};
