//! API route configuration.
//!
//! Paths are declared without trailing slashes; [`crate::routes::app_router`]
//! trims them from incoming requests, so `/users/` and `/users` are equivalent.

use crate::api::handlers::{
    character_list_handler, create_character_handler, create_favorite_handler,
    create_planet_handler, create_user_handler, delete_character_handler,
    delete_favorite_handler, delete_planet_handler, delete_user_handler, favorite_list_handler,
    get_character_handler, get_favorite_handler, get_planet_handler, get_user_handler,
    greeting_handler, planet_list_handler, user_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All entity routes.
///
/// # Endpoints
///
/// - `GET    /user`             - Greeting
/// - `GET    /users`            - List users
/// - `POST   /users`            - Create a user
/// - `GET    /users/{id}`       - Get a user
/// - `DELETE /users/{id}`       - Delete a user
/// - `GET    /planets`          - List planets
/// - `POST   /planets`          - Create a planet
/// - `GET    /planets/{id}`     - Get a planet
/// - `DELETE /planets/{id}`     - Delete a planet
/// - `GET    /characters`       - List characters
/// - `POST   /characters`       - Create a character
/// - `GET    /character/{id}`   - Get a character
/// - `DELETE /character/{id}`   - Delete a character
/// - `GET    /favorites`        - List favorites
/// - `POST   /favorite`         - Create a favorite
/// - `GET    /favorite/{id}`    - Get a favorite
/// - `DELETE /favorite/{id}`    - Delete a favorite
pub fn entity_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(greeting_handler))
        .route("/users", get(user_list_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler).delete(delete_user_handler),
        )
        .route(
            "/planets",
            get(planet_list_handler).post(create_planet_handler),
        )
        .route(
            "/planets/{id}",
            get(get_planet_handler).delete(delete_planet_handler),
        )
        .route(
            "/characters",
            get(character_list_handler).post(create_character_handler),
        )
        .route(
            "/character/{id}",
            get(get_character_handler).delete(delete_character_handler),
        )
        .route("/favorites", get(favorite_list_handler))
        .route("/favorite", post(create_favorite_handler))
        .route(
            "/favorite/{id}",
            get(get_favorite_handler).delete(delete_favorite_handler),
        )
}
