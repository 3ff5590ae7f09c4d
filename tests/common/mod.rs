#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::AnyPool;
use starwars_api::api::routes::entity_routes;
use starwars_api::infrastructure::persistence::{Backend, connect, run_migrations};
use starwars_api::state::AppState;
use std::sync::Arc;

/// Fresh in-memory SQLite database with the schema applied.
pub async fn test_pool() -> AnyPool {
    let pool = connect("sqlite::memory:", 1, 5).await.unwrap();
    run_migrations(&pool, Backend::Sqlite).await.unwrap();
    pool
}

pub fn create_test_state(pool: AnyPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn make_server(pool: AnyPool) -> TestServer {
    let app = entity_routes().with_state(create_test_state(pool));
    TestServer::new(app).unwrap()
}

pub async fn create_test_user(pool: &AnyPool, username: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (username, password) VALUES ($1, 'secret') RETURNING id")
        .bind(username)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_planet(pool: &AnyPool, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO planets (name, climate, terrain, population) \
         VALUES ($1, 'arid', 'desert', '200000') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_character(pool: &AnyPool, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO characters (name, height, hair_color, eye_color, gender) \
         VALUES ($1, '172', 'blond', 'blue', 'male') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_favorite(
    pool: &AnyPool,
    user_id: i64,
    planet_id: i64,
    character_id: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO favorites (user_id, planet_id, character_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(user_id)
    .bind(planet_id)
    .bind(character_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn planet_body(name: &str) -> Value {
    json!({
        "name": name,
        "climate": "temperate",
        "terrain": "grasslands, mountains",
        "population": "2000000000",
    })
}

pub fn character_body(name: &str) -> Value {
    json!({
        "name": name,
        "height": "172",
        "hair_color": "blond",
        "eye_color": "blue",
        "gender": "male",
    })
}
