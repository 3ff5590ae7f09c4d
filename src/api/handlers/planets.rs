//! Handlers for planet endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::deleted::Deleted;
use crate::api::dto::planet::{CreatePlanetRequest, PlanetItem};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all planets.
///
/// # Endpoint
///
/// `GET /planets`
pub async fn planet_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetItem>>, AppError> {
    let planets = state.planet_service.list_planets().await?;

    Ok(Json(planets.into_iter().map(PlanetItem::from).collect()))
}

/// Creates a planet.
///
/// # Endpoint
///
/// `POST /planets`
///
/// # Errors
///
/// Returns 400 if a field is missing or too long.
pub async fn create_planet_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanetRequest>,
) -> Result<Json<PlanetItem>, AppError> {
    payload.validate()?;

    let planet = state
        .planet_service
        .create_planet(payload.into_new_planet())
        .await?;

    Ok(Json(planet.into()))
}

/// Returns a single planet.
///
/// # Endpoint
///
/// `GET /planets/{id}`
pub async fn get_planet_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PlanetItem>, AppError> {
    let planet = state.planet_service.get_planet(id).await?;

    Ok(Json(planet.into()))
}

/// Deletes a planet and echoes it back as `[planet, "deleted"]`.
///
/// # Endpoint
///
/// `DELETE /planets/{id}`
pub async fn delete_planet_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Deleted<PlanetItem>>, AppError> {
    let planet = state.planet_service.delete_planet(id).await?;

    Ok(Json(Deleted::new(planet.into())))
}
