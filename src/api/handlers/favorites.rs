//! Handlers for favorite endpoints.
//!
//! The collection lives at `/favorites`; creation and single records at
//! `/favorite` and `/favorite/{id}`.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::deleted::Deleted;
use crate::api::dto::favorite::{CreateFavoriteRequest, FavoriteItem};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /favorites`
pub async fn favorite_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteItem>>, AppError> {
    let favorites = state.favorite_service.list_favorites().await?;

    Ok(Json(favorites.into_iter().map(FavoriteItem::from).collect()))
}

/// Creates a favorite linking a user to a planet and a character.
///
/// # Endpoint
///
/// `POST /favorite`
///
/// # Request Body
///
/// ```json
/// { "user_id": 1, "planet_id": 2, "character_id": 3 }
/// ```
///
/// # Errors
///
/// Returns 400 if an id is missing, not positive, or references a missing record.
pub async fn create_favorite_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateFavoriteRequest>,
) -> Result<Json<FavoriteItem>, AppError> {
    payload.validate()?;

    let favorite = state
        .favorite_service
        .create_favorite(payload.into_new_favorite())
        .await?;

    Ok(Json(favorite.into()))
}

/// `GET /favorite/{id}`
pub async fn get_favorite_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<FavoriteItem>, AppError> {
    let favorite = state.favorite_service.get_favorite(id).await?;

    Ok(Json(favorite.into()))
}

/// `DELETE /favorite/{id}`
pub async fn delete_favorite_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Deleted<FavoriteItem>>, AppError> {
    let favorite = state.favorite_service.delete_favorite(id).await?;

    Ok(Json(Deleted::new(favorite.into())))
}
