//! Handlers for character endpoints.
//!
//! The collection lives at `/characters`; single records at `/character/{id}`.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::character::{CharacterItem, CreateCharacterRequest};
use crate::api::dto::deleted::Deleted;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /characters`
pub async fn character_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharacterItem>>, AppError> {
    let characters = state.character_service.list_characters().await?;

    Ok(Json(characters.into_iter().map(CharacterItem::from).collect()))
}

/// `POST /characters`
pub async fn create_character_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCharacterRequest>,
) -> Result<Json<CharacterItem>, AppError> {
    payload.validate()?;

    let character = state
        .character_service
        .create_character(payload.into_new_character())
        .await?;

    Ok(Json(character.into()))
}

/// `GET /character/{id}`
pub async fn get_character_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CharacterItem>, AppError> {
    let character = state.character_service.get_character(id).await?;

    Ok(Json(character.into()))
}

/// `DELETE /character/{id}`
pub async fn delete_character_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Deleted<CharacterItem>>, AppError> {
    let character = state.character_service.delete_character(id).await?;

    Ok(Json(Deleted::new(character.into())))
}
