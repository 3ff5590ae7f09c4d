//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::deleted::Deleted;
use crate::api::dto::user::{CreateUserRequest, UserItem};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users`
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserItem>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserItem::from).collect()))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users/`
///
/// # Request Body
///
/// ```json
/// { "username": "luke", "password": "tatooine" }
/// ```
///
/// # Errors
///
/// Returns 400 if a field is missing or too long.
/// Returns 409 if the username is already taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<UserItem>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create_user(payload.into_new_user())
        .await?;

    Ok(Json(user.into()))
}

/// Returns a single user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserItem>, AppError> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(user.into()))
}

/// Deletes a user and echoes it back as `[user, "deleted"]`.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Deleted<UserItem>>, AppError> {
    let user = state.user_service.delete_user(id).await?;

    Ok(Json(Deleted::new(user.into())))
}
