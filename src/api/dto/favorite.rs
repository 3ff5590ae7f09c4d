//! DTOs for favorite endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Favorite, NewFavorite};

/// Request body for `POST /favorite`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFavoriteRequest {
    #[validate(required, range(min = 1))]
    pub user_id: Option<i64>,

    #[validate(required, range(min = 1))]
    pub planet_id: Option<i64>,

    #[validate(required, range(min = 1))]
    pub character_id: Option<i64>,
}

impl CreateFavoriteRequest {
    /// Converts a validated request into domain input.
    pub fn into_new_favorite(self) -> NewFavorite {
        NewFavorite {
            user_id: self.user_id.unwrap_or_default(),
            planet_id: self.planet_id.unwrap_or_default(),
            character_id: self.character_id.unwrap_or_default(),
        }
    }
}

/// Serialized favorite. References are `null` once the referenced row is gone.
#[derive(Debug, Serialize)]
pub struct FavoriteItem {
    pub id: i64,
    pub user_id: Option<i64>,
    pub planet_id: Option<i64>,
    pub character_id: Option<i64>,
}

impl From<Favorite> for FavoriteItem {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
            character_id: favorite.character_id,
        }
    }
}
