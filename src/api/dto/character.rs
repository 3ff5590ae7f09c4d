//! DTOs for character endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Character, NewCharacter};

/// Request body for `POST /characters`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCharacterRequest {
    #[validate(required, length(min = 1, max = 250))]
    pub name: Option<String>,

    #[validate(required, length(min = 1, max = 250))]
    pub height: Option<String>,

    #[validate(required, length(min = 1, max = 250))]
    pub hair_color: Option<String>,

    #[validate(required, length(min = 1, max = 250))]
    pub eye_color: Option<String>,

    #[validate(required, length(min = 1, max = 250))]
    pub gender: Option<String>,
}

impl CreateCharacterRequest {
    /// Converts a validated request into domain input.
    pub fn into_new_character(self) -> NewCharacter {
        NewCharacter {
            name: self.name.unwrap_or_default(),
            height: self.height.unwrap_or_default(),
            hair_color: self.hair_color.unwrap_or_default(),
            eye_color: self.eye_color.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
        }
    }
}

/// Serialized character.
#[derive(Debug, Serialize)]
pub struct CharacterItem {
    pub id: i64,
    pub name: String,
    pub height: String,
    pub hair_color: String,
    pub eye_color: String,
    pub gender: String,
}

impl From<Character> for CharacterItem {
    fn from(character: Character) -> Self {
        Self {
            id: character.id,
            name: character.name,
            height: character.height,
            hair_color: character.hair_color,
            eye_color: character.eye_color,
            gender: character.gender,
        }
    }
}
