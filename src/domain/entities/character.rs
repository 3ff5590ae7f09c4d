//! Character entity.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub height: String,
    pub hair_color: String,
    pub eye_color: String,
    pub gender: String,
}

/// Input data for creating a character.
#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub name: String,
    pub height: String,
    pub hair_color: String,
    pub eye_color: String,
    pub gender: String,
}

#[cfg(test)]
impl NewCharacter {
    /// Builds the stored record a mocked repository hands back.
    pub fn with_id(self, id: i64) -> Character {
        Character {
            id,
            name: self.name,
            height: self.height,
            hair_color: self.hair_color,
            eye_color: self.eye_color,
            gender: self.gender,
        }
    }
}
