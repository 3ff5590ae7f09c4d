//! Favorite entity: a join row linking a user to a planet and a character.

/// A user's favorite planet/character pair.
///
/// References are optional because deleting the referenced row clears them
/// (`ON DELETE SET NULL`). New favorites always carry all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: i64,
    pub user_id: Option<i64>,
    pub planet_id: Option<i64>,
    pub character_id: Option<i64>,
}

/// Input data for creating a favorite.
#[derive(Debug, Clone, Copy)]
pub struct NewFavorite {
    pub user_id: i64,
    pub planet_id: i64,
    pub character_id: i64,
}

#[cfg(test)]
impl NewFavorite {
    /// Builds the stored record a mocked repository hands back.
    pub fn with_id(self, id: i64) -> Favorite {
        Favorite {
            id,
            user_id: Some(self.user_id),
            planet_id: Some(self.planet_id),
            character_id: Some(self.character_id),
        }
    }
}
