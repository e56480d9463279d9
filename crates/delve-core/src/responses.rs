//! Listing shapes returned by the storage accessor and rendered by the menu.

use serde::{Deserialize, Serialize};

use crate::entities::{Character, Room};

/// A room with its occupants eagerly loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomWithCharacters {
    #[serde(flatten)]
    pub room: Room,
    pub characters: Vec<Character>,
}

/// Result of listing every character.
///
/// An empty store is a normal outcome with its own variant rather than an
/// error or an empty vector the caller has to remember to check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "characters", rename_all = "snake_case")]
pub enum CharacterRoster {
    Empty,
    Characters(Vec<Character>),
}

impl CharacterRoster {
    /// Build a roster, mapping no characters to [`CharacterRoster::Empty`].
    #[must_use]
    pub fn from_vec(characters: Vec<Character>) -> Self {
        if characters.is_empty() {
            Self::Empty
        } else {
            Self::Characters(characters)
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Characters in the roster; empty slice for [`CharacterRoster::Empty`].
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        match self {
            Self::Empty => &[],
            Self::Characters(characters) => characters,
        }
    }
}
