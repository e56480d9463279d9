use serde::{Deserialize, Serialize};

use crate::entities::Ability;
use crate::enums::CharacterType;

/// Variant-specific data of a character.
///
/// Serialized with an internal `discriminator` tag so only the fields of the
/// active variant appear next to the tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "discriminator")]
pub enum CharacterKind {
    Player { experience: i64 },
    Goblin { aggression_level: i64 },
}

impl CharacterKind {
    #[must_use]
    pub const fn character_type(&self) -> CharacterType {
        match self {
            Self::Player { .. } => CharacterType::Player,
            Self::Goblin { .. } => CharacterType::Goblin,
        }
    }
}

/// A character living in exactly one room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub level: i64,
    pub room_id: i64,
    #[serde(flatten)]
    pub kind: CharacterKind,
}

impl Character {
    #[must_use]
    pub const fn character_type(&self) -> CharacterType {
        self.kind.character_type()
    }

    /// Experience counter, present only for players.
    #[must_use]
    pub const fn experience(&self) -> Option<i64> {
        match self.kind {
            CharacterKind::Player { experience } => Some(experience),
            CharacterKind::Goblin { .. } => None,
        }
    }

    /// Aggression level, present only for goblins.
    #[must_use]
    pub const fn aggression_level(&self) -> Option<i64> {
        match self.kind {
            CharacterKind::Goblin { aggression_level } => Some(aggression_level),
            CharacterKind::Player { .. } => None,
        }
    }

    /// Describe a basic attack on `target`. Players swing a sword.
    #[must_use]
    pub fn attack(&self, target: &Self) -> String {
        match self.kind {
            CharacterKind::Player { .. } => {
                format!("{} attacks {} with a sword!", self.name, target.name)
            }
            CharacterKind::Goblin { .. } => format!("{} attacks {}!", self.name, target.name),
        }
    }

    /// Use `ability` on `target`; the ability's variant decides the effect.
    #[must_use]
    pub fn use_ability(&self, ability: &Ability, target: &Self) -> String {
        ability.activate(self, target)
    }
}
