//! Discriminator enums for the two entity hierarchies.
//!
//! Each enum names the concrete variants stored in one shared table. The
//! string returned by `as_str()` is the value written to the discriminator
//! column, and `FromStr` is the only way back: an unrecognised value is an
//! error, never a silent default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// CharacterType
// ---------------------------------------------------------------------------

/// Concrete variant of a row in the `Characters` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterType {
    Player,
    Goblin,
}

impl CharacterType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 2] = [Self::Player, Self::Goblin];

    /// Return the string stored in the `Discriminator` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Goblin => "Goblin",
        }
    }
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                hierarchy: "Character",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// AbilityType
// ---------------------------------------------------------------------------

/// Concrete variant of a row in the `Abilities` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityType {
    PlayerAbility,
    GoblinAbility,
}

impl AbilityType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 2] = [Self::PlayerAbility, Self::GoblinAbility];

    /// Return the string stored in the `AbilityType` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlayerAbility => "PlayerAbility",
            Self::GoblinAbility => "GoblinAbility",
        }
    }
}

impl fmt::Display for AbilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AbilityType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                hierarchy: "Ability",
                value: s.to_string(),
            })
    }
}
