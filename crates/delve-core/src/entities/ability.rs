use serde::{Deserialize, Serialize};

use crate::entities::Character;
use crate::enums::AbilityType;

/// Variant-specific data of an ability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "ability_type")]
pub enum AbilityKind {
    /// Pushes the target back `shove` feet.
    PlayerAbility { shove: i64 },
    /// Distracts the target with strength `taunt`.
    GoblinAbility { taunt: i64 },
}

impl AbilityKind {
    #[must_use]
    pub const fn ability_type(&self) -> AbilityType {
        match self {
            Self::PlayerAbility { .. } => AbilityType::PlayerAbility,
            Self::GoblinAbility { .. } => AbilityType::GoblinAbility,
        }
    }
}

/// An ability that any number of characters may know.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ability {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub kind: AbilityKind,
}

impl Ability {
    #[must_use]
    pub const fn ability_type(&self) -> AbilityType {
        self.kind.ability_type()
    }

    /// Describe `user` activating this ability on `target`.
    ///
    /// Produces three lines: who uses what on whom, the ability description,
    /// and the variant's effect with its stat. Nothing is mutated.
    #[must_use]
    pub fn activate(&self, user: &Character, target: &Character) -> String {
        let effect = match self.kind {
            AbilityKind::PlayerAbility { shove } => {
                format!("{} is pushed back {shove} feet!", target.name)
            }
            AbilityKind::GoblinAbility { taunt } => {
                format!("{} is distracted with taunt level {taunt}!", target.name)
            }
        };
        format!(
            "{} uses {} on {}!\n  {}\n  {effect}",
            user.name, self.name, target.name, self.description
        )
    }
}
