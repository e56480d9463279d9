//! Entity structs for all Delve domain objects.
//!
//! `Room` maps to the `Rooms` table. `Character` and `Ability` are hierarchies:
//! each is a struct of shared fields plus a `kind` sum type carrying the
//! variant-specific field, stored in one table per hierarchy.

mod ability;
mod character;
mod room;

pub use ability::{Ability, AbilityKind};
pub use character::{Character, CharacterKind};
pub use room::Room;
