//! Repository modules implementing storage operations for all Delve entities.
//!
//! Each module adds methods to `GameService` via `impl GameService` blocks.

pub mod ability;
pub mod character;
pub mod room;
pub mod seed;
