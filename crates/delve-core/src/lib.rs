//! # delve-core
//!
//! Core types shared across all Delve crates:
//! - Entity structs for rooms, characters and abilities
//! - Discriminator enums tagging each concrete variant of a hierarchy
//! - Activation and attack text for characters and abilities
//! - Listing response types returned by the storage accessor
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;

pub use errors::CoreError;
