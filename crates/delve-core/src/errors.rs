//! Cross-cutting error types for Delve.
//!
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! live in their own crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Delve crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A discriminator value did not name any variant of the hierarchy.
    #[error("Unknown {hierarchy} variant: '{value}'")]
    UnknownVariant {
        hierarchy: &'static str,
        value: String,
    },
}
