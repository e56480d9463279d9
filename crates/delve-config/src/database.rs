//! Database connection configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// URL schemes that select a remote libSQL server instead of a local file.
const REMOTE_SCHEMES: [&str; 4] = ["libsql://", "https://", "http://", "wss://"];

const fn default_seed_on_startup() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection string: a file path, `:memory:`, or a remote libSQL URL.
    #[serde(default)]
    pub url: String,

    /// Auth token for remote URLs. Ignored for local files.
    #[serde(default)]
    pub auth_token: String,

    /// Apply the seed data at startup when the seed rooms are missing.
    #[serde(default = "default_seed_on_startup")]
    pub seed_on_startup: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            auth_token: String::new(),
            seed_on_startup: default_seed_on_startup(),
        }
    }
}

/// Where the storage accessor should connect, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    /// Embedded database file (or `:memory:`).
    Local(String),
    /// Remote libSQL server.
    Remote { url: String, auth_token: String },
}

impl DatabaseConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    pub fn is_remote(&self) -> bool {
        REMOTE_SCHEMES
            .iter()
            .any(|scheme| self.url.trim().starts_with(scheme))
    }

    /// Validate the connection string and resolve it to a [`ConnectionTarget`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when no URL is set, and
    /// `ConfigError::InvalidValue` when a remote URL has no auth token.
    pub fn target(&self) -> Result<ConnectionTarget, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
            });
        }

        let url = self.url.trim().to_string();
        if self.is_remote() {
            if self.auth_token.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "database.auth_token".into(),
                    reason: format!("remote database '{url}' requires an auth token"),
                });
            }
            return Ok(ConnectionTarget::Remote {
                url,
                auth_token: self.auth_token.clone(),
            });
        }

        Ok(ConnectionTarget::Local(url))
    }
}
