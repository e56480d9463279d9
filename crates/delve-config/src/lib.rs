//! # delve-config
//!
//! Layered configuration loading for Delve using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DELVE_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `./delve.toml`
//! 4. User-level `~/.config/delve/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DELVE_DATABASE__URL` -> `database.url`,
//! `DELVE_LOGGING__FILE_PATH` -> `logging.file_path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use delve_config::DelveConfig;
//!
//! let config = DelveConfig::load_with_dotenv(None).expect("config");
//! let target = config.database.target().expect("connection string");
//! println!("connecting to {target:?}");
//! ```

mod database;
mod error;
mod logging;

pub use database::{ConnectionTarget, DatabaseConfig};
pub use error::ConfigError;
pub use logging::LoggingConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project-local config file, resolved against the working directory.
pub const PROJECT_CONFIG_FILE: &str = "delve.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DelveConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DelveConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFile` if `extra` does not exist, or
    /// `ConfigError::Figment` if a source cannot be parsed.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = extra {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
        }
        Self::figment(extra).extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(extra)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers on top.
    pub fn figment(extra: Option<&Path>) -> Figment {
        Self::figment_with_global(Self::global_config_path().as_deref(), extra)
    }

    /// Same chain as [`Self::figment`] with an explicit user-global file, or
    /// none at all.
    pub fn figment_with_global(global: Option<&Path>, extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = global {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("DELVE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("delve").join("config.toml"))
    }
}
