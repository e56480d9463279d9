use anyhow::Context;
use delve_config::DelveConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, TOML layers and `DELVE_*` variables into one config.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<DelveConfig> {
    DelveConfig::load_with_dotenv(flags.config.as_deref()).context("failed to load configuration")
}
