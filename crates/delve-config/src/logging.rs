//! Log output configuration.

use serde::{Deserialize, Serialize};

fn default_console_level() -> String {
    "warn".into()
}

fn default_file_level() -> String {
    "info".into()
}

fn default_file_path() -> String {
    "Logs/log.txt".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive for console (stderr) output, e.g. `warn` or `delve_db=debug`.
    #[serde(default = "default_console_level")]
    pub console_level: String,

    /// Filter directive for the log file.
    #[serde(default = "default_file_level")]
    pub file_level: String,

    /// Log file path. Empty disables file logging.
    #[serde(default = "default_file_path")]
    pub file_path: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: default_console_level(),
            file_level: default_file_level(),
            file_path: default_file_path(),
        }
    }
}

impl LoggingConfig {
    pub fn file_enabled(&self) -> bool {
        !self.file_path.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = LoggingConfig::default();
        assert_eq!(config.console_level, "warn");
        assert_eq!(config.file_level, "info");
        assert_eq!(config.file_path, "Logs/log.txt");
        assert!(config.file_enabled());
    }

    #[test]
    fn empty_path_disables_file() {
        let config = LoggingConfig {
            file_path: String::new(),
            ..Default::default()
        };
        assert!(!config.file_enabled());
    }
}
