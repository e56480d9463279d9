//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use delve_config::{ConfigError, ConnectionTarget, DelveConfig};
use figment::Jail;
use std::path::Path;
use pretty_assertions::assert_eq;

#[test]
fn loads_project_file_from_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "delve.toml",
            r#"
[database]
url = "game.db"
seed_on_startup = false

[logging]
console_level = "error"
file_level = "debug"
file_path = "out/delve.log"
"#,
        )?;

        let config = DelveConfig::load(None).expect("config loads");
        assert_eq!(config.database.url, "game.db");
        assert!(!config.database.seed_on_startup);
        assert_eq!(config.logging.console_level, "error");
        assert_eq!(config.logging.file_level, "debug");
        assert_eq!(config.logging.file_path, "out/delve.log");
        assert_eq!(
            config.database.target().expect("valid target"),
            ConnectionTarget::Local("game.db".into())
        );
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("delve.toml", "[database]\nurl = \"project.db\"\n")?;
        jail.create_file("custom.toml", "[database]\nurl = \"custom.db\"\n")?;

        let config =
            DelveConfig::load(Some(Path::new("custom.toml"))).expect("config loads");
        assert_eq!(config.database.url, "custom.db");
        Ok(())
    });
}

#[test]
fn partial_file_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("delve.toml", "[database]\nurl = \":memory:\"\n")?;

        let config = DelveConfig::load(None).expect("config loads");
        assert!(config.database.seed_on_startup);
        assert_eq!(config.logging.file_path, "Logs/log.txt");
        Ok(())
    });
}

#[test]
fn malformed_file_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("delve.toml", "[database\nurl = ")?;

        let result = DelveConfig::load(None);
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn no_sources_means_database_not_configured() {
    Jail::expect_with(|_jail| {
        let config: DelveConfig = DelveConfig::figment_with_global(None, None)
            .extract()
            .expect("defaults load");
        assert!(matches!(
            config.database.target(),
            Err(ConfigError::NotConfigured { .. })
        ));
        Ok(())
    });
}

#[test]
fn project_file_overrides_global_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "global.toml",
            "[database]\nurl = \"global.db\"\nseed_on_startup = false\n",
        )?;
        jail.create_file("delve.toml", "[database]\nurl = \"project.db\"\n")?;

        let config: DelveConfig =
            DelveConfig::figment_with_global(Some(Path::new("global.toml")), None).extract()?;
        assert_eq!(config.database.url, "project.db");
        assert!(!config.database.seed_on_startup);
        Ok(())
    });
}

#[test]
fn missing_global_file_is_skipped() {
    Jail::expect_with(|_jail| {
        let config: DelveConfig =
            DelveConfig::figment_with_global(Some(Path::new("nowhere/config.toml")), None)
                .extract()?;
        assert!(!config.database.is_configured());
        Ok(())
    });
}
