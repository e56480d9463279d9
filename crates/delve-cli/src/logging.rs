//! Tracing setup: one console layer and an optional file layer, each with its
//! own filter.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use delve_config::LoggingConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::cli::GlobalFlags;

/// Console filter directive after applying `--quiet` / `--verbose`.
pub fn console_directive<'a>(config: &'a LoggingConfig, flags: &GlobalFlags) -> &'a str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        config.console_level.as_str()
    }
}

/// Open the log file for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

pub fn init_tracing(config: &LoggingConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let console_filter = EnvFilter::try_from_env("DELVE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(console_directive(config, flags)));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file = if config.file_enabled() {
        let writer = open_log_file(Path::new(&config.file_path))?;
        Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(writer))
                .with_filter(EnvFilter::new(&config.file_level)),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
