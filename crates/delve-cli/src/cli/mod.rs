use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::GlobalFlags;
pub use root_commands::Commands;

/// Top-level CLI parser for the `delve` binary.
#[derive(Debug, Parser)]
#[command(name = "delve", version, about = "Delve - rooms, characters and abilities in libSQL")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Extra TOML config file, layered over ./delve.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only on the console)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging on the console)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            config: self.config.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
