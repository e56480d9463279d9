use clap::Subcommand;

/// Top-level commands. Running `delve` with none starts the menu.
#[derive(Debug, Default, Subcommand)]
pub enum Commands {
    /// Run the interactive menu (default)
    #[default]
    Play,
    /// Insert the seed rooms and characters
    Seed,
    /// Delete the seed rooms and characters by their known ids
    Unseed,
}
