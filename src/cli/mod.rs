pub mod completions;
pub mod generate;
pub mod inspect;
pub mod random;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::error::Result;

/// identicon - Derive pixel-grid identicons from strings
#[derive(Parser, Debug)]
#[command(name = "identicon")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: generate::GenerateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an identicon and save or preview it (the default)
    Generate(generate::GenerateArgs),

    /// Print the fingerprint, colour and grid of a string as JSON
    Inspect(inspect::InspectArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load the settings file named on the command line, or discover one in the
/// working directory.
pub(crate) fn load_settings(config: Option<&Path>) -> Result<Settings> {
    match config {
        Some(path) => Settings::load(path),
        None => Settings::discover(Path::new(".")),
    }
}
