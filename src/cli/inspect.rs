//! Inspect command implementation.
//!
//! Prints what an identicon is made of as JSON on stdout.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::{IdenticonError, Result};
use crate::types::{Colour, Fingerprint, LogicalGrid};

/// Print the fingerprint, colour and grid of a string as JSON
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// String to inspect
    #[arg(long)]
    pub string: String,

    /// Number of blocks in a row
    #[arg(long)]
    pub blocks: Option<u32>,

    /// Do not mirror the left half onto the right half
    #[arg(long = "not_symmetrical", visible_alias = "not-symmetrical")]
    pub not_symmetrical: bool,

    /// Settings file (default: ./identicon.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Machine-readable description of an identicon.
#[derive(Debug, Serialize)]
pub struct Report {
    pub input: String,
    pub fingerprint: String,
    /// Foreground colour the identicon is drawn with.
    pub colour: String,
    pub rgba: [u8; 4],
    pub blocks: u32,
    pub symmetrical: bool,
    pub grid: Vec<String>,
}

impl Report {
    /// Describe the identicon for `input`. `colour` overrides the foreground
    /// colour derived from the fingerprint, as it does when rendering.
    pub fn new(
        input: &str,
        blocks: u32,
        symmetrical: bool,
        colour: Option<Colour>,
    ) -> Result<Self> {
        let fingerprint = Fingerprint::derive(input);
        let grid = LogicalGrid::build(&fingerprint, blocks as usize, symmetrical)?;
        let colour = colour.unwrap_or_else(|| fingerprint.colour());

        Ok(Self {
            input: input.to_string(),
            fingerprint: fingerprint.to_string(),
            colour: colour.to_string(),
            rgba: colour.to_rgba(),
            blocks,
            symmetrical,
            grid: grid.to_lines(),
        })
    }
}

pub fn run(args: InspectArgs) -> Result<()> {
    let settings = super::load_settings(args.config.as_deref())?;
    let defaults = settings.options()?;

    let blocks = args.blocks.unwrap_or(defaults.num_blocks);
    let symmetrical = defaults.symmetrical && !args.not_symmetrical;

    let report = Report::new(&args.string, blocks, symmetrical, defaults.colour)?;
    let json = serde_json::to_string_pretty(&report).map_err(|e| IdenticonError::Config {
        message: format!("Failed to serialize report: {}", e),
        help: None,
    })?;
    println!("{}", json);

    Ok(())
}
