//! Generate command implementation.
//!
//! Renders an identicon and either saves it or previews it in the terminal.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{IdenticonError, Result};
use crate::output::{display_path, Printer};
use crate::render::{save_in, IdenticonLayout};
use crate::types::{Colour, IdenticonOptions};

use super::random::{demo_rng, random_string, DEFAULT_RANDOM_LENGTH};

/// Render an identicon and save or preview it
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// String the identicon is based on (random when omitted)
    #[arg(long)]
    pub string: Option<String>,

    /// Output image size in pixels; the image is square
    #[arg(long)]
    pub size: Option<u32>,

    /// Number of blocks in a row
    #[arg(long)]
    pub blocks: Option<u32>,

    /// Foreground colour as 3 or 4 integers, or one hex string
    #[arg(long, num_args = 1..=4, allow_negative_numbers = true)]
    pub color: Option<Vec<String>>,

    /// Background colour as 3 or 4 integers, or one hex string
    #[arg(long, num_args = 1..=4, allow_negative_numbers = true)]
    pub background: Option<Vec<String>>,

    /// Border width in pixels
    #[arg(long)]
    pub border: Option<u32>,

    /// Do not mirror the left half onto the right half
    #[arg(long = "not_symmetrical", visible_alias = "not-symmetrical")]
    pub not_symmetrical: bool,

    /// Filename to save to (png, jpg or jpeg); previews in the terminal when omitted
    #[arg(long)]
    pub save: Option<String>,

    /// Settings file (default: ./identicon.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the random string
    #[arg(long)]
    pub seed: Option<u64>,

    /// Length of the random string
    #[arg(long, default_value_t = DEFAULT_RANDOM_LENGTH)]
    pub length: usize,
}

impl GenerateArgs {
    /// Combine flags with settings; flags win.
    pub fn resolve(&self, settings: &Settings) -> Result<IdenticonOptions> {
        let mut options = settings.options()?;

        if let Some(size) = self.size {
            options.image_size = size;
        }
        if let Some(blocks) = self.blocks {
            options.num_blocks = blocks;
        }
        if let Some(border) = self.border {
            options.border = border;
        }
        if let Some(values) = &self.color {
            options.colour = Some(parse_colour_args(values)?);
        }
        if let Some(values) = &self.background {
            options.background = parse_colour_args(values)?;
        }
        if self.not_symmetrical {
            options.symmetrical = false;
        }

        Ok(options)
    }
}

/// Parse colour flag values: one hex string, or 3-4 integer channels.
pub fn parse_colour_args(values: &[String]) -> Result<Colour> {
    if let [single] = values {
        if single.parse::<i64>().is_err() {
            return Colour::from_hex(single);
        }
    }

    let channels = values
        .iter()
        .map(|v| {
            v.parse::<i64>().map_err(|_| IdenticonError::InvalidColor {
                message: format!("{} is not an integer channel", v),
                help: Some("Give a colour as R G B [A] or as one hex string".to_string()),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Colour::from_channels(&channels)
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let settings = super::load_settings(args.config.as_deref())?;
    let options = args.resolve(&settings)?;

    let text = match &args.string {
        Some(s) => s.clone(),
        None => {
            let s = random_string(&mut demo_rng(args.seed), args.length);
            printer.info("Random", &s);
            s
        }
    };

    printer.status(
        "Generating",
        &format!(
            "{} ({}x{} blocks, {}px)",
            text, options.num_blocks, options.num_blocks, options.image_size
        ),
    );

    let layout = IdenticonLayout::new(&text, &options)?;

    match &args.save {
        Some(filename) => {
            if !settings.output.exists() {
                fs::create_dir_all(&settings.output).map_err(|e| IdenticonError::Io {
                    path: settings.output.clone(),
                    message: format!("Failed to create output directory: {}", e),
                })?;
            }
            let image = layout.rasterize()?;
            let path = save_in(&image, &settings.output, filename)?;
            printer.success("Saved", &display_path(&path));
        }
        None => {
            let ansi = io::stdout().is_terminal();
            print!("{}", layout.preview(ansi));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::{Cli, Commands};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_colour_args() {
        assert_eq!(
            parse_colour_args(&strings(&["10", "20", "30", "40"])).unwrap(),
            Colour::new(10, 20, 30, 40)
        );
        assert_eq!(
            parse_colour_args(&strings(&["#0a141e"])).unwrap(),
            Colour::rgb(10, 20, 30)
        );
        assert!(matches!(
            parse_colour_args(&strings(&["7"])),
            Err(IdenticonError::InvalidColor { .. })
        ));
        assert!(matches!(
            parse_colour_args(&strings(&["1", "x", "3"])),
            Err(IdenticonError::InvalidColor { .. })
        ));
        assert!(matches!(
            parse_colour_args(&strings(&["1", "2", "-3"])),
            Err(IdenticonError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_top_level_flags() {
        let cli = Cli::try_parse_from([
            "identicon",
            "--string",
            "alice",
            "--size",
            "64",
            "--blocks",
            "7",
            "--color",
            "10",
            "20",
            "30",
            "--border",
            "4",
            "--not_symmetrical",
            "--save",
            "alice.png",
        ])
        .unwrap();
        assert!(cli.command.is_none());

        let args = cli.generate;
        assert_eq!(args.string.as_deref(), Some("alice"));
        assert_eq!(args.save.as_deref(), Some("alice.png"));

        let options = args.resolve(&Settings::default()).unwrap();
        assert_eq!(
            options,
            IdenticonOptions {
                colour: Some(Colour::rgb(10, 20, 30)),
                background: Colour::WHITE,
                image_size: 64,
                num_blocks: 7,
                border: 4,
                symmetrical: false,
            }
        );
    }

    #[test]
    fn test_generate_subcommand() {
        let cli = Cli::try_parse_from(["identicon", "generate", "--blocks", "3"]).unwrap();
        match cli.command {
            Some(Commands::Generate(args)) => assert_eq!(args.blocks, Some(3)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = Settings::parse("size: 100\nblocks: 9\nbackground: [0, 0, 0]\n").unwrap();
        let cli = Cli::try_parse_from(["identicon", "--blocks", "3"]).unwrap();

        let options = cli.generate.resolve(&settings).unwrap();
        assert_eq!(options.image_size, 100);
        assert_eq!(options.num_blocks, 3);
        assert_eq!(options.background, Colour::BLACK);
        assert!(options.symmetrical);
    }

    fn args_for(string: &str, config: PathBuf, save: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            string: Some(string.to_string()),
            size: None,
            blocks: None,
            color: None,
            background: None,
            border: None,
            not_symmetrical: false,
            save: save.map(str::to_string),
            config: Some(config),
            seed: None,
            length: DEFAULT_RANDOM_LENGTH,
        }
    }

    #[test]
    fn test_bad_settings_colour_is_colour_error() {
        let settings = Settings::parse("color: [1, 2, 300]\n").unwrap();
        let cli = Cli::try_parse_from(["identicon"]).unwrap();
        assert!(matches!(
            cli.generate.resolve(&settings),
            Err(IdenticonError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_run_preview_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("icons");
        let config = dir.path().join("identicon.yaml");
        fs::write(&config, format!("size: 20\noutput: {}\n", out.display())).unwrap();

        run(args_for("test", config, None), &Printer::new()).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn test_run_saves_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("icons");
        let config = dir.path().join("identicon.yaml");
        fs::write(&config, format!("size: 20\noutput: {}\n", out.display())).unwrap();

        run(args_for("test", config, Some("test.png")), &Printer::new()).unwrap();

        let img = image::open(out.join("test.png")).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (20, 20));
        assert_eq!(img.get_pixel(0, 0).0, [9, 143, 107, 255]);
    }
}
