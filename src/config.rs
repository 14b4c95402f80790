//! Project settings (identicon.yaml) parsing.
//!
//! The settings file supplies defaults for rendering options and the
//! directory saved images are written to. Command-line flags override it.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{IdenticonError, Result};
use crate::types::{ColourSpec, IdenticonOptions};

/// Settings file looked up in the working directory.
pub const SETTINGS_FILENAME: &str = "identicon.yaml";

/// Settings loaded from identicon.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Output image size in pixels.
    pub size: Option<u32>,

    /// Blocks per row.
    pub blocks: Option<u32>,

    /// Border width in pixels.
    pub border: Option<u32>,

    /// Mirror the left half.
    pub symmetrical: Option<bool>,

    /// Foreground colour (channel list or hex string).
    pub color: Option<ColourSpec>,

    /// Background colour (channel list or hex string).
    pub background: Option<ColourSpec>,

    /// Directory saved images are written to.
    pub output: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: None,
            blocks: None,
            border: None,
            symmetrical: None,
            color: None,
            background: None,
            output: default_output(),
        }
    }
}

impl Settings {
    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IdenticonError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| IdenticonError::Config {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Check {} syntax", SETTINGS_FILENAME)),
        })
    }

    /// Load `dir/identicon.yaml` if it exists, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Rendering options with these settings applied over the defaults.
    ///
    /// Fails with [`IdenticonError::InvalidColor`] if a colour is malformed.
    pub fn options(&self) -> Result<IdenticonOptions> {
        let defaults = IdenticonOptions::default();
        let colour = self.color.as_ref().map(ColourSpec::to_colour).transpose()?;
        let background = match &self.background {
            Some(spec) => spec.to_colour()?,
            None => defaults.background,
        };

        Ok(IdenticonOptions {
            colour,
            background,
            image_size: self.size.unwrap_or(defaults.image_size),
            num_blocks: self.blocks.unwrap_or(defaults.num_blocks),
            border: self.border.unwrap_or(defaults.border),
            symmetrical: self.symmetrical.unwrap_or(defaults.symmetrical),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full() {
        let yaml = r##"
size: 128
blocks: 7
border: 8
symmetrical: false
color: [10, 20, 30, 40]
background: "#000"
output: icons
"##;
        let settings = Settings::parse(yaml).unwrap();
        assert_eq!(settings.output, PathBuf::from("icons"));

        let opts = settings.options().unwrap();
        assert_eq!(
            opts,
            IdenticonOptions {
                colour: Some(Colour::new(10, 20, 30, 40)),
                background: Colour::BLACK,
                image_size: 128,
                num_blocks: 7,
                border: 8,
                symmetrical: false,
            }
        );
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let settings = Settings::parse("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.options().unwrap(), IdenticonOptions::default());
        assert_eq!(settings.output, PathBuf::from("."));
    }

    #[test]
    fn test_options_rejects_bad_colour() {
        for yaml in [
            "color: [1, 2, 300]",
            "color: [1, 2]",
            "background: '#12345'",
            "background: [0, 0, 0, -1]",
        ] {
            let settings = Settings::parse(yaml).unwrap();
            let err = settings.options().unwrap_err();
            assert!(matches!(err, IdenticonError::InvalidColor { .. }), "{}", yaml);
        }
    }

    #[test]
    fn test_parse_rejects_malformed_colour_value() {
        let err = Settings::parse("color: {r: 1}").unwrap_err();
        assert!(matches!(err, IdenticonError::Config { .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        assert!(Settings::parse("colour: [1, 2, 3]").is_err());
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().unwrap();
        assert_eq!(Settings::discover(dir.path()).unwrap(), Settings::default());

        std::fs::write(dir.path().join(SETTINGS_FILENAME), "blocks: 9\n").unwrap();
        let settings = Settings::discover(dir.path()).unwrap();
        assert_eq!(settings.blocks, Some(9));
    }
}
