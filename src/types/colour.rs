//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{IdenticonError, Result};

/// An RGBA colour value.
///
/// Colours supplied with three channels are opaque; four-channel colours keep
/// their alpha verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White. The default background.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Build a colour from 3 (RGB) or 4 (RGBA) integer channels.
    ///
    /// Channels are taken as wide integers so that out-of-range input is
    /// reported rather than truncated.
    pub fn from_channels(channels: &[i64]) -> Result<Self> {
        if channels.len() != 3 && channels.len() != 4 {
            return Err(IdenticonError::InvalidColor {
                message: format!("expected 3 or 4 channels, got {}", channels.len()),
                help: Some("Give a colour as R G B or R G B A".to_string()),
            });
        }

        let mut bytes = [255u8; 4];
        for (slot, &value) in bytes.iter_mut().zip(channels) {
            *slot = u8::try_from(value).map_err(|_| IdenticonError::InvalidColor {
                message: format!("channel value {} is outside 0..=255", value),
                help: None,
            })?;
        }

        Ok(Self::new(bytes[0], bytes[1], bytes[2], bytes[3]))
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 | 4 => {
                let mut bytes = [255u8; 4];
                for (slot, c) in bytes.iter_mut().zip(hex.chars()) {
                    let d = parse_hex_digit(c)?;
                    *slot = d << 4 | d;
                }
                Ok(Self::new(bytes[0], bytes[1], bytes[2], bytes[3]))
            }
            6 | 8 => {
                let mut bytes = [255u8; 4];
                for (i, slot) in bytes.iter_mut().enumerate().take(hex.len() / 2) {
                    *slot = parse_hex_byte(&hex[i * 2..i * 2 + 2])?;
                }
                Ok(Self::new(bytes[0], bytes[1], bytes[2], bytes[3]))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = IdenticonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Colour as written in a settings file: a channel list or a hex string.
///
/// Kept unchecked until [`ColourSpec::to_colour`] so that a bad value is
/// reported as [`IdenticonError::InvalidColor`] rather than a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColourSpec {
    Channels(Vec<i64>),
    Hex(String),
}

impl ColourSpec {
    pub fn to_colour(&self) -> Result<Colour> {
        match self {
            ColourSpec::Channels(channels) => Colour::from_channels(channels),
            ColourSpec::Hex(hex) => Colour::from_hex(hex),
        }
    }
}

fn invalid_hex(s: &str) -> IdenticonError {
    IdenticonError::InvalidColor {
        message: format!("invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| IdenticonError::InvalidColor {
            message: format!("invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| IdenticonError::InvalidColor {
        message: format!("invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_channels_rgb_is_opaque() {
        let c = Colour::from_channels(&[9, 143, 107]).unwrap();
        assert_eq!(c, Colour::rgb(9, 143, 107));
        assert!(c.is_opaque());
    }

    #[test]
    fn test_from_channels_rgba_verbatim() {
        let c = Colour::from_channels(&[10, 20, 30, 40]).unwrap();
        assert_eq!(c, Colour::new(10, 20, 30, 40));
    }

    #[test]
    fn test_from_channels_wrong_count() {
        for channels in [&[][..], &[1], &[1, 2], &[1, 2, 3, 4, 5]] {
            let err = Colour::from_channels(channels).unwrap_err();
            assert!(matches!(err, IdenticonError::InvalidColor { .. }));
        }
    }

    #[test]
    fn test_from_channels_out_of_range() {
        assert!(matches!(
            Colour::from_channels(&[0, 256, 0]),
            Err(IdenticonError::InvalidColor { .. })
        ));
        assert!(matches!(
            Colour::from_channels(&[0, 0, 0, -1]),
            Err(IdenticonError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_short_forms() {
        assert_eq!(Colour::from_hex("#ABC").unwrap(), Colour::rgb(0xAA, 0xBB, 0xCC));
        assert_eq!(Colour::from_hex("#F008").unwrap(), Colour::new(255, 0, 0, 0x88));
    }

    #[test]
    fn test_from_hex_8digit() {
        let c = Colour::from_hex("FF000080").unwrap();
        assert_eq!(c, Colour::new(255, 0, 0, 128));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("+f0000").is_err());
        assert!(Colour::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(9, 143, 107)), "#098F6B");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_spec_channels_and_hex() {
        let spec: ColourSpec = serde_yaml::from_str("[10, 20, 30, 40]").unwrap();
        assert_eq!(spec.to_colour().unwrap(), Colour::new(10, 20, 30, 40));

        let spec: ColourSpec = serde_yaml::from_str("'#ffffff'").unwrap();
        assert_eq!(spec.to_colour().unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_spec_bad_values_are_colour_errors() {
        for yaml in ["[1, 2]", "[1, 2, 300]", "'#12345'"] {
            let spec: ColourSpec = serde_yaml::from_str(yaml).unwrap();
            assert!(
                matches!(spec.to_colour(), Err(IdenticonError::InvalidColor { .. })),
                "{}",
                yaml
            );
        }
    }
}
