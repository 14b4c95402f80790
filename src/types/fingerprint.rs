//! Fingerprint derivation.
//!
//! A fingerprint is the lower-case hex MD5 digest of the lower-cased input.
//! Every later choice (colour, cell states) is read from its digits.

use std::fmt;

use md5::{Digest, Md5};

use crate::error::{IdenticonError, Result};
use crate::types::Colour;

/// Hex characters in an MD5 fingerprint.
pub const FINGERPRINT_LEN: usize = 32;

/// A lower-case hexadecimal digest string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Derive the fingerprint of `input`.
    ///
    /// The input is lower-cased first, so `"Alice"` and `"alice"` share a
    /// fingerprint. Never fails; the empty string is a valid input.
    pub fn derive(input: &str) -> Self {
        let mut hasher = Md5::new();
        hasher.update(input.to_lowercase().as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Wrap an existing hex string of any non-zero length.
    pub fn from_hex(hex: &str) -> Result<Self> {
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdenticonError::InvalidFingerprint {
                message: format!("not a hex string: {:?}", hex),
                help: Some("A fingerprint is one or more hexadecimal digits".to_string()),
            });
        }
        Ok(Self(hex.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digit values in order, repeating from the start forever.
    pub fn cycle_digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0
            .chars()
            .map(|c| c.to_digit(16).unwrap_or(0) as u8)
            .cycle()
    }

    /// The default foreground colour: the first three hex byte pairs as RGB.
    ///
    /// Fingerprints shorter than six digits wrap around like the grid walk.
    pub fn colour(&self) -> Colour {
        let mut digits = self.cycle_digits();
        let mut byte = || {
            let hi = digits.next().unwrap_or(0);
            let lo = digits.next().unwrap_or(0);
            hi << 4 | lo
        };
        let r = byte();
        let g = byte();
        let b = byte();
        Colour::rgb(r, g, b)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
