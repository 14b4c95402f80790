//! Core domain types for identicon.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values, `ColourSpec` as written in settings
//! - `Fingerprint` - Hex digest derived from the input string
//! - `LogicalGrid` - N×N foreground/background cell layout
//! - `IdenticonOptions` - Rendering parameters

mod colour;
mod fingerprint;
mod grid;
pub(crate) mod options;

pub use colour::{Colour, ColourSpec};
pub use fingerprint::{Fingerprint, FINGERPRINT_LEN};
pub use grid::LogicalGrid;
pub use options::{IdenticonOptions, MAX_IMAGE_SIZE};
