//! identicon - Deterministic pixel-grid identicons
//!
//! A library for deriving a small square image from any string: the string
//! is hashed into a fingerprint, the fingerprint's digits pick the cells of a
//! mirrored grid, and the grid is scaled into a raster with an optional
//! border.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use config::{Settings, SETTINGS_FILENAME};
pub use error::{IdenticonError, Result};
pub use render::{
    preview, rasterize, render_identicon, save, save_in, validate_filename, IdenticonLayout,
    RasterImage,
};
pub use types::{Colour, ColourSpec, Fingerprint, IdenticonOptions, LogicalGrid, FINGERPRINT_LEN};
