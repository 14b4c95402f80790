//! Rendering module for identicon.
//!
//! This module turns a string into a finished raster: fingerprint, logical
//! grid, block scaling and border. Saving and terminal preview live here too.

mod preview;
mod raster;
mod save;

pub use preview::preview;
pub use raster::{rasterize, RasterImage};
pub use save::{save, save_in, validate_filename, SUPPORTED_EXTENSIONS};

use crate::error::Result;
use crate::types::{Colour, Fingerprint, IdenticonOptions, LogicalGrid};

/// Everything an identicon is drawn from, before any pixels exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdenticonLayout {
    pub fingerprint: Fingerprint,
    pub grid: LogicalGrid,
    /// Foreground colour actually used: `options.colour` or the derived one.
    pub colour: Colour,
    pub background: Colour,
    pub image_size: u32,
    pub border: u32,
}

impl IdenticonLayout {
    /// Lay out the identicon for `text`.
    ///
    /// Options are validated before any work happens, so a layout can always
    /// be rasterized.
    pub fn new(text: &str, options: &IdenticonOptions) -> Result<Self> {
        options.validate()?;

        let fingerprint = Fingerprint::derive(text);
        let grid =
            LogicalGrid::build(&fingerprint, options.num_blocks as usize, options.symmetrical)?;
        let colour = options.colour.unwrap_or_else(|| fingerprint.colour());

        Ok(Self {
            fingerprint,
            grid,
            colour,
            background: options.background,
            image_size: options.image_size,
            border: options.border,
        })
    }

    pub fn rasterize(&self) -> Result<RasterImage> {
        rasterize(
            &self.grid,
            self.colour,
            self.background,
            self.image_size,
            self.border,
        )
    }

    /// Terminal preview of the grid; see [`preview`].
    pub fn preview(&self, ansi: bool) -> String {
        preview(&self.grid, self.colour, self.background, ansi)
    }
}

/// Render the identicon for `text`.
///
/// Options are validated before any work happens. The foreground colour is
/// derived from the fingerprint unless `options.colour` is set.
pub fn render_identicon(text: &str, options: &IdenticonOptions) -> Result<RasterImage> {
    IdenticonLayout::new(text, options)?.rasterize()
}
