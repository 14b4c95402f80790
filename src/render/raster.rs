//! Rasterizing a logical grid into pixels.
//!
//! Cells are replicated into blocks with nearest-neighbour sampling, then a
//! uniform border of background colour is added around the result.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::Result;
use crate::types::options::check_image_size;
use crate::types::{Colour, LogicalGrid};

/// A rendered identicon: a square RGBA raster.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    image: RgbaImage,
}

impl RasterImage {
    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Colour::new(p[0], p[1], p[2], p[3]))
    }

    /// Borrow the underlying image buffer.
    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the underlying image buffer.
    pub fn into_rgba_image(self) -> RgbaImage {
        self.image
    }
}

/// Paint `grid` into an `image_size`-pixel square.
///
/// The area inside the border is `image_size - 2 * border` pixels wide. Pixel
/// `(x, y)` there takes the state of cell `(y * n / inner, x * n / inner)`, so
/// cell edges stay hard even when the inner size is not a multiple of `n`.
pub fn rasterize(
    grid: &LogicalGrid,
    colour: Colour,
    background: Colour,
    image_size: u32,
    border: u32,
) -> Result<RasterImage> {
    check_image_size(image_size, border)?;

    let n = grid.size() as u64;
    let inner = u64::from(image_size - border * 2);
    let fg = Rgba(colour.to_rgba());
    let bg = Rgba(background.to_rgba());

    let image: RgbaImage = ImageBuffer::from_fn(image_size, image_size, |x, y| {
        let (Some(ix), Some(iy)) = (x.checked_sub(border), y.checked_sub(border)) else {
            return bg;
        };
        let (ix, iy) = (u64::from(ix), u64::from(iy));
        if ix >= inner || iy >= inner {
            return bg;
        }

        let col = (ix * n / inner) as usize;
        let row = (iy * n / inner) as usize;
        if grid.is_foreground(row, col) {
            fg
        } else {
            bg
        }
    });

    Ok(RasterImage { image })
}
