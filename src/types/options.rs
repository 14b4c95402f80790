//! Rendering parameters.

use crate::error::{IdenticonError, Result};
use crate::types::Colour;

/// Default output size in pixels.
pub const DEFAULT_IMAGE_SIZE: u32 = 400;

/// Default blocks per row.
pub const DEFAULT_NUM_BLOCKS: u32 = 5;

/// Largest accepted output size in pixels (a 1 GiB RGBA buffer).
pub const MAX_IMAGE_SIZE: u32 = 16_384;

/// Parameters for [`render_identicon`](crate::render::render_identicon).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdenticonOptions {
    /// Foreground colour. Derived from the fingerprint when `None`.
    pub colour: Option<Colour>,

    /// Background colour, also used for the border.
    pub background: Colour,

    /// Width and height of the output in pixels, border included.
    pub image_size: u32,

    /// Blocks per row and per column.
    pub num_blocks: u32,

    /// Border width in pixels on each side.
    pub border: u32,

    /// Mirror the left half onto the right half.
    pub symmetrical: bool,
}

impl Default for IdenticonOptions {
    fn default() -> Self {
        Self {
            colour: None,
            background: Colour::WHITE,
            image_size: DEFAULT_IMAGE_SIZE,
            num_blocks: DEFAULT_NUM_BLOCKS,
            border: 0,
            symmetrical: true,
        }
    }
}

impl IdenticonOptions {
    /// Check sizes before any rendering work happens.
    pub fn validate(&self) -> Result<()> {
        if self.num_blocks == 0 {
            return Err(IdenticonError::dimension("num_blocks must be at least 1"));
        }
        check_image_size(self.image_size, self.border)
    }
}

/// Check an output size and border.
///
/// The size must be positive, leave room inside the border, and give an RGBA
/// buffer that fits in memory.
pub(crate) fn check_image_size(image_size: u32, border: u32) -> Result<()> {
    if image_size == 0 {
        return Err(IdenticonError::dimension("image_size must be at least 1"));
    }

    let buffer_len = u64::from(image_size)
        .checked_mul(u64::from(image_size))
        .and_then(|pixels| pixels.checked_mul(4))
        .and_then(|bytes| usize::try_from(bytes).ok());
    if image_size > MAX_IMAGE_SIZE || buffer_len.is_none() {
        return Err(IdenticonError::InvalidDimension {
            message: format!("image_size {} is too large", image_size),
            help: Some(format!("Use a size of at most {}px", MAX_IMAGE_SIZE)),
        });
    }

    if u64::from(border) * 2 >= u64::from(image_size) {
        return Err(IdenticonError::InvalidDimension {
            message: format!(
                "border {} leaves no room in a {}px image",
                border, image_size
            ),
            help: Some("Twice the border must be smaller than the image size".to_string()),
        });
    }
    Ok(())
}
