//! Logical identicon grid.

use std::fmt;

use crate::error::{IdenticonError, Result};
use crate::types::Fingerprint;

/// An N×N grid of foreground/background cells.
///
/// Stored as a flat row-major buffer (`cells[row * size + col]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalGrid {
    size: usize,
    cells: Vec<bool>,
}

impl LogicalGrid {
    /// Build the grid for `fingerprint`.
    ///
    /// Cells are visited column by column, top to bottom, each consuming the
    /// next fingerprint digit (wrapping to the first digit when exhausted).
    /// An even digit makes the cell foreground.
    ///
    /// In symmetrical mode only the left `ceil(n / 2)` columns are walked and
    /// every foreground cell is mirrored to column `n - 1 - col`. The walked
    /// half and its mirror never overlap except for the centre column of an
    /// odd-sized grid, which mirrors onto itself.
    pub fn build(fingerprint: &Fingerprint, num_blocks: usize, symmetrical: bool) -> Result<Self> {
        if num_blocks == 0 {
            return Err(IdenticonError::dimension("num_blocks must be at least 1"));
        }

        let n = num_blocks;
        let width = if symmetrical { n.div_ceil(2) } else { n };
        let mut cells = vec![false; n * n];
        let mut digits = fingerprint.cycle_digits();

        for col in 0..width {
            for row in 0..n {
                let digit = digits.next().unwrap_or(1);
                if digit % 2 != 0 {
                    continue;
                }
                cells[row * n + col] = true;
                if symmetrical {
                    cells[row * n + (n - 1 - col)] = true;
                }
            }
        }

        Ok(Self { size: n, cells })
    }

    /// Blocks per row (and per column).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell at (`row`, `col`) is foreground.
    ///
    /// Out-of-range positions read as background.
    pub fn is_foreground(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        self.cells[row * self.size + col]
    }

    /// Iterate over rows as slices of cell states.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }

    /// Number of foreground cells.
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Render each row as text, `#` for foreground and `.` for background.
    pub fn to_lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect())
            .collect()
    }
}

impl fmt::Display for LogicalGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lines().join("\n"))
    }
}
