//! Terminal preview of a logical grid.
//!
//! Each cell is drawn two columns wide so blocks look roughly square. With
//! colour enabled cells are painted with 24-bit ANSI backgrounds; otherwise
//! `##` marks foreground and `..` background.

use crate::types::{Colour, LogicalGrid};

const RESET: &str = "\x1b[0m";

/// Render `grid` as lines of terminal text, ending with a newline.
pub fn preview(grid: &LogicalGrid, colour: Colour, background: Colour, ansi: bool) -> String {
    let mut out = String::new();

    for row in grid.rows() {
        for &cell in row {
            if ansi {
                let c = if cell { colour } else { background };
                out.push_str(&format!("\x1b[48;2;{};{};{}m  ", c.r, c.g, c.b));
            } else {
                out.push_str(if cell { "##" } else { ".." });
            }
        }
        if ansi {
            out.push_str(RESET);
        }
        out.push('\n');
    }

    out
}
