//! Density-to-glyph mapping
//!
//! The glyph table is ordered from lightest (index 0, blank) to darkest
//! (last index, solid block). The same lookup feeds the terminal art widget
//! and the PNG exporter, so both always agree on the character for a cell.

use crate::grid::DensityGrid;

/// Ordered glyph table, lightest to darkest.
pub const GLYPHS: [char; 11] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@', '█'];

/// Highest density a cell can hold.
pub const MAX_DENSITY: u8 = (GLYPHS.len() - 1) as u8;

/// The blank glyph. Cells that map to it are skipped by the exporter.
pub const BLANK: char = GLYPHS[0];

/// Character for a density value. Values past the table are clamped.
pub fn glyph(intensity: u8) -> char {
    GLYPHS[usize::from(intensity.min(MAX_DENSITY))]
}

/// Render one grid row as text.
pub fn render_row(grid: &DensityGrid, y: usize) -> String {
    grid.row(y)
        .map(|row| row.iter().map(|&d| glyph(d)).collect())
        .unwrap_or_default()
}

/// Render the whole grid as newline-separated text.
pub fn render_text(grid: &DensityGrid) -> String {
    (0..grid.height())
        .map(|y| render_row(grid, y))
        .collect::<Vec<_>>()
        .join("\n")
}
