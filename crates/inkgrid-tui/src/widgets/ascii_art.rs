//! Text rendering of a density grid.

use inkgrid_core::{glyph, ArtBox, DensityGrid};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::theme::styles;

/// Draws a grid as glyphs, scaled to fill the area.
///
/// Each terminal cell shows the grid cell under its centre, using the same
/// mapping the editor uses to turn pointer positions into grid cells.
pub struct AsciiArt<'a> {
    grid: &'a DensityGrid,
    style: Style,
}

impl<'a> AsciiArt<'a> {
    pub fn new(grid: &'a DensityGrid) -> Self {
        Self {
            grid,
            style: styles::ink(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Screen-space box of a rendered rect
pub fn art_box(area: Rect) -> ArtBox {
    ArtBox::new(
        area.x as f64,
        area.y as f64,
        area.width as f64,
        area.height as f64,
    )
}

impl Widget for AsciiArt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let bounds = art_box(area);
        let (width, height) = (self.grid.width(), self.grid.height());

        for sy in area.top()..area.bottom() {
            for sx in area.left()..area.right() {
                let Some(cell) = bounds.cell_at(sx as f64 + 0.5, sy as f64 + 0.5, width, height)
                else {
                    continue;
                };
                let density = self.grid.get(cell.x, cell.y).unwrap_or(0);
                if let Some(target) = buf.cell_mut((sx, sy)) {
                    target.set_char(glyph(density)).set_style(self.style);
                }
            }
        }
    }
}
