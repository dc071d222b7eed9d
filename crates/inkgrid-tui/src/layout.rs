//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

use crate::widgets::modal_overlay::centered_rect;

/// Screen areas shared by every view
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and counters
    pub header: Rect,

    /// View content
    pub body: Rect,

    /// Status line and key hints
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Footer
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Gallery body: catalogue list on the left, preview on the right
pub fn gallery_columns(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::horizontal([Constraint::Length(40), Constraint::Min(10)]).split(body);
    (chunks[0], chunks[1])
}

/// Viewer body: art above, placard below
pub fn viewer_rows(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(body);
    (chunks[0], chunks[1])
}

/// Largest rect for a `grid_width` x `grid_height` grid inside `area`,
/// centred.
///
/// One grid cell maps to one terminal cell when there is room; otherwise
/// both axes shrink by the same factor.
pub fn art_rect(area: Rect, grid_width: usize, grid_height: usize) -> Rect {
    if area.width == 0 || area.height == 0 || grid_width == 0 || grid_height == 0 {
        return Rect::new(area.x, area.y, 0, 0);
    }

    let fit_x = area.width as f64 / grid_width as f64;
    let fit_y = area.height as f64 / grid_height as f64;
    let factor = fit_x.min(fit_y).min(1.0);

    let width = ((grid_width as f64 * factor).floor() as u16).max(1);
    let height = ((grid_height as f64 * factor).floor() as u16).max(1);
    centered_rect(width, height, area)
}

/// Grow a rect by one cell on every side, clamped to `bounds`
pub fn outset(rect: Rect, bounds: Rect) -> Rect {
    let x = rect.x.saturating_sub(1).max(bounds.x);
    let y = rect.y.saturating_sub(1).max(bounds.y);
    let right = (rect.x + rect.width + 1).min(bounds.x + bounds.width);
    let bottom = (rect.y + rect.height + 1).min(bounds.y + bounds.height);
    Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
}
