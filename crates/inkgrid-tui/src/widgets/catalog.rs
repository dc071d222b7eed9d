//! Catalogue list for the gallery view

use inkgrid_core::ArtworkCollection;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::placard::format_timestamp;
use crate::theme::styles;

pub const EMPTY_TEXT: &str = "Waiting for first contribution...";
pub const END_TEXT: &str = "End of Collection";

/// One row per artwork, newest first, with the cursor row highlighted.
///
/// Scrolls just enough to keep the selected row visible. The end marker is
/// drawn after the last row when it fits.
pub struct Catalog<'a> {
    collection: &'a ArtworkCollection,
    selected: usize,
}

impl<'a> Catalog<'a> {
    pub fn new(collection: &'a ArtworkCollection, selected: usize) -> Self {
        Self {
            collection,
            selected,
        }
    }

    fn row(&self, index: usize) -> Option<Line<'static>> {
        let artwork = self.collection.get(index)?;
        let text = format!(
            " No. {:04}  {:<8}  {} ",
            self.collection.specimen_number(index),
            artwork.short_id(),
            format_timestamp(artwork.created_at, "%Y-%m-%d"),
        );
        let style = if index == self.selected {
            styles::selected()
        } else {
            styles::text_secondary()
        };
        Some(Line::from(Span::styled(text, style)))
    }
}

/// First visible row so that `selected` stays on screen
pub fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    selected.saturating_sub(visible - 1)
}

impl Widget for Catalog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        if self.collection.is_empty() {
            let y = area.y + area.height / 2;
            Paragraph::new(Line::from(Span::styled(EMPTY_TEXT, styles::text_muted())).centered())
                .render(Rect::new(area.x, y, area.width, 1), buf);
            return;
        }

        let visible = area.height as usize;
        let offset = scroll_offset(self.selected, visible);
        let mut lines: Vec<Line> = (offset..self.collection.len())
            .take(visible)
            .filter_map(|i| self.row(i))
            .collect();

        if lines.len() < visible {
            lines.push(Line::from(Span::styled(END_TEXT, styles::text_muted())).centered());
        }

        Paragraph::new(lines).render(area, buf);
    }
}
