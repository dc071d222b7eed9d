//! Title bar shown above every view

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Title on the left, an optional detail on the right, rule underneath
pub struct Header<'a> {
    title: &'a str,
    detail: Option<String>,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            detail: None,
        }
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette::BORDER_DIM));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Title on the middle row of the header
        let row = Rect::new(inner.x + 1, inner.y + inner.height / 2, inner.width.saturating_sub(2), 1);
        Paragraph::new(Line::from(Span::styled(self.title, styles::caption()))).render(row, buf);

        if let Some(detail) = self.detail {
            Paragraph::new(Line::from(Span::styled(detail, styles::text_muted())).right_aligned())
                .render(row, buf);
        }
    }
}
