//! Placards: the small print next to a piece

use chrono::{Local, TimeZone};
use inkgrid_core::Artwork;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Local-time rendering of an epoch-millisecond timestamp
pub fn format_timestamp(millis: i64, fmt: &str) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(t) => t.format(fmt).to_string(),
        None => "unknown".to_string(),
    }
}

/// Zero-padded specimen number
pub fn specimen_label(number: usize) -> String {
    format!("Specimen No. {:04}", number)
}

/// Catalogue card under a gallery preview, or record card in the viewer
pub struct Placard<'a> {
    artwork: &'a Artwork,
    number: Option<usize>,
}

impl<'a> Placard<'a> {
    /// Gallery card with the specimen number
    pub fn catalog(artwork: &'a Artwork, number: usize) -> Self {
        Self {
            artwork,
            number: Some(number),
        }
    }

    /// Viewer card with the internal record and full timestamp
    pub fn record(artwork: &'a Artwork) -> Self {
        Self {
            artwork,
            number: None,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match self.number {
            Some(number) => vec![
                Line::from(Span::styled(specimen_label(number).to_uppercase(), styles::caption())),
                Line::from(Span::styled(
                    format!("{} // MONOCHROME ON BLACK", self.artwork.short_id()),
                    styles::text_primary(),
                )),
                Line::from(Span::styled(
                    format!(
                        "Recorded: {}  |  Medium: ASCII / TXT",
                        format_timestamp(self.artwork.created_at, "%Y-%m-%d")
                    ),
                    styles::text_muted(),
                )),
            ],
            None => vec![
                Line::from(Span::styled(
                    format!("INTERNAL RECORD: {}", self.artwork.record_label()),
                    styles::caption(),
                )),
                Line::from(Span::styled(
                    format!(
                        "Time Stamp: {}",
                        format_timestamp(self.artwork.created_at, "%Y-%m-%d %H:%M:%S")
                    ),
                    styles::text_muted(),
                )),
            ],
        }
    }
}

impl Widget for Placard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let paragraph = if self.number.is_some() {
            Paragraph::new(lines)
        } else {
            Paragraph::new(lines).centered()
        };
        paragraph.render(area, buf);
    }
}
