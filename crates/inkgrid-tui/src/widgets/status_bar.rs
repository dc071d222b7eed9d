//! Status bar widget
//!
//! Shows the latest status message (or the editor phase) on the left and
//! key hints for the current view on the right.

use inkgrid_app::state::{AppState, View};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn left(&self) -> Line<'static> {
        if let Some(status) = &self.state.status {
            return Line::from(Span::styled(
                format!(" {}", status.text),
                styles::status(status.kind),
            ));
        }

        match (&self.state.view, &self.state.editor) {
            (View::Editor, Some(editor)) => {
                let phase = editor.phase();
                Line::from(vec![
                    Span::styled(format!(" {}", phase.label()), styles::phase(phase)),
                    Span::styled(
                        format!("  undo {}/{}", editor.history().len(), editor.history().limit()),
                        styles::text_muted(),
                    ),
                ])
            }
            _ if self.state.viewer.exporting => {
                Line::from(Span::styled(" exporting", styles::text_muted()))
            }
            _ => Line::default(),
        }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.view {
            View::Gallery => vec![
                ("n", "new"),
                ("enter", "view"),
                ("↑↓", "select"),
                ("q", "quit"),
            ],
            View::Editor => vec![
                ("drag", "draw"),
                ("u", "undo"),
                ("p", "publish"),
                ("e", "export"),
                ("esc", "cancel"),
            ],
            View::Viewer => {
                let mut hints = Vec::new();
                if self.state.has_previous() {
                    hints.push(("←", "previous"));
                }
                if self.state.has_next() {
                    hints.push(("→", "next"));
                }
                hints.push(("e", "export"));
                hints.push(("esc", "archive"));
                hints
            }
        }
    }

    fn right(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        Line::from(spans).right_aligned()
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.left()).render(area, buf);
        if self.state.settings.ui.show_hints {
            Paragraph::new(self.right()).render(area, buf);
        }
    }
}
