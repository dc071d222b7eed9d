//! Application state (Model in TEA pattern)

use inkgrid_core::{ArtBox, Artwork, ArtworkCollection};

use crate::config::Settings;
use crate::editor::EditorSession;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Browse published artworks
    #[default]
    Gallery,
    /// Draw on a fresh grid
    Editor,
    /// Inspect one artwork
    Viewer,
}

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Waiting for the first gallery read
    #[default]
    Loading,
    Running,
    Quitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line feedback shown at the bottom of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

/// Viewer cursor into the loaded collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewerState {
    pub index: usize,
    /// An export of the viewed artwork is in flight
    pub exporting: bool,
}

/// Complete application state (Model in TEA pattern)
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: AppPhase,
    pub view: View,
    pub settings: Settings,

    /// Artworks as last read from the store, newest first
    pub collection: ArtworkCollection,

    /// Gallery cursor
    pub selected: usize,

    pub viewer: ViewerState,

    /// Live session while the editor is open
    pub editor: Option<EditorSession>,

    /// Screen rectangle of the rendered art, recorded by the renderer
    pub art_area: Option<ArtBox>,

    pub status: Option<StatusLine>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Replace the collection, keeping both cursors in range.
    pub fn set_collection(&mut self, collection: ArtworkCollection) {
        self.collection = collection;
        let last = self.collection.len().saturating_sub(1);
        self.selected = self.selected.min(last);
        self.viewer.index = self.viewer.index.min(last);
        if self.phase == AppPhase::Loading {
            self.phase = AppPhase::Running;
        }
    }

    pub fn selected_artwork(&self) -> Option<&Artwork> {
        self.collection.get(self.selected)
    }

    pub fn viewed_artwork(&self) -> Option<&Artwork> {
        self.collection.get(self.viewer.index)
    }

    pub fn has_previous(&self) -> bool {
        self.viewer.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.viewer.index + 1 < self.collection.len()
    }

    pub fn open_editor(&mut self) {
        self.editor = Some(EditorSession::new(&self.settings.canvas));
        self.art_area = None;
        self.view = View::Editor;
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
        self.art_area = None;
        self.view = View::Gallery;
    }

    /// Show the viewer on the artwork at `index`.
    ///
    /// A running viewer export stays flagged until its result arrives.
    pub fn open_viewer(&mut self, index: usize) {
        self.viewer.index = index;
        self.art_area = None;
        self.view = View::Viewer;
    }

    /// Whether an export is running in either the editor or the viewer.
    pub fn is_exporting(&self) -> bool {
        self.viewer.exporting
            || self
                .editor
                .as_ref()
                .is_some_and(|e| e.phase() == crate::editor::SessionPhase::Exporting)
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            kind: StatusKind::Info,
            text: text.into(),
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            kind: StatusKind::Error,
            text: text.into(),
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
