//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use crate::input_key::{InputKey, PointerInput};
use inkgrid_core::{Artwork, ArtworkCollection};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Pointer gesture from terminal, in screen coordinates
    Pointer(PointerInput),

    /// Tick event for periodic updates
    Tick,

    /// Quit from the gallery
    RequestQuit,

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Gallery Messages
    // ─────────────────────────────────────────────────────────
    /// Move the gallery cursor down (towards older pieces)
    SelectNext,
    /// Move the gallery cursor up (towards newer pieces)
    SelectPrevious,
    /// Open the artwork under the cursor in the viewer
    OpenSelected,
    /// Open a specific artwork in the viewer
    OpenArtwork { id: String },
    /// Start a new editor session on a blank grid
    NewArtwork,
    /// Return to the gallery
    ShowGallery,

    // ─────────────────────────────────────────────────────────
    // Viewer Messages
    // ─────────────────────────────────────────────────────────
    /// Newer artwork in collection order
    ViewerPrevious,
    /// Older artwork in collection order
    ViewerNext,

    // ─────────────────────────────────────────────────────────
    // Editor Messages
    // ─────────────────────────────────────────────────────────
    /// Restore the previous snapshot
    Undo,
    /// Publish the current grid to the gallery
    Publish,
    /// Export the current grid (editor) or artwork (viewer) as PNG
    Export,
    /// Leave the editor without publishing
    CancelEditor,

    // ─────────────────────────────────────────────────────────
    // Background Task Results
    // ─────────────────────────────────────────────────────────
    /// Gallery contents read from the store
    GalleryLoaded { collection: ArtworkCollection },
    /// An artwork was published
    PublishCompleted { artwork: Artwork },
    /// The publish task could not run
    PublishFailed { reason: String },
    /// A PNG was written
    ExportCompleted { path: PathBuf },
    /// A PNG could not be produced
    ExportFailed { reason: String },
}
