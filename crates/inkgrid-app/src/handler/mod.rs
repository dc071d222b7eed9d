//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per view
//! - `pointer`: Pointer gestures to stroke operations
//! - `tasks`: Background task results

pub(crate) mod keys;
pub(crate) mod pointer;
pub(crate) mod tasks;
pub(crate) mod update;


use inkgrid_core::DensityGrid;

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Read the collection from the gallery store
    LoadGallery,

    /// Save a copy of the grid as a new artwork
    PublishArtwork { grid: DensityGrid },

    /// Render the grid to a PNG in the export directory
    ExportPng { grid: DensityGrid },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
