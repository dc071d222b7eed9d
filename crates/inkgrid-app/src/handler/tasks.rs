//! Handlers for background task results

use std::path::PathBuf;

use inkgrid_core::prelude::*;
use inkgrid_core::{Artwork, ArtworkCollection};

use crate::editor::SessionPhase;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_gallery_loaded(state: &mut AppState, collection: ArtworkCollection) -> UpdateResult {
    debug!("Gallery loaded with {} artworks", collection.len());
    state.set_collection(collection);
    UpdateResult::none()
}

/// Return to the gallery with the new piece on top, then re-read the store.
pub fn handle_publish_completed(state: &mut AppState, artwork: Artwork) -> UpdateResult {
    let label = artwork.short_id();
    if !state.collection.contains_id(&artwork.id) {
        let mut collection = state.collection.clone();
        collection.prepend(artwork);
        state.set_collection(collection);
    }

    state.close_editor();
    state.selected = 0;
    state.set_status(format!("Published {}", label));
    UpdateResult::action(UpdateAction::LoadGallery)
}

pub fn handle_export_completed(state: &mut AppState, path: PathBuf) -> UpdateResult {
    finish_export(state);
    state.set_status(format!("Saved {}", path.display()));
    UpdateResult::none()
}

pub fn handle_export_failed(state: &mut AppState, reason: String) -> UpdateResult {
    error!("Export failed: {}", reason);
    finish_export(state);
    state.set_error(format!("Export failed: {}", reason));
    UpdateResult::none()
}

/// Publishing could not run at all; the editor stays open with its grid.
pub fn handle_publish_failed(state: &mut AppState, reason: String) -> UpdateResult {
    error!("Publish failed: {}", reason);
    finish_task(state, SessionPhase::Publishing);
    state.set_error(format!("Publish failed: {}", reason));
    UpdateResult::none()
}

fn finish_export(state: &mut AppState) {
    state.viewer.exporting = false;
    finish_task(state, SessionPhase::Exporting);
}

fn finish_task(state: &mut AppState, phase: SessionPhase) {
    if let Some(session) = state.editor.as_mut() {
        if session.phase() == phase {
            session.finish_task();
        }
    }
}
