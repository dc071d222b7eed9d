//! Main update function - handles state transitions (TEA pattern)

use inkgrid_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, View};

use super::{keys::handle_key, pointer, tasks, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit | Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Pointer(input) => pointer::handle_pointer(state, input),

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Gallery Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            if state.selected + 1 < state.collection.len() {
                state.selected += 1;
            }
            UpdateResult::none()
        }

        Message::SelectPrevious => {
            state.selected = state.selected.saturating_sub(1);
            UpdateResult::none()
        }

        Message::OpenSelected => match state.selected_artwork() {
            Some(artwork) => UpdateResult::message(Message::OpenArtwork {
                id: artwork.id.clone(),
            }),
            None => UpdateResult::none(),
        },

        Message::OpenArtwork { id } => {
            match state.collection.position(&id) {
                Some(index) => {
                    state.clear_status();
                    state.open_viewer(index);
                }
                None => {
                    warn!("Artwork {} is not in the loaded collection", id);
                    state.set_error(format!("Artwork {} not found", id));
                }
            }
            UpdateResult::none()
        }

        Message::NewArtwork => {
            state.clear_status();
            state.open_editor();
            UpdateResult::none()
        }

        Message::ShowGallery => {
            if state.view == View::Editor {
                return UpdateResult::message(Message::CancelEditor);
            }
            if state.view == View::Viewer {
                state.selected = state.viewer.index;
            }
            state.art_area = None;
            state.view = View::Gallery;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Viewer Messages
        // ─────────────────────────────────────────────────────────
        Message::ViewerPrevious => {
            if state.view == View::Viewer && state.has_previous() {
                state.viewer.index -= 1;
            }
            UpdateResult::none()
        }

        Message::ViewerNext => {
            if state.view == View::Viewer && state.has_next() {
                state.viewer.index += 1;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Editor Messages
        // ─────────────────────────────────────────────────────────
        Message::Undo => {
            if state.editor.as_mut().is_some_and(|s| s.undo()) {
                state.clear_status();
            }
            UpdateResult::none()
        }

        Message::Publish => {
            let Some(grid) = state.editor.as_mut().and_then(|s| s.begin_publish()) else {
                return UpdateResult::none();
            };
            info!("Publishing artwork ({} cells painted)", grid.painted_cells());
            state.set_status("Publishing...");
            UpdateResult::action(UpdateAction::PublishArtwork { grid })
        }

        Message::Export => handle_export(state),

        Message::CancelEditor => {
            match state.editor.as_ref() {
                Some(session) if session.is_busy() => {
                    debug!("Ignoring cancel while {}", session.phase().label());
                }
                Some(_) => {
                    state.clear_status();
                    state.close_editor();
                }
                None => {}
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Background Task Results
        // ─────────────────────────────────────────────────────────
        Message::GalleryLoaded { collection } => tasks::handle_gallery_loaded(state, collection),

        Message::PublishCompleted { artwork } => tasks::handle_publish_completed(state, artwork),

        Message::PublishFailed { reason } => tasks::handle_publish_failed(state, reason),

        Message::ExportCompleted { path } => tasks::handle_export_completed(state, path),

        Message::ExportFailed { reason } => tasks::handle_export_failed(state, reason),
    }
}

fn handle_export(state: &mut AppState) -> UpdateResult {
    if state.is_exporting() {
        debug!("Ignoring export while another is running");
        return UpdateResult::none();
    }

    let grid = match state.view {
        View::Editor => state.editor.as_mut().and_then(|s| s.begin_export()),
        View::Viewer => {
            let grid = state.viewed_artwork().map(|a| a.grid.clone());
            if grid.is_some() {
                state.viewer.exporting = true;
            }
            grid
        }
        _ => None,
    };

    match grid {
        Some(grid) => {
            state.set_status("Exporting...");
            UpdateResult::action(UpdateAction::ExportPng { grid })
        }
        None => UpdateResult::none(),
    }
}
