//! Pointer gestures to stroke operations

use inkgrid_core::prelude::*;

use crate::input_key::{PointerInput, PointerKind};
use crate::state::{AppState, View};

use super::UpdateResult;

/// Route a pointer gesture to the editor session.
///
/// Presses outside the rendered art are ignored. Dragging out of the art
/// ends the stroke, the same as a release. Starting a stroke dismisses the
/// last status message.
pub fn handle_pointer(state: &mut AppState, input: PointerInput) -> UpdateResult {
    if state.view != View::Editor {
        return UpdateResult::none();
    }
    let Some(art) = state.art_area else {
        return UpdateResult::none();
    };
    let Some(session) = state.editor.as_mut() else {
        return UpdateResult::none();
    };

    let inside = art.contains(input.column, input.row);
    let (width, height) = (session.grid().width(), session.grid().height());
    let cell = art.cell_at(input.column, input.row, width, height);

    let started = match input.kind {
        PointerKind::Down => inside && session.pointer_down(cell),
        PointerKind::Move if inside => {
            session.pointer_move(cell);
            false
        }
        PointerKind::Move | PointerKind::Up | PointerKind::Leave => {
            session.pointer_up();
            false
        }
    };

    if started {
        trace!("Stroke started at {:?}", cell);
        state.clear_status();
    }

    UpdateResult::none()
}
