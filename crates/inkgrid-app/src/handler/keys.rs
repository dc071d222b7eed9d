//! Key event handlers for each view

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, View};

/// Convert key events to messages based on the current view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.view {
        View::Gallery => handle_key_gallery(key),
        View::Editor => handle_key_editor(key),
        View::Viewer => handle_key_viewer(state, key),
    }
}

fn handle_key_gallery(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::Char('n') => Some(Message::NewArtwork),
        InputKey::Enter => Some(Message::OpenSelected),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        _ => None,
    }
}

fn handle_key_editor(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('z') | InputKey::Char('u') => Some(Message::Undo),
        InputKey::Char('p') => Some(Message::Publish),
        InputKey::Char('e') => Some(Message::Export),
        InputKey::Esc => Some(Message::CancelEditor),
        _ => None,
    }
}

fn handle_key_viewer(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Char('h') if state.has_previous() => {
            Some(Message::ViewerPrevious)
        }
        InputKey::Right | InputKey::Char('l') if state.has_next() => Some(Message::ViewerNext),
        InputKey::Char('e') => Some(Message::Export),
        InputKey::Esc | InputKey::Char('q') => Some(Message::ShowGallery),
        _ => None,
    }
}
