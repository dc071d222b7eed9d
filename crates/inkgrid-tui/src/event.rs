//! Terminal event polling

use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use inkgrid_app::message::Message;
use inkgrid_app::{InputKey, PointerInput};
use inkgrid_core::prelude::*;
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a crossterm mouse event to a pointer gesture.
///
/// Terminal cells are reported by their centre so that floor-based cell
/// mapping lands inside the cell under the cursor.
pub fn mouse_event_to_pointer(mouse: MouseEvent) -> Option<PointerInput> {
    let column = mouse.column as f64 + 0.5;
    let row = mouse.row as f64 + 0.5;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerInput::down(column, row)),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerInput::moved(column, row)),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerInput::up(column, row)),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if !event::poll(Duration::from_millis(50))? {
        // Generate tick on timeout
        return Ok(Some(Message::Tick));
    }

    Ok(event_to_message(event::read()?))
}

/// Translate one terminal event into an app message.
///
/// Losing focus counts as the pointer leaving the drawing surface.
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_pointer(mouse).map(Message::Pointer),
        Event::FocusLost => Some(Message::Pointer(PointerInput::leave(-1.0, -1.0))),
        Event::Resize(_, _) => Some(Message::Tick),
        _ => None,
    }
}
