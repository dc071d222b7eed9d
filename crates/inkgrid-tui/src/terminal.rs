//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use inkgrid_core::prelude::*;

/// Install a panic hook that releases the mouse and restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Start receiving mouse press, drag, and release events, plus focus
/// changes so that leaving the window ends a stroke
pub fn enable_mouse_capture() -> Result<()> {
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)
        .map_err(|e| Error::terminal(format!("Failed to enable mouse capture: {}", e)))
}

pub fn disable_mouse_capture() {
    if let Err(e) = execute!(stdout(), DisableMouseCapture, DisableFocusChange) {
        warn!("Failed to disable mouse capture: {}", e);
    }
}
