//! Input events, independent of the terminal library.
//!
//! Keys and pointer gestures are converted from crossterm at the TUI
//! boundary so that state and handlers never see terminal types.

/// Keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl held (Ctrl+z, Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
}

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed
    Down,
    /// Moved with the primary button held
    Move,
    /// Primary button released
    Up,
    /// Pointer left the drawing surface
    Leave,
}

/// Pointer gesture in client (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub kind: PointerKind,
    pub column: f64,
    pub row: f64,
}

impl PointerInput {
    pub fn new(kind: PointerKind, column: f64, row: f64) -> Self {
        Self { kind, column, row }
    }

    pub fn down(column: f64, row: f64) -> Self {
        Self::new(PointerKind::Down, column, row)
    }

    pub fn moved(column: f64, row: f64) -> Self {
        Self::new(PointerKind::Move, column, row)
    }

    pub fn up(column: f64, row: f64) -> Self {
        Self::new(PointerKind::Up, column, row)
    }

    pub fn leave(column: f64, row: f64) -> Self {
        Self::new(PointerKind::Leave, column, row)
    }
}
