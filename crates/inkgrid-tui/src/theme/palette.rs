//! Color palette: monochrome art on a dark exhibition wall.

use ratatui::style::Color;

// --- Background layers ---
pub const WALL_BG: Color = Color::Black; // Terminal background
pub const FRAME_BG: Color = Color::Black; // Behind the art itself
pub const POPUP_BG: Color = Color::DarkGray; // Busy overlay

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::White;

// --- Art ---
pub const INK: Color = Color::White;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_OK: Color = Color::Green;
pub const STATUS_ERROR: Color = Color::Red;
pub const STATUS_BUSY: Color = Color::Yellow;

// --- Selection ---
pub const SELECTED_FG: Color = Color::Black;
pub const SELECTED_BG: Color = Color::White;
