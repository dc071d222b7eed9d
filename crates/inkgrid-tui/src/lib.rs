//! inkgrid-tui - Terminal UI for inkgrid
//!
//! Renders the gallery, editor, and viewer with ratatui, turns crossterm
//! key and mouse events into app messages, and drives the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
