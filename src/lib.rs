//! inkgrid - paint density grids as text-character art
//!
//! The binary wires configuration, logging, and the gallery store together
//! and either starts the TUI or runs one of the headless commands.

pub mod cli;
pub mod headless;

// Re-export main entry points
pub use headless::{export_artwork, list_artworks, show_artwork};
pub use inkgrid_tui::run;
