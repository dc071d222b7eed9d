//! Custom widgets for the inkgrid TUI

mod ascii_art;
mod catalog;
mod header;
pub mod modal_overlay;
mod placard;
mod status_bar;

pub use ascii_art::{art_box, AsciiArt};
pub use catalog::{Catalog, EMPTY_TEXT, END_TEXT};
pub use header::Header;
pub use placard::{format_timestamp, specimen_label, Placard};
pub use status_bar::StatusBar;
