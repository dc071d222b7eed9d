//! Centralized theme for the gallery, editor, and viewer screens.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builder functions

pub mod palette;
pub mod styles;
