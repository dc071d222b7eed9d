//! # inkgrid-core - Core Drawing Model
//!
//! Foundation crate for inkgrid. Provides the density grid, the glyph
//! mapper, the raster engine, the undo history, the artwork model, error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, rand, tracing).
//!
//! ## Public API
//!
//! ### Drawing Model
//! - [`DensityGrid`] - Fixed-size table of bounded intensities
//! - [`Brush`] - Density paint model with stochastic neighbour bleed
//! - [`line_cells()`] - Bresenham traversal between two sampled points
//! - [`ArtBox`] - Pointer-to-cell mapping against the rendered art bounds
//! - [`HistoryStack`] - Bounded snapshot stack for undo
//!
//! ### Glyphs (`glyph`)
//! - [`glyph()`] - Density to display character
//! - [`render_text()`] - Whole grid as text art
//!
//! ### Artworks (`artwork`)
//! - [`Artwork`], [`ArtworkCollection`] - Published pieces, newest first
//! - [`seed_collection()`] - The default gallery contents
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use inkgrid_core::prelude::*;
//! ```

pub mod artwork;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod history;
pub mod logging;
pub mod prelude;
pub mod raster;

// Re-export commonly used types at crate root for convenience
pub use artwork::{
    now_millis, seed_collection, seed_grid, Artwork, ArtworkCollection, SEED_ARTWORK_ID,
};
pub use error::{Error, Result, ResultExt};
pub use glyph::{glyph, render_row, render_text, BLANK, GLYPHS, MAX_DENSITY};
pub use grid::{CellPos, DensityGrid, GRID_HEIGHT, GRID_WIDTH};
pub use history::{HistoryStack, DEFAULT_HISTORY_LIMIT};
pub use raster::{
    line_cells, AlwaysBleed, ArtBox, BleedSource, Brush, NoBleed, RandomBleed,
    DEFAULT_BLEED_PROBABILITY,
};
