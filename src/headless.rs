//! Headless commands: read and export the gallery without the TUI
//!
//! `list --json` writes NDJSON (one object per line) so scripts can parse
//! the archive without scraping text.

use std::io::Write;
use std::path::{Path, PathBuf};

use inkgrid_app::{GalleryStore, KeyValueStore, PngExporter};
use inkgrid_core::prelude::*;
use inkgrid_core::{render_text, Artwork};
use serde::Serialize;

/// One line of `list --json` output
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    pub id: String,
    pub specimen: usize,
    pub created_at: i64,
    pub painted_cells: usize,
}

fn timestamp(artwork: &Artwork) -> String {
    artwork
        .created_at_local()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| artwork.created_at.to_string())
}

/// Write every artwork, newest first. Returns how many were written.
pub fn list_artworks<S, W>(store: &GalleryStore<S>, json: bool, out: &mut W) -> Result<usize>
where
    S: KeyValueStore,
    W: Write,
{
    let collection = store.list();

    for (index, artwork) in collection.iter().enumerate() {
        if json {
            let entry = ListEntry {
                id: artwork.id.clone(),
                specimen: collection.specimen_number(index),
                created_at: artwork.created_at,
                painted_cells: artwork.grid.painted_cells(),
            };
            writeln!(out, "{}", serde_json::to_string(&entry)?)?;
        } else {
            writeln!(out, "{}\t{}", artwork.id, timestamp(artwork))?;
        }
    }

    out.flush()?;
    Ok(collection.len())
}

/// Write one artwork as text art
pub fn show_artwork<S, W>(store: &GalleryStore<S>, id: &str, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    let artwork = store
        .get_by_id(id)
        .ok_or_else(|| Error::artwork_not_found(id))?;

    writeln!(out, "{}", render_text(&artwork.grid))?;
    out.flush()?;
    Ok(())
}

/// Render one artwork to a PNG in `dir`
pub fn export_artwork<S>(
    store: &GalleryStore<S>,
    id: &str,
    exporter: &PngExporter,
    dir: &Path,
) -> Result<PathBuf>
where
    S: KeyValueStore,
{
    let artwork = store
        .get_by_id(id)
        .ok_or_else(|| Error::artwork_not_found(id))?;

    let path = exporter
        .export_to_dir(&artwork.grid, dir)
        .with_context(|| format!("Failed to export {}", artwork.id))?;
    info!("Exported {} to {}", artwork.id, path.display());
    Ok(path)
}
