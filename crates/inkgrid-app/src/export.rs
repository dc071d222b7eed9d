//! PNG export of a density grid.
//!
//! Glyphs are drawn from a built-in 8x16 bitmap atlas, one glyph per grid
//! cell, white on a black background. Blank cells are skipped.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};
use inkgrid_core::prelude::*;
use inkgrid_core::{glyph, now_millis, DensityGrid, BLANK, GLYPHS};

use crate::config::ExportSettings;

pub const GLYPH_WIDTH: u32 = 8;
pub const GLYPH_HEIGHT: u32 = 16;

/// One bitmask per pixel row; bit `x` set means column `x` is lit.
pub type GlyphRows = [u8; GLYPH_HEIGHT as usize];

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
const FOREGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[rustfmt::skip]
const BUILTIN_GLYPHS: [(char, GlyphRows); 11] = [
    (' ', [0x00; 16]),
    ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00]),
    (':', [0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00]),
    ('-', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('=', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('+', [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00]),
    ('*', [0x00, 0x00, 0x00, 0x00, 0x00, 0x5A, 0x3C, 0x7E, 0x3C, 0x5A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('#', [0x00, 0x00, 0x00, 0x24, 0x24, 0x24, 0x7E, 0x24, 0x24, 0x24, 0x7E, 0x24, 0x24, 0x00, 0x00, 0x00]),
    ('%', [0x00, 0x00, 0x00, 0x46, 0x26, 0x20, 0x10, 0x10, 0x08, 0x08, 0x04, 0x64, 0x62, 0x00, 0x00, 0x00]),
    ('@', [0x00, 0x00, 0x00, 0x3C, 0x42, 0x99, 0xA5, 0xA5, 0xA5, 0x79, 0x01, 0x42, 0x3C, 0x00, 0x00, 0x00]),
    ('█', [0xFF; 16]),
];

/// Bitmap glyphs for every entry of the glyph table.
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    glyphs: HashMap<char, GlyphRows>,
}

impl GlyphAtlas {
    /// Load the built-in atlas.
    pub fn load() -> Result<Self> {
        Self::from_entries(BUILTIN_GLYPHS.iter().copied())
    }

    /// Build an atlas and check it covers the whole glyph table.
    pub fn from_entries(entries: impl IntoIterator<Item = (char, GlyphRows)>) -> Result<Self> {
        let glyphs: HashMap<char, GlyphRows> = entries.into_iter().collect();
        if let Some(missing) = GLYPHS.iter().find(|c| !glyphs.contains_key(*c)) {
            return Err(Error::MissingGlyph { glyph: *missing });
        }
        Ok(Self { glyphs })
    }

    pub fn rows(&self, glyph: char) -> Option<&GlyphRows> {
        self.glyphs.get(&glyph)
    }

    pub fn sample(&self, glyph: char, x: u32, y: u32) -> bool {
        if x >= GLYPH_WIDTH || y >= GLYPH_HEIGHT {
            return false;
        }
        match self.glyphs.get(&glyph) {
            Some(rows) => (rows[y as usize] >> x) & 1 == 1,
            None => false,
        }
    }

    pub fn lit_pixels(&self, glyph: char) -> u32 {
        self.glyphs
            .get(&glyph)
            .map(|rows| rows.iter().map(|r| r.count_ones()).sum())
            .unwrap_or(0)
    }
}

/// Renders grids to PNG files.
#[derive(Debug, Clone)]
pub struct PngExporter {
    atlas: GlyphAtlas,
    padding: u32,
    scale: u32,
    prefix: String,
}

impl PngExporter {
    pub fn new(padding: u32, scale: u32, prefix: impl Into<String>) -> Result<Self> {
        Ok(Self {
            atlas: GlyphAtlas::load()?,
            padding,
            scale: scale.max(1),
            prefix: prefix.into(),
        })
    }

    pub fn from_settings(settings: &ExportSettings) -> Result<Self> {
        Self::new(settings.padding, settings.scale, settings.file_prefix.clone())
    }

    pub fn cell_size(&self) -> (u32, u32) {
        (GLYPH_WIDTH * self.scale, GLYPH_HEIGHT * self.scale)
    }

    pub fn image_size(&self, grid: &DensityGrid) -> (u32, u32) {
        let (cw, ch) = self.cell_size();
        (
            grid.width() as u32 * cw + self.padding * 2,
            grid.height() as u32 * ch + self.padding * 2,
        )
    }

    /// The glyph drawn for cell (x, y), or `None` for blank cells.
    pub fn glyph_at(&self, grid: &DensityGrid, x: i32, y: i32) -> Option<char> {
        grid.get(x, y).map(glyph).filter(|g| *g != BLANK)
    }

    /// Draw the grid into an in-memory image.
    pub fn render(&self, grid: &DensityGrid) -> RgbaImage {
        let (width, height) = self.image_size(grid);
        let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);
        let (cw, ch) = self.cell_size();

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let Some(g) = self.glyph_at(grid, x as i32, y as i32) else {
                    continue;
                };
                let origin_x = self.padding + x as u32 * cw;
                let origin_y = self.padding + y as u32 * ch;

                for py in 0..ch {
                    for px in 0..cw {
                        if self.atlas.sample(g, px / self.scale, py / self.scale) {
                            img.put_pixel(origin_x + px, origin_y + py, FOREGROUND);
                        }
                    }
                }
            }
        }

        img
    }

    pub fn file_name(&self, millis: i64) -> String {
        format!("{}{}.png", self.prefix, millis)
    }

    /// Render and write `<prefix><epoch_millis>.png` into `dir`.
    ///
    /// The image is written to a temporary name first, so a failed export
    /// leaves nothing behind under the final name.
    pub fn export_to_dir(&self, grid: &DensityGrid, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::export(format!("Failed to create {:?}: {}", dir, e)))?;

        let millis = now_millis();
        let mut path = dir.join(self.file_name(millis));
        let mut attempt = 1;
        while path.exists() {
            path = dir.join(format!("{}{}-{}.png", self.prefix, millis, attempt));
            attempt += 1;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let temp_path = dir.join(format!(".{}.tmp", file_name));

        let img = self.render(grid);
        if let Err(e) = img.save_with_format(&temp_path, ImageFormat::Png) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(Error::export(format!("Failed to encode PNG: {}", e)));
        }

        if let Err(e) = std::fs::rename(&temp_path, &path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(Error::export(format!("Failed to write {:?}: {}", path, e)));
        }

        info!("Exported {}x{} image to {:?}", img.width(), img.height(), path);
        Ok(path)
    }
}
