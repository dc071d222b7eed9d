//! Configuration types for inkgrid

use std::path::PathBuf;

use inkgrid_core::{DEFAULT_BLEED_PROBABILITY, DEFAULT_HISTORY_LIMIT};
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub canvas: CanvasSettings,

    #[serde(default)]
    pub export: ExportSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Drawing behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CanvasSettings {
    /// Chance (0.0-1.0) that a painted cell bleeds into each orthogonal neighbour
    #[serde(default = "default_bleed_probability")]
    pub bleed_probability: f64,

    /// Number of undo snapshots kept per editing session
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            bleed_probability: default_bleed_probability(),
            history_limit: default_history_limit(),
        }
    }
}

impl CanvasSettings {
    /// Bleed probability forced into `[0.0, 1.0]`. NaN falls back to the default.
    pub fn effective_bleed_probability(&self) -> f64 {
        if self.bleed_probability.is_nan() {
            DEFAULT_BLEED_PROBABILITY
        } else {
            self.bleed_probability.clamp(0.0, 1.0)
        }
    }
}

/// PNG export settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Directory exported images are written to
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,

    /// Black border around the glyphs, in pixels
    #[serde(default = "default_padding")]
    pub padding: u32,

    /// Integer upscale applied to every glyph bitmap
    #[serde(default = "default_scale")]
    pub scale: u32,

    /// File name prefix; the epoch-millis timestamp and `.png` follow it
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            padding: default_padding(),
            scale: default_scale(),
            file_prefix: default_file_prefix(),
        }
    }
}

/// Gallery persistence settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Override for the gallery data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the key hint line under each view
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_hints: true }
    }
}

fn default_bleed_probability() -> f64 {
    DEFAULT_BLEED_PROBABILITY
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_padding() -> u32 {
    60
}

fn default_scale() -> u32 {
    1
}

fn default_file_prefix() -> String {
    "ascii-artifact-".to_string()
}

fn default_true() -> bool {
    true
}
