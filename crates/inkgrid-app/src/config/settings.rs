//! Settings loader for config.toml

use super::types::Settings;
use inkgrid_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "inkgrid";

/// Environment variable overriding the gallery data directory
pub const DATA_DIR_ENV_VAR: &str = "INKGRID_DATA_DIR";

/// Default location of config.toml (`~/.config/inkgrid/config.toml` on Linux)
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR).join(CONFIG_FILENAME)
}

/// Load settings from a config file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists yet
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let default_content = r#"# inkgrid Configuration

[canvas]
bleed_probability = 0.2   # Chance a painted cell spreads into each neighbour
history_limit = 50        # Undo steps kept per drawing

[export]
directory = "."           # Where exported PNGs are written
padding = 60              # Black border in pixels
scale = 1                 # Glyph bitmap upscale
file_prefix = "ascii-artifact-"

[storage]
# data_dir = "/path/to/gallery"

[ui]
show_hints = true
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(())
}

/// Save settings to a config file
///
/// Writes to a temp file first, then renames over the target.
pub fn save_settings(config_path: &Path, settings: &Settings) -> Result<()> {
    let dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let temp_path = dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("# inkgrid Configuration\n\n{}", content);

    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", config_path);
    Ok(())
}

/// Resolve the gallery data directory
///
/// Priority: `INKGRID_DATA_DIR`, then `[storage] data_dir`, then the platform
/// data directory.
pub fn resolve_data_dir(settings: &Settings) -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV_VAR) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    settings
        .storage
        .data_dir
        .clone()
        .unwrap_or_else(inkgrid_core::logging::data_directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults_when_missing() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));

        assert_eq!(settings.canvas.history_limit, 50);
        assert!(settings.ui.show_hints);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");

        let config = r#"
[canvas]
bleed_probability = 0.0

[export]
padding = 8
file_prefix = "piece-"
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.canvas.bleed_probability, 0.0);
        assert_eq!(settings.export.padding, 8);
        assert_eq!(settings.export.file_prefix, "piece-");
        assert_eq!(settings.export.scale, 1);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.canvas.history_limit, 50);
    }

    #[test]
    fn test_init_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        init_config_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let _: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
    }

    #[test]
    fn test_init_config_file_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");

        init_config_file(&path).unwrap();
        std::fs::write(&path, "[canvas]\nhistory_limit = 3\n").unwrap();
        init_config_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("history_limit = 3"));
    }

    #[test]
    fn test_save_settings_round_trip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");

        let mut settings = Settings::default();
        settings.canvas.history_limit = 12;
        settings.ui.show_hints = false;
        save_settings(&path, &settings).unwrap();

        let loaded = load_settings(&path);
        assert_eq!(loaded.canvas.history_limit, 12);
        assert!(!loaded.ui.show_hints);
        assert!(!temp.path().join(".config.toml.tmp").exists());
    }

    #[test]
    #[serial]
    fn test_resolve_data_dir_prefers_env() {
        let mut settings = Settings::default();
        settings.storage.data_dir = Some(PathBuf::from("/from/config"));

        std::env::set_var(DATA_DIR_ENV_VAR, "/from/env");
        let resolved = resolve_data_dir(&settings);
        std::env::remove_var(DATA_DIR_ENV_VAR);

        assert_eq!(resolved, PathBuf::from("/from/env"));
    }

    #[test]
    #[serial]
    fn test_resolve_data_dir_uses_config_then_platform() {
        std::env::remove_var(DATA_DIR_ENV_VAR);

        let mut settings = Settings::default();
        settings.storage.data_dir = Some(PathBuf::from("/from/config"));
        assert_eq!(resolve_data_dir(&settings), PathBuf::from("/from/config"));

        settings.storage.data_dir = None;
        assert_eq!(
            resolve_data_dir(&settings),
            inkgrid_core::logging::data_directory()
        );
    }
}
