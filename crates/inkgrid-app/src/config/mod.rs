//! Configuration file parsing for inkgrid
//!
//! Supports `~/.config/inkgrid/config.toml` (or a path given on the command
//! line) with `[canvas]`, `[export]`, `[storage]`, and `[ui]` sections.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, resolve_data_dir, save_settings,
    DATA_DIR_ENV_VAR,
};
pub use types::*;
