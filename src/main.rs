//! inkgrid - paint density grids as text-character art
//!
//! This is the binary entry point. All logic lives in the library.

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use inkgrid::cli::{Args, Command};
use inkgrid_app::config::{self, Settings};
use inkgrid_app::{GalleryStore, PngExporter};
use inkgrid_core::logging;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let config_path = args.config.clone().unwrap_or_else(config::default_config_path);
    if args.config.is_none() {
        if let Err(e) = config::init_config_file(&config_path) {
            warn!("Could not create default config: {}", e);
        }
    }
    let settings = config::load_settings(&config_path);

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| config::resolve_data_dir(&settings));
    info!("Gallery data directory: {}", data_dir.display());
    let store = GalleryStore::open(data_dir);

    match args.command() {
        Command::Run => inkgrid::run(settings, Arc::new(store)).await?,
        Command::List { json } => {
            inkgrid::list_artworks(&store, json, &mut std::io::stdout().lock())?;
        }
        Command::Show { id } => {
            inkgrid::show_artwork(&store, &id, &mut std::io::stdout().lock())?;
        }
        Command::Export { id, out } => export(&store, &settings, &id, out)?,
    }

    Ok(())
}

fn export(
    store: &GalleryStore<inkgrid_app::FileStore>,
    settings: &Settings,
    id: &str,
    out: Option<std::path::PathBuf>,
) -> Result<()> {
    let exporter = PngExporter::from_settings(&settings.export)?;
    let dir = out.unwrap_or_else(|| settings.export.directory.clone());
    let path = inkgrid::export_artwork(store, id, &exporter, &dir)?;
    println!("{}", path.display());
    Ok(())
}
