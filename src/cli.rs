//! Command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// inkgrid - a drawing tool that paints density grids as text-character art
#[derive(Parser, Debug)]
#[command(name = "inkgrid", version)]
#[command(about = "Draw, publish, and export ASCII density art", long_about = None)]
pub struct Args {
    /// Path to config.toml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the gallery data
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the gallery, editor, and viewer (default)
    Run,

    /// Print every artwork, newest first
    List {
        /// One JSON object per line instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print one artwork as text art
    Show {
        /// Artwork identifier
        id: String,
    },

    /// Render one artwork to a PNG file
    Export {
        /// Artwork identifier
        id: String,

        /// Output directory (defaults to the configured export directory)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}
