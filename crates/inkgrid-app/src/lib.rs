//! inkgrid-app - Application state and orchestration for inkgrid
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the editor session and its stroke state machine, the gallery
//! store, PNG export, configuration loading, and the background action
//! layer.

pub mod actions;
pub mod config;
pub mod editor;
pub mod export;
pub mod gallery;
pub mod handler;
pub mod ids;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::ActionContext;
pub use editor::{EditorSession, SessionPhase};
pub use export::{GlyphAtlas, PngExporter};
pub use gallery::{
    FileStore, GalleryStore, KeyLock, KeyValueStore, MemoryStore, BACKUP_KEY, STORAGE_KEY,
};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::{InputKey, PointerInput, PointerKind};
pub use message::Message;
pub use state::{AppPhase, AppState, View};
