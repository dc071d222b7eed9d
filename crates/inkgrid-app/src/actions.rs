//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Store reads and writes and PNG encoding are blocking work. Each action
//! runs on tokio's blocking pool and reports back to the event loop with a
//! [`Message`].

use std::sync::Arc;

use tokio::sync::mpsc;

use inkgrid_core::prelude::*;
use inkgrid_core::DensityGrid;

use crate::config::ExportSettings;
use crate::export::PngExporter;
use crate::gallery::{GalleryStore, KeyValueStore};
use crate::handler::UpdateAction;
use crate::message::Message;

/// Shared resources the action layer needs.
pub struct ActionContext<S> {
    pub store: Arc<GalleryStore<S>>,
    pub export: ExportSettings,
}

impl<S> ActionContext<S> {
    pub fn new(store: Arc<GalleryStore<S>>, export: ExportSettings) -> Self {
        Self { store, export }
    }
}

impl<S> Clone for ActionContext<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            export: self.export.clone(),
        }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, ctx: &ActionContext<S>)
where
    S: KeyValueStore + 'static,
{
    match action {
        UpdateAction::LoadGallery => spawn_load_gallery(msg_tx, Arc::clone(&ctx.store)),
        UpdateAction::PublishArtwork { grid } => {
            spawn_publish(msg_tx, Arc::clone(&ctx.store), grid)
        }
        UpdateAction::ExportPng { grid } => spawn_export(msg_tx, ctx.export.clone(), grid),
    }
}

fn spawn_load_gallery<S>(msg_tx: mpsc::Sender<Message>, store: Arc<GalleryStore<S>>)
where
    S: KeyValueStore + 'static,
{
    tokio::spawn(async move {
        match tokio::task::spawn_blocking(move || store.list()).await {
            Ok(collection) => {
                let _ = msg_tx.send(Message::GalleryLoaded { collection }).await;
            }
            Err(e) => error!("Gallery load task failed: {}", e),
        }
    });
}

fn spawn_publish<S>(msg_tx: mpsc::Sender<Message>, store: Arc<GalleryStore<S>>, grid: DensityGrid)
where
    S: KeyValueStore + 'static,
{
    tokio::spawn(async move {
        let message = match tokio::task::spawn_blocking(move || store.save(&grid)).await {
            Ok(artwork) => Message::PublishCompleted { artwork },
            Err(e) => Message::PublishFailed {
                reason: e.to_string(),
            },
        };
        let _ = msg_tx.send(message).await;
    });
}

fn spawn_export(msg_tx: mpsc::Sender<Message>, settings: ExportSettings, grid: DensityGrid) {
    tokio::spawn(async move {
        let result = tokio::task::spawn_blocking(move || {
            let exporter = PngExporter::from_settings(&settings)?;
            exporter.export_to_dir(&grid, &settings.directory)
        })
        .await;

        let message = match result {
            Ok(Ok(path)) => Message::ExportCompleted { path },
            Ok(Err(e)) => Message::ExportFailed {
                reason: e.to_string(),
            },
            Err(e) => Message::ExportFailed {
                reason: format!("export task failed: {}", e),
            },
        };
        let _ = msg_tx.send(message).await;
    });
}
