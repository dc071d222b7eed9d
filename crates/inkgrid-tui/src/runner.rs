//! Main TUI runner: entry point and event loop

use std::sync::Arc;

use inkgrid_app::actions::{handle_action, ActionContext};
use inkgrid_app::config::Settings;
use inkgrid_app::gallery::{GalleryStore, KeyValueStore};
use inkgrid_app::message::Message;
use inkgrid_app::process::process_message;
use inkgrid_app::signals;
use inkgrid_app::state::AppState;
use inkgrid_app::UpdateAction;
use inkgrid_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the TUI against a gallery store until the user quits
pub async fn run<S>(settings: Settings, store: Arc<GalleryStore<S>>) -> Result<()>
where
    S: KeyValueStore + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("Drawing needs mouse support: {}", e);
    }

    let ctx = ActionContext::new(store, settings.export.clone());
    let mut state = AppState::with_settings(settings);

    // Unified message channel for signals and background tasks
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    // First gallery read
    handle_action(UpdateAction::LoadGallery, msg_tx.clone(), &ctx);

    info!("inkgrid started");
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &ctx);

    terminal::disable_mouse_capture();
    ratatui::restore();
    info!("inkgrid stopped");

    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    ctx: &ActionContext<S>,
) -> Result<()>
where
    S: KeyValueStore + 'static,
{
    while !state.should_quit() {
        drain_messages(state, &mut msg_rx, &msg_tx, ctx);
        if state.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, ctx);
        }
    }

    Ok(())
}

/// Apply every message already waiting on the channel (signals, task results)
fn drain_messages<S>(
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    ctx: &ActionContext<S>,
) where
    S: KeyValueStore + 'static,
{
    while let Ok(msg) = msg_rx.try_recv() {
        process_message(state, msg, msg_tx, ctx);
    }
}
