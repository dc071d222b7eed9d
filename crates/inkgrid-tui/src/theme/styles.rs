//! Semantic style builders.

use inkgrid_app::state::StatusKind;
use inkgrid_app::SessionPhase;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// Wide-tracked uppercase captions
pub fn caption() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

pub fn ink() -> Style {
    Style::default().fg(palette::INK).bg(palette::FRAME_BG)
}

pub fn selected() -> Style {
    Style::default()
        .fg(palette::SELECTED_FG)
        .bg(palette::SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}

// --- Key hint style ---
pub fn keybinding() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Status line ---
pub fn status(kind: StatusKind) -> Style {
    match kind {
        StatusKind::Info => Style::default().fg(palette::STATUS_OK),
        StatusKind::Error => Style::default()
            .fg(palette::STATUS_ERROR)
            .add_modifier(Modifier::BOLD),
    }
}

pub fn phase(phase: SessionPhase) -> Style {
    match phase {
        SessionPhase::Idle => text_muted(),
        SessionPhase::Drawing { .. } => Style::default().fg(palette::STATUS_OK),
        SessionPhase::Publishing | SessionPhase::Exporting => Style::default()
            .fg(palette::STATUS_BUSY)
            .add_modifier(Modifier::BOLD),
    }
}

// --- Blocks ---

/// Thin frame around a piece of art. `focused` brightens the border.
pub fn frame_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(if focused {
            Style::default().fg(palette::BORDER_ACTIVE)
        } else {
            Style::default().fg(palette::BORDER_DIM)
        })
        .style(Style::default().bg(palette::FRAME_BG))
}

pub fn popup_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER_ACTIVE))
        .style(Style::default().bg(palette::POPUP_BG))
}
