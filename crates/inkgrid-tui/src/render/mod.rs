//! Main render/view function (View in TEA pattern)


use inkgrid_app::state::{AppPhase, AppState, View};
use inkgrid_app::SessionPhase;
use inkgrid_core::DensityGrid;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{palette, styles};
use crate::widgets::modal_overlay::{centered_rect, dim_background};

pub const ARCHIVE_TITLE: &str = "THE ANONYMOUS ARCHIVE";

/// Render the complete UI (View function in TEA)
///
/// Apart from drawing, the only state this touches is `art_area`: the
/// editor records where its grid landed so pointer events can be mapped
/// back onto grid cells.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::WALL_BG)),
        area,
    );

    let areas = layout::create(area);

    let header = widgets::Header::new(ARCHIVE_TITLE).detail(header_detail(state));
    frame.render_widget(header, areas.header);

    if state.phase == AppPhase::Loading {
        render_message(frame, areas.body, "Opening the archive...");
    } else {
        match state.view {
            View::Gallery => render_gallery(frame, areas.body, state),
            View::Editor => render_editor(frame, areas.body, state),
            View::Viewer => render_viewer(frame, areas.body, state),
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.footer);
}

fn header_detail(state: &AppState) -> String {
    match state.view {
        View::Gallery => format!("Total Specimens: {:03}", state.collection.len()),
        View::Editor => "New Contribution".to_string(),
        View::Viewer => {
            widgets::specimen_label(state.collection.specimen_number(state.viewer.index))
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, text: &str) {
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, styles::text_muted())).centered()),
        row,
    );
}

/// Frame and glyphs for `grid`, as large as fits in `area`. Returns the
/// rect the glyphs occupy.
fn render_art(frame: &mut Frame, area: Rect, grid: &DensityGrid, focused: bool) -> Rect {
    let rect = layout::art_rect(
        area.inner(Margin::new(1, 1)),
        grid.width(),
        grid.height(),
    );
    frame.render_widget(styles::frame_block(focused), layout::outset(rect, area));
    frame.render_widget(widgets::AsciiArt::new(grid), rect);
    rect
}

fn render_busy(frame: &mut Frame, area: Rect, text: &str) {
    dim_background(frame.buffer_mut(), area);

    let popup = centered_rect(text.len() as u16 + 6, 3, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, styles::text_primary())).centered())
            .block(styles::popup_block()),
        popup,
    );
}

fn render_gallery(frame: &mut Frame, area: Rect, state: &mut AppState) {
    state.art_area = None;

    let (list, preview) = layout::gallery_columns(area);
    let list_block = styles::frame_block(false).title(" Catalogue ");
    let list_inner = list_block.inner(list);
    frame.render_widget(list_block, list);
    frame.render_widget(
        widgets::Catalog::new(&state.collection, state.selected),
        list_inner,
    );

    let Some(artwork) = state.selected_artwork() else {
        return;
    };

    let [art, placard] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(preview);
    render_art(frame, art, &artwork.grid, false);

    let number = state.collection.specimen_number(state.selected);
    frame.render_widget(
        widgets::Placard::catalog(artwork, number),
        placard.inner(Margin::new(2, 0)),
    );
}

fn render_editor(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let Some(editor) = &state.editor else {
        state.art_area = None;
        return;
    };

    let rect = render_art(frame, area, editor.grid(), true);

    match editor.phase() {
        SessionPhase::Publishing => render_busy(frame, area, "Publishing to the archive..."),
        SessionPhase::Exporting => render_busy(frame, area, "Rendering PNG..."),
        _ => {}
    }

    state.art_area = Some(widgets::art_box(rect));
}

fn render_viewer(frame: &mut Frame, area: Rect, state: &mut AppState) {
    state.art_area = None;

    let Some(artwork) = state.viewed_artwork() else {
        render_message(frame, area, widgets::EMPTY_TEXT);
        return;
    };

    let (art, placard) = layout::viewer_rows(area);
    render_art(frame, art, &artwork.grid, false);
    frame.render_widget(widgets::Placard::record(artwork), placard);

    if state.viewer.exporting {
        render_busy(frame, area, "Rendering PNG...");
    }
}
