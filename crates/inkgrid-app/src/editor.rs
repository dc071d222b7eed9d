//! Editor session: the live grid, its undo history, and the stroke state
//! machine.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use inkgrid_core::prelude::*;
use inkgrid_core::{BleedSource, Brush, CellPos, DensityGrid, HistoryStack, RandomBleed};

use crate::config::CanvasSettings;

/// Where the editor is in its lifecycle.
///
/// Publishing and Exporting are busy phases: pointer input, undo, cancel,
/// and further publish/export requests are refused until the task reports
/// back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    /// A stroke is in progress. `last` is the previous sampled cell.
    Drawing { last: Option<CellPos> },
    Publishing,
    Exporting,
}

impl SessionPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, SessionPhase::Publishing | SessionPhase::Exporting)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, SessionPhase::Drawing { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "ready",
            SessionPhase::Drawing { .. } => "drawing",
            SessionPhase::Publishing => "publishing",
            SessionPhase::Exporting => "exporting",
        }
    }
}

type DynBleed = Box<dyn BleedSource + Send>;

/// One editing session over a fresh blank grid.
pub struct EditorSession {
    grid: DensityGrid,
    history: HistoryStack,
    brush: Brush<DynBleed>,
    phase: SessionPhase,
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("painted", &self.grid.painted_cells())
            .field("history", &self.history.len())
            .field("phase", &self.phase)
            .finish()
    }
}

impl EditorSession {
    /// Session with entropy-seeded random bleed.
    pub fn new(canvas: &CanvasSettings) -> Self {
        let bleed = RandomBleed::with_rng(
            StdRng::from_entropy(),
            canvas.effective_bleed_probability(),
        );
        Self::with_bleed(bleed, canvas.history_limit)
    }

    pub fn with_bleed(bleed: impl BleedSource + Send + 'static, history_limit: usize) -> Self {
        Self {
            grid: DensityGrid::blank(),
            history: HistoryStack::new(history_limit),
            brush: Brush::new(Box::new(bleed) as DynBleed),
            phase: SessionPhase::Idle,
        }
    }

    pub fn grid(&self) -> &DensityGrid {
        &self.grid
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    pub fn can_undo(&self) -> bool {
        !self.is_busy() && !self.history.is_empty()
    }

    /// Start a stroke: snapshot the grid, then paint the first cell.
    ///
    /// Returns false when the session is busy.
    pub fn pointer_down(&mut self, cell: Option<CellPos>) -> bool {
        if self.is_busy() {
            debug!("Ignoring pointer down while {}", self.phase.label());
            return false;
        }

        self.history.push(self.grid.clone());
        self.phase = SessionPhase::Drawing { last: None };
        self.pointer_move(cell);
        true
    }

    /// Extend the current stroke to `cell`.
    ///
    /// The first sample of a stroke paints a single cell; later samples
    /// rasterize the segment from the previous sample. Returns whether
    /// anything was applied.
    pub fn pointer_move(&mut self, cell: Option<CellPos>) -> bool {
        let SessionPhase::Drawing { last } = self.phase else {
            return false;
        };
        let Some(cell) = cell else {
            return false;
        };

        match last {
            None => self.brush.paint(&mut self.grid, cell.x, cell.y),
            Some(prev) => self
                .brush
                .draw_line(&mut self.grid, prev.x, prev.y, cell.x, cell.y),
        }

        self.phase = SessionPhase::Drawing { last: Some(cell) };
        true
    }

    /// End the stroke on release or when the pointer leaves the surface.
    pub fn pointer_up(&mut self) {
        if self.phase.is_drawing() {
            self.phase = SessionPhase::Idle;
        }
    }

    /// Restore the most recent snapshot.
    pub fn undo(&mut self) -> bool {
        if self.is_busy() {
            debug!("Ignoring undo while {}", self.phase.label());
            return false;
        }
        match self.history.pop() {
            Some(snapshot) => {
                self.grid = snapshot;
                true
            }
            None => false,
        }
    }

    /// Enter Publishing and hand back the grid to publish.
    pub fn begin_publish(&mut self) -> Option<DensityGrid> {
        self.begin_task(SessionPhase::Publishing)
    }

    /// Enter Exporting and hand back the grid to export.
    pub fn begin_export(&mut self) -> Option<DensityGrid> {
        self.begin_task(SessionPhase::Exporting)
    }

    /// Return to Idle after a publish or export completes or fails.
    pub fn finish_task(&mut self) {
        if self.is_busy() {
            self.phase = SessionPhase::Idle;
        }
    }

    fn begin_task(&mut self, phase: SessionPhase) -> Option<DensityGrid> {
        if self.is_busy() {
            debug!("Refusing {} while {}", phase.label(), self.phase.label());
            return None;
        }
        self.phase = phase;
        Some(self.grid.clone())
    }
}
