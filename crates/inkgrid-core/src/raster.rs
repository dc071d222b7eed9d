//! Raster engine: turns a sampled pointer path into grid mutations.
//!
//! The host event loop samples pointer positions at irregular intervals.
//! [`Brush::draw_line`] fills the gap between two samples with Bresenham's
//! algorithm so fast strokes never leave holes, and [`Brush::paint_cell`]
//! applies the density model with its stochastic neighbour bleed.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::glyph::MAX_DENSITY;
use crate::grid::{CellPos, DensityGrid};

/// Chance that a painted cell bleeds into each orthogonal neighbour.
pub const DEFAULT_BLEED_PROBABILITY: f64 = 0.2;

const NEIGHBOURS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Source of the per-neighbour bleed decision.
pub trait BleedSource {
    /// Whether the next neighbour receives a bleed increment.
    fn bleed(&mut self) -> bool;
}

/// Never bleeds. Paints are fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBleed;

impl BleedSource for NoBleed {
    fn bleed(&mut self) -> bool {
        false
    }
}

/// Always bleeds into every in-bounds neighbour.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysBleed;

impl BleedSource for AlwaysBleed {
    fn bleed(&mut self) -> bool {
        true
    }
}

impl<B: BleedSource + ?Sized> BleedSource for Box<B> {
    fn bleed(&mut self) -> bool {
        (**self).bleed()
    }
}

/// Flat-probability bleed backed by a random generator.
#[derive(Debug, Clone)]
pub struct RandomBleed<R: Rng = ThreadRng> {
    rng: R,
    probability: f64,
}

impl RandomBleed<ThreadRng> {
    pub fn new(probability: f64) -> Self {
        Self::with_rng(rand::thread_rng(), probability)
    }
}

impl RandomBleed<StdRng> {
    /// Reproducible bleed for a given seed.
    pub fn seeded(seed: u64, probability: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), probability)
    }
}

impl<R: Rng> RandomBleed<R> {
    pub fn with_rng(rng: R, probability: f64) -> Self {
        Self {
            rng,
            probability: probability.clamp(0.0, 1.0),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for RandomBleed<ThreadRng> {
    fn default() -> Self {
        Self::new(DEFAULT_BLEED_PROBABILITY)
    }
}

impl<R: Rng> BleedSource for RandomBleed<R> {
    fn bleed(&mut self) -> bool {
        self.rng.gen_bool(self.probability)
    }
}

/// Applies the density paint model to a grid.
#[derive(Debug, Clone, Default)]
pub struct Brush<B> {
    bleed: B,
}

impl<B: BleedSource> Brush<B> {
    pub fn new(bleed: B) -> Self {
        Self { bleed }
    }

    /// Paint one cell with the default amount of 1.
    pub fn paint(&mut self, grid: &mut DensityGrid, x: i32, y: i32) {
        self.paint_cell(grid, x, y, 1);
    }

    /// Raise a cell's density by `amount` and maybe bleed into neighbours.
    ///
    /// Saturated or out-of-bounds cells are left alone and do not bleed.
    pub fn paint_cell(&mut self, grid: &mut DensityGrid, x: i32, y: i32, amount: u8) {
        let Some(current) = grid.get(x, y) else {
            return;
        };
        if current >= MAX_DENSITY {
            return;
        }

        grid.increment(x, y, amount);

        for (dx, dy) in NEIGHBOURS {
            let (nx, ny) = (x + dx, y + dy);
            if grid.contains(nx, ny) && self.bleed.bleed() {
                grid.increment(nx, ny, 1);
            }
        }
    }

    /// Paint every cell on the line from `(x0, y0)` to `(x1, y1)`, both
    /// endpoints included.
    pub fn draw_line(&mut self, grid: &mut DensityGrid, x0: i32, y0: i32, x1: i32, y1: i32) {
        for cell in line_cells(x0, y0, x1, y1) {
            self.paint(grid, cell.x, cell.y);
        }
    }
}

/// Cells visited by Bresenham's algorithm from `(x0, y0)` to `(x1, y1)`.
///
/// The path is 8-connected, starts at the first point and ends at the
/// second, and has exactly `max(|dx|, |dy|) + 1` cells.
pub fn line_cells(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<CellPos> {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let (mut x, mut y) = (x0, y0);
    let mut cells = Vec::with_capacity(dx.max(dy) as usize + 1);

    loop {
        cells.push(CellPos::new(x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    cells
}

/// Screen-space bounding box of the rendered art element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ArtBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Map client coordinates to a grid cell by normalising against the box.
    ///
    /// The result may lie outside the grid; painting there is a no-op.
    /// A degenerate box maps nothing.
    pub fn cell_at(
        &self,
        client_x: f64,
        client_y: f64,
        grid_width: usize,
        grid_height: usize,
    ) -> Option<CellPos> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let x = ((client_x - self.left) / self.width * grid_width as f64).floor();
        let y = ((client_y - self.top) / self.height * grid_height as f64).floor();
        Some(CellPos::new(x as i32, y as i32))
    }

    pub fn contains(&self, client_x: f64, client_y: f64) -> bool {
        client_x >= self.left
            && client_x < self.left + self.width
            && client_y >= self.top
            && client_y < self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GRID_WIDTH;
    use std::collections::HashSet;

    fn assert_eight_connected(cells: &[CellPos]) {
        for pair in cells.windows(2) {
            assert!(
                pair[0].is_adjacent(&pair[1]),
                "{:?} -> {:?} is not 8-connected",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_paint_cell_increments_without_bleed() {
        let mut grid = DensityGrid::blank();
        let mut brush = Brush::new(NoBleed);

        brush.paint(&mut grid, 10, 10);

        assert_eq!(grid.get(10, 10), Some(1));
        assert_eq!(grid.painted_cells(), 1);
    }

    #[test]
    fn test_paint_cell_bleeds_into_all_neighbours() {
        let mut grid = DensityGrid::blank();
        let mut brush = Brush::new(AlwaysBleed);

        brush.paint(&mut grid, 10, 10);

        assert_eq!(grid.get(10, 10), Some(1));
        for (x, y) in [(10, 11), (10, 9), (11, 10), (9, 10)] {
            assert_eq!(grid.get(x, y), Some(1));
        }
        assert_eq!(grid.get(11, 11), Some(0));
    }

    #[test]
    fn test_bleed_skips_out_of_bounds_neighbours() {
        let mut grid = DensityGrid::new(3, 3);
        let mut brush = Brush::new(AlwaysBleed);

        brush.paint(&mut grid, 0, 0);

        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(1, 0), Some(1));
        assert_eq!(grid.get(0, 1), Some(1));
        assert_eq!(grid.painted_cells(), 3);
    }

    #[test]
    fn test_saturated_cell_does_not_bleed() {
        let mut grid = DensityGrid::new(3, 3);
        grid.set(1, 1, MAX_DENSITY);
        let mut brush = Brush::new(AlwaysBleed);

        brush.paint(&mut grid, 1, 1);

        assert_eq!(grid.painted_cells(), 1);
    }

    #[test]
    fn test_paint_amount_is_clamped() {
        let mut grid = DensityGrid::new(2, 2);
        let mut brush = Brush::new(NoBleed);

        brush.paint_cell(&mut grid, 0, 0, 50);

        assert_eq!(grid.get(0, 0), Some(MAX_DENSITY));
    }

    #[test]
    fn test_paint_out_of_bounds_is_noop() {
        let mut grid = DensityGrid::new(4, 4);
        let mut brush = Brush::new(AlwaysBleed);

        brush.paint(&mut grid, -1, 0);
        brush.paint(&mut grid, 4, 4);

        assert!(grid.is_blank());
    }

    #[test]
    fn test_bounds_invariant_under_repeated_painting() {
        let mut grid = DensityGrid::new(8, 8);
        let mut brush = Brush::new(RandomBleed::seeded(7, 0.5));

        for i in 0..2_000 {
            brush.paint(&mut grid, i % 8, (i / 3) % 8);
        }

        assert!(grid.cells().iter().all(|&d| d <= MAX_DENSITY));
        assert_eq!(grid.get(0, 0), Some(MAX_DENSITY));
    }

    #[test]
    fn test_random_bleed_neighbour_stays_in_range() {
        let mut grid = DensityGrid::blank();
        let mut brush = Brush::new(RandomBleed::default());

        brush.paint(&mut grid, 10, 10);

        assert_eq!(grid.get(10, 10), Some(1));
        for (x, y) in [(10, 11), (10, 9), (11, 10), (9, 10)] {
            let v = grid.get(x, y).unwrap();
            assert!(v <= 1, "neighbour ({x}, {y}) = {v}");
        }
    }

    #[test]
    fn test_default_bleed_rate_is_one_in_five() {
        let mut bleed = RandomBleed::seeded(2024, DEFAULT_BLEED_PROBABILITY);
        let draws = 10_000;

        let hits = (0..draws).filter(|_| bleed.bleed()).count();
        let rate = hits as f64 / draws as f64;

        assert!((0.17..=0.23).contains(&rate), "bleed rate {rate}");
    }

    #[test]
    fn test_seeded_stroke_bleeds_beside_the_line() {
        let mut grid = DensityGrid::blank();
        let mut brush = Brush::new(RandomBleed::seeded(11, DEFAULT_BLEED_PROBABILITY));

        brush.draw_line(&mut grid, 5, 10, 45, 10);

        let beside: Vec<u8> = (5..=45)
            .flat_map(|x| [grid.get(x, 9), grid.get(x, 11)])
            .flatten()
            .collect();
        assert!(beside.iter().any(|&d| d > 0), "no neighbour received density");
        assert!(beside.iter().all(|&d| d <= 1));

        for x in 5..=45 {
            assert!(grid.get(x, 10).unwrap() >= 1, "gap at x={x}");
        }
        let off_stroke = (0..GRID_WIDTH as i32)
            .flat_map(|x| [(x, 8), (x, 12)])
            .filter(|&(x, y)| grid.get(x, y).unwrap() > 0)
            .count();
        assert_eq!(off_stroke, 0);
    }

    #[test]
    fn test_random_bleed_probability_is_clamped() {
        assert_eq!(RandomBleed::seeded(1, 3.0).probability(), 1.0);
        assert_eq!(RandomBleed::seeded(1, -1.0).probability(), 0.0);
    }

    #[test]
    fn test_line_cells_includes_endpoints() {
        let cells = line_cells(2, 3, 9, 5);
        assert_eq!(cells.first(), Some(&CellPos::new(2, 3)));
        assert_eq!(cells.last(), Some(&CellPos::new(9, 5)));
        assert_eq!(cells.len(), 8);
        assert_eight_connected(&cells);
    }

    #[test]
    fn test_line_cells_axis_aligned_and_diagonal_counts() {
        for (x0, y0, x1, y1) in [
            (0, 0, 7, 0),
            (7, 0, 0, 0),
            (3, 1, 3, 9),
            (3, 9, 3, 1),
            (0, 0, 5, 5),
            (5, 5, 0, 0),
            (0, 5, 5, 0),
        ] {
            let cells = line_cells(x0, y0, x1, y1);
            let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
            assert_eq!(cells.len(), expected, "({x0},{y0})->({x1},{y1})");
            let unique: HashSet<_> = cells.iter().collect();
            assert_eq!(unique.len(), expected);
        }
    }

    #[test]
    fn test_line_cells_single_point() {
        assert_eq!(line_cells(4, 4, 4, 4), vec![CellPos::new(4, 4)]);
    }

    #[test]
    fn test_line_cells_steep_and_shallow_are_connected() {
        for (x1, y1) in [(13, 2), (2, 13), (-9, 4), (-3, -11), (20, -1)] {
            let cells = line_cells(0, 0, x1, y1);
            assert_eight_connected(&cells);
            assert_eq!(cells.last(), Some(&CellPos::new(x1, y1)));
        }
    }

    #[test]
    fn test_draw_line_paints_diagonal() {
        let mut grid = DensityGrid::blank();
        let mut brush = Brush::new(NoBleed);

        brush.draw_line(&mut grid, 0, 0, 5, 5);

        for i in 0..=5 {
            assert_eq!(grid.get(i, i), Some(1));
        }
        assert_eq!(grid.painted_cells(), 6);
    }

    #[test]
    fn test_draw_line_clips_at_grid_edge() {
        let mut grid = DensityGrid::new(5, 5);
        let mut brush = Brush::new(NoBleed);

        brush.draw_line(&mut grid, -2, 2, 7, 2);

        assert_eq!(grid.painted_cells(), 5);
    }

    #[test]
    fn test_art_box_maps_with_floor() {
        let art = ArtBox::new(10.0, 5.0, 80.0, 40.0);

        assert_eq!(art.cell_at(10.0, 5.0, 80, 40), Some(CellPos::new(0, 0)));
        assert_eq!(art.cell_at(10.9, 5.9, 80, 40), Some(CellPos::new(0, 0)));
        assert_eq!(art.cell_at(89.5, 44.5, 80, 40), Some(CellPos::new(79, 39)));
    }

    #[test]
    fn test_art_box_scales_to_grid() {
        let art = ArtBox::new(0.0, 0.0, 40.0, 20.0);
        assert_eq!(art.cell_at(20.0, 10.0, 80, 40), Some(CellPos::new(40, 20)));
    }

    #[test]
    fn test_art_box_outside_maps_outside_grid() {
        let art = ArtBox::new(10.0, 10.0, 80.0, 40.0);
        let cell = art.cell_at(5.0, 60.0, 80, 40).unwrap();
        assert!(cell.x < 0);
        assert!(cell.y >= 40);
        assert!(!art.contains(5.0, 60.0));
    }

    #[test]
    fn test_art_box_degenerate() {
        let art = ArtBox::new(0.0, 0.0, 0.0, 10.0);
        assert_eq!(art.cell_at(1.0, 1.0, 80, 40), None);
    }
}
