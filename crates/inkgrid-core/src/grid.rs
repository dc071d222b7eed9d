//! The density grid: the sole mutable drawing state.
//!
//! A fixed-size table of bounded intensities stored row-major. Every write
//! is clamped to `[0, MAX_DENSITY]` and every access outside the grid is a
//! silent no-op, which is what pointer interpolation relies on when a
//! sampled position lands exactly on an edge.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::glyph::MAX_DENSITY;

/// Grid width of the reference canvas, in cells.
pub const GRID_WIDTH: usize = 80;

/// Grid height of the reference canvas, in cells.
pub const GRID_HEIGHT: usize = 40;

/// Integer cell coordinate. Signed so that interpolation may pass through
/// positions left of or above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True if `other` is one of the 8 cells surrounding this one.
    pub fn is_adjacent(&self, other: &CellPos) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }
}

/// Fixed-size 2D table of intensities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<u8>>")]
pub struct DensityGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl DensityGrid {
    /// All-zero grid of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// All-zero grid with the reference dimensions (80×40).
    pub fn blank() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }

    /// Build a grid from rows, clamping every value into range.
    ///
    /// Fails on an empty or ragged row set.
    pub fn from_rows<R, T>(rows: R) -> Result<Self, Error>
    where
        R: IntoIterator<Item = Vec<T>>,
        T: Into<i64>,
    {
        let rows: Vec<Vec<T>> = rows.into_iter().collect();
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(Error::invalid_grid("grid has no cells"));
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::invalid_grid(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            for value in row {
                let value: i64 = value.into();
                if value < 0 {
                    return Err(Error::invalid_grid(format!(
                        "negative density {} in row {}",
                        value, y
                    )));
                }
                cells.push(value.min(i64::from(MAX_DENSITY)) as u8);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Density at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Overwrite a cell, clamped to `[0, MAX_DENSITY]`.
    pub fn set(&mut self, x: i32, y: i32, value: u8) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = value.min(MAX_DENSITY);
        }
    }

    /// Add `amount` to a cell, saturating at `MAX_DENSITY`.
    pub fn increment(&mut self, x: i32, y: i32, amount: u8) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = self.cells[i].saturating_add(amount).min(MAX_DENSITY);
        }
    }

    /// One row of cells, left to right.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y < self.height {
            Some(&self.cells[y * self.width..(y + 1) * self.width])
        } else {
            None
        }
    }

    /// Iterator over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&d| d == 0)
    }

    /// Number of cells holding any density.
    pub fn painted_cells(&self) -> usize {
        self.cells.iter().filter(|&&d| d > 0).count()
    }
}

impl Default for DensityGrid {
    fn default() -> Self {
        Self::blank()
    }
}

impl TryFrom<Vec<Vec<i64>>> for DensityGrid {
    type Error = Error;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<DensityGrid> for Vec<Vec<u8>> {
    fn from(grid: DensityGrid) -> Self {
        grid.rows().map(<[u8]>::to_vec).collect()
    }
}
