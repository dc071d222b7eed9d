//! Bounded undo history of grid snapshots.

use std::collections::VecDeque;

use crate::grid::DensityGrid;

/// Default number of snapshots kept for undo.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Stack of grid snapshots, most recent last.
///
/// Pushing past the limit evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: VecDeque<DensityGrid>,
    limit: usize,
}

impl HistoryStack {
    /// Create an empty stack. A limit of zero is raised to one.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Store a snapshot, evicting the oldest one when full.
    pub fn push(&mut self, snapshot: DensityGrid) {
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    /// Take the most recent snapshot.
    pub fn pop(&mut self) -> Option<DensityGrid> {
        self.entries.pop_back()
    }

    pub fn peek(&self) -> Option<&DensityGrid> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
