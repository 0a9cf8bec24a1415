//! The live-cell set: the entire state of the simulated universe.
//!
//! A [`Colony`] stores only live cells, keyed by the packed [`CellKey`].
//! Deadness is the complement: a cell absent from the set is dead. There
//! is no separate dead-cell storage, which is what makes the universe
//! effectively unbounded.

use std::collections::HashSet;

use tracing::debug;

use crate::cell::{Cell, CellKey};

/// The deduplicated set of currently-live cells.
///
/// Backed by a `HashSet` over the packed key. Live cells cluster, so
/// nearby keys differ only in a few low bits; the std hasher (`SipHash`)
/// mixes the full key, which keeps bucket distribution healthy without
/// an explicit finalizer step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Colony {
    cells: HashSet<CellKey>,
}

impl Colony {
    /// Create an empty colony.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty colony with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(capacity),
        }
    }

    /// Bulk-insert the initial live cells.
    ///
    /// Returns the number of genuinely new cells. Duplicates, whether
    /// within `cells` or against already-live cells, are silent no-ops
    /// and are not counted.
    pub fn seed(&mut self, cells: &[Cell]) -> usize {
        let mut inserted = 0_usize;
        for &cell in cells {
            if self.cells.insert(cell.key()) {
                inserted = inserted.saturating_add(1);
            }
        }
        debug!(
            listed = cells.len(),
            inserted,
            population = self.cells.len(),
            "colony seeded"
        );
        inserted
    }

    /// Make `cell` live. Returns `false` if it already was.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell.key())
    }

    /// Whether `cell` is live. O(1) expected.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell.key())
    }

    /// Whether the cell behind `key` is live. O(1) expected.
    pub fn contains_key(&self, key: CellKey) -> bool {
        self.cells.contains(&key)
    }

    /// Current population.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the live cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(|key| key.cell())
    }

    /// All live cells sorted ascending by `(x, y)`.
    ///
    /// The ordering is total and stable across calls for the same set,
    /// making it suitable for deterministic inspection and testing.
    pub fn snapshot(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.iter().collect();
        cells.sort_unstable();
        cells
    }
}
