//! The generation transition: standard B3/S23 Life rules, computed
//! sparsely.
//!
//! A dense-grid implementation scans every cell in a bounding box each
//! generation, costing O(area). This engine instead walks only the live
//! cells and their Moore neighborhoods, so a tick costs time
//! proportional to the population regardless of how spread out the
//! colony is.

use tracing::trace;

use crate::cell::Cell;
use crate::colony::Colony;

/// Live-neighbor count at which a dead cell is born.
const BIRTH_COUNT: usize = 3;

/// Compute generation N+1 from a frozen view of generation N.
///
/// For every live cell the engine walks the 8 Moore neighbors exactly
/// once. Live neighbors are only counted (the count decides the cell's
/// own survival); each dead neighbor is evaluated for birth on the spot
/// by counting *its* live neighbors against the current set. A dead
/// cell bordering several live cells is re-evaluated once per such
/// border. That redundancy is accepted: it avoids any auxiliary
/// per-candidate counter structure, and inserting an already-present
/// cell into the next set is a no-op, so every evaluation order
/// converges on the same membership.
///
/// The input set is read-only for the whole computation, so every
/// membership test observes a consistent snapshot of generation N.
pub fn next_generation(current: &Colony) -> Colony {
    let population = current.population();
    // Pre-size to ~1.25x the current population to limit rehashing.
    let mut next = Colony::with_capacity(population.saturating_add(population / 4));

    for cell in current.iter() {
        let mut live = 0_usize;
        for neighbor in cell.neighbors() {
            if current.contains(neighbor) {
                live = live.saturating_add(1);
            } else if live_neighbor_count(current, neighbor) == BIRTH_COUNT {
                next.insert(neighbor);
            }
        }
        // Survival on exactly 2 or 3 live neighbors.
        if live == 2 || live == 3 {
            next.insert(cell);
        }
    }

    next
}

/// Count the live Moore neighbors of `cell` in the current generation.
fn live_neighbor_count(current: &Colony, cell: Cell) -> usize {
    cell.neighbors().filter(|&n| current.contains(n)).count()
}

impl Colony {
    /// Replace this generation with the next one.
    ///
    /// The previous generation's storage is dropped after the swap; the
    /// transition never mutates it in place.
    pub fn advance(&mut self) {
        *self = next_generation(self);
        trace!(population = self.population(), "generation advanced");
    }

    /// Advance by `ticks` generations, one full transition at a time.
    pub fn advance_by(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colony_of(cells: &[Cell]) -> Colony {
        let mut colony = Colony::new();
        colony.seed(cells);
        colony
    }

    #[test]
    fn empty_universe_stays_empty() {
        let mut colony = Colony::new();
        colony.advance_by(10);
        assert!(colony.is_empty());
    }

    #[test]
    fn lone_cell_dies() {
        let mut colony = colony_of(&[Cell::new(0, 0)]);
        colony.advance();
        assert!(colony.is_empty());
    }

    #[test]
    fn two_cells_die() {
        let mut colony = colony_of(&[Cell::new(0, 0), Cell::new(1, 0)]);
        colony.advance();
        assert!(colony.is_empty());
    }

    #[test]
    fn block_is_a_still_life() {
        let block = [
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
        ];
        let original = colony_of(&block);
        let mut colony = original.clone();
        for _ in 0..25 {
            colony.advance();
            assert_eq!(colony, original);
        }
    }

    #[test]
    fn blinker_rotates_then_returns() {
        let horizontal = colony_of(&[Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0)]);

        let vertical = next_generation(&horizontal);
        assert_eq!(
            vertical.snapshot(),
            vec![Cell::new(2, -1), Cell::new(2, 0), Cell::new(2, 1)]
        );

        // Period 2: the second tick restores the original set.
        assert_eq!(next_generation(&vertical), horizontal);
    }

    #[test]
    fn toad_has_period_two() {
        let toad = colony_of(&[
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(3, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(2, 1),
        ]);
        let mut colony = toad.clone();
        colony.advance();
        assert_ne!(colony, toad);
        colony.advance();
        assert_eq!(colony, toad);
    }

    #[test]
    fn next_generation_does_not_mutate_input() {
        let blinker = colony_of(&[Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0)]);
        let before = blinker.snapshot();
        let _next = next_generation(&blinker);
        assert_eq!(blinker.snapshot(), before);
    }

    #[test]
    fn birth_works_away_from_origin() {
        // An L-triplet births its corner completing a block, anywhere on
        // the lattice including the negative quadrant.
        let mut colony = colony_of(&[
            Cell::new(-100, -200),
            Cell::new(-99, -200),
            Cell::new(-100, -199),
        ]);
        colony.advance();
        assert_eq!(
            colony.snapshot(),
            vec![
                Cell::new(-100, -200),
                Cell::new(-100, -199),
                Cell::new(-99, -200),
                Cell::new(-99, -199),
            ]
        );
    }
}
