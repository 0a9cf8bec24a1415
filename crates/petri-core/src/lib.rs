//! Sparse Conway's Game of Life on an unbounded integer lattice.
//!
//! Only live cells are stored, so the simulated universe is effectively
//! infinite and memory scales with population rather than area. The
//! transition engine visits only cells that can possibly change state,
//! making the cost of a generation proportional to the population.
//!
//! # Modules
//!
//! - [`cell`] -- Lattice coordinates and the packed 64-bit cell key.
//! - [`colony`] -- [`Colony`], the deduplicated live-cell set that is the
//!   entire state of the universe.
//! - [`engine`] -- The generation transition: standard B3/S23 rules over
//!   the Moore neighborhood, computed sparsely.
//! - [`pattern`] -- Life 1.06 plain-text pattern reader.

pub mod cell;
pub mod colony;
pub mod engine;
pub mod pattern;

// Re-export primary types at crate root.
pub use cell::{Cell, CellKey, NEIGHBOR_OFFSETS};
pub use colony::Colony;
pub use engine::next_generation;
pub use pattern::{PatternError, parse_life_106, read_life_106};
