//! Lattice coordinates and the packed 64-bit cell key.
//!
//! A [`Cell`] is a position on the unbounded 2D integer lattice. For set
//! storage it is packed into a single [`CellKey`]: the bit pattern of `y`
//! occupies the high 32 bits and the bit pattern of `x` the low 32 bits.
//! The pack is a bit reinterpretation, not an arithmetic scaling, so
//! two's-complement patterns of negative coordinates survive the round
//! trip exactly.

// Two i32 coordinates must pack exactly into one u64 key.
const _: () = assert!(u64::BITS == 2 * i32::BITS);

/// Offsets of the 8 Moore-neighborhood cells around a cell.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A position on the unbounded 2D integer lattice.
///
/// Ordering is lexicographic by `x` then `y` (field order), which is the
/// ordering used by [`Colony::snapshot`].
///
/// [`Colony::snapshot`]: crate::colony::Colony::snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Cell {
    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pack this cell into its set key.
    pub const fn key(self) -> CellKey {
        let x = self.x.cast_unsigned() as u64;
        let y = self.y.cast_unsigned() as u64;
        CellKey((y << 32) | x)
    }

    /// The cell displaced by `(dx, dy)`.
    ///
    /// Uses wrapping arithmetic: at the extreme edge of the `i32` range a
    /// neighbor coordinate wraps around to the opposite edge. Patterns
    /// within `i32::MIN + 1 ..= i32::MAX - 1` per axis never observe this.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Iterate over the 8 Moore-neighborhood cells.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        NEIGHBOR_OFFSETS.into_iter().map(move |(dx, dy)| self.offset(dx, dy))
    }
}

/// Packed set key for a [`Cell`].
///
/// The key is a total bijection over all representable cells:
/// `key.cell() == cell` always holds. Keys of nearby cells differ only in
/// a few low bits; the set relies on its hasher to mix this, see
/// [`Colony`].
///
/// [`Colony`]: crate::colony::Colony
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey(u64);

impl CellKey {
    /// Unpack the cell this key encodes.
    // The mask and shift make both casts lossless 32-bit extractions.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn cell(self) -> Cell {
        let x = (self.0 & 0xFFFF_FFFF) as u32;
        let y = (self.0 >> 32) as u32;
        Cell {
            x: x.cast_signed(),
            y: y.cast_signed(),
        }
    }

    /// The raw packed value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<Cell> for CellKey {
    fn from(cell: Cell) -> Self {
        cell.key()
    }
}

impl From<CellKey> for Cell {
    fn from(key: CellKey) -> Self {
        key.cell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_layout_positive() {
        let key = Cell::new(3, 5).key();
        assert_eq!(key.raw() & 0xFFFF_FFFF, 3);
        assert_eq!(key.raw() >> 32, 5);
    }

    #[test]
    fn pack_negative_keeps_bit_pattern() {
        // -1 must occupy its half as all-ones without bleeding into the
        // other coordinate's bits.
        let key = Cell::new(-1, 0).key();
        assert_eq!(key.raw(), 0x0000_0000_FFFF_FFFF);

        let key = Cell::new(0, -1).key();
        assert_eq!(key.raw(), 0xFFFF_FFFF_0000_0000);
    }

    #[test]
    fn round_trip_representative_cells() {
        let cells = [
            Cell::new(0, 0),
            Cell::new(1, -1),
            Cell::new(-1, 1),
            Cell::new(-123_456, 654_321),
            Cell::new(i32::MAX, i32::MAX),
            Cell::new(i32::MIN, i32::MIN),
            Cell::new(i32::MIN, i32::MAX),
            Cell::new(i32::MAX, i32::MIN),
        ];
        for cell in cells {
            assert_eq!(cell.key().cell(), cell, "round trip failed for {cell:?}");
        }
    }

    #[test]
    fn distinct_cells_have_distinct_keys() {
        let a = Cell::new(1, 2).key();
        let b = Cell::new(2, 1).key();
        assert_ne!(a, b);
    }

    #[test]
    fn neighbors_are_the_moore_neighborhood() {
        let center = Cell::new(10, -10);
        let neighbors: Vec<Cell> = center.neighbors().collect();
        assert_eq!(neighbors.len(), 8);
        for n in &neighbors {
            assert_ne!(*n, center);
            assert!((n.x - center.x).abs() <= 1);
            assert!((n.y - center.y).abs() <= 1);
        }
        // All 8 distinct.
        let mut sorted = neighbors;
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);
    }

    #[test]
    fn ordering_is_x_then_y() {
        let mut cells = vec![
            Cell::new(1, 0),
            Cell::new(0, 1),
            Cell::new(0, 0),
            Cell::new(1, -5),
            Cell::new(-2, 9),
        ];
        cells.sort_unstable();
        assert_eq!(
            cells,
            vec![
                Cell::new(-2, 9),
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, -5),
                Cell::new(1, 0),
            ]
        );
    }
}
