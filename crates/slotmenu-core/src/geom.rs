//! Slot geometry: grids are `rows × 9` and slots are numbered row-major.

use std::fmt;

/// Number of slots in one grid row.
pub const COLUMNS: usize = 9;
/// Smallest grid, in rows.
pub const MIN_ROWS: i32 = 1;
/// Largest grid, in rows.
pub const MAX_ROWS: i32 = 6;

/// Total slot count of a grid with `rows` rows, clamped to `[1, 6]` rows.
#[inline]
pub fn grid_size(rows: i32) -> usize {
    rows.clamp(MIN_ROWS, MAX_ROWS) as usize * COLUMNS
}

/// Number of rows of a grid holding `size` slots (rounded up).
#[inline]
pub fn rows_of(size: usize) -> usize {
    size.div_ceil(COLUMNS)
}

// ---------------------------------------------------------------------------
// SlotPos
// ---------------------------------------------------------------------------

/// A slot position as `(row, column)`. Row 0 is the top row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotPos {
    pub row: usize,
    pub column: usize,
}

impl SlotPos {
    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Position of a slot index.
    #[inline]
    pub const fn from_slot(slot: usize) -> Self {
        Self {
            row: slot / COLUMNS,
            column: slot % COLUMNS,
        }
    }

    /// The slot index, or `None` when `column` is outside the row.
    #[inline]
    pub const fn slot(self) -> Option<usize> {
        if self.column < COLUMNS {
            Some(self.row * COLUMNS + self.column)
        } else {
            None
        }
    }

    /// Whether this position lies in the first or last column.
    #[inline]
    pub const fn is_edge_column(self) -> bool {
        self.column == 0 || self.column == COLUMNS - 1
    }
}

impl PartialOrd for SlotPos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlotPos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for SlotPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_clamps_rows() {
        for rows in 1..=6 {
            assert_eq!(grid_size(rows), rows as usize * 9);
        }
        assert_eq!(grid_size(0), 9);
        assert_eq!(grid_size(-3), 9);
        assert_eq!(grid_size(7), 54);
        assert_eq!(grid_size(i32::MAX), 54);
    }

    #[test]
    fn slot_pos_conversion() {
        assert_eq!(SlotPos::from_slot(0), SlotPos::new(0, 0));
        assert_eq!(SlotPos::from_slot(13), SlotPos::new(1, 4));
        assert_eq!(SlotPos::from_slot(53), SlotPos::new(5, 8));
        for slot in 0..54 {
            assert_eq!(SlotPos::from_slot(slot).slot(), Some(slot));
        }
        assert_eq!(SlotPos::new(0, 9).slot(), None);
    }

    #[test]
    fn rows_of_rounds_up() {
        assert_eq!(rows_of(0), 0);
        assert_eq!(rows_of(9), 1);
        assert_eq!(rows_of(10), 2);
        assert_eq!(rows_of(54), 6);
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(SlotPos::new(0, 8) < SlotPos::new(1, 0));
        assert!(SlotPos::new(2, 1) > SlotPos::new(2, 0));
    }
}
