use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use slotmenu_core::geom::{COLUMNS, SlotPos};

/// Decides which slots paginated content must not be placed in.
#[derive(Clone, Default)]
pub enum SkipPredicate {
    /// Every slot is usable.
    #[default]
    None,
    /// An explicit set of reserved slots.
    Slots(BTreeSet<usize>),
    /// An arbitrary predicate; `true` means "skip this slot".
    Custom(Rc<dyn Fn(usize) -> bool>),
}

impl SkipPredicate {
    /// Skip exactly the given slots.
    pub fn slots(slots: impl IntoIterator<Item = usize>) -> Self {
        Self::Slots(slots.into_iter().collect())
    }

    /// Skip every slot for which `f` returns `true`.
    pub fn custom(f: impl Fn(usize) -> bool + 'static) -> Self {
        Self::Custom(Rc::new(f))
    }

    /// Skip the border of a `rows`-row grid, so content fills the inside.
    pub fn border(rows: usize) -> Self {
        Self::custom(move |slot| is_border(rows, slot))
    }

    /// Skip everything except the border of a `rows`-row grid, so content
    /// traces the frame.
    pub fn interior(rows: usize) -> Self {
        Self::custom(move |slot| !is_border(rows, slot))
    }

    /// Whether `slot` must be left alone.
    pub fn is_skippable(&self, slot: usize) -> bool {
        match self {
            Self::None => false,
            Self::Slots(set) => set.contains(&slot),
            Self::Custom(f) => f(slot),
        }
    }
}

impl fmt::Debug for SkipPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("SkipPredicate::None"),
            Self::Slots(set) => f.debug_tuple("SkipPredicate::Slots").field(set).finish(),
            Self::Custom(_) => f.write_str("SkipPredicate::Custom(..)"),
        }
    }
}

/// Whether `slot` lies on the outer ring of a `rows × 9` grid.
///
/// Grids of two rows or fewer have no border. Slots past the end of the grid
/// are never border.
pub fn is_border(rows: usize, slot: usize) -> bool {
    if rows <= 2 || slot >= rows * COLUMNS {
        return false;
    }
    let pos = SlotPos::from_slot(slot);
    pos.row == 0 || pos.row == rows - 1 || pos.is_edge_column()
}

/// Number of border slots of a `rows × 9` grid.
pub fn border_slot_count(rows: usize) -> usize {
    if rows <= 2 {
        0
    } else {
        rows * COLUMNS - (rows - 2) * (COLUMNS - 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_skips_nothing() {
        let skip = SkipPredicate::default();
        assert!((0..54).all(|s| !skip.is_skippable(s)));
    }

    #[test]
    fn explicit_slots() {
        let skip = SkipPredicate::slots([1, 7]);
        assert!(skip.is_skippable(1));
        assert!(skip.is_skippable(7));
        assert!(!skip.is_skippable(0));
    }

    #[test]
    fn small_grids_have_no_border() {
        for rows in 1..=2 {
            assert!((0..rows * 9).all(|s| !is_border(rows, s)));
            assert_eq!(border_slot_count(rows), 0);
        }
    }

    #[test]
    fn border_table() {
        // (rows, slot, expected)
        let cases = [
            (3, 0, true),
            (3, 8, true),
            (3, 9, true),
            (3, 10, false),
            (3, 13, false),
            (3, 17, true),
            (3, 18, true),
            (3, 26, true),
            (4, 13, false),
            (4, 27, true),
            (4, 26, true),
            (4, 22, false),
            (6, 0, true),
            (6, 13, false),
            (6, 36, true),
            (6, 44, true),
            (6, 43, false),
            (6, 45, true),
            (6, 53, true),
            (6, 54, false),
        ];
        for (rows, slot, expected) in cases {
            assert_eq!(is_border(rows, slot), expected, "rows={rows} slot={slot}");
        }
    }

    #[test]
    fn border_count_matches_predicate() {
        for rows in 1..=6 {
            let n = (0..rows * 9).filter(|&s| is_border(rows, s)).count();
            assert_eq!(n, border_slot_count(rows), "rows={rows}");
        }
    }

    #[test]
    fn border_and_interior_are_complements() {
        let border = SkipPredicate::border(5);
        let interior = SkipPredicate::interior(5);
        for slot in 0..45 {
            assert_ne!(border.is_skippable(slot), interior.is_skippable(slot));
        }
    }
}
