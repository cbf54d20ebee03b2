//! Raw click input delivered by the host: [`RawClick`], [`ClickKind`].

use crate::item::Item;

// ---------------------------------------------------------------------------
// ClickKind
// ---------------------------------------------------------------------------

/// How a slot was activated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClickKind {
    /// Primary (left) button.
    Left,
    /// Secondary (right) button.
    Right,
    /// Middle button.
    Middle,
    ShiftLeft,
    ShiftRight,
    /// A hotbar number key pressed over the slot (0-based key index).
    NumberKey(u8),
    /// The drop key pressed over the slot.
    Drop,
}

impl ClickKind {
    #[inline]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::Left | Self::ShiftLeft)
    }

    #[inline]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::Right | Self::ShiftRight)
    }

    #[inline]
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::ShiftLeft | Self::ShiftRight)
    }
}

// ---------------------------------------------------------------------------
// RawClick
// ---------------------------------------------------------------------------

/// A click on a grid as reported by the host.
///
/// `raw_slot` is signed: hosts report clicks outside the window (or on
/// the viewer's own inventory) with negative or oversized indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawClick {
    pub raw_slot: i32,
    pub current_item: Option<Item>,
    pub kind: ClickKind,
}

impl RawClick {
    /// Convenience: a left click on `slot` with nothing in it.
    pub fn left(slot: usize) -> Self {
        Self {
            raw_slot: slot as i32,
            current_item: None,
            kind: ClickKind::Left,
        }
    }

    /// Set the item the host saw under the cursor (builder).
    pub fn with_item(mut self, item: Option<Item>) -> Self {
        self.current_item = item;
        self
    }

    /// Set the click kind (builder).
    pub fn with_kind(mut self, kind: ClickKind) -> Self {
        self.kind = kind;
        self
    }

    /// The clicked slot, if it lies inside a grid of `size` slots.
    #[inline]
    pub fn slot_in(&self, size: usize) -> Option<usize> {
        usize::try_from(self.raw_slot).ok().filter(|&s| s < size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_in_bounds() {
        assert_eq!(RawClick::left(4).slot_in(9), Some(4));
        assert_eq!(RawClick::left(9).slot_in(9), None);
        let outside = RawClick {
            raw_slot: -999,
            current_item: None,
            kind: ClickKind::Left,
        };
        assert_eq!(outside.slot_in(54), None);
    }

    #[test]
    fn kind_predicates() {
        assert!(ClickKind::ShiftLeft.is_left());
        assert!(ClickKind::ShiftLeft.is_shift());
        assert!(ClickKind::Right.is_right());
        assert!(!ClickKind::Drop.is_left());
    }
}
