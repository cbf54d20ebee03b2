use std::collections::BTreeMap;

use slotmenu_core::{GridHandle, Item};

/// The navigation buttons a menu can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ButtonKind {
    PreviousPage,
    NextPage,
}

impl ButtonKind {
    /// Signed page change applied when the button is clicked.
    #[inline]
    pub const fn delta(self) -> isize {
        match self {
            Self::PreviousPage => -1,
            Self::NextPage => 1,
        }
    }

    /// The page reached from `page` by clicking this button. Never below 1.
    pub fn apply(self, page: usize) -> usize {
        page.saturating_add_signed(self.delta()).max(1)
    }

    /// Whether the button is drawn on `page` for a paginated format holding
    /// `total` entries, `page_size` per page.
    pub fn is_visible(self, page: usize, page_size: usize, total: usize) -> bool {
        match self {
            Self::PreviousPage => page > 1,
            Self::NextPage => page >= 1 && total > page.saturating_mul(page_size),
        }
    }
}

/// A configured navigation button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub slot: usize,
    pub item: Item,
}

/// The navigation buttons of one menu, keyed by kind.
#[derive(Debug, Clone, Default)]
pub struct Buttons {
    map: BTreeMap<ButtonKind, NavButton>,
}

impl Buttons {
    pub fn set(&mut self, kind: ButtonKind, slot: usize, item: Item) {
        self.map.insert(kind, NavButton { slot, item });
    }

    pub fn get(&self, kind: ButtonKind) -> Option<&NavButton> {
        self.map.get(&kind)
    }

    /// The button configured on `slot`, whether or not it is drawn.
    pub fn kind_at(&self, slot: usize) -> Option<ButtonKind> {
        self.map
            .iter()
            .find_map(|(&kind, button)| (button.slot == slot).then_some(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ButtonKind, &NavButton)> {
        self.map.iter().map(|(&k, b)| (k, b))
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Draw every button that is visible for the given page state,
    /// overwriting whatever the slot holds.
    pub fn draw<G: GridHandle>(&self, grid: &G, page: usize, page_size: usize, total: usize) {
        for (kind, button) in self.iter() {
            if kind.is_visible(page, page_size, total) {
                grid.set_item(button.slot, Some(button.item.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmenu_core::MemoryGrid;

    #[test]
    fn visibility_for_five_entries_two_per_page() {
        use ButtonKind::*;
        assert!(NextPage.is_visible(1, 2, 5));
        assert!(NextPage.is_visible(2, 2, 5));
        assert!(!NextPage.is_visible(3, 2, 5));
        assert!(!PreviousPage.is_visible(1, 2, 5));
        assert!(PreviousPage.is_visible(2, 2, 5));
        assert!(PreviousPage.is_visible(3, 2, 5));
    }

    #[test]
    fn next_needs_more_than_a_full_page() {
        assert!(!ButtonKind::NextPage.is_visible(2, 2, 4));
        assert!(!ButtonKind::NextPage.is_visible(0, 2, 10));
    }

    #[test]
    fn next_shows_without_page_size_when_entries_exist() {
        assert!(ButtonKind::NextPage.is_visible(1, 0, 10));
        assert!(ButtonKind::NextPage.is_visible(3, 0, 1));
        assert!(!ButtonKind::NextPage.is_visible(1, 0, 0));
    }

    #[test]
    fn apply_never_goes_below_one() {
        assert_eq!(ButtonKind::PreviousPage.apply(1), 1);
        assert_eq!(ButtonKind::PreviousPage.apply(3), 2);
        assert_eq!(ButtonKind::NextPage.apply(3), 4);
    }

    #[test]
    fn draw_only_visible() {
        let grid = MemoryGrid::new(27, "t");
        let mut buttons = Buttons::default();
        buttons.set(ButtonKind::PreviousPage, 18, Item::new('<'));
        buttons.set(ButtonKind::NextPage, 26, Item::new('>'));
        buttons.draw(&grid, 1, 2, 5);
        assert_eq!(grid.item(18), None);
        assert_eq!(grid.item(26).map(|i| i.glyph), Some('>'));
        assert_eq!(buttons.kind_at(18), Some(ButtonKind::PreviousPage));
        assert_eq!(buttons.kind_at(0), None);
    }
}
