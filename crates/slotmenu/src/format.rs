//! Formats bind content to slots: [`SingleSlot`] and [`Paginated`].

use std::collections::BTreeMap;
use std::rc::Rc;

use slotmenu_core::{GridHandle, Item, RawClick};

use crate::event::{ClickEvent, Handler, PageRequest};
use crate::paginate::page_range;
use crate::{MenuConfig, Properties, SkipPredicate};

/// A logical entry that knows how to display itself.
pub trait MenuItem {
    /// The item shown for this entry in `grid`.
    fn display<G: GridHandle>(&self, grid: &G, properties: &Properties) -> Item;
}

impl MenuItem for Item {
    fn display<G: GridHandle>(&self, _grid: &G, _properties: &Properties) -> Item {
        self.clone()
    }
}

/// What a format places in a slot: a raw display item or a logical entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content<T> {
    Item(Item),
    Entry(T),
}

impl<T: MenuItem> Content<T> {
    pub fn display<G: GridHandle>(&self, grid: &G, properties: &Properties) -> Item {
        match self {
            Self::Item(item) => item.clone(),
            Self::Entry(entry) => entry.display(grid, properties),
        }
    }
}

impl<T> Content<T> {
    pub fn entry(&self) -> Option<&T> {
        match self {
            Self::Item(_) => None,
            Self::Entry(entry) => Some(entry),
        }
    }
}

fn invoke<T, G: GridHandle>(
    grid: &G,
    handler: Option<&Handler<T>>,
    raw: &RawClick,
    slot: usize,
    entry: Option<&T>,
    config: &MenuConfig,
) -> Option<PageRequest> {
    let handler = handler?;
    let item = raw.current_item.clone().or_else(|| grid.item(slot));
    let event = ClickEvent::new(raw, slot, item, config.properties(), entry, config.current_page());
    handler(&event);
    event.take_request()
}

// ---------------------------------------------------------------------------
// SingleSlot
// ---------------------------------------------------------------------------

/// One piece of content pinned to one slot.
pub struct SingleSlot<T> {
    slot: usize,
    content: Rc<Content<T>>,
    handler: Option<Handler<T>>,
}

impl<T: MenuItem> SingleSlot<T> {
    pub fn new(slot: usize, content: Content<T>, handler: Option<Handler<T>>) -> Self {
        Self {
            slot,
            content: Rc::new(content),
            handler,
        }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Write the content into its slot. Pinned content ignores the skip
    /// predicate.
    pub fn format<G: GridHandle>(&self, grid: &G, config: &MenuConfig) {
        let item = self.content.display(grid, config.properties());
        grid.set_item(self.slot, Some(item));
    }

    pub fn is_valid(&self, slot: usize) -> bool {
        self.slot == slot
    }

    pub fn accept<G: GridHandle>(
        &self,
        grid: &G,
        raw: &RawClick,
        config: &MenuConfig,
    ) -> Option<PageRequest> {
        invoke(
            grid,
            self.handler.as_ref(),
            raw,
            self.slot,
            self.content.entry(),
            config,
        )
    }
}

impl<T> Clone for SingleSlot<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot,
            content: Rc::clone(&self.content),
            handler: self.handler.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Paginated
// ---------------------------------------------------------------------------

/// An ordered list of content laid out over the free slots, one page at a
/// time.
///
/// `placed` maps each slot written by the last [`format`](Paginated::format)
/// to the index of the entry shown there. It is only meaningful until the
/// next render.
pub struct Paginated<T> {
    entries: Rc<[Content<T>]>,
    handler: Option<Handler<T>>,
    placed: BTreeMap<usize, usize>,
}

impl<T: MenuItem> Paginated<T> {
    pub fn new(entries: Vec<Content<T>>, handler: Option<Handler<T>>) -> Self {
        Self {
            entries: entries.into(),
            handler,
            placed: BTreeMap::new(),
        }
    }

    /// Total entry count, across all pages.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Slots occupied since the last render, in slot order.
    pub fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.placed.keys().copied()
    }

    /// Lay out the current page.
    ///
    /// Walks slots from the start slot up to the exit slot; skipped slots are
    /// passed over without consuming an entry. Entries that do not fit before
    /// the exit slot are not shown.
    pub fn format<G: GridHandle>(&mut self, grid: &G, config: &MenuConfig, skip: &SkipPredicate) {
        self.placed.clear();

        let window = if config.page_size() == 0 {
            0..self.entries.len()
        } else {
            page_range(self.entries.len(), config.current_page(), config.page_size())
        };

        let mut index = window.start;
        let mut slot = config.start_slot();
        while index < window.end && slot < config.exit_slot() {
            if !skip.is_skippable(slot) {
                let item = self.entries[index].display(grid, config.properties());
                grid.set_item(slot, Some(item));
                self.placed.insert(slot, index);
                index += 1;
            }
            slot += 1;
        }
    }

    pub fn is_valid(&self, slot: usize) -> bool {
        self.placed.contains_key(&slot)
    }

    pub fn accept<G: GridHandle>(
        &self,
        grid: &G,
        raw: &RawClick,
        slot: usize,
        config: &MenuConfig,
    ) -> Option<PageRequest> {
        let index = *self.placed.get(&slot)?;
        let entry = self.entries.get(index).and_then(Content::entry);
        invoke(grid, self.handler.as_ref(), raw, slot, entry, config)
    }
}

impl<T> Clone for Paginated<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
            handler: self.handler.clone(),
            placed: self.placed.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// Either kind of format, as stored by the builder.
pub enum Format<T> {
    Single(SingleSlot<T>),
    Paginated(Paginated<T>),
}

impl<T: MenuItem> Format<T> {
    /// Lay the format out; only paginated formats consult `skip`.
    pub fn format<G: GridHandle>(&mut self, grid: &G, config: &MenuConfig, skip: &SkipPredicate) {
        match self {
            Self::Single(f) => f.format(grid, config),
            Self::Paginated(f) => f.format(grid, config, skip),
        }
    }

    pub fn is_valid(&self, slot: usize) -> bool {
        match self {
            Self::Single(f) => f.is_valid(slot),
            Self::Paginated(f) => f.is_valid(slot),
        }
    }

    pub fn accept<G: GridHandle>(
        &self,
        grid: &G,
        raw: &RawClick,
        slot: usize,
        config: &MenuConfig,
    ) -> Option<PageRequest> {
        match self {
            Self::Single(f) => f.accept(grid, raw, config),
            Self::Paginated(f) => f.accept(grid, raw, slot, config),
        }
    }
}

impl<T> Clone for Format<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Single(f) => Self::Single(f.clone()),
            Self::Paginated(f) => Self::Paginated(f.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmenu_core::MemoryGrid;
    use std::cell::RefCell;

    fn glyphs(grid: &MemoryGrid) -> Vec<(usize, char)> {
        grid.occupied()
            .into_iter()
            .filter_map(|s| grid.item(s).map(|i| (s, i.glyph)))
            .collect()
    }

    fn items(chars: &str) -> Vec<Content<Item>> {
        chars.chars().map(|c| Content::Item(Item::new(c))).collect()
    }

    #[test]
    fn skipped_slot_consumes_no_entry() {
        let grid = MemoryGrid::new(9, "t");
        let mut config = MenuConfig::new("t", 1);
        config.set_exit_slot(4);
        let mut f = Paginated::new(items("ABC"), None);
        f.format(&grid, &config, &SkipPredicate::slots([1]));
        assert_eq!(glyphs(&grid), vec![(0, 'A'), (2, 'B'), (3, 'C')]);
        assert!(f.is_valid(2));
        assert!(!f.is_valid(1));
    }

    #[test]
    fn overflow_is_dropped_at_exit_slot() {
        let grid = MemoryGrid::new(9, "t");
        let mut config = MenuConfig::new("t", 1);
        config.set_start_slot(2);
        config.set_exit_slot(5);
        let mut f = Paginated::new(items("ABCDE"), None);
        f.format(&grid, &config, &SkipPredicate::None);
        assert_eq!(glyphs(&grid), vec![(2, 'A'), (3, 'B'), (4, 'C')]);
        assert_eq!(f.size(), 5);
    }

    #[test]
    fn second_page_is_laid_out_from_start() {
        let grid = MemoryGrid::new(9, "t");
        let mut config = MenuConfig::new("t", 1);
        config.set_page_size(2);
        config.set_current_page(2);
        let mut f = Paginated::new(items("ABCDE"), None);
        f.format(&grid, &config, &SkipPredicate::None);
        assert_eq!(glyphs(&grid), vec![(0, 'C'), (1, 'D')]);
    }

    #[test]
    fn format_resets_occupied_slots() {
        let grid = MemoryGrid::new(9, "t");
        let mut config = MenuConfig::new("t", 1);
        config.set_page_size(3);
        let mut f = Paginated::new(items("ABCD"), None);
        f.format(&grid, &config, &SkipPredicate::None);
        assert_eq!(f.slots().collect::<Vec<_>>(), vec![0, 1, 2]);
        config.set_current_page(2);
        f.format(&grid, &config, &SkipPredicate::None);
        assert_eq!(f.slots().collect::<Vec<_>>(), vec![0]);
        assert!(!f.is_valid(1));
    }

    #[test]
    fn single_slot_ignores_skip_and_exit() {
        let grid = MemoryGrid::new(9, "t");
        let config = MenuConfig::new("t", 1);
        let mut f = Format::Single(SingleSlot::<Item>::new(8, Content::Item(Item::new('X')), None));
        f.format(&grid, &config, &SkipPredicate::slots([8]));
        assert_eq!(grid.item(8).map(|i| i.glyph), Some('X'));
        assert!(f.is_valid(8));
        assert!(!f.is_valid(7));
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Reward {
        name: &'static str,
    }

    impl MenuItem for Reward {
        fn display<G: GridHandle>(&self, grid: &G, properties: &Properties) -> Item {
            let marker = properties.get_or("marker", '?');
            Item::new(marker).with_name(format!("{} of {}", self.name, grid.size()))
        }
    }

    #[test]
    fn entries_display_with_properties_and_hand_back_the_entry() {
        let grid = MemoryGrid::new(9, "t");
        let mut config = MenuConfig::new("t", 1);
        config.properties_mut().set("marker", '!');
        config.set_page_size(1);
        config.set_current_page(2);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let handler: Handler<Reward> = Rc::new(move |e: &ClickEvent<'_, Reward>| {
            sink.borrow_mut().push((e.slot(), e.entry().cloned(), e.page()));
        });
        let mut f = Paginated::new(
            vec![
                Content::Entry(Reward { name: "sword" }),
                Content::Entry(Reward { name: "shield" }),
            ],
            Some(handler),
        );
        f.format(&grid, &config, &SkipPredicate::None);
        let shown = grid.item(0).map(|i| (i.glyph, i.name));
        assert_eq!(shown, Some(('!', "shield of 9".to_string())));

        assert_eq!(f.accept(&grid, &RawClick::left(0), 0, &config), None);
        assert_eq!(f.accept(&grid, &RawClick::left(3), 3, &config), None);
        assert_eq!(
            *seen.borrow(),
            vec![(0, Some(Reward { name: "shield" }), 2)]
        );
    }

    #[test]
    fn handler_requests_are_returned() {
        let grid = MemoryGrid::new(9, "t");
        let config = MenuConfig::new("t", 1);
        let handler: Handler<Item> = Rc::new(|e: &ClickEvent<'_, Item>| {
            e.request(PageRequest::Refresh);
            e.request(PageRequest::Goto(3));
        });
        let f = SingleSlot::new(4, Content::Item(Item::new('X')), Some(handler));
        assert_eq!(f.accept(&grid, &RawClick::left(4), &config), Some(PageRequest::Goto(3)));

        let silent = SingleSlot::<Item>::new(4, Content::Item(Item::new('X')), None);
        assert_eq!(silent.accept(&grid, &RawClick::left(4), &config), None);
    }

    #[test]
    fn clicked_item_falls_back_to_grid_content() {
        let grid = MemoryGrid::new(9, "t");
        let config = MenuConfig::new("t", 1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let handler: Handler<Item> = Rc::new(move |e: &ClickEvent<'_, Item>| {
            sink.borrow_mut().push(e.item().map(|i| i.glyph));
        });
        let f = SingleSlot::new(4, Content::Item(Item::new('X')), Some(handler));
        f.format(&grid, &config);

        f.accept(&grid, &RawClick::left(4), &config);
        f.accept(&grid, &RawClick::left(4).with_item(Some(Item::new('H'))), &config);
        grid.clear();
        f.accept(&grid, &RawClick::left(4), &config);
        assert_eq!(*seen.borrow(), vec![Some('X'), Some('H'), None]);
    }
}
