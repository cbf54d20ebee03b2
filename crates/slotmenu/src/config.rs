use slotmenu_core::grid_size;
use slotmenu_core::text::translate_color_codes;

use crate::{Buttons, Properties, SkipPredicate};

/// Everything a menu knows apart from its formats.
///
/// Owned by one [`MenuBuilder`](crate::MenuBuilder) and changed only through
/// its `with_*` methods and page navigation.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    name: String,
    title: String,
    size: usize,
    start_slot: usize,
    exit_slot: usize,
    page_size: usize,
    current_page: usize,
    skip: SkipPredicate,
    buttons: Buttons,
    properties: Properties,
}

impl MenuConfig {
    /// A config for a `rows`-row grid (clamped to 1..=6 rows). Content is
    /// placed from slot 0 up to, not including, the last slot.
    pub fn new(name: &str, rows: i32) -> Self {
        let size = grid_size(rows);
        Self {
            name: name.to_string(),
            title: translate_color_codes('&', name),
            size,
            start_slot: 0,
            exit_slot: size - 1,
            page_size: 0,
            current_page: 1,
            skip: SkipPredicate::None,
            buttons: Buttons::default(),
            properties: Properties::new(),
        }
    }

    /// The name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name with `&` colour codes translated.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> usize {
        slotmenu_core::geom::rows_of(self.size)
    }

    pub fn start_slot(&self) -> usize {
        self.start_slot
    }

    /// Exclusive upper bound for paginated placement.
    pub fn exit_slot(&self) -> usize {
        self.exit_slot
    }

    /// Entries per page; 0 means unpaginated.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn skip(&self) -> &SkipPredicate {
        &self.skip
    }

    pub fn buttons(&self) -> &Buttons {
        &self.buttons
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    // -- crate-private setters, upholding the invariants --

    pub(crate) fn set_start_slot(&mut self, slot: usize) {
        self.start_slot = slot;
    }

    pub(crate) fn set_exit_slot(&mut self, slot: usize) {
        self.exit_slot = slot.min(self.size - 1);
    }

    pub(crate) fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
    }

    pub(crate) fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub(crate) fn set_skip(&mut self, skip: SkipPredicate) {
        self.skip = skip;
    }

    pub(crate) fn buttons_mut(&mut self) -> &mut Buttons {
        &mut self.buttons
    }

    pub(crate) fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    pub(crate) fn set_properties(&mut self, properties: Properties) {
        self.properties = properties;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = MenuConfig::new("&aShop", 3);
        assert_eq!(c.size(), 27);
        assert_eq!(c.rows(), 3);
        assert_eq!(c.title(), "§aShop");
        assert_eq!(c.name(), "&aShop");
        assert_eq!(c.start_slot(), 0);
        assert_eq!(c.exit_slot(), 26);
        assert_eq!(c.page_size(), 0);
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn setters_keep_invariants() {
        let mut c = MenuConfig::new("x", 9);
        assert_eq!(c.size(), 54);
        c.set_exit_slot(100);
        assert_eq!(c.exit_slot(), 53);
        c.set_current_page(0);
        assert_eq!(c.current_page(), 1);
    }
}
