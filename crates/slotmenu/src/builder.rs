use std::rc::Rc;

use slotmenu_core::{GridHandle, Host, Item, RawClick, Viewer, ViewerOf};

use crate::event::{ClickEvent, Handler, PageRequest};
use crate::format::{Content, Format, MenuItem, Paginated, SingleSlot};
use crate::{ButtonKind, MenuConfig, MenuError, Properties, SkipPredicate};

/// How [`MenuBuilder::on_click`] routed a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// A navigation button was clicked; the menu moved to `page`.
    Navigation { kind: ButtonKind, page: usize },
    /// The format at index `format` (insertion order) received the click.
    Entry { format: usize, slot: usize },
    /// Nothing claims the slot.
    Unclaimed,
}

/// A fluent builder for one paginated, clickable menu.
///
/// `T` is the logical entry type for `with_object(s)`; menus that only show
/// raw items use the default.
pub struct MenuBuilder<H: Host, T = Item> {
    host: H,
    grid: H::Grid,
    config: MenuConfig,
    formats: Vec<Format<T>>,
}

impl<H: Host> MenuBuilder<H, Item> {
    /// Create a builder for a `rows`-row menu of raw items.
    pub fn new(host: H, name: &str, rows: i32) -> Result<Self, MenuError> {
        Self::create(host, name, rows)
    }
}

impl<H: Host, T: MenuItem + 'static> MenuBuilder<H, T> {
    /// Create a builder for a `rows`-row menu (clamped to 1..=6) titled
    /// `name`, with `&` colour codes translated.
    ///
    /// Fails with [`MenuError::Configuration`] when the host binding is not
    /// enabled or refuses to create the grid.
    pub fn create(host: H, name: &str, rows: i32) -> Result<Self, MenuError> {
        if !host.is_enabled() {
            return Err(MenuError::Configuration(
                "the host binding must be enabled".to_string(),
            ));
        }
        let config = MenuConfig::new(name, rows);
        let grid = host
            .create_grid(config.size(), config.title())
            .map_err(|e| MenuError::Configuration(format!("cannot create grid: {e}")))?;
        log::debug!("created menu {:?} with {} slots", config.name(), config.size());
        Ok(Self {
            host,
            grid,
            config,
            formats: Vec::new(),
        })
    }

    // -- configuration --

    /// Number of entries per page; 0 disables pagination.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.config.set_page_size(size);
        self
    }

    /// First slot paginated content may use.
    pub fn with_start(mut self, slot: usize) -> Self {
        self.config.set_start_slot(slot);
        self
    }

    /// Slot at which paginated placement stops (exclusive), clamped to the
    /// last slot.
    pub fn with_exit(mut self, slot: usize) -> Self {
        self.config.set_exit_slot(slot);
        self
    }

    /// Keep paginated content out of these slots.
    pub fn with_skip_slots(mut self, slots: impl IntoIterator<Item = usize>) -> Self {
        self.config.set_skip(SkipPredicate::slots(slots));
        self
    }

    /// Keep paginated content out of every slot for which `skip` is true.
    pub fn with_skip(mut self, skip: impl Fn(usize) -> bool + 'static) -> Self {
        self.config.set_skip(SkipPredicate::custom(skip));
        self
    }

    pub fn with_skip_predicate(mut self, skip: SkipPredicate) -> Self {
        self.config.set_skip(skip);
        self
    }

    /// Pin `item` to `slot`, calling `on_click` when it is clicked.
    pub fn with_item<F>(self, slot: usize, item: Item, on_click: F) -> Self
    where
        F: Fn(&ClickEvent<'_, T>) + 'static,
    {
        self.push_single(slot, Content::Item(item), Some(Rc::new(on_click)))
    }

    /// Pin `item` to `slot` with no click handler.
    pub fn with_display_item(self, slot: usize, item: Item) -> Self {
        self.push_single(slot, Content::Item(item), None)
    }

    /// Lay `items` out over the free slots, page by page.
    pub fn with_items<F>(self, items: Vec<Item>, on_click: F) -> Self
    where
        F: Fn(&ClickEvent<'_, T>) + 'static,
    {
        let content = items.into_iter().map(Content::Item).collect();
        self.push_paginated(content, Some(Rc::new(on_click)))
    }

    pub fn with_display_items(self, items: Vec<Item>) -> Self {
        let content = items.into_iter().map(Content::Item).collect();
        self.push_paginated(content, None)
    }

    /// Pin a logical entry to `slot`; the handler receives it back.
    pub fn with_object<F>(self, slot: usize, entry: T, on_click: F) -> Self
    where
        F: Fn(&ClickEvent<'_, T>) + 'static,
    {
        self.push_single(slot, Content::Entry(entry), Some(Rc::new(on_click)))
    }

    pub fn with_display_object(self, slot: usize, entry: T) -> Self {
        self.push_single(slot, Content::Entry(entry), None)
    }

    /// Lay logical entries out page by page; the handler receives the entry
    /// shown in the clicked slot.
    pub fn with_objects<F>(self, entries: Vec<T>, on_click: F) -> Self
    where
        F: Fn(&ClickEvent<'_, T>) + 'static,
    {
        let content = entries.into_iter().map(Content::Entry).collect();
        self.push_paginated(content, Some(Rc::new(on_click)))
    }

    pub fn with_display_objects(self, entries: Vec<T>) -> Self {
        let content = entries.into_iter().map(Content::Entry).collect();
        self.push_paginated(content, None)
    }

    /// Configure a navigation button. Registering a kind twice replaces it.
    pub fn with_button(mut self, kind: ButtonKind, slot: usize, item: Item) -> Self {
        if slot >= self.config.size() {
            log::warn!("ignoring {kind:?} button on slot {slot}: menu has {} slots", self.config.size());
            return self;
        }
        self.config.buttons_mut().set(kind, slot, item);
        self
    }

    pub fn with_property<V: std::any::Any>(mut self, key: impl Into<String>, value: V) -> Self {
        self.config.properties_mut().set(key, value);
        self
    }

    /// Replace the whole property bag.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.config.set_properties(properties);
        self
    }

    fn push_single(mut self, slot: usize, content: Content<T>, handler: Option<Handler<T>>) -> Self {
        if slot >= self.config.size() {
            log::warn!("ignoring item on slot {slot}: menu has {} slots", self.config.size());
            return self;
        }
        self.formats
            .push(Format::Single(SingleSlot::new(slot, content, handler)));
        self
    }

    fn push_paginated(mut self, content: Vec<Content<T>>, handler: Option<Handler<T>>) -> Self {
        self.formats
            .push(Format::Paginated(Paginated::new(content, handler)));
        self
    }

    // -- accessors --

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn grid(&self) -> &H::Grid {
        &self.grid
    }

    pub fn current_page(&self) -> usize {
        self.config.current_page()
    }

    /// Move to `page` (at least 1). Takes effect on the next render.
    pub fn set_page(&mut self, page: usize) {
        self.config.set_current_page(page);
    }

    pub fn properties(&self) -> &Properties {
        self.config.properties()
    }

    pub fn properties_mut(&mut self) -> &mut Properties {
        self.config.properties_mut()
    }

    pub fn format_count(&self) -> usize {
        self.formats.len()
    }

    // -- lifecycle --

    /// Clear the grid and lay every format out again, in insertion order.
    /// Navigation buttons are drawn right after each paginated format.
    pub fn render(&mut self) -> &mut Self {
        self.grid.clear();
        for format in &mut self.formats {
            format.format(&self.grid, &self.config, self.config.skip());
            if let Format::Paginated(paginated) = format {
                self.config.buttons().draw(
                    &self.grid,
                    self.config.current_page(),
                    self.config.page_size(),
                    paginated.size(),
                );
            }
        }
        log::trace!(
            "rendered menu {:?} page {} ({} formats)",
            self.config.name(),
            self.config.current_page(),
            self.formats.len()
        );
        self
    }

    /// Render, show the grid to `viewer`, and refresh its display.
    pub fn open(&mut self, viewer: &ViewerOf<H>) -> &mut Self {
        self.render();
        viewer.open_grid(&self.grid);
        viewer.refresh_display();
        log::debug!("opened menu {:?}", self.config.name());
        self
    }

    /// Render once and show the grid to every viewer.
    pub fn build(&mut self, viewers: &[ViewerOf<H>]) -> H::Grid {
        self.render();
        for viewer in viewers {
            viewer.open_grid(&self.grid);
        }
        log::debug!(
            "built menu {:?} for {} viewers",
            self.config.name(),
            viewers.len()
        );
        self.grid.clone()
    }

    /// Work out who owns a click without acting on it.
    pub fn resolve(&self, raw: &RawClick) -> Dispatch {
        let Some(slot) = raw.slot_in(self.config.size()) else {
            return Dispatch::Unclaimed;
        };
        if let Some(kind) = self.config.buttons().kind_at(slot) {
            let page = kind.apply(self.config.current_page());
            return Dispatch::Navigation { kind, page };
        }
        self.formats
            .iter()
            .position(|f| f.is_valid(slot))
            .map_or(Dispatch::Unclaimed, |format| Dispatch::Entry { format, slot })
    }

    /// Route a click from the host: navigation buttons change page and
    /// re-render, otherwise the first format claiming the slot handles it.
    pub fn on_click(&mut self, raw: &RawClick) -> Dispatch {
        let dispatch = self.resolve(raw);
        match dispatch {
            Dispatch::Navigation { kind, page } => {
                log::debug!("{kind:?} clicked: page {} -> {page}", self.config.current_page());
                self.config.set_current_page(page);
                self.update();
            }
            Dispatch::Entry { format, slot } => {
                log::trace!("slot {slot} handled by format {format}");
                let request = self.formats[format].accept(&self.grid, raw, slot, &self.config);
                if let Some(request) = request {
                    self.apply(request);
                }
            }
            Dispatch::Unclaimed => {
                log::trace!("unclaimed click on raw slot {}", raw.raw_slot);
            }
        }
        dispatch
    }

    fn apply(&mut self, request: PageRequest) {
        if let PageRequest::Goto(page) = request {
            self.config.set_current_page(page);
        }
        self.update();
    }

    /// Re-render and push the result to everyone looking at the grid.
    fn update(&mut self) {
        self.render();
        for viewer in self.grid.viewers() {
            viewer.refresh_display();
        }
    }
}

impl<H: Host + Clone, T: MenuItem + 'static> MenuBuilder<H, T> {
    /// An independent copy of this menu backed by a fresh grid.
    ///
    /// Copied: every config value, the property bag (values shared), the
    /// button map, and the format list. Format entry lists and handlers are
    /// shared; each copy tracks its own occupied slots. Fails with
    /// [`MenuError::Clone`] when the host cannot create the grid; `self` is
    /// left untouched.
    pub fn try_clone(&self) -> Result<Self, MenuError> {
        let grid = self
            .host
            .create_grid(self.grid.size(), &self.grid.title())
            .map_err(MenuError::Clone)?;
        Ok(Self {
            host: self.host.clone(),
            grid,
            config: self.config.clone(),
            formats: self.formats.clone(),
        })
    }
}
