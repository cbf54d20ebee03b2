use std::cell::Cell;
use std::rc::Rc;

use slotmenu_core::{ClickKind, Item, RawClick};

use crate::Properties;

/// A click handler bound to a format.
pub type Handler<T> = Rc<dyn Fn(&ClickEvent<'_, T>)>;

/// Follow-up a handler asks the builder to perform once it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRequest {
    /// Jump to the given 1-based page and re-render.
    Goto(usize),
    /// Re-render on the current page.
    Refresh,
}

/// What a handler sees when one of its slots is clicked.
///
/// Snapshots are read-only apart from [`request`](ClickEvent::request):
/// handlers cannot borrow the builder while it dispatches, so page changes
/// are queued and applied right after the handler returns.
#[derive(Debug)]
pub struct ClickEvent<'a, T> {
    raw: &'a RawClick,
    slot: usize,
    item: Option<Item>,
    properties: &'a Properties,
    entry: Option<&'a T>,
    page: usize,
    request: Cell<Option<PageRequest>>,
}

impl<'a, T> ClickEvent<'a, T> {
    pub(crate) fn new(
        raw: &'a RawClick,
        slot: usize,
        item: Option<Item>,
        properties: &'a Properties,
        entry: Option<&'a T>,
        page: usize,
    ) -> Self {
        Self {
            raw,
            slot,
            item,
            properties,
            entry,
            page,
            request: Cell::new(None),
        }
    }

    /// The click exactly as the host delivered it.
    pub fn raw(&self) -> &RawClick {
        self.raw
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn kind(&self) -> ClickKind {
        self.raw.kind
    }

    /// The item that was in the slot when it was clicked: the one the host
    /// reported, or the grid's content of the slot when the host sent none.
    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    pub fn properties(&self) -> &Properties {
        self.properties
    }

    /// The logical entry rendered in the clicked slot, for entry-bound formats.
    pub fn entry(&self) -> Option<&T> {
        self.entry
    }

    /// The page that was showing when the click happened.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Ask the builder to change page or re-render after this handler.
    /// The last request wins.
    pub fn request(&self, request: PageRequest) {
        self.request.set(Some(request));
    }

    pub(crate) fn take_request(&self) -> Option<PageRequest> {
        self.request.take()
    }
}
