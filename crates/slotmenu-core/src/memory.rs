//! An in-memory host: [`MemoryHost`], [`MemoryGrid`], [`MemoryViewer`].
//!
//! A `MemoryGrid` is a *handle* to a shared slot buffer. Cloning a
//! `MemoryGrid` yields another handle to the **same** storage, which is
//! exactly how host grid handles behave. Used by tests and by the terminal
//! demos.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::geom::COLUMNS;
use crate::host::{GridHandle, Host, HostError, Viewer};
use crate::item::Item;

// ---------------------------------------------------------------------------
// Internal shared buffer
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct GridBuffer {
    slots: Vec<Option<Item>>,
    title: String,
    viewers: Vec<MemoryViewer>,
}

impl GridBuffer {
    fn new(size: usize, title: &str) -> Self {
        Self {
            slots: vec![None; size],
            title: title.to_string(),
            viewers: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryGrid
// ---------------------------------------------------------------------------

/// A grid of optional [`Item`]s backed by shared storage.
#[derive(Debug, Clone)]
pub struct MemoryGrid {
    buffer: Rc<RefCell<GridBuffer>>,
}

impl MemoryGrid {
    /// Create a grid of `size` empty slots.
    pub fn new(size: usize, title: &str) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(GridBuffer::new(size, title))),
        }
    }

    /// Copy of every slot, in slot order.
    pub fn snapshot(&self) -> Vec<Option<Item>> {
        self.buffer.borrow().slots.clone()
    }

    /// Slots that currently hold an item, in slot order.
    pub fn occupied(&self) -> Vec<usize> {
        self.buffer
            .borrow()
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|_| i))
            .collect()
    }

    /// Whether `other` is a handle to the same grid.
    #[inline]
    pub fn same_grid(&self, other: &MemoryGrid) -> bool {
        Rc::ptr_eq(&self.buffer, &other.buffer)
    }

    fn downgrade(&self) -> Weak<RefCell<GridBuffer>> {
        Rc::downgrade(&self.buffer)
    }

    fn remove_viewer(&self, viewer: &MemoryViewer) {
        self.buffer
            .borrow_mut()
            .viewers
            .retain(|v| !v.same_viewer(viewer));
    }
}

impl PartialEq for MemoryGrid {
    fn eq(&self, other: &Self) -> bool {
        self.same_grid(other)
    }
}

impl GridHandle for MemoryGrid {
    type Viewer = MemoryViewer;

    fn clear(&self) {
        self.buffer.borrow_mut().slots.fill(None);
    }

    fn set_item(&self, slot: usize, item: Option<Item>) {
        let mut buf = self.buffer.borrow_mut();
        if let Some(s) = buf.slots.get_mut(slot) {
            *s = item;
        }
    }

    fn item(&self, slot: usize) -> Option<Item> {
        self.buffer.borrow().slots.get(slot).cloned().flatten()
    }

    fn size(&self) -> usize {
        self.buffer.borrow().slots.len()
    }

    fn title(&self) -> String {
        self.buffer.borrow().title.clone()
    }

    fn viewers(&self) -> Vec<MemoryViewer> {
        self.buffer.borrow().viewers.clone()
    }
}

// ---------------------------------------------------------------------------
// MemoryViewer
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct ViewerState {
    name: String,
    open: Option<Weak<RefCell<GridBuffer>>>,
    refreshes: usize,
}

/// A named viewer. Clones refer to the same viewer.
#[derive(Debug, Clone)]
pub struct MemoryViewer {
    state: Rc<RefCell<ViewerState>>,
}

impl MemoryViewer {
    pub fn new(name: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewerState {
                name: name.to_string(),
                open: None,
                refreshes: 0,
            })),
        }
    }

    pub fn name(&self) -> String {
        self.state.borrow().name.clone()
    }

    /// The grid this viewer is looking at, if it still exists.
    pub fn open_grid_handle(&self) -> Option<MemoryGrid> {
        let state = self.state.borrow();
        let buffer = state.open.as_ref()?.upgrade()?;
        Some(MemoryGrid { buffer })
    }

    /// How many times [`refresh_display`](Viewer::refresh_display) was called.
    pub fn refresh_count(&self) -> usize {
        self.state.borrow().refreshes
    }

    /// Close whatever grid is open.
    pub fn close(&self) {
        if let Some(grid) = self.open_grid_handle() {
            grid.remove_viewer(self);
        }
        self.state.borrow_mut().open = None;
    }

    #[inline]
    pub fn same_viewer(&self, other: &MemoryViewer) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Viewer for MemoryViewer {
    type Grid = MemoryGrid;

    fn open_grid(&self, grid: &MemoryGrid) {
        self.close();
        grid.buffer.borrow_mut().viewers.push(self.clone());
        self.state.borrow_mut().open = Some(grid.downgrade());
    }

    fn refresh_display(&self) {
        self.state.borrow_mut().refreshes += 1;
    }
}

// ---------------------------------------------------------------------------
// MemoryHost
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct HostState {
    enabled: Cell<bool>,
    grid_limit: Cell<Option<usize>>,
    created: Cell<usize>,
}

/// A host that keeps every grid in memory. Clones share state.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    state: Rc<HostState>,
}

impl MemoryHost {
    /// Create an enabled host with no grid limit.
    pub fn new() -> Self {
        Self {
            state: Rc::new(HostState {
                enabled: Cell::new(true),
                grid_limit: Cell::new(None),
                created: Cell::new(0),
            }),
        }
    }

    /// Create a host whose binding layer is not initialised.
    pub fn disabled() -> Self {
        let host = Self::new();
        host.set_enabled(false);
        host
    }

    /// Refuse to create more than `limit` grids in total.
    pub fn with_grid_limit(self, limit: usize) -> Self {
        self.state.grid_limit.set(Some(limit));
        self
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.state.enabled.set(enabled);
    }

    /// Number of grids created so far.
    pub fn grids_created(&self) -> usize {
        self.state.created.get()
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for MemoryHost {
    type Grid = MemoryGrid;

    fn is_enabled(&self) -> bool {
        self.state.enabled.get()
    }

    fn create_grid(&self, size: usize, title: &str) -> Result<MemoryGrid, HostError> {
        if !self.is_enabled() {
            return Err(HostError::Disabled);
        }
        if size == 0 || size % COLUMNS != 0 {
            return Err(HostError::InvalidSize(size));
        }
        if let Some(limit) = self.state.grid_limit.get() {
            if self.grids_created() >= limit {
                return Err(HostError::GridLimit(limit));
            }
        }
        self.state.created.set(self.grids_created() + 1);
        Ok(MemoryGrid::new(size, title))
    }
}

// ---------------------------------------------------------------------------
// SlotChange / compute_changes
// ---------------------------------------------------------------------------

/// A single slot that changed between two snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotChange {
    pub slot: usize,
    pub item: Option<Item>,
}

/// Compute the slots of `curr` that differ from `prev`.
///
/// Slots past the end of `prev` always count as changed.
pub fn compute_changes(prev: &[Option<Item>], curr: &[Option<Item>]) -> Vec<SlotChange> {
    curr.iter()
        .enumerate()
        .filter(|(i, item)| prev.get(*i) != Some(*item))
        .map(|(slot, item)| SlotChange {
            slot,
            item: item.clone(),
        })
        .collect()
}
