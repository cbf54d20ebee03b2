//! The host binding: [`Host`], [`GridHandle`], [`Viewer`].
//!
//! A host is whatever runtime actually shows grids to players. slotmenu only
//! ever talks to it through these traits.

use thiserror::Error;

use crate::item::Item;

/// Errors reported by a host binding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("host binding is not enabled")]
    Disabled,

    #[error("invalid grid size: {0} (must be a positive multiple of 9)")]
    InvalidSize(usize),

    #[error("host refused to create more than {0} grids")]
    GridLimit(usize),
}

/// A player (or any other session) that can look at a grid.
pub trait Viewer {
    type Grid;

    /// Show `grid` to this viewer, replacing whatever it was looking at.
    fn open_grid(&self, grid: &Self::Grid);

    /// Force the viewer's client to redraw its open grid.
    fn refresh_display(&self);
}

/// A handle to a host-owned grid. Cloning yields another handle to the
/// same grid.
pub trait GridHandle: Clone {
    type Viewer: Viewer<Grid = Self>;

    /// Empty every slot.
    fn clear(&self);

    /// Write `item` into `slot` (`None` empties it). Out-of-range slots are
    /// ignored.
    fn set_item(&self, slot: usize, item: Option<Item>);

    /// The item currently in `slot`.
    fn item(&self, slot: usize) -> Option<Item>;

    /// Total slot count.
    fn size(&self) -> usize;

    /// The title the grid was created with (already colour-translated).
    fn title(&self) -> String;

    /// Viewers currently looking at this grid.
    fn viewers(&self) -> Vec<Self::Viewer>;
}

/// The host runtime.
pub trait Host {
    type Grid: GridHandle;

    /// Whether the binding layer has been initialised.
    fn is_enabled(&self) -> bool;

    /// Create an empty grid of `size` slots titled `title`.
    fn create_grid(&self, size: usize, title: &str) -> Result<Self::Grid, HostError>;
}

/// The viewer type of a host.
pub type ViewerOf<H> = <<H as Host>::Grid as GridHandle>::Viewer;
