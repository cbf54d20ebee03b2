//! **slotmenu-core**: host interface and core types for slot menus.
//!
//! This crate provides the types shared across the *slotmenu* workspace:
//! display items and their styles, slot geometry, raw click input,
//! colour-coded text, the [`Host`] binding traits, and an in-memory host.

pub mod geom;
pub mod host;
pub mod item;
pub mod memory;
pub mod messages;
pub mod style;
pub mod text;

pub use geom::{COLUMNS, SlotPos, grid_size};
pub use host::{GridHandle, Host, HostError, Viewer, ViewerOf};
pub use item::Item;
pub use memory::{MemoryGrid, MemoryHost, MemoryViewer, SlotChange, compute_changes};
pub use messages::{ClickKind, RawClick};
pub use style::{AttrMask, Color, Style};
