//! Paginated, click-reactive slot menus.
//!
//! A [`MenuBuilder`] collects formats (pinned items and paginated lists),
//! navigation buttons, a skip predicate and a property bag, lays them out
//! into a host grid, and routes the host's clicks back to handlers.

mod builder;
mod button;
mod config;
mod error;
mod event;
mod format;
mod paginate;
mod property;
mod skip;

pub use builder::{Dispatch, MenuBuilder};
pub use button::{ButtonKind, Buttons, NavButton};
pub use config::MenuConfig;
pub use error::MenuError;
pub use event::{ClickEvent, Handler, PageRequest};
pub use format::{Content, Format, MenuItem, Paginated, SingleSlot};
pub use paginate::{page, page_count, page_range};
pub use property::Properties;
pub use skip::{SkipPredicate, border_slot_count, is_border};
