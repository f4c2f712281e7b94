//! Role-gated navigation menu: catalog, resolution and active-item lookup.

pub mod active;
pub mod catalog;
pub mod item;
pub mod resolve;

pub use active::{active_trail, find_active, is_active, ExpandedGroups};
pub use catalog::{MenuCatalog, MenuError};
pub use item::MenuItem;
pub use resolve::resolve_menu;
