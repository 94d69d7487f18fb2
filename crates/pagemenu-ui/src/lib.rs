//! Paged content with a synchronized scrollable menu strip
//!
//! [`MenuController`] composes a [`PageLifecycleController`] with a
//! [`MenuSyncEngine`] and keeps a strip of menu items scrolled in step with
//! the pages.

mod config;
mod menu_controller;
mod menu_item;

pub use config::MenuConfig;
pub use menu_controller::MenuController;
pub use menu_item::{MenuHost, MenuItem, MenuItemProvider};

pub use pagemenu_foundation::{
    LifecycleEvent, MenuLayout, MenuSyncEngine, PageContentProvider, PageHost,
    PageLifecycleController, PageLifecycleDelegate, PagingError,
};

pub mod prelude {
    pub use crate::config::MenuConfig;
    pub use crate::menu_controller::MenuController;
    pub use crate::menu_item::{MenuHost, MenuItem, MenuItemProvider};
    pub use pagemenu_foundation::prelude::*;
}
