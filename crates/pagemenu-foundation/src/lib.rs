//! Lazy page lifecycle and menu synchronization for PageMenu
//!
//! The crate is UI-agnostic. A host owns the actual views and forwards
//! scroll events; this crate decides which pages hold content and where
//! the menu strip should be scrolled.

mod error;
pub mod menu;
pub mod paging;
mod scroll_position;

pub use error::*;
pub use menu::*;
pub use paging::*;
pub use scroll_position::*;

pub mod prelude {
    pub use crate::error::PagingError;
    pub use crate::menu::{MenuLayout, MenuSyncEngine};
    pub use crate::paging::{
        LifecycleEvent, PageContentProvider, PageHost, PageLifecycleController,
        PageLifecycleDelegate, PagingStore,
    };
    pub use crate::scroll_position::ScrollPosition;
}
