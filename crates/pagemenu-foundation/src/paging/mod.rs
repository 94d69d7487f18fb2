//! Paged content: slot storage, lifecycle state machine and host contracts.

mod delegate;
mod lifecycle;
mod provider;
mod store;

pub use delegate::{DelegateSlot, LifecycleEvent, PageLifecycleDelegate};
pub use lifecycle::PageLifecycleController;
pub use provider::{PageContentProvider, PageHost};
pub use store::{PageSlot, PagingStore};
