//! Menu strip geometry and scroll synchronization.

mod layout;
mod sync;

pub use layout::MenuLayout;
pub use sync::{centered_offset, interpolated_offset, MenuSyncEngine};
