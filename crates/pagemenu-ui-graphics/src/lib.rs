//! Pure geometry for PageMenu
//!
//! Page frames, menu item rectangles and viewport sizes are all expressed
//! with the primitives in this crate. Nothing here knows about pages.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
