//! Collaborator contracts consumed by [`PageLifecycleController`].
//!
//! [`PageLifecycleController`]: super::PageLifecycleController

use pagemenu_ui_graphics::{Rect, Size};

/// Supplies the page count and produces content for a page on demand.
///
/// `content` is only ever called for indices in `0..page_count()` and must
/// return a value for each of them. A host that wants asynchronous loading
/// returns a placeholder here and fills it in later.
pub trait PageContentProvider {
    type Content;

    fn page_count(&self) -> usize;

    fn content(&mut self, index: usize) -> Self::Content;
}

/// The view surface hosting the pages.
///
/// The host owns layout. The controller only tells it where content goes
/// and where to scroll.
pub trait PageHost<C> {
    /// Size of one page. The scroll viewport is exactly one page wide.
    fn viewport_size(&self) -> Size;

    /// Adds `content` to the view hierarchy at `frame`.
    fn attach_content(&mut self, index: usize, content: &C, frame: Rect);

    /// Removes `content` from the view hierarchy.
    fn detach_content(&mut self, index: usize, content: &C);

    /// Scrolls the page surface to a horizontal offset.
    fn set_content_offset(&mut self, offset: f32, animated: bool);

    /// Total scrollable size of all pages side by side.
    fn set_content_size(&mut self, size: Size) {
        let _ = size;
    }

    /// Moves already attached content to a new frame after a resize.
    fn update_frame(&mut self, index: usize, content: &C, frame: Rect) {
        let _ = (index, content, frame);
    }
}
