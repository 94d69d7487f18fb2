//! Menu collaborator contracts.

use pagemenu_ui_graphics::{Rect, Size};

/// A selectable element of the menu strip, one per page.
pub trait MenuItem {
    fn intrinsic_size(&self) -> Size;
}

/// Produces the menu item for each page on reload.
pub trait MenuItemProvider {
    type Item: MenuItem;

    fn menu_item(&mut self, index: usize) -> Self::Item;
}

/// The horizontally scrolling surface holding the menu items.
pub trait MenuHost<M> {
    fn viewport_width(&self) -> f32;

    fn attach_item(&mut self, index: usize, item: &M, frame: Rect);

    fn detach_item(&mut self, index: usize, item: &M);

    /// Size of the whole strip. The host sizes its own height from it.
    fn set_content_size(&mut self, size: Size);

    fn set_content_offset(&mut self, offset: f32, animated: bool);
}
