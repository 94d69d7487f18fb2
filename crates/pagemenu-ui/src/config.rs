//! Menu controller configuration.

/// Behaviour switches for [`MenuController`](crate::MenuController).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuConfig {
    /// Animate the menu strip when an item is tapped.
    pub animate_menu_on_tap: bool,

    /// Animate the page scroll when an item is tapped.
    pub animate_page_on_tap: bool,

    /// Only follow the pages with the menu during a live drag. Programmatic
    /// and decelerating scrolls leave the menu where it is.
    pub sync_menu_while_dragging_only: bool,

    /// Snap the menu to the current page's item when scrolling settles.
    pub snap_menu_on_settle: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            animate_menu_on_tap: true,
            animate_page_on_tap: true,
            sync_menu_while_dragging_only: true,
            snap_menu_on_settle: true,
        }
    }
}

impl MenuConfig {
    /// Tap navigation jumps without animating either surface.
    pub fn without_tap_animation() -> Self {
        Self {
            animate_menu_on_tap: false,
            animate_page_on_tap: false,
            ..Self::default()
        }
    }
}
