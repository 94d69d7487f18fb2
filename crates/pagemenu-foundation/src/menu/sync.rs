//! Menu scroll synchronization.
//!
//! Maps a page scroll position onto a menu strip offset that keeps the
//! matching item centered, interpolating linearly while a drag sits between
//! two pages.

use pagemenu_ui_graphics::Rect;

use super::layout::MenuLayout;
use crate::scroll_position::ScrollPosition;

/// Offset that centers item `index` in a viewport of `viewport_width`.
///
/// Clamped to `[0, content_width - viewport_width]`, or to 0 when the strip
/// is narrower than the viewport. Unknown indices resolve to 0.
pub fn centered_offset(
    index: usize,
    item_rects: &[Rect],
    viewport_width: f32,
    content_width: f32,
) -> f32 {
    let Some(rect) = item_rects.get(index) else {
        return 0.0;
    };
    let offset = rect.mid_x() - viewport_width / 2.0;
    let max_offset = (content_width - viewport_width).max(0.0);
    offset.min(max_offset).max(0.0)
}

/// Linear blend between the centered offsets of two adjacent items.
///
/// `progress` is clamped to `[0, 1]`. When both indices are equal, or the
/// right one is past the last item, the left item's centered offset is used.
pub fn interpolated_offset(
    left_index: usize,
    right_index: usize,
    progress: f32,
    item_rects: &[Rect],
    viewport_width: f32,
    content_width: f32,
) -> f32 {
    let left = centered_offset(left_index, item_rects, viewport_width, content_width);
    if left_index == right_index || right_index >= item_rects.len() {
        return left;
    }
    let right = centered_offset(right_index, item_rects, viewport_width, content_width);
    left + (right - left) * progress.clamp(0.0, 1.0)
}

/// Menu offset computations over the layout cached at reload time.
#[derive(Debug, Clone, Default)]
pub struct MenuSyncEngine {
    layout: MenuLayout,
}

impl MenuSyncEngine {
    pub fn new(layout: MenuLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn set_layout(&mut self, layout: MenuLayout) {
        self.layout = layout;
    }

    pub fn clear(&mut self) {
        self.layout = MenuLayout::new();
    }

    pub fn item_count(&self) -> usize {
        self.layout.item_count()
    }

    pub fn centered_offset(&self, index: usize, viewport_width: f32) -> f32 {
        centered_offset(
            index,
            self.layout.item_rects(),
            viewport_width,
            self.layout.content_width(),
        )
    }

    pub fn interpolated_offset(
        &self,
        left_index: usize,
        right_index: usize,
        progress: f32,
        viewport_width: f32,
    ) -> f32 {
        interpolated_offset(
            left_index,
            right_index,
            progress,
            self.layout.item_rects(),
            viewport_width,
            self.layout.content_width(),
        )
    }

    /// Menu offset for a resolved page scroll position.
    pub fn offset_for_position(&self, position: &ScrollPosition, viewport_width: f32) -> f32 {
        if position.is_settled_on_page() {
            return self.centered_offset(position.left_index, viewport_width);
        }
        self.interpolated_offset(
            position.left_index,
            position.right_index,
            position.progress,
            viewport_width,
        )
    }

    /// Menu offset for a raw page scroll offset, or `None` when there are
    /// no items or the page width is unusable.
    pub fn offset_for_page_scroll(
        &self,
        page_offset: f32,
        page_width: f32,
        menu_viewport_width: f32,
    ) -> Option<f32> {
        let position = ScrollPosition::resolve(page_offset, page_width, self.item_count())?;
        Some(self.offset_for_position(&position, menu_viewport_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagemenu_ui_graphics::Size;
    use proptest::prelude::*;

    fn strip(widths: &[f32]) -> MenuLayout {
        MenuLayout::from_item_sizes(widths.iter().map(|&w| Size::new(w, 44.0)))
    }

    #[test]
    fn centered_offset_clamps_at_leading_edge() {
        let rects = [Rect::new(100.0, 0.0, 50.0, 44.0)];
        // 100 - (300 - 50) / 2 = -25
        assert_eq!(centered_offset(0, &rects, 300.0, 1000.0), 0.0);
    }

    #[test]
    fn centered_offset_in_the_middle() {
        let rects = [Rect::new(500.0, 0.0, 100.0, 44.0)];
        assert_eq!(centered_offset(0, &rects, 300.0, 1000.0), 400.0);
    }

    #[test]
    fn centered_offset_clamps_at_trailing_edge() {
        let rects = [Rect::new(950.0, 0.0, 50.0, 44.0)];
        assert_eq!(centered_offset(0, &rects, 300.0, 1000.0), 700.0);
    }

    #[test]
    fn centered_offset_of_narrow_strip_is_zero() {
        let rects = [Rect::new(150.0, 0.0, 50.0, 44.0)];
        assert_eq!(centered_offset(0, &rects, 300.0, 200.0), 0.0);
    }

    #[test]
    fn centered_offset_of_unknown_item_is_zero() {
        assert_eq!(centered_offset(3, &[], 300.0, 1000.0), 0.0);
    }

    #[test]
    fn interpolation_endpoints() {
        let engine = MenuSyncEngine::new(strip(&[200.0; 6]));
        let left = engine.centered_offset(2, 300.0);
        let right = engine.centered_offset(3, 300.0);
        assert_eq!(engine.interpolated_offset(2, 3, 0.0, 300.0), left);
        assert_eq!(engine.interpolated_offset(2, 3, 1.0, 300.0), right);
        assert_eq!(engine.interpolated_offset(2, 3, 0.5, 300.0), (left + right) / 2.0);
    }

    #[test]
    fn equal_indices_do_not_interpolate() {
        let engine = MenuSyncEngine::new(strip(&[200.0; 6]));
        assert_eq!(
            engine.interpolated_offset(2, 2, 0.7, 300.0),
            engine.centered_offset(2, 300.0)
        );
    }

    #[test]
    fn right_index_past_the_end_uses_left_item() {
        let engine = MenuSyncEngine::new(strip(&[200.0; 3]));
        assert_eq!(
            engine.interpolated_offset(2, 3, 0.4, 300.0),
            engine.centered_offset(2, 300.0)
        );
    }

    #[test]
    fn offset_for_page_scroll_mid_drag() {
        let engine = MenuSyncEngine::new(strip(&[200.0; 6]));
        // Halfway between page 2 and 3 of a 320 wide pager.
        let offset = engine.offset_for_page_scroll(800.0, 320.0, 300.0).unwrap();
        let expected = (engine.centered_offset(2, 300.0) + engine.centered_offset(3, 300.0)) / 2.0;
        assert!((offset - expected).abs() < 1e-3);
    }

    #[test]
    fn offset_for_page_scroll_without_items() {
        let engine = MenuSyncEngine::default();
        assert_eq!(engine.offset_for_page_scroll(100.0, 320.0, 300.0), None);
    }

    proptest! {
        #[test]
        fn interpolation_is_monotonic_for_left_to_right_layouts(
            widths in prop::collection::vec(20.0f32..300.0, 2..12),
            viewport_width in 100.0f32..600.0,
            left in 0usize..11,
            a in 0.0f32..=1.0,
            b in 0.0f32..=1.0,
        ) {
            let engine = MenuSyncEngine::new(strip(&widths));
            let left = left % (widths.len() - 1);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let at_lo = engine.interpolated_offset(left, left + 1, lo, viewport_width);
            let at_hi = engine.interpolated_offset(left, left + 1, hi, viewport_width);
            prop_assert!(at_lo <= at_hi + 1e-3);
        }

        #[test]
        fn centered_offset_stays_in_scroll_range(
            widths in prop::collection::vec(20.0f32..300.0, 1..12),
            viewport_width in 100.0f32..600.0,
            index in 0usize..12,
        ) {
            let engine = MenuSyncEngine::new(strip(&widths));
            let offset = engine.centered_offset(index, viewport_width);
            let max = (engine.layout().content_width() - viewport_width).max(0.0);
            prop_assert!(offset >= 0.0);
            prop_assert!(offset <= max);
        }
    }
}
