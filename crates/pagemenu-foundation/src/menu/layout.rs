//! Menu item layout.
//!
//! Items are placed left to right with no gaps. The rectangles are computed
//! once per reload and read-only until the next one.

use pagemenu_ui_graphics::{Point, Rect, Size};

/// Cached rectangles of every menu item in the strip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuLayout {
    item_rects: Vec<Rect>,
    content_size: Size,
}

impl MenuLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places items of the given intrinsic sizes side by side.
    ///
    /// The strip is as tall as the first item.
    pub fn from_item_sizes<I>(sizes: I) -> Self
    where
        I: IntoIterator<Item = Size>,
    {
        let mut item_rects = Vec::new();
        let mut content_size = Size::ZERO;

        for size in sizes {
            if item_rects.is_empty() {
                content_size.height = size.height;
            }
            item_rects.push(Rect::from_origin_size(
                Point::new(content_size.width, 0.0),
                size,
            ));
            content_size.width += size.width;
        }

        Self {
            item_rects,
            content_size,
        }
    }

    /// Uses precomputed rectangles as-is. Content width is the right edge of
    /// the right-most rectangle.
    pub fn from_rects(item_rects: Vec<Rect>) -> Self {
        let width = item_rects.iter().map(Rect::max_x).fold(0.0, f32::max);
        let height = item_rects.first().map_or(0.0, |rect| rect.height);
        Self {
            item_rects,
            content_size: Size::new(width, height),
        }
    }

    pub fn item_rects(&self) -> &[Rect] {
        &self.item_rects
    }

    pub fn item_rect(&self, index: usize) -> Option<Rect> {
        self.item_rects.get(index).copied()
    }

    pub fn item_count(&self) -> usize {
        self.item_rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_rects.is_empty()
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn content_width(&self) -> f32 {
        self.content_size.width
    }

    /// Item under a strip-space x coordinate, for tap handling.
    pub fn item_index_at(&self, x: f32) -> Option<usize> {
        self.item_rects.iter().position(|rect| rect.contains_x(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_packed_left_to_right() {
        let layout = MenuLayout::from_item_sizes([
            Size::new(80.0, 44.0),
            Size::new(120.0, 40.0),
            Size::new(60.0, 44.0),
        ]);

        assert_eq!(
            layout.item_rects(),
            &[
                Rect::new(0.0, 0.0, 80.0, 44.0),
                Rect::new(80.0, 0.0, 120.0, 40.0),
                Rect::new(200.0, 0.0, 60.0, 44.0),
            ]
        );
        assert_eq!(layout.content_size(), Size::new(260.0, 44.0));
    }

    #[test]
    fn empty_layout() {
        let layout = MenuLayout::from_item_sizes(std::iter::empty());
        assert!(layout.is_empty());
        assert_eq!(layout.content_size(), Size::ZERO);
        assert_eq!(layout.item_index_at(0.0), None);
    }

    #[test]
    fn hit_testing() {
        let layout = MenuLayout::from_item_sizes([Size::new(80.0, 44.0), Size::new(120.0, 44.0)]);
        assert_eq!(layout.item_index_at(0.0), Some(0));
        assert_eq!(layout.item_index_at(79.5), Some(0));
        assert_eq!(layout.item_index_at(80.0), Some(1));
        assert_eq!(layout.item_index_at(200.0), None);
        assert_eq!(layout.item_index_at(-1.0), None);
    }

    #[test]
    fn from_rects_measures_content() {
        let layout = MenuLayout::from_rects(vec![
            Rect::new(10.0, 0.0, 50.0, 30.0),
            Rect::new(100.0, 0.0, 50.0, 30.0),
        ]);
        assert_eq!(layout.content_size(), Size::new(150.0, 30.0));
    }
}
