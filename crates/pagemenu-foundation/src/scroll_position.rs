//! Scroll offset to page index resolution.
//!
//! Shared by the page lifecycle (which pages to load) and the menu sync
//! (which two menu items to interpolate between).

/// Where a horizontal offset falls relative to page boundaries.
///
/// Recomputed every scroll tick, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    /// Page whose leading edge is at or before the offset.
    pub left_index: usize,
    /// `left_index + 1` while between two boundaries, else `left_index`.
    /// Can be one past the last page at the trailing edge.
    pub right_index: usize,
    /// Fraction of the way from `left_index` to `right_index`, in `[0, 1]`.
    pub progress: f32,
}

impl ScrollPosition {
    /// Resolves `offset` against pages of `page_width`.
    ///
    /// Returns `None` when there are no pages or the width cannot be used
    /// as a divisor. The left index is clamped into `0..page_count`.
    pub fn resolve(offset: f32, page_width: f32, page_count: usize) -> Option<Self> {
        if page_count == 0 || !is_usable_page_width(page_width) || offset.is_nan() {
            return None;
        }

        let raw = (offset / page_width).floor();
        let last = (page_count - 1) as f32;
        let left_index = raw.clamp(0.0, last) as usize;

        let left_offset = page_width * left_index as f32;
        let right_index = if offset > left_offset {
            left_index + 1
        } else {
            left_index
        };
        let progress = ((offset - left_offset) / page_width).clamp(0.0, 1.0);

        Some(Self {
            left_index,
            right_index,
            progress,
        })
    }

    /// True when the offset sits exactly on a page boundary.
    pub fn is_settled_on_page(&self) -> bool {
        self.left_index == self.right_index
    }
}

/// A page width that offsets can be divided by.
pub fn is_usable_page_width(page_width: f32) -> bool {
    page_width.is_finite() && page_width > 0.0
}

/// Index of the page whose leading edge is at or before `offset`, without
/// clamping. `None` for negative results or an unusable width.
pub fn page_index_at(offset: f32, page_width: f32) -> Option<usize> {
    if !is_usable_page_width(page_width) || !offset.is_finite() {
        return None;
    }
    let raw = (offset / page_width).floor();
    if raw < 0.0 {
        None
    } else {
        Some(raw as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_two_pages() {
        let position = ScrollPosition::resolve(330.0, 320.0, 3).unwrap();
        assert_eq!(position.left_index, 1);
        assert_eq!(position.right_index, 2);
        assert!((position.progress - 10.0 / 320.0).abs() < 1e-6);
        assert!(!position.is_settled_on_page());
    }

    #[test]
    fn exactly_on_boundary() {
        let position = ScrollPosition::resolve(640.0, 320.0, 3).unwrap();
        assert_eq!(position.left_index, 2);
        assert_eq!(position.right_index, 2);
        assert_eq!(position.progress, 0.0);
        assert!(position.is_settled_on_page());
    }

    #[test]
    fn leading_overscroll_clamps_to_first_page() {
        let position = ScrollPosition::resolve(-40.0, 320.0, 3).unwrap();
        assert_eq!(position.left_index, 0);
        assert_eq!(position.right_index, 0);
        assert_eq!(position.progress, 0.0);
    }

    #[test]
    fn trailing_overscroll_points_past_the_end() {
        let position = ScrollPosition::resolve(700.0, 320.0, 3).unwrap();
        assert_eq!(position.left_index, 2);
        assert_eq!(position.right_index, 3);
    }

    #[test]
    fn far_trailing_overscroll_keeps_progress_in_range() {
        let position = ScrollPosition::resolve(5000.0, 320.0, 3).unwrap();
        assert_eq!(position.left_index, 2);
        assert_eq!(position.progress, 1.0);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(ScrollPosition::resolve(10.0, 320.0, 0), None);
        assert_eq!(ScrollPosition::resolve(10.0, 0.0, 3), None);
        assert_eq!(ScrollPosition::resolve(10.0, -5.0, 3), None);
        assert_eq!(ScrollPosition::resolve(f32::NAN, 320.0, 3), None);
    }

    #[test]
    fn page_index_at_floors() {
        assert_eq!(page_index_at(640.0, 320.0), Some(2));
        assert_eq!(page_index_at(639.0, 320.0), Some(1));
        assert_eq!(page_index_at(-0.0, 320.0), Some(0));
        assert_eq!(page_index_at(-1.0, 320.0), None);
        assert_eq!(page_index_at(10.0, 0.0), None);
    }
}
