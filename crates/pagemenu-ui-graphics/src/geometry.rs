//! Geometric primitives: Point, Size, Rect

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Horizontal-only containment, half-open on the right edge so that
    /// adjacent rectangles never both claim the shared boundary.
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.x && x < self.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_origin_and_size() {
        let rect = Rect::from_origin_size(Point::new(100.0, 0.0), Size::new(50.0, 40.0));
        assert_eq!(rect, Rect::new(100.0, 0.0, 50.0, 40.0));
        assert_eq!(rect.max_x(), 150.0);
    }

    #[test]
    fn adjacent_rects_share_no_boundary() {
        let left = Rect::new(0.0, 0.0, 50.0, 40.0);
        let right = Rect::new(50.0, 0.0, 50.0, 40.0);
        assert!(left.contains_x(49.9));
        assert!(!left.contains_x(50.0));
        assert!(right.contains_x(50.0));
    }
}
