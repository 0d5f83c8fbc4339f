use serde::{Deserialize, Serialize};

/// An outer (chrome-inclusive) pixel rectangle.
///
/// Coordinates are integers: the layout resolver guarantees exact tiling
/// at pixel granularity, so fractional rects never exist past the rounding
/// step inside the resolver itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// The x coordinate one past the right edge.
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    /// The y coordinate one past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10, 20, 300, 400);
        assert_eq!(r.right(), 310);
        assert_eq!(r.bottom(), 420);
    }

    #[test]
    fn rect_degenerate_edges() {
        let r = Rect::new(5, 5, 0, -3);
        assert_eq!(r.right(), 5);
        assert_eq!(r.bottom(), 2);
    }
}
