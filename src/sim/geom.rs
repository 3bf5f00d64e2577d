//! Axis-aligned geometry on the integer pixel grid
//!
//! Everything in the playfield is either a rectangle (paddle, bricks) or a
//! circle (ball). Coordinates are y-down with the origin at the top-left
//! corner of the screen.

use glam::IVec2;

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: IVec2,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(pos: IVec2, width: i32, height: i32) -> Self {
        Self { pos, width, height }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.height
    }

    /// Strict interior test: points on any edge do not count as contained
    pub fn contains_interior(&self, point: IVec2) -> bool {
        point.x > self.left()
            && point.x < self.right()
            && point.y > self.top()
            && point.y < self.bottom()
    }

    /// Closed-edge overlap test between two rectangles
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// A circle with an integer center and radius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: IVec2,
    pub radius: i32,
}

impl Circle {
    pub fn new(center: IVec2, radius: i32) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.center.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.center.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.center.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.center.y + self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(IVec2::new(10, 20), 50, 30);
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.right(), 60);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.bottom(), 50);
    }

    #[test]
    fn test_contains_interior_is_strict() {
        let rect = Rect::new(IVec2::new(0, 0), 10, 10);

        assert!(rect.contains_interior(IVec2::new(5, 5)));
        // Edge contact is a miss on all four sides
        assert!(!rect.contains_interior(IVec2::new(0, 5)));
        assert!(!rect.contains_interior(IVec2::new(10, 5)));
        assert!(!rect.contains_interior(IVec2::new(5, 0)));
        assert!(!rect.contains_interior(IVec2::new(5, 10)));
        assert!(!rect.contains_interior(IVec2::new(20, 20)));
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(IVec2::new(0, 0), 10, 10);
        let b = Rect::new(IVec2::new(5, 5), 10, 10);
        let c = Rect::new(IVec2::new(10, 0), 10, 10);
        let d = Rect::new(IVec2::new(30, 30), 5, 5);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        // Sharing an edge is not an overlap
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&d));
    }

    #[test]
    fn test_circle_extents() {
        let circle = Circle::new(IVec2::new(100, 200), 5);
        assert_eq!(circle.left(), 95);
        assert_eq!(circle.right(), 105);
        assert_eq!(circle.top(), 195);
        assert_eq!(circle.bottom(), 205);
    }
}
