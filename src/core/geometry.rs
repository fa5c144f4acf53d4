//! Axis-aligned rectangles in world units.

use serde::{Deserialize, Serialize};

/// A rectangle with its origin at the top-left corner. World y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WorldRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Strict overlap test. Rectangles that only share an edge do not intersect,
    /// and an empty rectangle never intersects anything.
    pub fn intersects(&self, other: &WorldRect) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    pub fn shift_x(&mut self, dx: f64) {
        self.x += dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = WorldRect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center_y(), 40.0);
    }

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = WorldRect::new(0.0, 0.0, 10.0, 10.0);
        let b = WorldRect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = WorldRect::new(0.0, 0.0, 10.0, 10.0);
        let right = WorldRect::new(10.0, 0.0, 10.0, 10.0);
        let below = WorldRect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = WorldRect::new(0.0, 0.0, 10.0, 10.0);
        let empty = WorldRect::new(2.0, 2.0, 0.0, 5.0);
        assert!(!a.intersects(&empty));
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = WorldRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(9.9, 9.9));
        assert!(!r.contains(10.0, 5.0));
        assert!(!r.contains(5.0, 10.0));
    }

    #[test]
    fn test_shift_x() {
        let mut r = WorldRect::new(576.0, 0.0, 80.0, 100.0);
        r.shift_x(-3.0);
        assert_eq!(r.left(), 573.0);
        assert_eq!(r.width, 80.0);
    }
}
