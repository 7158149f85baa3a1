//! Axis-aligned rectangle type and the overlap test used for every collision
//! check in the game.

use glam::Vec2;

/// An axis-aligned bounding box, positioned by its top-left corner.
///
/// Used uniformly for player, adversary, pellet, and wall bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub min: Vec2,
    /// Width and height. Always positive for valid rects.
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub const fn from_corner(min: Vec2, size: Vec2) -> Self {
        Rect { min, size }
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Returns this rect shifted by `delta`.
    pub fn translated(&self, delta: Vec2) -> Rect {
        Rect {
            min: self.min + delta,
            size: self.size,
        }
    }

    /// Returns true if the two rects overlap on both axes.
    ///
    /// The comparison is strict: rects that merely touch along an edge do not
    /// intersect. Every collision check in the game goes through this.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max().x && other.min.x < self.max().x && self.min.y < other.max().y && other.min.y < self.max().y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_disjoint_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_edge_touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_center() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_translated() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let moved = rect.translated(Vec2::new(3.0, -2.0));
        assert_eq!(moved.min, Vec2::new(3.0, -2.0));
        assert_eq!(moved.size, rect.size);
    }
}
