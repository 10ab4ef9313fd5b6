//! Axis-aligned bodies
//!
//! Every simulated entity is a top-left anchored rectangle with velocity and
//! acceleration. Screen space: +x right, +y down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Edge coordinates of an axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            left: pos.x,
            top: pos.y,
            right: pos.x + size.x,
            bottom: pos.y + size.y,
        }
    }

    /// Strict overlap; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

/// Position, size and motion of one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    /// Fixed for the body's lifetime
    pub size: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "body size must be positive");
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Move so the right edge sits at `x`
    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    /// Move so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let body = Body::new(Vec2::new(100.0, 50.0), Vec2::new(64.0, 68.0));
        assert_eq!(body.left(), 100.0);
        assert_eq!(body.right(), 164.0);
        assert_eq!(body.top(), 50.0);
        assert_eq!(body.bottom(), 118.0);
        assert_eq!(body.center(), Vec2::new(132.0, 84.0));

        let rect = body.rect();
        assert_eq!((rect.left, rect.top), (100.0, 50.0));
        assert_eq!((rect.right, rect.bottom), (164.0, 118.0));
    }

    #[test]
    fn test_edge_setters() {
        let mut body = Body::new(Vec2::ZERO, Vec2::new(10.0, 20.0));
        body.set_right(50.0);
        body.set_bottom(100.0);
        assert_eq!(body.pos, Vec2::new(40.0, 80.0));
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::from_pos_size(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::from_pos_size(Vec2::new(5.0, 5.0), Vec2::splat(10.0));
        let c = Rect::from_pos_size(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(a.overlaps(&b));
        // Touching is not overlapping
        assert!(!a.overlaps(&c));
    }
}
