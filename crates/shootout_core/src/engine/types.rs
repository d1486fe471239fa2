//! Engine Types
//!
//! Plain geometry shared by motion, outcome resolution and the match state.
//! Coordinates are screen units: x grows right, y grows down.

use serde::{Deserialize, Serialize};

/// 2D point / vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn normalize(&self) -> Vec2 {
        let len = self.length();
        if len > 0.0 {
            Vec2::new(self.x / len, self.y / len)
        } else {
            Vec2::new(0.0, 0.0)
        }
    }
}

/// 2D size (width x height)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Scale both axes. Rounded to whole units so goalkeeper boxes stay on the
    /// integer grid the goal is laid out on.
    pub fn scaled(&self, factor: f32) -> Size {
        Size::new((self.width * factor).round(), (self.height * factor).round())
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Size::new(width, height) }
    }

    pub fn from_origin(origin: Vec2, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Open-interval containment on both axes: points on the edge are outside.
    pub fn contains_strict(&self, point: Vec2) -> bool {
        self.left() < point.x
            && point.x < self.right()
            && self.top() < point.y
            && point.y < self.bottom()
    }

    /// Shrink every edge by `margin`.
    pub fn inset(&self, margin: f32) -> Rect {
        Rect::new(
            self.origin.x + margin,
            self.origin.y + margin,
            (self.size.width - 2.0 * margin).max(0.0),
            (self.size.height - 2.0 * margin).max(0.0),
        )
    }

    /// Top-left positions at which a box of `size` still fits inside `self`.
    /// Degenerates to a zero-sized rect when the box is larger than `self`.
    pub fn placement_area(&self, size: Size) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            (self.size.width - size.width).max(0.0),
            (self.size.height - size.height).max(0.0),
        )
    }

    /// Clamp a point into the closed rectangle.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left(), self.right()),
            point.y.clamp(self.top(), self.bottom()),
        )
    }

    /// Top-left corner that centers a box of `size` inside `self`.
    pub fn centered_origin(&self, size: Size) -> Vec2 {
        Vec2::new(
            self.origin.x + ((self.size.width - size.width) / 2.0).floor(),
            self.origin.y + ((self.size.height - size.height) / 2.0).floor(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_strict_excludes_edges() {
        let rect = Rect::new(200.0, 50.0, 400.0, 200.0);
        assert!(rect.contains_strict(Vec2::new(400.0, 150.0)));
        assert!(!rect.contains_strict(Vec2::new(200.0, 150.0)));
        assert!(!rect.contains_strict(Vec2::new(600.0, 150.0)));
        assert!(!rect.contains_strict(Vec2::new(400.0, 50.0)));
        assert!(!rect.contains_strict(Vec2::new(400.0, 250.0)));
    }

    #[test]
    fn test_placement_area_and_clamp() {
        let goal = Rect::new(200.0, 50.0, 400.0, 200.0);
        let area = goal.placement_area(Size::new(80.0, 120.0));
        assert_eq!(area, Rect::new(200.0, 50.0, 320.0, 80.0));

        let clamped = area.clamp(Vec2::new(10.0, 999.0));
        assert_eq!(clamped, Vec2::new(200.0, 130.0));
    }

    #[test]
    fn test_centered_origin() {
        let goal = Rect::new(200.0, 50.0, 400.0, 200.0);
        assert_eq!(goal.centered_origin(Size::new(80.0, 120.0)), Vec2::new(360.0, 90.0));
        assert_eq!(goal.centered_origin(Size::new(56.0, 84.0)), Vec2::new(372.0, 108.0));
    }

    #[test]
    fn test_scaled_size_rounds() {
        let base = Size::new(80.0, 120.0);
        assert_eq!(base.scaled(1.3), Size::new(104.0, 156.0));
        assert_eq!(base.scaled(0.7), Size::new(56.0, 84.0));
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(Vec2::default().normalize(), Vec2::new(0.0, 0.0));
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a clamped goalkeeper box never leaves the goal, and
            /// clamping twice changes nothing
            #[test]
            fn prop_clamp_keeps_box_inside(
                px in -1000.0f32..1000.0, py in -1000.0f32..1000.0,
                w in 1.0f32..400.0, h in 1.0f32..200.0,
            ) {
                let goal = Rect::new(200.0, 50.0, 400.0, 200.0);
                let area = goal.placement_area(Size::new(w, h));
                let once = area.clamp(Vec2::new(px, py));

                prop_assert_eq!(area.clamp(once), once);
                prop_assert!(once.x >= goal.left() && once.x + w <= goal.right() + 1e-3);
                prop_assert!(once.y >= goal.top() && once.y + h <= goal.bottom() + 1e-3);
            }
        }
    }
}
