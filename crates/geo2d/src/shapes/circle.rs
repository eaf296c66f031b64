use nalgebra::Vector2;
use std::f64::consts::PI;
use std::fmt;

use super::rect::Rect;
use super::vec::Vec2Ext;

/// Circle with center `(x, y)` and radius `r`.
///
/// Invariants:
/// - None enforced; `r` may be negative until `normalized()` is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Circle {
    #[inline]
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }

    #[inline]
    pub fn at_vec(pos: Vector2<f64>, r: f64) -> Self {
        Self::new(pos.x, pos.y, r)
    }

    /// Unit circle centered at `(x, y)`.
    #[inline]
    pub fn unit_at(x: f64, y: f64) -> Self {
        Self::new(x, y, 1.0)
    }

    /// Circle of radius `r` centered at the origin.
    #[inline]
    pub fn with_radius(r: f64) -> Self {
        Self::new(0.0, 0.0, r)
    }

    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.r * self.r
    }
    #[inline]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.r
    }
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.r
    }
    #[inline]
    pub fn left(&self) -> f64 {
        self.x - self.r
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.r
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.y - self.r
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.r
    }

    #[inline]
    pub fn moved(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.r)
    }

    /// Same center, radius changed by `dr`.
    #[inline]
    pub fn inflated(self, dr: f64) -> Self {
        Self::new(self.x, self.y, self.r + dr)
    }

    #[inline]
    pub fn with_pos(self, pos: Vector2<f64>) -> Self {
        Self::new(pos.x, pos.y, self.r)
    }

    #[inline]
    pub fn with_diameter(self, d: f64) -> Self {
        Self::new(self.x, self.y, d / 2.0)
    }

    #[inline]
    pub fn with_circumference(self, circ: f64) -> Self {
        Self::new(self.x, self.y, circ / 2.0 / PI)
    }

    #[inline]
    pub fn normalized(self) -> Self {
        Self::new(self.x, self.y, self.r.abs())
    }

    /// Smallest circle containing both. If one already encloses the other,
    /// the enclosing circle is returned unchanged.
    pub fn union(self, other: Circle) -> Self {
        let v1 = self.pos();
        let v2 = other.pos();
        let d = (v2 - v1).norm();
        if d + other.r <= self.r {
            return self;
        }
        if d + self.r <= other.r {
            return other;
        }
        let dir = (v2 - v1) / d;
        let p1 = v1 - dir * self.r;
        let p2 = v2 + dir * other.r;
        let span = p2 - p1;
        Self::at_vec(p1 + span / 2.0, span.norm() / 2.0)
    }

    /// Smallest rect around the circle.
    pub fn bounding_rect(&self) -> Rect {
        let size = self.diameter();
        Rect::new(self.left(), self.top(), size, size)
    }

    /// Largest square that fits inside the circle.
    pub fn inscribed_rect(&self) -> Rect {
        let size = std::f64::consts::SQRT_2 * self.r;
        Rect::from_size(size, size).with_mid(self.x, self.y)
    }

    /// Smallest circle around `r`, sharing its center.
    pub fn circumscribing(r: Rect) -> Self {
        let diameter = r.top_left().dist(r.bottom_right());
        Self::new(r.mid_x(), r.mid_y(), diameter / 2.0)
    }

    /// Largest circle inside `r`, sharing its center.
    pub fn inscribed_in(r: Rect) -> Self {
        let r = r.normalized();
        Self::new(r.mid_x(), r.mid_y(), r.w.min(r.h) / 2.0)
    }

    /// Point on the boundary at `radians` from +x (counterclockwise on screen).
    pub fn point_at(&self, radians: f64) -> Vector2<f64> {
        Vector2::new(
            self.x + radians.cos() * self.r,
            self.y - radians.sin() * self.r,
        )
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({}, {}, r{})", self.x, self.y, self.r)
    }
}
