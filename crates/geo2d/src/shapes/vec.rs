//! Game-oriented operations on `nalgebra::Vector2<f64>`.
//!
//! nalgebra already covers construction, arithmetic, `norm`, `dot` and
//! `normalize`. `Vec2Ext` adds the screen-space conventions used across the
//! crate (rotation and angles counterclockwise on screen, +y down) and the
//! rectangle-relative helpers (clamp, wrap, map).

use nalgebra::Vector2;
use rand::Rng;

use super::rect::Rect;
use crate::misc::{clamp, map, modulo};

/// Shorthand constructor.
#[inline]
pub fn vec2(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

/// Vector from a length and an angle (radians from +x, counterclockwise on screen).
#[inline]
pub fn vec_la(len: f64, radians: f64) -> Vector2<f64> {
    vec2(len, 0.0).rotated(radians)
}

/// Unit vector pointing in a uniformly random direction.
pub fn rand_unit<R: Rng + ?Sized>(rng: &mut R) -> Vector2<f64> {
    let rad = rng.gen::<f64>() * std::f64::consts::TAU;
    vec2(rad.cos(), rad.sin())
}

/// Extension methods for 2D vectors.
pub trait Vec2Ext: Sized {
    /// Same direction, length `l`. Negative `l` flips; the zero vector stays zero.
    fn with_len(self, l: f64) -> Self;
    fn dist(self, other: Self) -> f64;
    fn dist2(self, other: Self) -> f64;
    /// z-component of the 3D cross product: `x1*y2 - y1*x2`.
    fn cross2(self, other: Self) -> f64;
    /// `(-y, x)`.
    fn perpendicular(self) -> Self;
    fn projected_onto(self, onto: Self) -> Self;
    /// Shortened to `max_len` if longer, unchanged otherwise.
    fn limited(self, max_len: f64) -> Self;
    /// Angle from +x in `(-π, π]`, counterclockwise on screen.
    fn screen_angle(self) -> f64;
    /// Radians from `other` to `self` in `[-π, π)`.
    fn angle_from(self, other: Self) -> f64;
    /// Rotation counterclockwise on screen.
    fn rotated(self, radians: f64) -> Self;
    /// Closest point of `r` (edges inclusive).
    fn clamped_to(self, r: Rect) -> Self;
    /// Wraps around `r` so the point stays within its bounds (floored modulo per axis).
    fn wrapped_in(self, r: Rect) -> Self;
    /// Same relative position in `to` as `self` has in `from`.
    fn mapped_between(self, from: Rect, to: Rect) -> Self;
    /// Component-wise equality within `eps`.
    fn approx_eq(self, other: Self, eps: f64) -> bool;
}

impl Vec2Ext for Vector2<f64> {
    #[inline]
    fn with_len(self, l: f64) -> Self {
        let len = self.norm();
        if len == 0.0 {
            return Vector2::zeros();
        }
        vec2(self.x / len * l, self.y / len * l)
    }

    #[inline]
    fn dist(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[inline]
    fn dist2(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    fn cross2(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    fn perpendicular(self) -> Self {
        vec2(-self.y, self.x)
    }

    fn projected_onto(self, onto: Self) -> Self {
        let n = onto.normalize();
        n * self.dot(&n)
    }

    fn limited(self, max_len: f64) -> Self {
        if self.norm() > max_len {
            self.with_len(max_len)
        } else {
            self
        }
    }

    #[inline]
    fn screen_angle(self) -> f64 {
        -self.y.atan2(self.x)
    }

    fn angle_from(self, other: Self) -> f64 {
        use std::f64::consts::PI;
        let mut r = other.y.atan2(other.x) - self.y.atan2(self.x);
        if r < -PI {
            r += 2.0 * PI;
        }
        if r >= PI {
            r -= 2.0 * PI;
        }
        r
    }

    #[inline]
    fn rotated(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        vec2(self.x * cos + self.y * sin, -self.x * sin + self.y * cos)
    }

    fn clamped_to(self, r: Rect) -> Self {
        vec2(
            clamp(self.x, r.left(), r.right()),
            clamp(self.y, r.bottom(), r.top()),
        )
    }

    fn wrapped_in(self, r: Rect) -> Self {
        vec2(
            modulo(self.x - r.left(), r.w) + r.left(),
            modulo(self.y - r.top(), r.h) + r.top(),
        )
    }

    fn mapped_between(self, from: Rect, to: Rect) -> Self {
        vec2(
            map(self.x, from.left(), from.right(), to.left(), to.right()),
            map(self.y, from.top(), from.bottom(), to.top(), to.bottom()),
        )
    }

    #[inline]
    fn approx_eq(self, other: Self, eps: f64) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }
}
