//! Ray intersection against circles, axis-aligned rects and line segments.
//!
//! Purpose
//! - Report where the infinite line carried by a ray crosses a shape, as ray
//!   parameters `t` measured in units of length along the normalized direction.
//! - Negative `t` is behind the origin. The solvers never filter by sign; use
//!   `RayHit::is_forward` / `RayHit::entry_t` for forward-only queries.
//!
//! Boundary policy
//! - Grazing contacts do not count: a tangent ray misses a circle, and a ray
//!   running exactly along a rect edge misses the rect.
//!
//! Degenerate input
//! - A zero-length direction never hits. Parallel ray/segment pairs never hit
//!   and report an infinite `t` of unspecified sign.

use nalgebra::Vector2;
use std::fmt;

use crate::shapes::{Circle, Rect, Vec2Ext};

/// Half-line `origin + t * direction.normalize()`; `direction` need not be unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector2<f64>,
    pub direction: Vector2<f64>,
}

/// Entry/exit parameters of a ray crossing a closed shape. `t_min <= t_max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub t_min: f64,
    pub t_max: f64,
}

impl RayHit {
    /// True if some part of the crossing lies at or in front of the origin.
    #[inline]
    pub fn is_forward(&self) -> bool {
        self.t_max >= 0.0
    }

    /// First non-negative crossing parameter: `t_min`, or `0` when the origin is inside.
    pub fn entry_t(&self) -> Option<f64> {
        if !self.is_forward() {
            return None;
        }
        Some(self.t_min.max(0.0))
    }
}

/// Ray/segment result. `t` is reported even when the segment itself is missed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineHit {
    pub t: f64,
    pub hit: bool,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vector2<f64>, direction: Vector2<f64>) -> Self {
        Self { origin, direction }
    }

    /// Unit-direction ray angled `radians` from +x (counterclockwise on screen).
    pub fn from_angle(origin: Vector2<f64>, radians: f64) -> Self {
        Self::new(origin, Vector2::new(1.0, 0.0).rotated(radians))
    }

    /// Point at distance `t` along the direction; a zero direction always yields the origin.
    #[inline]
    pub fn at(&self, t: f64) -> Vector2<f64> {
        self.origin + self.direction.with_len(t)
    }

    #[inline]
    fn is_degenerate(&self) -> bool {
        self.direction.norm_squared() == 0.0
    }

    /// Closest-approach solve: project the center onto the ray, then step `±dt`
    /// along it with `dt = sqrt(r² - dist²)`.
    pub fn intersect_circle(&self, c: &Circle) -> Option<RayHit> {
        if self.is_degenerate() {
            return None;
        }
        let center = c.pos();
        let t = (center - self.origin).dot(&self.direction.normalize());
        let dist2 = self.at(t).dist2(center);
        let r2 = c.r * c.r;
        // NaN fails the comparison below as well.
        if !(dist2 < r2) {
            return None;
        }
        let dt = (r2 - dist2).sqrt();
        Some(RayHit {
            t_min: t - dt,
            t_max: t + dt,
        })
    }

    /// Slab test: intersect the parameter intervals of the vertical and the
    /// horizontal slab. Axis-parallel rays rely on IEEE `x / 0.0 = ±inf`.
    pub fn intersect_rect(&self, r: &Rect) -> Option<RayHit> {
        let dir = self.direction.normalize();

        let t_left = (r.left() - self.origin.x) / dir.x;
        let t_right = (r.right() - self.origin.x) / dir.x;
        let t_top = (r.top() - self.origin.y) / dir.y;
        let t_bottom = (r.bottom() - self.origin.y) / dir.y;

        let t_min = nan_max(nan_min(t_left, t_right), nan_min(t_top, t_bottom));
        let t_max = nan_min(nan_max(t_left, t_right), nan_max(t_top, t_bottom));

        (t_max >= t_min).then_some(RayHit { t_min, t_max })
    }

    /// Ray against the segment `v1 → v2`.
    ///
    /// Solves `origin + t1·d = v1 + t2·(v2 - v1)` with 2D cross products;
    /// `t1` is the ray parameter, `t2` the segment parameter, and the segment
    /// is hit iff `0 <= t2 <= 1`.
    pub fn intersect_segment(&self, v1: Vector2<f64>, v2: Vector2<f64>) -> LineHit {
        let dir = self.direction.normalize();
        let a = self.origin - v1;
        let b = v2 - v1;
        let c = dir.perpendicular();
        let denom = b.dot(&c);
        let t1 = b.cross2(a) / denom;
        let t2 = a.dot(&c) / denom;
        LineHit {
            t: t1,
            hit: (0.0..=1.0).contains(&t2),
        }
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ray(Vec({}, {}), Vec({}, {}))",
            self.origin.x, self.origin.y, self.direction.x, self.direction.y
        )
    }
}

// `f64::min`/`max` drop NaN operands; the slab test needs NaN to poison the
// interval so that `0/0` (origin on an edge, ray along it) reads as a miss.
#[inline]
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

#[inline]
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
