use nalgebra::Vector2;
use std::fmt;

use crate::misc::clamp;

/// Axis-aligned rectangle: top-left corner `(x, y)`, width `w`, height `h`.
///
/// Invariants:
/// - None enforced; `w`/`h` may be negative until `normalized()` is applied.
/// - Boundaries: `left = x`, `right = x + w`, `top = y`, `bottom = y + h` (+y down).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Rect at the origin with the given size.
    #[inline]
    pub fn from_size(w: f64, h: f64) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    /// From top-left `(x1, y1)` and bottom-right `(x2, y2)` corners.
    #[inline]
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    #[inline]
    pub fn from_corner_vecs(top_left: Vector2<f64>, bottom_right: Vector2<f64>) -> Self {
        Self::from_corners(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
    #[inline]
    pub fn mid_x(&self) -> f64 {
        self.x + self.w / 2.0
    }
    #[inline]
    pub fn mid_y(&self) -> f64 {
        self.y + self.h / 2.0
    }
    #[inline]
    pub fn mid(&self) -> Vector2<f64> {
        Vector2::new(self.mid_x(), self.mid_y())
    }
    #[inline]
    pub fn top_left(&self) -> Vector2<f64> {
        Vector2::new(self.left(), self.top())
    }
    #[inline]
    pub fn top_right(&self) -> Vector2<f64> {
        Vector2::new(self.right(), self.top())
    }
    #[inline]
    pub fn bottom_left(&self) -> Vector2<f64> {
        Vector2::new(self.left(), self.bottom())
    }
    #[inline]
    pub fn bottom_right(&self) -> Vector2<f64> {
        Vector2::new(self.right(), self.bottom())
    }
    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.w, self.h)
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    #[inline]
    pub fn moved(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Same center, size changed by `(dw, dh)`.
    #[inline]
    pub fn inflated(self, dw: f64, dh: f64) -> Self {
        Self::new(self.x - dw / 2.0, self.y - dh / 2.0, self.w + dw, self.h + dh)
    }

    /// Same size, centered on `(x, y)`.
    #[inline]
    pub fn with_mid(self, x: f64, y: f64) -> Self {
        Self::new(x - self.w / 2.0, y - self.h / 2.0, self.w, self.h)
    }

    #[inline]
    pub fn with_top_left(self, x: f64, y: f64) -> Self {
        Self::new(x, y, self.w, self.h)
    }

    /// Moved to lie within `bounds`; an axis that does not fit is centered in `bounds`.
    pub fn clamped(self, bounds: Rect) -> Self {
        let x = if self.w > bounds.w {
            bounds.mid_x() - self.w / 2.0
        } else {
            clamp(self.x, bounds.x, bounds.right() - self.w)
        };
        let y = if self.h > bounds.h {
            bounds.mid_y() - self.h / 2.0
        } else {
            clamp(self.y, bounds.y, bounds.bottom() - self.h)
        };
        Self::new(x, y, self.w, self.h)
    }

    /// Overlapping area. Disjoint inputs give a rect with non-positive size.
    pub fn intersection(self, other: Rect) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Self::new(
            x,
            y,
            self.right().min(other.right()) - x,
            self.bottom().min(other.bottom()) - y,
        )
    }

    /// Smallest rect containing both.
    pub fn union(self, other: Rect) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    /// Smallest rect containing all of `rects`; an empty slice yields the zero rect.
    pub fn union_all(rects: &[Rect]) -> Self {
        let Some((first, rest)) = rects.split_first() else {
            return Self::default();
        };
        rest.iter().fold(*first, |acc, r| acc.union(*r))
    }

    /// Scaled (aspect ratio kept) and moved to fit within `bounds`.
    pub fn fitted(self, bounds: Rect) -> Self {
        let new_w = bounds.h * (self.w / self.h);
        if new_w <= bounds.w {
            return Self::new(
                clamp(self.x, bounds.x, bounds.right() - new_w),
                bounds.y,
                new_w,
                bounds.h,
            );
        }
        let new_h = bounds.w * (self.h / self.w);
        Self::new(
            bounds.x,
            clamp(self.y, bounds.y, bounds.bottom() - new_h),
            bounds.w,
            new_h,
        )
    }

    /// Equivalent rect with non-negative `w` and `h`.
    pub fn normalized(self) -> Self {
        let mut r = self;
        if r.w < 0.0 {
            r.x += r.w;
            r.w = -r.w;
        }
        if r.h < 0.0 {
            r.y += r.h;
            r.h = -r.h;
        }
        r
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({}, {}, {}, {})", self.x, self.y, self.w, self.h)
    }
}
