//! Plain 2D shapes: vector extensions, axis-aligned rectangles, circles.
//!
//! Purpose
//! - Supply the boundary accessors and vector arithmetic the intersection,
//!   collision and generator modules are written against.
//! - Keep every type `Copy` with a by-value API: transforms return a new
//!   shape, callers reassign when they want in-place updates.
//!
//! Conventions
//! - +y points down; `top < bottom` for normalized rects.
//! - Sizes and radii are not forced non-negative; call `normalized()`.
//!
//! Code cross-refs: `crate::collide`, `crate::intersect`, `crate::numgen`

pub mod circle;
pub mod rect;
pub mod vec;

pub use circle::Circle;
pub use rect::Rect;
pub use vec::{rand_unit, vec2, vec_la, Vec2Ext};
