//! 2D geometry, collision and noise for real-time games.
//!
//! Layout
//! - `shapes`: vector extensions (`Vec2Ext`), `Rect`, `Circle`.
//! - `intersect`: `Ray` and the ray/circle, ray/rect, ray/segment solvers.
//! - `collide`: overlap and containment predicates plus list scans.
//! - `noise`: reference Perlin noise, octave sums, and `shake` displacement.
//! - `numgen`, `sample`: seeded number/vector generators and weighted picks.
//! - `ease`, `misc`: interpolation curves and scalar helpers.
//!
//! Conventions
//! - Screen coordinates: +x right, +y down. Angles are counterclockwise as
//!   seen on screen, i.e. `-atan2(y, x)`.
//! - All shapes are `Copy` values; operations return new values.

pub mod collide;
pub mod ease;
pub mod intersect;
pub mod misc;
pub mod noise;
pub mod numgen;
pub mod sample;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use intersect::{LineHit, Ray, RayHit};
pub use nalgebra::Vector2 as Vec2;
pub use shapes::{Circle, Rect, Vec2Ext};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::collide::{all_collisions, first_collision, Collide};
    pub use crate::ease::{ease, ease_vec, lerp, lerp_vec, Ease};
    pub use crate::intersect::{LineHit, Ray, RayHit};
    pub use crate::misc::{clamp, map, modulo};
    pub use crate::noise::shake::{Shake, ShakeCfg};
    pub use crate::noise::{perlin, perlin_octave, NoiseError};
    pub use crate::numgen::{NumGen, VecGen};
    pub use crate::sample::{select_index, ReplayToken};
    pub use crate::shapes::{rand_unit, vec2, vec_la, Circle, Rect, Vec2Ext};
    pub use nalgebra::Vector2 as Vec2;
}
