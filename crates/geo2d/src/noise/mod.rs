//! Gradient noise (improved Perlin, 2002 reference) and octave sums.
//!
//! Purpose
//! - Deterministic smooth noise for camera shake, wandering points and
//!   procedural textures. Output is remapped from `[-1, 1]` to `[0, 1]`.
//!
//! Why this design
//! - The permutation table is the published reference table, so values match
//!   other implementations of the same algorithm bit for bit.
//! - The doubled 512-entry table is built at compile time; lookups never wrap.
//!
//! References
//! - K. Perlin, "Improving Noise", SIGGRAPH 2002.
//!
//! Code cross-refs: `shake::Shake`, `crate::numgen::NoiseVec`

use std::fmt;

use crate::ease::lerp;

pub mod shake;

/// Error for noise-driven configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum NoiseError {
    InvalidParams { reason: String },
}

impl NoiseError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid noise params: {reason}"),
        }
    }
}

impl std::error::Error for NoiseError {}

#[rustfmt::skip]
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

const fn doubled(src: &[u8; 256]) -> [u8; 512] {
    let mut out = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        out[i] = src[i & 255];
        i += 1;
    }
    out
}

static P: [u8; 512] = doubled(&PERMUTATION);

#[inline]
fn p(i: usize) -> usize {
    P[i] as usize
}

/// Quintic smoothstep `6t⁵ - 15t⁴ + 10t³`.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Dot product with one of 12 cube-edge gradients picked by the low 4 hash bits.
#[inline]
fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    match hash & 15 {
        0 | 12 => x + y,
        1 | 14 => y - x,
        2 => x - y,
        3 => -x - y,
        4 => x + z,
        5 => z - x,
        6 => x - z,
        7 => -x - z,
        8 => y + z,
        9 | 13 => z - y,
        10 => y - z,
        _ => -y - z,
    }
}

/// Lattice cell index. Saturating `as` keeps non-finite input in range.
#[inline]
fn cell(v: f64) -> usize {
    (v as i64 & 255) as usize
}

/// Improved Perlin noise at `(x, y, z)`, in `[0, 1]`.
///
/// Period 256 on every axis; integer lattice points return exactly `0.5`.
/// Non-finite input yields NaN.
pub fn perlin(x: f64, y: f64, z: f64) -> f64 {
    let (fx, fy, fz) = (x.floor(), y.floor(), z.floor());
    let (xi, yi, zi) = (cell(fx), cell(fy), cell(fz));
    let (x, y, z) = (x - fx, y - fy, z - fz);
    let (u, v, w) = (fade(x), fade(y), fade(z));

    let a = p(xi) + yi;
    let aa = p(a) + zi;
    let ab = p(a + 1) + zi;
    let b = p(xi + 1) + yi;
    let ba = p(b) + zi;
    let bb = p(b + 1) + zi;

    let near = lerp(
        lerp(grad(p(aa), x, y, z), grad(p(ba), x - 1.0, y, z), u),
        lerp(
            grad(p(ab), x, y - 1.0, z),
            grad(p(bb), x - 1.0, y - 1.0, z),
            u,
        ),
        v,
    );
    let far = lerp(
        lerp(
            grad(p(aa + 1), x, y, z - 1.0),
            grad(p(ba + 1), x - 1.0, y, z - 1.0),
            u,
        ),
        lerp(
            grad(p(ab + 1), x, y - 1.0, z - 1.0),
            grad(p(bb + 1), x - 1.0, y - 1.0, z - 1.0),
            u,
        ),
        v,
    );

    (lerp(near, far, w) + 1.0) / 2.0
}

/// Weighted sum of `octaves` perlin layers, each at double the frequency of the
/// last and `persistence` times its amplitude, normalized by the amplitude sum.
///
/// `octaves == 0` is treated as one octave.
pub fn perlin_octave(x: f64, y: f64, z: f64, octaves: u32, persistence: f64) -> f64 {
    let mut total = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    let mut max_value = 0.0;
    for _ in 0..octaves.max(1) {
        total += perlin(x * frequency, y * frequency, z * frequency) * amplitude;
        max_value += amplitude;
        amplitude *= persistence;
        frequency *= 2.0;
    }
    total / max_value
}
