//! Seed expansion and weighted index selection.
//!
//! Purpose
//! - Give every seeded generator its own reproducible RNG stream from a
//!   `(seed, index)` pair, so generators sharing a user seed stay independent.
//! - Pick an index with probability proportional to a weight (area-weighted
//!   rect choice, loot-table style picks).
//!
//! Code cross-refs: `crate::numgen`, `crate::noise::shake`

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token: the same `(seed, index)` always yields the same RNG stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Same seed, next stream.
    #[inline]
    pub fn next(self) -> Self {
        Self::new(self.seed, self.index.wrapping_add(1))
    }

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Index drawn with probability `weights[i] / sum(weights)`.
///
/// Negative and non-finite weights count as zero. If every weight is zero the
/// pick is uniform. An empty slice returns `None`.
pub fn select_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    let clean = |w: f64| if w.is_finite() { w.max(0.0) } else { 0.0 };
    // Scale by the largest weight so the running sum cannot overflow.
    let max = weights.iter().fold(0.0f64, |m, &w| m.max(clean(w)));
    if max == 0.0 {
        return Some(rng.gen_range(0..weights.len()));
    }
    match WeightedIndex::new(weights.iter().map(|&w| clean(w) / max)) {
        Ok(dist) => Some(dist.sample(rng)),
        Err(_) => Some(rng.gen_range(0..weights.len())),
    }
}
