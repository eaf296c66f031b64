//! Smooth 2D displacement over time (camera shake, hit wobble).
//!
//! Each axis samples `perlin_octave` along its own lane `(t·frequency, lane, 0)`;
//! lanes are drawn from the seed, so equal configs replay identical offsets.

use nalgebra::Vector2;
use rand::Rng;

use super::{perlin_octave, NoiseError};
use crate::misc::clamp;
use crate::sample::ReplayToken;

/// Shake configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShakeCfg {
    /// Peak displacement per axis.
    pub amplitude: Vector2<f64>,
    /// Noise samples per unit of time.
    pub frequency: f64,
    pub octaves: u32,
    pub persistence: f64,
    pub seed: u64,
}

impl Default for ShakeCfg {
    fn default() -> Self {
        Self {
            amplitude: Vector2::new(8.0, 8.0),
            frequency: 12.0,
            octaves: 2,
            persistence: 0.5,
            seed: 0,
        }
    }
}

impl ShakeCfg {
    pub fn validate(&self) -> Result<(), NoiseError> {
        let a = self.amplitude;
        if !(a.x.is_finite() && a.y.is_finite()) || a.x < 0.0 || a.y < 0.0 {
            return Err(NoiseError::invalid("amplitude must be finite and >= 0"));
        }
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(NoiseError::invalid("frequency must be finite and > 0"));
        }
        if self.octaves == 0 {
            return Err(NoiseError::invalid("octaves must be > 0"));
        }
        if !(self.persistence.is_finite() && self.persistence > 0.0) {
            return Err(NoiseError::invalid("persistence must be finite and > 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Shake {
    cfg: ShakeCfg,
    lanes: (f64, f64),
    duration: Option<f64>,
}

impl Shake {
    pub fn new(cfg: ShakeCfg) -> Result<Self, NoiseError> {
        cfg.validate()?;
        let mut rng = ReplayToken::new(cfg.seed, 0).to_std_rng();
        let lanes = (rng.gen_range(0.0..256.0), rng.gen_range(0.0..256.0));
        Ok(Self {
            cfg,
            lanes,
            duration: None,
        })
    }

    /// Fade the offset linearly to zero over `duration` time units.
    pub fn decaying(mut self, duration: f64) -> Result<Self, NoiseError> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(NoiseError::invalid("duration must be finite and > 0"));
        }
        self.duration = Some(duration);
        Ok(self)
    }

    pub fn cfg(&self) -> &ShakeCfg {
        &self.cfg
    }

    /// Remaining strength in `[0, 1]` at time `t`; constant `1` without decay.
    pub fn strength_at(&self, t: f64) -> f64 {
        match self.duration {
            Some(d) => clamp(1.0 - t / d, 0.0, 1.0),
            None => 1.0,
        }
    }

    /// True once a decaying shake has faded out.
    pub fn is_done(&self, t: f64) -> bool {
        self.duration.is_some_and(|d| t >= d)
    }

    /// Displacement at time `t`; each component lies in `[-amplitude, amplitude]`.
    pub fn offset_at(&self, t: f64) -> Vector2<f64> {
        let c = &self.cfg;
        let s = t * c.frequency;
        let nx = perlin_octave(s, self.lanes.0, 0.0, c.octaves, c.persistence);
        let ny = perlin_octave(s, self.lanes.1, 0.0, c.octaves, c.persistence);
        let k = self.strength_at(t);
        Vector2::new(
            (nx * 2.0 - 1.0) * c.amplitude.x * k,
            (ny * 2.0 - 1.0) * c.amplitude.y * k,
        )
    }
}
