//! Linear interpolation and easing curves.
//!
//! An `Ease` maps progress `t ∈ [0, 1]` to eased progress, with `0 → 0` and
//! `1 → 1`; `Back` and `Elastic` overshoot in between. Curve formulas follow
//! the AHEasing collection.

use nalgebra::Vector2;
use std::f64::consts::PI;

/// `(1 - t)·a + t·b`: exact at both ends.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

#[inline]
pub fn lerp_vec(a: Vector2<f64>, b: Vector2<f64>, t: f64) -> Vector2<f64> {
    Vector2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Interpolate from `a` to `b` along `curve`.
#[inline]
pub fn ease(a: f64, b: f64, t: f64, curve: Ease) -> f64 {
    lerp(a, b, curve.apply(t))
}

pub fn ease_vec(a: Vector2<f64>, b: Vector2<f64>, t: f64, curve: Ease) -> Vector2<f64> {
    lerp_vec(a, b, curve.apply(t))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    /// `t^power`.
    In(f64),
    /// `1 - |(t - 1)^power|`.
    Out(f64),
    /// `In` over the first half, `Out` over the second.
    InOut(f64),
    InSine,
    OutSine,
    InOutSine,
    InCirc,
    OutCirc,
    InOutCirc,
    InExpo,
    OutExpo,
    InOutExpo,
    InElastic,
    OutElastic,
    InOutElastic,
    InBack,
    OutBack,
    InOutBack,
    InBounce,
    OutBounce,
    InOutBounce,
}

impl Ease {
    pub const LINEAR: Ease = Ease::In(1.0);

    pub const IN_QUAD: Ease = Ease::In(2.0);
    pub const OUT_QUAD: Ease = Ease::Out(2.0);
    pub const IN_OUT_QUAD: Ease = Ease::InOut(2.0);

    pub const IN_CUBIC: Ease = Ease::In(3.0);
    pub const OUT_CUBIC: Ease = Ease::Out(3.0);
    pub const IN_OUT_CUBIC: Ease = Ease::InOut(3.0);

    pub const IN_QUART: Ease = Ease::In(4.0);
    pub const OUT_QUART: Ease = Ease::Out(4.0);
    pub const IN_OUT_QUART: Ease = Ease::InOut(4.0);

    pub const IN_QUINT: Ease = Ease::In(5.0);
    pub const OUT_QUINT: Ease = Ease::Out(5.0);
    pub const IN_OUT_QUINT: Ease = Ease::InOut(5.0);

    /// Eased progress for `t`. Inputs outside `[0, 1]` are not clamped.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Ease::In(p) => t.powf(p),
            Ease::Out(p) => 1.0 - (t - 1.0).powf(p).abs(),
            Ease::InOut(p) => {
                if t < 0.5 {
                    Ease::In(p).apply(t * 2.0) / 2.0
                } else {
                    Ease::Out(p).apply(t * 2.0 - 1.0) / 2.0 + 0.5
                }
            }
            Ease::InSine => ((t - 1.0) * PI / 2.0).sin() + 1.0,
            Ease::OutSine => (t * PI / 2.0).sin(),
            Ease::InOutSine => 0.5 * (1.0 - (t * PI).cos()),
            Ease::InCirc => 1.0 - (1.0 - t * t).sqrt(),
            Ease::OutCirc => ((2.0 - t) * t).sqrt(),
            Ease::InOutCirc => {
                if t < 0.5 {
                    0.5 * (1.0 - (1.0 - 4.0 * (t * t)).sqrt())
                } else {
                    0.5 * ((-(2.0 * t - 3.0) * (2.0 * t - 1.0)).sqrt() + 1.0)
                }
            }
            Ease::InExpo => {
                if t == 0.0 {
                    t
                } else {
                    2f64.powf(10.0 * (t - 1.0))
                }
            }
            Ease::OutExpo => {
                if t == 1.0 {
                    t
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Ease::InOutExpo => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    0.5 * 2f64.powf(20.0 * t - 10.0)
                } else {
                    -0.5 * 2f64.powf(-20.0 * t + 10.0) + 1.0
                }
            }
            Ease::InElastic => (13.0 * PI / 2.0 * t).sin() * 2f64.powf(10.0 * (t - 1.0)),
            Ease::OutElastic => {
                (-13.0 * PI / 2.0 * (t + 1.0)).sin() * 2f64.powf(-10.0 * t) + 1.0
            }
            Ease::InOutElastic => {
                if t < 0.5 {
                    0.5 * (13.0 * PI / 2.0 * (2.0 * t)).sin() * 2f64.powf(10.0 * (2.0 * t - 1.0))
                } else {
                    0.5 * ((-13.0 * PI / 2.0 * ((2.0 * t - 1.0) + 1.0)).sin()
                        * 2f64.powf(-10.0 * (2.0 * t - 1.0))
                        + 2.0)
                }
            }
            Ease::InBack => in_back(t),
            Ease::OutBack => 1.0 - in_back(1.0 - t),
            Ease::InOutBack => {
                if t < 0.5 {
                    0.5 * in_back(2.0 * t)
                } else {
                    0.5 * (1.0 - in_back(1.0 - (2.0 * t - 1.0))) + 0.5
                }
            }
            Ease::InBounce => 1.0 - out_bounce(1.0 - t),
            Ease::OutBounce => out_bounce(t),
            Ease::InOutBounce => {
                if t < 0.5 {
                    0.5 * (1.0 - out_bounce(1.0 - t * 2.0))
                } else {
                    0.5 * out_bounce(t * 2.0 - 1.0) + 0.5
                }
            }
        }
    }
}

#[inline]
fn in_back(t: f64) -> f64 {
    t * t * t - t * (t * PI).sin()
}

fn out_bounce(t: f64) -> f64 {
    if t < 4.0 / 11.0 {
        (121.0 * t * t) / 16.0
    } else if t < 8.0 / 11.0 {
        (363.0 / 40.0 * t * t) - (99.0 / 10.0 * t) + 17.0 / 5.0
    } else if t < 9.0 / 10.0 {
        (4356.0 / 361.0 * t * t) - (35442.0 / 1805.0 * t) + 16061.0 / 1805.0
    } else {
        (54.0 / 5.0 * t * t) - (513.0 / 25.0 * t) + 268.0 / 25.0
    }
}
