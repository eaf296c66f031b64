//! Number and vector generators for spawners and particle emitters.
//!
//! A generator is anything with a `next_*` method; plain closures qualify
//! through blanket impls, so `|| 3.0` is a `NumGen`.
//!
//! Random generators own a `StdRng` derived from `ReplayToken { seed, index }`
//! where `index` identifies the generator kind. Two generators of different
//! kinds built from one seed therefore draw unrelated streams, and rebuilding
//! with the same seed replays the same values.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

use crate::misc::map;
use crate::noise::perlin;
use crate::sample::{select_index, ReplayToken};
use crate::shapes::{rand_unit, Rect, Vec2Ext};

pub trait NumGen {
    fn next_num(&mut self) -> f64;
}

pub trait VecGen {
    fn next_vec(&mut self) -> Vector2<f64>;
}

impl<F: FnMut() -> f64> NumGen for F {
    fn next_num(&mut self) -> f64 {
        self()
    }
}

impl<F: FnMut() -> Vector2<f64>> VecGen for F {
    fn next_vec(&mut self) -> Vector2<f64> {
        self()
    }
}

// Stream indices per generator kind.
const STREAM_NUM: u64 = 1;
const STREAM_RADIUS: u64 = 2;
const STREAM_CIRCLE: u64 = 3;
const STREAM_ARC: u64 = 4;
const STREAM_RECT: u64 = 5;
const STREAM_RECTS: u64 = 6;
const STREAM_NOISE: u64 = 7;

#[inline]
fn stream(seed: u64, kind: u64) -> StdRng {
    ReplayToken::new(seed, kind).to_std_rng()
}

/// Radius with uniform density over the annulus `min_r..max_r` (not uniform in r).
fn circle_radius<R: Rng + ?Sized>(rng: &mut R, min_r: f64, max_r: f64) -> f64 {
    if max_r == 0.0 || max_r == min_r {
        return max_r;
    }
    let unit_min = (min_r / max_r) * (min_r / max_r);
    (rng.gen::<f64>() * (1.0 - unit_min) + unit_min).sqrt() * max_r
}

/// Always `n`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstNum(pub f64);

impl NumGen for ConstNum {
    #[inline]
    fn next_num(&mut self) -> f64 {
        self.0
    }
}

/// Uniform in `[min, max)`; bounds may be given in either order.
#[derive(Clone, Debug)]
pub struct RandNum {
    min: f64,
    width: f64,
    rng: StdRng,
}

impl RandNum {
    pub fn new(min: f64, max: f64, seed: u64) -> Self {
        Self {
            min,
            width: max - min,
            rng: stream(seed, STREAM_NUM),
        }
    }
}

impl NumGen for RandNum {
    fn next_num(&mut self) -> f64 {
        self.rng.gen::<f64>() * self.width + self.min
    }
}

/// Radius of a point drawn uniformly by area from the annulus `min_r..max_r`.
#[derive(Clone, Debug)]
pub struct RandRadius {
    min_r: f64,
    max_r: f64,
    rng: StdRng,
}

impl RandRadius {
    pub fn new(min_r: f64, max_r: f64, seed: u64) -> Self {
        Self {
            min_r,
            max_r,
            rng: stream(seed, STREAM_RADIUS),
        }
    }
}

impl NumGen for RandRadius {
    fn next_num(&mut self) -> f64 {
        circle_radius(&mut self.rng, self.min_r, self.max_r)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticVec(pub Vector2<f64>);

impl VecGen for StaticVec {
    #[inline]
    fn next_vec(&mut self) -> Vector2<f64> {
        self.0
    }
}

/// Reads a shared cell on every call, so the owner can move the point later.
#[derive(Clone, Debug)]
pub struct DynamicVec(Rc<Cell<Vector2<f64>>>);

impl DynamicVec {
    pub fn new(cell: Rc<Cell<Vector2<f64>>>) -> Self {
        Self(cell)
    }
}

impl VecGen for DynamicVec {
    #[inline]
    fn next_vec(&mut self) -> Vector2<f64> {
        self.0.get()
    }
}

/// Sum of two generators, e.g. a random disc point moved to a spawn position.
#[derive(Clone, Debug)]
pub struct OffsetVec<G, O> {
    gen: G,
    offset: O,
}

impl<G: VecGen, O: VecGen> OffsetVec<G, O> {
    pub fn new(gen: G, offset: O) -> Self {
        Self { gen, offset }
    }
}

impl<G: VecGen, O: VecGen> VecGen for OffsetVec<G, O> {
    fn next_vec(&mut self) -> Vector2<f64> {
        self.gen.next_vec() + self.offset.next_vec()
    }
}

/// Point drawn uniformly by area from the annulus `min_r..max_r` around the origin.
#[derive(Clone, Debug)]
pub struct RandVecCircle {
    min_r: f64,
    max_r: f64,
    rng: StdRng,
}

impl RandVecCircle {
    pub fn new(min_r: f64, max_r: f64, seed: u64) -> Self {
        Self {
            min_r,
            max_r,
            rng: stream(seed, STREAM_CIRCLE),
        }
    }
}

impl VecGen for RandVecCircle {
    fn next_vec(&mut self) -> Vector2<f64> {
        let r = circle_radius(&mut self.rng, self.min_r, self.max_r);
        rand_unit(&mut self.rng) * r
    }
}

/// Point in the annular sector between `min_rad` and `max_rad` (screen
/// counterclockwise from +x). Reversed angle bounds are swapped.
#[derive(Clone, Debug)]
pub struct RandVecArc {
    min_r: f64,
    max_r: f64,
    min_rad: f64,
    max_rad: f64,
    rng: StdRng,
}

impl RandVecArc {
    pub fn new(min_r: f64, max_r: f64, min_rad: f64, max_rad: f64, seed: u64) -> Self {
        let (min_rad, max_rad) = if max_rad < min_rad {
            (max_rad, min_rad)
        } else {
            (min_rad, max_rad)
        };
        Self {
            min_r,
            max_r,
            min_rad,
            max_rad,
            rng: stream(seed, STREAM_ARC),
        }
    }
}

impl VecGen for RandVecArc {
    fn next_vec(&mut self) -> Vector2<f64> {
        let r = circle_radius(&mut self.rng, self.min_r, self.max_r);
        let rad = self.rng.gen::<f64>() * (self.max_rad - self.min_rad) + self.min_rad;
        Vector2::new(r, 0.0).rotated(rad)
    }
}

#[inline]
fn point_in<R: Rng + ?Sized>(rng: &mut R, r: &Rect) -> Vector2<f64> {
    Vector2::new(rng.gen::<f64>() * r.w + r.x, rng.gen::<f64>() * r.h + r.y)
}

#[derive(Clone, Debug)]
pub struct RandVecRect {
    rect: Rect,
    rng: StdRng,
}

impl RandVecRect {
    pub fn new(rect: Rect, seed: u64) -> Self {
        Self {
            rect,
            rng: stream(seed, STREAM_RECT),
        }
    }
}

impl VecGen for RandVecRect {
    fn next_vec(&mut self) -> Vector2<f64> {
        point_in(&mut self.rng, &self.rect)
    }
}

/// Uniform over the union of `rects` (each rect weighted by its area).
/// Overlapping regions are sampled more often. No rects yields the zero vector.
#[derive(Clone, Debug)]
pub struct RandVecRects {
    rects: Vec<Rect>,
    areas: Vec<f64>,
    rng: StdRng,
}

impl RandVecRects {
    pub fn new(rects: Vec<Rect>, seed: u64) -> Self {
        let areas = rects.iter().map(|r| r.area().abs()).collect();
        Self {
            rects,
            areas,
            rng: stream(seed, STREAM_RECTS),
        }
    }
}

impl VecGen for RandVecRects {
    fn next_vec(&mut self) -> Vector2<f64> {
        match select_index(&self.areas, &mut self.rng) {
            Some(i) => point_in(&mut self.rng, &self.rects[i]),
            None => Vector2::zeros(),
        }
    }
}

/// Smoothly wandering point inside `bounds`, advancing `step` noise units per call.
#[derive(Clone, Debug)]
pub struct NoiseVec {
    bounds: Rect,
    step: f64,
    t: f64,
    lanes: (f64, f64),
}

impl NoiseVec {
    pub fn new(bounds: Rect, step: f64, seed: u64) -> Self {
        let mut rng = stream(seed, STREAM_NOISE);
        Self {
            bounds,
            step,
            t: rng.gen_range(0.0..256.0),
            lanes: (rng.gen_range(0.0..256.0), rng.gen_range(0.0..256.0)),
        }
    }
}

impl VecGen for NoiseVec {
    fn next_vec(&mut self) -> Vector2<f64> {
        let b = &self.bounds;
        let nx = perlin(self.t, self.lanes.0, 0.0);
        let ny = perlin(self.t, self.lanes.1, 0.0);
        self.t += self.step;
        Vector2::new(
            map(nx, 0.0, 1.0, b.left(), b.right()),
            map(ny, 0.0, 1.0, b.top(), b.bottom()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::vec2;
    use std::f64::consts::FRAC_PI_4;

    const TRIALS: usize = 1000;
    const EPS: f64 = 1e-9;

    fn between(n: f64, a: f64, b: f64) -> bool {
        let (a, b) = if a > b { (b, a) } else { (a, b) };
        (a <= n && n < b) || (n == a && n == b)
    }

    fn between_eps(n: f64, a: f64, b: f64) -> bool {
        let (a, b) = if a > b { (b, a) } else { (a, b) };
        a - EPS <= n && n < b + EPS
    }

    #[test]
    fn const_and_closure_gens() {
        let mut g = ConstNum(0.25);
        assert!((0..10).all(|_| g.next_num() == 0.25));

        let mut n = 0.0;
        let mut counter = move || {
            n += 1.0;
            n
        };
        assert_eq!(counter.next_num(), 1.0);
        assert_eq!(counter.next_num(), 2.0);

        let mut v = || vec2(1.0, 2.0);
        assert_eq!(v.next_vec(), vec2(1.0, 2.0));
    }

    #[test]
    fn rand_num_stays_in_bounds() {
        let cases = [
            (0.0, 0.0),
            (0.0, 1.0),
            (2.0, 2.0),
            (3.0, 2.0),
            (-1.0, 1.0),
            (1.0, -1.0),
            (-1.0, -3.0),
            (-3.0, -1.0),
        ];
        for (i, (a, b)) in cases.into_iter().enumerate() {
            let mut g = RandNum::new(a, b, i as u64);
            for _ in 0..TRIALS {
                let got = g.next_num();
                assert!(between_eps(got, a, b), "case {i}: {got}");
            }
        }
    }

    #[test]
    fn rand_radius_stays_in_bounds() {
        for (i, (a, b)) in [(0.0, 0.0), (0.0, 1.0), (2.0, 2.0), (3.0, 2.0)]
            .into_iter()
            .enumerate()
        {
            let mut g = RandRadius::new(a, b, 17);
            for _ in 0..TRIALS {
                let got = g.next_num();
                assert!(between_eps(got, a, b), "case {i}: {got}");
            }
        }
    }

    #[test]
    fn rand_radius_is_area_uniform() {
        // half the area of the unit disc lies beyond r = 1/sqrt(2)
        let mut g = RandRadius::new(0.0, 1.0, 5);
        let outer = (0..20_000)
            .filter(|_| g.next_num() > std::f64::consts::FRAC_1_SQRT_2)
            .count();
        assert!((outer as f64 / 20_000.0 - 0.5).abs() < 0.02);
    }

    #[test]
    fn same_seed_replays() {
        let mut a = RandVecCircle::new(1.0, 4.0, 8);
        let mut b = RandVecCircle::new(1.0, 4.0, 8);
        for _ in 0..20 {
            assert_eq!(a.next_vec(), b.next_vec());
        }
    }

    #[test]
    fn dynamic_vec_tracks_cell() {
        let cell = Rc::new(Cell::new(Vector2::zeros()));
        let mut g = DynamicVec::new(Rc::clone(&cell));
        assert_eq!(g.next_vec(), Vector2::zeros());
        cell.set(vec2(10.0, 0.0));
        assert_eq!(g.next_vec(), vec2(10.0, 0.0));
    }

    #[test]
    fn offset_vec_adds() {
        let mut rng = ReplayToken::new(1, 99).to_std_rng();
        let v = rand_unit(&mut rng);
        for _ in 0..100 {
            let off = rand_unit(&mut rng);
            let mut g = OffsetVec::new(StaticVec(v), StaticVec(off));
            assert!(g.next_vec().approx_eq(v + off, EPS));
        }
        let mut around = OffsetVec::new(RandVecCircle::new(0.0, 2.0, 3), StaticVec(vec2(100.0, 100.0)));
        assert!(around.next_vec().dist(vec2(100.0, 100.0)) <= 2.0 + EPS);
    }

    #[test]
    fn rand_vec_circle_lengths() {
        let cases = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 5.0), (5.0, 3.0), (5.0, 5.0)];
        for (i, (a, b)) in cases.into_iter().enumerate() {
            let mut g = RandVecCircle::new(a, b, i as u64);
            for _ in 0..TRIALS {
                let v = g.next_vec();
                assert!(between_eps(v.norm(), a, b), "case {i}: {v:?}");
            }
        }
    }

    #[test]
    fn rand_vec_arc_lengths_and_angles() {
        let cases = [
            (0.0, 1.0, -FRAC_PI_4, FRAC_PI_4),
            (1.0, 1.0, -FRAC_PI_4, FRAC_PI_4),
            (0.0, 5.0, FRAC_PI_4, -FRAC_PI_4),
            (5.0, 3.0, FRAC_PI_4, -FRAC_PI_4),
            (5.0, 5.0, FRAC_PI_4, -FRAC_PI_4),
        ];
        for (i, (r1, r2, a1, a2)) in cases.into_iter().enumerate() {
            let mut g = RandVecArc::new(r1, r2, a1, a2, 21);
            for _ in 0..TRIALS {
                let v = g.next_vec();
                assert!(between_eps(v.norm(), r1, r2), "case {i}: len {}", v.norm());
                if v.norm() > 0.0 {
                    assert!(between_eps(v.screen_angle(), a1, a2), "case {i}: {v:?}");
                }
            }
        }
    }

    #[test]
    fn rand_vec_rect_inside() {
        let rect = Rect::new(-20.0, 13.5, 40.0, 7.25);
        let mut g = RandVecRect::new(rect, 4);
        for _ in 0..TRIALS {
            let v = g.next_vec();
            assert!(rect.collide_point(v.x, v.y), "{v:?}");
        }
    }

    #[test]
    fn rand_vec_rects_inside_union() {
        let mut zero = RandVecRects::new(Vec::new(), 0);
        assert_eq!(zero.next_vec(), Vector2::zeros());

        let mut setup = ReplayToken::new(2, 0).to_std_rng();
        let rects: Vec<Rect> = (0..12)
            .map(|_| {
                Rect::new(
                    setup.gen::<f64>() * 100.0 - 50.0,
                    setup.gen::<f64>() * 100.0 - 50.0,
                    setup.gen::<f64>() * 100.0,
                    setup.gen::<f64>() * 100.0,
                )
            })
            .collect();
        let mut g = RandVecRects::new(rects.clone(), 9);
        for _ in 0..TRIALS {
            let v = g.next_vec();
            assert!(rects.iter().any(|r| r.collide_point(v.x, v.y)), "{v:?}");
        }
    }

    #[test]
    fn rand_vec_rects_skip_empty_rects() {
        let rects = vec![Rect::new(0.0, 0.0, 0.0, 10.0), Rect::new(5.0, 5.0, 1.0, 1.0)];
        let mut g = RandVecRects::new(rects, 1);
        for _ in 0..100 {
            let v = g.next_vec();
            assert!(between(v.x, 5.0, 6.0) && between(v.y, 5.0, 6.0), "{v:?}");
        }
    }

    #[test]
    fn noise_vec_wanders_smoothly_inside_bounds() {
        let bounds = Rect::new(-10.0, 0.0, 20.0, 5.0);
        let mut g = NoiseVec::new(bounds, 0.01, 42);
        let mut prev = g.next_vec();
        for _ in 0..500 {
            let v = g.next_vec();
            assert!(v.x >= -10.0 && v.x <= 10.0 && v.y >= 0.0 && v.y <= 5.0, "{v:?}");
            assert!(v.dist(prev) < 1.0, "jump {prev:?} -> {v:?}");
            prev = v;
        }
    }
}
