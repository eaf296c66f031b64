//! Overlap and containment predicates for circles, rects and points.
//!
//! Edge policy: touching shapes do not collide. The one exception is
//! point-in-rect, which is half-open per axis (`[left, right) × [top, bottom)`),
//! so a tiling of rects assigns every point to exactly one tile.
//!
//! The `Collide<T>` trait is the generic surface; the inherent `collide_*`
//! methods are thin wrappers for call sites that know their concrete types.

use nalgebra::Vector2;

use crate::shapes::{Circle, Rect, Vec2Ext};

/// Overlap test between `Self` and `T`. Implementations are symmetric where
/// both directions exist.
pub trait Collide<T: ?Sized> {
    fn collides(&self, other: &T) -> bool;
}

/// Index of the first element of `others` that `shape` collides with.
pub fn first_collision<S, T>(shape: &S, others: &[T]) -> Option<usize>
where
    S: Collide<T> + ?Sized,
{
    others.iter().position(|o| shape.collides(o))
}

/// Indices of every element of `others` that `shape` collides with, in input order.
pub fn all_collisions<S, T>(shape: &S, others: &[T]) -> Vec<usize>
where
    S: Collide<T> + ?Sized,
{
    others
        .iter()
        .enumerate()
        .filter(|(_, o)| shape.collides(*o))
        .map(|(i, _)| i)
        .collect()
}

impl Collide<Vector2<f64>> for Circle {
    #[inline]
    fn collides(&self, p: &Vector2<f64>) -> bool {
        self.pos().dist2(*p) < self.r * self.r
    }
}

impl Collide<Circle> for Circle {
    #[inline]
    fn collides(&self, other: &Circle) -> bool {
        let rr = self.r + other.r;
        self.pos().dist2(other.pos()) < rr * rr
    }
}

impl Collide<Rect> for Circle {
    /// Nearest point of the rect to the center, tested against the circle.
    #[inline]
    fn collides(&self, r: &Rect) -> bool {
        self.collides(&self.pos().clamped_to(*r))
    }
}

impl Collide<Vector2<f64>> for Rect {
    #[inline]
    fn collides(&self, p: &Vector2<f64>) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

impl Collide<Rect> for Rect {
    #[inline]
    fn collides(&self, o: &Rect) -> bool {
        self.left() < o.right()
            && self.right() > o.left()
            && self.top() < o.bottom()
            && self.bottom() > o.top()
    }
}

impl Collide<Circle> for Rect {
    #[inline]
    fn collides(&self, c: &Circle) -> bool {
        c.collides(self)
    }
}

impl Circle {
    #[inline]
    pub fn collide_point(&self, x: f64, y: f64) -> bool {
        self.collides(&Vector2::new(x, y))
    }
    #[inline]
    pub fn collide_circle(&self, other: &Circle) -> bool {
        self.collides(other)
    }
    #[inline]
    pub fn collide_rect(&self, r: &Rect) -> bool {
        self.collides(r)
    }
    pub fn collide_circle_list(&self, others: &[Circle]) -> Option<usize> {
        first_collision(self, others)
    }
    pub fn collide_circle_list_all(&self, others: &[Circle]) -> Vec<usize> {
        all_collisions(self, others)
    }
    pub fn collide_rect_list(&self, rs: &[Rect]) -> Option<usize> {
        first_collision(self, rs)
    }
    pub fn collide_rect_list_all(&self, rs: &[Rect]) -> Vec<usize> {
        all_collisions(self, rs)
    }

    /// True if `other` lies strictly inside `self`.
    pub fn contains(&self, other: &Circle) -> bool {
        let dr = self.r - other.r;
        self.r >= other.r && self.pos().dist2(other.pos()) < dr * dr
    }
}

impl Rect {
    /// Half-open: points on the right or bottom edge are outside.
    #[inline]
    pub fn collide_point(&self, x: f64, y: f64) -> bool {
        self.collides(&Vector2::new(x, y))
    }
    #[inline]
    pub fn collide_rect(&self, other: &Rect) -> bool {
        self.collides(other)
    }
    #[inline]
    pub fn collide_circle(&self, c: &Circle) -> bool {
        self.collides(c)
    }
    pub fn collide_rect_list(&self, others: &[Rect]) -> Option<usize> {
        first_collision(self, others)
    }
    pub fn collide_rect_list_all(&self, others: &[Rect]) -> Vec<usize> {
        all_collisions(self, others)
    }
    pub fn collide_circle_list(&self, cs: &[Circle]) -> Option<usize> {
        first_collision(self, cs)
    }
    pub fn collide_circle_list_all(&self, cs: &[Circle]) -> Vec<usize> {
        all_collisions(self, cs)
    }

    /// True if `other` lies within `self`; shared edges count as inside.
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::vec2;
    use proptest::prelude::*;

    fn rect_ring() -> Vec<Rect> {
        vec![
            Rect::new(0.0, 0.0, 7.0, 1.0),
            Rect::new(0.0, 0.0, 1.0, 7.0),
            Rect::new(6.0, 0.0, 2.0, 7.0),
            Rect::new(0.0, 6.0, 7.0, 2.0),
        ]
    }

    #[test]
    fn rect_point_is_half_open() {
        let r = Rect::new(1.0, 1.0, 5.0, 5.0);
        let cases = [
            (0.0, 0.0, false),
            (1.0, 1.0, true),
            (4.0, 4.0, true),
            (5.0, 5.0, true),
            (6.0, 6.0, false),
            (6.0, 3.0, false),
            (3.0, 6.0, false),
        ];
        for (x, y, want) in cases {
            assert_eq!(r.collide_point(x, y), want, "({x}, {y})");
        }
    }

    #[test]
    fn rect_rect_touching_edges_miss() {
        let r = Rect::new(1.0, 1.0, 5.0, 5.0);
        for o in rect_ring() {
            assert!(!r.collide_rect(&o), "{o}");
            assert!(!o.collide_rect(&r), "{o}");
        }
        assert!(r.collide_rect(&Rect::new(0.0, 0.0, 2.0, 2.0)));
        assert!(r.collide_rect(&Rect::new(5.0, 5.0, 2.0, 2.0)));
    }

    #[test]
    fn rect_lists() {
        let r = Rect::new(1.0, 1.0, 5.0, 5.0);
        let mut rs = rect_ring();
        rs.insert(3, Rect::new(0.0, 0.0, 2.0, 2.0));
        rs.push(Rect::new(5.0, 5.0, 2.0, 2.0));
        assert_eq!(r.collide_rect_list(&rs), Some(3));
        assert_eq!(r.collide_rect_list_all(&rs), vec![3, 5]);

        assert_eq!(r.collide_rect_list(&rect_ring()), None);
        assert!(r.collide_rect_list_all(&rect_ring()).is_empty());
        assert_eq!(r.collide_rect_list(&[]), None);
        assert!(r.collide_rect_list_all(&[]).is_empty());
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let r = Rect::new(1.0, 1.0, 5.0, 5.0);
        assert!(!r.contains(&Rect::new(2.0, 2.0, 5.0, 2.0)));
        assert!(r.contains(&Rect::new(2.0, 2.0, 4.0, 2.0)));
        assert!(r.contains(&r));
    }

    #[test]
    fn circle_circle() {
        let cases = [
            (Circle::new(0.0, 1.0, 2.0), Circle::new(0.0, 5.0, 3.0), true),
            (Circle::new(0.0, 1.0, 2.0), Circle::new(0.0, 2.0, 5.0), true),
            (Circle::new(0.0, 2.0, 5.0), Circle::new(0.0, 1.0, 2.0), true),
            (Circle::new(0.0, 1.0, 2.0), Circle::new(0.0, 4.0, 1.1), true),
            // touching
            (Circle::new(0.0, 1.0, 2.0), Circle::new(0.0, 4.0, 1.0), false),
            (Circle::new(1.0, 1.0, 5.0), Circle::new(0.0, 0.0, 7.0), true),
        ];
        for (i, (a, b, want)) in cases.into_iter().enumerate() {
            assert_eq!(a.collide_circle(&b), want, "case {i}");
            assert_eq!(b.collide_circle(&a), want, "case {i} swapped");
        }
    }

    #[test]
    fn circle_point() {
        let c = Circle::new(0.0, 1.0, 2.0);
        let cases = [
            (vec2(0.0, 0.0), true),
            (vec2(0.0, -1.0), false),
            (vec2(0.0, 2.0), true),
            (vec2(0.0, 3.0), false),
            (vec2(0.0, 2.99), true),
        ];
        for (p, want) in cases {
            assert_eq!(c.collide_point(p.x, p.y), want, "{p:?}");
        }
    }

    #[test]
    fn circle_contains() {
        assert!(!Circle::new(0.0, 1.0, 2.0).contains(&Circle::new(0.0, 5.0, 3.0)));
        assert!(!Circle::new(0.0, 1.0, 2.0).contains(&Circle::new(0.0, 2.0, 5.0)));
        assert!(Circle::new(0.0, 2.0, 5.0).contains(&Circle::new(0.0, 1.0, 2.0)));
        // internally tangent
        assert!(!Circle::new(0.0, 0.0, 5.0).contains(&Circle::new(3.0, 0.0, 2.0)));
    }

    #[test]
    fn circle_lists() {
        let c = Circle::new(1.0, 1.0, 5.0);
        let misses = vec![
            Circle::new(10.0, 10.0, 7.0),
            Circle::new(-7.0, 0.0, 1.0),
            Circle::new(7.0, 0.0, 1.0),
            Circle::new(0.0, 8.0, 2.0),
            Circle::new(-5.0, -5.0, 2.0),
        ];
        let mut cs = misses.clone();
        cs.insert(4, Circle::new(2.0, 2.0, 2.0));
        cs.push(Circle::new(0.0, 0.0, 2.0));

        assert_eq!(c.collide_circle_list(&cs), Some(4));
        assert_eq!(c.collide_circle_list_all(&cs), vec![4, 6]);
        assert_eq!(c.collide_circle_list(&misses), None);
        assert!(c.collide_circle_list_all(&misses).is_empty());
        assert_eq!(c.collide_circle_list(&[]), None);
    }

    #[test]
    fn circle_rect() {
        let r = Rect::new(0.0, 0.0, 7.0, 1.0);
        let cases = [
            (Circle::new(-2.0, 0.0, 1.0), false),
            (Circle::new(-1.0, 0.0, 1.0), false),
            (Circle::new(-0.9, 0.0, 1.0), true),
            (Circle::new(5.0, 0.0, 1.0), true),
            (Circle::new(5.0, -2.0, 1.0), false),
            (Circle::new(5.0, -2.0, 2.0), false),
            (Circle::new(5.0, -2.0, 2.1), true),
            (Circle::new(8.0, 3.0, 1.0), false),
            (Circle::new(8.0, 3.0, 2.0), false),
            (Circle::new(8.0, 3.0, 3.0), true),
        ];
        for (i, (c, want)) in cases.into_iter().enumerate() {
            assert_eq!(c.collide_rect(&r), want, "case {i}");
            assert_eq!(r.collide_circle(&c), want, "case {i} swapped");
        }
    }

    #[test]
    fn circle_rect_lists() {
        let c = Circle::new(4.0, 3.0, 2.0);
        let rs = [
            Rect::new(2.0, -3.0, 4.0, 2.0),
            Rect::new(6.0, 3.0, 3.0, 3.0),
            Rect::new(-1.0, 3.0, 4.0, 3.0),
            Rect::new(-5.0, -3.0, 2.0, 4.0),
            Rect::new(4.0, 0.0, 3.0, 2.0),
        ];
        assert_eq!(c.collide_rect_list(&rs), Some(2));
        assert_eq!(c.collide_rect_list_all(&rs), vec![2, 4]);

        let misses = [rs[0], rs[1], rs[3]];
        assert_eq!(c.collide_rect_list(&misses), None);
        assert!(c.collide_rect_list_all(&misses).is_empty());
        assert_eq!(Circle::unit_at(1.0, 1.0).collide_rect_list(&[]), None);
    }

    #[test]
    fn generic_scanners_accept_points() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        let pts = [vec2(2.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 0.0)];
        assert_eq!(first_collision(&r, &pts), Some(1));
        assert_eq!(all_collisions(&r, &pts), vec![1, 2]);
        assert_eq!(all_collisions(&Circle::new(0.0, 0.0, 1.5), &pts), vec![1, 2]);
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -10.0f64..10.0, ay in -10.0f64..10.0, aw in 0.0f64..8.0, ah in 0.0f64..8.0,
            bx in -10.0f64..10.0, by in -10.0f64..10.0, r in 0.0f64..8.0,
            bw in 0.0f64..8.0, bh in 0.0f64..8.0,
        ) {
            let ra = Rect::new(ax, ay, aw, ah);
            let rb = Rect::new(bx, by, bw, bh);
            let cb = Circle::new(bx, by, r);
            let ca = Circle::new(ax, ay, r);
            prop_assert_eq!(ra.collides(&rb), rb.collides(&ra));
            prop_assert_eq!(ca.collides(&cb), cb.collides(&ca));
            prop_assert_eq!(ra.collides(&cb), cb.collides(&ra));
        }

        #[test]
        fn contained_rect_collides_unless_empty(
            x in -10.0f64..10.0, y in -10.0f64..10.0, w in 0.1f64..8.0, h in 0.1f64..8.0,
            fx in 0.0f64..0.5, fy in 0.0f64..0.5,
        ) {
            let outer = Rect::new(x, y, w, h);
            let inner = Rect::new(x + fx * w, y + fy * h, w / 4.0, h / 4.0);
            prop_assert!(outer.contains(&inner));
            prop_assert!(outer.collides(&inner));
        }
    }
}
