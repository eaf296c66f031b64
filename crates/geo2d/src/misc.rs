//! Scalar helpers shared by the shapes and generators.

/// Returns `n` limited to `[min(a, b), max(a, b)]`; the bounds may come in either order.
#[inline]
pub fn clamp(n: f64, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a > b { (b, a) } else { (a, b) };
    if n < lo {
        lo
    } else if n > hi {
        hi
    } else {
        n
    }
}

/// Linear remap of `n` from the range `[a, b]` onto `[c, d]`.
///
/// Values outside `[a, b]` extrapolate. `a == b` divides by zero (IEEE result).
#[inline]
pub fn map(n: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    (n - a) / (b - a) * (d - c) + c
}

/// Floored modulo: the result carries the sign of `m` (`modulo(-6, 4) == 2`).
#[inline]
pub fn modulo(n: f64, m: f64) -> f64 {
    n - m * (n / m).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_accepts_bounds_in_either_order() {
        let cases = [
            (0.0, 0.0, 0.0, 0.0),
            (0.0, 1.0, 2.0, 1.0),
            (0.0, 2.0, 1.0, 1.0),
            (3.0, 1.0, 2.0, 2.0),
            (3.0, 2.0, 1.0, 2.0),
            (1.2, 1.0, 2.0, 1.2),
            (1.2, 2.0, 1.0, 1.2),
        ];
        for (i, (n, a, b, want)) in cases.into_iter().enumerate() {
            assert_eq!(clamp(n, a, b), want, "case {i}");
        }
    }

    #[test]
    fn map_remaps_linearly() {
        assert_eq!(map(0.0, -1.0, 1.0, 0.0, 1.0), 0.5);
        assert_eq!(map(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
        // reversed target range
        assert_eq!(map(2.5, 0.0, 10.0, 1.0, 0.0), 0.75);
    }

    #[test]
    fn modulo_is_floored() {
        assert_eq!(modulo(1.0, 4.0), 1.0);
        assert_eq!(modulo(4.0, 4.0), 0.0);
        assert_eq!(modulo(-6.0, 4.0), 2.0);
        assert_eq!(modulo(6.0, -4.0), -2.0);
        assert!((modulo(5.5, 2.0) - 1.5).abs() < 1e-12);
    }
}
