//! Orientation predicates.
//!
//! Sign convention for `side_of_line`: negative = right of the directed line,
//! positive = left, zero = collinear. Zero means exactly zero in `f64`; no
//! tolerance is applied, so callers get reproducible signs as long as they
//! feed the same operands in the same order.

use nalgebra::Vector2;

/// z-component of `(x1, y1) × (x2, y2)`.
#[inline]
pub fn cross_product(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    x1 * y2 - y1 * x2
}

/// Signed (doubled) area of the triangle `(x1,y1) → (x2,y2) → (px,py)`.
#[inline]
pub fn side_of_line(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> f64 {
    cross_product(x2 - x1, y2 - y1, px - x1, py - y1)
}

/// `side_of_line` for vector arguments.
#[inline]
pub fn orient(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> f64 {
    side_of_line(a.x, a.y, b.x, b.y, p.x, p.y)
}

/// Classified result of `side_of_line`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Right,
    On,
    Left,
}

impl Side {
    /// NaN maps to `On`: it is neither strictly left nor strictly right.
    #[inline]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Side::Right
        } else if value > 0.0 {
            Side::Left
        } else {
            Side::On
        }
    }

    #[inline]
    pub fn classify(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> Self {
        Self::of(orient(a, b, p))
    }

    /// Strictly opposite sides (neither is `On`).
    #[inline]
    pub fn opposes(self, other: Side) -> bool {
        matches!(
            (self, other),
            (Side::Left, Side::Right) | (Side::Right, Side::Left)
        )
    }
}

/// `p` lies in the closed coordinate range of segment `a–b`.
///
/// Only meaningful once `p` is known to be collinear with `a–b`.
#[inline]
pub fn within_extent(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    #[test]
    fn cross_product_zero_vectors() {
        assert_eq!(cross_product(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(cross_product(1.0, 1.0, 1.0, 1.0), 0.0);
        assert_eq!(cross_product(1.0, 0.0, 0.0, 2.5), 2.5);
    }

    #[test]
    fn side_of_line_right() {
        let (x1, y1, x2, y2) = (0.0, 0.0, 10.0, 10.0);
        assert!(side_of_line(x1, y1, x2, y2, 10.0, 5.0) < 0.0);
        assert!(side_of_line(x1, y1, x2, y2, 0.0, -1.0) < 0.0);
        assert!(side_of_line(x1, y1, x2, y2, 5.000000001, 5.0) < 0.0);
    }

    #[test]
    fn side_of_line_left() {
        let (x1, y1, x2, y2) = (0.0, 0.0, 10.0, 10.0);
        assert!(side_of_line(x1, y1, x2, y2, 5.0, 10.0) > 0.0);
        assert!(side_of_line(x1, y1, x2, y2, -0.000001, 0.0) > 0.0);
        assert!(side_of_line(x1, y1, x2, y2, 4.9999999999, 5.0) > 0.0);
    }

    #[test]
    fn side_of_line_on_line() {
        let (x1, y1, x2, y2) = (0.0, 0.0, 10.0, 10.0);
        assert_eq!(side_of_line(x1, y1, x2, y2, 10.0, 10.0), 0.0);
        assert_eq!(side_of_line(x1, y1, x2, y2, 0.0, 0.0), 0.0);
        assert_eq!(side_of_line(x1, y1, x2, y2, -10.0, -10.0), 0.0);
    }

    #[test]
    fn side_classification() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert_eq!(Side::classify(a, b, vector![0.5, 1.0]), Side::Left);
        assert_eq!(Side::classify(a, b, vector![0.5, -1.0]), Side::Right);
        assert_eq!(Side::classify(a, b, vector![7.0, 0.0]), Side::On);
        assert_eq!(Side::of(f64::NAN), Side::On);
        assert!(Side::Left.opposes(Side::Right));
        assert!(!Side::Left.opposes(Side::On));
        assert!(within_extent(a, b, vector![1.0, 0.0]));
        assert!(!within_extent(a, b, vector![1.0 + 1e-12, 0.0]));
    }

    proptest! {
        #[test]
        fn cross_product_parallel_is_zero(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            prop_assert_eq!(cross_product(a, b, a, b), 0.0);
        }

        #[test]
        fn side_of_line_flips_with_direction(
            x1 in -100i32..100, y1 in -100i32..100,
            x2 in -100i32..100, y2 in -100i32..100,
            px in -100i32..100, py in -100i32..100,
        ) {
            // Integer-valued inputs keep every intermediate exact.
            let (x1, y1, x2, y2, px, py) =
                (x1 as f64, y1 as f64, x2 as f64, y2 as f64, px as f64, py as f64);
            let fwd = side_of_line(x1, y1, x2, y2, px, py);
            let rev = side_of_line(x2, y2, x1, y1, px, py);
            prop_assert_eq!(fwd, -rev);
        }
    }
}
