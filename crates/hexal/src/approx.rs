//! Epsilon-based comparison predicates.
//!
//! Every function here is a total predicate: no panics, no errors. The
//! `close_*` family is an optimization/classification aid, never a
//! replacement for exact equality; callers must not rely on its result
//! for correctness.

use crate::{Real, Scalar};

/// Inclusive bounds test: `lower <= value <= upper`.
#[inline]
pub fn in_range<S: Scalar>(value: S, lower: S, upper: S) -> bool {
    lower <= value && value <= upper
}

/// Weak betweenness, order-independent in `a` and `b`: true when `c` lies
/// in the closed interval spanned by `a` and `b`, whichever is larger.
#[inline]
pub fn is_between<S: Scalar>(c: S, a: S, b: S) -> bool {
    (a <= c && c <= b) || (b <= c && c <= a)
}

/// Absolute closeness: `|a - b| <= epsilon`, for a caller-chosen tolerance.
#[inline]
pub fn close_to<S: Real>(a: S, b: S, epsilon: S) -> bool {
    (a - b).abs() <= epsilon
}

/// Scaled closeness: the effective tolerance is `(|a| + |b| + 10) * epsilon`,
/// so the predicate stays meaningful for both tiny and huge operands.
#[inline]
pub fn close_to_scaled<S: Real>(a: S, b: S, epsilon: S) -> bool {
    let tol = (a.abs() + b.abs() + S::from_i32(10)) * epsilon;
    let d = a - b;
    -tol < d && d < tol
}

/// Scaled closeness at machine epsilon.
#[inline]
pub fn close<S: Real>(a: S, b: S) -> bool {
    close_to_scaled(a, b, S::EPSILON)
}

/// Strictly less: `a < b` AND the values are not within tolerance of each
/// other. Values within epsilon compare as neither less nor greater.
#[inline]
pub fn strictly_less<S: Real>(a: S, b: S, epsilon: S) -> bool {
    a < b && !close_to_scaled(a, b, epsilon)
}

/// Strictly greater: `a > b` AND not within tolerance.
#[inline]
pub fn strictly_greater<S: Real>(a: S, b: S, epsilon: S) -> bool {
    a > b && !close_to_scaled(a, b, epsilon)
}

/// Non-strict complement of [`strictly_greater`].
#[inline]
pub fn less_or_close<S: Real>(a: S, b: S, epsilon: S) -> bool {
    a < b || close_to_scaled(a, b, epsilon)
}

/// Non-strict complement of [`strictly_less`].
#[inline]
pub fn greater_or_close<S: Real>(a: S, b: S, epsilon: S) -> bool {
    a > b || close_to_scaled(a, b, epsilon)
}

/// Closeness to the additive identity, with a 10x looser tolerance.
#[inline]
pub fn is_zero<S: Real>(value: S) -> bool {
    close_to_scaled(value, S::ZERO, S::from_i32(10) * S::EPSILON)
}

/// Closeness to the multiplicative identity, with a 10x looser tolerance.
#[inline]
pub fn is_one<S: Real>(value: S) -> bool {
    close_to_scaled(value, S::ONE, S::from_i32(10) * S::EPSILON)
}

/// Symmetric range test: `-epsilon < value < epsilon`.
#[inline]
pub fn near_zero<S: Real>(value: S, epsilon: S) -> bool {
    -epsilon < value && value < epsilon
}

/// Linear interpolation `a + (b - a) * t`. `t` is not clamped; values
/// outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp<S: Real>(a: S, b: S, t: S) -> S {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_to_reflexive() {
        for &x in &[0.0_f64, 1.0, -7.5, 1e-300, 1e300] {
            assert!(close_to(x, x, 0.0));
            assert!(close_to_scaled(x, x, f64::EPSILON));
        }
    }

    #[test]
    fn close_to_absolute_tolerance() {
        assert!(close_to(1.0, 1.05, 0.1));
        assert!(!close_to(1.0, 1.2, 0.1));
    }

    #[test]
    fn betweenness_symmetry() {
        assert!(is_between(2.0, 1.0, 3.0));
        assert!(is_between(2.0, 3.0, 1.0));
        assert!(is_between(1.0, 1.0, 3.0));
        assert!(!is_between(0.5, 1.0, 3.0));
        assert!(!is_between(0.5, 3.0, 1.0));
        // Also holds for unsigned scalars.
        assert!(is_between(2_u32, 3, 1));
    }

    #[test]
    fn in_range_inclusive() {
        assert!(in_range(1.0, 1.0, 2.0));
        assert!(in_range(2.0, 1.0, 2.0));
        assert!(!in_range(2.1, 1.0, 2.0));
        assert!(in_range(5_i32, -1, 10));
    }

    #[test]
    fn strict_ordering_excludes_close_values() {
        let eps = 1e-9_f64;
        assert!(strictly_less(1.0, 2.0, eps));
        assert!(!strictly_less(2.0, 1.0, eps));
        // Within tolerance: neither less nor greater.
        assert!(!strictly_less(1.0, 1.0 + 1e-12, eps));
        assert!(!strictly_greater(1.0 + 1e-12, 1.0, eps));
        assert!(less_or_close(1.0, 1.0 + 1e-12, eps));
        assert!(greater_or_close(1.0 + 1e-12, 1.0, eps));
    }

    #[test]
    fn identity_predicates() {
        assert!(is_zero(0.0_f64));
        assert!(is_zero(1e-18_f64));
        assert!(!is_zero(1e-3_f64));
        assert!(is_one(1.0_f64));
        assert!(!is_one(1.001_f64));
    }

    #[test]
    fn near_zero_symmetric() {
        assert!(near_zero(0.0, 1e-6));
        assert!(near_zero(5e-7, 1e-6));
        assert!(near_zero(-5e-7, 1e-6));
        assert!(!near_zero(2e-6, 1e-6));
        assert!(!near_zero(-2e-6, 1e-6));
    }

    #[test]
    fn lerp_boundaries() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
        // Unclamped: t outside [0, 1] extrapolates.
        assert_eq!(lerp(2.0, 6.0, 2.0), 10.0);
    }
}
