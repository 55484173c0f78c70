use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Trait for scalar types usable throughout hexal.
///
/// Implemented for the integer family (i8..i64, u8..u64) and f32/f64.
/// The impl set is deliberately closed: a type outside it cannot be used
/// as a vector or matrix component.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, lo: Self, hi: Self) -> Self;

    /// Tolerant equality: exact for integer scalars, magnitude-scaled
    /// epsilon comparison for floats.
    ///
    /// Not a substitute for `==`; callers may branch on it for
    /// classification or early exits, never for correctness.
    fn close_to(self, other: Self) -> bool;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;
    fn from_i32(v: i32) -> Self;
}

/// Scalar types with a square root, required for magnitude, normalize,
/// rotation, and the epsilon predicates in [`crate::approx`].
pub trait Real: Scalar + Neg<Output = Self> {
    const TWO: Self;
    const HALF: Self;
    const PI: Self;
    const TAU: Self;
    const FRAC_PI_2: Self;
    /// Machine epsilon.
    const EPSILON: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    const MAX: Self;
    const MIN: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn recip(self) -> Self;
    fn signum(self) -> Self;
    fn powi(self, n: i32) -> Self;
}

// In std mode, use inherent float methods. In no_std, use libm.
// Dispatch via a helper module to keep the impl macro clean.
#[cfg(feature = "std")]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn abs_f32(x: f32) -> f32 {
        x.abs()
    }
    #[inline(always)]
    pub fn abs_f64(x: f64) -> f64 {
        x.abs()
    }
    #[inline(always)]
    pub fn sin_f32(x: f32) -> f32 {
        x.sin()
    }
    #[inline(always)]
    pub fn sin_f64(x: f64) -> f64 {
        x.sin()
    }
    #[inline(always)]
    pub fn cos_f32(x: f32) -> f32 {
        x.cos()
    }
    #[inline(always)]
    pub fn cos_f64(x: f64) -> f64 {
        x.cos()
    }
    #[inline(always)]
    pub fn tan_f32(x: f32) -> f32 {
        x.tan()
    }
    #[inline(always)]
    pub fn tan_f64(x: f64) -> f64 {
        x.tan()
    }
    #[inline(always)]
    pub fn asin_f32(x: f32) -> f32 {
        x.asin()
    }
    #[inline(always)]
    pub fn asin_f64(x: f64) -> f64 {
        x.asin()
    }
    #[inline(always)]
    pub fn acos_f32(x: f32) -> f32 {
        x.acos()
    }
    #[inline(always)]
    pub fn acos_f64(x: f64) -> f64 {
        x.acos()
    }
    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn atan2_f64(y: f64, x: f64) -> f64 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        x.sin_cos()
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        x.sin_cos()
    }
    #[inline(always)]
    pub fn powi_f32(x: f32, n: i32) -> f32 {
        x.powi(n)
    }
    #[inline(always)]
    pub fn powi_f64(x: f64, n: i32) -> f64 {
        x.powi(n)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        libm::sqrtf(x)
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        libm::sqrt(x)
    }
    #[inline(always)]
    pub fn abs_f32(x: f32) -> f32 {
        libm::fabsf(x)
    }
    #[inline(always)]
    pub fn abs_f64(x: f64) -> f64 {
        libm::fabs(x)
    }
    #[inline(always)]
    pub fn sin_f32(x: f32) -> f32 {
        libm::sinf(x)
    }
    #[inline(always)]
    pub fn sin_f64(x: f64) -> f64 {
        libm::sin(x)
    }
    #[inline(always)]
    pub fn cos_f32(x: f32) -> f32 {
        libm::cosf(x)
    }
    #[inline(always)]
    pub fn cos_f64(x: f64) -> f64 {
        libm::cos(x)
    }
    #[inline(always)]
    pub fn tan_f32(x: f32) -> f32 {
        libm::tanf(x)
    }
    #[inline(always)]
    pub fn tan_f64(x: f64) -> f64 {
        libm::tan(x)
    }
    #[inline(always)]
    pub fn asin_f32(x: f32) -> f32 {
        libm::asinf(x)
    }
    #[inline(always)]
    pub fn asin_f64(x: f64) -> f64 {
        libm::asin(x)
    }
    #[inline(always)]
    pub fn acos_f32(x: f32) -> f32 {
        libm::acosf(x)
    }
    #[inline(always)]
    pub fn acos_f64(x: f64) -> f64 {
        libm::acos(x)
    }
    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        libm::atan2f(y, x)
    }
    #[inline(always)]
    pub fn atan2_f64(y: f64, x: f64) -> f64 {
        libm::atan2(y, x)
    }
    #[inline(always)]
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        libm::sincosf(x)
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        libm::sincos(x)
    }
    #[inline(always)]
    pub fn powi_f32(x: f32, n: i32) -> f32 {
        libm::powf(x, n as f32)
    }
    #[inline(always)]
    pub fn powi_f64(x: f64, n: i32) -> f64 {
        libm::pow(x, n as f64)
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline] fn min(self, other: Self) -> Self { Ord::min(self, other) }
            #[inline] fn max(self, other: Self) -> Self { Ord::max(self, other) }
            #[inline] fn clamp(self, lo: Self, hi: Self) -> Self { Ord::clamp(self, lo, hi) }

            // Integer scalars compare exactly.
            #[inline] fn close_to(self, other: Self) -> bool { self == other }

            #[inline] fn from_f64(v: f64) -> Self { v as $t }
            #[inline] fn to_f64(self) -> f64 { self as f64 }
            #[inline] fn from_i32(v: i32) -> Self { v as $t }
        }
    )*};
}

impl_scalar_int!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_scalar_float {
    ($t:ty, $suffix:ident, $pi:expr, $tau:expr, $frac_pi_2:expr) => {
        ::paste::paste! {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline] fn min(self, other: Self) -> Self { if self < other { self } else { other } }
            #[inline] fn max(self, other: Self) -> Self { if self > other { self } else { other } }
            #[inline] fn clamp(self, lo: Self, hi: Self) -> Self {
                if self < lo { lo } else if self > hi { hi } else { self }
            }

            // Scaled tolerance: stays meaningful for both tiny and huge operands.
            #[inline] fn close_to(self, other: Self) -> bool {
                let tol = (float_ops::[<abs_ $suffix>](self)
                    + float_ops::[<abs_ $suffix>](other)
                    + 10.0 as $t)
                    * <$t>::EPSILON;
                let d = self - other;
                -tol < d && d < tol
            }

            #[inline] fn from_f64(v: f64) -> Self { v as $t }
            #[inline] fn to_f64(self) -> f64 { self as f64 }
            #[inline] fn from_i32(v: i32) -> Self { v as $t }
        }

        impl Real for $t {
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = $pi;
            const TAU: Self = $tau;
            const FRAC_PI_2: Self = $frac_pi_2;
            const EPSILON: Self = <$t>::EPSILON;
            const INFINITY: Self = <$t>::INFINITY;
            const NEG_INFINITY: Self = <$t>::NEG_INFINITY;
            const MAX: Self = <$t>::MAX;
            const MIN: Self = <$t>::MIN;

            #[inline] fn sqrt(self) -> Self { float_ops::[<sqrt_ $suffix>](self) }
            #[inline] fn abs(self) -> Self { float_ops::[<abs_ $suffix>](self) }
            #[inline] fn sin(self) -> Self { float_ops::[<sin_ $suffix>](self) }
            #[inline] fn cos(self) -> Self { float_ops::[<cos_ $suffix>](self) }
            #[inline] fn tan(self) -> Self { float_ops::[<tan_ $suffix>](self) }
            #[inline] fn asin(self) -> Self { float_ops::[<asin_ $suffix>](self) }
            #[inline] fn acos(self) -> Self { float_ops::[<acos_ $suffix>](self) }
            #[inline] fn atan2(self, other: Self) -> Self { float_ops::[<atan2_ $suffix>](self, other) }
            #[inline] fn sin_cos(self) -> (Self, Self) { float_ops::[<sin_cos_ $suffix>](self) }
            #[inline] fn powi(self, n: i32) -> Self { float_ops::[<powi_ $suffix>](self, n) }

            #[inline] fn recip(self) -> Self { 1.0 as $t / self }
            #[inline] fn signum(self) -> Self {
                if self > 0.0 as $t { 1.0 as $t } else if self < 0.0 as $t { -(1.0 as $t) } else { 0.0 as $t }
            }
        }
        }
    };
}

impl_scalar_float!(
    f32,
    f32,
    core::f32::consts::PI,
    core::f32::consts::TAU,
    core::f32::consts::FRAC_PI_2
);
impl_scalar_float!(
    f64,
    f64,
    core::f64::consts::PI,
    core::f64::consts::TAU,
    core::f64::consts::FRAC_PI_2
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_basics() {
        assert_eq!(<f64 as Scalar>::ZERO, 0.0);
        assert_eq!(<f64 as Scalar>::ONE, 1.0);
        assert!((<f64 as Real>::PI - core::f64::consts::PI).abs() < f64::EPSILON);
        assert_eq!(Real::sqrt(4.0_f64), 2.0);
        assert_eq!(Real::abs(-3.0_f64), 3.0);
    }

    #[test]
    fn integer_close_to_is_exact() {
        assert!(5_i32.close_to(5));
        assert!(!5_i32.close_to(6));
        assert!(0_u8.close_to(0));
    }

    #[test]
    fn float_close_to_scales_with_magnitude() {
        // Adjacent representable values at large magnitude are "close".
        let a = 1.0e16_f64;
        let b = a + 2.0;
        assert_ne!(a, b);
        assert!(a.close_to(b));
        // Values separated by far more than the scaled tolerance are not.
        assert!(!1.0_f64.close_to(1.0 + 1e-6));
    }

    #[test]
    fn int_conversions() {
        assert_eq!(i16::from_f64(3.9), 3);
        assert_eq!(7_u32.to_f64(), 7.0);
        assert_eq!(i64::from_i32(-2), -2);
    }
}
