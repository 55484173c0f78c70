use crate::{Real, Scalar};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// 5-component vector. Cross products do not exist in this dimension;
/// the common vector algebra (dot, norms, elementwise ops, lerp) does.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec5<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
    pub v: S,
}

impl<S: Scalar> Vec5<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S, w: S, v: S) -> Self {
        Self { x, y, z, w, v }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(S::ZERO)
    }

    #[inline]
    pub fn splat(v: S) -> Self {
        Self::new(v, v, v, v, v)
    }

    #[inline]
    pub fn x() -> Self {
        Self::new(S::ONE, S::ZERO, S::ZERO, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn y() -> Self {
        Self::new(S::ZERO, S::ONE, S::ZERO, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn z() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ONE, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn w() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO, S::ONE, S::ZERO)
    }

    #[inline]
    pub fn v() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO, S::ZERO, S::ONE)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w + self.v * rhs.v
    }

    #[inline]
    pub fn norm_sq(self) -> S {
        self.dot(self)
    }

    /// Magnitude computed through f64, the cross-type path that lets
    /// integer-component vectors produce a floating magnitude.
    #[inline]
    pub fn norm_f64(self) -> f64 {
        self.to_f64().norm_sq().sqrt()
    }

    #[inline]
    pub fn to_f64(self) -> Vec5<f64> {
        Vec5::new(
            self.x.to_f64(),
            self.y.to_f64(),
            self.z.to_f64(),
            self.w.to_f64(),
            self.v.to_f64(),
        )
    }

    /// Normalized copy through double precision.
    #[inline]
    pub fn normalize_f64(self) -> Vec5<f64> {
        self.to_f64().normalize()
    }

    #[inline]
    pub fn is_zero_vector(self) -> bool {
        self.x.close_to(S::ZERO)
            && self.y.close_to(S::ZERO)
            && self.z.close_to(S::ZERO)
            && self.w.close_to(S::ZERO)
            && self.v.close_to(S::ZERO)
    }

    #[inline]
    pub fn is_unit(self) -> bool {
        self.norm_sq().close_to(S::ONE)
    }

    #[inline]
    pub fn hadamard(self, other: Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
            self.v * other.v,
        )
    }

    #[inline]
    pub fn component_div(self, other: Self) -> Self {
        Self::new(
            self.x / other.x,
            self.y / other.y,
            self.z / other.z,
            self.w / other.w,
            self.v / other.v,
        )
    }

    #[inline]
    pub fn add_scalar(self, s: S) -> Self {
        Self::new(self.x + s, self.y + s, self.z + s, self.w + s, self.v + s)
    }

    #[inline]
    pub fn sub_scalar(self, s: S) -> Self {
        Self::new(self.x - s, self.y - s, self.z - s, self.w - s, self.v - s)
    }

    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
            self.v.min(other.v),
        )
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
            self.v.max(other.v),
        )
    }

    #[inline]
    pub fn min_element(self) -> S {
        self.x.min(self.y.min(self.z.min(self.w.min(self.v))))
    }

    #[inline]
    pub fn max_element(self) -> S {
        self.x.max(self.y.max(self.z.max(self.w.max(self.v))))
    }

    /// Extend to Vec6 with a given u component.
    #[inline]
    pub fn extend(self, u: S) -> crate::Vec6<S> {
        crate::Vec6::new(self.x, self.y, self.z, self.w, self.v, u)
    }

    /// Truncate to Vec4 (drop v).
    #[inline]
    pub fn truncate(self) -> crate::Vec4<S> {
        crate::Vec4::new(self.x, self.y, self.z, self.w)
    }

    #[inline]
    pub fn as_array(&self) -> [S; 5] {
        [self.x, self.y, self.z, self.w, self.v]
    }
}

impl<S: Real> Vec5<S> {
    #[inline]
    pub fn norm(self) -> S {
        self.norm_sq().sqrt()
    }

    /// Divides by the magnitude. A zero vector yields NaN components;
    /// see [`try_normalize`](Self::try_normalize) for the checked form.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.norm()
    }

    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let n = self.norm();
        if n > S::EPSILON {
            Some(self / n)
        } else {
            None
        }
    }

    /// `t` is not clamped; callers extrapolate outside `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: Self, t: S) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(
            self.x.abs(),
            self.y.abs(),
            self.z.abs(),
            self.w.abs(),
            self.v.abs(),
        )
    }
}

impl<S: Scalar> Default for Vec5<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar> From<[S; 5]> for Vec5<S> {
    fn from(a: [S; 5]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4])
    }
}

impl<S: Scalar> From<Vec5<S>> for [S; 5] {
    fn from(v: Vec5<S>) -> Self {
        [v.x, v.y, v.z, v.w, v.v]
    }
}

impl<S: Scalar> Add for Vec5<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
            self.v + rhs.v,
        )
    }
}

impl<S: Scalar> Sub for Vec5<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
            self.v - rhs.v,
        )
    }
}

impl<S: Scalar + Neg<Output = S>> Neg for Vec5<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w, -self.v)
    }
}

impl<S: Scalar> Mul<S> for Vec5<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::new(
            self.x * rhs,
            self.y * rhs,
            self.z * rhs,
            self.w * rhs,
            self.v * rhs,
        )
    }
}

impl<S: Scalar> Div<S> for Vec5<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        Self::new(
            self.x / rhs,
            self.y / rhs,
            self.z / rhs,
            self.w / rhs,
            self.v / rhs,
        )
    }
}

impl<S: Scalar> AddAssign for Vec5<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
        self.v += rhs.v;
    }
}

impl<S: Scalar> SubAssign for Vec5<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
        self.v -= rhs.v;
    }
}

impl<S: Scalar> MulAssign<S> for Vec5<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
        self.w *= rhs;
        self.v *= rhs;
    }
}

// Scalar * Vec5 (commutative)
impl Mul<Vec5<f64>> for f64 {
    type Output = Vec5<f64>;
    #[inline]
    fn mul(self, rhs: Vec5<f64>) -> Vec5<f64> {
        rhs * self
    }
}

impl Mul<Vec5<f32>> for f32 {
    type Output = Vec5<f32>;
    #[inline]
    fn mul(self, rhs: Vec5<f32>) -> Vec5<f32> {
        rhs * self
    }
}

impl<S: Scalar> core::fmt::Display for Vec5<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.x, self.y, self.z, self.w, self.v
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let a = Vec5::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let b = Vec5::new(5.0, 4.0, 3.0, 2.0, 1.0);
        assert_eq!(a.dot(b), 35.0);
    }

    #[test]
    fn unit_axes() {
        let axes = [
            Vec5::<f64>::x(),
            Vec5::y(),
            Vec5::z(),
            Vec5::w(),
            Vec5::v(),
        ];
        for (i, a) in axes.iter().enumerate() {
            assert!(a.is_unit());
            for (j, b) in axes.iter().enumerate() {
                assert_eq!(a.dot(*b), if i == j { 1.0 } else { 0.0 });
            }
        }
        assert_eq!(Vec5::<i32>::v(), Vec5::new(0, 0, 0, 0, 1));
    }

    #[test]
    fn normalize_roundtrip() {
        let v = Vec5::new(1.0, 2.0, 3.0, 4.0, 5.0);
        assert!((v.normalize().norm() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn integer_magnitude_through_f64() {
        let v = Vec5::new(2_i32, 2, 2, 2, 2);
        assert!((v.norm_f64() - 20.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn lerp_boundaries() {
        let a = Vec5::splat(0.0);
        let b = Vec5::splat(8.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.25), Vec5::splat(2.0));
    }
}
