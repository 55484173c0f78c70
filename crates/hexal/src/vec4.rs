use crate::{Real, Scalar};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: Scalar> Vec4<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn splat(v: S) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub fn x() -> Self {
        Self::new(S::ONE, S::ZERO, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn y() -> Self {
        Self::new(S::ZERO, S::ONE, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn z() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ONE, S::ZERO)
    }

    #[inline]
    pub fn w() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO, S::ONE)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// 4D cross product of three vectors: the generalized determinant-minor
    /// formula. The result is orthogonal to `self`, `b`, and `c`.
    pub fn cross(self, b: Self, c: Self) -> Self {
        Self::new(
            self.z * (b.y * c.w - b.w * c.y)
                + self.y * (b.w * c.z - b.z * c.w)
                + self.w * (b.z * c.y - b.y * c.z),
            self.x * (b.z * c.w - b.w * c.z)
                + self.z * (b.w * c.x - b.x * c.w)
                + self.w * (b.x * c.z - b.z * c.x),
            self.y * (b.x * c.w - b.w * c.x)
                + self.x * (b.w * c.y - b.y * c.w)
                + self.w * (b.y * c.x - b.x * c.y),
            self.x * (b.y * c.z - b.z * c.y)
                + self.y * (b.z * c.x - b.x * c.z)
                + self.z * (b.x * c.y - b.y * c.x),
        )
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
    pub fn to_f64(self) -> Vec4<f64> {
        Vec4::new(
            self.x.to_f64(),
            self.y.to_f64(),
            self.z.to_f64(),
            self.w.to_f64(),
        )
    }

    /// Normalized copy through double precision.
    #[inline]
    pub fn normalize_f64(self) -> Vec4<f64> {
        self.to_f64().normalize()
    }

    #[inline]
    pub fn is_zero_vector(self) -> bool {
        self.x.close_to(S::ZERO)
            && self.y.close_to(S::ZERO)
            && self.z.close_to(S::ZERO)
            && self.w.close_to(S::ZERO)
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
        )
    }

    #[inline]
    pub fn component_div(self, other: Self) -> Self {
        Self::new(
            self.x / other.x,
            self.y / other.y,
            self.z / other.z,
            self.w / other.w,
        )
    }

    #[inline]
    pub fn add_scalar(self, s: S) -> Self {
        Self::new(self.x + s, self.y + s, self.z + s, self.w + s)
    }

    #[inline]
    pub fn sub_scalar(self, s: S) -> Self {
        Self::new(self.x - s, self.y - s, self.z - s, self.w - s)
    }

    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
        )
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
        )
    }

    #[inline]
    pub fn min_element(self) -> S {
        self.x.min(self.y.min(self.z.min(self.w)))
    }

    #[inline]
    pub fn max_element(self) -> S {
        self.x.max(self.y.max(self.z.max(self.w)))
    }

    /// Truncate to Vec3 (drop w).
    #[inline]
    pub fn truncate(self) -> crate::Vec3<S> {
        crate::Vec3::new(self.x, self.y, self.z)
    }

    /// Extend to Vec5 with a given v component.
    #[inline]
    pub fn extend(self, v: S) -> crate::Vec5<S> {
        crate::Vec5::new(self.x, self.y, self.z, self.w, v)
    }

    #[inline]
    pub fn as_array(&self) -> [S; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl<S: Real> Vec4<S> {
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
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }
}

impl<S: Scalar> Default for Vec4<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar> From<[S; 4]> for Vec4<S> {
    fn from(a: [S; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl<S: Scalar> From<Vec4<S>> for [S; 4] {
    fn from(v: Vec4<S>) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

impl<S: Scalar> Add for Vec4<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl<S: Scalar> Sub for Vec4<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl<S: Scalar + Neg<Output = S>> Neg for Vec4<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<S: Scalar> Mul<S> for Vec4<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl<S: Scalar> Div<S> for Vec4<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl<S: Scalar> AddAssign for Vec4<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
    }
}

impl<S: Scalar> SubAssign for Vec4<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
    }
}

impl<S: Scalar> MulAssign<S> for Vec4<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
        self.w *= rhs;
    }
}

// Scalar * Vec4 (commutative)
impl Mul<Vec4<f64>> for f64 {
    type Output = Vec4<f64>;
    #[inline]
    fn mul(self, rhs: Vec4<f64>) -> Vec4<f64> {
        rhs * self
    }
}

impl Mul<Vec4<f32>> for f32 {
    type Output = Vec4<f32>;
    #[inline]
    fn mul(self, rhs: Vec4<f32>) -> Vec4<f32> {
        rhs * self
    }
}

impl<S: Scalar> core::fmt::Display for Vec4<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn cross_of_basis_vectors() {
        let e1 = Vec4::<f64>::x();
        let e2 = Vec4::<f64>::y();
        let e3 = Vec4::<f64>::z();
        assert_eq!(e1.cross(e2, e3), Vec4::w());
    }

    #[test]
    fn cross_is_orthogonal_to_operands() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(-2.0, 1.0, 0.5, 3.0);
        let c = Vec4::new(0.0, 1.0, -1.0, 2.0);
        let n = a.cross(b, c);
        assert!(n.dot(a).abs() < 1e-10);
        assert!(n.dot(b).abs() < 1e-10);
        assert!(n.dot(c).abs() < 1e-10);
    }

    #[test]
    fn normalize() {
        let v = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert!((v.normalize().norm() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn integer_magnitude_through_f64() {
        let v = Vec4::new(1_i32, 1, 1, 1);
        assert_eq!(v.norm_f64(), 2.0);
    }

    #[test]
    fn lerp_boundaries() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}
