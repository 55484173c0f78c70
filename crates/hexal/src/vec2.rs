use crate::{Real, Scalar};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<S> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Vec2<S> {
    #[inline]
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn splat(v: S) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub fn x() -> Self {
        Self::new(S::ONE, S::ZERO)
    }

    #[inline]
    pub fn y() -> Self {
        Self::new(S::ZERO, S::ONE)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.x * rhs.x + self.y * rhs.y
    }

    /// 2D cross product (returns scalar = signed area of parallelogram).
    #[inline]
    pub fn cross(self, rhs: Self) -> S {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Product of the two vectors read as complex numbers `x + yi`.
    #[inline]
    pub fn complex_mul(self, rhs: Self) -> Self {
        Self::new(
            self.x * rhs.x - self.y * rhs.y,
            self.x * rhs.y + self.y * rhs.x,
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
    pub fn to_f64(self) -> Vec2<f64> {
        Vec2::new(self.x.to_f64(), self.y.to_f64())
    }

    /// Normalized copy through double precision.
    #[inline]
    pub fn normalize_f64(self) -> Vec2<f64> {
        self.to_f64().normalize()
    }

    /// All components zero? Exact for integer scalars, within scaled
    /// epsilon for floats.
    #[inline]
    pub fn is_zero_vector(self) -> bool {
        self.x.close_to(S::ZERO) && self.y.close_to(S::ZERO)
    }

    /// Unit length? Exact for integer scalars, within scaled epsilon for
    /// floats.
    #[inline]
    pub fn is_unit(self) -> bool {
        self.norm_sq().close_to(S::ONE)
    }

    /// Elementwise product (Hadamard product).
    #[inline]
    pub fn hadamard(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Elementwise quotient.
    #[inline]
    pub fn component_div(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    /// Broadcast add.
    #[inline]
    pub fn add_scalar(self, s: S) -> Self {
        Self::new(self.x + s, self.y + s)
    }

    /// Broadcast subtract.
    #[inline]
    pub fn sub_scalar(self, s: S) -> Self {
        Self::new(self.x - s, self.y - s)
    }

    /// Per-component minimum (the "min point" of two 2-vectors).
    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Per-component maximum (the "max point" of two 2-vectors).
    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    #[inline]
    pub fn min_element(self) -> S {
        self.x.min(self.y)
    }

    #[inline]
    pub fn max_element(self) -> S {
        self.x.max(self.y)
    }

    #[inline]
    pub fn as_array(&self) -> [S; 2] {
        [self.x, self.y]
    }
}

impl<S: Real> Vec2<S> {
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
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Counter-clockwise perpendicular.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotate counter-clockwise by `angle` radians.
    #[inline]
    pub fn rotate(self, angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        self.rotate_sc(s, c)
    }

    /// Rotate by a precomputed `(sin, cos)` pair; avoids recomputing trig
    /// when many vectors share one rotation.
    #[inline]
    pub fn rotate_sc(self, sin: S, cos: S) -> Self {
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotate about `pivot` rather than the origin.
    #[inline]
    pub fn rotate_about(self, pivot: Self, angle: S) -> Self {
        (self - pivot).rotate(angle) + pivot
    }

    /// Component of `self` parallel to `reference`.
    #[inline]
    pub fn project_onto(self, reference: Self) -> Self {
        reference * (self.dot(reference) / reference.norm_sq())
    }

    /// Component of `self` perpendicular to `reference`.
    #[inline]
    pub fn reject_from(self, reference: Self) -> Self {
        self - self.project_onto(reference)
    }

    /// Reflection of `self` across `reference`. A perpendicular input
    /// (dot within epsilon of zero) returns the negated input rather than
    /// dividing by a near-zero projection length.
    #[inline]
    pub fn reflect(self, reference: Self) -> Self {
        let d = self.dot(reference);
        if d.close_to(S::ZERO) {
            return -self;
        }
        reference * (S::TWO * d / reference.norm_sq()) - self
    }
}

impl<S: Scalar> Default for Vec2<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar> From<[S; 2]> for Vec2<S> {
    fn from(a: [S; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl<S: Scalar> From<Vec2<S>> for [S; 2] {
    fn from(v: Vec2<S>) -> Self {
        [v.x, v.y]
    }
}

impl<S: Scalar> Add for Vec2<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S: Scalar> Sub for Vec2<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<S: Scalar + Neg<Output = S>> Neg for Vec2<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<S: Scalar> Mul<S> for Vec2<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<S: Scalar> Div<S> for Vec2<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<S: Scalar> AddAssign for Vec2<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<S: Scalar> SubAssign for Vec2<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<S: Scalar> MulAssign<S> for Vec2<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

// Scalar * Vec2 (commutative)
impl Mul<Vec2<f64>> for f64 {
    type Output = Vec2<f64>;
    #[inline]
    fn mul(self, rhs: Vec2<f64>) -> Vec2<f64> {
        rhs * self
    }
}

impl Mul<Vec2<f32>> for f32 {
    type Output = Vec2<f32>;
    #[inline]
    fn mul(self, rhs: Vec2<f32>) -> Vec2<f32> {
        rhs * self
    }
}

impl<S: Scalar> core::fmt::Display for Vec2<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
    }

    #[test]
    fn cross_product_2d() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
    }

    #[test]
    fn complex_product() {
        // (1 + 2i)(3 + 4i) = -5 + 10i
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.complex_mul(b), Vec2::new(-5.0, 10.0));
        // i * i = -1
        let i = Vec2::new(0.0, 1.0);
        assert_eq!(i.complex_mul(i), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn normalize() {
        let v = Vec2::new(3.0, 4.0);
        let n = v.normalize();
        assert!((n.norm() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn integer_magnitude_through_f64() {
        let v = Vec2::new(3_i32, 4);
        assert_eq!(v.norm_f64(), 5.0);
        let n = v.normalize_f64();
        assert!((n.norm() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn zero_and_unit_classification() {
        assert!(Vec2::<i32>::zero().is_zero_vector());
        assert!(!Vec2::new(0_i32, 1).is_zero_vector());
        assert!(Vec2::new(1_i32, 0).is_unit());
        assert!(Vec2::new(0.6_f64, 0.8).is_unit());
        assert!(!Vec2::new(0.6_f64, 0.9).is_unit());
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = Vec2::new(1.0, 0.0);
        let r = v.rotate(core::f64::consts::FRAC_PI_2);
        assert!(r.x.abs() < 1e-10);
        assert!((r.y - 1.0).abs() < 1e-10);
        // Precomputed pair gives the same result.
        let (s, c) = core::f64::consts::FRAC_PI_2.sin_cos();
        assert_eq!(v.rotate_sc(s, c), r);
    }

    #[test]
    fn rotate_about_pivot() {
        let v = Vec2::new(2.0, 1.0);
        let pivot = Vec2::new(1.0, 1.0);
        let r = v.rotate_about(pivot, core::f64::consts::PI);
        assert!((r.x - 0.0).abs() < 1e-10);
        assert!((r.y - 1.0).abs() < 1e-10);
    }

    #[test]
    fn project_reject_reflect() {
        let v = Vec2::new(1.0, 1.0);
        let axis = Vec2::new(2.0, 0.0);
        assert_eq!(v.project_onto(axis), Vec2::new(1.0, 0.0));
        assert_eq!(v.reject_from(axis), Vec2::new(0.0, 1.0));
        assert_eq!(v.reflect(axis), Vec2::new(1.0, -1.0));
        // Perpendicular input reflects to its negation.
        let p = Vec2::new(0.0, 3.0);
        assert_eq!(p.reflect(axis), Vec2::new(0.0, -3.0));
    }

    #[test]
    fn lerp_boundaries() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(5.0, 6.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn min_max_point() {
        let a = Vec2::new(1.0, 5.0);
        let b = Vec2::new(3.0, 2.0);
        assert_eq!(a.component_min(b), Vec2::new(1.0, 2.0));
        assert_eq!(a.component_max(b), Vec2::new(3.0, 5.0));
    }

    #[test]
    fn scalar_mul_commutative() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v * 2.0, 2.0 * v);
    }
}
