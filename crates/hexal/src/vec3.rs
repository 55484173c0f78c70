use crate::{Real, Scalar};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Vec3<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn splat(v: S) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub fn x() -> Self {
        Self::new(S::ONE, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn y() -> Self {
        Self::new(S::ZERO, S::ONE, S::ZERO)
    }

    #[inline]
    pub fn z() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ONE)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Mixed (scalar triple) product `self · (b × c)`, the signed volume
    /// of the parallelepiped spanned by the three vectors.
    #[inline]
    pub fn scalar_triple(self, b: Self, c: Self) -> S {
        self.dot(b.cross(c))
    }

    /// Vector triple product `self × (b × c)`.
    #[inline]
    pub fn vector_triple(self, b: Self, c: Self) -> Self {
        self.cross(b.cross(c))
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
    pub fn to_f64(self) -> Vec3<f64> {
        Vec3::new(self.x.to_f64(), self.y.to_f64(), self.z.to_f64())
    }

    /// Normalized copy through double precision.
    #[inline]
    pub fn normalize_f64(self) -> Vec3<f64> {
        self.to_f64().normalize()
    }

    /// All components zero? Exact for integer scalars, within scaled
    /// epsilon for floats.
    #[inline]
    pub fn is_zero_vector(self) -> bool {
        self.x.close_to(S::ZERO) && self.y.close_to(S::ZERO) && self.z.close_to(S::ZERO)
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
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Elementwise quotient.
    #[inline]
    pub fn component_div(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Broadcast add.
    #[inline]
    pub fn add_scalar(self, s: S) -> Self {
        Self::new(self.x + s, self.y + s, self.z + s)
    }

    /// Broadcast subtract.
    #[inline]
    pub fn sub_scalar(self, s: S) -> Self {
        Self::new(self.x - s, self.y - s, self.z - s)
    }

    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    #[inline]
    pub fn min_element(self) -> S {
        self.x.min(self.y.min(self.z))
    }

    #[inline]
    pub fn max_element(self) -> S {
        self.x.max(self.y.max(self.z))
    }

    /// Extend to Vec4 with a given w component.
    #[inline]
    pub fn extend(self, w: S) -> crate::Vec4<S> {
        crate::Vec4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn as_array(&self) -> [S; 3] {
        [self.x, self.y, self.z]
    }
}

impl<S: Real> Vec3<S> {
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
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Pitch: rotate about the X axis by `angle` radians.
    #[inline]
    pub fn rotate_x(self, angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        self.rotate_x_sc(s, c)
    }

    /// Pitch by a precomputed `(sin, cos)` pair; avoids recomputing trig
    /// when many vectors share one rotation.
    #[inline]
    pub fn rotate_x_sc(self, sin: S, cos: S) -> Self {
        Self::new(
            self.x,
            self.y * cos - self.z * sin,
            self.y * sin + self.z * cos,
        )
    }

    /// Pitch about an arbitrary pivot rather than the origin.
    #[inline]
    pub fn rotate_x_about(self, pivot: Self, angle: S) -> Self {
        (self - pivot).rotate_x(angle) + pivot
    }

    /// Yaw: rotate about the Y axis by `angle` radians.
    #[inline]
    pub fn rotate_y(self, angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        self.rotate_y_sc(s, c)
    }

    /// Yaw by a precomputed `(sin, cos)` pair.
    #[inline]
    pub fn rotate_y_sc(self, sin: S, cos: S) -> Self {
        Self::new(
            self.x * cos + self.z * sin,
            self.y,
            self.z * cos - self.x * sin,
        )
    }

    /// Yaw about an arbitrary pivot rather than the origin.
    #[inline]
    pub fn rotate_y_about(self, pivot: Self, angle: S) -> Self {
        (self - pivot).rotate_y(angle) + pivot
    }

    /// Roll: rotate about the Z axis by `angle` radians.
    #[inline]
    pub fn rotate_z(self, angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        self.rotate_z_sc(s, c)
    }

    /// Roll by a precomputed `(sin, cos)` pair.
    #[inline]
    pub fn rotate_z_sc(self, sin: S, cos: S) -> Self {
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
    }

    /// Roll about an arbitrary pivot rather than the origin.
    #[inline]
    pub fn rotate_z_about(self, pivot: Self, angle: S) -> Self {
        (self - pivot).rotate_z(angle) + pivot
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

impl<S: Scalar> Default for Vec3<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar> From<[S; 3]> for Vec3<S> {
    fn from(a: [S; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl<S: Scalar> From<Vec3<S>> for [S; 3] {
    fn from(v: Vec3<S>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<S: Scalar> Add for Vec3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<S: Scalar> Sub for Vec3<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<S: Scalar + Neg<Output = S>> Neg for Vec3<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<S: Scalar> Mul<S> for Vec3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<S: Scalar> Div<S> for Vec3<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<S: Scalar> AddAssign for Vec3<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<S: Scalar> SubAssign for Vec3<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl<S: Scalar> MulAssign<S> for Vec3<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

// Scalar * Vec3 (commutative)
impl Mul<Vec3<f64>> for f64 {
    type Output = Vec3<f64>;
    #[inline]
    fn mul(self, rhs: Vec3<f64>) -> Vec3<f64> {
        rhs * self
    }
}

impl Mul<Vec3<f32>> for f32 {
    type Output = Vec3<f32>;
    #[inline]
    fn mul(self, rhs: Vec3<f32>) -> Vec3<f32> {
        rhs * self
    }
}

impl<S: Scalar> core::fmt::Display for Vec3<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
