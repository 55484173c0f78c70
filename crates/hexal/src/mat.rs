use crate::{Real, Scalar, Vec2, Vec3, Vec4, Vec5, Vec6};
use core::ops::{Add, Index, Mul, Neg, Sub};

/// Fixed matrix with compile-time shape, row-major storage.
///
/// Row and column counts are const parameters, so shape compatibility of
/// every product is proven at the call site, with no runtime checks, no heap.
/// Shapes 2x2 through 6x6 have aliases ([`Mat2`], [`Mat4x6`], ...); other
/// sizes are representable but outside the supported surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat<S, const R: usize, const C: usize> {
    m: [[S; C]; R],
}

// Square
pub type Mat2<S> = Mat<S, 2, 2>;
pub type Mat3<S> = Mat<S, 3, 3>;
pub type Mat4<S> = Mat<S, 4, 4>;
pub type Mat5<S> = Mat<S, 5, 5>;
pub type Mat6<S> = Mat<S, 6, 6>;

// Rectangular
pub type Mat2x3<S> = Mat<S, 2, 3>;
pub type Mat2x4<S> = Mat<S, 2, 4>;
pub type Mat2x5<S> = Mat<S, 2, 5>;
pub type Mat2x6<S> = Mat<S, 2, 6>;
pub type Mat3x2<S> = Mat<S, 3, 2>;
pub type Mat3x4<S> = Mat<S, 3, 4>;
pub type Mat3x5<S> = Mat<S, 3, 5>;
pub type Mat3x6<S> = Mat<S, 3, 6>;
pub type Mat4x2<S> = Mat<S, 4, 2>;
pub type Mat4x3<S> = Mat<S, 4, 3>;
pub type Mat4x5<S> = Mat<S, 4, 5>;
pub type Mat4x6<S> = Mat<S, 4, 6>;
pub type Mat5x2<S> = Mat<S, 5, 2>;
pub type Mat5x3<S> = Mat<S, 5, 3>;
pub type Mat5x4<S> = Mat<S, 5, 4>;
pub type Mat5x6<S> = Mat<S, 5, 6>;
pub type Mat6x2<S> = Mat<S, 6, 2>;
pub type Mat6x3<S> = Mat<S, 6, 3>;
pub type Mat6x4<S> = Mat<S, 6, 4>;
pub type Mat6x5<S> = Mat<S, 6, 5>;

impl<S: Scalar, const R: usize, const C: usize> Mat<S, R, C> {
    /// Construct from rows.
    #[inline]
    pub fn from_rows(rows: [[S; C]; R]) -> Self {
        Self { m: rows }
    }

    /// Construct from a function of (row, col).
    pub fn from_fn(f: impl Fn(usize, usize) -> S) -> Self {
        let mut m = [[S::ZERO; C]; R];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, e) in row.iter_mut().enumerate() {
                *e = f(i, j);
            }
        }
        Self { m }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            m: [[S::ZERO; C]; R],
        }
    }

    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }

    /// Element access (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self.m[row][col]
    }

    /// Set element.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: S) {
        self.m[row][col] = val;
    }

    /// Row access.
    #[inline]
    pub fn row(&self, i: usize) -> [S; C] {
        self.m[i]
    }

    /// Column access.
    pub fn col(&self, j: usize) -> [S; R] {
        let mut out = [S::ZERO; R];
        for (i, e) in out.iter_mut().enumerate() {
            *e = self.m[i][j];
        }
        out
    }

    #[inline]
    pub fn as_rows(&self) -> &[[S; C]; R] {
        &self.m
    }

    pub fn transpose(&self) -> Mat<S, C, R> {
        Mat::from_fn(|i, j| self.m[j][i])
    }

    /// Frobenius norm squared.
    pub fn norm_sq(&self) -> S {
        let mut acc = S::ZERO;
        for row in &self.m {
            for &e in row {
                acc += e * e;
            }
        }
        acc
    }

    /// Matrix-vector product against a plain array: `self * v`.
    pub fn mul_array(&self, v: [S; C]) -> [S; R] {
        let mut out = [S::ZERO; R];
        for (i, e) in out.iter_mut().enumerate() {
            let mut acc = S::ZERO;
            for k in 0..C {
                acc += self.m[i][k] * v[k];
            }
            *e = acc;
        }
        out
    }

    /// Row-vector-matrix product against a plain array: `v * self`.
    pub fn premul_array(&self, v: [S; R]) -> [S; C] {
        let mut out = [S::ZERO; C];
        for (j, e) in out.iter_mut().enumerate() {
            let mut acc = S::ZERO;
            for k in 0..R {
                acc += v[k] * self.m[k][j];
            }
            *e = acc;
        }
        out
    }
}

impl<S: Scalar, const N: usize> Mat<S, N, N> {
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { S::ONE } else { S::ZERO })
    }

    pub fn diagonal(d: [S; N]) -> Self {
        Self::from_fn(|i, j| if i == j { d[i] } else { S::ZERO })
    }

    /// Trace.
    pub fn trace(&self) -> S {
        let mut acc = S::ZERO;
        for i in 0..N {
            acc += self.m[i][i];
        }
        acc
    }
}

impl<S: Real> Mat<S, 2, 2> {
    /// Counter-clockwise rotation matrix.
    pub fn rotation(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[c, -s], [s, c]])
    }
}

impl<S: Real> Mat<S, 3, 3> {
    /// Rotation matrix about the X axis.
    pub fn rotation_x(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [S::ONE, S::ZERO, S::ZERO],
            [S::ZERO, c, -s],
            [S::ZERO, s, c],
        ])
    }

    /// Rotation matrix about the Y axis.
    pub fn rotation_y(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, S::ZERO, s],
            [S::ZERO, S::ONE, S::ZERO],
            [-s, S::ZERO, c],
        ])
    }

    /// Rotation matrix about the Z axis.
    pub fn rotation_z(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, -s, S::ZERO],
            [s, c, S::ZERO],
            [S::ZERO, S::ZERO, S::ONE],
        ])
    }

    /// Rotation matrix about an arbitrary axis (Rodrigues' formula).
    pub fn rotation_axis(axis: Vec3<S>, angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let t = S::ONE - c;
        let Vec3 { x, y, z } = axis;
        Self::from_rows([
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
        ])
    }
}

impl<S: Scalar, const R: usize, const C: usize> Index<(usize, usize)> for Mat<S, R, C> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        &self.m[row][col]
    }
}

impl<S: Scalar, const R: usize, const C: usize> Default for Mat<S, R, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar, const R: usize, const C: usize> Add for Mat<S, R, C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|i, j| self.m[i][j] + rhs.m[i][j])
    }
}

impl<S: Scalar, const R: usize, const C: usize> Sub for Mat<S, R, C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|i, j| self.m[i][j] - rhs.m[i][j])
    }
}

impl<S: Scalar + Neg<Output = S>, const R: usize, const C: usize> Neg for Mat<S, R, C> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_fn(|i, j| -self.m[i][j])
    }
}

// Matrix * scalar
impl<S: Scalar, const R: usize, const C: usize> Mul<S> for Mat<S, R, C> {
    type Output = Self;
    fn mul(self, rhs: S) -> Self {
        Self::from_fn(|i, j| self.m[i][j] * rhs)
    }
}

// Scalar * matrix (commutative)
impl<const R: usize, const C: usize> Mul<Mat<f64, R, C>> for f64 {
    type Output = Mat<f64, R, C>;
    #[inline]
    fn mul(self, rhs: Mat<f64, R, C>) -> Mat<f64, R, C> {
        rhs * self
    }
}

impl<const R: usize, const C: usize> Mul<Mat<f32, R, C>> for f32 {
    type Output = Mat<f32, R, C>;
    #[inline]
    fn mul(self, rhs: Mat<f32, R, C>) -> Mat<f32, R, C> {
        rhs * self
    }
}

// Matrix * matrix, inner dimensions matched at compile time:
// (R x K) * (K x C) -> (R x C), row-by-column multiply-accumulate.
impl<S: Scalar, const R: usize, const K: usize, const C: usize> Mul<Mat<S, K, C>> for Mat<S, R, K> {
    type Output = Mat<S, R, C>;
    fn mul(self, rhs: Mat<S, K, C>) -> Mat<S, R, C> {
        Mat::from_fn(|i, j| {
            let mut acc = S::ZERO;
            for k in 0..K {
                acc += self.m[i][k] * rhs.m[k][j];
            }
            acc
        })
    }
}

// Matrix * vector (vertical) and vector * matrix (horizontal), for every
// row/column pairing of the supported dimensions.
macro_rules! impl_vec_products {
    ($(($r:literal, $rvec:ident, $c:literal, $cvec:ident)),* $(,)?) => {$(
        impl<S: Scalar> Mul<$cvec<S>> for Mat<S, $r, $c> {
            type Output = $rvec<S>;
            #[inline]
            fn mul(self, rhs: $cvec<S>) -> $rvec<S> {
                $rvec::from(self.mul_array(rhs.into()))
            }
        }

        impl<S: Scalar> Mul<Mat<S, $r, $c>> for $rvec<S> {
            type Output = $cvec<S>;
            #[inline]
            fn mul(self, rhs: Mat<S, $r, $c>) -> $cvec<S> {
                $cvec::from(rhs.premul_array(self.into()))
            }
        }
    )*};
}

impl_vec_products!(
    (2, Vec2, 2, Vec2),
    (2, Vec2, 3, Vec3),
    (2, Vec2, 4, Vec4),
    (2, Vec2, 5, Vec5),
    (2, Vec2, 6, Vec6),
    (3, Vec3, 2, Vec2),
    (3, Vec3, 3, Vec3),
    (3, Vec3, 4, Vec4),
    (3, Vec3, 5, Vec5),
    (3, Vec3, 6, Vec6),
    (4, Vec4, 2, Vec2),
    (4, Vec4, 3, Vec3),
    (4, Vec4, 4, Vec4),
    (4, Vec4, 5, Vec5),
    (4, Vec4, 6, Vec6),
    (5, Vec5, 2, Vec2),
    (5, Vec5, 3, Vec3),
    (5, Vec5, 4, Vec4),
    (5, Vec5, 5, Vec5),
    (5, Vec5, 6, Vec6),
    (6, Vec6, 2, Vec2),
    (6, Vec6, 3, Vec3),
    (6, Vec6, 4, Vec4),
    (6, Vec6, 5, Vec5),
    (6, Vec6, 6, Vec6),
);

impl<S: Scalar, const R: usize, const C: usize> core::fmt::Display for Mat<S, R, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for i in 0..R {
            write!(f, "[")?;
            for j in 0..C {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.m[i][j])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_times_vector() {
        let m = Mat3::<f64>::identity();
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(m * v, v);
    }

    #[test]
    fn add_commutative() {
        let a = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Mat2::from_rows([[5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn additive_inverse() {
        let a = Mat4::<f64>::from_fn(|i, j| (i * 4 + j) as f64 - 7.5);
        assert_eq!(a + (-a), Mat4::zero());
        assert_eq!(a - a, Mat4::zero());
    }

    #[test]
    fn scale_identity_and_annihilator() {
        let a = Mat5::<f64>::from_fn(|i, j| (i + j) as f64);
        assert_eq!(a * 1.0, a);
        assert_eq!(a * 0.0, Mat5::zero());
        assert_eq!(2.0 * a, a * 2.0);
    }

    #[test]
    fn matched_rectangular_multiply() {
        // (2x3) * (3x2) -> 2x2
        let a = Mat2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Mat3x2::from_rows([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let c = a * b;
        assert_eq!(c, Mat2::from_rows([[58.0, 64.0], [139.0, 154.0]]));
    }

    #[test]
    fn multiply_associates_with_identity() {
        let a = Mat6::<f64>::from_fn(|i, j| (i * 6 + j) as f64);
        let id = Mat6::identity();
        assert_eq!(a * id, a);
        assert_eq!(id * a, a);
    }

    #[test]
    fn transpose_roundtrip() {
        let a = Mat3x5::<f64>::from_fn(|i, j| (i * 5 + j) as f64);
        let t = a.transpose();
        assert_eq!(t.nrows(), 5);
        assert_eq!(t.ncols(), 3);
        assert_eq!(t.get(4, 2), a.get(2, 4));
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn mat_vec_products() {
        // (3x2) * Vec2 -> Vec3
        let m = Mat3x2::from_rows([[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
        let v = Vec2::new(2.0, 3.0);
        assert_eq!(m * v, Vec3::new(2.0, 3.0, 5.0));
        // Vec3 * (3x2) -> Vec2
        let w = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(w * m, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn mat6_vec6_product() {
        let m = Mat6::<f64>::diagonal([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let v = Vec6::splat(1.0);
        assert_eq!(m * v, Vec6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
    }

    #[test]
    fn rotation_quarter_turn() {
        let r = Mat3::rotation_z(core::f64::consts::FRAC_PI_2);
        let v = Vec3::new(1.0, 0.0, 0.0);
        let rotated = r * v;
        assert!(rotated.x.abs() < 1e-10);
        assert!((rotated.y - 1.0).abs() < 1e-10);

        let r2 = Mat2::rotation(core::f64::consts::FRAC_PI_2);
        let v2 = Vec2::new(1.0, 0.0);
        let rotated2 = r2 * v2;
        assert!(rotated2.x.abs() < 1e-10);
        assert!((rotated2.y - 1.0).abs() < 1e-10);
    }

    #[test]
    fn rotation_axis_matches_axis_constructors() {
        let angle = 0.7_f64;
        let rx = Mat3::rotation_x(angle);
        let ra = Mat3::rotation_axis(Vec3::x(), angle);
        for i in 0..3 {
            for j in 0..3 {
                assert!((rx.get(i, j) - ra.get(i, j)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn trace_and_norm() {
        let m = Mat3::<f64>::diagonal([1.0, 2.0, 3.0]);
        assert_eq!(m.trace(), 6.0);
        assert_eq!(m.norm_sq(), 14.0);
    }

    #[test]
    fn index_and_accessors() {
        let m = Mat2x4::<i32>::from_fn(|i, j| (i * 4 + j) as i32);
        assert_eq!(m[(1, 2)], 6);
        assert_eq!(m.row(0), [0, 1, 2, 3]);
        assert_eq!(m.col(3), [3, 7]);
    }

    #[test]
    fn integer_matrix_arithmetic() {
        let a = Mat2::<i64>::from_rows([[1, 2], [3, 4]]);
        let b = Mat2::<i64>::identity();
        assert_eq!(a * b, a);
        assert_eq!(a * 2, Mat2::from_rows([[2, 4], [6, 8]]));
    }
}
