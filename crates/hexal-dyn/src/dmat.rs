use alloc::vec::Vec;
use core::ops::{Index, IndexMut, Mul};
use hexal::{Real, Scalar};

use crate::dvec::DVec;
use crate::error::DimensionMismatch;

/// Heap-allocated matrix with run-time shape.
///
/// Storage is row-major: element `(i, j)` lives at `data[i * ncols + j]`,
/// so a row is a contiguous slice. Shape disagreements between operands
/// are reported as [`DimensionMismatch`] instead of panicking; the check
/// runs before any element is computed.
#[derive(Clone, Debug, PartialEq)]
pub struct DMat<S> {
    nrows: usize,
    ncols: usize,
    data: Vec<S>,
}

impl<S: Scalar> DMat<S> {
    /// Create from raw row-major data.
    pub fn from_raw(nrows: usize, ncols: usize, data: Vec<S>) -> Self {
        assert_eq!(data.len(), nrows * ncols, "DMat from_raw: data length mismatch");
        Self { nrows, ncols, data }
    }

    /// Create from a function of `(row, col)`.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> S) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { nrows, ncols, data }
    }

    /// Zero matrix of given shape.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            data: alloc::vec![S::ZERO; nrows * ncols],
        }
    }

    /// Identity matrix of size `n`.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { S::ONE } else { S::ZERO })
    }

    /// Square matrix with the given diagonal, zero elsewhere.
    pub fn from_diagonal(diag: &[S]) -> Self {
        let n = diag.len();
        Self::from_fn(n, n, |i, j| if i == j { diag[i] } else { S::ZERO })
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> S {
        self.data[i * self.ncols + j]
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut S {
        &mut self.data[i * self.ncols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, v: S) {
        self.data[i * self.ncols + j] = v;
    }

    /// Row `i` as a contiguous slice.
    pub fn row(&self, i: usize) -> &[S] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Row `i` copied into a vector.
    pub fn row_vec(&self, i: usize) -> DVec<S> {
        DVec::from_slice(self.row(i))
    }

    /// Column `j` copied into a vector.
    pub fn col_vec(&self, j: usize) -> DVec<S> {
        DVec::from_fn(self.nrows, |i| self.get(i, j))
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self.get(j, i))
    }

    /// Sum of the diagonal. Defined for any shape; runs over the shorter
    /// dimension.
    pub fn trace(&self) -> S {
        let n = Ord::min(self.nrows, self.ncols);
        let mut t = S::ZERO;
        for i in 0..n {
            t += self.get(i, i);
        }
        t
    }

    /// Squared Frobenius norm.
    pub fn norm_sq(&self) -> S {
        let mut s = S::ZERO;
        for &x in &self.data {
            s += x * x;
        }
        s
    }

    /// Elementwise sum. Fails if the shapes differ.
    pub fn try_add(&self, rhs: &DMat<S>) -> Result<DMat<S>, DimensionMismatch> {
        if self.shape() != rhs.shape() {
            return Err(DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(Self::from_fn(self.nrows, self.ncols, |i, j| {
            self.get(i, j) + rhs.get(i, j)
        }))
    }

    /// Elementwise difference. Fails if the shapes differ.
    pub fn try_sub(&self, rhs: &DMat<S>) -> Result<DMat<S>, DimensionMismatch> {
        if self.shape() != rhs.shape() {
            return Err(DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(Self::from_fn(self.nrows, self.ncols, |i, j| {
            self.get(i, j) - rhs.get(i, j)
        }))
    }

    /// Matrix product. Fails if the inner dimensions disagree.
    pub fn try_mul_mat(&self, rhs: &DMat<S>) -> Result<DMat<S>, DimensionMismatch> {
        if self.ncols != rhs.nrows {
            return Err(DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(Self::from_fn(self.nrows, rhs.ncols, |i, j| {
            let mut sum = S::ZERO;
            for k in 0..self.ncols {
                sum += self.get(i, k) * rhs.get(k, j);
            }
            sum
        }))
    }

    /// Matrix-vector product, treating `rhs` as a column. Fails if the
    /// vector length disagrees with the column count.
    pub fn try_mul_vec(&self, rhs: &DVec<S>) -> Result<DVec<S>, DimensionMismatch> {
        if self.ncols != rhs.len() {
            return Err(DimensionMismatch {
                left: self.shape(),
                right: (rhs.len(), 1),
            });
        }
        Ok(DVec::from_fn(self.nrows, |i| {
            let mut sum = S::ZERO;
            for k in 0..self.ncols {
                sum += self.get(i, k) * rhs[k];
            }
            sum
        }))
    }
}

impl<S: Real> DMat<S> {
    /// Frobenius norm.
    pub fn norm(&self) -> S {
        self.norm_sq().sqrt()
    }
}

impl<S: Scalar> Index<(usize, usize)> for DMat<S> {
    type Output = S;
    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &S {
        &self.data[i * self.ncols + j]
    }
}

impl<S: Scalar> IndexMut<(usize, usize)> for DMat<S> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut S {
        &mut self.data[i * self.ncols + j]
    }
}

impl<S: Scalar> Mul<S> for &DMat<S> {
    type Output = DMat<S>;
    fn mul(self, rhs: S) -> DMat<S> {
        DMat::from_fn(self.nrows, self.ncols, |i, j| self.get(i, j) * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_shapes() {
        let a = DMat::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        let b = DMat::from_fn(3, 2, |i, j| (i * 2 + j) as f64);
        let p = a.try_mul_mat(&b).unwrap();
        assert_eq!(p.shape(), (2, 2));
        // First row of a dotted with first column of b.
        assert_eq!(p.get(0, 0), 0.0 * 0.0 + 1.0 * 2.0 + 2.0 * 4.0);
    }

    #[test]
    fn mismatched_product_fails_before_computing() {
        // 2x3 times 4x2: inner dimensions disagree, so the whole
        // operation reports a mismatch rather than a partial result.
        let a = DMat::<f64>::zeros(2, 3);
        let b = DMat::<f64>::zeros(4, 2);
        let err = a.try_mul_mat(&b).unwrap_err();
        assert_eq!(err.left, (2, 3));
        assert_eq!(err.right, (4, 2));
    }

    #[test]
    fn mismatched_add_fails() {
        let a = DMat::<i32>::zeros(2, 2);
        let b = DMat::<i32>::zeros(3, 2);
        assert!(a.try_add(&b).is_err());
    }

    #[test]
    fn identity_product_is_identity() {
        let i4 = DMat::<f64>::identity(4);
        let m = DMat::from_fn(4, 4, |i, j| (i + j) as f64);
        assert_eq!(i4.try_mul_mat(&m).unwrap(), m);
        assert_eq!(m.try_mul_mat(&i4).unwrap(), m);
    }

    #[test]
    fn vector_product() {
        let m = DMat::from_raw(2, 2, alloc::vec![1.0, 2.0, 3.0, 4.0]);
        let v = DVec::from_slice(&[1.0, 1.0]);
        let r = m.try_mul_vec(&v).unwrap();
        assert_eq!(r[0], 3.0);
        assert_eq!(r[1], 7.0);

        let short = DVec::from_slice(&[1.0]);
        let err = m.try_mul_vec(&short).unwrap_err();
        assert_eq!(err.right, (1, 1));
    }

    #[test]
    fn transpose_and_trace() {
        let m = DMat::from_raw(2, 3, alloc::vec![1, 2, 3, 4, 5, 6]);
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(2, 1), 6);
        assert_eq!(m.trace(), 1 + 5);
    }

    #[test]
    fn diagonal_constructor() {
        let d = DMat::from_diagonal(&[1.0, 2.0, 3.0]);
        assert_eq!(d.get(1, 1), 2.0);
        assert_eq!(d.get(0, 2), 0.0);
        assert_eq!(d.trace(), 6.0);
    }
}
