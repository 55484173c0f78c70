//! Carry-through products between square matrices of unequal size.
//!
//! Multiplying, say, a 2x2 by a 6x6 embeds the 2x2 into the upper-left
//! block of a 6x6 identity before multiplying, so the excess rows/columns
//! of the larger operand pass into the result unmodified. This is the
//! standard convention for composing a small transform into a larger
//! identity-like state matrix.

use crate::{Mat, Scalar};
use core::ops::Mul;

impl<S: Scalar, const N: usize> Mat<S, N, N> {
    /// Embed into the upper-left block of an `M x M` identity.
    ///
    /// `M < N` would truncate, so it is rejected at compile time.
    pub fn embed<const M: usize>(self) -> Mat<S, M, M> {
        const {
            assert!(N <= M, "embed target must be at least as large as the source");
        }
        Mat::from_fn(|i, j| {
            if i < N && j < N {
                self.get(i, j)
            } else if i == j {
                S::ONE
            } else {
                S::ZERO
            }
        })
    }
}

// One impl pair per unordered size pair; the result always takes the
// larger operand's shape.
macro_rules! impl_embed_mul {
    ($(($small:literal, $large:literal)),* $(,)?) => {$(
        impl<S: Scalar> Mul<Mat<S, $large, $large>> for Mat<S, $small, $small> {
            type Output = Mat<S, $large, $large>;
            #[inline]
            fn mul(self, rhs: Mat<S, $large, $large>) -> Mat<S, $large, $large> {
                self.embed::<$large>() * rhs
            }
        }

        impl<S: Scalar> Mul<Mat<S, $small, $small>> for Mat<S, $large, $large> {
            type Output = Mat<S, $large, $large>;
            #[inline]
            fn mul(self, rhs: Mat<S, $small, $small>) -> Mat<S, $large, $large> {
                self * rhs.embed::<$large>()
            }
        }
    )*};
}

impl_embed_mul!(
    (2, 3),
    (2, 4),
    (2, 5),
    (2, 6),
    (3, 4),
    (3, 5),
    (3, 6),
    (4, 5),
    (4, 6),
    (5, 6),
);
