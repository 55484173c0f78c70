//! Error types for hexal-dyn.

use core::fmt;

/// Shape disagreement between runtime-sized operands.
///
/// Raised before any computation happens; no partial result is ever
/// produced. Vector operands report their shape as `(len, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionMismatch {
    pub left: (usize, usize),
    pub right: (usize, usize),
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dimension mismatch: left operand is {}x{}, right operand is {}x{}",
            self.left.0, self.left.1, self.right.0, self.right.1
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DimensionMismatch {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_shapes() {
        let e = DimensionMismatch {
            left: (2, 3),
            right: (4, 2),
        };
        let msg = alloc::format!("{e}");
        assert!(msg.contains("2x3"));
        assert!(msg.contains("4x2"));
    }
}
