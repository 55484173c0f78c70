//! Advisory overflow predicates.
//!
//! Each predicate answers "would `a OP b` stay inside the type's
//! representable range" without performing the risky operation. They never
//! panic; the caller decides whether to branch, saturate, or proceed.

/// Overflow-safety predicates, implemented for every primitive width.
pub trait SafeArith: Copy {
    fn addition_is_safe(self, rhs: Self) -> bool;
    fn subtraction_is_safe(self, rhs: Self) -> bool;
    fn multiplication_is_safe(self, rhs: Self) -> bool;
}

macro_rules! impl_safe_int {
    ($($t:ty),*) => {$(
        impl SafeArith for $t {
            #[inline]
            fn addition_is_safe(self, rhs: Self) -> bool {
                self.checked_add(rhs).is_some()
            }

            #[inline]
            fn subtraction_is_safe(self, rhs: Self) -> bool {
                self.checked_sub(rhs).is_some()
            }

            #[inline]
            fn multiplication_is_safe(self, rhs: Self) -> bool {
                self.checked_mul(rhs).is_some()
            }
        }
    )*};
}

impl_safe_int!(i8, i16, i32, i64, u8, u16, u32, u64);

// f32 predicates widen to f64, which holds every f32 product/sum exactly
// enough to compare against f32::MAX.
impl SafeArith for f32 {
    #[inline]
    fn addition_is_safe(self, rhs: Self) -> bool {
        let sum = self as f64 + rhs as f64;
        sum.is_finite() && sum.abs() <= f32::MAX as f64
    }

    #[inline]
    fn subtraction_is_safe(self, rhs: Self) -> bool {
        let diff = self as f64 - rhs as f64;
        diff.is_finite() && diff.abs() <= f32::MAX as f64
    }

    #[inline]
    fn multiplication_is_safe(self, rhs: Self) -> bool {
        let prod = self as f64 * rhs as f64;
        prod.is_finite() && prod.abs() <= f32::MAX as f64
    }
}

// f64 has no wider float to lean on; compare against the remaining headroom
// (MAX - a / MIN - a) instead of performing the operation.
impl SafeArith for f64 {
    #[inline]
    fn addition_is_safe(self, rhs: Self) -> bool {
        if !self.is_finite() || !rhs.is_finite() {
            return false;
        }
        if rhs > 0.0 {
            self <= f64::MAX - rhs
        } else {
            self >= f64::MIN - rhs
        }
    }

    #[inline]
    fn subtraction_is_safe(self, rhs: Self) -> bool {
        if !self.is_finite() || !rhs.is_finite() {
            return false;
        }
        if rhs < 0.0 {
            self <= f64::MAX + rhs
        } else {
            self >= f64::MIN + rhs
        }
    }

    #[inline]
    fn multiplication_is_safe(self, rhs: Self) -> bool {
        if !self.is_finite() || !rhs.is_finite() {
            return false;
        }
        if rhs == 0.0 || self == 0.0 {
            return true;
        }
        self.abs() <= f64::MAX / rhs.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_boundary() {
        assert!(!i32::MAX.addition_is_safe(1));
        assert!(i32::MAX.addition_is_safe(0));
        assert!(0_i32.addition_is_safe(0));
        assert!(!i32::MIN.addition_is_safe(-1));
        assert!(!u8::MAX.addition_is_safe(1));
        assert!(254_u8.addition_is_safe(1));
    }

    #[test]
    fn subtraction_boundary() {
        assert!(!i32::MIN.subtraction_is_safe(1));
        assert!(i32::MIN.subtraction_is_safe(0));
        assert!(!0_u16.subtraction_is_safe(1));
        assert!(1_u16.subtraction_is_safe(1));
    }

    #[test]
    fn multiplication_boundary() {
        assert!(!i8::MAX.multiplication_is_safe(2));
        assert!(i8::MAX.multiplication_is_safe(1));
        assert!(0_i64.multiplication_is_safe(i64::MAX));
        assert!(!(i64::MAX / 2 + 1).multiplication_is_safe(2));
    }

    #[test]
    fn float_addition() {
        assert!(!f64::MAX.addition_is_safe(f64::MAX));
        assert!(f64::MAX.addition_is_safe(0.0));
        assert!(f64::MAX.addition_is_safe(-f64::MAX));
        assert!(0.0_f64.addition_is_safe(0.0));
        assert!(!f64::NAN.addition_is_safe(1.0));
        assert!(!f64::INFINITY.addition_is_safe(1.0));
    }

    #[test]
    fn float_subtraction() {
        assert!(!f64::MIN.subtraction_is_safe(f64::MAX));
        assert!(f64::MIN.subtraction_is_safe(0.0));
        assert!(1.0_f64.subtraction_is_safe(2.0));
    }

    #[test]
    fn float_multiplication() {
        assert!(!f64::MAX.multiplication_is_safe(2.0));
        assert!(f64::MAX.multiplication_is_safe(1.0));
        assert!(f64::MAX.multiplication_is_safe(0.0));
        assert!(!f32::MAX.multiplication_is_safe(f32::MAX));
        assert!(2.0_f32.multiplication_is_safe(3.0));
    }
}
