//! hexal: fixed-dimension numeric kernel
//!
//! Vector and matrix algebra for dimensions 2 through 6, generic over
//! scalar type, plus the scalar safety primitives (overflow predicates,
//! epsilon comparison) the algebra relies on.
//!
//! # Design principles
//! - Generic over [`Scalar`] (integer family, f32, f64); operations that
//!   need a square root require [`Real`]
//! - Every type is an immutable stack value passed by copy
//! - Matrix shapes are const parameters, so products type-check at the call
//!   site, with no runtime shape checks and no allocation
//! - `#[repr(C)]` everywhere for GPU/FFI interop
//! - Unequal-size square products embed the smaller operand into an
//!   identity of the larger size (see [`Mat::embed`])

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod approx;
mod embed;
mod mat;
mod safe;
mod scalar;
mod vec2;
mod vec3;
mod vec4;
mod vec5;
mod vec6;

pub use approx::{
    close, close_to, close_to_scaled, greater_or_close, in_range, is_between, is_one, is_zero,
    lerp, less_or_close, near_zero, strictly_greater, strictly_less,
};
pub use mat::{
    Mat, Mat2, Mat2x3, Mat2x4, Mat2x5, Mat2x6, Mat3, Mat3x2, Mat3x4, Mat3x5, Mat3x6, Mat4, Mat4x2,
    Mat4x3, Mat4x5, Mat4x6, Mat5, Mat5x2, Mat5x3, Mat5x4, Mat5x6, Mat6, Mat6x2, Mat6x3, Mat6x4,
    Mat6x5,
};
pub use safe::SafeArith;
pub use scalar::{Real, Scalar};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use vec5::Vec5;
pub use vec6::Vec6;

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: All fields are the same float type, #[repr(C)], no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec2<f32>);
    impl_pod!(Vec2<f64>);
    impl_pod!(Vec3<f32>);
    impl_pod!(Vec3<f64>);
    impl_pod!(Vec4<f32>);
    impl_pod!(Vec4<f64>);
    impl_pod!(Vec5<f32>);
    impl_pod!(Vec5<f64>);
    impl_pod!(Vec6<f32>);
    impl_pod!(Vec6<f64>);
    impl_pod!(Mat2<f32>);
    impl_pod!(Mat2<f64>);
    impl_pod!(Mat3<f32>);
    impl_pod!(Mat3<f64>);
    impl_pod!(Mat4<f32>);
    impl_pod!(Mat4<f64>);
    impl_pod!(Mat5<f32>);
    impl_pod!(Mat5<f64>);
    impl_pod!(Mat6<f32>);
    impl_pod!(Mat6<f64>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_and_matrix_layers_compose() {
        // Rotate a vector with a matrix, then classify the result.
        let r = Mat3::rotation_z(core::f64::consts::FRAC_PI_2);
        let v = Vec3::new(1.0, 0.0, 0.0);
        let rotated = r * v;
        assert!(rotated.is_unit());
        assert!(close(rotated.y, 1.0));
    }

    #[test]
    fn scalar_predicates_back_the_algebra() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert!(is_one(v.normalize().norm()));
        assert!(is_zero(Vec3::<f64>::zero().norm()));
    }

    #[test]
    fn scalar_lerp_boundaries() {
        assert_eq!(lerp(1.0, 3.0, 0.0), 1.0);
        assert_eq!(lerp(1.0, 3.0, 1.0), 3.0);
    }

    #[test]
    fn overflow_predicate_boundary() {
        assert!(!i32::MAX.addition_is_safe(1));
        assert!(0_i32.addition_is_safe(0));
    }
}
