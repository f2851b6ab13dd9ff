// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar abstraction for gem math.
//!
//! Every value type in this crate is generic over a [`Scalar`] so the same
//! code serves single and double precision. The crate-wide default is
//! [`Real`], which is `f32` unless the `double` feature is enabled.
//!
//! Precision contract:
//! - All operations are plain IEEE-754 arithmetic; no fused multiply-add is
//!   requested explicitly and no flushing of subnormals is applied.
//! - Trigonometric functions interpret arguments as radians.
//! - Degenerate inputs propagate infinities/NaNs; nothing here panics.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Scalar type selected for the whole build.
///
/// `f32` by default; `f64` with the `double` feature. Types such as
/// [`crate::math::Vec3`] use this as their default type parameter so a single
/// build never mixes precisions unless a caller names one explicitly.
#[cfg(not(feature = "double"))]
pub type Real = f32;

/// Scalar type selected for the whole build.
///
/// `f32` by default; `f64` with the `double` feature. Types such as
/// [`crate::math::Vec3`] use this as their default type parameter so a single
/// build never mixes precisions unless a caller names one explicitly.
#[cfg(feature = "double")]
pub type Real = f64;

/// Floating-point scalar used by every gem value type.
///
/// Arithmetic is required through the standard operator traits so generic
/// code can use `+`, `-`, `*`, `/`, unary `-` and their compound forms.
/// Implemented for `f32` and `f64`.
pub trait Scalar:
    Copy
    + Default
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// `2`, used by the doubling terms of rotation formulas.
    const TWO: Self;
    /// `0.5`, used for half angles.
    const HALF: Self;
    /// Archimedes' constant.
    const PI: Self;
    /// `π / 2`; the gimbal-lock pitch magnitude.
    const FRAC_PI_2: Self;
    /// Degrees-to-radians factor (`π / 180`).
    const DEG_TO_RAD: Self;
    /// Radians-to-degrees factor (`180 / π`).
    const RAD_TO_DEG: Self;
    /// Degeneracy threshold used by the gimbal-lock clamp and the checked API.
    ///
    /// This is not machine epsilon: it is the distance from `±1` at which
    /// `sin(pitch)` is treated as saturated.
    const EPSILON: Self;

    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine (radians).
    fn sin(self) -> Self;
    /// Cosine (radians).
    fn cos(self) -> Self;
    /// Sine and cosine (radians) in one call.
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
    /// Tangent (radians).
    fn tan(self) -> Self;
    /// Arcsine; NaN outside `[-1, 1]`.
    fn asin(self) -> Self;
    /// Arccosine; NaN outside `[-1, 1]`.
    fn acos(self) -> Self;
    /// Four-quadrant arctangent of `self / other`.
    fn atan2(self, other: Self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Largest integer value not greater than `self`.
    fn floor(self) -> Self;
    /// `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;
    /// `true` unless the value is infinite or NaN.
    fn is_finite(self) -> bool;
    /// Converts from `f32`; used for literals in generic code.
    fn from_f32(value: f32) -> Self;
    /// Widens to `f64` for diagnostics and integer conversions.
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($ty:ident, $eps:expr) => {
        impl Scalar for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = core::$ty::consts::PI;
            const FRAC_PI_2: Self = core::$ty::consts::FRAC_PI_2;
            const DEG_TO_RAD: Self = core::$ty::consts::PI / 180.0;
            const RAD_TO_DEG: Self = 180.0 / core::$ty::consts::PI;
            const EPSILON: Self = $eps;

            #[inline]
            fn sqrt(self) -> Self {
                $ty::sqrt(self)
            }

            #[inline]
            fn sin(self) -> Self {
                $ty::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $ty::cos(self)
            }

            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                $ty::sin_cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                $ty::tan(self)
            }

            #[inline]
            fn asin(self) -> Self {
                $ty::asin(self)
            }

            #[inline]
            fn acos(self) -> Self {
                $ty::acos(self)
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                $ty::atan2(self, other)
            }

            #[inline]
            fn abs(self) -> Self {
                $ty::abs(self)
            }

            #[inline]
            fn floor(self) -> Self {
                $ty::floor(self)
            }

            #[inline]
            fn copysign(self, sign: Self) -> Self {
                $ty::copysign(self, sign)
            }

            #[inline]
            fn is_finite(self) -> bool {
                $ty::is_finite(self)
            }

            #[inline]
            fn from_f32(value: f32) -> Self {
                Self::from(value)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }
    };
}

impl_scalar!(f32, 1e-6);
impl_scalar!(f64, 1e-12);
