// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"gem-core: vectors, 4×4 matrices and quaternions for real-time graphics.

This crate provides:
- Scalar helpers and the [`math::Scalar`] abstraction over `f32`/`f64`.
- `Vec2`, `Vec3`, `Vec4` value types with element-wise arithmetic.
- A column-major [`math::Mat4`] with projection/view/transform factories,
  determinant and inversion.
- [`math::Quat`] with axis-angle, Euler-angle and matrix conversions.
- [`checked`]: opt-in wrappers that reject degenerate input with a
  [`checked::MathError`] instead of producing infinities/NaNs.

Design notes:
- Every type is a small `Copy` value; nothing allocates and nothing locks.
  Independent instances may be used from any thread; a single instance is
  never shared mutably (the borrow checker enforces this).
- Hot paths compute without checking. The only guarded cases are
  normalization of a zero vector/quaternion (no-op) and the gimbal-lock clamp
  in [`math::Quat::to_euler_angles`].
- `Real` is `f32` by default and `f64` with the `double` feature.
"]
#![forbid(unsafe_code)]

pub mod checked;
pub mod math;

pub use checked::MathError;
pub use math::{Color3, Color4, Mat4, Pos, Quat, Real, Scalar, Vec2, Vec3, Vec4};
