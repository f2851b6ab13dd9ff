// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Math helpers covering scalar utilities, 2/3/4-component vectors, a
//! column-major 4×4 matrix and quaternions.
//!
//! Conventions shared by every type in this module:
//! - Column vectors, right-handed coordinates, column-major storage.
//! - Angles are radians except where a function name or doc says degrees
//!   ([`Mat4::rotation`], [`Mat4::perspective`]).
//! - Hot-path functions never check for degenerate input. Division by a zero
//!   magnitude, determinant or field of view propagates IEEE infinities/NaNs.
//!   See [`crate::checked`] for guarded wrappers.

mod mat4;
mod quat;
mod scalar;
#[macro_use]
mod vec_ops;
mod vec2;
mod vec3;
mod vec4;

pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::{Real, Scalar};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// A position in space; same type as [`Vec3`].
pub type Pos<T = Real> = Vec3<T>;
/// RGB color; same type as [`Vec3`] (`r/g/b` accessors).
pub type Color3<T = Real> = Vec3<T>;
/// RGBA color; same type as [`Vec4`] (`r/g/b/a` accessors).
pub type Color4<T = Real> = Vec4<T>;

/// Converts degrees to radians.
#[must_use]
pub fn deg_to_rad<T: Scalar>(degrees: T) -> T {
    degrees * T::DEG_TO_RAD
}

/// Converts radians to degrees.
#[must_use]
pub fn rad_to_deg<T: Scalar>(radians: T) -> T {
    radians * T::RAD_TO_DEG
}

/// Reciprocal `1 / value`.
///
/// Unguarded: `inverse(0.0)` is `+inf`.
#[must_use]
pub fn inverse<T: Scalar>(value: T) -> T {
    T::ONE / value
}

/// Larger of two values; returns `b` when the comparison is unordered.
#[must_use]
pub fn max<T: Scalar>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Largest of three values.
#[must_use]
pub fn max3<T: Scalar>(a: T, b: T, c: T) -> T {
    max(max(a, b), c)
}

/// Smaller of two values; returns `b` when the comparison is unordered.
#[must_use]
pub fn min<T: Scalar>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Smallest of three values.
#[must_use]
pub fn min3<T: Scalar>(a: T, b: T, c: T) -> T {
    min(min(a, b), c)
}

/// Clamps `value` to the inclusive `[min_val, max_val]` range.
#[must_use]
pub fn clamp<T: Scalar>(value: T, min_val: T, max_val: T) -> T {
    debug_assert!(min_val <= max_val, "invalid clamp range: {min_val} > {max_val}");
    min(max(value, min_val), max_val)
}

/// Dot product of two vectors of the same dimension.
///
/// Free-function form of [`Vec3::dot`] and friends.
#[must_use]
pub fn dot<V: Vector>(a: &V, b: &V) -> V::Component {
    a.dot(b)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance<V: Vector>(a: &V, b: &V) -> V::Component {
    a.distance(b)
}

/// Angle in radians between two vectors, `acos(a·b / (|a||b|))`.
///
/// Unguarded: a zero-length input yields NaN.
#[must_use]
pub fn angle<V: Vector>(a: &V, b: &V) -> V::Component {
    a.angle(b)
}

/// Normalizes `v` in place; no-op for a zero vector.
pub fn normalize<V: Vector>(v: &mut V) {
    v.normalize();
}

/// Operations shared by [`Vec2`], [`Vec3`] and [`Vec4`].
///
/// The concrete types expose the same methods inherently; this trait exists
/// so geometry helpers and the free functions above can be written once.
pub trait Vector: Copy {
    /// Component scalar type.
    type Component: Scalar;

    /// Dot product.
    fn dot(&self, other: &Self) -> Self::Component;

    /// Euclidean length.
    fn magnitude(&self) -> Self::Component;

    /// Normalizes in place; no-op when the magnitude is not positive.
    fn normalize(&mut self);

    /// Distance to `other`.
    fn distance(&self, other: &Self) -> Self::Component;

    /// Angle to `other` in radians.
    fn angle(&self, other: &Self) -> Self::Component {
        (self.dot(other) / (self.magnitude() * other.magnitude())).acos()
    }
}
