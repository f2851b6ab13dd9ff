// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Real, Scalar, Vec4};

/// Three-component vector used for points, directions, colors and Euler angles.
///
/// * The same value may be read as a coordinate (`x/y/z`), an RGB color
///   (`r/g/b`) or an HSV triple (`h/s/v`); these are accessors over one
///   storage array, not separate state.
/// * Use [`crate::math::Mat4::transform_point`] for points (homogeneous
///   `w = 1`) and [`crate::math::Mat4::transform_direction`] for directions
///   (homogeneous `w = 0`).
/// * When holding Euler angles (see [`crate::math::Quat::to_euler_angles`])
///   the components are `(roll, pitch, yaw)` in radians.
///
/// # Examples
/// ```
/// use gem_core::math::Vec3;
/// let mut v: Vec3 = Vec3::new(3.0, 0.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// v.normalize();
/// assert!((v.magnitude() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec3<T = Real> {
    data: [T; 3],
}

impl<T: Scalar> Vec3<T> {
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Creates a vector from components.
    #[must_use]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// X coordinate.
    #[must_use]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y coordinate.
    #[must_use]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Z coordinate.
    #[must_use]
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Red channel.
    #[must_use]
    pub fn r(&self) -> T {
        self.data[0]
    }

    /// Green channel.
    #[must_use]
    pub fn g(&self) -> T {
        self.data[1]
    }

    /// Blue channel.
    #[must_use]
    pub fn b(&self) -> T {
        self.data[2]
    }

    /// Hue.
    #[must_use]
    pub fn h(&self) -> T {
        self.data[0]
    }

    /// Saturation.
    #[must_use]
    pub fn s(&self) -> T {
        self.data[1]
    }

    /// Value (brightness).
    #[must_use]
    pub fn v(&self) -> T {
        self.data[2]
    }

    /// Cross product with another vector (right-handed).
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Extends to a [`Vec4`] with the given `w`.
    #[must_use]
    pub fn extend(&self, w: T) -> Vec4<T> {
        Vec4::new(self.data[0], self.data[1], self.data[2], w)
    }
}

impl_vector!(Vec3, 3);
