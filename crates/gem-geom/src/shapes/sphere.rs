// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use gem_core::math::{Mat4, Real, Scalar, Vec3};

/// Sphere in 3D space.
///
/// Same conventions as [`crate::Circle`]: non-negative radius, unit radius at
/// the origin by default, boundary-inclusive tests.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere<T = Real> {
    /// Radius of the sphere.
    pub radius: T,
    /// Center point.
    pub center: Vec3<T>,
}

impl<T: Scalar> Sphere<T> {
    /// Creates a sphere from its radius and center.
    #[must_use]
    pub const fn new(radius: T, center: Vec3<T>) -> Self {
        Self { radius, center }
    }

    /// `true` when `point` lies inside or on the surface.
    #[must_use]
    pub fn contains_point(&self, point: &Vec3<T>) -> bool {
        point.distance(&self.center) <= self.radius
    }

    /// `true` when the two spheres overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.center.distance(&other.center) <= self.radius + other.radius
    }

    /// Sphere whose center is mapped through the full affine `mat`.
    ///
    /// The center moves like any other point under `mat`. `radius`
    /// is kept as is, so callers with scaled transforms must adjust it
    /// themselves.
    #[must_use]
    pub fn transformed(&self, mat: &Mat4<T>) -> Self {
        Self::new(self.radius, mat.transform_point(&self.center))
    }
}

impl<T: Scalar> Default for Sphere<T> {
    fn default() -> Self {
        Self::new(T::ONE, Vec3::ZERO)
    }
}

/// Free-function form of [`Sphere::contains_point`].
#[must_use]
pub fn point_in_sphere<T: Scalar>(point: &Vec3<T>, sphere: &Sphere<T>) -> bool {
    sphere.contains_point(point)
}

/// Free-function form of [`Sphere::intersects`].
#[must_use]
pub fn sphere_in_sphere<T: Scalar>(a: &Sphere<T>, b: &Sphere<T>) -> bool {
    a.intersects(b)
}
