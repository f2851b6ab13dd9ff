// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use gem_core::math::{Real, Scalar, Vec2};

/// Circle in the plane.
///
/// Invariants:
/// - `radius` is expected to be non-negative; a negative radius contains
///   nothing.
/// - The default circle has radius 1 and sits at the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle<T = Real> {
    /// Radius of the circle.
    pub radius: T,
    /// Center point.
    pub center: Vec2<T>,
}

impl<T: Scalar> Circle<T> {
    /// Creates a circle from its radius and center.
    #[must_use]
    pub const fn new(radius: T, center: Vec2<T>) -> Self {
        Self { radius, center }
    }

    /// `true` when `point` lies inside or on the rim.
    ///
    /// # Examples
    /// ```
    /// use gem_core::math::Vec2;
    /// use gem_geom::Circle;
    /// let c: Circle = Circle::default();
    /// assert!(c.contains_point(&Vec2::new(1.0, 0.0)));
    /// assert!(!c.contains_point(&Vec2::new(1.0, 1.0)));
    /// ```
    #[must_use]
    pub fn contains_point(&self, point: &Vec2<T>) -> bool {
        point.distance(&self.center) <= self.radius
    }

    /// `true` when the two circles overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.center.distance(&other.center) <= self.radius + other.radius
    }
}

impl<T: Scalar> Default for Circle<T> {
    fn default() -> Self {
        Self::new(T::ONE, Vec2::ZERO)
    }
}

/// Free-function form of [`Circle::contains_point`].
#[must_use]
pub fn point_in_circle<T: Scalar>(point: &Vec2<T>, circle: &Circle<T>) -> bool {
    circle.contains_point(point)
}

/// Free-function form of [`Circle::intersects`].
#[must_use]
pub fn circle_in_circle<T: Scalar>(a: &Circle<T>, b: &Circle<T>) -> bool {
    a.intersects(b)
}
