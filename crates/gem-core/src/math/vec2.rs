// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Real, Scalar};

/// Two-component vector used for 2D positions, sizes and texture coordinates.
///
/// Arithmetic is element-wise; see the operator impls for vector/vector and
/// vector/scalar forms. Division is unguarded.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec2<T = Real> {
    data: [T; 2],
}

impl<T: Scalar> Vec2<T> {
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE);

    /// Creates a vector from components.
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
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

    /// 2D perp-dot (z of the 3D cross product).
    #[must_use]
    pub fn perp_dot(&self, other: &Self) -> T {
        self.x() * other.y() - self.y() * other.x()
    }
}

impl_vector!(Vec2, 2);
