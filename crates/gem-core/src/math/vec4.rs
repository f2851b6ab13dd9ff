// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Real, Scalar, Vec3};

/// Four-component vector: homogeneous coordinates, matrix columns and RGBA.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec4<T = Real> {
    data: [T; 4],
}

impl<T: Scalar> Vec4<T> {
    /// Creates a vector from components.
    #[must_use]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
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

    /// W coordinate.
    #[must_use]
    pub fn w(&self) -> T {
        self.data[3]
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

    /// Alpha channel.
    #[must_use]
    pub fn a(&self) -> T {
        self.data[3]
    }

    /// Drops `w`.
    #[must_use]
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }
}

impl_vector!(Vec4, 4);
