// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![doc = r"Geometry and color helpers layered on `gem-core`.

This crate provides:
- Bounding shapes (`Circle`, `Sphere`) with inclusive containment and overlap
  tests.
- Color conversions between 0–255 RGB, normalized RGB and HSV.

Design notes:
- Every type is generic over `gem_core::Scalar` and defaults to the crate-wide
  `Real` precision, matching the vector types it wraps.
- Tests are inclusive on the boundary: a point exactly on the rim is inside,
  and two shapes that merely touch intersect.
"]
#![forbid(unsafe_code)]

/// RGB / HSV conversions.
pub mod color;
/// Circles and spheres.
pub mod shapes;

pub use shapes::circle::{circle_in_circle, point_in_circle, Circle};
pub use shapes::sphere::{point_in_sphere, sphere_in_sphere, Sphere};
