// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Bounding shapes used for coarse containment and overlap queries.
//!
//! Both shapes store a radius and a center and compare Euclidean distances
//! against radii, so a touching boundary counts as inside/overlapping.

#[doc = "Two-dimensional circle."]
pub mod circle;
#[doc = "Three-dimensional sphere."]
pub mod sphere;
