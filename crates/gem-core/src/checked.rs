// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Checked API boundary for the unguarded math core.
//!
//! [`Mat4::invert`], [`Mat4::perspective`] and [`Mat4::orthographic`] never
//! check their input. Callers that cannot tolerate infinities/NaNs wrap them
//! here instead; the wrappers validate, log the rejection at `debug` level and
//! return a [`MathError`]. On success they return exactly what the unchecked
//! function returns.

use thiserror::Error;
use tracing::debug;

use crate::math::{Mat4, Quat, Scalar};

/// Errors reported by the checked wrappers.
///
/// Scalars are widened to `f64` so the error type does not depend on the
/// build's precision.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// Matrix determinant is exactly zero or not finite.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// Determinant that was rejected.
        determinant: f64,
    },
    /// Field of view outside the open interval `(0, 180)` degrees.
    #[error("field of view {degrees}° is outside (0, 180)")]
    DegenerateFieldOfView {
        /// Rejected vertical field of view in degrees.
        degrees: f64,
    },
    /// Aspect ratio is zero or not finite.
    #[error("aspect ratio {aspect} is zero or not finite")]
    DegenerateAspectRatio {
        /// Rejected aspect ratio.
        aspect: f64,
    },
    /// Near and far planes coincide.
    #[error("near plane {near} and far plane {far} coincide")]
    DegenerateDepthRange {
        /// Near plane distance.
        near: f64,
        /// Far plane distance.
        far: f64,
    },
    /// `left == right` or `bottom == top`.
    #[error("projection extent along {axis} is zero")]
    DegenerateExtent {
        /// `"x"` or `"y"`.
        axis: &'static str,
    },
    /// A result contained an infinity or NaN.
    #[error("{what} contains a non-finite value")]
    NonFinite {
        /// Description of the offending value.
        what: &'static str,
    },
}

/// Inverse of `m`, or [`MathError::SingularMatrix`] when the determinant is
/// exactly zero or not finite.
///
/// There is no absolute tolerance: a determinant scales with the cube of the
/// matrix scale, so small but regular matrices must pass. A nearly singular
/// matrix whose inverse overflows is caught by [`ensure_finite`].
///
/// # Examples
/// ```
/// use gem_core::checked::{try_inverse, MathError};
/// use gem_core::math::{Mat4, Vec3};
/// let flat: Mat4 = Mat4::scale(Vec3::new(1.0, 0.0, 1.0));
/// assert!(matches!(try_inverse(&flat), Err(MathError::SingularMatrix { .. })));
/// ```
pub fn try_inverse<T: Scalar>(m: &Mat4<T>) -> Result<Mat4<T>, MathError> {
    let det = m.determinant();
    if !det.is_finite() || det == T::ZERO {
        debug!(determinant = det.to_f64(), "rejecting inverse of singular matrix");
        return Err(MathError::SingularMatrix {
            determinant: det.to_f64(),
        });
    }
    ensure_finite(m.inverse(), "inverse")
}

/// [`Mat4::perspective`] with its degenerate inputs rejected.
pub fn try_perspective<T: Scalar>(
    fov_degrees: T,
    aspect_ratio: T,
    z_near: T,
    z_far: T,
) -> Result<Mat4<T>, MathError> {
    let straight = T::from_f32(180.0);
    if !(fov_degrees > T::ZERO && fov_degrees < straight) {
        debug!(fov = fov_degrees.to_f64(), "rejecting perspective field of view");
        return Err(MathError::DegenerateFieldOfView {
            degrees: fov_degrees.to_f64(),
        });
    }
    if !aspect_ratio.is_finite() || aspect_ratio == T::ZERO {
        debug!(aspect = aspect_ratio.to_f64(), "rejecting perspective aspect ratio");
        return Err(MathError::DegenerateAspectRatio {
            aspect: aspect_ratio.to_f64(),
        });
    }
    check_depth(z_near, z_far)?;
    ensure_finite(
        Mat4::perspective(fov_degrees, aspect_ratio, z_near, z_far),
        "perspective",
    )
}

/// [`Mat4::orthographic`] with zero-width, zero-height and zero-depth boxes
/// rejected.
pub fn try_orthographic<T: Scalar>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Result<Mat4<T>, MathError> {
    if right == left {
        debug!("rejecting orthographic box with zero width");
        return Err(MathError::DegenerateExtent { axis: "x" });
    }
    if top == bottom {
        debug!("rejecting orthographic box with zero height");
        return Err(MathError::DegenerateExtent { axis: "y" });
    }
    check_depth(near, far)?;
    ensure_finite(
        Mat4::orthographic(left, right, bottom, top, near, far),
        "orthographic",
    )
}

/// Normalized copy of `q`, or [`MathError::NonFinite`] when `q` has zero
/// length (normalization would be a no-op) or contains a NaN.
pub fn try_normalized<T: Scalar>(q: &Quat<T>) -> Result<Quat<T>, MathError> {
    let mag = q.magnitude();
    if !(mag > T::ZERO) || !mag.is_finite() {
        debug!(magnitude = mag.to_f64(), "rejecting quaternion normalization");
        return Err(MathError::NonFinite {
            what: "quaternion magnitude",
        });
    }
    Ok(q.normalized())
}

/// Passes `m` through when all of its elements are finite.
pub fn ensure_finite<T: Scalar>(m: Mat4<T>, what: &'static str) -> Result<Mat4<T>, MathError> {
    if m.is_finite() {
        Ok(m)
    } else {
        debug!(what, "matrix contains a non-finite element");
        Err(MathError::NonFinite { what })
    }
}

fn check_depth<T: Scalar>(near: T, far: T) -> Result<(), MathError> {
    if far == near {
        debug!(near = near.to_f64(), far = far.to_f64(), "rejecting zero depth range");
        return Err(MathError::DegenerateDepthRange {
            near: near.to_f64(),
            far: far.to_f64(),
        });
    }
    Ok(())
}
