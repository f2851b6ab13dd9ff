// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use gem_core::checked::{
    ensure_finite, try_inverse, try_normalized, try_orthographic, try_perspective,
};
use gem_core::math::{Mat4, Quat, Real, Vec3};
use gem_core::MathError;

#[test]
fn inverse_of_singular_matrix_is_rejected() {
    let flat: Mat4 = Mat4::scale(Vec3::new(2.0, 0.0, 1.0));
    let err = try_inverse(&flat).unwrap_err();
    assert_eq!(err, MathError::SingularMatrix { determinant: 0.0 });
    assert!(err.to_string().contains("singular"));
}

#[test]
fn inverse_of_regular_matrix_matches_unchecked() {
    let m: Mat4 = Mat4::translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::scale(Vec3::splat(2.0));
    assert_eq!(try_inverse(&m), Ok(m.inverse()));
}

#[test]
fn inverse_of_small_uniform_scale_is_accepted() {
    let small: Mat4 = Mat4::scale(Vec3::splat(0.01));
    let inv = try_inverse(&small).expect("small scale is regular");
    assert!((inv.at(0, 0) - 100.0).abs() < 1e-3);
    assert!((inv.at(3, 3) - 1.0).abs() < 1e-6);

    let tiny: Mat4<f64> = Mat4::scale(Vec3::splat(1e-4));
    let inv = try_inverse(&tiny).expect("tiny f64 scale is regular");
    assert!((inv.at(2, 2) - 1e4).abs() < 1e-6);
}

#[test]
fn inverse_of_non_finite_matrix_is_rejected() {
    let m: Mat4 = Mat4::from_diagonal(Real::NAN);
    assert!(matches!(
        try_inverse(&m),
        Err(MathError::SingularMatrix { .. })
    ));
}

#[test]
fn perspective_rejects_degenerate_field_of_view() {
    for fov in [0.0, -10.0, 180.0, 270.0, Real::NAN] {
        let result: Result<Mat4, _> = try_perspective(fov, 1.0, 0.1, 100.0);
        assert!(
            matches!(result, Err(MathError::DegenerateFieldOfView { .. })),
            "fov {fov} should be rejected"
        );
    }
}

#[test]
fn perspective_rejects_degenerate_aspect_and_depth() {
    let aspect: Result<Mat4, _> = try_perspective(60.0, 0.0, 0.1, 100.0);
    assert_eq!(aspect, Err(MathError::DegenerateAspectRatio { aspect: 0.0 }));

    let infinite: Result<Mat4, _> = try_perspective(60.0, Real::INFINITY, 0.1, 100.0);
    assert!(matches!(
        infinite,
        Err(MathError::DegenerateAspectRatio { .. })
    ));

    let depth: Result<Mat4, _> = try_perspective(60.0, 1.0, 5.0, 5.0);
    assert_eq!(
        depth,
        Err(MathError::DegenerateDepthRange {
            near: 5.0,
            far: 5.0
        })
    );
}

#[test]
fn perspective_accepts_valid_input_unchanged() {
    let checked: Mat4 = try_perspective(90.0, 1.5, 0.5, 50.0).unwrap();
    assert_eq!(checked, Mat4::perspective(90.0, 1.5, 0.5, 50.0));
}

#[test]
fn orthographic_rejects_flat_boxes() {
    let zero_width: Result<Mat4, _> = try_orthographic(1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
    assert_eq!(zero_width, Err(MathError::DegenerateExtent { axis: "x" }));

    let zero_height: Result<Mat4, _> = try_orthographic(-1.0, 1.0, 2.0, 2.0, -1.0, 1.0);
    assert_eq!(zero_height, Err(MathError::DegenerateExtent { axis: "y" }));

    let zero_depth: Result<Mat4, _> = try_orthographic(-1.0, 1.0, -1.0, 1.0, 0.0, 0.0);
    assert!(matches!(
        zero_depth,
        Err(MathError::DegenerateDepthRange { .. })
    ));
}

#[test]
fn orthographic_accepts_valid_input_unchanged() {
    let checked: Mat4 = try_orthographic(0.0, 800.0, 0.0, 600.0, -1.0, 1.0).unwrap();
    assert_eq!(checked, Mat4::orthographic_2d(0.0, 800.0, 0.0, 600.0));
}

#[test]
fn projections_accept_small_extents() {
    let ortho: Result<Mat4, _> = try_orthographic(0.0, 1e-3, 0.0, 1e-3, 0.0, 1e-3);
    assert!(ortho.is_ok());

    let persp: Result<Mat4, _> = try_perspective(60.0, 1e-3, 0.01, 0.010_001);
    assert!(persp.is_ok());
}

#[test]
fn quaternion_normalization_requires_positive_magnitude() {
    let zero: Quat = Quat::ZERO;
    assert_eq!(
        try_normalized(&zero),
        Err(MathError::NonFinite {
            what: "quaternion magnitude"
        })
    );

    let nan: Quat = Quat::new(Real::NAN, 0.0, 0.0, 1.0);
    assert!(try_normalized(&nan).is_err());

    let q: Quat = Quat::new(0.0, 0.0, 3.0, 4.0);
    assert_eq!(try_normalized(&q), Ok(q.normalized()));
}

#[test]
fn ensure_finite_reports_the_label() {
    let bad: Mat4 = Mat4::scale(Vec3::new(1.0, Real::INFINITY, 1.0));
    let err = ensure_finite(bad, "model matrix").unwrap_err();
    assert_eq!(err, MathError::NonFinite { what: "model matrix" });
    assert_eq!(err.to_string(), "model matrix contains a non-finite value");

    let good: Mat4 = Mat4::identity();
    assert_eq!(ensure_finite(good, "identity"), Ok(good));
}
