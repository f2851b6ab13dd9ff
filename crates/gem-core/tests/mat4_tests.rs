// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use gem_core::math::{deg_to_rad, Mat4, Quat, Real, Vec3, Vec4};

const EPS: Real = 1e-5;

fn approx_eq16(a: [Real; 16], b: [Real; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn approx_eq3(a: Vec3, b: [Real; 3]) {
    let a = a.to_array();
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn sample_matrices() -> Vec<Mat4> {
    vec![
        Mat4::translation(Vec3::new(1.0, -2.0, 3.5)),
        Mat4::scale(Vec3::new(2.0, 3.0, 4.0)),
        Mat4::rotation(Vec3::new(1.0, 1.0, 0.0), 37.0),
        Mat4::rotation_z(0.3) * Mat4::translation(Vec3::new(4.0, 0.0, -1.0)),
        Mat4::perspective(90.0, 1.0, 1.0, 3.0),
    ]
}

#[test]
fn identity_is_a_two_sided_unit() {
    let id: Mat4 = Mat4::identity();
    for m in sample_matrices() {
        approx_eq16(m.multiply(&id).to_array(), m.to_array());
        approx_eq16(id.multiply(&m).to_array(), m.to_array());
    }
}

#[test]
fn identity_layout_is_column_major_diagonal() {
    let id: Mat4 = Mat4::identity();
    for row in 0..4 {
        for col in 0..4 {
            let expected = if row == col { 1.0 } else { 0.0 };
            assert_eq!(id.at(row, col), expected);
        }
    }
    assert_eq!(Mat4::<Real>::default(), id);
    assert_eq!(Mat4::from_diagonal(1.0), id);
}

#[test]
fn translation_lives_in_last_column() {
    let m: Mat4 = Mat4::translation(Vec3::new(5.0, -3.0, 2.0));
    let arr = m.to_array();
    assert_eq!(&arr[12..16], &[5.0, -3.0, 2.0, 1.0]);
    assert_eq!(m.col(3), Vec4::new(5.0, -3.0, 2.0, 1.0));
    assert_eq!(m.at(0, 3), 5.0);
}

#[test]
fn columns_are_views_of_flat_storage() {
    let data: [Real; 16] = core::array::from_fn(|i| i as Real);
    let m = Mat4::new(data);
    for (c, col) in m.cols().iter().enumerate() {
        assert_eq!(col.to_array(), [data[c * 4], data[c * 4 + 1], data[c * 4 + 2], data[c * 4 + 3]]);
    }
    assert_eq!(Mat4::from_cols(m.cols()), m);
    assert_eq!(m.row(1).to_array(), [1.0, 5.0, 9.0, 13.0]);
    assert_eq!(m.transpose().transpose(), m);
    assert_eq!(m.transpose().col(1), m.row(1));
}

#[test]
fn product_applies_right_operand_first() {
    let t: Mat4 = Mat4::translation(Vec3::new(10.0, 0.0, 0.0));
    let s: Mat4 = Mat4::scale(Vec3::new(2.0, 2.0, 2.0));
    let p = Vec3::new(1.0, 1.0, 1.0);
    // scale then translate
    approx_eq3((t * s).transform_point(&p), [12.0, 2.0, 2.0]);
    // translate then scale
    approx_eq3((s * t).transform_point(&p), [22.0, 2.0, 2.0]);
}

#[test]
fn mat4_mul_operator_matches_method() {
    let s: Mat4 = Mat4::scale(Vec3::new(2.0, 3.0, 4.0));
    let r: Mat4 = Mat4::rotation_x(0.7);
    approx_eq16((r * s).to_array(), r.multiply(&s).to_array());
    approx_eq16((s * &r).to_array(), s.multiply(&r).to_array());
}

#[test]
fn mat4_mul_assign_variants_work() {
    let lhs: Mat4 = Mat4::rotation_x(deg_to_rad(45.0));
    let rhs = Mat4::scale(Vec3::new(2.0, 3.0, 4.0));
    let expected = (lhs * rhs).to_array();
    let mut a = lhs;
    a *= rhs;
    approx_eq16(a.to_array(), expected);
    assert_ne!(a.to_array(), lhs.to_array());

    let lhs_y: Mat4 = Mat4::rotation_y(deg_to_rad(60.0));
    let rhs_t = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
    let expected_b = (lhs_y * rhs_t).to_array();
    let mut b = lhs_y;
    b *= &rhs_t;
    approx_eq16(b.to_array(), expected_b);
}

#[test]
fn determinant_of_known_matrices() {
    let id: Mat4 = Mat4::identity();
    assert_eq!(id.determinant(), 1.0);
    let s: Mat4 = Mat4::scale(Vec3::new(2.0, 3.0, 4.0));
    assert!((s.determinant() - 24.0).abs() <= EPS);
    let t: Mat4 = Mat4::translation(Vec3::new(7.0, -1.0, 2.0));
    assert!((t.determinant() - 1.0).abs() <= EPS);
    let r: Mat4 = Mat4::rotation(Vec3::new(0.3, -0.2, 0.9), 123.0);
    assert!((r.determinant() - 1.0).abs() <= EPS);

    // Swapping two rows flips the sign.
    let swap: Mat4 = Mat4::new([
        0.0, 1.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);
    assert_eq!(swap.determinant(), -1.0);
}

#[test]
fn determinant_is_multiplicative() {
    let a: Mat4 = Mat4::scale(Vec3::new(2.0, 1.0, 0.5)) * Mat4::rotation_y(0.4);
    let b: Mat4 = Mat4::new([
        1.0, 2.0, 0.0, 1.0, //
        0.0, 1.0, 3.0, 0.0, //
        2.0, 0.0, 1.0, 1.0, //
        0.0, 1.0, 0.0, 2.0,
    ]);
    let lhs = (a * b).determinant();
    let rhs = a.determinant() * b.determinant();
    assert!((lhs - rhs).abs() <= 1e-4, "{lhs} vs {rhs}");
}

#[test]
fn inverse_round_trips_to_identity() {
    let id: Mat4 = Mat4::identity();
    for m in sample_matrices() {
        let inv = m.inverse();
        approx_eq16((inv * m).to_array(), id.to_array());
        approx_eq16((m * inv).to_array(), id.to_array());
    }
}

#[test]
fn inverse_of_translation_negates_offset() {
    let m: Mat4 = Mat4::translation(Vec3::new(1.0, -2.0, 3.0));
    let inv = m.inverse();
    approx_eq16(
        inv.to_array(),
        Mat4::translation(Vec3::new(-1.0, 2.0, -3.0)).to_array(),
    );
}

#[test]
fn invert_mutates_in_place_and_inverse_does_not() {
    let original: Mat4 = Mat4::scale(Vec3::new(2.0, 4.0, 8.0));
    let copy = original.inverse();
    assert_eq!(original, Mat4::scale(Vec3::new(2.0, 4.0, 8.0)));
    let mut m = original;
    m.invert();
    assert_eq!(m, copy);
    approx_eq16(m.to_array(), Mat4::scale(Vec3::new(0.5, 0.25, 0.125)).to_array());
}

#[test]
fn singular_inverse_is_not_finite() {
    let flat: Mat4 = Mat4::scale(Vec3::new(1.0, 0.0, 1.0));
    assert_eq!(flat.determinant(), 0.0);
    let inv = flat.inverse();
    assert!(!inv.is_finite());
}

#[test]
fn rotation_matches_quaternion_conversion() {
    let axes = [
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.3, -0.5, 0.8),
    ];
    for axis in axes {
        for degrees in [15.0, 90.0, 200.0] {
            let m: Mat4 = Mat4::rotation(axis, degrees);
            let q: Quat = Quat::from_axis_angle(axis, deg_to_rad(degrees));
            approx_eq16(m.to_array(), q.to_mat4().to_array());
        }
    }
}

#[test]
fn rotation_axis_is_normalized() {
    let unit: Mat4 = Mat4::rotation(Vec3::UNIT_Z, 30.0);
    let long: Mat4 = Mat4::rotation(Vec3::new(0.0, 0.0, 5.0), 30.0);
    approx_eq16(unit.to_array(), long.to_array());
}

#[test]
fn elementary_rotations_are_right_handed() {
    let x: Mat4 = Mat4::rotation_x(deg_to_rad(90.0));
    approx_eq3(x.transform_direction(&Vec3::UNIT_Y), [0.0, 0.0, 1.0]);
    let y: Mat4 = Mat4::rotation_y(deg_to_rad(90.0));
    approx_eq3(y.transform_direction(&Vec3::UNIT_Z), [1.0, 0.0, 0.0]);
    let z: Mat4 = Mat4::rotation_z(deg_to_rad(90.0));
    approx_eq3(z.transform_direction(&Vec3::UNIT_X), [0.0, 1.0, 0.0]);

    // The axis-angle factory agrees with the elementary ones.
    approx_eq16(
        Mat4::rotation(Vec3::UNIT_X, 90.0).to_array(),
        x.to_array(),
    );
}

#[test]
fn transform_direction_ignores_translation() {
    let m: Mat4 = Mat4::translation(Vec3::new(9.0, 9.0, 9.0)) * Mat4::scale(Vec3::new(2.0, 2.0, 2.0));
    approx_eq3(m.transform_direction(&Vec3::new(1.0, 0.0, 0.0)), [2.0, 0.0, 0.0]);
    approx_eq3(m.transform_point(&Vec3::new(1.0, 0.0, 0.0)), [11.0, 9.0, 9.0]);
}

#[test]
fn matrix_times_vec4_uses_w() {
    let m: Mat4 = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
    assert_eq!(m * Vec4::new(1.0, 1.0, 1.0, 0.0), Vec4::new(1.0, 1.0, 1.0, 0.0));
}

#[test]
fn orthographic_symmetric_bounds_have_unit_diagonal() {
    let m: Mat4 = Mat4::orthographic_2d(-1.0, 1.0, -1.0, 1.0);
    assert_eq!(
        [m.at(0, 0), m.at(1, 1), m.at(2, 2), m.at(3, 3)],
        [1.0, 1.0, -1.0, 1.0]
    );
    // -0.0 == 0.0, so this also accepts negative zeros.
    assert_eq!([m.at(0, 3), m.at(1, 3), m.at(2, 3)], [0.0, 0.0, 0.0]);
    assert_eq!(m, Mat4::orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0));
}

#[test]
fn orthographic_maps_box_corners_to_clip_cube() {
    let m: Mat4 = Mat4::orthographic(-1.6, 1.6, -0.9, 0.9, 0.1, 100.0);
    approx_eq3(m.transform_point(&Vec3::new(-1.6, -0.9, -0.1)), [-1.0, -1.0, -1.0]);
    approx_eq3(m.transform_point(&Vec3::new(1.6, 0.9, -100.0)), [1.0, 1.0, 1.0]);
}

#[test]
fn perspective_matches_gl_style_projection() {
    let m: Mat4 = Mat4::perspective(90.0, 2.0, 1.0, 3.0);
    // f = 1 / tan(45°) = 1
    assert!((m.at(0, 0) - 0.5).abs() <= EPS);
    assert!((m.at(1, 1) - 1.0).abs() <= EPS);
    assert!((m.at(2, 2) + 2.0).abs() <= EPS);
    assert!((m.at(2, 3) + 3.0).abs() <= EPS);
    assert_eq!(m.at(3, 2), -1.0);
    assert_eq!(m.at(3, 3), 0.0);

    // Near plane maps to -1, far plane to +1 after the perspective divide.
    let near = m * Vec4::new(0.0, 0.0, -1.0, 1.0);
    let far = m * Vec4::new(0.0, 0.0, -3.0, 1.0);
    assert!((near.z() / near.w() + 1.0).abs() <= EPS);
    assert!((far.z() / far.w() - 1.0).abs() <= EPS);
}

#[test]
fn perspective_with_zero_fov_is_not_finite() {
    let m: Mat4 = Mat4::perspective(0.0, 1.0, 0.1, 10.0);
    assert!(!m.is_finite());
}

#[test]
fn display_prints_four_column_lines() {
    let m: Mat4 = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(
        m.to_string(),
        "(1, 0, 0, 0)\n(0, 1, 0, 0)\n(0, 0, 1, 0)\n(1, 2, 3, 1)"
    );
}
