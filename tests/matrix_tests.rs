use quill2d::glam::{Mat4, Vec2, Vec3, Vec4};
use quill2d::text::anchor_origin;
use quill2d::texture::quad_model_matrix;

fn assert_mat4_eq(actual: Mat4, expected: Mat4) {
    let a = actual.to_cols_array();
    let e = expected.to_cols_array();
    for (i, (x, y)) in a.iter().zip(e.iter()).enumerate() {
        assert!(
            (x - y).abs() < 1e-5,
            "matrix element {i} differs: {x} vs {y}\nactual: {actual}\nexpected: {expected}"
        );
    }
}

#[test]
fn quad_model_matrix_composes_in_documented_order() {
    let texture_size = Vec2::new(100.0, 50.0);
    let size = Vec2::new(200.0, 100.0);
    let position = Vec2::new(10.0, 20.0);

    let actual = quad_model_matrix(texture_size, size, position, 0.0);
    let expected = Mat4::from_translation(Vec3::new(10.0, 20.0, 0.0))
        * Mat4::from_scale(Vec3::new(2.0, 2.0, 1.0))
        * Mat4::from_scale(Vec3::new(100.0, 50.0, 1.0));

    assert_mat4_eq(actual, expected);
}

#[test]
fn quad_model_matrix_maps_unit_corner_to_screen() {
    let texture_size = Vec2::new(100.0, 50.0);
    let size = Vec2::new(200.0, 100.0);
    let position = Vec2::new(10.0, 20.0);

    let model = quad_model_matrix(texture_size, size, position, 0.0);
    // Unit-quad corner (0.5, 0.5) lands half the on-screen size from center.
    let corner = model * Vec4::new(0.5, 0.5, 0.0, 1.0);
    assert!((corner.x - 110.0).abs() < 1e-4);
    assert!((corner.y - 70.0).abs() < 1e-4);
}

#[test]
fn rotation_happens_after_scaling() {
    let texture_size = Vec2::new(10.0, 10.0);
    let size = Vec2::new(10.0, 10.0);
    let quarter_turn = std::f32::consts::FRAC_PI_2;

    let model = quad_model_matrix(texture_size, size, Vec2::ZERO, quarter_turn);
    let corner = model * Vec4::new(0.5, 0.0, 0.0, 1.0);
    // (5, 0) rotates onto (0, 5).
    assert!(corner.x.abs() < 1e-4);
    assert!((corner.y - 5.0).abs() < 1e-4);
}

#[test]
fn anchor_origin_doubles_the_horizontal_fraction() {
    let measured = Vec2::new(80.0, 24.0);

    // Half-fraction anchoring lands at the full measured width.
    let origin = anchor_origin(Vec2::new(0.5, 0.0), measured);
    assert_eq!(origin.x, measured.x);
    assert_eq!(origin.y, 0.0);
}

#[test]
fn anchor_origin_vertical_fraction_is_not_doubled() {
    let measured = Vec2::new(80.0, 24.0);
    let origin = anchor_origin(Vec2::new(0.0, 1.0), measured);
    assert_eq!(origin.x, 0.0);
    assert_eq!(origin.y, measured.y);
}
