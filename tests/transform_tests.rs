use quill2d::glam::{Mat4, Vec3};
use quill2d::TransformState;

#[test]
fn model_override_defaults_to_identity() {
    let transform = TransformState::new();
    assert_eq!(transform.model_override(), Mat4::IDENTITY);
}

#[test]
fn model_override_round_trips() {
    let mut transform = TransformState::new();
    let shove = Mat4::from_translation(Vec3::new(40.0, -8.0, 0.0));

    transform.set_model_override(shove);
    assert_eq!(transform.model_override(), shove);

    transform.clear_model_override();
    assert_eq!(transform.model_override(), Mat4::IDENTITY);
}

#[test]
fn view_projection_falls_back_to_context_default() {
    let transform = TransformState::new();
    let camera = Mat4::orthographic_rh(0.0, 1920.0, 1080.0, 0.0, -1.0, 1.0);
    assert_eq!(transform.view_projection_or(camera), camera);
}

#[test]
fn view_projection_override_wins_over_context_default() {
    let mut transform = TransformState::new();
    let camera = Mat4::orthographic_rh(0.0, 1920.0, 1080.0, 0.0, -1.0, 1.0);
    let minimap = Mat4::from_scale(Vec3::new(0.25, 0.25, 1.0)) * camera;

    transform.set_view_projection_override(minimap);
    assert_eq!(transform.view_projection_or(camera), minimap);

    transform.clear_view_projection_override();
    assert_eq!(transform.view_projection_or(camera), camera);
}
