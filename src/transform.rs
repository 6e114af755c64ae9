use glam::Mat4;

use crate::context::DrawingContext;

/// Editor-controllable coordinate overrides shared by both renderers.
///
/// The model override, when active, premultiplies every draw's model matrix;
/// the view-projection override replaces the context-supplied camera matrix
/// wholesale. Both default to "inactive".
#[derive(Debug, Default, Clone, Copy)]
pub struct TransformState {
    model_override: Option<Mat4>,
    view_projection_override: Option<Mat4>,
}

impl TransformState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active model override, identity when none is set.
    pub fn model_override(&self) -> Mat4 {
        self.model_override.unwrap_or(Mat4::IDENTITY)
    }

    pub fn set_model_override(&mut self, matrix: Mat4) {
        self.model_override = Some(matrix);
    }

    pub fn clear_model_override(&mut self) {
        self.model_override = None;
    }

    /// The explicit view-projection override if set, otherwise `default`.
    pub fn view_projection_or(&self, default: Mat4) -> Mat4 {
        self.view_projection_override.unwrap_or(default)
    }

    /// Resolves the view-projection for a draw against `ctx`'s camera.
    pub fn resolved_view_projection(&self, ctx: &DrawingContext) -> Mat4 {
        self.view_projection_or(ctx.view_projection)
    }

    pub fn set_view_projection_override(&mut self, matrix: Mat4) {
        self.view_projection_override = Some(matrix);
    }

    pub fn clear_view_projection_override(&mut self) {
        self.view_projection_override = None;
    }
}
