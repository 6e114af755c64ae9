use glam::Mat4;

/// One corner of the shared unit quad. Tex coords and positions live in
/// separate vertex buffers (attribute streams 0 and 1), so each stream is a
/// bare pair of floats.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct QuadCorner {
    pub coords: [f32; 2],
}

/// One glyph-quad vertex of a batched text draw.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct TextVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
    pub color: [f32; 4],
}

/// Uniform block of the quad shader: model and view-projection passed
/// separately, composed in the shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadUniforms {
    pub model: [[f32; 4]; 4],
    pub view_projection: [[f32; 4]; 4],
}

impl QuadUniforms {
    pub fn new(model: Mat4, view_projection: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view_projection: view_projection.to_cols_array_2d(),
        }
    }
}

/// Uniform block of the text shader. Glyph vertices are laid out CPU-side,
/// so a single combined matrix is enough.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TextUniforms {
    pub transform: [[f32; 4]; 4],
}

impl TextUniforms {
    pub fn new(transform: Mat4) -> Self {
        Self {
            transform: transform.to_cols_array_2d(),
        }
    }
}
