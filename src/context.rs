use glam::Mat4;

/// Everything a renderer needs from the editor for one frame: the active
/// render pass to record into, the device/queue that own it, and the
/// context's default view-projection matrix.
///
/// The pass, and with it all GPU binding state, belongs to a single thread;
/// callers serialize draw calls onto the thread owning the graphics context.
pub struct DrawingContext<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub rpass: &'a mut wgpu::RenderPass<'a>,
    /// Camera transform supplied by the editor, used whenever no
    /// view-projection override is active on the renderer.
    pub view_projection: Mat4,
}
