use std::cell::RefCell;
use std::rc::Rc;

use glam::{Mat4, Vec2, Vec3};
use uuid::Uuid;
use wgpu::util::DeviceExt;

use crate::context::DrawingContext;
use crate::error::{DrawError, GpuResourceError};
use crate::perf::PerfMonitor;
use crate::shader::QuadShader;
use crate::transform::TransformState;
use crate::utils::{QuadCorner, QuadUniforms};

/// A GPU texture the renderer can bind. The renderer only ever reads the
/// dimensions and binds the group; pixel contents belong to whoever created
/// the texture.
#[derive(Debug)]
pub struct Texture {
    id: Uuid,
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl Texture {
    /// Uploads tightly-packed RGBA pixels into a new bindable texture.
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        rgba: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Self, GpuResourceError> {
        if width == 0 || height == 0 {
            return Err(GpuResourceError::ZeroSizedTexture { width, height });
        }
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            return Err(GpuResourceError::TexturePayloadSize {
                expected,
                actual: rgba.len(),
                width,
                height,
            });
        }

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[wgpu::TextureFormat::Rgba8UnormSrgb],
        });
        upload_rgba(device, queue, &texture, rgba, width, height);

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_sampler(device);
        let bind_group = create_texture_bind_group(device, &view, &sampler, layout);

        let id = Uuid::new_v4();
        log::debug!("created texture {id} ({width}x{height})");

        Ok(Self {
            id,
            texture,
            bind_group,
            width,
            height,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel dimensions as a vector, the native size of the drawn quad.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Releases the GPU texture. Deterministic teardown; dropping alone
    /// would leave the release to wgpu's internal bookkeeping.
    pub fn dispose(&mut self) {
        self.texture.destroy();
    }
}

/// One placement of a texture: a single quad at `position`, scaled to
/// `size` on-screen pixels and rotated about the drawing-plane normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawInstance {
    pub size: Vec2,
    pub position: Vec2,
    pub rotation: f32,
}

// Shared unit-quad geometry: tex-coord corners, position corners centered
// at the origin, and the triangle-fan triangulation over those corners.
const TEX_CORNERS: [QuadCorner; 4] = [
    QuadCorner { coords: [0.0, 0.0] },
    QuadCorner { coords: [1.0, 0.0] },
    QuadCorner { coords: [1.0, 1.0] },
    QuadCorner { coords: [0.0, 1.0] },
];

const POS_CORNERS: [QuadCorner; 4] = [
    QuadCorner {
        coords: [-0.5, 0.5],
    },
    QuadCorner { coords: [0.5, 0.5] },
    QuadCorner {
        coords: [0.5, -0.5],
    },
    QuadCorner {
        coords: [-0.5, -0.5],
    },
];

// wgpu has no fan topology; this index list is the fan's exact
// triangulation over the corner order above, same winding, same output.
const FAN_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Model matrix for one quad instance.
///
/// Right-to-left: scale the unit quad to the texture's native pixel size,
/// scale that to the requested on-screen size, rotate, translate. The two
/// scale steps collapse mathematically, but the intermediate native-pixel
/// quad is the convention the rest of the editor composes overrides
/// against, so both are kept.
pub fn quad_model_matrix(texture_size: Vec2, size: Vec2, position: Vec2, rotation: f32) -> Mat4 {
    Mat4::from_translation(position.extend(0.0))
        * Mat4::from_rotation_z(rotation)
        * Mat4::from_scale(Vec3::new(
            size.x / texture_size.x,
            size.y / texture_size.y,
            1.0,
        ))
        * Mat4::from_scale(Vec3::new(texture_size.x, texture_size.y, 1.0))
}

/// Expands instances into their model matrices, one per instance, in input
/// order. [`TextureRenderer::draw`] issues exactly one draw call per
/// matrix this yields.
pub fn instance_model_matrices(texture_size: Vec2, instances: &[DrawInstance]) -> Vec<Mat4> {
    instances
        .iter()
        .map(|instance| {
            quad_model_matrix(texture_size, instance.size, instance.position, instance.rotation)
        })
        .collect()
}

/// Draws textured quads, one draw call per instance, through a fixed unit
/// quad and the shared quad shader. Geometry buffers are created once at
/// construction and never resized.
pub struct TextureRenderer {
    id: Uuid,
    perf: Rc<RefCell<dyn PerfMonitor>>,
    transform: TransformState,
    shader: QuadShader,
    tex_coord_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    disposed: bool,
}

impl TextureRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        perf: Rc<RefCell<dyn PerfMonitor>>,
    ) -> Self {
        let shader = QuadShader::new(device, surface_format);

        let tex_coord_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad TexCoord Buffer"),
            contents: bytemuck::cast_slice(&TEX_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&POS_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Index Buffer"),
            contents: bytemuck::cast_slice(&FAN_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            id: Uuid::new_v4(),
            perf,
            transform: TransformState::new(),
            shader,
            tex_coord_buffer,
            vertex_buffer,
            index_buffer,
            disposed: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut TransformState {
        &mut self.transform
    }

    /// Layout to create [`Texture`]s against.
    pub fn texture_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        self.shader.texture_bind_group_layout()
    }

    /// Draws each instance independently, in sequence order. No batching
    /// across instances; every instance is its own draw call.
    pub fn draw(
        &mut self,
        ctx: &mut DrawingContext,
        texture: &Texture,
        instances: &[DrawInstance],
    ) -> Result<(), DrawError> {
        for model in instance_model_matrices(texture.size(), instances) {
            self.draw_model(ctx, texture, model)?;
        }
        Ok(())
    }

    pub fn draw_one(
        &mut self,
        ctx: &mut DrawingContext,
        texture: &Texture,
        size: Vec2,
        position: Vec2,
        rotation: f32,
    ) -> Result<(), DrawError> {
        self.draw_model(
            ctx,
            texture,
            quad_model_matrix(texture.size(), size, position, rotation),
        )
    }

    fn draw_model(
        &mut self,
        ctx: &mut DrawingContext,
        texture: &Texture,
        instance_model: Mat4,
    ) -> Result<(), DrawError> {
        if self.disposed {
            return Err(GpuResourceError::RendererDisposed.into());
        }

        self.perf.borrow_mut().on_begin_draw(self.id);
        {
            let model = self.transform.model_override() * instance_model;
            let uniforms =
                QuadUniforms::new(model, self.transform.resolved_view_projection(ctx));

            self.shader.begin(ctx);
            {
                self.shader.pass_uniforms(ctx, &uniforms);
                self.shader.pass_texture(ctx, texture);

                ctx.rpass.set_vertex_buffer(0, self.tex_coord_buffer.slice(..));
                ctx.rpass.set_vertex_buffer(1, self.vertex_buffer.slice(..));
                ctx.rpass
                    .set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                ctx.rpass.draw_indexed(0..FAN_INDICES.len() as u32, 0, 0..1);

                self.perf.borrow_mut().count_draw_call(self.id);
            }
            self.shader.end(ctx);
        }
        self.perf.borrow_mut().on_after_draw(self.id);
        Ok(())
    }

    /// Destroys the geometry buffers. Terminal; draws fail afterwards.
    pub fn dispose(&mut self) {
        self.tex_coord_buffer.destroy();
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
        self.disposed = true;
    }
}

pub(crate) fn create_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

pub(crate) fn create_texture_bind_group(
    device: &wgpu::Device,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    layout: &wgpu::BindGroupLayout,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
        label: Some("texture_bind_group"),
    })
}

/// Copies tightly-packed RGBA rows into `texture`, padding each row to the
/// 256-byte alignment buffer-to-texture copies require.
pub(crate) fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    texture: &wgpu::Texture,
    rgba: &[u8],
    width: u32,
    height: u32,
) {
    let bytes_per_pixel = 4;
    let unpadded_bytes_per_row = width as usize * bytes_per_pixel;
    const COPY_BYTES_PER_ROW_ALIGNMENT: usize = 256;
    let padded_bytes_per_row = (unpadded_bytes_per_row + COPY_BYTES_PER_ROW_ALIGNMENT - 1)
        / COPY_BYTES_PER_ROW_ALIGNMENT
        * COPY_BYTES_PER_ROW_ALIGNMENT;

    let total_size = padded_bytes_per_row * height as usize;
    let mut padded_buffer = vec![0u8; total_size];

    for y in 0..height as usize {
        let dst_start = y * padded_bytes_per_row;
        let src_start = y * unpadded_bytes_per_row;
        padded_buffer[dst_start..dst_start + unpadded_bytes_per_row]
            .copy_from_slice(&rgba[src_start..src_start + unpadded_bytes_per_row]);
    }

    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Pixel Buffer"),
        contents: &padded_buffer,
        usage: wgpu::BufferUsages::COPY_SRC,
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Texture Copy Encoder"),
    });
    encoder.copy_buffer_to_texture(
        wgpu::ImageCopyBuffer {
            buffer: &buffer,
            layout: wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(padded_bytes_per_row as u32),
                rows_per_image: Some(height),
            },
        },
        wgpu::ImageCopyTexture {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );

    queue.submit(std::iter::once(encoder.finish()));
}
