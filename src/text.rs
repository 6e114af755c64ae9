use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

use glam::{Mat2, Vec2, Vec4};
use rusttype::{point, Font, Scale};
use uuid::Uuid;
use wgpu::util::DeviceExt;

use crate::context::DrawingContext;
use crate::error::{DrawError, FontLoadError};
use crate::fonts::{self, FontHandle};
use crate::perf::PerfMonitor;
use crate::shader::TextShader;
use crate::texture::{create_sampler, create_texture_bind_group, upload_rgba};
use crate::transform::TransformState;
use crate::utils::{TextUniforms, TextVertex};

/// Oversampling applied when rasterizing glyphs: atlases are built at twice
/// the requested pixel size and drawn back down, trading atlas memory for
/// glyph sharpness.
pub const RESOLUTION_FACTOR: f32 = 2.0;

/// Padding in atlas pixels around every glyph tile, so the edge kernel of
/// the sampler never bleeds between neighboring glyphs.
pub const KERNEL_WIDTH: u32 = 2;

// Side length of the solid white tile reserved at the atlas origin; the
// underline/strike rules sample it.
const WHITE_TILE: u32 = 4;

const RULE_THICKNESS_FACTOR: f32 = 1.0 / 14.0;
const UNDERLINE_DESCENT_FACTOR: f32 = 0.5;
const STRIKE_ASCENT_FACTOR: f32 = 0.3;

fn printable_ascii() -> impl Iterator<Item = char> {
    (32u8..=126).map(|c| c as char)
}

/// Rendering style of a drawn string. Styles are mutually exclusive; a
/// string carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringStyle {
    #[default]
    None,
    Underline,
    Strike,
}

/// Character information for one glyph tile of an atlas. Metrics are in
/// raster (oversampled) pixels. `uv` is absent for blank glyphs such as
/// the space, which advance the pen but draw nothing.
#[derive(Clone, Debug)]
pub struct CharacterInfo {
    pub uv: Option<([f32; 2], [f32; 2])>,
    pub advance_width: f32,
    pub bearing: (f32, f32),
    pub size: (u32, u32),
}

/// GPU glyph atlas for one font at one pixel size: the atlas texture, its
/// bind group, and per-character metrics. Covers printable ASCII plus the
/// white rule tile.
pub struct GlyphSet {
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    char_map: HashMap<char, CharacterInfo>,
    ascent: f32,
    descent: f32,
    line_gap: f32,
    atlas_size: (u32, u32),
    white_uv: ([f32; 2], [f32; 2]),
}

impl GlyphSet {
    pub fn char_info(&self, c: char) -> Option<&CharacterInfo> {
        self.char_map.get(&c)
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    pub fn atlas_size(&self) -> (u32, u32) {
        self.atlas_size
    }

    /// Baseline-to-baseline distance, in raster pixels.
    pub fn line_height(&self) -> f32 {
        self.ascent - self.descent + self.line_gap
    }

    fn dispose(&mut self) {
        self.texture.destroy();
    }
}

struct TilePlacement {
    c: char,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    bearing: (f32, f32),
}

/// Shelf-packs the glyph tiles of all printable ASCII characters, leaving
/// room for the white tile at the origin. Returns the placements and the
/// resulting atlas dimensions.
fn pack_glyph_tiles(font: &Font<'_>, scale: Scale) -> (Vec<TilePlacement>, (u32, u32)) {
    let mut tiles = Vec::new();
    // Tile areas are summed in u64: at large pixel sizes the padded per-glyph
    // areas overflow u32 long before the atlas dimensions themselves do.
    let mut total_area =
        u64::from(WHITE_TILE + 2 * KERNEL_WIDTH) * u64::from(WHITE_TILE + 2 * KERNEL_WIDTH);
    let mut max_width = WHITE_TILE;

    for c in printable_ascii() {
        let glyph = font.glyph(c).scaled(scale).positioned(point(0.0, 0.0));
        if let Some(bb) = glyph.pixel_bounding_box() {
            let width = (bb.max.x - bb.min.x) as u32;
            let height = (bb.max.y - bb.min.y) as u32;
            total_area +=
                u64::from(width + 2 * KERNEL_WIDTH) * u64::from(height + 2 * KERNEL_WIDTH);
            max_width = max_width.max(width);
            tiles.push(TilePlacement {
                c,
                x: 0,
                y: 0,
                width,
                height,
                bearing: (bb.min.x as f32, bb.min.y as f32),
            });
        }
    }

    let atlas_width = ((total_area as f64).sqrt().ceil() as u32)
        .max(max_width + 2 * KERNEL_WIDTH)
        .max(WHITE_TILE + 2 * KERNEL_WIDTH);

    // First shelf starts to the right of the white tile.
    let mut current_x = WHITE_TILE + 2 * KERNEL_WIDTH;
    let mut current_y = KERNEL_WIDTH;
    let mut row_height = WHITE_TILE;

    for tile in &mut tiles {
        if current_x + tile.width + KERNEL_WIDTH > atlas_width {
            current_x = KERNEL_WIDTH;
            current_y += row_height + KERNEL_WIDTH;
            row_height = 0;
        }
        tile.x = current_x;
        tile.y = current_y;
        current_x += tile.width + KERNEL_WIDTH;
        row_height = row_height.max(tile.height);
    }

    let atlas_height = current_y + row_height + KERNEL_WIDTH;
    (tiles, (atlas_width, atlas_height))
}

fn build_glyph_set(
    font: &Font<'static>,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    font_size: u32,
) -> GlyphSet {
    let px = font_size as f32 * RESOLUTION_FACTOR;
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);

    let (tiles, (atlas_width, atlas_height)) = pack_glyph_tiles(font, scale);
    log::debug!(
        "building {}px glyph atlas: {}x{}, {} tile(s)",
        font_size,
        atlas_width,
        atlas_height,
        tiles.len()
    );

    let mut texture_data = vec![0u8; (atlas_width * atlas_height * 4) as usize];

    // Solid white tile at the origin, sampled by underline/strike rules.
    for y in 0..WHITE_TILE {
        for x in 0..WHITE_TILE {
            let index = ((y * atlas_width + x) * 4) as usize;
            texture_data[index..index + 4].copy_from_slice(&[255, 255, 255, 255]);
        }
    }

    let mut char_map: HashMap<char, CharacterInfo> = printable_ascii()
        .map(|c| {
            let advance_width = font.glyph(c).scaled(scale).h_metrics().advance_width;
            (
                c,
                CharacterInfo {
                    uv: None,
                    advance_width,
                    bearing: (0.0, 0.0),
                    size: (0, 0),
                },
            )
        })
        .collect();

    for tile in &tiles {
        let glyph = font.glyph(tile.c).scaled(scale).positioned(point(0.0, 0.0));
        glyph.draw(|x, y, v| {
            let px = tile.x + x;
            let py = tile.y + y;
            if px < atlas_width && py < atlas_height {
                let index = ((py * atlas_width + px) * 4) as usize;
                let alpha = (v * 255.0) as u8;
                texture_data[index] = 255;
                texture_data[index + 1] = 255;
                texture_data[index + 2] = 255;
                texture_data[index + 3] = alpha;
            }
        });

        log::trace!(
            "glyph '{}' at ({}, {}) {}x{}",
            tile.c,
            tile.x,
            tile.y,
            tile.width,
            tile.height
        );

        if let Some(info) = char_map.get_mut(&tile.c) {
            info.uv = Some((
                [
                    tile.x as f32 / atlas_width as f32,
                    tile.y as f32 / atlas_height as f32,
                ],
                [
                    (tile.x + tile.width) as f32 / atlas_width as f32,
                    (tile.y + tile.height) as f32 / atlas_height as f32,
                ],
            ));
            info.bearing = tile.bearing;
            info.size = (tile.width, tile.height);
        }
    }

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Glyph Atlas"),
        size: wgpu::Extent3d {
            width: atlas_width,
            height: atlas_height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[wgpu::TextureFormat::Rgba8UnormSrgb],
    });
    upload_rgba(
        device,
        queue,
        &texture,
        &texture_data,
        atlas_width,
        atlas_height,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = create_sampler(device);
    let bind_group = create_texture_bind_group(device, &view, &sampler, layout);

    // Inset by a pixel so filtering never reads past the white block.
    let white_uv = (
        [1.0 / atlas_width as f32, 1.0 / atlas_height as f32],
        [
            (WHITE_TILE - 1) as f32 / atlas_width as f32,
            (WHITE_TILE - 1) as f32 / atlas_height as f32,
        ],
    );

    GlyphSet {
        texture,
        bind_group,
        char_map,
        ascent: v_metrics.ascent,
        descent: v_metrics.descent,
        line_gap: v_metrics.line_gap,
        atlas_size: (atlas_width, atlas_height),
        white_uv,
    }
}

/// Glyph raster state for one font file: the parsed font plus one lazily
/// built [`GlyphSet`] per requested pixel size.
pub struct FontRasterSystem {
    font: Font<'static>,
    glyph_sets: HashMap<u32, GlyphSet>,
}

impl FontRasterSystem {
    /// Parses a font from its raw file bytes.
    pub fn from_bytes(bytes: Vec<u8>, origin: &std::path::Path) -> Result<Self, FontLoadError> {
        let font = Font::try_from_vec(bytes).ok_or_else(|| FontLoadError::InvalidData {
            path: origin.to_path_buf(),
        })?;
        Ok(Self {
            font,
            glyph_sets: HashMap::new(),
        })
    }

    /// Reads the handle's font file fully into memory and parses it.
    pub fn from_handle(handle: &FontHandle) -> Result<Self, FontLoadError> {
        let bytes = std::fs::read(&handle.file_path).map_err(|source| FontLoadError::Io {
            path: handle.file_path.clone(),
            source,
        })?;
        log::debug!(
            "loaded font '{}' ({} bytes) from {}",
            handle.name,
            bytes.len(),
            handle.file_path.display()
        );
        Self::from_bytes(bytes, &handle.file_path)
    }

    /// Measures `text` at `scale`, in the same units as `scale`.
    ///
    /// Pre-rotation, pre-origin-adjustment; measuring the same inputs twice
    /// yields identical results, so callers can use it for layout.
    pub fn measure(&self, text: &str, font_size: u32, scale: Vec2) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }

        let raster_scale = Scale::uniform(font_size as f32 * RESOLUTION_FACTOR);
        let v_metrics = self.font.v_metrics(raster_scale);
        let line_height = v_metrics.ascent - v_metrics.descent + v_metrics.line_gap;

        let mut widest: f32 = 0.0;
        let mut line_width: f32 = 0.0;
        let mut lines = 1u32;
        for c in text.chars() {
            if c == '\n' {
                widest = widest.max(line_width);
                line_width = 0.0;
                lines += 1;
                continue;
            }
            line_width += self.font.glyph(c).scaled(raster_scale).h_metrics().advance_width;
        }
        widest = widest.max(line_width);

        Vec2::new(widest, lines as f32 * line_height) / RESOLUTION_FACTOR * scale
    }

    /// The glyph set for `font_size`, building and caching it on first use.
    pub fn glyph_set(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        font_size: u32,
    ) -> &GlyphSet {
        match self.glyph_sets.entry(font_size) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                entry.insert(build_glyph_set(&self.font, device, queue, layout, font_size))
            }
        }
    }

    /// Releases every atlas texture and forgets the sets.
    pub fn dispose(&mut self) {
        for set in self.glyph_sets.values_mut() {
            set.dispose();
        }
        self.glyph_sets.clear();
    }
}

/// Handle-to-raster-system cache with lazy population. A handle maps to at
/// most one raster system for the cache's lifetime; disposal is terminal.
#[derive(Default)]
pub struct FontCache {
    fonts: HashMap<FontHandle, FontRasterSystem>,
    loads: usize,
    disposed: bool,
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached raster system for `handle`, loading the font file on the
    /// first request. Missing or corrupt files fail here, not at
    /// enumeration time, and the error propagates to the caller.
    pub fn get(&mut self, handle: &FontHandle) -> Result<&mut FontRasterSystem, FontLoadError> {
        if self.disposed {
            return Err(FontLoadError::Disposed);
        }
        match self.fonts.entry(handle.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let system = FontRasterSystem::from_handle(handle)?;
                self.loads += 1;
                Ok(entry.insert(system))
            }
        }
    }

    /// How many raster systems have been constructed so far; stays flat on
    /// cache hits.
    pub fn load_count(&self) -> usize {
        self.loads
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Releases every cached raster system and empties the cache. The cache
    /// does not come back: subsequent `get` calls fail deterministically.
    pub fn dispose(&mut self) {
        for system in self.fonts.values_mut() {
            system.dispose();
        }
        self.fonts.clear();
        self.disposed = true;
    }
}

/// Effective anchor origin for a measured string.
///
/// The horizontal fraction is doubled before scaling by the measured width;
/// the editor's existing anchor placement depends on exactly this, so it
/// must not be normalized to a plain fraction.
/// TODO: confirm with the editor's layout owners whether the doubling is
/// intended or compensates for a half-extent elsewhere.
pub fn anchor_origin(origin_fraction: Vec2, measured: Vec2) -> Vec2 {
    Vec2::new(origin_fraction.x * 2.0, origin_fraction.y) * measured
}

fn push_quad(
    vertices: &mut Vec<TextVertex>,
    indices: &mut Vec<u16>,
    corners: [Vec2; 4],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
) {
    let base = vertices.len() as u16;
    let uvs = [
        [uv_min[0], uv_min[1]],
        [uv_max[0], uv_min[1]],
        [uv_max[0], uv_max[1]],
        [uv_min[0], uv_max[1]],
    ];
    for (corner, uv) in corners.iter().zip(uvs) {
        vertices.push(TextVertex {
            position: corner.to_array(),
            tex_coords: uv,
            color,
        });
    }
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Lays out one string as glyph quads in target space. Unknown characters
/// are skipped, like the rest of the atlas pipeline.
#[allow(clippy::too_many_arguments)]
fn build_text_geometry(
    set: &GlyphSet,
    text: &str,
    position: Vec2,
    scale: Vec2,
    rotation: f32,
    origin: Vec2,
    color: Vec4,
    style: StringStyle,
) -> (Vec<TextVertex>, Vec<u16>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let rot = Mat2::from_angle(rotation);
    let color = color.to_array();

    // Layout happens in font-size units; the origin is in measured (already
    // scaled) units, so it is subtracted after scaling.
    let place = |local: Vec2| position + rot * (local * scale - origin);
    let r = RESOLUTION_FACTOR;
    let line_height = set.line_height() / r;
    let rule_thickness = (set.ascent - set.descent) * RULE_THICKNESS_FACTOR / r;

    let mut quad = |min: Vec2, max: Vec2, uv_min: [f32; 2], uv_max: [f32; 2]| {
        let corners = [
            place(Vec2::new(min.x, min.y)),
            place(Vec2::new(max.x, min.y)),
            place(Vec2::new(max.x, max.y)),
            place(Vec2::new(min.x, max.y)),
        ];
        push_quad(&mut vertices, &mut indices, corners, uv_min, uv_max, color);
    };

    let mut baseline_y = set.ascent / r;
    let mut pen_x: f32 = 0.0;

    let mut finish_line = |quad: &mut dyn FnMut(Vec2, Vec2, [f32; 2], [f32; 2]), baseline_y: f32, pen_x: f32| {
        if pen_x <= 0.0 {
            return;
        }
        let rule_y = match style {
            StringStyle::None => return,
            StringStyle::Underline => baseline_y - set.descent * UNDERLINE_DESCENT_FACTOR / r,
            StringStyle::Strike => baseline_y - set.ascent * STRIKE_ASCENT_FACTOR / r,
        };
        let (white_min, white_max) = set.white_uv;
        quad(
            Vec2::new(0.0, rule_y - rule_thickness * 0.5),
            Vec2::new(pen_x, rule_y + rule_thickness * 0.5),
            white_min,
            white_max,
        );
    };

    for c in text.chars() {
        if c == '\n' {
            finish_line(&mut quad, baseline_y, pen_x);
            baseline_y += line_height;
            pen_x = 0.0;
            continue;
        }
        if let Some(info) = set.char_info(c) {
            if let Some((uv_min, uv_max)) = info.uv {
                let min = Vec2::new(pen_x + info.bearing.0 / r, baseline_y + info.bearing.1 / r);
                let max = min + Vec2::new(info.size.0 as f32, info.size.1 as f32) / r;
                quad(min, max, uv_min, uv_max);
            }
            pen_x += info.advance_width / r;
        }
    }
    finish_line(&mut quad, baseline_y, pen_x);

    (vertices, indices)
}

/// Measures and draws styled strings through cached font atlases.
pub struct StringRenderer {
    id: Uuid,
    perf: Rc<RefCell<dyn PerfMonitor>>,
    transform: TransformState,
    shader: TextShader,
    cache: FontCache,
}

impl StringRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        perf: Rc<RefCell<dyn PerfMonitor>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            perf,
            transform: TransformState::new(),
            shader: TextShader::new(device, surface_format),
            cache: FontCache::new(),
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

    pub fn font_cache(&self) -> &FontCache {
        &self.cache
    }

    pub fn font_cache_mut(&mut self) -> &mut FontCache {
        &mut self.cache
    }

    /// Measures without drawing, loading the font if needed.
    pub fn measure(
        &mut self,
        text: &str,
        font_size: u32,
        scale: Vec2,
        handle: Option<&FontHandle>,
    ) -> Result<Vec2, FontLoadError> {
        let handle = match handle {
            Some(handle) => handle,
            None => fonts::default_font().ok_or(FontLoadError::NoDefaultFont)?,
        };
        Ok(self.cache.get(handle)?.measure(text, font_size, scale))
    }

    /// Draws `text` and returns its measured size (pre-rotation, pre-flip)
    /// so callers can do layout off the same call.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        ctx: &mut DrawingContext,
        text: &str,
        position: Vec2,
        scale: Vec2,
        font_size: u32,
        rotation: f32,
        color: Vec4,
        origin_fraction: Vec2,
        style: StringStyle,
        handle: Option<&FontHandle>,
    ) -> Result<Vec2, DrawError> {
        self.perf.borrow_mut().on_begin_draw(self.id);
        let result = self.draw_inner(
            ctx,
            text,
            position,
            scale,
            font_size,
            rotation,
            color,
            origin_fraction,
            style,
            handle,
        );
        self.perf.borrow_mut().on_after_draw(self.id);
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_inner(
        &mut self,
        ctx: &mut DrawingContext,
        text: &str,
        position: Vec2,
        scale: Vec2,
        font_size: u32,
        rotation: f32,
        color: Vec4,
        origin_fraction: Vec2,
        style: StringStyle,
        handle: Option<&FontHandle>,
    ) -> Result<Vec2, DrawError> {
        let handle = match handle {
            Some(handle) => handle,
            None => fonts::default_font().ok_or(FontLoadError::NoDefaultFont)?,
        };

        let combined =
            self.transform.resolved_view_projection(ctx) * self.transform.model_override();

        let raster = self.cache.get(handle)?;
        let measured = raster.measure(text, font_size, scale);
        let origin = anchor_origin(origin_fraction, measured);

        // Text runs baseline-down while the sprite convention is y-up, so
        // the vertical scale sign flips before the draw is issued.
        let mut draw_scale = scale;
        draw_scale.y = -draw_scale.y;

        let set = raster.glyph_set(
            ctx.device,
            ctx.queue,
            self.shader.atlas_bind_group_layout(),
            font_size,
        );
        let (vertices, indices) = build_text_geometry(
            set, text, position, draw_scale, rotation, origin, color, style,
        );

        self.shader.begin(ctx);
        {
            self.shader.pass_transform(ctx, &TextUniforms::new(combined));

            if !indices.is_empty() {
                let vertex_buffer =
                    ctx.device
                        .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                            label: Some("Text Vertex Buffer"),
                            contents: bytemuck::cast_slice(&vertices),
                            usage: wgpu::BufferUsages::VERTEX,
                        });
                let index_buffer =
                    ctx.device
                        .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                            label: Some("Text Index Buffer"),
                            contents: bytemuck::cast_slice(&indices),
                            usage: wgpu::BufferUsages::INDEX,
                        });

                ctx.rpass.set_bind_group(0, set.bind_group(), &[]);
                ctx.rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
                ctx.rpass
                    .set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                ctx.rpass.draw_indexed(0..indices.len() as u32, 0, 0..1);
            }
        }
        self.shader.end(ctx);

        Ok(measured)
    }

    /// Releases every cached raster system and marks the renderer terminal;
    /// it is not usable again after this.
    pub fn dispose(&mut self) {
        self.cache.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn any_system_font() -> Option<Font<'static>> {
        let candidates = [
            "/usr/share/fonts/truetype/dejavu",
            "/usr/share/fonts/truetype/liberation",
            "/usr/share/fonts/TTF",
            "/usr/share/fonts",
            "/Library/Fonts",
            "/System/Library/Fonts",
            r"C:\Windows\Fonts",
        ];
        for dir in candidates {
            if let Some(handle) = crate::fonts::enumerate_fonts_in(Path::new(dir))
                .into_iter()
                .next()
            {
                let bytes = std::fs::read(&handle.file_path).ok()?;
                return Font::try_from_vec(bytes);
            }
        }
        None
    }

    #[test]
    fn packing_survives_very_large_pixel_sizes() {
        let Some(font) = any_system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };

        // Padded tile areas at this size exceed u32 when summed; packing must
        // still produce a consistent atlas instead of overflowing.
        let scale = Scale::uniform(8000.0 * RESOLUTION_FACTOR);
        let (tiles, (atlas_width, atlas_height)) = pack_glyph_tiles(&font, scale);

        assert!(!tiles.is_empty());
        for tile in &tiles {
            assert!(tile.x + tile.width + KERNEL_WIDTH <= atlas_width);
            assert!(tile.y + tile.height + KERNEL_WIDTH <= atlas_height);
        }
    }

    #[test]
    fn packing_keeps_tiles_inside_the_atlas_at_normal_sizes() {
        let Some(font) = any_system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };

        let scale = Scale::uniform(24.0 * RESOLUTION_FACTOR);
        let (tiles, (atlas_width, atlas_height)) = pack_glyph_tiles(&font, scale);

        assert!(!tiles.is_empty());
        for tile in &tiles {
            assert!(tile.x + tile.width + KERNEL_WIDTH <= atlas_width);
            assert!(tile.y + tile.height + KERNEL_WIDTH <= atlas_height);
        }
    }
}
