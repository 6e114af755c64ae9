//! Drawing primitives for a GPU-backed chart editor: a string renderer over
//! lazily-cached font atlases and a textured-quad renderer with
//! per-instance transform composition. The editor supplies the render pass,
//! camera matrix, and performance monitor; this crate issues the draws.
//!
//! Everything is single-threaded and synchronous: draw calls run to
//! completion on the thread owning the graphics context.

pub use glam;

pub mod context;
pub mod error;
pub mod fonts;
pub mod perf;
pub mod shader;
pub mod text;
pub mod texture;
pub mod transform;
pub mod utils;

pub use context::DrawingContext;
pub use error::{DrawError, FontLoadError, GpuResourceError};
pub use fonts::{default_font, enumerate_fonts, FontHandle};
pub use perf::{DrawStats, PerfMonitor};
pub use text::{FontCache, FontRasterSystem, StringRenderer, StringStyle};
pub use texture::{DrawInstance, Texture, TextureRenderer};
pub use transform::TransformState;
