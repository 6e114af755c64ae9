use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a font handle into a usable raster system.
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("failed to read font file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font file {path} is not a parsable TrueType font")]
    InvalidData { path: PathBuf },

    /// No handle was passed and enumeration found nothing usable.
    #[error("no default font available")]
    NoDefaultFont,

    /// The cache was disposed; it does not come back.
    #[error("font cache has been disposed")]
    Disposed,
}

/// Failure while creating or using a GPU resource.
#[derive(Debug, Error)]
pub enum GpuResourceError {
    #[error("texture payload is {actual} bytes, expected {expected} for {width}x{height} rgba")]
    TexturePayloadSize {
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
    },

    #[error("texture dimensions {width}x{height} must be non-zero")]
    ZeroSizedTexture { width: u32, height: u32 },

    #[error("renderer has been disposed")]
    RendererDisposed,
}

/// Any failure a draw call can surface to the editor.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error(transparent)]
    Font(#[from] FontLoadError),

    #[error(transparent)]
    Gpu(#[from] GpuResourceError),
}
