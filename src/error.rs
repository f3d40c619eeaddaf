use thiserror::Error;

/// Errors raised by the drawing widget.
///
/// Most widget operations cannot fail: undo/redo on an empty stack is a
/// no-op, not an error. What remains is encoding, decoding, configuration
/// and delivering the exported file.
#[derive(Debug, Error)]
pub enum DoodleError {
    /// Encoding the surface as PNG failed
    #[error("failed to encode surface: {0}")]
    Encode(#[source] image::ImageError),

    /// A stored snapshot could not be decoded
    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] image::ImageError),

    /// A decoded snapshot does not match the surface it should restore into
    #[error("snapshot is {found:?} but the surface is {expected:?}")]
    SnapshotSize {
        expected: [u32; 2],
        found: [u32; 2],
    },

    /// A color string is not `#RRGGBB` / `RRGGBB`
    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("canvas size must be non-zero, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    /// The browser refused to create or trigger the download
    #[error("download failed: {0}")]
    Download(String),
}

pub type DoodleResult<T> = Result<T, DoodleError>;
