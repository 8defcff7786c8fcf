//! Error types for convex-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rasterizing or writing pixel buffers.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a pixel buffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// The index cycle does not describe a fillable convex polygon.
    #[error("Invalid polygon: {reason}")]
    InvalidPolygon {
        /// What was wrong with the input.
        reason: &'static str,
    },

    /// An index in the cycle points past the end of the vertex slice.
    #[error("Vertex index {index} out of range for {len} vertices")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of vertices supplied.
        len: usize,
    },

    /// Polygon is taller than the scanline cache can hold.
    #[error("Polygon height {height} exceeds scanline capacity {capacity}")]
    CapacityExceeded {
        /// Height of the polygon in scanlines (max_y - min_y).
        height: usize,
        /// Maximum height the cache supports.
        capacity: usize,
    },

    /// A linear offset is negative or outside the 32-bit offset space.
    #[error("Offset {offset} outside the addressable range")]
    OffsetOutOfRange {
        /// The computed offset, `x + y * pitch`.
        offset: i64,
    },

    /// The pixel sink rejected a write.
    #[error("Pixel offset {offset} out of bounds for buffer of {len} pixels")]
    PixelOutOfBounds {
        /// Linear offset that was written.
        offset: usize,
        /// Number of pixels in the buffer.
        len: usize,
    },

    /// Row increment for rectangle helpers must be at least one.
    #[error("Row increment must be at least 1")]
    InvalidIncrement,

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),
}

impl Error {
    pub(crate) const fn invalid_polygon(reason: &'static str) -> Self {
        Self::InvalidPolygon { reason }
    }
}
