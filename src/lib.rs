//! # convex-raster
//!
//! Scanline rasterizer for convex polygons with integer vertices.
//!
//! Given a vertex array and an index cycle describing a convex polygon, the
//! rasterizer computes the span of pixels covered on every scanline and
//! writes each covered pixel to a [`PixelSink`](sink::PixelSink). Edges are
//! interpolated in 32.32 fixed point directly on linear buffer offsets
//! (`x + y * pitch`), so the inner loops are integer adds and shifts.
//!
//! ## Quick Start
//!
//! ```rust
//! use convex_raster::prelude::*;
//!
//! let mut ras = Rasterizer::new(Framebuffer::new(64, 64)?);
//! ras.set_color(Rgba::BLUE);
//!
//! let vertices = [Vertex::new(32, 4), Vertex::new(60, 40), Vertex::new(8, 56)];
//! ras.fill_convex_polygon(&vertices, &[0, 1, 2])?;
//!
//! PngEncoder::to_bytes(ras.sink())?;
//! # Ok::<(), convex_raster::Error>(())
//! ```
//!
//! ## Fill Rule
//!
//! Each scanline paints the half-open span `[left, right)` and the bottom
//! scanline of the polygon is empty, so polygons that share an edge never
//! paint a pixel twice.
//!
//! ## Feature Flags
//!
//! - `config`: YAML configuration via `serde`/`serde_yaml_ng`

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Offsets move between i32, i64 and usize after explicit range checks
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Rasterizer configuration.
pub mod config;

/// 32.32 fixed-point arithmetic.
pub mod fixed;

/// RGBA framebuffer target.
pub mod framebuffer;

/// Integer vertices and rectangles.
pub mod geometry;

/// Pixel sink trait and coverage recording.
pub mod sink;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Scanline rasterization.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for convex-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use convex_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::RasterizerConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Rect, Vertex};
    pub use crate::output::PngEncoder;
    pub use crate::render::{ConvexPolygon, Fill, Rasterizer};
    pub use crate::sink::{CoverageSink, PixelSink};
}
