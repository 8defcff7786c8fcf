//! Scanline rasterization.
//!
//! # Algorithms
//!
//! - **Convex polygon fill**: two boundary chains walked from the topmost
//!   to the bottommost vertex, edges interpolated in 32.32 fixed point,
//!   spans painted between the chains one scanline at a time
//! - **Rectangle fill/stroke**: direct row loops with optional row skipping

mod cursor;
mod edge;
mod polygon;
mod primitives;

pub use polygon::Rasterizer;
pub use primitives::{ConvexPolygon, Fill};
