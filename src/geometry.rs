//! Integer geometry consumed by the rasterizer.

/// A polygon vertex in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vertex {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (scanline).
    pub y: i32,
}

impl Vertex {
    /// Create a new vertex.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Linear buffer offset of this vertex, `x + y * pitch`.
    ///
    /// Computed in 64 bits so callers can range-check before narrowing.
    #[must_use]
    pub const fn offset(self, pitch: u32) -> i64 {
        self.x as i64 + self.y as i64 * pitch as i64
    }
}

/// An axis-aligned rectangle defined by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
