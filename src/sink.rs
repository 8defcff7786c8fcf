//! Pixel sinks: the targets the rasterizer writes into.
//!
//! A sink addresses pixels by linear offset, `x + y * width`, and carries its
//! own paint color. The rasterizer never reads pixels back.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// A target buffer addressed by linear pixel offset.
pub trait PixelSink {
    /// Row pitch in pixels, used to fold `(x, y)` into a linear offset.
    fn width(&self) -> u32;

    /// Paint the current color at `offset`.
    ///
    /// # Errors
    ///
    /// Implementations return [`Error::PixelOutOfBounds`] when `offset` is
    /// outside the buffer.
    fn set_pixel(&mut self, offset: usize) -> Result<()>;

    /// Set the color used by subsequent [`set_pixel`](Self::set_pixel) calls.
    fn set_color(&mut self, color: Rgba);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn set_pixel(&mut self, offset: usize) -> Result<()> {
        (**self).set_pixel(offset)
    }

    fn set_color(&mut self, color: Rgba) {
        (**self).set_color(color);
    }
}

/// A sink that records how often each pixel was written.
///
/// Useful for checking coverage: a correct fill writes every covered pixel
/// exactly once.
#[derive(Debug, Clone)]
pub struct CoverageSink {
    width: u32,
    height: u32,
    hits: Vec<u32>,
    color: Rgba,
}

impl CoverageSink {
    /// Create an empty coverage grid.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            hits: vec![0; width as usize * height as usize],
            color: Rgba::BLACK,
        })
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of writes to the pixel at `(x, y)`; zero when out of bounds.
    #[must_use]
    pub fn hits(&self, x: u32, y: u32) -> u32 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.hits[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Check whether `(x, y)` was written at least once.
    #[must_use]
    pub fn is_covered(&self, x: u32, y: u32) -> bool {
        self.hits(x, y) > 0
    }

    /// Number of distinct pixels written.
    #[must_use]
    pub fn covered(&self) -> usize {
        self.hits.iter().filter(|&&h| h > 0).count()
    }

    /// Total number of writes, duplicates included.
    #[must_use]
    pub fn total_writes(&self) -> u64 {
        self.hits.iter().map(|&h| u64::from(h)).sum()
    }

    /// Largest write count of any single pixel.
    #[must_use]
    pub fn max_hits(&self) -> u32 {
        self.hits.iter().copied().max().unwrap_or(0)
    }

    /// Covered columns of row `y` as half-open `[start, end)` runs.
    #[must_use]
    pub fn row_runs(&self, y: u32) -> Vec<(u32, u32)> {
        let mut runs = Vec::new();
        let mut start = None;
        for x in 0..self.width {
            match (self.is_covered(x, y), start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, x));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, self.width));
        }
        runs
    }

    /// Most recent color passed to [`PixelSink::set_color`].
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// Forget all recorded writes.
    pub fn reset(&mut self) {
        self.hits.iter_mut().for_each(|h| *h = 0);
    }

    /// Render the grid as text, `#` for covered pixels and `.` otherwise.
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.hits.chunks(self.width as usize) {
            out.extend(row.iter().map(|&h| if h > 0 { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

impl PixelSink for CoverageSink {
    fn width(&self) -> u32 {
        self.width
    }

    fn set_pixel(&mut self, offset: usize) -> Result<()> {
        let len = self.hits.len();
        let slot = self
            .hits
            .get_mut(offset)
            .ok_or(Error::PixelOutOfBounds { offset, len })?;
        *slot += 1;
        Ok(())
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }
}
