//! Scanline rasterization of convex polygons.
//!
//! The fill runs in three steps:
//!
//! 1. Find the topmost and bottommost vertices of the index cycle.
//! 2. Walk the boundary from top to bottom twice, once backward and once
//!    forward through the cycle, interpolating every edge into a
//!    per-scanline offset cache for that chain.
//! 3. For each scanline, paint the half-open span between the two chains'
//!    offsets, stopping once a span reaches the bottom vertex.
//!
//! Because each scanline paints `[min, max)`, the right boundary and the
//! bottom scanline are excluded, so polygons sharing an edge never paint the
//! same pixel twice.

use log::{debug, trace, warn};

use super::cursor::{CycleCursor, Direction};
use super::edge::{Edge, OffsetCache};
use crate::color::Rgba;
use crate::config::RasterizerConfig;
use crate::error::{Error, Result};
use crate::geometry::Vertex;
use crate::sink::PixelSink;

/// Convex polygon rasterizer writing into a [`PixelSink`].
///
/// The rasterizer owns two scanline caches that are reused by every fill, so
/// filling does not allocate unless the cache is configured to grow. Fills
/// take `&mut self`; use one rasterizer per thread.
///
/// # Example
///
/// ```
/// use convex_raster::prelude::*;
///
/// let fb = Framebuffer::new(10, 10).unwrap();
/// let mut ras = Rasterizer::new(fb);
/// ras.set_color(Rgba::RED);
///
/// let vertices = [Vertex::new(0, 0), Vertex::new(4, 0), Vertex::new(4, 4), Vertex::new(0, 4)];
/// let painted = ras.fill_convex_polygon(&vertices, &[0, 3, 2, 1]).unwrap();
///
/// assert_eq!(painted, 16);
/// assert_eq!(ras.sink().get_pixel(3, 3), Some(Rgba::RED));
/// ```
#[derive(Debug)]
pub struct Rasterizer<S> {
    pub(crate) sink: S,
    config: RasterizerConfig,
    chain_a: OffsetCache,
    chain_b: OffsetCache,
    seen: Vec<usize>,
}

impl<S: PixelSink> Rasterizer<S> {
    /// Create a rasterizer with the default configuration.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, RasterizerConfig::default())
    }

    /// Create a rasterizer with an explicit configuration.
    pub fn with_config(sink: S, config: RasterizerConfig) -> Self {
        let rows = config.rows();
        Self {
            sink,
            config,
            chain_a: OffsetCache::with_rows(rows),
            chain_b: OffsetCache::with_rows(rows),
            seen: Vec::new(),
        }
    }

    /// Tallest polygon the caches currently hold without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.chain_a.len().saturating_sub(1)
    }

    /// The target buffer.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// The target buffer, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Give back the target buffer.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Set the paint color on the target buffer.
    pub fn set_color(&mut self, color: impl Into<Rgba>) {
        self.sink.set_color(color.into());
    }

    /// Fill the convex polygon described by `indices` into `vertices`.
    ///
    /// `indices` lists the boundary in either rotational order. Returns the
    /// number of pixels painted.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPolygon`] for fewer than three indices, repeated
    ///   indices, zero height, or a boundary that is not monotone in y.
    /// - [`Error::IndexOutOfRange`] for an index past `vertices`.
    /// - [`Error::OffsetOutOfRange`] for a vertex whose linear offset is
    ///   negative or does not fit in 32 bits.
    /// - [`Error::CapacityExceeded`] when the polygon is taller than the cache
    ///   and growth is disabled.
    /// - Any error returned by the sink; painting stops at that pixel.
    ///
    /// Every check except the sink's runs before the first pixel is painted.
    pub fn fill_convex_polygon(&mut self, vertices: &[Vertex], indices: &[usize]) -> Result<usize> {
        check_distinct(&mut self.seen, indices)?;
        let outline = Outline::new(vertices, indices, self.sink.width())?;
        let height = outline.height();
        self.reserve(height)?;

        debug!(
            "filling convex polygon: {} vertices, scanlines {}..={}",
            indices.len(),
            outline.top,
            outline.bottom
        );

        let end_a = walk_chain(&mut self.chain_a, &outline, Direction::Backward)?;
        let end_b = walk_chain(&mut self.chain_b, &outline, Direction::Forward)?;

        self.fill_spans(height, end_a.max(end_b))
    }

    /// Make room for a polygon of `height` scanlines.
    fn reserve(&mut self, height: usize) -> Result<()> {
        let capacity = self.capacity();
        if height <= capacity {
            return Ok(());
        }
        if !self.config.grow {
            return Err(Error::CapacityExceeded { height, capacity });
        }

        warn!("growing scanline caches from {capacity} to {height} scanlines");
        self.chain_a.grow(height + 1);
        self.chain_b.grow(height + 1);
        Ok(())
    }

    /// Paint the span between the two chains on each of the first
    /// `height + 1` cached rows, stopping at the first span reaching
    /// `end_offset`.
    fn fill_spans(&mut self, height: usize, end_offset: i32) -> Result<usize> {
        let mut painted = 0;
        for row in 0..=height {
            let (a, b) = (self.chain_a.get(row), self.chain_b.get(row));
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };

            // Offsets between two non-negative vertex offsets are non-negative.
            for offset in lo..hi {
                self.sink.set_pixel(offset as usize)?;
            }
            painted += (hi - lo) as usize;

            if hi >= end_offset {
                break;
            }
        }
        Ok(painted)
    }
}

/// Reject index cycles that repeat a vertex.
fn check_distinct(scratch: &mut Vec<usize>, indices: &[usize]) -> Result<()> {
    scratch.clear();
    scratch.extend_from_slice(indices);
    scratch.sort_unstable();
    if scratch.windows(2).any(|w| w[0] == w[1]) {
        return Err(Error::invalid_polygon("index cycle repeats a vertex"));
    }
    Ok(())
}

/// A validated index cycle with its top and bottom vertices located.
#[derive(Debug)]
struct Outline<'a> {
    vertices: &'a [Vertex],
    cycle: &'a [usize],
    pitch: u32,
    /// Cycle position of the first vertex with minimum y.
    start: usize,
    /// Cycle position of the first vertex with maximum y.
    end: usize,
    top: i32,
    bottom: i32,
}

impl<'a> Outline<'a> {
    fn new(vertices: &'a [Vertex], cycle: &'a [usize], pitch: u32) -> Result<Self> {
        if cycle.len() < 3 {
            return Err(Error::invalid_polygon("fewer than three vertices"));
        }

        for &index in cycle {
            let vertex = vertices.get(index).ok_or(Error::IndexOutOfRange {
                index,
                len: vertices.len(),
            })?;
            let offset = vertex.offset(pitch);
            if !(0..=i64::from(i32::MAX)).contains(&offset) {
                return Err(Error::OffsetOutOfRange { offset });
            }
        }

        let mut outline = Self {
            vertices,
            cycle,
            pitch,
            start: 0,
            end: 0,
            top: vertices[cycle[0]].y,
            bottom: vertices[cycle[0]].y,
        };

        // First vertex to reach a strictly new extreme wins ties.
        for (pos, &index) in cycle.iter().enumerate().skip(1) {
            let y = vertices[index].y;
            if y < outline.top {
                outline.top = y;
                outline.start = pos;
            } else if y > outline.bottom {
                outline.bottom = y;
                outline.end = pos;
            }
        }

        if outline.top == outline.bottom {
            return Err(Error::invalid_polygon("all vertices on one scanline"));
        }
        Ok(outline)
    }

    fn height(&self) -> usize {
        self.bottom.abs_diff(self.top) as usize
    }

    fn vertex(&self, at: CycleCursor<'_>) -> Vertex {
        self.vertices[at.index()]
    }

    fn offset(&self, at: CycleCursor<'_>) -> i32 {
        // Range-checked in `new`.
        self.vertex(at).offset(self.pitch) as i32
    }

    /// Cache row of a vertex, relative to the top scanline.
    fn row(&self, at: CycleCursor<'_>) -> usize {
        self.vertex(at).y.abs_diff(self.top) as usize
    }

    /// The edge from `from` to `to` in walk order.
    fn edge(&self, from: CycleCursor<'_>, to: CycleCursor<'_>) -> Result<Edge> {
        let (y0, y1) = (self.vertex(from).y, self.vertex(to).y);
        if y1 < y0 {
            return Err(Error::invalid_polygon(
                "boundary is not monotone in y; polygon must be convex",
            ));
        }
        Ok(Edge {
            top: self.row(from),
            span: y1.abs_diff(y0),
            from: self.offset(from),
            to: self.offset(to),
        })
    }
}

/// Walk from the top vertex to the bottom vertex in `direction`,
/// interpolating each edge into `cache`. Returns the offset reached at the
/// bottom vertex.
fn walk_chain(cache: &mut OffsetCache, outline: &Outline<'_>, direction: Direction) -> Result<i32> {
    let mut current = CycleCursor::new(outline.cycle, outline.start);
    loop {
        let next = current.step(direction);
        let edge = outline.edge(current, next)?;
        trace!(
            "{direction:?} edge {} -> {}: rows {}..={}, offsets {} -> {}",
            current.index(),
            next.index(),
            edge.top,
            edge.bottom(),
            edge.from,
            edge.to
        );
        cache.interpolate(edge);

        if next.position() == outline.end {
            return Ok(edge.to);
        }
        current = next;
    }
}
