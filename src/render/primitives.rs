//! Rectangle helpers and fillable shapes.
//!
//! Rectangles are painted row by row straight into the sink. A row
//! `increment` greater than one skips rows, which gives a cheap scanline or
//! dotted effect.

use super::polygon::Rasterizer;
use crate::error::{Error, Result};
use crate::geometry::{Rect, Vertex};
use crate::sink::PixelSink;

/// Trait for shapes a [`Rasterizer`] can fill.
pub trait Fill {
    /// Paint this shape with the sink's current color.
    ///
    /// Returns the number of pixels painted.
    ///
    /// # Errors
    ///
    /// Propagates validation and sink errors from the rasterizer.
    fn fill<S: PixelSink>(&self, ras: &mut Rasterizer<S>) -> Result<usize>;
}

/// A convex polygon borrowed from a vertex array and an index cycle.
#[derive(Debug, Clone, Copy)]
pub struct ConvexPolygon<'a> {
    /// Vertex storage, possibly shared with other polygons.
    pub vertices: &'a [Vertex],
    /// Boundary of this polygon as indices into `vertices`.
    pub indices: &'a [usize],
}

impl<'a> ConvexPolygon<'a> {
    /// Create a polygon view.
    #[must_use]
    pub const fn new(vertices: &'a [Vertex], indices: &'a [usize]) -> Self {
        Self { vertices, indices }
    }
}

impl Fill for ConvexPolygon<'_> {
    fn fill<S: PixelSink>(&self, ras: &mut Rasterizer<S>) -> Result<usize> {
        ras.fill_convex_polygon(self.vertices, self.indices)
    }
}

impl Fill for Rect {
    fn fill<S: PixelSink>(&self, ras: &mut Rasterizer<S>) -> Result<usize> {
        ras.fill_rectangle(*self, 1)
    }
}

impl<S: PixelSink> Rasterizer<S> {
    /// Fill a rectangle, painting every `increment`-th row from the top.
    ///
    /// Returns the number of pixels painted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIncrement`] for an increment of zero,
    /// [`Error::OffsetOutOfRange`] when a row starts at a negative offset, and
    /// any error raised by the sink.
    pub fn fill_rectangle(&mut self, rect: Rect, increment: u32) -> Result<usize> {
        let step = row_step(increment)?;
        let mut painted = 0;

        for dy in (0..rect.height).step_by(step) {
            let offset = self.row_offset(rect, dy)?;
            for dx in 0..rect.width as usize {
                self.sink.set_pixel(offset + dx)?;
            }
            painted += rect.width as usize;
        }
        Ok(painted)
    }

    /// Stroke the border of a rectangle.
    ///
    /// Rows are visited every `increment` lines. The first and last visited
    /// rows paint every `increment`-th column across the full width; rows in
    /// between paint the left and right border columns.
    ///
    /// # Errors
    ///
    /// Same as [`fill_rectangle`](Self::fill_rectangle).
    pub fn stroke_rectangle(&mut self, rect: Rect, increment: u32) -> Result<usize> {
        let step = row_step(increment)?;
        if rect.is_empty() {
            return Ok(0);
        }

        let last = (rect.height - 1) / increment * increment;
        let right = rect.width as usize - 1;
        let mut painted = 0;

        for dy in (0..rect.height).step_by(step) {
            let offset = self.row_offset(rect, dy)?;
            if dy == 0 || dy == last {
                for dx in (0..=right).step_by(step) {
                    self.sink.set_pixel(offset + dx)?;
                    painted += 1;
                }
            } else {
                self.sink.set_pixel(offset)?;
                painted += 1;
                if right > 0 {
                    self.sink.set_pixel(offset + right)?;
                    painted += 1;
                }
            }
        }
        Ok(painted)
    }

    /// Linear offset of the left edge of row `dy` of `rect`.
    fn row_offset(&self, rect: Rect, dy: u32) -> Result<usize> {
        let y = i64::from(rect.y) + i64::from(dy);
        let offset = i64::from(rect.x) + y * i64::from(self.sink.width());
        usize::try_from(offset).map_err(|_| Error::OffsetOutOfRange { offset })
    }
}

fn row_step(increment: u32) -> Result<usize> {
    if increment == 0 {
        return Err(Error::InvalidIncrement);
    }
    Ok(increment as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::framebuffer::Framebuffer;
    use crate::sink::CoverageSink;

    fn coverage(width: u32, height: u32) -> Rasterizer<CoverageSink> {
        Rasterizer::new(CoverageSink::new(width, height).unwrap())
    }

    #[test]
    fn test_fill_rectangle() {
        let mut ras = coverage(10, 10);
        let painted = ras.fill_rectangle(Rect::new(2, 3, 4, 2), 1).unwrap();

        assert_eq!(painted, 8);
        assert_eq!(ras.sink().row_runs(3), vec![(2, 6)]);
        assert_eq!(ras.sink().row_runs(4), vec![(2, 6)]);
        assert_eq!(ras.sink().covered(), 8);
    }

    #[test]
    fn test_fill_rectangle_increment_skips_rows() {
        let mut ras = coverage(6, 6);
        let painted = ras.fill_rectangle(Rect::new(0, 0, 3, 5), 2).unwrap();

        assert_eq!(painted, 9);
        assert_eq!(
            ras.sink().to_ascii(),
            "###...\n......\n###...\n......\n###...\n......\n"
        );
    }

    #[test]
    fn test_fill_empty_rectangle() {
        let mut ras = coverage(4, 4);
        assert_eq!(ras.fill_rectangle(Rect::new(1, 1, 0, 3), 1).unwrap(), 0);
        assert_eq!(ras.stroke_rectangle(Rect::new(1, 1, 3, 0), 1).unwrap(), 0);
        assert_eq!(ras.sink().total_writes(), 0);
    }

    #[test]
    fn test_zero_increment_rejected() {
        let mut ras = coverage(4, 4);
        let rect = Rect::new(0, 0, 2, 2);
        assert!(matches!(ras.fill_rectangle(rect, 0), Err(Error::InvalidIncrement)));
        assert!(matches!(ras.stroke_rectangle(rect, 0), Err(Error::InvalidIncrement)));
    }

    #[test]
    fn test_negative_row_offset_rejected() {
        let mut ras = coverage(4, 4);
        let err = ras.fill_rectangle(Rect::new(0, -1, 2, 2), 1).unwrap_err();
        assert!(matches!(err, Error::OffsetOutOfRange { offset: -4 }));
    }

    #[test]
    fn test_stroke_rectangle() {
        let mut ras = coverage(7, 6);
        let painted = ras.stroke_rectangle(Rect::new(1, 1, 5, 4), 1).unwrap();

        assert_eq!(
            ras.sink().to_ascii(),
            ".......\n.#####.\n.#...#.\n.#...#.\n.#####.\n.......\n"
        );
        assert_eq!(painted, 14);
        assert_eq!(ras.sink().max_hits(), 1);
    }

    #[test]
    fn test_stroke_rectangle_dotted() {
        let mut ras = coverage(6, 6);
        let painted = ras.stroke_rectangle(Rect::new(0, 0, 5, 6), 2).unwrap();

        // Rows 0, 2, 4 visited; 4 is the last visited row
        assert_eq!(
            ras.sink().to_ascii(),
            "#.#.#.\n......\n#...#.\n......\n#.#.#.\n......\n"
        );
        assert_eq!(painted, 8);
    }

    #[test]
    fn test_stroke_single_column() {
        let mut ras = coverage(3, 3);
        let painted = ras.stroke_rectangle(Rect::new(1, 0, 1, 3), 1).unwrap();
        assert_eq!(painted, 3);
        assert_eq!(ras.sink().max_hits(), 1);
    }

    #[test]
    fn test_fill_trait() {
        let mut ras = Rasterizer::new(Framebuffer::new(8, 8).unwrap());
        ras.set_color(Rgba::GREEN);

        let vertices = [Vertex::new(0, 0), Vertex::new(4, 0), Vertex::new(4, 4), Vertex::new(0, 4)];
        let square = ConvexPolygon::new(&vertices, &[0, 1, 2, 3]);
        assert_eq!(square.fill(&mut ras).unwrap(), 16);

        ras.set_color(Rgba::BLUE);
        assert_eq!(Rect::new(4, 4, 2, 2).fill(&mut ras).unwrap(), 4);

        let fb = ras.sink();
        assert_eq!(fb.count_color(Rgba::GREEN), 16);
        assert_eq!(fb.count_color(Rgba::BLUE), 4);
    }
}
