//! Circular cursor over a polygon's index cycle.

/// Walk direction around the index cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Decreasing positions, wrapping from the first entry to the last.
    Backward,
    /// Increasing positions, wrapping from the last entry to the first.
    Forward,
}

/// A position in an index cycle; stepping past either end wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CycleCursor<'a> {
    cycle: &'a [usize],
    pos: usize,
}

impl<'a> CycleCursor<'a> {
    /// Cursor at `pos`. The cycle must be non-empty and `pos` in range.
    pub(crate) fn new(cycle: &'a [usize], pos: usize) -> Self {
        debug_assert!(pos < cycle.len());
        Self { cycle, pos }
    }

    /// Position within the cycle.
    pub(crate) const fn position(self) -> usize {
        self.pos
    }

    /// Vertex index stored at this position.
    pub(crate) fn index(self) -> usize {
        self.cycle[self.pos]
    }

    pub(crate) fn next(self) -> Self {
        let pos = if self.pos + 1 == self.cycle.len() {
            0
        } else {
            self.pos + 1
        };
        Self { pos, ..self }
    }

    pub(crate) fn prev(self) -> Self {
        let pos = if self.pos == 0 {
            self.cycle.len() - 1
        } else {
            self.pos - 1
        };
        Self { pos, ..self }
    }

    pub(crate) fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Backward => self.prev(),
            Direction::Forward => self.next(),
        }
    }
}
