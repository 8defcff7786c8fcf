//! Edge interpolation into per-scanline offset caches.
//!
//! Offsets are linear buffer addresses, `x + y * pitch`. Because both ends of
//! an edge carry the same pitch term per row, the offset itself can be
//! interpolated as a 1D quantity: stepping one row adds `pitch` plus the
//! fractional x slope.

use crate::fixed::Fixed;

/// One polygon edge, in cache rows relative to the polygon's top scanline.
///
/// `from` is the offset at row `top`, `to` the offset at row `top + span`,
/// in walk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    pub(crate) top: usize,
    pub(crate) span: u32,
    pub(crate) from: i32,
    pub(crate) to: i32,
}

impl Edge {
    pub(crate) const fn bottom(&self) -> usize {
        self.top + self.span as usize
    }
}

/// Linear offsets for one boundary chain, one slot per scanline.
#[derive(Debug, Clone, Default)]
pub(crate) struct OffsetCache {
    rows: Vec<i32>,
}

impl OffsetCache {
    pub(crate) fn with_rows(rows: usize) -> Self {
        Self {
            rows: vec![0; rows],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Ensure at least `rows` slots; never shrinks.
    pub(crate) fn grow(&mut self, rows: usize) {
        if rows > self.rows.len() {
            self.rows.resize(rows, 0);
        }
    }

    pub(crate) fn get(&self, row: usize) -> i32 {
        self.rows[row]
    }

    /// Write the interpolated offset for every row of `edge`.
    ///
    /// Both endpoint rows receive their exact offsets. A horizontal edge
    /// (`span == 0`) writes only `to`. The caller guarantees
    /// `edge.bottom() < self.len()`.
    pub(crate) fn interpolate(&mut self, edge: Edge) {
        debug_assert!(edge.bottom() < self.rows.len());

        let slots = &mut self.rows[edge.top..=edge.bottom()];
        let Some((last, body)) = slots.split_last_mut() else {
            return;
        };

        if let Some(step) = Fixed::slope(edge.to - edge.from, edge.span) {
            let mut value = Fixed::from_int(edge.from);
            for slot in body {
                *slot = value.to_int();
                value += step;
            }
        }
        *last = edge.to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(cache: &OffsetCache, range: std::ops::RangeInclusive<usize>) -> Vec<i32> {
        range.map(|row| cache.get(row)).collect()
    }

    #[test]
    fn test_interpolate_exact_step() {
        let mut cache = OffsetCache::with_rows(5);
        cache.interpolate(Edge {
            top: 0,
            span: 4,
            from: 0,
            to: 40,
        });
        assert_eq!(rows(&cache, 0..=4), vec![0, 10, 20, 30, 40]);
    }

    #[test]
    fn test_interpolate_fractional_step_floors() {
        // x runs 4 -> 0 over 4 rows of pitch 10: offsets 4, 13, 22, 31, 40
        let mut cache = OffsetCache::with_rows(5);
        cache.interpolate(Edge {
            top: 0,
            span: 4,
            from: 4,
            to: 40,
        });
        assert_eq!(rows(&cache, 0..=4), vec![4, 13, 22, 31, 40]);
    }

    #[test]
    fn test_interpolate_endpoints_exact() {
        // 1/3 is not representable; the bottom row must still be exact
        let mut cache = OffsetCache::with_rows(8);
        cache.interpolate(Edge {
            top: 2,
            span: 3,
            from: 100,
            to: 101,
        });
        assert_eq!(cache.get(2), 100);
        assert_eq!(cache.get(5), 101);
        assert_eq!(rows(&cache, 3..=4), vec![100, 100]);
    }

    #[test]
    fn test_interpolate_horizontal_edge_writes_one_slot() {
        let mut cache = OffsetCache::with_rows(3);
        cache.interpolate(Edge {
            top: 1,
            span: 0,
            from: 17,
            to: 12,
        });
        assert_eq!(rows(&cache, 0..=2), vec![0, 12, 0]);
    }

    #[test]
    fn test_interpolate_last_row_in_bounds() {
        let mut cache = OffsetCache::with_rows(4);
        cache.interpolate(Edge {
            top: 0,
            span: 3,
            from: 0,
            to: 30,
        });
        cache.interpolate(Edge {
            top: 3,
            span: 0,
            from: 30,
            to: 33,
        });
        assert_eq!(rows(&cache, 0..=3), vec![0, 10, 20, 33]);
    }

    #[test]
    fn test_interpolate_leftward_edge() {
        // x 9 -> 0 over 3 rows, pitch 16
        let mut cache = OffsetCache::with_rows(4);
        cache.interpolate(Edge {
            top: 0,
            span: 3,
            from: 9,
            to: 48,
        });
        assert_eq!(rows(&cache, 0..=3), vec![9, 22, 35, 48]);
    }

    #[test]
    fn test_grow_never_shrinks() {
        let mut cache = OffsetCache::with_rows(10);
        cache.grow(4);
        assert_eq!(cache.len(), 10);
        cache.grow(20);
        assert_eq!(cache.len(), 20);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Endpoints are exact and interior rows stay within one of the
            /// exact line, moving monotonically from `from` to `to`.
            #[test]
            fn prop_interpolate_tracks_line(
                from in 0i32..1_000_000,
                to in 0i32..1_000_000,
                span in 1u32..1200,
            ) {
                let mut cache = OffsetCache::with_rows(span as usize + 1);
                cache.interpolate(Edge { top: 0, span, from, to });

                prop_assert_eq!(cache.get(0), from);
                prop_assert_eq!(cache.get(span as usize), to);

                let delta = i64::from(to) - i64::from(from);
                for k in 0..=span as usize {
                    let exact = i64::from(from) * i64::from(span) + delta * k as i64;
                    let floor = exact.div_euclid(i64::from(span));
                    prop_assert!((i64::from(cache.get(k)) - floor).abs() <= 1);
                }
                for k in 1..=span as usize {
                    let (prev, cur) = (cache.get(k - 1), cache.get(k));
                    let monotone = if delta >= 0 { cur >= prev } else { cur <= prev };
                    prop_assert!(monotone, "row {}: {} -> {}", k, prev, cur);
                }
            }
        }
    }
}
