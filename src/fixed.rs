//! 32.32 fixed-point arithmetic for edge interpolation.
//!
//! Values are stored in an `i64` with [`Fixed::SHIFT`] fractional bits.
//! Converting back to an integer is an arithmetic right shift, so results
//! truncate toward negative infinity; slopes are computed with integer
//! division, which truncates toward zero. Both roundings are part of the
//! contract: span boundaries depend on them bit for bit.
//!
//! Integer inputs are `i32`, and a slope numerator is the difference of two
//! non-negative `i32` offsets, so `delta << SHIFT` always fits in `i64`.

use std::ops::{Add, AddAssign};

/// A 32.32 fixed-point number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i64);

impl Fixed {
    /// Number of fractional bits.
    pub const SHIFT: u32 = 32;

    /// Convert an integer to fixed point.
    #[must_use]
    pub const fn from_int(value: i32) -> Self {
        Self((value as i64) << Self::SHIFT)
    }

    /// Integer part, truncating toward negative infinity.
    #[must_use]
    pub const fn to_int(self) -> i32 {
        (self.0 >> Self::SHIFT) as i32
    }

    /// Per-row increment for `delta` spread over `span` rows.
    ///
    /// Returns `None` when `span` is zero.
    #[must_use]
    pub fn slope(delta: i32, span: u32) -> Option<Self> {
        if span == 0 {
            return None;
        }
        Some(Self((i64::from(delta) << Self::SHIFT) / i64::from(span)))
    }
}

impl Add for Fixed {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
