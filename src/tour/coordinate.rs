#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Board squares.
//!
//! A `Coordinate` is an `(x, y)` pair of non-negative integers. Whether it lies
//! on a particular board is a property of the board, so range checks take the
//! board size as an argument rather than being baked into the type.

use crate::tour::error::TourError;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// A square on an `n x n` board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct Coordinate {
    /// Column, `0 <= x < n`.
    pub x: usize,
    /// Row, `0 <= y < n`.
    pub y: usize,
}

impl Coordinate {
    /// Creates a coordinate without range checks.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Builds a coordinate from signed input, rejecting anything off an
    /// `size x size` board.
    ///
    /// # Errors
    ///
    /// Returns `TourError::InvalidStart` if either component is negative or not
    /// less than `size`.
    pub fn checked(x: i64, y: i64, size: usize) -> Result<Self, TourError> {
        let err = TourError::InvalidStart { x, y, size };
        let cx = usize::try_from(x).map_err(|_| err)?;
        let cy = usize::try_from(y).map_err(|_| err)?;
        let c = Self::new(cx, cy);
        if c.in_bounds(size) { Ok(c) } else { Err(err) }
    }

    /// Returns `true` if the square lies on a `size x size` board.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Applies an offset, returning `None` when the result falls off the board.
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize, size: usize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let c = Self::new(x, y);
        c.in_bounds(size).then_some(c)
    }

    /// Position of this square in x-major order on a `size x size` board.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.x * size + self.y
    }

    /// Inverse of [`Coordinate::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self::new(index / size, index % size)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_accepts_on_board() {
        assert_eq!(Coordinate::checked(0, 4, 5), Ok(Coordinate::new(0, 4)));
    }

    #[test]
    fn test_checked_rejects_negative_and_overflow() {
        assert_eq!(
            Coordinate::checked(-1, 0, 5),
            Err(TourError::InvalidStart { x: -1, y: 0, size: 5 })
        );
        assert_eq!(
            Coordinate::checked(2, 5, 5),
            Err(TourError::InvalidStart { x: 2, y: 5, size: 5 })
        );
    }

    #[test]
    fn test_offset_stays_on_board() {
        let c = Coordinate::new(0, 0);
        assert_eq!(c.offset(1, 2, 5), Some(Coordinate::new(1, 2)));
        assert_eq!(c.offset(-1, 2, 5), None);
        assert_eq!(c.offset(2, 5, 5), None);
    }

    #[test]
    fn test_index_round_trips() {
        let size = 7;
        for i in 0..size * size {
            assert_eq!(Coordinate::from_index(i, size).index(size), i);
        }
        assert_eq!(Coordinate::new(1, 0).index(size), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(3, 1).to_string(), "(3, 1)");
    }
}
