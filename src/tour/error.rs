//! Errors raised by the tour core.
//!
//! Every failure is detected synchronously where the offending input enters the
//! core. A tour that dead-ends before covering the board is not an error; see
//! [`TourOutcome`](crate::tour::walker::TourOutcome).

use thiserror::Error;

/// Errors that can occur while building a board or walking a tour.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TourError {
    /// The board size was zero, negative, or too large to index.
    #[error("Invalid board size: {0} (must be a positive integer)")]
    InvalidBoardSize(i64),

    /// The start square does not lie on the board.
    #[error("Invalid start square ({x}, {y}) for a {size}x{size} board")]
    InvalidStart {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
        /// Side length of the board the start was checked against.
        size: usize,
    },
}
