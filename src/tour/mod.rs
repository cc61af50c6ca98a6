#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

/// Board squares and their range checks.
pub mod coordinate;

/// The table of knight displacements.
pub mod moves;

/// The knight graph of an `n x n` board.
pub mod board;

/// Static degrees and the heuristics that rank candidate squares.
pub mod degree;

/// The ordered record of visited squares.
pub mod visited;

/// Warnsdorf's greedy walk and the resulting tour.
pub mod walker;

/// Errors reported by the core.
pub mod error;
