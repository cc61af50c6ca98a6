//! The knight's move table.
//!
//! The order of `KNIGHT_MOVES` is the candidate enumeration order for every
//! neighbour list, and therefore the tie-break order of the walker.

/// A relative `(dx, dy)` displacement.
pub type Offset = (isize, isize);

/// The eight knight displacements.
pub const KNIGHT_MOVES: [Offset; 8] = [
    (-1, 2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
];

/// Returns `true` if `(dx, dy)` is a single knight move.
#[must_use]
pub fn is_knight_move(dx: isize, dy: isize) -> bool {
    KNIGHT_MOVES.contains(&(dx, dy))
}
