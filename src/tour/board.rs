#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The board graph: every square mapped to the squares one knight move away.
//!
//! The graph is built once by [`BoardGraph::build`] and is read-only from then
//! on. Visited state is never recorded here; the walker keeps it in a
//! [`VisitedStack`](crate::tour::visited::VisitedStack), so neighbour lookups
//! give the same answer for the whole lifetime of the graph.
//!
//! Squares are stored in x-major order, and each neighbour list follows the
//! order of [`KNIGHT_MOVES`].

use crate::tour::coordinate::Coordinate;
use crate::tour::error::TourError;
use crate::tour::moves::KNIGHT_MOVES;
use smallvec::SmallVec;
use tracing::debug;

/// Neighbour list for a single square. A knight has at most eight moves, so
/// this never spills to the heap.
pub type Neighbors = SmallVec<[Coordinate; 8]>;

/// Adjacency of an `n x n` board under knight moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGraph {
    size: usize,
    adjacency: Vec<Neighbors>,
}

/// Validates a signed board size coming from a caller.
///
/// # Errors
///
/// Returns `TourError::InvalidBoardSize` if `n <= 0` or if `n * n` squares
/// cannot be indexed.
pub fn board_size(n: i64) -> Result<usize, TourError> {
    usize::try_from(n)
        .ok()
        .filter(|&size| size > 0 && size.checked_mul(size).is_some())
        .ok_or(TourError::InvalidBoardSize(n))
}

impl BoardGraph {
    /// Builds the knight graph for a `size x size` board.
    ///
    /// # Errors
    ///
    /// Returns `TourError::InvalidBoardSize` if `size` is zero or the board
    /// is too large to index.
    pub fn build(size: usize) -> Result<Self, TourError> {
        let cells = size
            .checked_mul(size)
            .filter(|_| size > 0)
            .ok_or(TourError::InvalidBoardSize(i64::try_from(size).unwrap_or(i64::MAX)))?;

        let adjacency: Vec<Neighbors> = (0..cells)
            .map(|i| {
                let c = Coordinate::from_index(i, size);
                KNIGHT_MOVES
                    .iter()
                    .filter_map(|&(dx, dy)| c.offset(dx, dy, size))
                    .collect()
            })
            .collect();

        debug!(
            size,
            squares = cells,
            edges = adjacency.iter().map(SmallVec::len).sum::<usize>() / 2,
            "built board graph"
        );

        Ok(Self { size, adjacency })
    }

    /// Side length of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of squares, `size * size`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Always `false` for a successfully built graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` if `c` is a key of this graph.
    #[must_use]
    pub const fn contains(&self, c: Coordinate) -> bool {
        c.in_bounds(self.size)
    }

    /// Squares reachable from `c` in one knight move, or `None` if `c` is off
    /// the board.
    #[must_use]
    pub fn neighbors(&self, c: Coordinate) -> Option<&[Coordinate]> {
        if self.contains(c) {
            Some(&self.adjacency[c.index(self.size)])
        } else {
            None
        }
    }

    /// All squares in x-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.len()).map(|i| Coordinate::from_index(i, self.size))
    }

    /// All `(square, neighbours)` pairs in x-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &[Coordinate])> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(i, n)| (Coordinate::from_index(i, self.size), n.as_slice()))
    }
}
