#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The tour walker.
//!
//! Starting from a square, the walker repeatedly moves to the unvisited
//! neighbour with the lowest rank under a [`DegreeHeuristic`]. Ties go to the
//! candidate that comes first in the neighbour list, i.e. in
//! [`KNIGHT_MOVES`](crate::tour::moves::KNIGHT_MOVES) order. The walk stops as
//! soon as the current square has no unvisited neighbour. There is no
//! backtracking, so a tour may cover fewer than `n * n` squares.
//!
//! The graph and heuristic are only read. Each call owns its own
//! [`VisitedStack`], so walks from different starts never interact.

use crate::tour::board::BoardGraph;
use crate::tour::coordinate::Coordinate;
use crate::tour::degree::{DegreeHeuristic, DegreeIndex, HeuristicType};
use crate::tour::error::TourError;
use crate::tour::moves::is_knight_move;
use crate::tour::visited::VisitedStack;
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, trace};

/// How a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TourOutcome {
    /// Every square was visited.
    Complete,
    /// The walker ran out of unvisited neighbours first.
    DeadEnd,
}

/// Counters collected while walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WalkStats {
    /// Moves made, one less than the tour length.
    pub steps: usize,
    /// Unvisited neighbours ranked across all steps.
    pub candidates_examined: usize,
    /// Candidates that matched the best rank seen so far and lost on order.
    pub tie_breaks: usize,
}

/// The result of a walk: the visited squares in order plus bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    board_size: usize,
    path: Vec<Coordinate>,
    stats: WalkStats,
}

impl Tour {
    /// The visited squares in visiting order. Never empty.
    #[must_use]
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// Number of squares visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always `false`; a tour contains at least its start square.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Side length of the board the tour was walked on.
    #[must_use]
    pub const fn board_size(&self) -> usize {
        self.board_size
    }

    /// Counters collected during the walk.
    #[must_use]
    pub const fn stats(&self) -> WalkStats {
        self.stats
    }

    /// Whether the tour covers the whole board.
    #[must_use]
    pub fn outcome(&self) -> TourOutcome {
        if self.path.len() == self.board_size * self.board_size {
            TourOutcome::Complete
        } else {
            TourOutcome::DeadEnd
        }
    }

    /// Shorthand for `outcome() == TourOutcome::Complete`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome() == TourOutcome::Complete
    }

    /// Checks that consecutive squares are a knight move apart.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn is_valid_knight_path(&self) -> bool {
        self.path.iter().tuple_windows().all(|(a, b)| {
            let dx = b.x as isize - a.x as isize;
            let dy = b.y as isize - a.y as isize;
            is_knight_move(dx, dy)
        })
    }

    /// Step numbers laid out on the board, `grid[y][x]`. The start square is
    /// step 1; unvisited squares are 0.
    #[must_use]
    pub fn step_grid(&self) -> Vec<Vec<usize>> {
        let mut grid = vec![vec![0; self.board_size]; self.board_size];
        for (step, c) in self.path.iter().enumerate() {
            grid[c.y][c.x] = step + 1;
        }
        grid
    }

    /// Consumes the tour, returning the path.
    #[must_use]
    pub fn into_path(self) -> Vec<Coordinate> {
        self.path
    }
}

/// Walks a tour from `start` using the static degrees in `degrees`.
///
/// # Errors
///
/// Returns `TourError::InvalidStart` if `start` is not a square of `graph`.
pub fn walk(
    graph: &BoardGraph,
    degrees: &DegreeIndex,
    start: Coordinate,
) -> Result<Tour, TourError> {
    walk_with(graph, degrees, start)
}

/// Walks a tour from `start`, ranking candidates with `heuristic`.
///
/// # Errors
///
/// Returns `TourError::InvalidStart` if `start` is not a square of `graph`.
pub fn walk_with<H: DegreeHeuristic>(
    graph: &BoardGraph,
    heuristic: &H,
    start: Coordinate,
) -> Result<Tour, TourError> {
    if !graph.contains(start) {
        return Err(TourError::InvalidStart {
            x: i64::try_from(start.x).unwrap_or(i64::MAX),
            y: i64::try_from(start.y).unwrap_or(i64::MAX),
            size: graph.size(),
        });
    }

    let mut visited = VisitedStack::new(graph.size());
    let mut stats = WalkStats::default();
    visited.push(start);
    let mut current = start;

    loop {
        let mut best: Option<(Coordinate, usize)> = None;
        let mut candidates = 0;

        for &next in graph
            .neighbors(current)
            .unwrap_or_default()
            .iter()
            .filter(|&&n| !visited.contains(n))
        {
            candidates += 1;
            let rank = heuristic.rank(graph, &visited, next);
            match best {
                Some((_, r)) if rank == r => stats.tie_breaks += 1,
                Some((_, r)) if rank > r => {}
                _ => best = Some((next, rank)),
            }
        }
        stats.candidates_examined += candidates;

        let Some((next, rank)) = best else {
            break;
        };

        trace!(from = %current, to = %next, rank, candidates, "step");
        visited.push(next);
        stats.steps += 1;
        current = next;
    }

    let tour = Tour {
        board_size: graph.size(),
        path: visited.into_values(),
        stats,
    };

    debug!(
        start = %start,
        length = tour.len(),
        outcome = ?tour.outcome(),
        "walk finished"
    );

    Ok(tour)
}

/// Walks an independent tour from every square of a `size x size` board, in
/// x-major order of the start square.
///
/// # Errors
///
/// Returns `TourError::InvalidBoardSize` if `size` is zero.
pub fn sweep(size: usize, heuristic: HeuristicType) -> Result<Vec<Tour>, TourError> {
    let graph = BoardGraph::build(size)?;
    let h = heuristic.to_impl(&graph);
    graph
        .coordinates()
        .map(|start| walk_with(&graph, &h, start))
        .collect()
}
