#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Degree bookkeeping and the ranking heuristics used to pick the next square.
//!
//! Warnsdorf's rule moves to the candidate with the fewest onward moves. Two
//! readings of "onward moves" are provided:
//! - `DegreeIndex`: the neighbour count fixed when the board is built. Visiting
//!   squares never lowers it. This is the default.
//! - `DynamicDegree`: the number of still-unvisited neighbours, recounted at
//!   every step. This is the textbook rule and produces different tours, so it
//!   is only used when asked for explicitly.
//!
//! Both are exposed through the `DegreeHeuristic` trait, and `HeuristicType`
//! selects one at runtime.

use crate::tour::board::BoardGraph;
use crate::tour::coordinate::Coordinate;
use crate::tour::visited::VisitedStack;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::ops::Index;

/// Ranks candidate squares; the walker moves to the lowest rank.
pub trait DegreeHeuristic: Debug + Clone {
    /// Prepares the heuristic for `graph`.
    fn new(graph: &BoardGraph) -> Self;

    /// Rank of `candidate` given the squares visited so far.
    fn rank(&self, graph: &BoardGraph, visited: &VisitedStack, candidate: Coordinate) -> usize;
}

/// Neighbour count of every square, taken once from a [`BoardGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DegreeIndex {
    size: usize,
    degrees: Vec<usize>,
}

impl Index<Coordinate> for DegreeIndex {
    type Output = usize;

    fn index(&self, c: Coordinate) -> &Self::Output {
        &self.degrees[c.index(self.size)]
    }
}

impl DegreeIndex {
    /// One pass over `graph`, recording each neighbour list's length. The
    /// graph is not modified.
    #[must_use]
    pub fn compute(graph: &BoardGraph) -> Self {
        Self {
            size: graph.size(),
            degrees: graph.iter().map(|(_, n)| n.len()).collect(),
        }
    }

    /// Degree of `c`, or `None` if `c` is off the board.
    #[must_use]
    pub fn degree(&self, c: Coordinate) -> Option<usize> {
        c.in_bounds(self.size).then(|| self[c])
    }

    /// Number of squares indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Returns `true` if no squares are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// All `(square, degree)` pairs in x-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, usize)> + '_ {
        self.degrees
            .iter()
            .enumerate()
            .map(|(i, &d)| (Coordinate::from_index(i, self.size), d))
    }
}

impl DegreeHeuristic for DegreeIndex {
    fn new(graph: &BoardGraph) -> Self {
        Self::compute(graph)
    }

    fn rank(&self, _: &BoardGraph, _: &VisitedStack, candidate: Coordinate) -> usize {
        self[candidate]
    }
}

/// Counts a candidate's unvisited neighbours at the moment it is ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DynamicDegree;

impl DegreeHeuristic for DynamicDegree {
    fn new(_: &BoardGraph) -> Self {
        Self
    }

    fn rank(&self, graph: &BoardGraph, visited: &VisitedStack, candidate: Coordinate) -> usize {
        graph
            .neighbors(candidate)
            .map_or(0, |ns| ns.iter().filter(|&&n| !visited.contains(n)).count())
    }
}

/// Runtime choice between the heuristics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeuristicImpls {
    /// Degrees fixed at construction.
    Static(DegreeIndex),
    /// Unvisited-neighbour counts.
    Dynamic(DynamicDegree),
}

impl DegreeHeuristic for HeuristicImpls {
    fn new(graph: &BoardGraph) -> Self {
        Self::Static(DegreeIndex::compute(graph))
    }

    fn rank(&self, graph: &BoardGraph, visited: &VisitedStack, candidate: Coordinate) -> usize {
        match self {
            Self::Static(h) => h.rank(graph, visited, candidate),
            Self::Dynamic(h) => h.rank(graph, visited, candidate),
        }
    }
}

/// Enum representing the heuristic to rank candidate squares with.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicType {
    /// Neighbour counts computed once, before the tour starts.
    #[default]
    Static,
    /// Unvisited-neighbour counts recomputed at every step.
    Dynamic,
}

impl Display for HeuristicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}

impl HeuristicType {
    /// Converts the `HeuristicType` to a concrete `HeuristicImpls`.
    #[must_use]
    pub fn to_impl(self, graph: &BoardGraph) -> HeuristicImpls {
        match self {
            Self::Static => HeuristicImpls::Static(DegreeIndex::compute(graph)),
            Self::Dynamic => HeuristicImpls::Dynamic(DynamicDegree::new(graph)),
        }
    }
}
