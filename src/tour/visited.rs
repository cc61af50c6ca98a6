#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::tour::coordinate::Coordinate;
use bit_vec::BitVec;
use std::ops::Index;

/// Ordered, append-only record of the squares a tour has visited.
///
/// The path is the tour result. A bitmap indexed like the board mirrors it so
/// that `contains` answers in constant time; both always agree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisitedStack {
    path: Vec<Coordinate>,
    seen: BitVec,
    size: usize,
}

impl Index<usize> for VisitedStack {
    type Output = Coordinate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.path[index]
    }
}

impl VisitedStack {
    /// Creates an empty stack for a `size x size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        Self {
            path: Vec::with_capacity(cells),
            seen: BitVec::from_elem(cells, false),
            size,
        }
    }

    /// Appends `c` to the path. Returns `false` and leaves the stack unchanged
    /// if `c` was already visited or is off the board.
    pub fn push(&mut self, c: Coordinate) -> bool {
        if !c.in_bounds(self.size) || self.contains(c) {
            return false;
        }
        self.seen.set(c.index(self.size), true);
        self.path.push(c);
        true
    }

    /// Returns `true` if `c` has been visited.
    #[must_use]
    pub fn contains(&self, c: Coordinate) -> bool {
        c.in_bounds(self.size) && self.seen.get(c.index(self.size)).unwrap_or(false)
    }

    /// The visited squares in visiting order.
    #[must_use]
    pub fn values(&self) -> &[Coordinate] {
        &self.path
    }

    /// The most recently visited square.
    #[must_use]
    pub fn last(&self) -> Option<Coordinate> {
        self.path.last().copied()
    }

    /// Number of squares visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if nothing has been visited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Iterates over the path in visiting order.
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.path.iter()
    }

    /// Consumes the stack, returning the path.
    #[must_use]
    pub fn into_values(self) -> Vec<Coordinate> {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_contains() {
        let mut s = VisitedStack::new(3);
        assert!(s.is_empty());
        assert!(s.push(Coordinate::new(0, 0)));
        assert!(s.push(Coordinate::new(1, 2)));
        assert!(s.contains(Coordinate::new(1, 2)));
        assert!(!s.contains(Coordinate::new(2, 1)));
        assert_eq!(s.len(), 2);
        assert_eq!(s[1], Coordinate::new(1, 2));
        assert_eq!(s.last(), Some(Coordinate::new(1, 2)));
    }

    #[test]
    fn test_push_refuses_repeats() {
        let mut s = VisitedStack::new(3);
        assert!(s.push(Coordinate::new(2, 2)));
        assert!(!s.push(Coordinate::new(2, 2)));
        assert_eq!(s.values(), &[Coordinate::new(2, 2)]);
    }

    #[test]
    fn test_push_refuses_off_board() {
        let mut s = VisitedStack::new(3);
        assert!(!s.push(Coordinate::new(3, 0)));
        assert!(!s.contains(Coordinate::new(3, 0)));
        assert!(s.is_empty());
    }

    #[test]
    fn test_values_keep_insertion_order() {
        let mut s = VisitedStack::new(4);
        let cs = [
            Coordinate::new(3, 3),
            Coordinate::new(0, 0),
            Coordinate::new(2, 1),
        ];
        for c in cs {
            s.push(c);
        }
        assert_eq!(s.values(), &cs);
        assert_eq!(s.iter().count(), 3);
        assert_eq!(s.into_values(), cs.to_vec());
    }
}
