use itertools::Itertools;
use knights_tour::tour::board::BoardGraph;
use knights_tour::tour::coordinate::Coordinate;
use knights_tour::tour::degree::{DegreeIndex, DynamicDegree};
use knights_tour::tour::error::TourError;
use knights_tour::tour::walker::{TourOutcome, walk, walk_with};
use proptest::prelude::*;

fn board_and_start() -> impl Strategy<Value = (usize, Coordinate)> {
    (1usize..=12).prop_flat_map(|n| {
        (Just(n), 0..n, 0..n).prop_map(|(n, x, y)| (n, Coordinate::new(x, y)))
    })
}

proptest! {
    #[test]
    fn test_graph_has_every_square_and_only_on_board_neighbors(n in 1usize..=16) {
        let g = BoardGraph::build(n).unwrap();
        prop_assert_eq!(g.len(), n * n);
        prop_assert_eq!(g.coordinates().unique().count(), n * n);
        for (c, ns) in g.iter() {
            prop_assert!(ns.len() <= 8);
            prop_assert!(!ns.contains(&c));
            for nb in ns {
                prop_assert!(nb.x < n && nb.y < n);
            }
        }
    }

    #[test]
    fn test_tour_is_distinct_and_on_board((n, start) in board_and_start()) {
        let g = BoardGraph::build(n).unwrap();
        let d = DegreeIndex::compute(&g);
        let t = walk(&g, &d, start).unwrap();
        prop_assert_eq!(t.path()[0], start);
        prop_assert!(!t.is_empty() && t.len() <= n * n);
        prop_assert_eq!(t.path().iter().unique().count(), t.len());
        prop_assert!(t.path().iter().all(|c| g.contains(*c)));
        prop_assert!(t.is_valid_knight_path());
        prop_assert_eq!(t.is_complete(), t.len() == n * n);
    }

    #[test]
    fn test_walk_is_deterministic((n, start) in board_and_start()) {
        let g = BoardGraph::build(n).unwrap();
        let d = DegreeIndex::compute(&g);
        prop_assert_eq!(walk(&g, &d, start).unwrap(), walk(&g, &d, start).unwrap());
    }

    #[test]
    fn test_walk_does_not_mutate_graph_or_degrees((n, start) in board_and_start()) {
        let g = BoardGraph::build(n).unwrap();
        let snapshot = g.clone();
        let d = DegreeIndex::compute(&g);
        let _ = walk(&g, &d, start).unwrap();
        let _ = walk_with(&g, &DynamicDegree, start).unwrap();
        prop_assert_eq!(&g, &snapshot);
        prop_assert_eq!(DegreeIndex::compute(&g), d);
    }

    #[test]
    fn test_dynamic_tour_is_distinct((n, start) in board_and_start()) {
        let g = BoardGraph::build(n).unwrap();
        let t = walk_with(&g, &DynamicDegree, start).unwrap();
        prop_assert_eq!(t.path().iter().unique().count(), t.len());
        prop_assert!(t.is_valid_knight_path());
    }

    #[test]
    fn test_off_board_start_is_rejected(n in 1usize..=10, x in 0usize..20, y in 0usize..20) {
        prop_assume!(x >= n || y >= n);
        let g = BoardGraph::build(n).unwrap();
        let d = DegreeIndex::compute(&g);
        let err = walk(&g, &d, Coordinate::new(x, y)).unwrap_err();
        prop_assert!(
            matches!(err, TourError::InvalidStart { size, .. } if size == n),
            "unexpected error {:?}",
            err
        );
    }
}

#[test]
fn test_one_by_one_board() {
    let g = BoardGraph::build(1).unwrap();
    assert_eq!(g.neighbors(Coordinate::new(0, 0)).unwrap().len(), 0);
    let d = DegreeIndex::compute(&g);
    let t = walk(&g, &d, Coordinate::new(0, 0)).unwrap();
    assert_eq!(t.len(), 1);
    assert_eq!(t.outcome(), TourOutcome::Complete);
}

#[test]
fn test_five_by_five_from_corner() {
    let g = BoardGraph::build(5).unwrap();
    let d = DegreeIndex::compute(&g);
    assert_eq!(d.degree(Coordinate::new(0, 0)), Some(2));
    let first = walk(&g, &d, Coordinate::new(0, 0)).unwrap();
    assert_eq!(first.path()[1], Coordinate::new(1, 2));
    for _ in 0..5 {
        assert_eq!(walk(&g, &d, Coordinate::new(0, 0)).unwrap(), first);
    }
}

#[test]
fn test_three_by_three_never_completes() {
    let g = BoardGraph::build(3).unwrap();
    let d = DegreeIndex::compute(&g);
    for start in g.coordinates() {
        let t = walk(&g, &d, start).unwrap();
        assert!(t.len() <= 9);
        assert_eq!(t.path().iter().unique().count(), t.len());
        assert_eq!(t.outcome(), TourOutcome::DeadEnd);
    }
}
