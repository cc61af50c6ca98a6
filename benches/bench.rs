use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use knights_tour::tour::board::BoardGraph;
use knights_tour::tour::coordinate::Coordinate;
use knights_tour::tour::degree::{DegreeHeuristic, DegreeIndex, DynamicDegree, HeuristicType};
use knights_tour::tour::walker::{sweep, walk, walk_with};
use std::hint::black_box;
use std::time::Duration;

const SIZES: [usize; 4] = [5, 8, 16, 32];

fn bench_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("board");

    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("build", n), &n, |b, &n| {
            b.iter(|| black_box(BoardGraph::build(n).unwrap()));
        });

        let graph = BoardGraph::build(n).unwrap();
        group.bench_with_input(BenchmarkId::new("degrees", n), &graph, |b, g| {
            b.iter(|| black_box(DegreeIndex::compute(g)));
        });
    }
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk - heuristic");

    for n in SIZES {
        let graph = BoardGraph::build(n).unwrap();
        let degrees = DegreeIndex::compute(&graph);
        let dynamic = DynamicDegree::new(&graph);
        let start = Coordinate::new(0, 0);

        group.bench_with_input(BenchmarkId::new("static", n), &graph, |b, g| {
            b.iter(|| black_box(walk(g, &degrees, start).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("dynamic", n), &graph, |b, g| {
            b.iter(|| black_box(walk_with(g, &dynamic, start).unwrap()));
        });
    }
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    for heuristic in [HeuristicType::Static, HeuristicType::Dynamic] {
        group.bench_function(heuristic.to_string(), |b| {
            b.iter(|| black_box(sweep(8, heuristic).unwrap()));
        });
    }
}

criterion_group!(benches, bench_board, bench_walk, bench_sweep);

criterion_main!(benches);
