use auction::{AuctionSolver, Graph, Person};
use codspeed_criterion_compat::{criterion_group, criterion_main, BenchmarkId, Criterion};

#[cfg(feature = "kuhn_munkres")]
use auction::{kuhn_munkres::kuhn_munkres_min, matrix::Matrix};
use rand::Rng;

fn random_graph(size: usize) -> (Graph, Vec<i32>) {
    let mut rng = rand::rng();
    let mut flat = Vec::with_capacity(size * size);
    let persons = (0..size)
        .map(|_| {
            let neighbors: Vec<usize> = (0..size).collect();
            let costs: Vec<i32> = (0..size)
                .map(|_| {
                    let c = rng.random_range(0..100);
                    flat.push(c);
                    c
                })
                .collect();
            Person::new(neighbors, costs)
        })
        .collect();
    (Graph::new(persons), flat)
}

fn compare_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("Assignment Problem");

    for size in [10, 20, 50, 100, 200] {
        group.bench_with_input(
            BenchmarkId::new("Auction solver", size),
            &size,
            |b, &size| {
                let (graph, _) = random_graph(size);
                b.iter(|| {
                    let mut solver = AuctionSolver::new();
                    solver.load_graph(graph.clone());
                    solver
                        .solve(f64::from(solver.max_abs_cost()), 7.0, 0.0)
                        .unwrap();
                });
            },
        );

        #[cfg(feature = "kuhn_munkres")]
        group.bench_with_input(
            BenchmarkId::new("Hungarian oracle", size),
            &size,
            |b, &size| {
                let (_, flat) = random_graph(size);
                let matrix = Matrix::from_vec(size, size, flat.into_iter().map(i64::from).collect());
                b.iter(|| {
                    kuhn_munkres_min(&matrix);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, compare_algorithms);
criterion_main!(benches);
