//! Partitioner benchmarks.
//!
//! Compares the backtracking and SAT strategies on fixed biplanar instances,
//! and measures the cardinality encoder on its own.
//!
//! Run with:
//! ```bash
//! cargo bench --bench partitioners
//! ```

use biplanar::backtrack::BacktrackingPartitioner;
use biplanar::cardinality::at_most_k;
use biplanar::cegar::SatCegarPartitioner;
use biplanar::generators;
use biplanar::ordering::{order_edges, DifficultyScore};
use biplanar::planarity::{DmpOracle, PlanarityOracle};
use biplanar::sat::{ClauseSink, Cnf};
use biplanar::types::{Edge, Lit};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Instances
// ============================================================================

fn instances() -> Vec<(&'static str, usize, Vec<Edge>)> {
    vec![
        ("K6", 6, generators::complete(6)),
        ("K7", 7, generators::complete(7)),
        ("K8", 8, generators::complete(8)),
        ("wheel(9,3)", 9, generators::wheel(9, 3)),
        (
            "P3xK4",
            12,
            generators::strong_product(&generators::path(3), 3, &generators::complete(4), 4),
        ),
    ]
}

// ============================================================================
// Benchmark: Backtracking vs SAT on known instances
// ============================================================================

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition/strategies");
    group.sample_size(10);

    for (name, n, edges) in instances() {
        let ordered = order_edges(&edges, n, DifficultyScore::Sum);

        group.bench_with_input(BenchmarkId::new("backtracking", name), &ordered, |b, ordered| {
            b.iter(|| BacktrackingPartitioner::new(ordered, n, &DmpOracle).run());
        });
        group.bench_with_input(BenchmarkId::new("sat", name), &ordered, |b, ordered| {
            b.iter(|| SatCegarPartitioner::new(ordered, n, &DmpOracle).run());
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Memoization on/off
// ============================================================================

fn bench_memo(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition/memo");
    group.sample_size(10);

    let k8 = order_edges(&generators::complete(8), 8, DifficultyScore::Sum);
    for memoize in [false, true] {
        group.bench_with_input(BenchmarkId::new("K8", memoize), &memoize, |b, &memoize| {
            b.iter(|| BacktrackingPartitioner::new(&k8, 8, &DmpOracle).with_memo(memoize).run());
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Planarity oracle on random sparse graphs
// ============================================================================

fn bench_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("planarity/dmp");

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for n in [10usize, 20, 40] {
        let mut edges = Vec::new();
        for u in 0..n {
            for v in u + 1..n {
                if rng.random_bool(4.0 / n as f64) {
                    edges.push(Edge::new(u, v));
                }
            }
        }
        let g = biplanar::graph::Graph::from_edges(n, &edges);
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::new("random", n), &g, |b, g| {
            b.iter(|| DmpOracle.is_planar_with_witness(g));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Sequential counter encoding
// ============================================================================

fn bench_cardinality(c: &mut Criterion) {
    let mut group = c.benchmark_group("sat/at_most_k");

    for m in [50usize, 100, 200] {
        let k = 3 * m / 5;
        group.bench_with_input(BenchmarkId::new("m", m), &m, |b, &m| {
            b.iter(|| {
                let mut cnf = Cnf::new();
                let lits: Vec<Lit> = (0..m).map(|_| cnf.new_var().pos()).collect();
                at_most_k(&mut cnf, &lits, k);
                cnf.num_clauses()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_memo, bench_oracle, bench_cardinality);

criterion_main!(benches);
