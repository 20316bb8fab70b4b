/*
 * Skill Graph Benchmark
 *
 * Measures the per-frame cost of the graph: edge computation on its own and
 * the full tick (move, reflect, draw labels, draw edges) into a CommandBuffer.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use skillgraph::{compute_edges, CommandBuffer, GraphParams, SimulationState, SkillGraph, SurfaceSize};

const SURFACE: SurfaceSize = SurfaceSize::new(1280.0, 720.0);

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("skill-{i}")).collect()
}

// Benchmark the pairwise edge computation
fn bench_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("edges");

    for count in [9, 50, 200, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let mut rng = StdRng::seed_from_u64(11);
            let state = SimulationState::seed(&labels(n), SURFACE, 0.5, &mut rng);

            b.iter(|| black_box(compute_edges(state.particles(), 150.0, 0.3)));
        });
    }

    group.finish();
}

// Benchmark one full tick
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for count in [9, 50, 200, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let params = GraphParams {
                labels: labels(n),
                ..GraphParams::default()
            };
            let mut graph = SkillGraph::with_rng(params, StdRng::seed_from_u64(11));
            let mut surface = CommandBuffer::new(SURFACE);
            graph.start(Some(SURFACE));

            b.iter(|| black_box(graph.tick(&mut surface)));
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_edges, bench_tick
}

criterion_main!(benches);
