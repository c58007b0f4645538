//! Kruskal minimum spanning tree benchmarks over randomly weighted grids.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use labyrinth_benches::{
    error::BenchSetupError,
    params::GridBenchParams,
    source::{SyntheticGridConfig, grid_graph},
};

/// Seed used for all synthetic data generation in this benchmark.
const SEED: u64 = 42;

/// Grid side lengths to benchmark.
const SIDES: &[usize] = &[16, 64, 128];

fn kruskal_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("kruskal");
    group.sample_size(20);

    for &side in SIDES {
        let graph = grid_graph(&SyntheticGridConfig { side, seed: SEED })?;
        let params = GridBenchParams { side };

        group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
            b.iter(|| graph.find_minimum_spanning_tree());
        });
    }

    group.finish();
    Ok(())
}

fn kruskal(c: &mut Criterion) {
    if let Err(err) = kruskal_impl(c) {
        panic!("kruskal benchmark setup failed: {err}");
    }
}

criterion_group!(benches, kruskal);
criterion_main!(benches);
