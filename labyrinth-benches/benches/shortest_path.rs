//! Dijkstra shortest path benchmarks between opposite grid corners.
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

const SEED: u64 = 42;

const SIDES: &[usize] = &[16, 64, 128];

fn dijkstra_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("dijkstra");
    group.sample_size(20);

    for &side in SIDES {
        let graph = grid_graph(&SyntheticGridConfig { side, seed: SEED })?;
        let params = GridBenchParams { side };
        let far_corner = params.vertices() - 1;

        group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
            b.iter(|| graph.find_shortest_path_between(&0, &far_corner));
        });
    }

    group.finish();
    Ok(())
}

fn dijkstra(c: &mut Criterion) {
    if let Err(err) = dijkstra_impl(c) {
        panic!("dijkstra benchmark setup failed: {err}");
    }
}

criterion_group!(benches, dijkstra);
criterion_main!(benches);
