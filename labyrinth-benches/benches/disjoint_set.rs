//! Union-find benchmarks: random unions followed by representative lookups.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

use labyrinth_benches::{error::BenchSetupError, params::UnionBenchParams, source::union_pairs};
use labyrinth_core::DisjointSet;

const SEED: u64 = 42;

const ELEMENT_COUNTS: &[usize] = &[1_000, 10_000, 100_000];

fn singletons(element_count: usize) -> Result<DisjointSet<usize>, BenchSetupError> {
    let mut set = DisjointSet::with_capacity(element_count);
    for element in 0..element_count {
        set.make_set(element)?;
    }
    Ok(set)
}

fn union_then_find_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("disjoint_set");
    group.sample_size(20);

    for &element_count in ELEMENT_COUNTS {
        let pairs = union_pairs(element_count, element_count, SEED)?;
        let seeded = singletons(element_count)?;
        let params = UnionBenchParams { element_count };

        group.bench_with_input(BenchmarkId::from_parameter(params), &pairs, |b, pairs| {
            b.iter_batched(
                || seeded.clone(),
                |mut set| {
                    for (first, second) in pairs {
                        // Pairs already sharing a set are rejected; that is part of the workload.
                        let _ = set.union(first, second);
                    }
                    for element in 0..element_count {
                        let _ = set.find_set(&element);
                    }
                    set
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
    Ok(())
}

fn union_then_find(c: &mut Criterion) {
    if let Err(err) = union_then_find_impl(c) {
        panic!("disjoint_set benchmark setup failed: {err}");
    }
}

criterion_group!(benches, union_then_find);
criterion_main!(benches);
