//! Seeded synthetic inputs for the benchmarks.

use labyrinth_core::{Graph, WeightedEdge};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for a randomly weighted square grid.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGridConfig {
    /// Number of vertices along each side.
    pub side: usize,
    /// Seed for the edge weights.
    pub seed: u64,
}

/// Builds a `side` x `side` grid graph whose vertices are numbered row by
/// row and whose edges carry weights drawn uniformly from `[1, 100)`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `side` is zero.
pub fn grid_graph(
    config: &SyntheticGridConfig,
) -> Result<Graph<usize, WeightedEdge<usize>>, BenchSetupError> {
    let side = config.side;
    if side == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "grid side",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges = Vec::with_capacity(2 * side * (side - 1));
    for row in 0..side {
        for col in 0..side {
            let here = row * side + col;
            if col + 1 < side {
                edges.push(WeightedEdge::new(here, here + 1, rng.gen_range(1.0..100.0)));
            }
            if row + 1 < side {
                edges.push(WeightedEdge::new(here, here + side, rng.gen_range(1.0..100.0)));
            }
        }
    }
    Ok(Graph::new((0..side * side).collect(), edges)?)
}

/// Draws `count` random `(a, b)` pairs over `0..element_count`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `element_count` is zero.
pub fn union_pairs(
    element_count: usize,
    count: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>, BenchSetupError> {
    if element_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "element count",
        });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| (rng.gen_range(0..element_count), rng.gen_range(0..element_count)))
        .collect())
}
