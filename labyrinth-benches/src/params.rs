//! Benchmark parameter types.

use std::fmt;

/// Parameters for a benchmark over a square grid graph.
#[derive(Clone, Copy, Debug)]
pub struct GridBenchParams {
    /// Number of vertices along each side of the grid.
    pub side: usize,
}

impl GridBenchParams {
    /// Total number of vertices in the grid.
    #[must_use]
    pub const fn vertices(self) -> usize {
        self.side * self.side
    }
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "side={},n={}", self.side, self.vertices())
    }
}

/// Parameters for a union-find benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct UnionBenchParams {
    /// Number of singleton sets created before merging.
    pub element_count: usize,
}

impl fmt::Display for UnionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.element_count)
    }
}
