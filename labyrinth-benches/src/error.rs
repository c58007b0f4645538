//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use labyrinth_core::{DisjointSetError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building the synthetic graph failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// Seeding a disjoint set failed.
    #[error("disjoint set setup failed: {0}")]
    DisjointSet(#[from] DisjointSetError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
