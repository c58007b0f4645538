//! Benchmark support crate for labyrinth.
//!
//! Provides seeded synthetic graphs and parameter types shared by the
//! Criterion benchmarks for union-find, Kruskal and Dijkstra.

pub mod error;
pub mod params;
pub mod source;
