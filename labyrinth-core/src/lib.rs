//! Labyrinth core library.
//!
//! Generic graph algorithms over weighted, undirected graphs: Kruskal's
//! minimum spanning tree, Dijkstra's shortest path, and the union-find
//! structure that backs Kruskal's cycle detection.
//!
//! # Tie-breaking
//!
//! Kruskal's algorithm orders edges by weight, then by the edge type's own
//! [`Ord`] implementation, then by insertion position. Dijkstra's algorithm
//! breaks equal tentative distances by the vertex's position in the graph.
//! Both rules keep outputs reproducible for a fixed input order.

mod disjoint_set;
mod edge;
mod error;
mod graph;
mod sort;
#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    edge::{Edge, WeightedEdge, path_weight},
    error::{DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode},
    graph::{Graph, GraphBuilder, SpanningTree},
    sort::smallest_k,
};
