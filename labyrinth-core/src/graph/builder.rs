//! Incremental construction of [`Graph`] instances.

use std::hash::Hash;

use crate::{edge::Edge, error::GraphError};

use super::Graph;

/// Collects vertices and edges and validates them once on [`build`].
///
/// [`build`]: GraphBuilder::build
///
/// # Examples
/// ```
/// use labyrinth_core::{GraphBuilder, WeightedEdge};
///
/// let graph = GraphBuilder::new()
///     .with_vertices([1, 2, 3])
///     .with_edge(WeightedEdge::new(1, 2, 4.0))
///     .with_edge(WeightedEdge::new(2, 3, 1.0))
///     .build()
///     .expect("edges reference known vertices");
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_edges(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder<V, E> {
    vertices: Vec<V>,
    edges: Vec<E>,
}

impl<V, E> Default for GraphBuilder<V, E> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<V, E> GraphBuilder<V, E>
where
    V: Eq + Hash,
    E: Edge<Vertex = V>,
{
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex.
    #[must_use]
    pub fn with_vertex(mut self, vertex: V) -> Self {
        self.vertices.push(vertex);
        self
    }

    /// Appends every vertex yielded by `vertices`.
    #[must_use]
    pub fn with_vertices(mut self, vertices: impl IntoIterator<Item = V>) -> Self {
        self.vertices.extend(vertices);
        self
    }

    /// Appends an edge.
    #[must_use]
    pub fn with_edge(mut self, edge: E) -> Self {
        self.edges.push(edge);
        self
    }

    /// Appends every edge yielded by `edges`.
    #[must_use]
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = E>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Returns the number of vertices collected so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges collected so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Validates the collected vertices and edges and constructs a [`Graph`].
    ///
    /// # Errors
    /// Fails under the same conditions as [`Graph::new`].
    pub fn build(self) -> Result<Graph<V, E>, GraphError> {
        Graph::new(self.vertices, self.edges)
    }
}
