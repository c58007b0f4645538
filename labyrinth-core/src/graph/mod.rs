//! Weighted, undirected graphs and the algorithms that run over them.
//!
//! A [`Graph`] validates its vertices and edges once at construction and is
//! immutable afterwards. Algorithms borrow the graph and hand back
//! references into its edge list rather than copies.

mod builder;
mod mst;
mod shortest_path;

use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::{edge::Edge, error::GraphError};

pub use self::{builder::GraphBuilder, mst::SpanningTree};

/// A weighted, undirected graph that may contain self loops, parallel edges,
/// and disconnected components.
///
/// # Examples
/// ```
/// use labyrinth_core::{Graph, WeightedEdge};
///
/// let graph = Graph::new(
///     vec!['a', 'b', 'c'],
///     vec![
///         WeightedEdge::new('a', 'b', 1.0),
///         WeightedEdge::new('b', 'c', 2.0),
///         WeightedEdge::new('a', 'c', 5.0),
///     ],
/// )?;
///
/// let tree = graph.find_minimum_spanning_tree()?;
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.total_weight(), 3.0);
///
/// let path = graph.find_shortest_path_between(&'a', &'c')?;
/// assert_eq!(path.len(), 2);
/// # Ok::<(), labyrinth_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, E> {
    vertices: Vec<V>,
    edges: Vec<E>,
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash,
    E: Edge<Vertex = V>,
{
    /// Builds a graph from the given vertices and edges.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] or
    /// [`GraphError::NegativeWeight`] when an edge weight is invalid,
    /// [`GraphError::MissingEndpoint`] when an edge references a vertex absent
    /// from `vertices`, and [`GraphError::WeightOverflow`] when the weights
    /// sum past `f64::MAX`. Every path and tree weight is bounded by that sum.
    pub fn new(vertices: Vec<V>, edges: Vec<E>) -> Result<Self, GraphError> {
        validate(&vertices, &edges)?;
        Ok(Self { vertices, edges })
    }

    /// Builds a graph from vertex and edge sets.
    ///
    /// Set iteration order is unspecified, so tie-breaking between equally
    /// weighted edges may differ between runs.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Graph::new`].
    pub fn from_sets<S, T>(
        vertices: HashSet<V, S>,
        edges: HashSet<E, T>,
    ) -> Result<Self, GraphError>
    where
        S: BuildHasher,
        T: BuildHasher,
    {
        Self::new(vertices.into_iter().collect(), edges.into_iter().collect())
    }

    /// Returns the number of vertices, counting duplicates.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_vertices(&self) -> usize { self.vertices.len() }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_edges(&self) -> usize { self.edges.len() }

    /// Returns the vertices in construction order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[V] { &self.vertices }

    /// Returns the edges in construction order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[E] { &self.edges }

    /// Maps each distinct vertex to the position of its first occurrence.
    fn vertex_index(&self) -> HashMap<&V, usize> {
        let mut index = HashMap::with_capacity(self.vertices.len());
        for (position, vertex) in self.vertices.iter().enumerate() {
            index.entry(vertex).or_insert(position);
        }
        index
    }
}

fn validate<V, E>(vertices: &[V], edges: &[E]) -> Result<(), GraphError>
where
    V: Eq + Hash,
    E: Edge<Vertex = V>,
{
    let known: HashSet<&V> = vertices.iter().collect();
    let mut total = 0.0_f64;
    for (position, edge) in edges.iter().enumerate() {
        let weight = edge.weight();
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight { edge: position });
        }
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight {
                edge: position,
                weight,
            });
        }
        if !known.contains(edge.vertex1()) || !known.contains(edge.vertex2()) {
            return Err(GraphError::MissingEndpoint { edge: position });
        }
        total += weight;
        if !total.is_finite() {
            return Err(GraphError::WeightOverflow { edge: position });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
