//! Minimum spanning tree construction (Kruskal's algorithm).

use std::{cmp::Ordering, collections::HashSet, hash::Hash};

use tracing::{debug, instrument, warn};

use crate::{
    disjoint_set::DisjointSet,
    edge::{Edge, path_weight},
    error::{DisjointSetError, GraphError},
    sort::smallest_k,
};

use super::Graph;

/// Edges of a minimum spanning tree, borrowed from the source [`Graph`].
///
/// Edges are listed in the order Kruskal's algorithm accepted them, which is
/// ascending weight.
#[derive(Clone, Debug)]
pub struct SpanningTree<'g, E> {
    edges: Vec<&'g E>,
}

impl<'g, E: Edge> SpanningTree<'g, E> {
    /// Returns the tree edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[&'g E] { &self.edges }

    /// Returns the number of tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when the tree has no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns the summed weight of the tree edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        path_weight(self.edges.iter().copied())
    }

    /// Returns `true` when an edge equal to `edge` belongs to the tree.
    #[must_use]
    pub fn contains(&self, edge: &E) -> bool {
        self.edges.iter().any(|candidate| *candidate == edge)
    }

    /// Consumes the tree, returning its edges in acceptance order.
    #[must_use]
    pub fn into_edges(self) -> Vec<&'g E> {
        self.edges
    }

    /// Consumes the tree, returning its edges as a set.
    #[must_use]
    pub fn into_set(self) -> HashSet<&'g E>
    where
        E: Hash,
    {
        self.edges.into_iter().collect()
    }
}

/// Sort key ordering edges by weight, then by the edge's own [`Ord`].
struct KruskalKey<'g, E> {
    edge: &'g E,
}

impl<E: Edge> PartialEq for KruskalKey<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<E: Edge> Eq for KruskalKey<'_, E> {}

impl<E: Edge> Ord for KruskalKey<'_, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.edge
            .weight()
            .total_cmp(&other.edge.weight())
            .then_with(|| self.edge.cmp(other.edge))
    }
}

impl<E: Edge> PartialOrd for KruskalKey<'_, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash,
    E: Edge<Vertex = V>,
{
    /// Returns the edges of a minimum spanning tree of this graph.
    ///
    /// Edges are considered by ascending weight, ties broken by the edge
    /// type's [`Ord`] and then by insertion order, so the result is
    /// deterministic for a fixed input. When several minimum spanning trees
    /// exist any one of them may be returned. Graphs with fewer than two
    /// distinct vertices yield an empty tree.
    ///
    /// # Errors
    /// Returns [`GraphError::DisconnectedGraph`] when the edges cannot
    /// connect every vertex.
    #[instrument(
        name = "graph.minimum_spanning_tree",
        level = "debug",
        err,
        skip(self),
        fields(vertices = self.vertices.len(), edges = self.edges.len()),
    )]
    pub fn find_minimum_spanning_tree(&self) -> Result<SpanningTree<'_, E>, GraphError> {
        let mut forest: DisjointSet<&V> = DisjointSet::with_capacity(self.vertices.len());
        for vertex in &self.vertices {
            if !forest.contains(vertex) {
                forest.make_set(vertex)?;
            }
        }

        let target = forest.len().saturating_sub(1);
        let mut tree = Vec::with_capacity(target);
        if target == 0 {
            return Ok(SpanningTree { edges: tree });
        }

        let keys: Vec<KruskalKey<'_, E>> =
            self.edges.iter().map(|edge| KruskalKey { edge }).collect();
        for key in smallest_k(keys.len(), &keys) {
            let edge = key.edge;
            match forest.union(edge.vertex1(), edge.vertex2()) {
                Ok(_) => tree.push(edge),
                Err(DisjointSetError::SameSet { .. }) => continue,
                Err(error) => return Err(error.into()),
            }
            if tree.len() == target {
                break;
            }
        }

        if tree.len() < target {
            warn!(
                vertices = forest.len(),
                components = forest.set_count(),
                "graph is disconnected; no spanning tree exists"
            );
            return Err(GraphError::DisconnectedGraph {
                vertices: forest.len(),
                components: forest.set_count(),
            });
        }

        let tree = SpanningTree { edges: tree };
        debug!(
            edges = tree.len(),
            total_weight = tree.total_weight(),
            "minimum spanning tree complete"
        );
        Ok(tree)
    }
}
