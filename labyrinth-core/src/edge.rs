//! The edge contract consumed by [`crate::Graph`].
//!
//! An edge exposes its two endpoints, a non-negative weight, and a total
//! order used to break ties between equally weighted edges.

use std::cmp::Ordering;

/// Capability contract every edge stored in a [`crate::Graph`] satisfies.
///
/// The vertex type is an associated type so each edge type names exactly one
/// kind of endpoint.
///
/// Edges are undirected: `vertex1` and `vertex2` carry no orientation. The
/// [`Ord`] implementation only has to be a total order; the graph sorts by
/// [`Edge::weight`] first and consults `Ord` for ties.
///
/// # Examples
/// ```
/// use labyrinth_core::{Edge, WeightedEdge};
///
/// let edge = WeightedEdge::new('a', 'b', 2.5);
/// assert_eq!(edge.other_vertex(&'a'), Some(&'b'));
/// assert_eq!(edge.other_vertex(&'z'), None);
/// assert_eq!(edge.weight(), 2.5);
/// ```
pub trait Edge: Ord {
    /// Vertex type joined by this edge.
    type Vertex;

    /// Returns the first endpoint.
    fn vertex1(&self) -> &Self::Vertex;

    /// Returns the second endpoint.
    fn vertex2(&self) -> &Self::Vertex;

    /// Returns the edge weight. Graphs reject negative and non-finite
    /// weights at construction.
    fn weight(&self) -> f64;

    /// Returns the endpoint opposite `vertex`, or `None` when `vertex` is not
    /// an endpoint of this edge. A self loop returns its only endpoint.
    fn other_vertex(&self, vertex: &Self::Vertex) -> Option<&Self::Vertex>
    where
        Self::Vertex: PartialEq,
    {
        if self.vertex1() == vertex {
            Some(self.vertex2())
        } else if self.vertex2() == vertex {
            Some(self.vertex1())
        } else {
            None
        }
    }
}

/// A general-purpose weighted edge.
///
/// Ordered by weight (via [`f64::total_cmp`]), then by endpoints.
#[derive(Clone, Debug)]
pub struct WeightedEdge<V> {
    vertex1: V,
    vertex2: V,
    weight: f64,
}

impl<V> WeightedEdge<V> {
    /// Creates an edge between `vertex1` and `vertex2`.
    #[must_use]
    pub fn new(vertex1: V, vertex2: V, weight: f64) -> Self {
        Self {
            vertex1,
            vertex2,
            weight,
        }
    }
}

impl<V: Ord> Edge for WeightedEdge<V> {
    type Vertex = V;

    #[rustfmt::skip]
    fn vertex1(&self) -> &V { &self.vertex1 }

    #[rustfmt::skip]
    fn vertex2(&self) -> &V { &self.vertex2 }

    #[rustfmt::skip]
    fn weight(&self) -> f64 { self.weight }
}

impl<V: Ord> PartialEq for WeightedEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Ord> Eq for WeightedEdge<V> {}

impl<V: Ord> Ord for WeightedEdge<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.vertex1.cmp(&other.vertex1))
            .then_with(|| self.vertex2.cmp(&other.vertex2))
    }
}

impl<V: Ord> PartialOrd for WeightedEdge<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: std::hash::Hash> std::hash::Hash for WeightedEdge<V> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.vertex1.hash(state);
        self.vertex2.hash(state);
        self.weight.to_bits().hash(state);
    }
}

/// Sums the weights of a path or edge collection.
///
/// # Examples
/// ```
/// use labyrinth_core::{WeightedEdge, path_weight};
///
/// let edges = [WeightedEdge::new(0, 1, 1.5), WeightedEdge::new(1, 2, 2.0)];
/// assert_eq!(path_weight(&edges), 3.5);
/// ```
pub fn path_weight<'a, E>(edges: impl IntoIterator<Item = &'a E>) -> f64
where
    E: Edge + 'a,
{
    edges.into_iter().map(Edge::weight).sum()
}
