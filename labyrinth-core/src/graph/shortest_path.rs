//! Single-pair shortest paths (Dijkstra's algorithm).
//!
//! The frontier is a binary heap keyed by tentative distance. Decreasing a
//! distance pushes a fresh entry; stale entries are skipped when popped
//! because their vertex has already been finalised.

use std::{cmp::Ordering, collections::BinaryHeap, hash::Hash};

use tracing::{debug, instrument};

use crate::{edge::Edge, error::GraphError};

use super::Graph;

/// An edge incident to a vertex, recorded once per endpoint role.
#[derive(Clone, Copy, Debug)]
struct Incidence {
    edge: usize,
    other: usize,
}

/// The edge that last improved a vertex's distance, and where it came from.
#[derive(Clone, Copy, Debug)]
struct Step {
    edge: usize,
    from: usize,
}

/// Frontier entry ordered so that [`BinaryHeap`] pops the smallest distance
/// first, breaking ties by the lower vertex position.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    distance: f64,
    vertex: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash,
    E: Edge<Vertex = V>,
{
    /// Returns the edges of a minimum-weight path from `start` to `end`.
    ///
    /// The first edge leaves `start` and the last edge enters `end`. The path
    /// is empty when `start == end`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if either vertex is absent from
    /// the graph, and [`GraphError::NoPathExists`] if `end` is unreachable
    /// from `start`.
    #[instrument(
        name = "graph.shortest_path",
        level = "debug",
        err,
        skip_all,
        fields(vertices = self.vertices.len(), edges = self.edges.len()),
    )]
    pub fn find_shortest_path_between(&self, start: &V, end: &V) -> Result<Vec<&E>, GraphError> {
        let index = self.vertex_index();
        let source = *index.get(start).ok_or(GraphError::UnknownVertex)?;
        let target = *index.get(end).ok_or(GraphError::UnknownVertex)?;
        if source == target {
            return Ok(Vec::new());
        }

        let adjacency = self.adjacency(|vertex| index.get(vertex).copied());
        let mut distances = vec![f64::INFINITY; self.vertices.len()];
        let mut steps: Vec<Option<Step>> = vec![None; self.vertices.len()];
        let mut finalised = vec![false; self.vertices.len()];
        let mut frontier = BinaryHeap::new();

        distances[source] = 0.0;
        frontier.push(FrontierEntry {
            distance: 0.0,
            vertex: source,
        });

        while let Some(FrontierEntry { distance, vertex }) = frontier.pop() {
            if finalised[vertex] {
                continue;
            }
            if vertex == target {
                let path = self.reconstruct_path(&steps, target);
                debug!(edges = path.len(), distance, "shortest path found");
                return Ok(path);
            }
            finalised[vertex] = true;

            for incidence in &adjacency[vertex] {
                if finalised[incidence.other] {
                    continue;
                }
                let candidate = distance + self.edges[incidence.edge].weight();
                if candidate < distances[incidence.other] {
                    distances[incidence.other] = candidate;
                    steps[incidence.other] = Some(Step {
                        edge: incidence.edge,
                        from: vertex,
                    });
                    frontier.push(FrontierEntry {
                        distance: candidate,
                        vertex: incidence.other,
                    });
                }
            }
        }

        debug!("frontier exhausted before reaching the target");
        Err(GraphError::NoPathExists)
    }

    /// Builds, per vertex position, the list of incident edges. Self loops
    /// appear twice and parallel edges are all retained.
    fn adjacency(&self, position_of: impl Fn(&V) -> Option<usize>) -> Vec<Vec<Incidence>> {
        let mut adjacency = vec![Vec::new(); self.vertices.len()];
        for (edge, candidate) in self.edges.iter().enumerate() {
            let (Some(left), Some(right)) = (
                position_of(candidate.vertex1()),
                position_of(candidate.vertex2()),
            ) else {
                continue;
            };
            adjacency[left].push(Incidence { edge, other: right });
            adjacency[right].push(Incidence { edge, other: left });
        }
        adjacency
    }

    fn reconstruct_path(&self, steps: &[Option<Step>], target: usize) -> Vec<&E> {
        let mut path = Vec::new();
        let mut current = target;
        while let Some(step) = steps[current] {
            path.push(&self.edges[step.edge]);
            current = step.from;
        }
        path.reverse();
        path
    }
}
