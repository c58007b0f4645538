//! Unit and property tests for graph construction, Kruskal and Dijkstra.

use std::collections::HashSet;

use labyrinth_test_support::tracing::RecordingLayer;
use proptest::prelude::*;
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use crate::{
    DisjointSet, Edge, GraphBuilder, GraphError, WeightedEdge, path_weight,
    test_utils::suite_proptest_config,
};

use super::Graph;

type TestGraph = Graph<char, WeightedEdge<char>>;

fn edge(left: char, right: char, weight: f64) -> WeightedEdge<char> {
    WeightedEdge::new(left, right, weight)
}

#[fixture]
fn triangle() -> TestGraph {
    Graph::new(
        vec!['A', 'B', 'C'],
        vec![edge('A', 'B', 1.0), edge('B', 'C', 2.0), edge('A', 'C', 5.0)],
    )
    .expect("triangle is valid")
}

#[fixture]
fn square() -> TestGraph {
    Graph::new(
        vec!['A', 'B', 'C', 'D'],
        vec![
            edge('A', 'B', 1.0),
            edge('B', 'C', 1.0),
            edge('C', 'D', 1.0),
            edge('D', 'A', 1.0),
        ],
    )
    .expect("square is valid")
}

#[fixture]
fn two_islands() -> TestGraph {
    Graph::new(
        vec!['A', 'B', 'C', 'D'],
        vec![edge('A', 'B', 1.0), edge('C', 'D', 2.0)],
    )
    .expect("islands are valid")
}

/// Walks `path` from `start`, returning the vertex it ends on.
fn walk(start: char, path: &[&WeightedEdge<char>]) -> char {
    path.iter().fold(start, |current, step| {
        *step
            .other_vertex(&current)
            .expect("each edge must touch the current vertex")
    })
}

fn is_acyclic(vertices: &[char], edges: &[&WeightedEdge<char>]) -> bool {
    let mut forest = DisjointSet::new();
    for vertex in vertices {
        forest.make_set(*vertex).expect("vertices are distinct");
    }
    edges
        .iter()
        .all(|edge| forest.union(edge.vertex1(), edge.vertex2()).is_ok())
}

// ========================================================================
// Construction
// ========================================================================

#[rstest]
fn reports_vertex_and_edge_counts(triangle: TestGraph) {
    assert_eq!(triangle.num_vertices(), 3);
    assert_eq!(triangle.num_edges(), 3);
    assert_eq!(triangle.vertices(), &['A', 'B', 'C']);
}

#[rstest]
#[case::negative(-1.0, GraphError::NegativeWeight { edge: 1, weight: -1.0 })]
#[case::nan(f64::NAN, GraphError::NonFiniteWeight { edge: 1 })]
#[case::infinite(f64::INFINITY, GraphError::NonFiniteWeight { edge: 1 })]
fn rejects_invalid_weights(#[case] weight: f64, #[case] expected: GraphError) {
    let err = Graph::new(
        vec!['A', 'B'],
        vec![edge('A', 'B', 1.0), edge('B', 'A', weight)],
    )
    .expect_err("invalid weight must be rejected");
    assert_eq!(err, expected);
    assert!(err.is_construction());
}

#[test]
fn rejects_weights_whose_sum_overflows() {
    let err = Graph::new(
        vec![0, 1, 2],
        vec![
            WeightedEdge::new(0, 1, 1e308),
            WeightedEdge::new(1, 2, 1e308),
        ],
    )
    .expect_err("summed weights overflow f64");
    assert_eq!(err, GraphError::WeightOverflow { edge: 1 });
    assert!(err.is_construction());
}

#[test]
fn huge_finite_weights_still_route_and_span() {
    let graph = Graph::new(
        vec![0, 1, 2],
        vec![
            WeightedEdge::new(0, 1, 8e307),
            WeightedEdge::new(1, 2, 8e307),
        ],
    )
    .expect("summed weights stay finite");
    let path = graph
        .find_shortest_path_between(&0, &2)
        .expect("2 is reachable through 1");
    assert_eq!(path.len(), 2);
    assert_eq!(path_weight(path.iter().copied()), 1.6e308);
    let tree = graph.find_minimum_spanning_tree().expect("graph is connected");
    assert!(tree.total_weight().is_finite());
}

#[rstest]
#[case::first_endpoint(edge('Z', 'A', 1.0))]
#[case::second_endpoint(edge('A', 'Z', 1.0))]
fn rejects_edges_with_unknown_endpoints(#[case] stray: WeightedEdge<char>) {
    let err = Graph::new(vec!['A', 'B'], vec![stray]).expect_err("stray edge must be rejected");
    assert_eq!(err, GraphError::MissingEndpoint { edge: 0 });
    assert!(err.is_construction());
}

#[test]
fn accepts_zero_weights_and_self_loops() {
    let graph = Graph::new(vec!['A'], vec![edge('A', 'A', 0.0)]).expect("self loop is valid");
    assert_eq!(graph.num_edges(), 1);
}

#[test]
fn builds_from_sets() {
    let vertices: HashSet<char> = ['A', 'B', 'C'].into_iter().collect();
    let edges: HashSet<WeightedEdge<char>> = [edge('A', 'B', 1.0), edge('B', 'C', 2.0)]
        .into_iter()
        .collect();
    let graph = Graph::from_sets(vertices, edges).expect("sets are valid");
    assert_eq!(graph.num_vertices(), 3);
    assert_eq!(graph.num_edges(), 2);
    let tree = graph.find_minimum_spanning_tree().expect("graph is connected");
    assert_eq!(tree.total_weight(), 3.0);
}

#[test]
fn builder_validates_on_build() {
    let builder = GraphBuilder::new()
        .with_vertices(['A', 'B'])
        .with_edge(edge('A', 'C', 1.0));
    assert_eq!(builder.vertex_count(), 2);
    assert_eq!(builder.edge_count(), 1);
    let err = builder.build().expect_err("C is not a vertex");
    assert_eq!(err, GraphError::MissingEndpoint { edge: 0 });

    let graph = GraphBuilder::new()
        .with_vertex('A')
        .with_vertex('B')
        .with_edges([edge('A', 'B', 3.0)])
        .build()
        .expect("edges reference known vertices");
    assert_eq!(graph.num_edges(), 1);
}

// ========================================================================
// Minimum spanning tree
// ========================================================================

#[rstest]
fn triangle_mst_drops_heaviest_edge(triangle: TestGraph) {
    let tree = triangle.find_minimum_spanning_tree().expect("triangle is connected");
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.total_weight(), 3.0);
    assert!(tree.contains(&edge('A', 'B', 1.0)));
    assert!(tree.contains(&edge('B', 'C', 2.0)));
    assert!(!tree.contains(&edge('A', 'C', 5.0)));

    let set = tree.into_set();
    assert!(set.contains(&edge('A', 'B', 1.0)));
    assert_eq!(set.len(), 2);
}

#[rstest]
fn square_mst_keeps_three_edges_without_cycles(square: TestGraph) {
    let tree = square.find_minimum_spanning_tree().expect("square is connected");
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.total_weight(), 3.0);
    assert!(is_acyclic(square.vertices(), tree.edges()));
}

#[rstest]
fn mst_is_deterministic_for_fixed_input(square: TestGraph) {
    let first = square
        .find_minimum_spanning_tree()
        .expect("square is connected")
        .into_edges();
    for _ in 0..10 {
        let again = square
            .find_minimum_spanning_tree()
            .expect("square is connected")
            .into_edges();
        assert_eq!(again, first);
    }
}

#[test]
fn mst_edges_come_back_in_ascending_weight() {
    let graph = Graph::new(
        vec![1_u8, 2, 3, 4],
        vec![
            WeightedEdge::new(3, 4, 3.0),
            WeightedEdge::new(1, 2, 1.0),
            WeightedEdge::new(2, 3, 2.0),
            WeightedEdge::new(1, 4, 10.0),
        ],
    )
    .expect("graph is valid");
    let tree = graph.find_minimum_spanning_tree().expect("graph is connected");
    let weights: Vec<f64> = tree.edges().iter().map(|edge| edge.weight()).collect();
    assert_eq!(weights, vec![1.0, 2.0, 3.0]);
}

#[rstest]
#[case::empty(vec![], vec![])]
#[case::single_vertex(vec!['A'], vec![])]
#[case::single_self_loop(vec!['A'], vec![edge('A', 'A', 4.0)])]
fn trivial_graphs_yield_empty_trees(
    #[case] vertices: Vec<char>,
    #[case] edges: Vec<WeightedEdge<char>>,
) {
    let graph = Graph::new(vertices, edges).expect("graph is valid");
    let tree = graph.find_minimum_spanning_tree().expect("trivial graphs span");
    assert!(tree.is_empty());
    assert_eq!(tree.total_weight(), 0.0);
}

#[test]
fn single_edge_graph_uses_its_edge() {
    let graph = Graph::new(vec!['A', 'B'], vec![edge('A', 'B', 7.0)]).expect("graph is valid");
    let tree = graph.find_minimum_spanning_tree().expect("graph is connected");
    assert_eq!(tree.edges(), &[&edge('A', 'B', 7.0)]);
}

#[test]
fn single_edge_cannot_span_three_vertices() {
    let graph =
        Graph::new(vec!['A', 'B', 'C'], vec![edge('A', 'B', 7.0)]).expect("graph is valid");
    let err = graph
        .find_minimum_spanning_tree()
        .expect_err("C is unreachable");
    assert_eq!(
        err,
        GraphError::DisconnectedGraph {
            vertices: 3,
            components: 2
        }
    );
}

#[rstest]
fn disconnected_graph_has_no_spanning_tree(two_islands: TestGraph) {
    let err = two_islands
        .find_minimum_spanning_tree()
        .expect_err("islands cannot be spanned");
    assert_eq!(
        err,
        GraphError::DisconnectedGraph {
            vertices: 4,
            components: 2
        }
    );
}

#[test]
fn duplicate_vertices_are_tolerated() {
    let graph = Graph::new(
        vec!['A', 'B', 'A'],
        vec![edge('A', 'B', 2.0), edge('B', 'A', 1.0)],
    )
    .expect("graph is valid");
    let tree = graph.find_minimum_spanning_tree().expect("graph is connected");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.total_weight(), 1.0);
}

#[test]
fn parallel_edges_pick_the_lightest() {
    let graph = Graph::new(
        vec!['A', 'B'],
        vec![edge('A', 'B', 4.0), edge('A', 'B', 2.0), edge('B', 'A', 3.0)],
    )
    .expect("graph is valid");
    let tree = graph.find_minimum_spanning_tree().expect("graph is connected");
    assert_eq!(tree.edges(), &[&edge('A', 'B', 2.0)]);
    let path = graph
        .find_shortest_path_between(&'B', &'A')
        .expect("A is reachable");
    assert_eq!(path, vec![&edge('A', 'B', 2.0)]);
}

#[rstest]
fn mst_emits_warning_when_disconnected(two_islands: TestGraph) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, || {
        let _ = two_islands.find_minimum_spanning_tree();
    });

    let events = layer.events();
    assert!(events.iter().any(|event| {
        event.level == Level::WARN
            && event
                .fields
                .get("components")
                .is_some_and(|components| components == "2")
    }));
    assert!(
        layer
            .spans()
            .iter()
            .any(|span| span.name == "graph.minimum_spanning_tree"
                && span.fields.get("vertices").is_some_and(|count| count == "4"))
    );
}

// ========================================================================
// Shortest path
// ========================================================================

#[rstest]
fn square_shortest_path_takes_two_unit_edges(square: TestGraph) {
    let path = square
        .find_shortest_path_between(&'A', &'C')
        .expect("C is reachable");
    assert_eq!(path.len(), 2);
    assert_eq!(path_weight(path.iter().copied()), 2.0);
    assert_eq!(walk('A', &path), 'C');
}

#[rstest]
fn triangle_shortest_path_prefers_lighter_detour(triangle: TestGraph) {
    let path = triangle
        .find_shortest_path_between(&'A', &'C')
        .expect("C is reachable");
    assert_eq!(path, vec![&edge('A', 'B', 1.0), &edge('B', 'C', 2.0)]);
}

#[rstest]
fn path_runs_from_start_to_end(triangle: TestGraph) {
    let path = triangle
        .find_shortest_path_between(&'C', &'A')
        .expect("A is reachable");
    assert_eq!(path.first().and_then(|first| first.other_vertex(&'C')), Some(&'B'));
    assert_eq!(walk('C', &path), 'A');
}

#[rstest]
#[case('A')]
#[case('B')]
#[case('C')]
fn path_to_self_is_empty(triangle: TestGraph, #[case] vertex: char) {
    let path = triangle
        .find_shortest_path_between(&vertex, &vertex)
        .expect("a vertex reaches itself");
    assert!(path.is_empty());
}

#[rstest]
fn unreachable_target_reports_no_path(two_islands: TestGraph) {
    let err = two_islands
        .find_shortest_path_between(&'A', &'D')
        .expect_err("D is on another island");
    assert_eq!(err, GraphError::NoPathExists);
}

#[rstest]
#[case::unknown_start('Z', 'A')]
#[case::unknown_end('A', 'Z')]
fn unknown_vertices_are_rejected(triangle: TestGraph, #[case] start: char, #[case] end: char) {
    let err = triangle
        .find_shortest_path_between(&start, &end)
        .expect_err("Z is not in the graph");
    assert_eq!(err, GraphError::UnknownVertex);
}

#[test]
fn self_loops_and_zero_weights_do_not_trap_the_search() {
    let graph = Graph::new(
        vec!['A', 'B', 'C'],
        vec![
            edge('A', 'A', 0.0),
            edge('A', 'B', 0.0),
            edge('B', 'B', 1.0),
            edge('B', 'C', 3.0),
        ],
    )
    .expect("graph is valid");
    let path = graph
        .find_shortest_path_between(&'A', &'C')
        .expect("C is reachable");
    assert_eq!(path, vec![&edge('A', 'B', 0.0), &edge('B', 'C', 3.0)]);
}

// ========================================================================
// Oracles
// ========================================================================

type Fixture = (usize, Vec<(usize, usize, u8)>);

fn build(fixture: &Fixture) -> Graph<usize, WeightedEdge<usize>> {
    let (node_count, raw) = fixture;
    Graph::new(
        (0..*node_count).collect(),
        raw.iter()
            .map(|(left, right, weight)| {
                WeightedEdge::new(left % node_count, right % node_count, f64::from(*weight))
            })
            .collect(),
    )
    .expect("generated graphs are valid")
}

fn fixture_strategy() -> impl Strategy<Value = Fixture> {
    (1_usize..=6).prop_flat_map(|node_count| {
        (
            Just(node_count),
            prop::collection::vec((0_usize..6, 0_usize..6, 0_u8..20), 0..10),
        )
    })
}

/// Minimum spanning tree weight by exhaustive search, or `None` when no
/// spanning tree exists.
fn brute_force_mst_weight(graph: &Graph<usize, WeightedEdge<usize>>) -> Option<f64> {
    let node_count = graph.num_vertices();
    let edges = graph.edges();
    let needed = node_count.saturating_sub(1);
    if needed == 0 {
        return Some(0.0);
    }

    let mut best: Option<f64> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != needed {
            continue;
        }
        let chosen: Vec<&WeightedEdge<usize>> = edges
            .iter()
            .enumerate()
            .filter(|(position, _)| mask & (1 << position) != 0)
            .map(|(_, edge)| edge)
            .collect();
        let mut forest = DisjointSet::new();
        for vertex in 0..node_count {
            forest.make_set(vertex).expect("vertices are distinct");
        }
        let spans = chosen
            .iter()
            .all(|edge| forest.union(edge.vertex1(), edge.vertex2()).is_ok());
        if spans {
            let weight = path_weight(chosen.iter().copied());
            best = Some(best.map_or(weight, |current| current.min(weight)));
        }
    }
    best
}

fn floyd_warshall(graph: &Graph<usize, WeightedEdge<usize>>) -> Vec<Vec<f64>> {
    let n = graph.num_vertices();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (vertex, row) in dist.iter_mut().enumerate() {
        row[vertex] = 0.0;
    }
    for edge in graph.edges() {
        let (left, right) = (*edge.vertex1(), *edge.vertex2());
        dist[left][right] = dist[left][right].min(edge.weight());
        dist[right][left] = dist[right][left].min(edge.weight());
    }
    for via in 0..n {
        for from in 0..n {
            for to in 0..n {
                let through = dist[from][via] + dist[via][to];
                if through < dist[from][to] {
                    dist[from][to] = through;
                }
            }
        }
    }
    dist
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn mst_matches_brute_force(fixture in fixture_strategy()) {
        let graph = build(&fixture);
        match (graph.find_minimum_spanning_tree(), brute_force_mst_weight(&graph)) {
            (Ok(tree), Some(expected)) => {
                prop_assert_eq!(tree.len(), graph.num_vertices() - 1);
                prop_assert_eq!(tree.total_weight(), expected);
                let mut forest = DisjointSet::new();
                for vertex in 0..graph.num_vertices() {
                    forest.make_set(vertex).expect("vertices are distinct");
                }
                for edge in tree.edges() {
                    prop_assert!(forest.union(edge.vertex1(), edge.vertex2()).is_ok());
                }
            }
            (Err(GraphError::DisconnectedGraph { vertices, components }), None) => {
                prop_assert_eq!(vertices, graph.num_vertices());
                prop_assert!(components > 1);
            }
            (actual, expected) => {
                prop_assert!(false, "mismatch: {actual:?} vs oracle {expected:?}");
            }
        }
    }

    #[test]
    fn shortest_paths_match_floyd_warshall(fixture in fixture_strategy()) {
        let graph = build(&fixture);
        let dist = floyd_warshall(&graph);
        for start in 0..graph.num_vertices() {
            for end in 0..graph.num_vertices() {
                let result = graph.find_shortest_path_between(&start, &end);
                let expected = dist[start][end];
                if expected.is_infinite() {
                    prop_assert_eq!(result, Err(GraphError::NoPathExists));
                    continue;
                }
                let path = result.expect("oracle found a path");
                prop_assert_eq!(path_weight(path.iter().copied()), expected);
                let mut current = start;
                for step in &path {
                    current = *step
                        .other_vertex(&current)
                        .expect("path edges must be contiguous");
                }
                prop_assert_eq!(current, end);
                if start == end {
                    prop_assert!(path.is_empty());
                }
            }
        }
    }
}
