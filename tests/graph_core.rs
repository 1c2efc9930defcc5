//! Graph data model: vertices, edges, mutation and structural queries.

use indexmap::IndexMap;

use simple_graph::graph::{Adjacency, Graph};
use simple_graph::types::{Edge, GraphError, Vertex, VertexName};

// ==================== Helper ====================

fn v(i: u64) -> Vertex {
    Vertex::new(i)
}

fn e(a: u64, b: u64) -> Edge {
    Edge::new(v(a), v(b))
}

fn triangle() -> Graph {
    let mut graph = Graph::new();
    graph.add_edge(e(0, 1));
    graph.add_edge(e(1, 2));
    graph.add_edge(e(2, 0));
    graph
}

// ==================== Vertex / Edge Tests ====================

#[test]
fn test_vertex_equality_by_name() {
    assert_eq!(v(3), Vertex::new(VertexName::Index(3)));
    assert_ne!(v(3), Vertex::new("3"));
    assert_eq!(Vertex::new("a"), Vertex::from("a"));
}

#[test]
fn test_vertex_display() {
    assert_eq!(v(7).to_string(), "7");
    assert_eq!(Vertex::pair(&v(0), &Vertex::new("x")).to_string(), "(0,x)");
}

#[test]
fn test_edge_is_unordered() {
    assert_eq!(e(1, 2), e(2, 1));
    assert_ne!(e(1, 2), e(1, 3));

    let mut set = std::collections::HashSet::new();
    set.insert(e(1, 2));
    assert!(set.contains(&e(2, 1)));
}

#[test]
fn test_edge_helpers() {
    let edge = e(4, 5);
    assert!(edge.contains(&v(4)));
    assert!(!edge.contains(&v(6)));
    assert_eq!(edge.other(&v(4)), Some(&v(5)));
    assert_eq!(edge.other(&v(6)), None);
    assert!(!edge.is_loop());
    assert!(e(4, 4).is_loop());
}

// ==================== Mutation Tests ====================

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph = Graph::new();
    graph.add_vertex(v(0));
    graph.add_edge(e(0, 1));
    graph.add_vertex(v(0));

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.neighbors(&v(0)).unwrap(), &[v(1)]);
}

#[test]
fn test_add_edge_inserts_endpoints_symmetrically() {
    let mut graph = Graph::new();
    graph.add_edge(e(0, 1));

    assert_eq!(graph.vertices(), vec![v(0), v(1)]);
    assert!(graph.has_edge(&v(0), &v(1)));
    assert!(graph.has_edge(&v(1), &v(0)));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_edge_is_idempotent() {
    let mut graph = triangle();
    let before = graph.clone();

    graph.add_edge(e(0, 1));
    graph.add_edge(e(1, 0));

    assert_eq!(graph, before);
    assert_eq!(graph.neighbors(&v(0)).unwrap(), &[v(1), v(2)]);
}

#[test]
fn test_self_loop_is_dropped() {
    let mut graph = triangle();
    let before = graph.clone();

    graph.add_edge(e(1, 1));
    assert_eq!(graph, before);

    let mut empty = Graph::new();
    empty.add_edge(e(9, 9));
    assert!(empty.is_empty());
}

// ==================== Query Tests ====================

#[test]
fn test_vertices_in_insertion_order() {
    let mut graph = Graph::new();
    graph.add_vertex(v(5));
    graph.add_edge(e(2, 9));
    graph.add_vertex(v(1));

    assert_eq!(graph.vertices(), vec![v(5), v(2), v(9), v(1)]);
    assert_eq!(graph.index_of(&v(9)).unwrap(), 2);
}

#[test]
fn test_edges_each_once() {
    let graph = triangle();
    let edges = graph.edges();

    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0], e(0, 1));
    assert_eq!(edges[1], e(0, 2));
    assert_eq!(edges[2], e(1, 2));
    // First-seen orientation
    assert_eq!(edges[1].a, v(0));
    assert_eq!(edges[1].b, v(2));
}

#[test]
fn test_incident_edges_orientation() {
    // 0:[1,3] 1:[0,2] 2:[1,3] 3:[2,0]
    let mut graph = Graph::new();
    graph.add_edge(e(0, 1));
    graph.add_edge(e(1, 2));
    graph.add_edge(e(2, 3));
    graph.add_edge(e(3, 0));

    let at_zero = graph.incident_edges(&v(0)).unwrap();
    assert_eq!(at_zero.len(), 2);
    assert_eq!((&at_zero[0].a, &at_zero[0].b), (&v(0), &v(1)));
    assert_eq!((&at_zero[1].a, &at_zero[1].b), (&v(0), &v(3)));

    // Vertex 2 sits at index 2, so both neighbor positions (0, 1) are below it.
    let at_two = graph.incident_edges(&v(2)).unwrap();
    assert_eq!((&at_two[0].a, &at_two[0].b), (&v(1), &v(2)));
    assert_eq!((&at_two[1].a, &at_two[1].b), (&v(3), &v(2)));

    // Vertex 1 sits at index 1: first neighbor reversed, second not.
    let at_one = graph.incident_edges(&v(1)).unwrap();
    assert_eq!((&at_one[0].a, &at_one[0].b), (&v(0), &v(1)));
    assert_eq!((&at_one[1].a, &at_one[1].b), (&v(1), &v(2)));
}

#[test]
fn test_missing_vertex_is_reported() {
    let graph = triangle();
    let missing = v(42);

    assert!(matches!(
        graph.incident_edges(&missing),
        Err(GraphError::VertexNotFound(name)) if name == "42"
    ));
    assert!(graph.neighbors(&missing).is_err());
    assert!(graph.degree(&missing).is_err());
    assert!(graph.index_of(&missing).is_err());
    assert!(!graph.contains_vertex(&missing));
    assert!(!graph.has_edge(&missing, &v(0)));
}

#[test]
fn test_degree() {
    let mut graph = triangle();
    graph.add_edge(e(0, 3));
    assert_eq!(graph.degree(&v(0)).unwrap(), 3);
    assert_eq!(graph.degree(&v(3)).unwrap(), 1);
}

#[test]
fn test_name_map() {
    let graph = triangle();
    let names = graph.name_map();
    assert_eq!(names["0"], vec!["1".to_string(), "2".to_string()]);
    assert_eq!(names.keys().cloned().collect::<Vec<_>>(), vec!["0", "1", "2"]);
}

#[test]
fn test_graph_equality_ignores_key_order() {
    let mut a = Graph::new();
    a.add_edge(e(0, 1));

    let mut b = Graph::new();
    b.add_vertex(v(1));
    b.add_edge(e(0, 1));

    assert_eq!(a, b);
}

#[test]
fn test_edges_collect_into_graph() {
    let graph: Graph = vec![e(0, 1), e(1, 2), e(2, 0), e(2, 2)].into_iter().collect();
    assert_eq!(graph, triangle());
}

// ==================== Root Flag Tests ====================

#[test]
fn test_root_flag() {
    let mut graph = triangle();
    assert!(!graph.is_root(&v(1)));

    graph.set_root(&v(1), true).unwrap();
    assert!(graph.is_root(&v(1)));
    assert_eq!(graph.roots(), vec![v(1)]);

    graph.set_root(&v(1), false).unwrap();
    assert!(graph.roots().is_empty());

    assert!(matches!(
        graph.set_root(&v(7), true),
        Err(GraphError::VertexNotFound(_))
    ));
}

// ==================== from_adjacency Tests ====================

#[test]
fn test_from_adjacency_accepts_valid_mapping() {
    let mut map: Adjacency = IndexMap::new();
    map.insert(v(0), vec![v(1)]);
    map.insert(v(1), vec![v(0)]);
    map.insert(v(2), vec![]);

    let graph = Graph::from_adjacency(map).unwrap();
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_from_adjacency_rejects_self_loop() {
    let mut map: Adjacency = IndexMap::new();
    map.insert(v(0), vec![v(0)]);
    assert!(matches!(
        Graph::from_adjacency(map),
        Err(GraphError::SelfLoop(_))
    ));
}

#[test]
fn test_from_adjacency_rejects_duplicate_neighbor() {
    let mut map: Adjacency = IndexMap::new();
    map.insert(v(0), vec![v(1), v(1)]);
    map.insert(v(1), vec![v(0)]);
    assert!(matches!(
        Graph::from_adjacency(map),
        Err(GraphError::DuplicateNeighbor { .. })
    ));
}

#[test]
fn test_from_adjacency_rejects_asymmetry() {
    let mut map: Adjacency = IndexMap::new();
    map.insert(v(0), vec![v(1)]);
    map.insert(v(1), vec![]);
    assert!(matches!(
        Graph::from_adjacency(map),
        Err(GraphError::AsymmetricAdjacency { .. })
    ));
}

#[test]
fn test_from_adjacency_rejects_unknown_neighbor() {
    let mut map: Adjacency = IndexMap::new();
    map.insert(v(0), vec![v(1)]);
    assert!(matches!(
        Graph::from_adjacency(map),
        Err(GraphError::UnknownNeighbor { .. })
    ));
}
