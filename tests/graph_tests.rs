use ordered_float::OrderedFloat;
use sssp_engine::graph::generators::{generate_grid, generate_random_graph};
use sssp_engine::graph::{Graph, MutableGraph, UndirectedGraph};
use sssp_engine::Error;

#[test]
fn test_add_node_is_idempotent() {
    let mut graph: UndirectedGraph<String, u32> = UndirectedGraph::new();

    assert!(graph.add_node("a".to_string()));
    assert!(!graph.add_node("a".to_string()));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_edges_are_symmetric() {
    let mut graph: UndirectedGraph<u32, u32> = UndirectedGraph::new();
    graph.extend_with_nodes([1, 2, 3]);
    graph.add_edge(&1, &2, 7).unwrap();

    assert_eq!(graph.edge_weight(&1, &2), Some(7));
    assert_eq!(graph.edge_weight(&2, &1), Some(7));
    assert_eq!(graph.edge_count(), 1);

    let neighbors: Vec<(u32, u32)> = graph.neighbors(&2).map(|(v, w)| (*v, w)).collect();
    assert_eq!(neighbors, vec![(1, 7)]);
    assert_eq!(graph.neighbors(&3).count(), 0);
    assert_eq!(graph.neighbors(&42).count(), 0);
}

#[test]
fn test_add_edge_requires_known_nodes() {
    let mut graph: UndirectedGraph<&str, u32> = UndirectedGraph::new();
    graph.add_node("a");

    let err = graph.add_edge(&"a", &"b", 1).unwrap_err();
    assert_eq!(err, Error::UnknownNode("\"b\"".to_string()));
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_negative_float_weight_rejected() {
    let mut graph: UndirectedGraph<&str, OrderedFloat<f64>> = UndirectedGraph::new();
    graph.extend_with_nodes(["a", "b"]);

    let err = graph.add_edge(&"a", &"b", OrderedFloat(-0.5)).unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { .. }));
    assert!(err.to_string().contains("-0.5"));
}

#[test]
fn test_from_edges_rejects_negative_weight() {
    let result = UndirectedGraph::from_edges([("a", "b", 1i64), ("b", "c", -3)]);
    assert!(matches!(result, Err(Error::InvalidWeight { .. })));
}

#[test]
fn test_readding_edge_replaces_weight() {
    let mut graph = UndirectedGraph::from_edges([("a", "b", 5u32)]).unwrap();
    graph.add_edge(&"b", &"a", 2).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(&"a", &"b"), Some(2));
    assert_eq!(graph.neighbors(&"a").count(), 1);
}

#[test]
fn test_remove_edge() {
    let mut graph = UndirectedGraph::from_edges([("a", "b", 5u32), ("b", "c", 1)]).unwrap();

    assert!(graph.remove_edge(&"b", &"a"));
    assert!(!graph.remove_edge(&"a", &"b"));
    assert!(!graph.has_edge(&"a", &"b"));
    assert!(graph.has_edge(&"c", &"b"));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_nodes_keep_registration_order() {
    let graph = UndirectedGraph::from_edges([("c", "a", 1u32), ("b", "c", 1)]).unwrap();
    let nodes: Vec<&str> = graph.nodes().copied().collect();

    assert_eq!(nodes, vec!["c", "a", "b"]);
}

#[test]
fn test_generators_are_reproducible() {
    let first = generate_random_graph(200, 3.0, 11);
    let second = generate_random_graph(200, 3.0, 11);

    assert_eq!(first.node_count(), 200);
    assert_eq!(first.edge_count(), second.edge_count());
    for u in 0..200 {
        let a: Vec<_> = first.neighbors(&u).map(|(v, w)| (*v, w)).collect();
        let b: Vec<_> = second.neighbors(&u).map(|(v, w)| (*v, w)).collect();
        assert_eq!(a, b);
    }

    let grid = generate_grid(4, 3);
    assert_eq!(grid.node_count(), 12);
    assert_eq!(grid.edge_count(), 3 * 3 + 4 * 2);
}

#[test]
fn test_nan_weight_rejected() {
    let mut graph: UndirectedGraph<&str, OrderedFloat<f64>> = UndirectedGraph::new();
    graph.extend_with_nodes(["a", "b"]);

    let err = graph.add_edge(&"a", &"b", OrderedFloat(f64::NAN)).unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { .. }));
    assert!(!graph.has_edge(&"a", &"b"));
}

#[test]
fn test_from_edges_rejects_nan_weight() {
    let result = UndirectedGraph::from_edges([
        ("a", "b", OrderedFloat(f64::NAN)),
        ("b", "c", OrderedFloat(1.0)),
    ]);
    assert!(matches!(result, Err(Error::InvalidWeight { .. })));
}

#[test]
fn test_infinite_float_weight_accepted() {
    let graph = UndirectedGraph::from_edges([("a", "b", OrderedFloat(f64::INFINITY))]).unwrap();
    assert_eq!(graph.edge_weight(&"a", &"b"), Some(OrderedFloat(f64::INFINITY)));
}
