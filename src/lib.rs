//! SSSP Engine - single-source shortest paths over undirected weighted graphs
//!
//! This library computes, from a designated start node, the minimum-weight
//! distance to every reachable node using Dijkstra's algorithm, together with a
//! predecessor map from which concrete shortest paths can be reconstructed.
//!
//! Node identifiers are generic (strings, integers, anything hashable) and edge
//! weights are any totally ordered non-negative numeric type, such as `u32` or
//! `OrderedFloat<f64>`.
//!
//! ```
//! use sssp_engine::{compute_shortest_paths, reconstruct_path, Distance, UndirectedGraph};
//!
//! let edges = [("A", "B", 4u32), ("A", "C", 2), ("B", "C", 1)];
//! let graph = UndirectedGraph::from_edges(edges).unwrap();
//! let (distances, previous) = compute_shortest_paths(&graph, &"A").unwrap();
//!
//! assert_eq!(distances[&"B"], Distance::Finite(3));
//! assert_eq!(reconstruct_path(&previous, &"A", &"B"), vec!["A", "C", "B"]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    compute_shortest_paths, dijkstra::Dijkstra, reconstruct_path, DistanceMap, PreviousMap,
    SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{Distance, Graph, MutableGraph, UndirectedGraph, Weight};
pub use report::ShortestPathTable;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid edge weight {weight} on edge {from} -- {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Start node {0} not found in graph")]
    UnknownStartNode(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
