pub mod traits;
pub mod dijkstra;

pub use traits::{
    reconstruct_path, DistanceMap, PreviousMap, SearchStats, ShortestPathAlgorithm,
    ShortestPathResult,
};

use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::dijkstra::Dijkstra;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Computes shortest distances and predecessors from `start` to every node.
///
/// Unreachable nodes get `Distance::Infinite` and no predecessor. Fails with
/// `Error::UnknownStartNode` if `start` is not in the graph.
pub fn compute_shortest_paths<N, W, G>(
    graph: &G,
    start: &N,
) -> Result<(DistanceMap<N, W>, PreviousMap<N>)>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
    G: Graph<N, W> + ?Sized,
{
    let result = Dijkstra::new().run(graph, start)?;
    Ok((result.distances, result.previous))
}
