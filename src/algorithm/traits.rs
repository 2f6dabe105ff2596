use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::{Distance, Graph, Weight};
use crate::Result;

/// Shortest known distance from the start node, for every node of the graph
pub type DistanceMap<N, W> = HashMap<N, Distance<W>>;

/// Predecessor on a shortest path from the start node, for every node of the
/// graph. `None` for the start node itself and for unreachable nodes.
pub type PreviousMap<N> = HashMap<N, Option<N>>;

/// Counters collected during one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes popped with their final distance
    pub nodes_settled: usize,
    /// Adjacency entries examined from settled nodes
    pub edges_scanned: usize,
    /// Successful relaxations (distance improved)
    pub relaxations: usize,
    /// Entries pushed onto the priority queue
    pub heap_pushes: usize,
    /// Queue entries discarded because a shorter distance was already known
    pub stale_entries_skipped: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Start node
    pub source: N,

    /// Distances from source to each node
    pub distances: DistanceMap<N, W>,

    /// Predecessor nodes in the shortest path tree
    pub previous: PreviousMap<N>,

    /// Work counters for this run
    pub stats: SearchStats,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Distance to a node; `Infinite` for unreachable or unknown nodes
    pub fn distance(&self, node: &N) -> Distance<W> {
        self.distances
            .get(node)
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).is_finite()
    }

    /// Number of nodes reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Shortest path from the source to `target`, empty if there is none
    pub fn path_to(&self, target: &N) -> Vec<N> {
        reconstruct_path(&self.previous, &self.source, target)
    }
}

/// Rebuilds the path `start -> end` by walking `previous` backward from `end`.
///
/// Returns an empty vector when the walk does not end at `start`, which is the
/// case for unreachable nodes. Runs in time linear in the path length and never
/// recomputes distances.
pub fn reconstruct_path<N>(previous: &PreviousMap<N>, start: &N, end: &N) -> Vec<N>
where
    N: Clone + Eq + Hash + Debug,
{
    if !previous.contains_key(end) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = Some(end.clone());

    while let Some(node) = current {
        // More steps than nodes means the map has a cycle
        if path.len() >= previous.len() {
            warn!(
                "Cycle detected in predecessor map while reconstructing path to {:?}",
                end
            );
            return Vec::new();
        }
        current = previous.get(&node).cloned().flatten();
        path.push(node);
    }

    path.reverse();

    if path.first() == Some(start) {
        path
    } else {
        Vec::new()
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
    G: Graph<N, W> + ?Sized,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes.
    /// Empty if the target is unreachable.
    fn get_path(&self, result: &ShortestPathResult<N, W>, target: &N) -> Vec<N> {
        result.path_to(target)
    }
}
