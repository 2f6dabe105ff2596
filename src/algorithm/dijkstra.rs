use log::{debug, trace};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{
    DistanceMap, PreviousMap, SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Distance, Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation.
///
/// Holds no state between runs: every call allocates fresh distance and
/// predecessor maps, so one instance can serve any number of graphs and
/// threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes shortest paths from `start` to every node of `graph`.
    ///
    /// Among several equal-cost shortest paths, which predecessor gets recorded
    /// depends on neighbor order and is not part of the contract.
    pub fn run<N, W, G>(&self, graph: &G, start: &N) -> Result<ShortestPathResult<N, W>>
    where
        N: Clone + Eq + Hash + Debug,
        W: Weight,
        G: Graph<N, W> + ?Sized,
    {
        if !graph.has_node(start) {
            return Err(Error::UnknownStartNode(format!("{:?}", start)));
        }

        let n = graph.node_count();

        // Initialize distances and predecessors
        let mut distances: DistanceMap<N, W> = HashMap::with_capacity(n);
        let mut previous: PreviousMap<N> = HashMap::with_capacity(n);
        for node in graph.nodes() {
            distances.insert(node.clone(), Distance::Infinite);
            previous.insert(node.clone(), None);
        }
        distances.insert(start.clone(), Distance::Finite(W::zero()));

        let mut visited: HashSet<N> = HashSet::with_capacity(n);
        let mut stats = SearchStats::default();

        let mut queue = BinaryHeapWrapper::new();
        queue.push(start.clone(), W::zero());
        stats.heap_pushes += 1;

        while let Some((u, dist_u)) = queue.pop() {
            let best = distances.get(&u).copied().unwrap_or(Distance::Infinite);
            if visited.contains(&u) || Distance::Finite(dist_u) > best {
                stats.stale_entries_skipped += 1;
                continue;
            }
            visited.insert(u.clone());
            stats.nodes_settled += 1;

            for (v, weight) in graph.neighbors(&u) {
                stats.edges_scanned += 1;
                // An unrepresentable sum cannot beat any stored distance
                let Some(candidate) = dist_u.checked_sum(weight) else {
                    continue;
                };

                let improves = match distances.get(v) {
                    Some(Distance::Finite(current)) => candidate < *current,
                    _ => true,
                };

                if improves {
                    trace!("relax {:?} -> {:?}: {:?}", u, v, candidate);
                    distances.insert(v.clone(), Distance::Finite(candidate));
                    previous.insert(v.clone(), Some(u.clone()));
                    queue.push(v.clone(), candidate);
                    stats.relaxations += 1;
                    stats.heap_pushes += 1;
                }
            }
        }

        debug!(
            "Dijkstra from {:?}: settled {} of {} nodes, {} relaxations, {} stale entries skipped",
            start, stats.nodes_settled, n, stats.relaxations, stats.stale_entries_skipped
        );

        Ok(ShortestPathResult {
            source: start.clone(),
            distances,
            previous,
            stats,
        })
    }

    /// Runs independent computations for several start nodes in parallel.
    ///
    /// Results come back in the order of `sources`. The graph is only read, so
    /// it must not be mutated while this runs.
    pub fn compute_from_sources<N, W, G>(
        &self,
        graph: &G,
        sources: &[N],
    ) -> Vec<Result<ShortestPathResult<N, W>>>
    where
        N: Clone + Eq + Hash + Debug + Send + Sync,
        W: Weight + Send + Sync,
        G: Graph<N, W> + Sync + ?Sized,
    {
        sources
            .par_iter()
            .map(|source| self.run(graph, source))
            .collect()
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
    G: Graph<N, W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        self.run(graph, source)
    }
}
