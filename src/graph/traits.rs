use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Weight;
use crate::Result;

/// Trait representing a weighted undirected graph over node identifiers `N`
pub trait Graph<N, W>: Debug
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph, counting each undirected edge once
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all registered nodes
    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a N> + 'a>;

    /// Returns an iterator over `(neighbor, weight)` pairs adjacent to a node.
    /// Empty if the node has no edges or is not in the graph.
    fn neighbors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, u: &N, v: &N) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, u: &N, v: &N) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Registers a node. Adding an existing node is a no-op.
    /// Returns true if the node was newly added.
    fn add_node(&mut self, node: N) -> bool;

    /// Adds an undirected edge between two registered nodes.
    ///
    /// Fails with `Error::InvalidWeight` if the weight is negative or NaN and with
    /// `Error::UnknownNode` if either endpoint was never added. Adding an edge
    /// that already exists replaces its weight.
    fn add_edge(&mut self, u: &N, v: &N, weight: W) -> Result<()>;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, u: &N, v: &N) -> bool;
}
