use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::Weight;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// An undirected graph implementation using adjacency lists.
///
/// Nodes are interned into dense indices in registration order, so node and
/// neighbor iteration is deterministic for a given construction sequence.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Registered nodes, indexed by their interned id
    nodes: Vec<N>,

    /// Node -> interned id
    index: HashMap<N, usize>,

    /// Adjacency for each node: node_id -> [(neighbor_id, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Number of undirected edges
    edge_count: usize,
}

impl<N, W> UndirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty graph with room for the specified number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        UndirectedGraph {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(u, v, weight)` triples, registering endpoints as
    /// they appear.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = Self::new();
        graph.extend_with_edges(edges)?;
        Ok(graph)
    }

    /// Adds `(u, v, weight)` triples, registering unknown endpoints first.
    ///
    /// Stops at the first invalid weight; edges before it stay in the graph.
    pub fn extend_with_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        for (u, v, weight) in edges {
            // Reject before registering the endpoints
            if !weight.is_valid_weight() {
                return Err(invalid_weight(&u, &v, weight));
            }
            self.add_node(u.clone());
            self.add_node(v.clone());
            self.add_edge(&u, &v, weight)?;
        }
        Ok(())
    }

    /// Adds several nodes at once
    pub fn extend_with_nodes<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = N>,
    {
        for node in nodes {
            self.add_node(node);
        }
    }

    fn id_of(&self, node: &N) -> Result<usize> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| Error::UnknownNode(format!("{:?}", node)))
    }
}

impl<N, W> Default for UndirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_weight<N: Debug, W: Debug>(u: &N, v: &N, weight: W) -> Error {
    Error::InvalidWeight {
        from: format!("{:?}", u),
        to: format!("{:?}", v),
        weight: format!("{:?}", weight),
    }
}

impl<N, W> Graph<N, W> for UndirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        Box::new(self.nodes.iter())
    }

    fn neighbors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a> {
        if let Some(&id) = self.index.get(node) {
            Box::new(
                self.adjacency[id]
                    .iter()
                    .map(move |&(target, weight)| (&self.nodes[target], weight)),
            )
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    fn edge_weight(&self, u: &N, v: &N) -> Option<W> {
        let from = *self.index.get(u)?;
        let to = *self.index.get(v)?;
        self.adjacency[from]
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<N, W> MutableGraph<N, W> for UndirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }

        let id = self.nodes.len();
        self.index.insert(node.clone(), id);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        true
    }

    fn add_edge(&mut self, u: &N, v: &N, weight: W) -> Result<()> {
        if !weight.is_valid_weight() {
            return Err(invalid_weight(u, v, weight));
        }
        let from = self.id_of(u)?;
        let to = self.id_of(v)?;

        // Existing edge: replace the weight on both sides
        if let Some(edge) = self.adjacency[from].iter_mut().find(|(t, _)| *t == to) {
            edge.1 = weight;
            if let Some(edge) = self.adjacency[to].iter_mut().find(|(t, _)| *t == from) {
                edge.1 = weight;
            }
            return Ok(());
        }

        self.adjacency[from].push((to, weight));
        // A self-loop is stored once
        if from != to {
            self.adjacency[to].push((from, weight));
        }
        self.edge_count += 1;

        Ok(())
    }

    fn remove_edge(&mut self, u: &N, v: &N) -> bool {
        let (Some(&from), Some(&to)) = (self.index.get(u), self.index.get(v)) else {
            return false;
        };

        let len_before = self.adjacency[from].len();
        self.adjacency[from].retain(|(target, _)| *target != to);
        let removed = len_before > self.adjacency[from].len();

        if removed {
            self.adjacency[to].retain(|(source, _)| *source != from);
            self.edge_count -= 1;
        }

        removed
    }
}
