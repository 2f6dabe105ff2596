//! Tabular summary of a shortest path run.
//!
//! Builds one row per node with its distance and path from the source. The
//! table is plain data: it can be serialized for a downstream visualizer or
//! rendered as aligned text through `Display`.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use crate::algorithm::ShortestPathResult;
use crate::graph::{Distance, Weight};

const RULE_WIDTH: usize = 60;

/// Distance and path from the source to one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRow<N, W> {
    pub node: N,
    pub distance: Distance<W>,
    /// Empty when the node is unreachable
    pub path: Vec<N>,
}

/// Shortest paths from one source to every node, sorted by node label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathTable<N, W> {
    pub source: N,
    pub rows: Vec<PathRow<N, W>>,
}

impl<N, W> ShortestPathTable<N, W>
where
    N: Clone + Eq + Hash + Debug + Display,
    W: Weight,
{
    /// Builds the table from a finished run. Rows are ordered by the nodes'
    /// string form.
    pub fn from_result(result: &ShortestPathResult<N, W>) -> Self {
        let mut rows: Vec<PathRow<N, W>> = result
            .distances
            .iter()
            .map(|(node, distance)| PathRow {
                node: node.clone(),
                distance: *distance,
                path: if distance.is_finite() {
                    result.path_to(node)
                } else {
                    Vec::new()
                },
            })
            .collect();

        rows.sort_by_cached_key(|row| row.node.to_string());

        ShortestPathTable {
            source: result.source.clone(),
            rows,
        }
    }

    pub fn row(&self, node: &N) -> Option<&PathRow<N, W>> {
        self.rows.iter().find(|row| &row.node == node)
    }
}

impl<N, W> Display for ShortestPathTable<N, W>
where
    N: Display,
    W: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shortest paths from '{}':", self.source)?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "{:<15} {:<15} {:<30}", "To node", "Distance", "Path")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for row in &self.rows {
            let path = if row.path.is_empty() {
                "unreachable".to_string()
            } else {
                row.path
                    .iter()
                    .map(|node| node.to_string())
                    .collect::<Vec<_>>()
                    .join(" → ")
            };
            let node = row.node.to_string();
            let distance = row.distance.to_string();
            writeln!(f, "{:<15} {:<15} {:<30}", node, distance, path)?;
        }

        write!(f, "{}", "-".repeat(RULE_WIDTH))
    }
}
