//! Benchmark parameter types.

use std::fmt;

/// Parameters for a forest-building benchmark run.
#[derive(Clone, Debug)]
pub struct KruskalBenchParams {
    /// Number of vertices in the graph.
    pub node_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
}

impl fmt::Display for KruskalBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.edge_count)
    }
}
