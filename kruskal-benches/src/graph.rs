//! Seeded synthetic graphs for benchmarks.
//!
//! Every graph is connected: a random spanning path over a shuffled vertex
//! order is laid down first, then extra random edges are added. Extra edges
//! may repeat a vertex pair or be self-loops, which exercises the cycle
//! rejection path of the builder.

use kruskal_core::Edge;
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use thiserror::Error;

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub node_count: usize,
    /// Random edges added per vertex on top of the spanning path.
    pub extra_edges_per_node: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: i64,
    /// Seed for the generator.
    pub seed: u64,
}

/// Errors raised by [`SyntheticGraph::generate`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SyntheticGraphError {
    /// The graph must have at least one vertex.
    #[error("node_count must be positive")]
    ZeroNodes,
    /// The weight range must be non-empty.
    #[error("max_weight must be positive, got {max_weight}")]
    NonPositiveMaxWeight {
        /// Supplied maximum.
        max_weight: i64,
    },
    /// The requested edge count does not fit in `usize`.
    #[error("{node_count} vertices with {extra_edges_per_node} extra edges each overflows")]
    EdgeCountOverflow {
        /// Supplied vertex count.
        node_count: usize,
        /// Supplied extra edges per vertex.
        extra_edges_per_node: usize,
    },
}

/// A generated graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    node_count: usize,
    edges: Vec<Edge<i64>>,
}

impl SyntheticGraph {
    /// Generates a connected graph from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticGraphError`] when the configuration is empty or
    /// too large.
    ///
    /// # Examples
    /// ```
    /// use kruskal_benches::graph::{SyntheticGraph, SyntheticGraphConfig};
    ///
    /// let graph = SyntheticGraph::generate(&SyntheticGraphConfig {
    ///     node_count: 10,
    ///     extra_edges_per_node: 2,
    ///     max_weight: 100,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(graph.edges().len(), 9 + 20);
    /// # Ok::<(), kruskal_benches::graph::SyntheticGraphError>(())
    /// ```
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticGraphError> {
        let SyntheticGraphConfig {
            node_count,
            extra_edges_per_node,
            max_weight,
            seed,
        } = *config;
        if node_count == 0 {
            return Err(SyntheticGraphError::ZeroNodes);
        }
        if max_weight <= 0 {
            return Err(SyntheticGraphError::NonPositiveMaxWeight { max_weight });
        }
        let overflow = SyntheticGraphError::EdgeCountOverflow {
            node_count,
            extra_edges_per_node,
        };
        let extra = node_count
            .checked_mul(extra_edges_per_node)
            .ok_or_else(|| overflow.clone())?;
        let capacity = extra.checked_add(node_count - 1).ok_or(overflow)?;

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut order: Vec<usize> = (0..node_count).collect();
        order.shuffle(&mut rng);

        let mut edges = Vec::with_capacity(capacity);
        for pair in order.windows(2) {
            if let [start, end] = *pair {
                edges.push(Edge::new(start, end, rng.gen_range(1..=max_weight)));
            }
        }
        for _ in 0..extra {
            let start = rng.gen_range(0..node_count);
            let end = rng.gen_range(0..node_count);
            edges.push(Edge::new(start, end, rng.gen_range(1..=max_weight)));
        }
        edges.shuffle(&mut rng);

        Ok(Self { node_count, edges })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the generated edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<i64>] { &self.edges }
}
