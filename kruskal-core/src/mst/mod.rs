//! Minimum spanning forest construction (Kruskal).
//!
//! Edges are stably sorted by weight, optionally in parallel via Rayon, and
//! then fed through a [`DisjointSet`] one at a time. An edge is accepted when
//! its endpoints lie in different sets. The union phase is strictly
//! sequential because each acceptance depends on every earlier union.

mod sort;

use tracing::{debug, info, instrument};

use crate::{
    disjoint_set::DisjointSet,
    error::MstError,
    weight::{Weight, WeightSum},
};

pub(crate) use self::sort::SortMode;

/// An undirected weighted edge.
///
/// `(a, b, w)` and `(b, a, w)` describe the same edge; the endpoints are kept
/// in the order supplied so results echo the caller's input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge<W> {
    start: usize,
    end: usize,
    weight: W,
}

impl<W> Edge<W> {
    /// Creates an edge between `start` and `end`.
    #[must_use]
    pub const fn new(start: usize, end: usize, weight: W) -> Self {
        Self { start, end, weight }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> usize { self.start }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn end(&self) -> usize { self.end }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}

impl<W: Copy> Edge<W> {
    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> W { self.weight }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinimumSpanningForest<W> {
    edges: Vec<Edge<W>>,
    total_weight: W,
    node_count: usize,
    component_count: usize,
}

impl<W: Copy> MinimumSpanningForest<W> {
    /// Returns the selected edges in acceptance order (ascending weight,
    /// ties in input order).
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> W { self.total_weight }

    /// Returns the number of vertices in the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest, returning the selected edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }
}

/// Computes a minimum spanning forest with the default [`crate::Kruskal`]
/// configuration.
///
/// Self-loops are never selected. A disconnected graph yields one tree per
/// component rather than an error.
///
/// # Errors
/// Returns [`MstError::InvalidNodeId`] when an edge references a vertex
/// outside `0..node_count`, and [`MstError::WeightOverflow`] when the total
/// weight does not fit in `W`.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, kruskal};
///
/// let edges = [
///     Edge::new(0, 1, 1),
///     Edge::new(1, 2, 2),
///     Edge::new(2, 3, 3),
///     Edge::new(0, 3, 10),
/// ];
/// let forest = kruskal(4, &edges)?;
/// assert_eq!(forest.edges(), &edges[..3]);
/// assert_eq!(forest.total_weight(), 6);
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
pub fn kruskal<W: Weight>(
    node_count: usize,
    edges: &[Edge<W>],
) -> Result<MinimumSpanningForest<W>, MstError> {
    crate::Kruskal::default().run(node_count, edges)
}

fn validate_edges<W>(node_count: usize, edges: &[Edge<W>]) -> Result<(), MstError> {
    for (edge_index, edge) in edges.iter().enumerate() {
        for node in [edge.start, edge.end] {
            if node >= node_count {
                return Err(MstError::InvalidNodeId {
                    edge_index,
                    node,
                    node_count,
                });
            }
        }
    }
    Ok(())
}

#[instrument(
    name = "mst.build_forest",
    err,
    skip(edges),
    fields(edge_count = edges.len()),
)]
pub(crate) fn build_forest<W: Weight>(
    node_count: usize,
    edges: &[Edge<W>],
    mode: SortMode,
) -> Result<MinimumSpanningForest<W>, MstError> {
    validate_edges(node_count, edges)?;

    let order = sort::stable_order(edges, mode);
    let mut sets = DisjointSet::new(node_count);
    let tree_size = node_count.saturating_sub(1);
    let mut forest = Vec::with_capacity(tree_size);
    let mut sum = WeightSum::new();
    let mut examined = 0_usize;

    for edge_index in order {
        if forest.len() == tree_size {
            break;
        }
        examined += 1;
        let edge = edges[edge_index];
        if !sets.union(edge.start, edge.end)? {
            continue;
        }
        sum.add(edge_index, edge.weight);
        forest.push(edge);
    }

    debug!(
        examined,
        discarded = examined - forest.len(),
        "union phase finished"
    );
    let total_weight = sum
        .total()
        .map_err(|edge_index| MstError::WeightOverflow { edge_index })?;
    info!(
        selected = forest.len(),
        components = sets.set_count(),
        total_weight = %total_weight,
        "minimum spanning forest built"
    );

    Ok(MinimumSpanningForest {
        edges: forest,
        total_weight,
        node_count,
        component_count: sets.set_count(),
    })
}

#[cfg(test)]
mod property;
