//! Stable ordering of edges by weight.
//!
//! The sort works on edge indices so the union phase can report the caller's
//! edge position on failure without copying the edge list.

#[cfg(feature = "parallel")]
use rayon::slice::ParallelSliceMut;

use super::Edge;
use crate::weight::Weight;

/// Sort implementation resolved from a [`crate::SortStrategy`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SortMode {
    Sequential,
    #[cfg(feature = "parallel")]
    Parallel,
}

/// Returns the indices of `edges` ordered by ascending weight, with ties kept
/// in input order.
pub(super) fn stable_order<W: Weight>(edges: &[Edge<W>], mode: SortMode) -> Vec<usize> {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    let key = |index: &usize| edges[*index].weight;
    match mode {
        SortMode::Sequential => order.sort_by_key(key),
        #[cfg(feature = "parallel")]
        SortMode::Parallel => order.par_sort_by_key(key),
    }
    order
}
