//! Kruskal core library.
//!
//! Provides an index-arena disjoint-set union ([`DisjointSet`]) with path
//! compression and union by rank, and a Kruskal minimum spanning forest
//! builder ([`kruskal`], [`Kruskal`]) layered on top of it.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod disjoint_set;
mod error;
mod mst;
mod weight;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DEFAULT_PARALLEL_THRESHOLD, Kruskal, KruskalBuilder, SortStrategy},
    disjoint_set::{DisjointSet, DsuElement},
    error::{DsuError, DsuErrorCode, MstError, MstErrorCode},
    mst::{Edge, MinimumSpanningForest, kruskal},
    weight::Weight,
};
