//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use kruskal_core::MstError;

use crate::graph::SyntheticGraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Graph(#[from] SyntheticGraphError),
    /// Building the Kruskal runner failed.
    #[error("MST configuration failed: {0}")]
    Mst(#[from] MstError),
}
