//! Error types for the Kruskal core library.
//!
//! Each public error enum carries a companion code enum whose string form is
//! stable across releases, so logs and the CLI can report failures without
//! matching on display text.

use std::fmt;

use thiserror::Error;

use crate::builder::SortStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DsuError {
    /// A vertex id fell outside the structure's bounds.
    #[error("vertex {node} is out of range for a disjoint set of {len} elements")]
    OutOfRange {
        /// The offending vertex id.
        node: usize,
        /// Number of elements tracked by the structure.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DsuError`] variants.
    enum DsuErrorCode for DsuError {
        /// A vertex id fell outside the structure's bounds.
        OutOfRange => OutOfRange { .. } => "DSU_OUT_OF_RANGE",
    }
}

/// Errors returned while computing a minimum spanning tree or forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// An edge referenced a vertex id that is not present in the graph.
    #[error("edge {edge_index} references vertex {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// Position of the offending edge in the caller's input.
        edge_index: usize,
        /// The invalid vertex id.
        node: usize,
        /// The number of vertices in the graph.
        node_count: usize,
    },
    /// The forest's total weight does not fit in the weight type.
    #[error("total weight does not fit in the weight type (last wrapped at edge {edge_index})")]
    WeightOverflow {
        /// Position of the last accepted edge whose addition wrapped.
        edge_index: usize,
    },
    /// The requested sort strategy is unavailable in the current build.
    #[error("the requested sort strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: SortStrategy,
    },
    /// A disjoint-set operation failed during the union phase.
    #[error("disjoint-set operation failed: {error}")]
    DisjointSet {
        /// Underlying disjoint-set error.
        #[from]
        error: DsuError,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An edge referenced a vertex id that is not present in the graph.
        InvalidNodeId => InvalidNodeId { .. } => "MST_INVALID_NODE_ID",
        /// The forest's total weight does not fit in the weight type.
        WeightOverflow => WeightOverflow { .. } => "MST_WEIGHT_OVERFLOW",
        /// The requested sort strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "MST_BACKEND_UNAVAILABLE",
        /// A disjoint-set operation failed during the union phase.
        DisjointSetFailure => DisjointSet { .. } => "MST_DISJOINT_SET_FAILURE",
    }
}

impl MstError {
    /// Retrieve the inner [`DsuErrorCode`] when the error originated in a
    /// [`crate::DisjointSet`] operation.
    #[must_use]
    pub const fn disjoint_set_code(&self) -> Option<DsuErrorCode> {
        match self {
            Self::DisjointSet { error } => Some(error.code()),
            _ => None,
        }
    }
}
