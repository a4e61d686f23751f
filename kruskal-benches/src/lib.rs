//! Benchmark support crate for kruskal.
//!
//! Provides a seeded synthetic graph generator and the parameter types used
//! by the Criterion benchmarks for the disjoint set and the forest builder.

pub mod error;
pub mod graph;
pub mod params;
