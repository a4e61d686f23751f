//! Property-based tests for the Kruskal builder.
//!
//! Checks the forest against independent oracles (Prim on an adjacency
//! matrix, exhaustive subset search on tiny graphs), validates structural
//! invariants (acyclicity, spanning, edge count), and asserts that the
//! result does not depend on input order or sort strategy.

mod equivalence;
mod oracle;
mod permutation;
mod strategies;
