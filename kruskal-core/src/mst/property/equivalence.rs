//! Oracle equivalence: Kruskal's total weight, edge count and component
//! count match an independent reference.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::kruskal;

use super::oracle::{OracleResult, exhaustive_forest, prim_forest};
use super::types::MstFixture;

/// Compares Kruskal against the Prim oracle.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let expected = prim_forest(fixture.node_count, &fixture.edges);
    compare(fixture, expected, "prim")
}

/// Compares Kruskal against the exhaustive oracle. Tiny graphs only.
pub(super) fn run_exhaustive_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let expected = exhaustive_forest(fixture.node_count, &fixture.edges);
    compare(fixture, expected, "exhaustive")
}

fn compare(fixture: &MstFixture, expected: OracleResult, oracle: &str) -> TestCaseResult {
    let forest = kruskal(fixture.node_count, &fixture.edges)
        .map_err(|e| TestCaseError::fail(format!("kruskal failed: {e}")))?;
    let actual = OracleResult {
        total_weight: forest.total_weight(),
        edge_count: forest.edges().len(),
        component_count: forest.component_count(),
    };
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "{oracle} oracle mismatch: kruskal={actual:?}, oracle={expected:?} \
             (distribution={:?}, nodes={}, edges={})",
            fixture.distribution,
            fixture.node_count,
            fixture.edges.len(),
        )));
    }
    Ok(())
}
