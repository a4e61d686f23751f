//! Permutation invariance: reordering or reorienting the input edges may
//! change which equal-weight edges win, never the total or the edge count.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::{Edge, kruskal};

use super::types::MstFixture;

/// Runs the permutation invariance property for the given fixture.
pub(super) fn run_permutation_invariance_property(fixture: &MstFixture, seed: u64) -> TestCaseResult {
    let baseline = kruskal(fixture.node_count, &fixture.edges)
        .map_err(|e| TestCaseError::fail(format!("baseline kruskal failed: {e}")))?;

    let mut shuffled = fixture.edges.clone();
    shuffled.shuffle(&mut SmallRng::seed_from_u64(seed));
    let reversed: Vec<Edge<i64>> = fixture
        .edges
        .iter()
        .rev()
        .map(|edge| Edge::new(edge.end(), edge.start(), edge.weight()))
        .collect();

    for (label, variant) in [("shuffled", shuffled), ("reversed", reversed)] {
        let forest = kruskal(fixture.node_count, &variant)
            .map_err(|e| TestCaseError::fail(format!("{label} kruskal failed: {e}")))?;
        if forest.total_weight() != baseline.total_weight()
            || forest.edges().len() != baseline.edges().len()
            || forest.component_count() != baseline.component_count()
        {
            return Err(TestCaseError::fail(format!(
                "{label} input diverged: total {} vs {}, edges {} vs {} (distribution={:?})",
                forest.total_weight(),
                baseline.total_weight(),
                forest.edges().len(),
                baseline.edges().len(),
                fixture.distribution,
            )));
        }
    }
    Ok(())
}
