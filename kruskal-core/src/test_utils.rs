//! Shared test utilities for `kruskal-core`.

use kruskal_test_support::proptest_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::Edge;

/// Builds a standard proptest configuration from the shared run profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `KRUSKAL_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds edges from `(start, end, weight)` triples.
#[must_use]
pub(crate) fn edges(triples: &[(usize, usize, i64)]) -> Vec<Edge<i64>> {
    triples
        .iter()
        .map(|&(start, end, weight)| Edge::new(start, end, weight))
        .collect()
}

/// Counts connected components with a depth-first search, independent of
/// [`crate::DisjointSet`]. Self-loops and out-of-range edges are ignored.
#[must_use]
pub(crate) fn count_components<W>(node_count: usize, edges: &[Edge<W>]) -> usize {
    let mut adjacency = vec![Vec::new(); node_count];
    for edge in edges {
        let (start, end) = (edge.start(), edge.end());
        if start == end || start >= node_count || end >= node_count {
            continue;
        }
        adjacency[start].push(end);
        adjacency[end].push(start);
    }

    let mut seen = vec![false; node_count];
    let mut components = 0;
    for origin in 0..node_count {
        if seen[origin] {
            continue;
        }
        components += 1;
        seen[origin] = true;
        let mut stack = vec![origin];
        while let Some(node) = stack.pop() {
            for &next in &adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
    }
    components
}
