//! Reference oracles for MST property verification.
//!
//! Neither oracle touches [`crate::DisjointSet`] or the Kruskal sort, so
//! agreement is evidence rather than tautology.

use crate::Edge;
use crate::test_utils::count_components;

/// Summary produced by an oracle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleResult {
    /// Minimum total weight of a spanning forest.
    pub total_weight: i64,
    /// Number of edges in a spanning forest.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes the minimum spanning forest weight with Prim's algorithm over a
/// dense adjacency matrix, restarting in every unvisited component.
pub(super) fn prim_forest(node_count: usize, edges: &[Edge<i64>]) -> OracleResult {
    let mut cheapest: Vec<Vec<Option<i64>>> = vec![vec![None; node_count]; node_count];
    for edge in edges {
        let (a, b) = (edge.start(), edge.end());
        if a == b {
            continue;
        }
        let w = edge.weight();
        for (x, y) in [(a, b), (b, a)] {
            let slot = &mut cheapest[x][y];
            *slot = Some(slot.map_or(w, |current| current.min(w)));
        }
    }

    let mut in_tree = vec![false; node_count];
    let mut key: Vec<Option<i64>> = vec![None; node_count];
    let mut result = OracleResult {
        total_weight: 0,
        edge_count: 0,
        component_count: 0,
    };

    for _ in 0..node_count {
        let next = (0..node_count)
            .filter(|&v| !in_tree[v])
            .min_by_key(|&v| (key[v].is_none(), key[v]));
        let Some(v) = next else { break };

        match key[v] {
            Some(w) => {
                result.total_weight += w;
                result.edge_count += 1;
            }
            None => result.component_count += 1,
        }
        in_tree[v] = true;

        for u in 0..node_count {
            if in_tree[u] {
                continue;
            }
            if let Some(w) = cheapest[v][u] {
                if key[u].is_none_or(|current| w < current) {
                    key[u] = Some(w);
                }
            }
        }
    }

    result
}

/// Finds the minimum spanning forest weight by trying every edge subset of
/// size `n - c`. Only usable for a handful of edges.
pub(super) fn exhaustive_forest(node_count: usize, edges: &[Edge<i64>]) -> OracleResult {
    let component_count = count_components(node_count, edges);
    let edge_count = node_count - component_count;
    assert!(edges.len() <= 16, "exhaustive oracle is exponential");

    let mut best: Option<i64> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != edge_count {
            continue;
        }
        let chosen: Vec<&Edge<i64>> = edges
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, edge)| edge)
            .collect();
        if !is_acyclic(node_count, &chosen) {
            continue;
        }
        let total: i64 = chosen.iter().map(|edge| edge.weight()).sum();
        best = Some(best.map_or(total, |current| current.min(total)));
    }

    OracleResult {
        total_weight: best.unwrap_or(0),
        edge_count,
        component_count,
    }
}

fn is_acyclic(node_count: usize, edges: &[&Edge<i64>]) -> bool {
    let mut label: Vec<usize> = (0..node_count).collect();
    for edge in edges {
        let (from, to) = (label[edge.start()], label[edge.end()]);
        if from == to {
            return false;
        }
        for l in &mut label {
            if *l == from {
                *l = to;
            }
        }
    }
    true
}
