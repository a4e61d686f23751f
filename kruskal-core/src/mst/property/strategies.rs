//! Graph generation strategies for MST property-based tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so proptest only has to
//! shrink the seed and distribution, and rstest cases can replay a fixture
//! exactly.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_NODES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_NODES: usize = 64;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_NODES: usize = 32;

/// Generates fixtures covering all weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates tiny graphs (at most six vertices and ten edges) that the
/// exhaustive oracle can solve.
pub(super) fn tiny_graph_strategy() -> impl Strategy<Value = MstFixture> {
    (1_usize..=6).prop_flat_map(|node_count| {
        prop::collection::vec((0..node_count, 0..node_count, -5_i64..=5), 0..=10).prop_map(
            move |triples| MstFixture {
                node_count,
                edges: triples
                    .into_iter()
                    .map(|(start, end, weight)| Edge::new(start, end, weight))
                    .collect(),
                distribution: WeightDistribution::ManyIdentical,
            },
        )
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_probabilistic_graph(
            rng,
            MAX_NODES,
            (0.2, 0.6),
            distribution,
            |r| r.gen_range(-1_000_000..1_000_000),
        ),
        WeightDistribution::ManyIdentical => {
            let pool: Vec<i64> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            generate_probabilistic_graph(rng, MAX_NODES, (0.3, 0.7), distribution, move |r| {
                pool.choose(r).copied().unwrap_or(1)
            })
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_probabilistic_graph(
            rng,
            DENSE_MAX_NODES,
            (0.7, 0.95),
            distribution,
            |r| r.gen_range(0..10_000),
        ),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Adds each unordered vertex pair with a sampled probability, drawing
/// weights from `weight`. Endpoint order is randomised so results cannot rely
/// on `start < end`.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_probability: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let probability = rng.gen_range(edge_probability.0..=edge_probability.1);
    let mut edges = Vec::new();

    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push(oriented(i, j, w, rng));
            }
        }
    }

    MstFixture {
        node_count,
        edges,
        distribution,
    }
}

/// Builds a random spanning tree, then adds roughly `n/2..=n` extra edges
/// which may repeat pairs or be self-loops.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut perm: Vec<usize> = (0..node_count).collect();
    perm.shuffle(rng);

    let mut edges = Vec::new();
    for pair in perm.windows(2) {
        if let [a, b] = *pair {
            let w = rng.gen_range(0..100);
            edges.push(oriented(a, b, w, rng));
        }
    }

    let extra = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra {
        let a = rng.gen_range(0..node_count);
        let b = rng.gen_range(0..node_count);
        let w = rng.gen_range(0..100);
        edges.push(Edge::new(a, b, w));
    }
    edges.shuffle(rng);

    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

/// Splits the vertices into 2-5 contiguous blocks and connects each block
/// internally, never across blocks. Some vertices may stay isolated.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let blocks = rng.gen_range(2..=5_usize);
    let mut cuts: Vec<usize> = (0..blocks - 1)
        .map(|_| rng.gen_range(1..node_count))
        .collect();
    cuts.push(0);
    cuts.push(node_count);
    cuts.sort_unstable();
    cuts.dedup();

    let mut edges = Vec::new();
    for window in cuts.windows(2) {
        let [lo, hi] = *window else { continue };
        for i in lo..hi {
            for j in (i + 1)..hi {
                if rng.gen_bool(0.4) {
                    let w = rng.gen_range(-50..50);
                    edges.push(oriented(i, j, w, rng));
                }
            }
        }
    }
    edges.shuffle(rng);

    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

fn oriented(a: usize, b: usize, weight: i64, rng: &mut SmallRng) -> Edge<i64> {
    if rng.gen_bool(0.5) {
        Edge::new(a, b, weight)
    } else {
        Edge::new(b, a, weight)
    }
}

// Biased towards `ManyIdentical`, the most tie-heavy case.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
