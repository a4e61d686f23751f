//! Builder utilities for configuring Kruskal runs.
//!
//! Exposes the sort strategy selection surface and the builder validation
//! performed before constructing [`Kruskal`] instances.

use tracing::instrument;

use crate::{
    error::MstError,
    mst::{self, Edge, MinimumSpanningForest, SortMode},
    weight::Weight,
};

/// Edge count at which [`SortStrategy::Auto`] switches to the parallel sort.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Selects how the edge list is sorted before the union phase.
///
/// Both sorts are stable, so every strategy yields the same forest. The
/// union phase itself always runs sequentially.
///
/// `Auto` uses the parallel sort when the `parallel` feature is enabled and
/// the edge count reaches the configured threshold, and the sequential sort
/// otherwise.
///
/// # Examples
/// ```
/// use kruskal_core::SortStrategy;
///
/// assert_eq!(SortStrategy::default(), SortStrategy::Auto);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Let the library choose based on input size and build features.
    #[default]
    Auto,
    /// Always sort on the calling thread.
    Sequential,
    /// Always sort with Rayon. Requires the `parallel` feature.
    Parallel,
}

/// Configures and constructs [`Kruskal`] instances.
///
/// # Examples
/// ```
/// use kruskal_core::{KruskalBuilder, SortStrategy};
///
/// let kruskal = KruskalBuilder::new()
///     .with_sort_strategy(SortStrategy::Sequential)
///     .build()
///     .expect("sequential sorting is always available");
/// assert_eq!(kruskal.sort_strategy(), SortStrategy::Sequential);
/// ```
#[derive(Debug, Clone)]
pub struct KruskalBuilder {
    sort_strategy: SortStrategy,
    parallel_threshold: usize,
}

impl Default for KruskalBuilder {
    fn default() -> Self {
        Self {
            sort_strategy: SortStrategy::Auto,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl KruskalBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{DEFAULT_PARALLEL_THRESHOLD, KruskalBuilder, SortStrategy};
    ///
    /// let builder = KruskalBuilder::new();
    /// assert_eq!(builder.sort_strategy(), SortStrategy::Auto);
    /// assert_eq!(builder.parallel_threshold(), DEFAULT_PARALLEL_THRESHOLD);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sort strategy used before the union phase.
    #[must_use]
    pub const fn with_sort_strategy(mut self, strategy: SortStrategy) -> Self {
        self.sort_strategy = strategy;
        self
    }

    /// Returns the configured sort strategy.
    #[must_use]
    pub const fn sort_strategy(&self) -> SortStrategy {
        self.sort_strategy
    }

    /// Overrides the edge count at which [`SortStrategy::Auto`] sorts in
    /// parallel.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::KruskalBuilder;
    ///
    /// let builder = KruskalBuilder::new().with_parallel_threshold(64);
    /// assert_eq!(builder.parallel_threshold(), 64);
    /// ```
    #[must_use]
    pub const fn with_parallel_threshold(mut self, edges: usize) -> Self {
        self.parallel_threshold = edges;
        self
    }

    /// Returns the configured parallel sort threshold.
    #[must_use]
    pub const fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Validates the configuration and constructs a [`Kruskal`] instance.
    ///
    /// # Errors
    /// Returns [`MstError::BackendUnavailable`] when
    /// [`SortStrategy::Parallel`] is requested in a build without the
    /// `parallel` feature.
    pub fn build(self) -> Result<Kruskal, MstError> {
        if self.sort_strategy == SortStrategy::Parallel && !cfg!(feature = "parallel") {
            return Err(MstError::BackendUnavailable {
                requested: SortStrategy::Parallel,
            });
        }
        Ok(Kruskal {
            sort_strategy: self.sort_strategy,
            parallel_threshold: self.parallel_threshold,
        })
    }
}

/// A validated Kruskal configuration.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, Kruskal};
///
/// let edges = [Edge::new(0, 1, 4_u32), Edge::new(1, 2, 1), Edge::new(0, 2, 2)];
/// let forest = Kruskal::default().run(3, &edges)?;
/// assert_eq!(forest.total_weight(), 3);
/// assert!(forest.is_tree());
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kruskal {
    sort_strategy: SortStrategy,
    parallel_threshold: usize,
}

impl Default for Kruskal {
    fn default() -> Self {
        Self {
            sort_strategy: SortStrategy::Auto,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Kruskal {
    /// Returns the configured sort strategy.
    #[must_use]
    pub const fn sort_strategy(&self) -> SortStrategy {
        self.sort_strategy
    }

    /// Returns the configured parallel sort threshold.
    #[must_use]
    pub const fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Computes the minimum spanning forest of the graph on `node_count`
    /// vertices described by `edges`.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidNodeId`] when an edge references a vertex
    /// outside `0..node_count`, and [`MstError::WeightOverflow`] when the
    /// total weight does not fit in `W`.
    #[instrument(
        name = "core.run",
        err,
        skip(self, edges),
        fields(edge_count = edges.len(), strategy = ?self.sort_strategy),
    )]
    pub fn run<W: Weight>(
        &self,
        node_count: usize,
        edges: &[Edge<W>],
    ) -> Result<MinimumSpanningForest<W>, MstError> {
        mst::build_forest(node_count, edges, self.sort_mode(edges.len()))
    }

    #[cfg_attr(
        not(feature = "parallel"),
        expect(unused_variables, reason = "only the parallel build consults the threshold")
    )]
    fn sort_mode(&self, edge_count: usize) -> SortMode {
        match self.sort_strategy {
            SortStrategy::Sequential => SortMode::Sequential,
            #[cfg(feature = "parallel")]
            SortStrategy::Parallel => SortMode::Parallel,
            // `build` rejects this combination; `Default` never produces it.
            #[cfg(not(feature = "parallel"))]
            SortStrategy::Parallel => SortMode::Sequential,
            #[cfg(feature = "parallel")]
            SortStrategy::Auto if edge_count >= self.parallel_threshold => SortMode::Parallel,
            SortStrategy::Auto => SortMode::Sequential,
        }
    }
}
