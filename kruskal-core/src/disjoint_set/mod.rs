//! Disjoint-set union (union-find) over the vertex range `0..n`.
//!
//! The structure is a flat arena indexed by vertex id: every element stores
//! the id of its parent and a rank bounding the height of the subtree rooted
//! at it. A vertex whose parent is itself is the representative of its set.
//! `find` compresses paths and `union` attaches by rank, which together give
//! the inverse-Ackermann amortised bound.

use crate::error::DsuError;

/// A single arena slot of a [`DisjointSet`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DsuElement {
    parent: usize,
    rank: u8,
}

impl DsuElement {
    const fn singleton(id: usize) -> Self {
        Self {
            parent: id,
            rank: 0,
        }
    }

    /// Returns the parent link. Equal to the element's own id for a
    /// representative.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> usize { self.parent }

    /// Returns the rank, an upper bound on the depth of the subtree rooted
    /// at this element.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rank(&self) -> u8 { self.rank }
}

/// Partition of `0..n` into disjoint sets.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(sets.union(2, 3)?);
/// assert!(!sets.same_set(1, 2)?);
/// assert!(sets.union(1, 3)?);
/// assert_eq!(sets.find(0)?, sets.find(2)?);
/// assert_eq!(sets.set_count(), 1);
/// # Ok::<(), kruskal_core::DsuError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    elements: Vec<DsuElement>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets, one per vertex in `0..len`.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            elements: (0..len).map(DsuElement::singleton).collect(),
            sets: len,
        }
    }

    /// Returns the number of vertices tracked by the structure.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.elements.len() }

    /// Returns `true` when the structure tracks no vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.elements.is_empty() }

    /// Returns the current number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn set_count(&self) -> usize { self.sets }

    /// Returns a copy of the arena slot for `node`.
    ///
    /// # Errors
    /// Returns [`DsuError::OutOfRange`] when `node >= self.len()`.
    pub fn element(&self, node: usize) -> Result<DsuElement, DsuError> {
        self.elements
            .get(node)
            .copied()
            .ok_or(DsuError::OutOfRange {
                node,
                len: self.elements.len(),
            })
    }

    /// Returns the rank stored for `node`.
    ///
    /// # Errors
    /// Returns [`DsuError::OutOfRange`] when `node >= self.len()`.
    pub fn rank(&self, node: usize) -> Result<u8, DsuError> {
        self.element(node).map(|element| element.rank)
    }

    /// Returns the representative of the set containing `node`.
    ///
    /// Every vertex visited on the way to the representative is re-pointed
    /// directly at it. Set membership is unchanged.
    ///
    /// # Errors
    /// Returns [`DsuError::OutOfRange`] when `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> Result<usize, DsuError> {
        self.check(node)?;
        Ok(self.find_root(node))
    }

    /// Returns `true` when `left` and `right` share a representative.
    ///
    /// # Errors
    /// Returns [`DsuError::OutOfRange`] when either id is out of bounds.
    pub fn same_set(&mut self, left: usize, right: usize) -> Result<bool, DsuError> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.find_root(left) == self.find_root(right))
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The root with the smaller rank is attached beneath the other. On a tie
    /// the root of `left` survives and its rank grows by one. Returns `false`
    /// without touching the structure when both ids already share a set.
    ///
    /// # Errors
    /// Returns [`DsuError::OutOfRange`] when either id is out of bounds. The
    /// structure is left untouched in that case.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DsuError> {
        self.check(left)?;
        self.check(right)?;

        let mut parent = self.find_root(left);
        let mut child = self.find_root(right);
        if parent == child {
            return Ok(false);
        }

        let parent_rank = self.elements[parent].rank;
        let child_rank = self.elements[child].rank;
        if parent_rank < child_rank {
            std::mem::swap(&mut parent, &mut child);
        }
        self.elements[child].parent = parent;
        if parent_rank == child_rank {
            self.elements[parent].rank = parent_rank.saturating_add(1);
        }
        self.sets -= 1;
        Ok(true)
    }

    const fn check(&self, node: usize) -> Result<(), DsuError> {
        if node < self.elements.len() {
            Ok(())
        } else {
            Err(DsuError::OutOfRange {
                node,
                len: self.elements.len(),
            })
        }
    }

    // Callers must have bounds-checked `node`; stored parents are always in
    // range.
    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.elements[root].parent != root {
            root = self.elements[root].parent;
        }

        while self.elements[node].parent != root {
            let parent = self.elements[node].parent;
            self.elements[node].parent = root;
            node = parent;
        }

        root
    }
}
