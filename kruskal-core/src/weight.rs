//! Edge weight abstraction.
//!
//! Kruskal only needs a total order for sorting and an overflow-aware sum for
//! the forest total, so [`Weight`] is implemented for the primitive integer
//! types rather than floats (which lack a total `Ord`).

use std::fmt::{Debug, Display};

/// A totally ordered numeric edge weight.
///
/// # Examples
/// ```
/// use kruskal_core::Weight;
///
/// assert_eq!(<i64 as Weight>::ZERO, 0);
/// assert_eq!(7_i32.overflowing_sum(5), (12, false));
/// assert_eq!(u8::MAX.overflowing_sum(1), (0, true));
/// ```
pub trait Weight: Copy + Ord + Debug + Display + Send + Sync {
    /// Additive identity used as the total of an empty forest.
    const ZERO: Self;

    /// Adds `other` to `self` with two's-complement wrapping, returning the
    /// wrapped sum and whether it wrapped.
    #[must_use]
    fn overflowing_sum(self, other: Self) -> (Self, bool);
}

macro_rules! impl_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                fn overflowing_sum(self, other: Self) -> (Self, bool) {
                    self.overflowing_add(other)
                }
            }
        )+
    };
}

impl_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Running total that tolerates intermediate overflow.
///
/// The wrapped sum is kept together with the net number of times it wrapped
/// upwards (positive) or downwards (negative). The exact total is
/// `wrapped + wraps * 2^BITS`, which lies inside `W` exactly when `wraps` is
/// zero, so only the final total decides whether the sum overflowed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WeightSum<W> {
    wrapped: W,
    wraps: isize,
    last_wrap: Option<usize>,
}

impl<W: Weight> WeightSum<W> {
    pub(crate) const fn new() -> Self {
        Self {
            wrapped: W::ZERO,
            wraps: 0,
            last_wrap: None,
        }
    }

    /// Adds the weight of the edge at `edge_index`.
    pub(crate) fn add(&mut self, edge_index: usize, weight: W) {
        let (wrapped, overflowed) = self.wrapped.overflowing_sum(weight);
        self.wrapped = wrapped;
        if overflowed {
            if weight < W::ZERO {
                self.wraps -= 1;
            } else {
                self.wraps += 1;
            }
            self.last_wrap = Some(edge_index);
        }
    }

    /// Returns the exact total, or the index of the last edge whose addition
    /// wrapped when the total does not fit in `W`.
    pub(crate) fn total(&self) -> Result<W, usize> {
        match (self.wraps, self.last_wrap) {
            (0, _) | (_, None) => Ok(self.wrapped),
            (_, Some(edge_index)) => Err(edge_index),
        }
    }
}
