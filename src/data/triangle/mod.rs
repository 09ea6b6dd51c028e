//! # Triangle containers
//!
//! The entry primitive and the containers built from it. A caller constructs an entry, row,
//! column or centre sequence at some starting coordinate (computed directly from the binomial
//! formula) and then advances or retreats it with the movement algebra, one multiplication and
//! division per step instead of a full recomputation.
//!
//! All containers own their backing storage exclusively; clones are deep and conversions between
//! eager and lazy forms copy values. None of the containers is safe for unsynchronized shared
//! mutation, and the lazy ones mutate their cache on read.
pub use centre::{Centre, LazyCentre};
pub use column::{Column, LazyColumn};
pub use entry::Entry;
pub use error::TriangleError;
pub use row::Row;

pub mod centre;
pub mod column;
pub mod entry;
pub mod error;
pub mod row;

/// The integer interval `[0, max]` as an index domain.
///
/// Immutable once constructed; non-negativity is guaranteed by the type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ZeroRange {
    max: usize,
}

impl ZeroRange {
    /// The domain `[0, max]`, both ends inclusive.
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self { max, }
    }

    /// Largest index of the domain.
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Number of indices in the domain, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.max + 1
    }

    /// The domain contains zero, so it is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether an index falls within the domain.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index <= self.max
    }

    /// Iterate over the domain in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        0..=self.max
    }
}
