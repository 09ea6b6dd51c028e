//! # Column types
//!
//! Contiguous vertical slices of the triangle: the values C(n, c) for a fixed position c and
//! increasing row n. Eager and lazy backends; the eager one stores a dense prefix, the lazy one
//! grows a sparse cache on demand. These were written by hand because advancing a whole column
//! by one position must be a single in-place pass.
pub use dense::Dense as Column;
pub use lazy::Lazy as LazyColumn;

mod dense;
mod lazy;

/// Number of extra positions computed in each direction when a lazy container misses.
///
/// A miss seeds one value directly and then walks this many neighbors with the movement algebra,
/// trading one expensive computation for a batch of nearby values.
pub const PRECALC_NUMBER: usize = 5;
