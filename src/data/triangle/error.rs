//! # Error reporting for triangle operations
//!
//! Four kinds of failure can surface from the containers in this crate; they are distinguishable
//! by variant and each carries a human-readable description. None of them is recoverable by the
//! core itself: an operation that fails leaves its receiver untouched and the caller decides.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Any problem encountered while constructing, navigating or combining triangle values.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TriangleError {
    /// Malformed construction parameters.
    ///
    /// A position beyond its row, a backing array too short for the row it claims to represent,
    /// a zero-length column. Raised at construction time only.
    Domain(String),
    /// Movement was requested past a defined edge of the triangle.
    ///
    /// Above the top, left of position zero, before the apex entry or before column zero. Raised
    /// synchronously by the movement operation itself, never deferred.
    OutOfBounds(String),
    /// Addition or subtraction was attempted on entries not in the required relative position.
    NonAdjacent(String),
    /// A container was read at an index outside its materialized or logically valid domain.
    Index(String),
}

impl Display for TriangleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TriangleError::Domain(description) => write!(f, "DomainError: {}", description),
            TriangleError::OutOfBounds(description) => write!(f, "OutOfBoundsError: {}", description),
            TriangleError::NonAdjacent(description) => write!(f, "NonAdjacentError: {}", description),
            TriangleError::Index(description) => write!(f, "IndexError: {}", description),
        }
    }
}

impl Error for TriangleError {
}
