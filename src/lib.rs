//! # An incremental Pascal's triangle
//!
//! Binomial coefficients arranged as Pascal's triangle, computed incrementally: a known entry is
//! moved to a neighboring coordinate with a single multiplication and division via the ratio
//! identities of the binomial coefficients, rather than being recomputed from scratch. Rows and
//! columns of the triangle are stored compactly and advanced in place with the same algebra.
#![warn(missing_docs)]

pub mod data;
