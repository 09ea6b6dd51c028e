//! # Data structures
//!
//! Generic number bounds and the triangle containers built on top of them.
pub mod number_types;
pub mod triangle;
