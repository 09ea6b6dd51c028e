//! # Eager centre
//!
//! The central elements of rows zero through a fixed maximum, precomputed into a dense array.
use std::fmt;
use std::fmt::Display;
use std::ops::Index;

use crate::data::number_types::{binomial_exact, matches_reference, TriangleValue};
use crate::data::triangle::entry::{value_down, Entry};
use crate::data::triangle::error::TriangleError;

/// The values C(n, ⌊n/2⌋) for rows n = 0 ..= max_row.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dense<F> {
    data: Vec<F>,
}

impl<F: TriangleValue> Dense<F> {
    /// Precompute the centres of rows zero through `max_row`.
    ///
    /// Each value derives from its predecessor: a doubling into even rows, a downward movement
    /// into odd rows.
    #[must_use]
    pub fn new(max_row: usize) -> Self {
        let mut data = Vec::with_capacity(max_row + 1);
        data.push(F::one());

        let mut value = F::one();
        for row in 1..=max_row {
            value = if row % 2 == 0 {
                value.clone() + value
            } else {
                value_down(row - 1, (row - 1) / 2, value)
            };
            data.push(value.clone());
        }

        Self { data, }
    }

    /// Largest row whose centre is materialized.
    #[must_use]
    pub fn max_row(&self) -> usize {
        self.data.len() - 1
    }

    /// Number of materialized values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Row zero is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The central value of a row.
    ///
    /// # Errors
    ///
    /// An index error when the row lies beyond the materialized range.
    pub fn get(&self, row: usize) -> Result<&F, TriangleError> {
        if row >= self.data.len() {
            return Err(TriangleError::Index(format!(
                "row {} out of range 0..={} of centre sequence", row, self.max_row(),
            )));
        }

        Ok(&self.data[row])
    }

    /// Whether every value matches its coefficient, checked in arbitrary precision.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.data.iter().enumerate()
            .all(|(row, value)| matches_reference(value, &binomial_exact(row, row / 2)))
    }

    /// Materialize the sequence as entries.
    #[must_use]
    pub fn to_array(&self) -> Vec<Entry<F>> {
        self.data.iter().enumerate()
            .map(|(row, value)| Entry::from_parts(row, row / 2, value.clone()))
            .collect()
    }
}

impl<F: TriangleValue> Index<usize> for Dense<F> {
    type Output = F;

    /// Row-indexed sugar.
    ///
    /// # Panics
    ///
    /// When the row lies beyond the materialized range; use [`Dense::get`] for a recoverable
    /// error.
    fn index(&self, row: usize) -> &Self::Output {
        debug_assert!(row < self.data.len());

        &self.data[row]
    }
}

impl<F: TriangleValue> Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "centres: [")?;
        for (row, value) in self.data.iter().enumerate() {
            if row > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
