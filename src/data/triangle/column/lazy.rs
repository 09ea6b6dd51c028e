//! # Lazy column
//!
//! A sparse, on-demand view of a column, backed by a map from offset to value. Logically the
//! column is unbounded; reading a never-before-computed position computes that value directly
//! and then fills a fixed-size neighborhood in both directions with the movement algebra,
//! exploiting the spatial locality of repeated access patterns.
use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;
use std::mem;

use crate::data::number_types::{binomial, binomial_exact, matches_reference, TriangleValue};
use crate::data::triangle::column::PRECALC_NUMBER;
use crate::data::triangle::entry::{value_down, value_left, value_right, value_up, Entry};
use crate::data::triangle::error::TriangleError;

/// A lazily computed column: the values C(i, c) for rows i from the column number upward,
/// without an upper bound.
///
/// The cache maps the 1-based offset from the column number to the value at that row. Reads
/// mutate the cache, so even read-only shared use requires external synchronization; the `&mut`
/// receiver of [`Lazy::get`] makes that visible in the type system. The cache grows without
/// bound; there is no eviction.
#[derive(Debug, Clone, PartialEq)]
pub struct Lazy<F> {
    column_number: usize,
    data: HashMap<usize, F>,
}

impl<F: TriangleValue> Lazy<F> {
    /// Create an empty lazy column; nothing is computed up front.
    #[must_use]
    pub fn new(column_number: usize) -> Self {
        Self { column_number, data: HashMap::new(), }
    }

    /// The column number.
    #[must_use]
    pub fn column_number(&self) -> usize {
        self.column_number
    }

    /// Number of values currently cached.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.data.len()
    }

    /// The value at an absolute row coordinate, computing it if necessary.
    ///
    /// A cache miss computes the value directly from the binomial formula and then walks up to
    /// [`PRECALC_NUMBER`] positions in each direction with the movement algebra, caching every
    /// position not already present.
    ///
    /// # Errors
    ///
    /// An index error when the row lies above the head of the column (`index < column_number`).
    pub fn get(&mut self, index: usize) -> Result<F, TriangleError> {
        if index < self.column_number {
            return Err(TriangleError::Index(format!(
                "row {} out of range of column {}, which starts at row {}",
                index, self.column_number, self.column_number,
            )));
        }

        let offset = index - self.column_number + 1;
        if let Some(value) = self.data.get(&offset) {
            return Ok(value.clone());
        }

        let value: F = binomial(index, self.column_number);
        self.data.insert(offset, value.clone());

        // Fill the neighborhood below (larger rows) ...
        let mut moving = value.clone();
        for step in 1..=PRECALC_NUMBER {
            moving = value_down(index + step - 1, self.column_number, moving);
            self.data.entry(offset + step).or_insert_with(|| moving.clone());
        }
        // ... and above, stopping at the head of the column.
        let mut moving = value.clone();
        for step in 1..=PRECALC_NUMBER {
            if offset <= step {
                break;
            }
            moving = value_up(index - step + 1, self.column_number, moving);
            self.data.entry(offset - step).or_insert_with(|| moving.clone());
        }

        Ok(value)
    }

    /// Advance every cached value to the next column, in place. Always legal.
    ///
    /// Each cached entry moves rightward individually; the head of the column (offset one, the
    /// always-one value C(c, c)) has no right neighbor in its row and falls out of the cache.
    /// Positions never cached remain uncached.
    pub fn advance(&mut self) {
        let column_number = self.column_number;
        self.data = mem::take(&mut self.data).into_iter()
            .filter(|&(offset, _)| offset > 1)
            .map(|(offset, value)| {
                let row = column_number + offset - 1;
                (offset - 1, value_right(row, column_number, value))
            })
            .collect();
        self.column_number += 1;
    }

    /// Retreat every cached value to the previous column, in place.
    ///
    /// # Errors
    ///
    /// Out of bounds at column zero; the cache is untouched.
    pub fn retreat(&mut self) -> Result<(), TriangleError> {
        if self.column_number == 0 {
            return Err(TriangleError::OutOfBounds("no previous column".to_string()));
        }

        let column_number = self.column_number;
        self.data = mem::take(&mut self.data).into_iter()
            .map(|(offset, value)| {
                let row = column_number + offset - 1;
                (offset + 1, value_left(row, column_number, value))
            })
            .collect();
        self.column_number -= 1;

        Ok(())
    }

    /// Whether every cached value matches its coefficient exactly, checked in arbitrary
    /// precision.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.data.iter().all(|(&offset, value)| {
            let row = self.column_number + offset - 1;
            matches_reference(value, &binomial_exact(row, self.column_number))
        })
    }

    /// Materialize the first `len` entries of the column, computing any that are missing.
    #[must_use]
    pub fn to_array(&mut self, len: usize) -> Vec<Entry<F>> {
        (0..len)
            .map(|i| {
                let row = self.column_number + i;
                let value = match self.get(row) {
                    Ok(value) => value,
                    // Rows at or below the head are always in range.
                    Err(_) => unreachable!(),
                };
                Entry::from_parts(row, self.column_number, value)
            })
            .collect()
    }
}

impl<F: TriangleValue> Display for Lazy<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "lazy column {}: {} values cached",
            self.column_number,
            self.data.len(),
        )
    }
}
