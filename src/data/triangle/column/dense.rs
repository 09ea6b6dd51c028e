//! # Eager column
//!
//! A dense, fully materialized slice of a column, wrapping a `Vec`. Length is fixed at creation.
use std::fmt;
use std::fmt::Display;
use std::ops::Index;

use crate::data::number_types::{binomial_exact, matches_reference, TriangleValue};
use crate::data::triangle::entry::{value_down, Entry};
use crate::data::triangle::error::TriangleError;

/// The values C(i, c) for column number c and rows i = c, c + 1, ..., c + len - 1.
///
/// Indexing is coordinate-based: index `i` is the absolute row number, valid from the column
/// number itself (the first row in which the column exists) through `column_number + len - 1`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dense<F> {
    column_number: usize,
    data: Vec<F>,
}

impl<F: TriangleValue> Dense<F> {
    /// Materialize a column.
    ///
    /// The first slot is always one (C(c, c)); each further slot is derived from the previous
    /// with a single downward movement.
    ///
    /// # Arguments
    ///
    /// * `column_number`: Position within the rows that this column slices out.
    /// * `len`: Number of consecutive rows to materialize.
    ///
    /// # Errors
    ///
    /// A domain error when `len` is zero.
    pub fn new(column_number: usize, len: usize) -> Result<Self, TriangleError> {
        if len == 0 {
            return Err(TriangleError::Domain("a column cannot be empty".to_string()));
        }

        let mut data = Vec::with_capacity(len);
        data.push(F::one());
        let mut value = F::one();
        for i in 1..len {
            value = value_down(column_number + i - 1, column_number, value);
            data.push(value.clone());
        }

        Ok(Self { column_number, data, })
    }

    /// The column number.
    #[must_use]
    pub fn column_number(&self) -> usize {
        self.column_number
    }

    /// Number of materialized values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// A column is never empty, see [`Dense::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First valid row coordinate.
    #[must_use]
    pub fn first_row(&self) -> usize {
        self.column_number
    }

    /// Last valid row coordinate.
    #[must_use]
    pub fn last_row(&self) -> usize {
        self.column_number + self.data.len() - 1
    }

    /// The value at an absolute row coordinate.
    ///
    /// # Errors
    ///
    /// An index error when the row lies outside the materialized range.
    pub fn get(&self, index: usize) -> Result<&F, TriangleError> {
        if index < self.first_row() || index > self.last_row() {
            return Err(TriangleError::Index(format!(
                "row {} out of range {}..={} of column {}",
                index, self.first_row(), self.last_row(), self.column_number,
            )));
        }

        Ok(&self.data[index - self.column_number])
    }

    /// Advance every slot to the next column, in place. Always legal.
    ///
    /// Walks the array upward: each slot gains its already-updated predecessor, which is exactly
    /// the Pascal recurrence C(r + 1, c + 1) = C(r, c) + C(r, c + 1). The represented rows shift
    /// up by one along with the column number.
    pub fn advance(&mut self) {
        for i in 1..self.data.len() {
            let predecessor = self.data[i - 1].clone();
            self.data[i] += predecessor;
        }
        self.column_number += 1;
    }

    /// Retreat every slot to the previous column, in place. The inverse of [`Dense::advance`].
    ///
    /// # Errors
    ///
    /// Out of bounds at column zero; the column is untouched.
    pub fn retreat(&mut self) -> Result<(), TriangleError> {
        if self.column_number == 0 {
            return Err(TriangleError::OutOfBounds("no previous column".to_string()));
        }

        for i in (1..self.data.len()).rev() {
            let predecessor = self.data[i - 1].clone();
            self.data[i] -= predecessor;
        }
        self.column_number -= 1;

        Ok(())
    }

    /// The next column.
    #[must_use]
    pub fn next(&self) -> Self {
        let mut moved = self.clone();
        moved.advance();
        moved
    }

    /// The previous column.
    ///
    /// # Errors
    ///
    /// See [`Dense::retreat`], the canonical implementation.
    pub fn previous(&self) -> Result<Self, TriangleError> {
        let mut moved = self.clone();
        moved.retreat()?;
        Ok(moved)
    }

    /// Whether every slot matches its coefficient, checked in arbitrary precision.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.data.iter().enumerate().all(|(i, value)| {
            matches_reference(value, &binomial_exact(self.column_number + i, self.column_number))
        })
    }

    /// Materialize the column as entries.
    #[must_use]
    pub fn to_array(&self) -> Vec<Entry<F>> {
        self.data.iter().enumerate()
            .map(|(i, value)| {
                Entry::from_parts(self.column_number + i, self.column_number, value.clone())
            })
            .collect()
    }
}

impl<F: TriangleValue> Index<usize> for Dense<F> {
    type Output = F;

    /// Coordinate-based indexing sugar.
    ///
    /// # Panics
    ///
    /// When the row lies outside the materialized range; use [`Dense::get`] for a recoverable
    /// error.
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index >= self.first_row() && index <= self.last_row());

        &self.data[index - self.column_number]
    }
}

impl<F: TriangleValue> Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "column {}: [", self.column_number)?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod test {
    use num_bigint::BigUint;

    use crate::data::number_types::{from_index, TriangleValue};
    use crate::data::triangle::column::Column;
    use crate::data::triangle::error::TriangleError;

    fn values<F: TriangleValue>(column: &Column<F>) -> Vec<F> {
        column.to_array().into_iter().map(|entry| entry.into_value()).collect()
    }

    fn construction<F: TriangleValue>() {
        let column = Column::<F>::new(4, 5).unwrap();
        assert_eq!(
            values(&column),
            vec![1_usize, 5, 15, 35, 70].into_iter().map(from_index).collect::<Vec<F>>(),
        );
        assert!(column.is_valid());

        let column = Column::<F>::new(0, 4).unwrap();
        assert_eq!(
            values(&column),
            vec![1_usize, 1, 1, 1].into_iter().map(from_index).collect::<Vec<F>>(),
        );
    }

    #[test]
    fn test_construction() {
        construction::<u64>();
        construction::<f64>();
        construction::<BigUint>();
    }

    #[test]
    fn test_empty_column_rejected() {
        assert!(matches!(Column::<u64>::new(4, 0), Err(TriangleError::Domain(_))));
    }

    #[test]
    fn test_coordinate_indexing() {
        let column = Column::<u64>::new(4, 5).unwrap();
        assert_eq!(column.first_row(), 4);
        assert_eq!(column.last_row(), 8);
        assert_eq!(column.get(4), Ok(&1));
        assert_eq!(column.get(6), Ok(&15));
        assert_eq!(column[8], 70);

        assert!(matches!(column.get(3), Err(TriangleError::Index(_))));
        assert!(matches!(column.get(9), Err(TriangleError::Index(_))));
    }

    #[test]
    fn test_advance_matches_fresh_columns() {
        let mut column = Column::<u64>::new(0, 6).unwrap();
        for c in 1..=10 {
            column.advance();
            assert_eq!(column, Column::new(c, 6).unwrap(), "advancing into column {}", c);
            assert!(column.is_valid());
        }
    }

    #[test]
    fn test_retreat() {
        let mut column = Column::<u64>::new(7, 9).unwrap();
        for c in (0..7).rev() {
            column.retreat().unwrap();
            assert_eq!(column, Column::new(c, 9).unwrap(), "retreating into column {}", c);
        }

        let before = column.clone();
        assert_eq!(
            column.retreat(),
            Err(TriangleError::OutOfBounds("no previous column".to_string())),
        );
        assert_eq!(column, before);
    }

    #[test]
    fn test_round_trip() {
        let column = Column::<u64>::new(3, 12).unwrap();
        assert_eq!(column.next().previous().unwrap(), column);
    }

    #[test]
    fn test_to_array_coordinates() {
        let entries = Column::<u64>::new(4, 5).unwrap().to_array();
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.row(), 4 + i);
            assert_eq!(entry.position(), 4);
            assert!(entry.is_valid());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Column::<u64>::new(4, 3).unwrap().to_string(),
            "column 4: [1, 5, 15]",
        );
    }
}
