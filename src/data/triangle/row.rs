//! # Row
//!
//! One full row of the triangle, stored compactly. Rows are palindromic and their first two
//! values are always `1` and the row number, so only the interior values up to the midpoint are
//! kept; everything else is derived by reflection at read time. For an odd row the mirrored
//! centre is stored twice, which keeps the advance and retreat recurrences uniform.
use std::cmp;
use std::fmt;
use std::fmt::Display;

use itertools::equal;

use crate::data::number_types::{from_index, TriangleValue};
use crate::data::triangle::entry::Entry;
use crate::data::triangle::error::TriangleError;
use crate::data::triangle::ZeroRange;

/// A row of the triangle holding the values C(n, 0) ..= C(n, n) for a fixed row number n.
///
/// Owns its backing storage exclusively; spare capacity can be pre-allocated through
/// [`Row::with_capacity`] so that repeated in-place advancement never reallocates. The stored
/// slots always describe the *current* row number: advancing and retreating update them
/// incrementally through the Pascal recurrence rather than recomputing the row.
#[derive(Debug, Clone)]
pub struct Row<F> {
    row_number: usize,
    data: Vec<F>,
}

impl<F: TriangleValue> Row<F> {
    /// Number of stored slots for a row.
    ///
    /// Zero for rows up to three (their values are all edge values), `⌈(n - 2) / 2⌉` beyond.
    #[must_use]
    pub fn num_elements(row_number: usize) -> usize {
        if row_number <= 3 {
            0
        } else {
            (row_number - 1) / 2
        }
    }

    /// Compute a row.
    ///
    /// Walks rightward from position one, whose value is the row number, filling the interior
    /// slots with one multiplication and division each.
    #[must_use]
    pub fn new(row_number: usize) -> Self {
        let slots = Self::num_elements(row_number);
        let mut data = Vec::with_capacity(slots);

        if slots > 0 {
            let mut entry = Entry::from_parts(row_number, 1, from_index::<F>(row_number));
            for _ in 0..slots {
                // Positions 2 ..= 1 + slots all lie strictly left of the right edge.
                entry.advance();
                data.push(entry.value().clone());
            }
        }

        Self { row_number, data, }
    }

    /// Compute a row, pre-allocating storage for a larger one.
    ///
    /// # Arguments
    ///
    /// * `row_number`: Row to represent now.
    /// * `capacity_row`: Largest row number this instance should be able to grow to without
    ///   reallocating.
    ///
    /// # Errors
    ///
    /// A domain error when `capacity_row` is smaller than `row_number`.
    pub fn with_capacity(row_number: usize, capacity_row: usize) -> Result<Self, TriangleError> {
        if capacity_row < row_number {
            return Err(TriangleError::Domain(format!(
                "capacity for row {} cannot back row {}", capacity_row, row_number,
            )));
        }

        let mut row = Self::new(row_number);
        row.data.reserve(Self::num_elements(capacity_row) - row.data.len());
        Ok(row)
    }

    /// Wrap an existing backing array.
    ///
    /// The values are taken on faith; [`Row::is_valid`] can check them. Slots beyond the row's
    /// storage requirement are discarded into spare capacity.
    ///
    /// # Errors
    ///
    /// A domain error when the array is too short for the row it should represent.
    pub fn from_raw(row_number: usize, mut data: Vec<F>) -> Result<Self, TriangleError> {
        let slots = Self::num_elements(row_number);
        if data.len() < slots {
            return Err(TriangleError::Domain(format!(
                "row {} needs {} stored values, got {}", row_number, slots, data.len(),
            )));
        }

        data.truncate(slots);
        Ok(Self { row_number, data, })
    }

    /// The row number.
    #[must_use]
    pub fn row_number(&self) -> usize {
        self.row_number
    }

    /// Number of values the row represents, stored or derived.
    #[must_use]
    pub fn len(&self) -> usize {
        self.row_number + 1
    }

    /// A row is never empty; row zero still holds a single one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The value at a position of the row.
    ///
    /// Reads reflect about the midpoint; edge values are synthesized, so the value is returned
    /// by clone rather than by reference.
    ///
    /// # Errors
    ///
    /// An index error when the position lies beyond the row.
    pub fn get(&self, index: usize) -> Result<F, TriangleError> {
        if index > self.row_number {
            return Err(TriangleError::Index(format!(
                "position {} out of range for row {}", index, self.row_number,
            )));
        }

        let reflected = cmp::min(index, self.row_number - index);
        Ok(match reflected {
            0 => F::one(),
            1 => from_index(self.row_number),
            _ => self.data[reflected - 2].clone(),
        })
    }

    /// Advance to the next row, in place.
    ///
    /// Every stored slot is updated through the Pascal recurrence: high to low each slot gains
    /// its predecessor, the lowest slot gains the old row number (the value at position one).
    /// When the new row needs an extra slot it is a copy of the last updated slot — the mirrored
    /// centre — except for the step into row four, which creates the very first slot, C(4, 2).
    pub fn advance(&mut self) {
        let old_row_number = self.row_number;
        self.row_number += 1;

        for i in (1..self.data.len()).rev() {
            let predecessor = self.data[i - 1].clone();
            self.data[i] += predecessor;
        }
        if let Some(lowest) = self.data.first_mut() {
            *lowest += from_index(old_row_number);
        }

        if Self::num_elements(self.row_number) > self.data.len() {
            let appended = match self.data.last() {
                Some(last) => last.clone(),
                None => from_index(6),
            };
            self.data.push(appended);
        }
    }

    /// Retreat to the previous row, in place. The inverse of [`Row::advance`].
    ///
    /// # Errors
    ///
    /// Out of bounds at row zero; the row is untouched.
    pub fn retreat(&mut self) -> Result<(), TriangleError> {
        if self.row_number == 0 {
            return Err(TriangleError::OutOfBounds("no previous row".to_string()));
        }

        self.row_number -= 1;
        self.data.truncate(Self::num_elements(self.row_number));

        if let Some(lowest) = self.data.first_mut() {
            *lowest -= from_index(self.row_number);
        }
        for i in 1..self.data.len() {
            let predecessor = self.data[i - 1].clone();
            self.data[i] -= predecessor;
        }

        Ok(())
    }

    /// The next row.
    #[must_use]
    pub fn next(&self) -> Self {
        let mut moved = self.clone();
        moved.advance();
        moved
    }

    /// The previous row.
    ///
    /// # Errors
    ///
    /// See [`Row::retreat`], the canonical implementation.
    pub fn previous(&self) -> Result<Self, TriangleError> {
        let mut moved = self.clone();
        moved.retreat()?;
        Ok(moved)
    }

    /// Σ f(value) over the full conceptual row.
    ///
    /// Exploits symmetry: every value is passed to `f` twice except the exact centre of an even
    /// row, so `f` is called once per *distinct* position while the sum covers all of them.
    pub fn map_sum<G, M>(&self, f: M) -> G
    where
        G: TriangleValue,
        M: Fn(F) -> G,
    {
        let n = self.row_number;
        let mut total = G::zero();

        match n {
            0 => total += f(F::one()),
            1 => {
                total += f(F::one());
                total += f(F::one());
            },
            2 => {
                total += f(F::one());
                total += f(from_index(2));
                total += f(F::one());
            },
            _ => {
                total += f(F::one());
                total += f(F::one());
                total += f(from_index(n));
                total += f(from_index(n));
                for reflected in 2..=(n / 2) {
                    let value = self.data[reflected - 2].clone();
                    if n % 2 == 0 && reflected == n / 2 {
                        total += f(value);
                    } else {
                        total += f(value.clone());
                        total += f(value);
                    }
                }
            },
        }

        total
    }

    /// The sum of the row: always exactly 2^n, computed in closed form.
    #[must_use]
    pub fn sum(&self) -> F {
        let mut total = F::one();
        for _ in 0..self.row_number {
            total = total.clone() + total;
        }
        total
    }

    /// Whether the stored slots match a freshly computed row of the same number.
    ///
    /// Expensive diagnostic, not for hot paths.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let fresh = Self::new(self.row_number);
        self.data.len() == fresh.data.len() && equal(self.data.iter(), fresh.data.iter())
    }

    /// Materialize the full dense sequence of entries of this row.
    #[must_use]
    pub fn to_array(&self) -> Vec<Entry<F>> {
        ZeroRange::new(self.row_number)
            .iter()
            .map(|position| {
                let value = match self.get(position) {
                    Ok(value) => value,
                    // Positions from the row's own range are always in bounds.
                    Err(_) => unreachable!(),
                };
                Entry::from_parts(self.row_number, position, value)
            })
            .collect()
    }
}

impl<F: PartialEq> PartialEq for Row<F> {
    fn eq(&self, other: &Self) -> bool {
        self.row_number == other.row_number && self.data == other.data
    }
}

impl<F: Eq> Eq for Row<F> {
}

impl<F: TriangleValue> Display for Row<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for position in 0..=self.row_number {
            if position > 0 {
                write!(f, ", ")?;
            }
            match self.get(position) {
                Ok(value) => write!(f, "{}", value)?,
                Err(_) => unreachable!(),
            }
        }
        write!(f, "]")
    }
}
