//! # Entry
//!
//! A single triangle coordinate together with its value, and the movement algebra defined on it.
//!
//! Movement derives the value at an adjacent coordinate from a known value with one
//! multiplication and one division, using the ratio identities of the binomial coefficients. The
//! division comes last: by the combinatorial identities the intermediate product is always
//! exactly divisible, which keeps integer value types exact. The raw value rules live here and
//! are shared by every container type in this crate.
use std::cmp;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;

use crate::data::number_types::{binomial, binomial_exact, from_index, matches_reference, TriangleValue};
use crate::data::triangle::error::TriangleError;

/// Value of the entry directly above, at `(row - 1, position)`.
///
/// Requires `row > 0` and `position < row`.
pub(crate) fn value_up<F: TriangleValue>(row: usize, position: usize, value: F) -> F {
    debug_assert!(row > 0);
    debug_assert!(position < row);

    value * from_index(row - position) / from_index(row)
}

/// Value of the entry directly below, at `(row + 1, position)`. Always defined.
pub(crate) fn value_down<F: TriangleValue>(row: usize, position: usize, value: F) -> F {
    debug_assert!(position <= row);

    value * from_index(row + 1) / from_index(row - position + 1)
}

/// Value of the entry to the left, at `(row, position - 1)`.
///
/// Requires `position > 0`.
pub(crate) fn value_left<F: TriangleValue>(row: usize, position: usize, value: F) -> F {
    debug_assert!(position > 0);
    debug_assert!(position <= row);

    value * from_index(position) / from_index(row - position + 1)
}

/// Value of the entry to the right, at `(row, position + 1)`.
///
/// Requires `position < row`.
pub(crate) fn value_right<F: TriangleValue>(row: usize, position: usize, value: F) -> F {
    debug_assert!(position < row);

    value * from_index(row - position) / from_index(position + 1)
}

/// A single entry of the triangle: a `(row, position)` coordinate and its value.
///
/// The value should equal C(`row`, `position`); this is not enforced when a value is supplied
/// explicitly through [`Entry::with_value`], but [`Entry::is_valid`] can check it.
///
/// Entries produced by the pure movement methods are plain values; the `move_*` family mutates in
/// place for tight loops and is the canonical implementation, the pure methods clone and
/// delegate.
#[derive(Debug, Clone)]
pub struct Entry<F> {
    row: usize,
    position: usize,
    value: F,
}

impl<F: TriangleValue> Entry<F> {
    /// Create an entry at a coordinate, computing its value directly.
    ///
    /// # Arguments
    ///
    /// * `row`: Row of the triangle, starting at zero.
    /// * `position`: Position within the row, at most `row`.
    ///
    /// # Errors
    ///
    /// A domain error when the position lies beyond the row.
    pub fn new(row: usize, position: usize) -> Result<Self, TriangleError> {
        if position > row {
            return Err(TriangleError::Domain(
                format!("position {} exceeds row {}", position, row),
            ));
        }

        Ok(Self { row, position, value: binomial(row, position), })
    }

    /// Create an entry with an explicitly supplied value.
    ///
    /// The coordinate is checked, the value is taken on faith; an escape hatch for callers that
    /// already hold the value and don't want it recomputed.
    ///
    /// # Errors
    ///
    /// A domain error when the position lies beyond the row.
    pub fn with_value(row: usize, position: usize, value: F) -> Result<Self, TriangleError> {
        if position > row {
            return Err(TriangleError::Domain(
                format!("position {} exceeds row {}", position, row),
            ));
        }

        Ok(Self { row, position, value, })
    }

    /// Create an entry from parts known to be consistent.
    pub(crate) fn from_parts(row: usize, position: usize, value: F) -> Self {
        debug_assert!(position <= row);

        Self { row, position, value, }
    }

    /// Row coordinate.
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Position within the row.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The value held at this coordinate.
    #[must_use]
    pub fn value(&self) -> &F {
        &self.value
    }

    /// Consume the entry, yielding its value.
    #[must_use]
    pub fn into_value(self) -> F {
        self.value
    }

    /// Whether this is the apex entry `(0, 0)`.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.row == 0 && self.position == 0
    }

    /// Whether this entry sits on the left edge of the triangle.
    #[must_use]
    pub fn is_at_left(&self) -> bool {
        self.position == 0
    }

    /// Whether this entry sits on the right edge of the triangle.
    #[must_use]
    pub fn is_at_right(&self) -> bool {
        self.position >= self.row
    }

    /// Whether this entry touches neither edge of the triangle.
    #[must_use]
    pub fn is_interior(&self) -> bool {
        self.row >= 2 && self.position > 0 && self.position < self.row
    }

    /// Whether two entries are horizontal neighbors: same row, positions one apart.
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.row == other.row && cmp::max(self.position, other.position)
            - cmp::min(self.position, other.position) == 1
    }

    /// Whether `other` can be subtracted from this entry.
    ///
    /// This entry must be interior and one row below `other`, at the same position or one to its
    /// right; that makes the two a parent-child pair of the Pascal recurrence.
    #[must_use]
    pub fn is_subtractable(&self, other: &Self) -> bool {
        self.row == other.row + 1
            && (self.position == other.position || self.position == other.position + 1)
            && self.is_interior()
    }

    /// Move to the entry directly above, in place.
    ///
    /// # Errors
    ///
    /// Out of bounds at the top of the triangle or on the right edge; the entry is untouched.
    pub fn move_up(&mut self) -> Result<(), TriangleError> {
        if self.row == 0 {
            return Err(TriangleError::OutOfBounds("no entry above".to_string()));
        }
        if self.position >= self.row {
            return Err(TriangleError::OutOfBounds(
                "no entry above at the right edge".to_string(),
            ));
        }

        self.value = value_up(self.row, self.position, self.value.clone());
        self.row -= 1;

        Ok(())
    }

    /// Move to the entry directly below, in place. Always legal.
    pub fn move_down(&mut self) {
        self.value = value_down(self.row, self.position, self.value.clone());
        self.row += 1;
    }

    /// Move one position to the left, in place.
    ///
    /// # Errors
    ///
    /// Out of bounds on the left edge; the entry is untouched.
    pub fn move_left(&mut self) -> Result<(), TriangleError> {
        if self.position == 0 {
            return Err(TriangleError::OutOfBounds("no entry to the left".to_string()));
        }

        self.value = value_left(self.row, self.position, self.value.clone());
        self.position -= 1;

        Ok(())
    }

    /// Move one position to the right, in place.
    ///
    /// # Errors
    ///
    /// Out of bounds on the right edge; the entry is untouched.
    pub fn move_right(&mut self) -> Result<(), TriangleError> {
        if self.position >= self.row {
            return Err(TriangleError::OutOfBounds("no entry to the right".to_string()));
        }

        self.value = value_right(self.row, self.position, self.value.clone());
        self.position += 1;

        Ok(())
    }

    /// Move to the next entry in reading order, in place. Always legal.
    ///
    /// The entry to the right, or the first entry of the next row (value one) when this entry
    /// sits on the right edge.
    pub fn advance(&mut self) {
        if self.is_at_right() {
            self.row += 1;
            self.position = 0;
            self.value = F::one();
        } else {
            self.value = value_right(self.row, self.position, self.value.clone());
            self.position += 1;
        }
    }

    /// Move to the previous entry in reading order, in place.
    ///
    /// The entry to the left, or the last entry of the previous row (value one) when this entry
    /// sits on the left edge.
    ///
    /// # Errors
    ///
    /// Out of bounds at the apex; the entry is untouched.
    pub fn retreat(&mut self) -> Result<(), TriangleError> {
        if self.is_first() {
            return Err(TriangleError::OutOfBounds("no entry before the apex".to_string()));
        }

        if self.is_at_left() {
            self.row -= 1;
            self.position = self.row;
            self.value = F::one();
        } else {
            self.value = value_left(self.row, self.position, self.value.clone());
            self.position -= 1;
        }

        Ok(())
    }

    /// The entry directly above.
    ///
    /// # Errors
    ///
    /// See [`Entry::move_up`], the canonical implementation.
    pub fn up(&self) -> Result<Self, TriangleError> {
        let mut moved = self.clone();
        moved.move_up()?;
        Ok(moved)
    }

    /// The entry directly below.
    #[must_use]
    pub fn down(&self) -> Self {
        let mut moved = self.clone();
        moved.move_down();
        moved
    }

    /// The entry one position to the left.
    ///
    /// # Errors
    ///
    /// See [`Entry::move_left`], the canonical implementation.
    pub fn left(&self) -> Result<Self, TriangleError> {
        let mut moved = self.clone();
        moved.move_left()?;
        Ok(moved)
    }

    /// The entry one position to the right.
    ///
    /// # Errors
    ///
    /// See [`Entry::move_right`], the canonical implementation.
    pub fn right(&self) -> Result<Self, TriangleError> {
        let mut moved = self.clone();
        moved.move_right()?;
        Ok(moved)
    }

    /// The next entry in reading order.
    #[must_use]
    pub fn next(&self) -> Self {
        let mut moved = self.clone();
        moved.advance();
        moved
    }

    /// The previous entry in reading order.
    ///
    /// # Errors
    ///
    /// See [`Entry::retreat`], the canonical implementation.
    pub fn previous(&self) -> Result<Self, TriangleError> {
        let mut moved = self.clone();
        moved.retreat()?;
        Ok(moved)
    }

    /// Add two horizontally adjacent entries, yielding the entry below both.
    ///
    /// This is the Pascal recurrence: the result sits at
    /// `(row + 1, max(position, other position))` and holds the sum of the two values.
    ///
    /// # Errors
    ///
    /// A non-adjacent error when the entries are not horizontal neighbors.
    pub fn checked_add(&self, other: &Self) -> Result<Self, TriangleError> {
        if !self.is_adjacent(other) {
            return Err(TriangleError::NonAdjacent(format!(
                "entries ({}, {}) and ({}, {}) are not adjacent",
                self.row, self.position, other.row, other.position,
            )));
        }

        Ok(Self::from_parts(
            self.row + 1,
            cmp::max(self.position, other.position),
            self.value.clone() + other.value.clone(),
        ))
    }

    /// Subtract a parent entry from this entry, yielding the parent's sibling.
    ///
    /// The inverse of the Pascal recurrence: for an interior entry one row below `other`, the
    /// result sits at `(other row, 2 * position - other position - 1)` and holds the difference
    /// of the values.
    ///
    /// # Errors
    ///
    /// A non-adjacent error when `other` is not in the required relative position, see
    /// [`Entry::is_subtractable`].
    pub fn checked_sub(&self, other: &Self) -> Result<Self, TriangleError> {
        if !self.is_subtractable(other) {
            return Err(TriangleError::NonAdjacent(format!(
                "entry ({}, {}) cannot be subtracted from ({}, {})",
                other.row, other.position, self.row, self.position,
            )));
        }

        Ok(Self::from_parts(
            other.row,
            2 * self.position - other.position - 1,
            self.value.clone() - other.value.clone(),
        ))
    }

    /// Compare against an entry with a possibly different value type, within a relative
    /// tolerance.
    ///
    /// Coordinates must match exactly; the values are compared through `f64`.
    #[must_use]
    pub fn approx_eq<G: TriangleValue>(&self, other: &Entry<G>, relative_tolerance: f64) -> bool {
        self.row == other.row && self.position == other.position
            && match (self.value.to_f64(), other.value.to_f64()) {
                (Some(left), Some(right)) => {
                    left == right
                        || (left - right).abs()
                            <= f64::max(left.abs(), right.abs()) * relative_tolerance
                },
                _ => false,
            }
    }

    /// Whether the held value equals C(`row`, `position`).
    ///
    /// Checked against an arbitrary-precision reference, so large coordinates don't overflow the
    /// check itself. Expensive; a diagnostic, not for hot paths.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches_reference(&self.value, &binomial_exact(self.row, self.position))
    }
}

impl<F, G> PartialEq<Entry<G>> for Entry<F>
where
    F: PartialEq<G>,
{
    fn eq(&self, other: &Entry<G>) -> bool {
        self.row == other.row && self.position == other.position && self.value == other.value
    }
}

impl<F: Eq> Eq for Entry<F> {
}

/// Entries order by value alone; the coordinate is ignored.
///
/// This order is meant for heap-based scans over the triangle (detecting value collisions, for
/// example) and deliberately disagrees with `Eq`, which compares coordinates as well. `Ord` is
/// therefore not implemented.
impl<F: TriangleValue> PartialOrd for Entry<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<F: Display> Display for Entry<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "C({}, {}) = {}", self.row, self.position, self.value)
    }
}
