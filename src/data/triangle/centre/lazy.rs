//! # Lazy centre
//!
//! Central elements computed on demand, cached in a map keyed by row number. Same neighborhood
//! pre-fill policy as the lazy column, with the position parity adjusted while walking so the
//! floor-division convention holds at every row.
use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;

use crate::data::number_types::{binomial, binomial_exact, from_index, matches_reference, TriangleValue};
use crate::data::triangle::column::PRECALC_NUMBER;
use crate::data::triangle::entry::{value_down, value_up, Entry};

/// The values C(n, ⌊n/2⌋) for arbitrary rows n, computed and cached on first access.
///
/// Seeded with rows zero and one, both trivially one. Logically unbounded; the cache grows
/// without bound and is never evicted. Reads mutate the cache, hence the `&mut` receiver of
/// [`Lazy::get`].
#[derive(Debug, Clone, PartialEq)]
pub struct Lazy<F> {
    data: HashMap<usize, F>,
}

impl<F: TriangleValue> Lazy<F> {
    /// Create a lazy centre sequence, seeded with the two trivial rows.
    #[must_use]
    pub fn new() -> Self {
        let mut data = HashMap::new();
        data.insert(0, F::one());
        data.insert(1, F::one());
        Self { data, }
    }

    /// Number of values currently cached.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.data.len()
    }

    /// The central value of a row, computing it if necessary. Total: every row has a centre.
    ///
    /// A cache miss computes the value directly from the binomial formula and then walks up to
    /// [`PRECALC_NUMBER`] rows in each direction: doubling into even rows and moving down into
    /// odd rows on the way down, halving out of even rows and moving up out of odd rows on the
    /// way up.
    pub fn get(&mut self, row: usize) -> F {
        if let Some(value) = self.data.get(&row) {
            return value.clone();
        }

        let value: F = binomial(row, row / 2);
        self.data.insert(row, value.clone());

        let mut moving = value.clone();
        for below in row + 1..=row + PRECALC_NUMBER {
            moving = if below % 2 == 0 {
                moving.clone() + moving
            } else {
                value_down(below - 1, (below - 1) / 2, moving)
            };
            self.data.entry(below).or_insert_with(|| moving.clone());
        }

        let mut moving = value.clone();
        for above in (row.saturating_sub(PRECALC_NUMBER)..row).rev() {
            let current = above + 1;
            moving = if current % 2 == 0 {
                moving / from_index(2)
            } else {
                value_up(current, current / 2, moving)
            };
            self.data.entry(above).or_insert_with(|| moving.clone());
        }

        value
    }

    /// Whether every cached value matches its coefficient exactly, checked in arbitrary
    /// precision.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.data.iter()
            .all(|(&row, value)| matches_reference(value, &binomial_exact(row, row / 2)))
    }

    /// Materialize the centres of the first `len` rows, computing any that are missing.
    #[must_use]
    pub fn to_array(&mut self, len: usize) -> Vec<Entry<F>> {
        (0..len)
            .map(|row| Entry::from_parts(row, row / 2, self.get(row)))
            .collect()
    }
}

impl<F: TriangleValue> Default for Lazy<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: TriangleValue> Display for Lazy<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "lazy centres: {} values cached", self.data.len())
    }
}

#[cfg(test)]
mod test {
    use num_bigint::BigUint;

    use crate::data::number_types::{binomial_exact, matches_reference, TriangleValue};
    use crate::data::triangle::centre::{Centre, LazyCentre};
    use crate::data::triangle::column::PRECALC_NUMBER;

    fn agrees_with_eager<F: TriangleValue>() {
        let eager = Centre::<F>::new(14);
        let mut lazy = LazyCentre::<F>::new();
        assert_eq!(lazy.to_array(15), eager.to_array());
    }

    #[test]
    fn test_agrees_with_eager() {
        agrees_with_eager::<u64>();
        agrees_with_eager::<f64>();
        agrees_with_eager::<BigUint>();
    }

    #[test]
    fn test_seeded_rows() {
        let mut centre = LazyCentre::<u64>::new();
        assert_eq!(centre.cached(), 2);
        assert_eq!(centre.get(0), 1);
        assert_eq!(centre.get(1), 1);
        // The seeds were hits; nothing was computed.
        assert_eq!(centre.cached(), 2);
    }

    #[test]
    fn test_miss_fills_a_neighborhood() {
        let mut centre = LazyCentre::<u64>::new();
        assert_eq!(centre.get(20), 184_756);
        // Rows 15 ..= 25 plus the two seeds.
        assert_eq!(centre.cached(), 2 * PRECALC_NUMBER + 1 + 2);
        assert!(centre.is_valid());

        // A nearby hit computes nothing new.
        assert_eq!(centre.get(17), 24_310);
        assert_eq!(centre.cached(), 2 * PRECALC_NUMBER + 1 + 2);
    }

    #[test]
    fn test_walk_up_respects_parity() {
        let mut centre = LazyCentre::<u64>::new();
        // A miss at an odd row walks up through both parities.
        let _ = centre.get(9);
        for row in 4..=9 {
            assert!(
                matches_reference(&centre.get(row), &binomial_exact(row, row / 2)),
                "row {}", row,
            );
        }
    }

    #[test]
    fn test_large_rows_exact() {
        let mut centre = LazyCentre::<BigUint>::new();
        assert_eq!(
            centre.get(100).to_string(),
            "100891344545564193334812497256",
        );
        assert!(centre.is_valid());
    }
}
