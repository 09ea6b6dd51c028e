//! Cross-container properties of the incremental triangle.
use itertools::Itertools;
use num_bigint::BigUint;
use proptest::prelude::*;

use ript::data::number_types::{binomial, binomial_exact, matches_reference};
use ript::data::triangle::{Centre, Column, Entry, LazyCentre, LazyColumn, Row, TriangleError};

#[test]
fn example_scenarios() {
    let entry = Entry::<u64>::new(15, 6).unwrap();
    assert_eq!(entry.value(), &5005);
    assert_eq!(entry.row(), 15);
    assert_eq!(entry.position(), 6);

    let row = Row::<u64>::new(5);
    let values: Vec<u64> = (0..row.len()).map(|i| row.get(i).unwrap()).collect();
    assert_eq!(values, vec![1, 5, 10, 10, 5, 1]);

    let column = Column::<u64>::new(4, 5).unwrap();
    let values: Vec<u64> = column.to_array().into_iter().map(Entry::into_value).collect();
    assert_eq!(values, vec![1, 5, 15, 35, 70]);
}

#[test]
fn constructors_reject_malformed_coordinates() {
    assert!(matches!(Entry::<u64>::new(15, 20), Err(TriangleError::Domain(_))));
    assert!(matches!(Row::<u64>::from_raw(6, vec![]), Err(TriangleError::Domain(_))));
    assert!(matches!(Column::<u64>::new(2, 0), Err(TriangleError::Domain(_))));
}

#[test]
fn adjacent_pairs_sum_to_the_next_row() {
    for n in 1..12 {
        let row = Row::<u64>::new(n);
        let below = Row::<u64>::new(n + 1);
        for (left, right) in row.to_array().into_iter().tuple_windows() {
            let sum = left.checked_add(&right).unwrap();
            assert_eq!(sum.row(), n + 1);
            assert_eq!(*sum.value(), below.get(sum.position()).unwrap());
        }
    }
}

#[test]
fn subtraction_inverts_the_recurrence() {
    for n in 2..12_usize {
        for k in 1..n {
            let child = Entry::<u64>::new(n, k).unwrap();
            let parent = Entry::<u64>::new(n - 1, k).unwrap();
            let sibling = child.checked_sub(&parent).unwrap();
            assert!(sibling.is_valid());
        }
    }
}

#[test]
fn eager_and_lazy_columns_agree() {
    for column_number in [0, 1, 5, 11] {
        let eager = Column::<u64>::new(column_number, 20).unwrap();
        let mut lazy = LazyColumn::<u64>::new(column_number);
        assert_eq!(lazy.to_array(20), eager.to_array());
    }
}

#[test]
fn eager_and_lazy_centres_agree() {
    let eager = Centre::<BigUint>::new(40);
    let mut lazy = LazyCentre::<BigUint>::new();
    assert_eq!(lazy.to_array(41), eager.to_array());
}

proptest! {
    #[test]
    fn entry_value_matches_direct_computation(row in 0_usize..60, seed in 0_usize..1024) {
        let position = seed % (row + 1);
        let entry = Entry::<u64>::new(row, position).unwrap();
        prop_assert!(matches_reference(entry.value(), &binomial_exact(row, position)));
    }

    #[test]
    fn movement_round_trips(row in 1_usize..40, seed in 0_usize..1024) {
        // Interior coordinates, so that every direction is legal.
        let row = row + 1;
        let position = 1 + seed % (row - 1);
        let entry = Entry::<u64>::new(row, position).unwrap();

        prop_assert_eq!(entry.down().up().unwrap(), entry.clone());
        prop_assert_eq!(entry.up().unwrap().down(), entry.clone());
        prop_assert_eq!(entry.left().unwrap().right().unwrap(), entry.clone());
        prop_assert_eq!(entry.right().unwrap().left().unwrap(), entry.clone());
        prop_assert_eq!(entry.next().previous().unwrap(), entry.clone());
        prop_assert_eq!(entry.previous().unwrap().next(), entry);
    }

    #[test]
    fn row_sums_are_powers_of_two(row_number in 0_usize..30) {
        let row = Row::<u64>::new(row_number);
        prop_assert_eq!(row.sum(), 1_u64 << row_number);
        prop_assert_eq!(row.map_sum(|value| value), 1_u64 << row_number);
    }

    #[test]
    fn rows_advance_and_retreat_consistently(start in 0_usize..25, steps in 1_usize..10) {
        let mut row = Row::<u64>::new(start);
        for _ in 0..steps {
            row.advance();
        }
        prop_assert_eq!(row.clone(), Row::new(start + steps));
        for _ in 0..steps {
            row.retreat().unwrap();
        }
        prop_assert_eq!(row, Row::new(start));
    }

    #[test]
    fn columns_hold_their_coefficients(column_number in 0_usize..12, len in 1_usize..20) {
        let column = Column::<u64>::new(column_number, len).unwrap();
        for i in column.first_row()..=column.last_row() {
            prop_assert_eq!(column.get(i).unwrap(), &binomial::<u64>(i, column_number));
        }
    }

    #[test]
    fn lazy_columns_survive_movement(column_number in 1_usize..10, probe in 0_usize..30) {
        let mut lazy = LazyColumn::<u64>::new(column_number);
        let _ = lazy.get(column_number + probe).unwrap();

        lazy.advance();
        prop_assert!(lazy.is_valid());
        lazy.retreat().unwrap();
        prop_assert!(lazy.is_valid());
        prop_assert_eq!(lazy.column_number(), column_number);
    }

    #[test]
    fn centres_match_direct_computation(row in 0_usize..50) {
        let mut lazy = LazyCentre::<u64>::new();
        prop_assert!(matches_reference(&lazy.get(row), &binomial_exact(row, row / 2)));
    }
}
