//! # Number types
//!
//! The containers in this crate are generic over the type of the values they hold. This module
//! defines the bound those types satisfy, together with the direct (non-incremental) computation
//! of binomial coefficients used to seed containers and to verify them.
//!
//! The bound is "mathematically a semiring with exact division where divisibility holds", but the
//! implementations aren't held to that contract: floating point types satisfy the trait and are
//! merely approximately correct, which is sometimes what a caller wants.
use std::cmp;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use num_bigint::BigUint;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

/// Relative tolerance used when a value can only be compared through `f64`.
///
/// Only relevant for values too large for `u128`, see `matches_reference`.
const LARGE_VALUE_RELATIVE_TOLERANCE: f64 = 1e-9;

/// Value type of a triangle entry.
///
/// Requires the constants `0` and `1`, ring operations with exact division (exactness holds for
/// integer types by the combinatorial identities, see the order of operations in the movement
/// algebra), comparison and conversion from and to primitives.
///
/// Automatically implemented for all types satisfying the trait's bounds: the primitive integers,
/// `f32`/`f64` and `num_bigint::BigUint` all qualify.
pub trait TriangleValue:
    Zero +
    One +
    PartialEq +
    PartialOrd +
    Add<Output = Self> +
    AddAssign +
    Sub<Output = Self> +
    SubAssign +
    Mul<Output = Self> +
    MulAssign +
    Div<Output = Self> +
    DivAssign +
    FromPrimitive +
    ToPrimitive +
    Clone +
    Display +
    Debug +
{
}

impl<T> TriangleValue for T
where
    T: Zero + One + PartialEq + PartialOrd +
        Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign +
        Mul<Output = Self> + MulAssign + Div<Output = Self> + DivAssign +
        FromPrimitive + ToPrimitive + Clone + Display + Debug,
{
}

/// Convert a coordinate into the value type.
///
/// Total: when the type offers no direct conversion, the value is built by repeated addition of
/// the multiplicative identity.
pub fn from_index<F: TriangleValue>(index: usize) -> F {
    F::from_usize(index).unwrap_or_else(|| {
        let mut value = F::zero();
        for _ in 0..index {
            value = value + F::one();
        }
        value
    })
}

/// Compute the binomial coefficient C(`row`, `position`) directly.
///
/// Product form with the factors ordered such that every intermediate value is itself a binomial
/// coefficient; for integer types every division is therefore exact. Cost is linear in
/// `min(position, row - position)`, which is why callers prefer deriving neighboring values
/// through movement once a single value is known.
///
/// # Arguments
///
/// * `row`: Row of the triangle, starting at zero.
/// * `position`: Position within the row, at most `row`.
pub fn binomial<F: TriangleValue>(row: usize, position: usize) -> F {
    debug_assert!(position <= row);

    let smaller = cmp::min(position, row - position);
    let mut value = F::one();
    for i in 1..=smaller {
        // The intermediate product is divisible, divide last.
        value = value * from_index::<F>(row - smaller + i) / from_index::<F>(i);
    }

    value
}

/// Compute C(`row`, `position`) in arbitrary precision.
///
/// Reference values for the `is_valid` diagnostics; can't overflow.
pub fn binomial_exact(row: usize, position: usize) -> BigUint {
    debug_assert!(position <= row);

    let smaller = cmp::min(position, row - position);
    let mut value = BigUint::one();
    for i in 1..=smaller {
        value = value * BigUint::from(row - smaller + i) / BigUint::from(i);
    }

    value
}

/// Compare a held value against an arbitrary-precision reference coefficient.
///
/// When the reference is representable in the value type the comparison is done by the value
/// type's own equality (exact for integers, exact-float for floats). Beyond `u128` range the
/// comparison degrades to a relative `f64` comparison.
pub fn matches_reference<F: TriangleValue>(value: &F, reference: &BigUint) -> bool {
    match reference.to_u128().and_then(F::from_u128) {
        Some(reference) => *value == reference,
        None => match (value.to_f64(), reference.to_f64()) {
            (Some(value), Some(reference)) => {
                (value - reference).abs() <= reference.abs() * LARGE_VALUE_RELATIVE_TOLERANCE
            },
            _ => false,
        },
    }
}

#[cfg(test)]
mod test {
    use num_bigint::BigUint;

    use crate::data::number_types::{binomial, binomial_exact, from_index, matches_reference, TriangleValue};

    fn small_coefficients<F: TriangleValue>() {
        assert_eq!(binomial::<F>(0, 0), F::one());
        assert_eq!(binomial::<F>(1, 0), F::one());
        assert_eq!(binomial::<F>(4, 2), from_index(6));
        assert_eq!(binomial::<F>(5, 3), from_index(10));
        assert_eq!(binomial::<F>(15, 6), from_index(5005));
        assert_eq!(binomial::<F>(15, 9), from_index(5005));
    }

    #[test]
    fn test_small_coefficients() {
        small_coefficients::<u64>();
        small_coefficients::<i64>();
        small_coefficients::<u128>();
        small_coefficients::<f64>();
        small_coefficients::<BigUint>();
    }

    #[test]
    fn test_exact_matches_generic() {
        for row in 0..30 {
            for position in 0..=row {
                let reference = binomial_exact(row, position);
                assert!(matches_reference(&binomial::<u64>(row, position), &reference));
                assert!(matches_reference(&binomial::<f64>(row, position), &reference));
            }
        }
    }

    #[test]
    fn test_large_row_exact() {
        // C(100, 50) does not fit in 64 bits.
        let value = binomial::<BigUint>(100, 50);
        assert_eq!(value, binomial_exact(100, 50));
        assert_eq!(
            value.to_string(),
            "100891344545564193334812497256",
        );
    }

    #[test]
    fn test_matches_reference_rejects() {
        assert!(!matches_reference(&7_u64, &binomial_exact(4, 2)));
        assert!(!matches_reference(&6.5_f64, &binomial_exact(4, 2)));
    }

    #[test]
    fn test_from_index() {
        assert_eq!(from_index::<u8>(200), 200);
        assert_eq!(from_index::<f32>(3), 3f32);
        assert_eq!(from_index::<BigUint>(42), BigUint::from(42_u32));
    }
}
