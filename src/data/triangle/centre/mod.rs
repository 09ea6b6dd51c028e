//! # Centre types
//!
//! The central element of each row, C(n, ⌊n/2⌋), indexed by the row number directly. Structurally
//! these mirror the column types, with one twist: stepping from one row's centre to the next is
//! not a plain downward movement, because the centre position shifts with the parity of the row.
//! Stepping into an even row doubles the value (C(2m, m) = 2 C(2m - 1, m - 1)); stepping into an
//! odd row keeps the position and is a plain downward movement.
pub use dense::Dense as Centre;
pub use lazy::Lazy as LazyCentre;

mod dense;
mod lazy;
