//! Digit arithmetic shared by every numerology calculator.
//!
//! This crate provides:
//! - Digit-sum reduction that halts on the master numbers 11, 22 and 33
//! - Decimal digit extraction from integers and free text
//!
//! Everything here is a pure function over integers; no allocation beyond
//! the returned step and digit vectors.

pub mod digits;
pub mod reduce;

pub use digits::{digit_sum, digits_in_text, digits_of, sum_digits};
pub use reduce::{MASTER_NUMBERS, Reduction, is_master_number, reduce, reduce_signed, reduce_value};
