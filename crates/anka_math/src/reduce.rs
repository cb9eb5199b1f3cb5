//! Digit-sum reduction with master-number halting.
//!
//! A value collapses by repeatedly summing its decimal digits until it is a
//! single digit or a master number. Masters are recognised only as running
//! totals: 29 stops at 11, while 39 passes through 12 on its way to 3.

use serde::Serialize;

use crate::digits::digit_sum;

/// Values at which reduction stops early.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Whether `value` is one of 11, 22, 33.
pub const fn is_master_number(value: u64) -> bool {
    matches!(value, 11 | 22 | 33)
}

/// Result of reducing one value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reduction {
    /// Final value, always in 0..=9 or a master number.
    pub value: u32,
    /// Running totals; first is the input, last equals `value`.
    pub steps: Vec<u64>,
}

impl Reduction {
    /// The value that was reduced.
    pub fn input(&self) -> u64 {
        self.steps.first().copied().unwrap_or(0)
    }

    pub fn is_master(&self) -> bool {
        is_master_number(u64::from(self.value))
    }
}

/// Reduce `value` to a single digit or master number.
pub fn reduce(value: u64) -> Reduction {
    if value == 0 {
        return Reduction {
            value: 0,
            steps: vec![0],
        };
    }

    let mut current = value;
    let mut steps = vec![current];
    while current > 9 && !is_master_number(current) {
        current = digit_sum(current);
        steps.push(current);
    }

    // Loop exit guarantees current <= 33.
    Reduction {
        value: current as u32,
        steps,
    }
}

/// Reduce the absolute value of a signed input.
pub fn reduce_signed(value: i64) -> Reduction {
    reduce(value.unsigned_abs())
}

/// Shorthand for `reduce(value).value`.
pub fn reduce_value(value: u64) -> u32 {
    reduce(value).value
}
