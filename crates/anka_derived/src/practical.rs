//! Address and telephone numbers.

use anka_letters::{LetterToken, detect_script, prepare_letters};
use anka_math::{digits_in_text, reduce, sum_digits};
use log::trace;
use serde::Serialize;

/// Address number, from digits when the text has any, else from letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AddressNumber {
    Digits {
        digits: Vec<u8>,
        total: u64,
        number: u32,
        steps: Vec<u64>,
    },
    Letters {
        tokens: Vec<LetterToken>,
        total: u64,
        number: u32,
        steps: Vec<u64>,
    },
}

impl AddressNumber {
    pub fn number(&self) -> u32 {
        match self {
            Self::Digits { number, .. } | Self::Letters { number, .. } => *number,
        }
    }

    pub fn total(&self) -> u64 {
        match self {
            Self::Digits { total, .. } | Self::Letters { total, .. } => *total,
        }
    }
}

/// Address number of free text.
///
/// Any ASCII digit switches to digit mode and letters are then ignored.
/// Otherwise the letters are valued with the detected script's table.
/// `None` for blank text or text with nothing to value.
pub fn address_number(text: &str) -> Option<AddressNumber> {
    if text.trim().is_empty() {
        return None;
    }
    let digits = digits_in_text(text);
    if !digits.is_empty() {
        let total = sum_digits(&digits);
        let reduction = reduce(total);
        return Some(AddressNumber::Digits {
            digits,
            total,
            number: reduction.value,
            steps: reduction.steps,
        });
    }

    let prepared = prepare_letters(text, detect_script(text));
    if prepared.tokens.is_empty() {
        trace!("event=address_empty script={}", prepared.script.tag());
        return None;
    }
    let total = prepared.total();
    let reduction = reduce(total);
    Some(AddressNumber::Letters {
        tokens: prepared.tokens,
        total,
        number: reduction.value,
        steps: reduction.steps,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Telephone {
    pub digits: Vec<u8>,
    pub total: u64,
    pub number: u32,
    pub steps: Vec<u64>,
}

/// Reduced digit sum of a phone number. `None` without digits.
pub fn telephone_number(text: &str) -> Option<Telephone> {
    let digits = digits_in_text(text);
    if digits.is_empty() {
        return None;
    }
    let total = sum_digits(&digits);
    let reduction = reduce(total);
    Some(Telephone {
        digits,
        total,
        number: reduction.value,
        steps: reduction.steps,
    })
}
