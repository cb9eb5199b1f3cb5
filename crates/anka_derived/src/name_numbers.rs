//! Numbers combined from name numbers and other reduced numbers.

use anka_letters::{LetterClass, prepare_latin};
use anka_math::{reduce, reduce_value};
use serde::Serialize;

/// Consonants summed into the balance number.
pub const BALANCE_CONSONANTS: usize = 4;

/// Maturity: the reduced sum of name and destiny numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Maturity {
    /// Unreduced sum.
    pub combined: u64,
    pub number: u32,
    pub steps: Vec<u64>,
}

pub fn maturity_number(name: u32, destiny: u32) -> Maturity {
    let combined = u64::from(name) + u64::from(destiny);
    let reduction = reduce(combined);
    Maturity {
        combined,
        number: reduction.value,
        steps: reduction.steps,
    }
}

/// First valued letter of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cornerstone {
    pub letter: char,
    pub value: u32,
    pub number: u32,
}

/// Cornerstone of `name` under the Latin table, `None` when no letter is
/// valued.
pub fn cornerstone(name: &str) -> Option<Cornerstone> {
    let first = prepare_latin(name).tokens.into_iter().next()?;
    Some(Cornerstone {
        letter: first.label,
        value: first.value,
        number: reduce_value(u64::from(first.value)),
    })
}

/// A consonant counted toward the balance number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceLetter {
    pub letter: char,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub letters: Vec<BalanceLetter>,
    pub total: u64,
    pub number: u32,
    pub steps: Vec<u64>,
}

/// Balance of `name`: the first [`BALANCE_CONSONANTS`] Latin consonants.
///
/// `None` when the name has no consonant.
pub fn balance_number(name: &str) -> Option<Balance> {
    let letters: Vec<BalanceLetter> = prepare_latin(name)
        .tokens
        .into_iter()
        .filter(|t| t.class == LetterClass::Consonant)
        .take(BALANCE_CONSONANTS)
        .map(|t| BalanceLetter {
            letter: t.label,
            value: t.value,
        })
        .collect();
    if letters.is_empty() {
        return None;
    }
    let total = letters.iter().map(|l| u64::from(l.value)).sum();
    let reduction = reduce(total);
    Some(Balance {
        letters,
        total,
        number: reduction.value,
        steps: reduction.steps,
    })
}

/// Bridge between two numbers: the reduced absolute difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bridge {
    pub difference: u64,
    pub number: u32,
    pub steps: Vec<u64>,
}

pub fn bridge_number(a: u32, b: u32) -> Bridge {
    let difference = u64::from(a.abs_diff(b));
    let reduction = reduce(difference);
    Bridge {
        difference,
        number: reduction.value,
        steps: reduction.steps,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthProfile {
    /// The numbers that were present, in argument order.
    pub components: Vec<u32>,
    pub total: u64,
    pub number: u32,
    pub steps: Vec<u64>,
}

/// Health profile from name, personal-year and birthday numbers.
///
/// Absent inputs are skipped; `None` when all three are absent.
pub fn health_profile(
    name: Option<u32>,
    personal_year: Option<u32>,
    birthday: Option<u32>,
) -> Option<HealthProfile> {
    let components: Vec<u32> = [name, personal_year, birthday].into_iter().flatten().collect();
    if components.is_empty() {
        return None;
    }
    let total = components.iter().map(|&c| u64::from(c)).sum();
    let reduction = reduce(total);
    Some(HealthProfile {
        components,
        total,
        number: reduction.value,
        steps: reduction.steps,
    })
}

/// One transit number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transit {
    /// Name-side number the personal year was added to.
    pub base: u32,
    pub number: u32,
    pub steps: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transits {
    /// Consonant number plus personal year.
    pub physical: Transit,
    /// Vowel number plus personal year.
    pub mental: Transit,
    /// Name number plus personal year.
    pub spiritual: Transit,
}

fn transit(base: u32, personal_year: u32) -> Transit {
    let reduction = reduce(u64::from(base) + u64::from(personal_year));
    Transit {
        base,
        number: reduction.value,
        steps: reduction.steps,
    }
}

pub fn transit_numbers(name: u32, vowel: u32, consonant: u32, personal_year: u32) -> Transits {
    Transits {
        physical: transit(consonant, personal_year),
        mental: transit(vowel, personal_year),
        spiritual: transit(name, personal_year),
    }
}
