//! Essence cycle: a sliding three-letter window over a name, one entry per
//! year.

use anka_letters::NameBreakdown;
use anka_math::reduce;
use serde::Serialize;

use crate::date_numbers::consecutive_years;

/// Entries in an essence cycle when the caller has no preference.
pub const DEFAULT_ESSENCE_LENGTH: usize = 13;

/// Letters summed per essence year.
const WINDOW: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EssenceEntry {
    pub year: i32,
    pub total: u64,
    pub number: u32,
    pub steps: Vec<u64>,
}

/// Essence entries for `length` years from `start_year`.
///
/// Entry `i` sums the letter values at positions `i..i + 3`, wrapping
/// around the end of the name. A name without letters yields no entries,
/// and the cycle ends early rather than run past `i32::MAX`.
pub fn essence_cycle(name: &NameBreakdown, start_year: i32, length: usize) -> Vec<EssenceEntry> {
    let values = name.values();
    if values.is_empty() {
        return Vec::new();
    }
    consecutive_years(start_year, length)
        .enumerate()
        .map(|(offset, year)| {
            let total: u64 = (offset..offset + WINDOW)
                .map(|i| u64::from(values[i % values.len()]))
                .sum();
            let reduction = reduce(total);
            EssenceEntry {
                year,
                total,
                number: reduction.value,
                steps: reduction.steps,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anka_letters::{BreakdownOptions, breakdown_name};

    #[test]
    fn mary_window() {
        // 4 1 9 7
        let b = breakdown_name("MARY", BreakdownOptions::default());
        let e = essence_cycle(&b, 2020, 5);
        let totals: Vec<u64> = e.iter().map(|x| x.total).collect();
        assert_eq!(totals, vec![14, 17, 20, 12, 14]);
        let numbers: Vec<u32> = e.iter().map(|x| x.number).collect();
        assert_eq!(numbers, vec![5, 8, 2, 3, 5]);
        assert_eq!(e[4].year, 2024);
    }

    #[test]
    fn single_letter_repeats() {
        let b = breakdown_name("A", BreakdownOptions::default());
        let e = essence_cycle(&b, 2000, DEFAULT_ESSENCE_LENGTH);
        assert_eq!(e.len(), 13);
        assert!(e.iter().all(|x| x.total == 3));
    }

    #[test]
    fn empty_name_has_no_cycle() {
        let b = breakdown_name("", BreakdownOptions::default());
        assert!(essence_cycle(&b, 2000, 13).is_empty());
    }

    #[test]
    fn cycle_stops_at_last_year() {
        let b = breakdown_name("MARY", BreakdownOptions::default());
        let e = essence_cycle(&b, i32::MAX, 1);
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].year, i32::MAX);
        assert_eq!(e[0].total, 14);
        assert_eq!(essence_cycle(&b, i32::MAX - 2, 13).len(), 3);
    }

    #[test]
    fn zero_length() {
        let b = breakdown_name("MARY", BreakdownOptions::default());
        assert!(essence_cycle(&b, 2000, 0).is_empty());
    }
}
