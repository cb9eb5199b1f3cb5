//! Numbers derived from a birth date: destiny, birthday, personal year and
//! month, lucky number.
//!
//! Every date is normalized to Gregorian first; the digits of the Gregorian
//! components are what get summed.

use anka_calendar::{CalendarDate, GregorianDate};
use anka_math::{digits_of, reduce, sum_digits};
use serde::Serialize;

use crate::error::DerivedError;

/// Years in a personal-year series when the caller has no preference.
pub const DEFAULT_SERIES_YEARS: usize = 9;

/// Months per row of a personal-month matrix when the caller has no preference.
pub const DEFAULT_MONTH_COLUMNS: u32 = 9;

/// A number reduced from the digits of date components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateDigits {
    /// Gregorian date the digits came from.
    pub calendar_used: GregorianDate,
    /// Summed digits, in component order.
    pub digits: Vec<u8>,
    pub total: u64,
    pub number: u32,
    pub steps: Vec<u64>,
}

impl DateDigits {
    fn from_components(calendar_used: GregorianDate, components: &[u64]) -> Self {
        let digits: Vec<u8> = components.iter().flat_map(|&c| digits_of(c)).collect();
        let total = sum_digits(&digits);
        let reduction = reduce(total);
        Self {
            calendar_used,
            digits,
            total,
            number: reduction.value,
            steps: reduction.steps,
        }
    }
}

fn year_component(year: i32) -> u64 {
    u64::from(year.unsigned_abs())
}

/// Destiny (life path): digits of year, month and day.
pub fn destiny_number(birth: &CalendarDate) -> Result<DateDigits, DerivedError> {
    let g = birth.to_gregorian()?;
    Ok(DateDigits::from_components(
        g,
        &[year_component(g.year), u64::from(g.month), u64::from(g.day)],
    ))
}

/// Birthday number: digits of the day only.
pub fn birthday_number(birth: &CalendarDate) -> Result<DateDigits, DerivedError> {
    let g = birth.to_gregorian()?;
    Ok(DateDigits::from_components(g, &[u64::from(g.day)]))
}

/// Personal year for `target_year`: digits of birth month, birth day and the
/// target year.
pub fn personal_year_number(
    birth: &CalendarDate,
    target_year: i32,
) -> Result<DateDigits, DerivedError> {
    let g = birth.to_gregorian()?;
    Ok(personal_year_from_gregorian(g, target_year))
}

fn personal_year_from_gregorian(g: GregorianDate, target_year: i32) -> DateDigits {
    DateDigits::from_components(
        g,
        &[
            u64::from(g.month),
            u64::from(g.day),
            year_component(target_year),
        ],
    )
}

/// One row of a personal-year series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalYearEntry {
    pub year: i32,
    pub personal_year: DateDigits,
}

/// Up to `length` consecutive years from `start_year`, stopping after
/// `i32::MAX`.
pub(crate) fn consecutive_years(start_year: i32, length: usize) -> impl Iterator<Item = i32> {
    (0..length).map_while(move |offset| {
        i32::try_from(offset)
            .ok()
            .and_then(|offset| start_year.checked_add(offset))
    })
}

/// Personal years for `length` consecutive years from `start_year`.
///
/// The series ends early rather than run past `i32::MAX`.
pub fn personal_year_series(
    birth: &CalendarDate,
    start_year: i32,
    length: usize,
) -> Result<Vec<PersonalYearEntry>, DerivedError> {
    let g = birth.to_gregorian()?;
    Ok(consecutive_years(start_year, length)
        .map(|year| PersonalYearEntry {
            year,
            personal_year: personal_year_from_gregorian(g, year),
        })
        .collect())
}

/// Personal month within a personal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalMonth {
    pub month: u32,
    pub number: u32,
    pub steps: Vec<u64>,
}

/// `reduce(personal_year + month)`.
pub fn personal_month_number(personal_year: u32, month: u32) -> PersonalMonth {
    let reduction = reduce(u64::from(personal_year) + u64::from(month));
    PersonalMonth {
        month,
        number: reduction.value,
        steps: reduction.steps,
    }
}

/// Personal months of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalMonthRow {
    pub year: i32,
    pub personal_year: u32,
    pub months: Vec<PersonalMonth>,
}

/// Personal months `1..=months` for each of `years` years from `start_year`.
pub fn personal_month_matrix(
    birth: &CalendarDate,
    start_year: i32,
    years: usize,
    months: u32,
) -> Result<Vec<PersonalMonthRow>, DerivedError> {
    let series = personal_year_series(birth, start_year, years)?;
    Ok(series
        .into_iter()
        .map(|entry| {
            let py = entry.personal_year.number;
            PersonalMonthRow {
                year: entry.year,
                personal_year: py,
                months: (1..=months).map(|m| personal_month_number(py, m)).collect(),
            }
        })
        .collect())
}

/// Lucky number: the reduced sum of Gregorian month and day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckyNumber {
    pub calendar_used: GregorianDate,
    pub total: u64,
    pub number: u32,
    pub steps: Vec<u64>,
}

pub fn lucky_number(birth: &CalendarDate) -> Result<LuckyNumber, DerivedError> {
    let g = birth.to_gregorian()?;
    let total = u64::from(g.month) + u64::from(g.day);
    let reduction = reduce(total);
    Ok(LuckyNumber {
        calendar_used: g,
        total,
        number: reduction.value,
        steps: reduction.steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anka_calendar::{CalendarError, CalendarSystem};

    fn birth() -> CalendarDate {
        CalendarDate::gregorian(1987, 6, 14)
    }

    #[test]
    fn destiny() {
        let d = destiny_number(&birth()).unwrap();
        assert_eq!(d.digits, vec![1, 9, 8, 7, 6, 1, 4]);
        assert_eq!(d.total, 36);
        assert_eq!(d.number, 9);
        assert_eq!(d.steps, vec![36, 9]);
    }

    #[test]
    fn negative_year_uses_absolute_digits() {
        let d = destiny_number(&CalendarDate::gregorian(-44, 3, 15)).unwrap();
        assert_eq!(d.calendar_used.year, -44);
        assert_eq!(d.digits, vec![4, 4, 3, 1, 5]);
        assert_eq!(d.total, 17);
        assert_eq!(d.number, 8);
        assert_eq!(d.steps, vec![17, 8]);
    }

    #[test]
    fn birthday_master_from_digit_sum() {
        // 2 + 9 = 11 stops at the master number.
        let b = birthday_number(&CalendarDate::gregorian(1990, 11, 29)).unwrap();
        assert_eq!(b.digits, vec![2, 9]);
        assert_eq!(b.number, 11);
        assert_eq!(b.steps, vec![11]);
    }

    #[test]
    fn personal_year() {
        let p = personal_year_number(&birth(), 2024).unwrap();
        assert_eq!(p.digits, vec![6, 1, 4, 2, 0, 2, 4]);
        assert_eq!(p.steps, vec![19, 10, 1]);
        assert_eq!(p.number, 1);
        assert_eq!(p.calendar_used, GregorianDate { year: 1987, month: 6, day: 14 });
    }

    #[test]
    fn series_is_consecutive() {
        let s = personal_year_series(&birth(), 2024, 3).unwrap();
        let years: Vec<i32> = s.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2024, 2025, 2026]);
        let numbers: Vec<u32> = s.iter().map(|e| e.personal_year.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn empty_series() {
        assert!(personal_year_series(&birth(), 2024, 0).unwrap().is_empty());
    }

    #[test]
    fn series_stops_at_last_year() {
        let one = personal_year_series(&birth(), i32::MAX, 1).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].year, i32::MAX);

        let years: Vec<i32> = personal_year_series(&birth(), i32::MAX - 1, 5)
            .unwrap()
            .iter()
            .map(|e| e.year)
            .collect();
        assert_eq!(years, vec![i32::MAX - 1, i32::MAX]);

        let m = personal_month_matrix(&birth(), i32::MAX, 3, 2).unwrap();
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn series_from_negative_years() {
        let years: Vec<i32> = personal_year_series(&birth(), -1, 3)
            .unwrap()
            .iter()
            .map(|e| e.year)
            .collect();
        assert_eq!(years, vec![-1, 0, 1]);
    }

    #[test]
    fn months_of_year_one() {
        let numbers: Vec<u32> = (1..=9).map(|m| personal_month_number(1, m).number).collect();
        assert_eq!(numbers, vec![2, 3, 4, 5, 6, 7, 8, 9, 1]);
        assert_eq!(personal_month_number(1, 9).steps, vec![10, 1]);
    }

    #[test]
    fn matrix_shape() {
        let m = personal_month_matrix(&birth(), 2024, 2, 12).unwrap();
        assert_eq!(m.len(), 2);
        assert!(m.iter().all(|row| row.months.len() == 12));
        assert_eq!(m[0].personal_year, 1);
        assert_eq!(m[1].personal_year, 2);
        assert_eq!(m[1].months[0].number, 3);
    }

    #[test]
    fn lucky() {
        let l = lucky_number(&birth()).unwrap();
        assert_eq!(l.total, 20);
        assert_eq!(l.number, 2);
    }

    #[test]
    fn solar_hijri_birth_uses_gregorian_digits() {
        // 1369-03-27 SH = 1990-06-17
        let b = CalendarDate::new(CalendarSystem::SolarHijri, 1369, 3, 27);
        let d = destiny_number(&b).unwrap();
        assert_eq!(d.calendar_used, GregorianDate { year: 1990, month: 6, day: 17 });
        assert_eq!(d.total, 1 + 9 + 9 + 6 + 1 + 7);
    }

    #[test]
    fn invalid_date_propagates() {
        let bad = CalendarDate::gregorian(2023, 2, 29);
        let err = destiny_number(&bad).unwrap_err();
        assert_eq!(
            err,
            DerivedError::Calendar(CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(lucky_number(&bad).is_err());
        assert!(personal_month_matrix(&bad, 2024, 1, 9).is_err());
    }
}
