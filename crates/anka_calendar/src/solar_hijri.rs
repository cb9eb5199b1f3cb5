//! Solar Hijri (Persian) calendar to Julian Day Number.
//!
//! Uses the arithmetic 2820-year grand cycle: 683 leap years spread over
//! 2820 years, anchored at year 474 of the era. Leap placement follows the
//! cycle arithmetic, not the vernal equinox, so a handful of years in each
//! century differ by a day from the observed civil calendar.

/// JDN of 1 Farvardin 1 AP.
pub const SOLAR_HIJRI_EPOCH_JDN: i64 = 1_948_321;

/// Years in the grand cycle.
const CYCLE_YEARS: i64 = 2820;
/// Days in the grand cycle.
const CYCLE_DAYS: i64 = 1_029_983;

/// Days elapsed before the first day of `month` within a year.
///
/// Months 1..=6 have 31 days, 7..=11 have 30, Esfand has 29 or 30.
fn days_before_month(month: i64) -> i64 {
    if month <= 7 {
        (month - 1) * 31
    } else {
        (month - 1) * 30 + 6
    }
}

/// Convert a Solar Hijri date to its Julian Day Number.
///
/// Months and days are not range checked.
pub fn solar_hijri_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let ep_base = year - if year >= 0 { 474 } else { 473 };
    let ep_year = 474 + ep_base.rem_euclid(CYCLE_YEARS);

    day + days_before_month(month)
        + (ep_year * 682 - 110).div_euclid(2816)
        + (ep_year - 1) * 365
        + ep_base.div_euclid(CYCLE_YEARS) * CYCLE_DAYS
        + SOLAR_HIJRI_EPOCH_JDN
        - 1
}
