//! Tabular (arithmetic) Hijri calendar to Julian Day Number.
//!
//! Months alternate around 29.5 days and a 30-year cycle carries 11 leap
//! days. Actual month starts depend on moon sighting and may differ by a
//! day or two.

/// JDN of 1 Muharram 1 AH (16 July 622 Julian).
pub const HIJRI_EPOCH_JDN: i64 = 1_948_440;

/// Days before the first of `month`: `ceil(29.5 * (month - 1))`.
fn days_before_month(month: i64) -> i64 {
    (59 * (month - 1) + 1).div_euclid(2)
}

/// Convert a tabular Hijri date to its Julian Day Number.
///
/// Months and days are not range checked.
pub fn hijri_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    day + days_before_month(month)
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + HIJRI_EPOCH_JDN
        - 1
}
