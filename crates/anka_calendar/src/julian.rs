//! Julian Day Number <-> proleptic Gregorian conversions.
//!
//! Integer day counts only: a JDN names a whole civil day (the noon-based
//! Julian Date of that day). All divisions are floor divisions so dates
//! before the epoch behave the same as later ones.

/// JDN of 2000-01-01.
pub const J2000_JDN: i64 = 2_451_545;

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in a regular (non-400) Gregorian century.
const DAYS_PER_CENTURY: i64 = 36_524;
/// Days in a 4-year Julian-style cycle.
const DAYS_PER_4_YEARS: i64 = 1_461;

/// Convert a proleptic Gregorian date to its Julian Day Number.
///
/// Out-of-range months and days are not rejected; they roll over the way the
/// arithmetic carries them. Use [`is_valid_gregorian`] to check first.
pub fn gregorian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Convert a Julian Day Number to a proleptic Gregorian `(year, month, day)`.
///
/// Nested 400-year / century / 4-year / year decomposition.
pub fn jdn_to_gregorian(jdn: i64) -> (i64, u32, u32) {
    let j = jdn + 32_044;
    let g = j.div_euclid(DAYS_PER_400_YEARS);
    let dg = j.rem_euclid(DAYS_PER_400_YEARS);
    let c = (dg / DAYS_PER_CENTURY + 1) * 3 / 4;
    let dc = dg - c * DAYS_PER_CENTURY;
    let b = dc / DAYS_PER_4_YEARS;
    let db = dc % DAYS_PER_4_YEARS;
    let a = (db / 365 + 1) * 3 / 4;
    let da = db - a * 365;
    let y = g * 400 + c * 100 + b * 4 + a;
    let m = (da * 5 + 308) / 153 - 2;
    let d = da - (m + 4) * 153 / 5 + 122;

    let year = y - 4800 + (m + 2) / 12;
    let month = ((m + 2) % 12 + 1) as u32;
    let day = (d + 1) as u32;
    (year, month, day)
}

/// Whether `(year, month, day)` names a real proleptic Gregorian day.
///
/// Checked by round-tripping through the JDN: any component the arithmetic
/// had to carry comes back different.
pub fn is_valid_gregorian(year: i64, month: i64, day: i64) -> bool {
    let (y, m, d) = jdn_to_gregorian(gregorian_to_jdn(year, month, day));
    y == year && i64::from(m) == month && i64::from(d) == day
}

/// Gregorian leap-year rule.
pub const fn is_gregorian_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
