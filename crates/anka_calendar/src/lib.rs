//! Calendar normalization for birth dates.
//!
//! This crate provides:
//! - Julian Day Number ↔ proleptic Gregorian conversions
//! - Solar Hijri → JDN (2820-year cycle arithmetic)
//! - Tabular Hijri → JDN (30-year cycle arithmetic)
//! - [`CalendarDate::to_gregorian`], which routes any supported calendar
//!   through the JDN and returns a valid Gregorian triple
//!
//! Only Gregorian input is validated. Solar Hijri and Hijri components are
//! fed straight into the arithmetic, so out-of-range months or days carry
//! into neighbouring months instead of failing.

pub mod error;
pub mod hijri;
pub mod julian;
pub mod solar_hijri;
pub mod system;

use std::fmt::{Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

pub use error::CalendarError;
pub use hijri::{HIJRI_EPOCH_JDN, hijri_to_jdn};
pub use julian::{
    J2000_JDN, gregorian_to_jdn, is_gregorian_leap_year, is_valid_gregorian, jdn_to_gregorian,
};
pub use solar_hijri::{SOLAR_HIJRI_EPOCH_JDN, solar_hijri_to_jdn};
pub use system::{ALL_CALENDAR_SYSTEMS, CalendarSystem};

/// A date as supplied by a caller, possibly invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    #[serde(default)]
    pub system: CalendarSystem,
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl CalendarDate {
    pub fn new(system: CalendarSystem, year: i32, month: i32, day: i32) -> Self {
        Self {
            system,
            year,
            month,
            day,
        }
    }

    /// Gregorian date shorthand.
    pub fn gregorian(year: i32, month: i32, day: i32) -> Self {
        Self::new(CalendarSystem::Gregorian, year, month, day)
    }

    /// Julian Day Number of this date, validating Gregorian input.
    pub fn to_jdn(&self) -> Result<i64, CalendarError> {
        let (y, m, d) = (
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        match self.system {
            CalendarSystem::Gregorian => {
                if !is_valid_gregorian(y, m, d) {
                    debug!(
                        "event=calendar_reject system=gregorian year={} month={} day={}",
                        self.year, self.month, self.day
                    );
                    return Err(CalendarError::InvalidDate {
                        year: self.year,
                        month: self.month,
                        day: self.day,
                    });
                }
                Ok(gregorian_to_jdn(y, m, d))
            }
            CalendarSystem::SolarHijri => Ok(solar_hijri_to_jdn(y, m, d)),
            CalendarSystem::Hijri => Ok(hijri_to_jdn(y, m, d)),
        }
    }

    /// Equivalent Gregorian date.
    ///
    /// Gregorian input is returned unchanged once validated.
    pub fn to_gregorian(&self) -> Result<GregorianDate, CalendarError> {
        if self.system == CalendarSystem::Gregorian {
            self.to_jdn()?;
            return Ok(GregorianDate {
                year: self.year,
                month: self.month as u32,
                day: self.day as u32,
            });
        }
        let jdn = self.to_jdn()?;
        let out = GregorianDate::from_jdn(jdn);
        debug!(
            "event=calendar_convert system={} input={:04}-{:02}-{:02} output={out}",
            self.system, self.year, self.month, self.day
        );
        Ok(out)
    }
}

/// A validated proleptic Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl GregorianDate {
    /// Gregorian date of a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_gregorian(jdn);
        Self {
            year: year as i32,
            month,
            day,
        }
    }

    pub fn to_jdn(&self) -> i64 {
        gregorian_to_jdn(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        )
    }
}

impl Display for GregorianDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Convert `(year, month, day)` in `system` to Gregorian.
pub fn convert_to_gregorian(
    system: CalendarSystem,
    year: i32,
    month: i32,
    day: i32,
) -> Result<GregorianDate, CalendarError> {
    CalendarDate::new(system, year, month, day).to_gregorian()
}

/// Like [`convert_to_gregorian`], with the system given as a tag such as
/// `"gregorian"`, `"solarHijri"` or `"hijri"`.
pub fn convert_tagged_to_gregorian(
    tag: &str,
    year: i32,
    month: i32,
    day: i32,
) -> Result<GregorianDate, CalendarError> {
    let system: CalendarSystem = tag.parse()?;
    convert_to_gregorian(system, year, month, day)
}
