//! Error types for calendar normalization.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised while converting a date to the Gregorian calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Gregorian components that do not name a real day.
    InvalidDate { year: i32, month: i32, day: i32 },
    /// Calendar tag that is not one of the supported systems.
    UnsupportedCalendar(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid Gregorian date: {year:04}-{month:02}-{day:02}")
            }
            Self::UnsupportedCalendar(tag) => write!(f, "unsupported calendar: {tag}"),
        }
    }
}

impl Error for CalendarError {}
