//! Error types for derived-number calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use anka_calendar::CalendarError;

/// Errors from derived-number calculators.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DerivedError {
    /// The birth date could not be normalized to Gregorian.
    Calendar(CalendarError),
}

impl Display for DerivedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
        }
    }
}

impl Error for DerivedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
        }
    }
}

impl From<CalendarError> for DerivedError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}
