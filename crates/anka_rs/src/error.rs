//! Error type for the facade.

use std::error::Error;
use std::fmt::{Display, Formatter};

use anka_calendar::CalendarError;
use anka_derived::DerivedError;

/// Unified error for everything reachable through `anka_rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnkaError {
    Calendar(CalendarError),
    Derived(DerivedError),
    InvalidConfig(&'static str),
    /// A profile was requested for a blank birth name.
    EmptyName,
}

impl Display for AnkaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calendar(e) => write!(f, "{e}"),
            Self::Derived(e) => write!(f, "{e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::EmptyName => write!(f, "birth name must not be empty"),
        }
    }
}

impl Error for AnkaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
            Self::Derived(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CalendarError> for AnkaError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<DerivedError> for AnkaError {
    fn from(e: DerivedError) -> Self {
        Self::Derived(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            AnkaError::InvalidConfig("month_columns must be at most 12").to_string(),
            "invalid config: month_columns must be at most 12"
        );
        assert_eq!(AnkaError::EmptyName.to_string(), "birth name must not be empty");
        let e: AnkaError = CalendarError::UnsupportedCalendar("mayan".into()).into();
        assert_eq!(e.to_string(), "unsupported calendar: mayan");
    }

    #[test]
    fn derived_wraps_calendar() {
        let inner = CalendarError::InvalidDate {
            year: 2023,
            month: 2,
            day: 30,
        };
        let e = AnkaError::from(DerivedError::from(inner.clone()));
        assert_eq!(e, AnkaError::Derived(DerivedError::Calendar(inner)));
        assert!(e.source().is_some());
    }
}
