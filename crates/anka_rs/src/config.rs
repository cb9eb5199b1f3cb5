//! Profile configuration.

use anka_derived::{DEFAULT_ESSENCE_LENGTH, DEFAULT_MONTH_COLUMNS, DEFAULT_SERIES_YEARS};
use serde::{Deserialize, Serialize};

use crate::error::AnkaError;

/// Sizes of the tables in a [`NumerologyProfile`](crate::NumerologyProfile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Years in the personal-year series and personal-month matrix.
    pub series_years: usize,
    /// Months per personal-month row.
    pub month_columns: u32,
    /// Entries in the essence cycle.
    pub essence_length: usize,
    /// The essence cycle starts this many years before the target year.
    pub essence_lead_years: u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            series_years: DEFAULT_SERIES_YEARS,
            month_columns: DEFAULT_MONTH_COLUMNS,
            essence_length: DEFAULT_ESSENCE_LENGTH,
            essence_lead_years: 4,
        }
    }
}

impl ProfileConfig {
    pub fn validate(&self) -> Result<(), AnkaError> {
        if self.series_years == 0 {
            return Err(AnkaError::InvalidConfig(
                "series_years must be greater than zero",
            ));
        }
        if self.month_columns == 0 {
            return Err(AnkaError::InvalidConfig(
                "month_columns must be greater than zero",
            ));
        }
        if self.month_columns > 12 {
            return Err(AnkaError::InvalidConfig("month_columns must be at most 12"));
        }
        if self.essence_length == 0 {
            return Err(AnkaError::InvalidConfig(
                "essence_length must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = ProfileConfig::default();
        assert_eq!(c.series_years, 9);
        assert_eq!(c.month_columns, 9);
        assert_eq!(c.essence_length, 13);
        assert_eq!(c.essence_lead_years, 4);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_zero_lengths() {
        for c in [
            ProfileConfig { series_years: 0, ..Default::default() },
            ProfileConfig { month_columns: 0, ..Default::default() },
            ProfileConfig { essence_length: 0, ..Default::default() },
        ] {
            assert!(matches!(c.validate(), Err(AnkaError::InvalidConfig(_))));
        }
    }

    #[test]
    fn rejects_more_than_twelve_months() {
        let c = ProfileConfig {
            month_columns: 13,
            ..Default::default()
        };
        assert_eq!(
            c.validate(),
            Err(AnkaError::InvalidConfig("month_columns must be at most 12"))
        );
    }

    #[test]
    fn zero_lead_is_allowed() {
        let c = ProfileConfig {
            essence_lead_years: 0,
            ..Default::default()
        };
        assert!(c.validate().is_ok());
    }
}
