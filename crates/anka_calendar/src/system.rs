//! Calendar system tags.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Calendar in which a caller expressed a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalendarSystem {
    #[default]
    Gregorian,
    SolarHijri,
    Hijri,
}

/// All supported systems in code order.
pub const ALL_CALENDAR_SYSTEMS: [CalendarSystem; 3] = [
    CalendarSystem::Gregorian,
    CalendarSystem::SolarHijri,
    CalendarSystem::Hijri,
];

impl CalendarSystem {
    /// Canonical tag, as accepted by [`FromStr`].
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::SolarHijri => "solarHijri",
            Self::Hijri => "hijri",
        }
    }

    /// Compact code: 0=Gregorian, 1=SolarHijri, 2=Hijri.
    pub const fn code(self) -> u8 {
        match self {
            Self::Gregorian => 0,
            Self::SolarHijri => 1,
            Self::Hijri => 2,
        }
    }

    /// Inverse of [`CalendarSystem::code`].
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Gregorian),
            1 => Some(Self::SolarHijri),
            2 => Some(Self::Hijri),
            _ => None,
        }
    }
}

impl Display for CalendarSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CalendarSystem {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "gregorian" => Ok(Self::Gregorian),
            "solarhijri" | "solar-hijri" | "solar_hijri" | "persian" | "jalali" => {
                Ok(Self::SolarHijri)
            }
            "hijri" | "islamic" => Ok(Self::Hijri),
            _ => Err(CalendarError::UnsupportedCalendar(s.to_string())),
        }
    }
}
