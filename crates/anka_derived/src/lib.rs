//! Derived numerology numbers.
//!
//! Each calculator combines names, birth dates and already-reduced numbers
//! into a record that carries the final number next to the inputs and
//! reduction steps that produced it.
//!
//! Date-based calculators normalize the birth date to Gregorian first and
//! fail with [`DerivedError`] if that fails. Calculators over free text
//! return `None` for input with nothing to value.

pub mod cycles;
pub mod date_numbers;
pub mod error;
pub mod essence;
pub mod name_numbers;
pub mod practical;

pub use cycles::{
    CycleStage, LIFE_CYCLE_AGES, PINNACLE_AGES, challenge_numbers, life_cycles, pinnacle_cycles,
};
pub use date_numbers::{
    DEFAULT_MONTH_COLUMNS, DEFAULT_SERIES_YEARS, DateDigits, LuckyNumber, PersonalMonth,
    PersonalMonthRow, PersonalYearEntry, birthday_number, destiny_number, lucky_number,
    personal_month_matrix, personal_month_number, personal_year_number, personal_year_series,
};
pub use error::DerivedError;
pub use essence::{DEFAULT_ESSENCE_LENGTH, EssenceEntry, essence_cycle};
pub use name_numbers::{
    BALANCE_CONSONANTS, Balance, BalanceLetter, Bridge, Cornerstone, HealthProfile, Maturity,
    Transit, Transits, balance_number, bridge_number, cornerstone, health_profile,
    maturity_number, transit_numbers,
};
pub use practical::{AddressNumber, Telephone, address_number, telephone_number};
