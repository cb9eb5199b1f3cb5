//! Numerology engine facade.
//!
//! Re-exports the letter, calendar, reduction and calculator crates so
//! callers only need `use anka_rs::*`, and adds [`compute_profile`], which
//! composes every calculator into one [`NumerologyProfile`].
//!
//! # Quick start
//!
//! ```rust
//! use anka_rs::*;
//!
//! let request = ProfileRequest::new("Mary", CalendarDate::gregorian(1987, 6, 14), 2024);
//! let profile = compute_profile(&request, &ProfileConfig::default()).unwrap();
//! assert_eq!(profile.core.destiny.number, 9);
//! assert_eq!(profile.core.name.name.number, 3);
//! ```

pub mod config;
pub mod error;
pub mod profile;

pub use config::ProfileConfig;
pub use error::AnkaError;
pub use profile::{
    BridgeNumbers, CoreNumbers, CurrentIdentity, Influences, NameNumbers, NumerologyProfile,
    PracticalNumbers, ProfileRequest, ProfileTables, compute_profile,
};

pub use anka_calendar::{
    ALL_CALENDAR_SYSTEMS, CalendarDate, CalendarError, CalendarSystem, GregorianDate,
    convert_tagged_to_gregorian, convert_to_gregorian,
};
pub use anka_derived::*;
pub use anka_letters::{
    BreakdownMode, BreakdownOptions, LetterClass, LetterToken, Locale, NameBreakdown, Script,
    breakdown_name, detect_script, infer_locale,
};
pub use anka_math::{MASTER_NUMBERS, Reduction, is_master_number, reduce};
