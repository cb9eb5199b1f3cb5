//! Script detection and letter valuation for numerology names.
//!
//! This crate provides:
//! - [`detect_script`]: Latin vs right-to-left Abjad classification
//! - The Latin pipeline: separator cleanup, diacritic stripping, Æ/Ø/Å
//!   expansion, Pythagorean values and the vowel/consonant rule for Y
//! - The Abjad pipeline: ligature expansion, harakat and direction-mark
//!   stripping, Abjad values 1..1000
//! - [`breakdown_name`]: one [`NameBreakdown`] per (name, mode)
//!
//! Characters that match no table entry are recorded in `ignored`, never
//! dropped silently.

pub mod abjad;
pub mod breakdown;
pub mod latin;
pub mod locale;
pub mod script;
mod text;

pub use abjad::{ABJAD_TABLE, abjad_value, prepare_abjad};
pub use breakdown::{
    BreakdownMode, BreakdownOptions, LetterClass, LetterToken, NameBreakdown, PreparedLetters,
    breakdown_name, prepare_letters,
};
pub use latin::{
    LATIN_VOWELS, Y_EXCEPTIONS, classify_latin_letter, latin_value, normalize_latin_char,
    prepare_latin,
};
pub use locale::{Locale, infer_locale};
pub use script::{Script, detect_script};
