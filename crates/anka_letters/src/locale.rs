//! Locale inference from a name.
//!
//! Picks which locale a caller should use for the interpretive text that
//! accompanies a number. No text ships with the engine.

use serde::Serialize;

use crate::latin::special_letter;
use crate::script::{Script, detect_script};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    No,
    Fa,
}

impl Locale {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::No => "no",
            Self::Fa => "fa",
        }
    }
}

/// Fa for Abjad text, No when Æ, Ø or Å appears, otherwise En.
pub fn infer_locale(name: &str) -> Locale {
    if detect_script(name) == Script::RightToLeftAbjad {
        Locale::Fa
    } else if name.chars().any(|c| special_letter(c).is_some()) {
        Locale::No
    } else {
        Locale::En
    }
}
