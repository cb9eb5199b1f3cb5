//! Writing-system detection.

use serde::{Deserialize, Serialize};

/// Writing system that selects a valuation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Script {
    /// Latin letters, valued with the Pythagorean table.
    #[default]
    #[serde(rename = "latin")]
    Latin,
    /// Arabic/Persian letters, valued with the Abjad table.
    #[serde(rename = "rtl")]
    RightToLeftAbjad,
}

impl Script {
    /// Short tag: `latin` or `rtl`.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Latin => "latin",
            Self::RightToLeftAbjad => "rtl",
        }
    }

    /// Whether vowel/consonant classes exist for this script.
    pub const fn has_vowels(self) -> bool {
        matches!(self, Self::Latin)
    }
}

/// First and last code points of the Arabic block.
const ARABIC_BLOCK: std::ops::RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

/// Whether `c` lies in the Arabic block (U+0600..=U+06FF).
pub fn is_arabic_block(c: char) -> bool {
    ARABIC_BLOCK.contains(&c)
}

/// Classify `text`: any Arabic-block character makes it right-to-left.
pub fn detect_script(text: &str) -> Script {
    if text.chars().any(is_arabic_block) {
        Script::RightToLeftAbjad
    } else {
        Script::Latin
    }
}
