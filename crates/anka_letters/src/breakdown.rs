//! Name breakdowns: valued letters, their total and its reduction.

use anka_math::reduce;
use serde::{Deserialize, Serialize};

use crate::abjad::prepare_abjad;
use crate::latin::prepare_latin;
use crate::script::{Script, detect_script};

/// Class of a valued letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterClass {
    Vowel,
    Consonant,
    /// Abjad letters, which have no vowel/consonant split.
    Letter,
}

/// One valued letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LetterToken {
    /// Letter used for lookup (after normalization and expansion).
    pub label: char,
    /// Character as it appeared in the input.
    pub original: char,
    pub value: u32,
    pub class: LetterClass,
}

/// Which letters contribute to a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakdownMode {
    #[default]
    All,
    Vowel,
    Consonant,
}

impl BreakdownMode {
    /// Whether a token of `class` counts under this mode.
    ///
    /// Abjad tokens always count.
    pub fn accepts(self, class: LetterClass) -> bool {
        match (self, class) {
            (_, LetterClass::Letter) | (Self::All, _) => true,
            (Self::Vowel, c) => c == LetterClass::Vowel,
            (Self::Consonant, c) => c == LetterClass::Consonant,
        }
    }
}

/// Options for [`breakdown_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreakdownOptions {
    pub mode: BreakdownMode,
    /// Force a pipeline instead of detecting one.
    pub script: Option<Script>,
}

impl BreakdownOptions {
    pub fn mode(mode: BreakdownMode) -> Self {
        Self { mode, script: None }
    }
}

/// Output of one valuation pipeline before mode filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedLetters {
    pub tokens: Vec<LetterToken>,
    /// Characters no table entry matched, first-seen order.
    pub ignored: Vec<char>,
    pub normalized: String,
    pub script: Script,
}

impl PreparedLetters {
    pub fn total(&self) -> u64 {
        self.tokens.iter().map(|t| u64::from(t.value)).sum()
    }
}

/// Run the pipeline for `script` over `text`.
pub fn prepare_letters(text: &str, script: Script) -> PreparedLetters {
    match script {
        Script::Latin => prepare_latin(text),
        Script::RightToLeftAbjad => prepare_abjad(text),
    }
}

/// Valued letters of one name under one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameBreakdown {
    /// Letters counted under the requested mode, in input order.
    pub tokens: Vec<LetterToken>,
    pub ignored: Vec<char>,
    pub normalized: String,
    pub script: Script,
    pub mode: BreakdownMode,
    /// Sum of token values.
    pub total: u64,
    /// Reduced total.
    pub number: u32,
    pub steps: Vec<u64>,
}

impl NameBreakdown {
    /// Token values in order.
    pub fn values(&self) -> Vec<u32> {
        self.tokens.iter().map(|t| t.value).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Break `text` into valued letters and reduce their sum.
///
/// The script is detected unless `options.script` forces one. Vowel and
/// consonant modes only filter Latin tokens; for Abjad they behave as
/// [`BreakdownMode::All`].
pub fn breakdown_name(text: &str, options: BreakdownOptions) -> NameBreakdown {
    let script = options.script.unwrap_or_else(|| detect_script(text));
    let prepared = prepare_letters(text, script);

    let tokens: Vec<LetterToken> = prepared
        .tokens
        .into_iter()
        .filter(|t| options.mode.accepts(t.class))
        .collect();
    let total = tokens.iter().map(|t| u64::from(t.value)).sum();
    let reduction = reduce(total);

    NameBreakdown {
        tokens,
        ignored: prepared.ignored,
        normalized: prepared.normalized,
        script: prepared.script,
        mode: options.mode,
        total,
        number: reduction.value,
        steps: reduction.steps,
    }
}
