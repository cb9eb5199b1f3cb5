//! Abjad letter valuation for Arabic and Persian names.
//!
//! Values run 1..9, 10..90, 100..900 and 1000 in the traditional abjadi
//! order. Persian additions and positional variants share the value of the
//! letter they extend (پ with ب, گ with ک, ی with ي, and so on).

use log::trace;

use crate::breakdown::{LetterClass, LetterToken, PreparedLetters};
use crate::script::Script;
use crate::text::{collapse_whitespace, push_unique};

/// Abjad value table.
pub const ABJAD_TABLE: &[(char, u32)] = &[
    ('\u{0627}', 1),    // alef
    ('\u{0623}', 1),    // alef with hamza above
    ('\u{0625}', 1),    // alef with hamza below
    ('\u{0622}', 1),    // alef with madda
    ('\u{0671}', 1),    // alef wasla
    ('\u{0621}', 1),    // hamza
    ('\u{0628}', 2),    // beh
    ('\u{067E}', 2),    // peh
    ('\u{062C}', 3),    // jeem
    ('\u{0686}', 3),    // tcheh
    ('\u{062F}', 4),    // dal
    ('\u{0647}', 5),    // heh
    ('\u{0629}', 5),    // teh marbuta
    ('\u{06C0}', 5),    // heh with yeh above
    ('\u{FEE9}', 5),    // heh, isolated form
    ('\u{0648}', 6),    // waw
    ('\u{0624}', 6),    // waw with hamza above
    ('\u{0632}', 7),    // zain
    ('\u{0698}', 7),    // jeh
    ('\u{062D}', 8),    // hah
    ('\u{0637}', 9),    // tah
    ('\u{064A}', 10),   // yeh
    ('\u{0649}', 10),   // alef maksura
    ('\u{0626}', 10),   // yeh with hamza above
    ('\u{06CC}', 10),   // farsi yeh
    ('\u{06D2}', 10),   // yeh barree
    ('\u{0643}', 20),   // kaf
    ('\u{06A9}', 20),   // keheh
    ('\u{06AF}', 20),   // gaf
    ('\u{0644}', 30),   // lam
    ('\u{0645}', 40),   // meem
    ('\u{0646}', 50),   // noon
    ('\u{0633}', 60),   // seen
    ('\u{0639}', 70),   // ain
    ('\u{0641}', 80),   // feh
    ('\u{06A4}', 80),   // veh
    ('\u{0635}', 90),   // sad
    ('\u{0642}', 100),  // qaf
    ('\u{0631}', 200),  // reh
    ('\u{0634}', 300),  // sheen
    ('\u{062A}', 400),  // teh
    ('\u{062B}', 500),  // theh
    ('\u{062E}', 600),  // khah
    ('\u{0630}', 700),  // thal
    ('\u{0636}', 800),  // dad
    ('\u{0638}', 900),  // zah
    ('\u{063A}', 1000), // ghain
];

/// Lam-alef ligature, expanded to lam + alef before lookup.
const LAM_ALEF_LIGATURE: char = '\u{FEFB}';

pub fn abjad_value(c: char) -> Option<u32> {
    ABJAD_TABLE
        .iter()
        .find_map(|&(letter, value)| (letter == c).then_some(value))
}

/// Harakat, superscript alef and Quranic annotation marks.
pub fn is_arabic_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}')
}

/// ZWNJ and the LRM/RLM direction marks.
pub fn is_direction_control(c: char) -> bool {
    matches!(c, '\u{200C}' | '\u{200E}' | '\u{200F}')
}

/// Run the Abjad pipeline over `raw`.
pub fn prepare_abjad(raw: &str) -> PreparedLetters {
    let mut stripped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == LAM_ALEF_LIGATURE {
            stripped.push('\u{0644}');
            stripped.push('\u{0627}');
        } else if !is_arabic_diacritic(c) && !is_direction_control(c) {
            stripped.push(c);
        }
    }
    let normalized = collapse_whitespace(&stripped);

    let mut tokens = Vec::with_capacity(normalized.len() / 2);
    let mut ignored = Vec::new();
    for c in normalized.chars().filter(|&c| c != ' ') {
        match abjad_value(c) {
            Some(value) => tokens.push(LetterToken {
                label: c,
                original: c,
                value,
                class: LetterClass::Letter,
            }),
            None => push_unique(&mut ignored, c),
        }
    }

    if !ignored.is_empty() {
        trace!("event=letters_ignored script=rtl count={}", ignored.len());
    }

    PreparedLetters {
        tokens,
        ignored,
        normalized,
        script: Script::RightToLeftAbjad,
    }
}
