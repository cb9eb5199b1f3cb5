//! Latin (Pythagorean) letter valuation.
//!
//! A..Z take the values 1..9 cyclically by alphabet position. The Norwegian
//! letters Æ, Ø and Å are kept as single letters while classifying, then
//! expand into two ordinary letters for valuation (Æ → A E, Ø → O E,
//! Å → A A).
//!
//! Y is a vowel unless a neighbouring letter is a vowel or forms one of the
//! listed Y pairs with it.

use log::trace;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::breakdown::{LetterClass, LetterToken, PreparedLetters};
use crate::script::Script;
use crate::text::{collapse_whitespace, push_unique};

/// Letters classified as vowels, including the three special letters.
pub const LATIN_VOWELS: [char; 8] = ['A', 'E', 'I', 'O', 'U', 'Æ', 'Ø', 'Å'];

/// Pairs in which Y counts as a consonant.
pub const Y_EXCEPTIONS: [[char; 2]; 12] = [
    ['A', 'Y'],
    ['E', 'Y'],
    ['I', 'Y'],
    ['O', 'Y'],
    ['U', 'Y'],
    ['Y', 'A'],
    ['Y', 'E'],
    ['Y', 'I'],
    ['Y', 'O'],
    ['Y', 'U'],
    ['Y', 'Å'],
    ['Y', 'Æ'],
];

/// Characters treated as word separators before anything else.
const SEPARATORS: [char; 5] = ['-', '\'', '\u{2019}', '\u{2013}', '\u{2014}'];

/// Pythagorean value of an uppercase ASCII letter.
pub fn latin_value(letter: char) -> Option<u32> {
    match letter {
        'A'..='Z' => Some((letter as u32 - 'A' as u32) % 9 + 1),
        _ => None,
    }
}

pub fn is_latin_vowel(letter: char) -> bool {
    LATIN_VOWELS.contains(&letter)
}

/// Map either case of Æ, Ø, Å to its uppercase special letter.
pub fn special_letter(c: char) -> Option<char> {
    match c {
        'Æ' | 'æ' => Some('Æ'),
        'Ø' | 'ø' => Some('Ø'),
        'Å' | 'å' => Some('Å'),
        _ => None,
    }
}

/// Ordinary letters a special letter is valued as.
fn expand_special(letter: char) -> Option<[char; 2]> {
    match letter {
        'Æ' => Some(['A', 'E']),
        'Ø' => Some(['O', 'E']),
        'Å' => Some(['A', 'A']),
        _ => None,
    }
}

/// Normalize one source character to an uppercase letter the table knows.
///
/// Special letters map through [`special_letter`]; anything else is
/// decomposed, stripped of combining marks and uppercased, and must end up
/// as exactly one ASCII letter.
pub fn normalize_latin_char(c: char) -> Option<char> {
    if let Some(special) = special_letter(c) {
        return Some(special);
    }
    let mut upper = std::iter::once(c)
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_uppercase);
    match (upper.next(), upper.next()) {
        (Some(letter @ 'A'..='Z'), None) => Some(letter),
        _ => None,
    }
}

/// Vowel/consonant class of `letter` given its neighbours.
pub fn classify_latin_letter(letter: char, prev: Option<char>, next: Option<char>) -> LetterClass {
    if letter == 'Y' {
        let vowel_neighbour = prev.is_some_and(is_latin_vowel) || next.is_some_and(is_latin_vowel);
        let exception_pair = prev.is_some_and(|p| Y_EXCEPTIONS.contains(&[p, 'Y']))
            || next.is_some_and(|n| Y_EXCEPTIONS.contains(&['Y', n]));
        return if vowel_neighbour || exception_pair {
            LetterClass::Consonant
        } else {
            LetterClass::Vowel
        };
    }
    if is_latin_vowel(letter) {
        LetterClass::Vowel
    } else {
        LetterClass::Consonant
    }
}

/// Run the Latin pipeline over `raw`.
pub fn prepare_latin(raw: &str) -> PreparedLetters {
    let separated: String = raw
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();
    let cleaned = collapse_whitespace(&separated);

    let mut ignored = Vec::new();
    // (source, normalized) per accepted letter; spaces are kept for the
    // normalized text only.
    let mut letters: Vec<(char, char)> = Vec::with_capacity(cleaned.len());
    let mut normalized = String::with_capacity(cleaned.len());
    for c in cleaned.chars() {
        if c == ' ' {
            normalized.push(' ');
            continue;
        }
        match normalize_latin_char(c) {
            Some(letter) => {
                letters.push((c, letter));
                normalized.push(letter);
            }
            None => push_unique(&mut ignored, c),
        }
    }

    let mut tokens = Vec::with_capacity(letters.len() + 2);
    // Y's neighbours are the adjacent accepted letters. Spaces and ignored
    // characters are skipped, so the Y of "Henry Adams" sees the A of the
    // next word.
    for (i, &(original, letter)) in letters.iter().enumerate() {
        let prev = i.checked_sub(1).map(|j| letters[j].1);
        let next = letters.get(i + 1).map(|&(_, n)| n);
        let class = classify_latin_letter(letter, prev, next);
        let labels = expand_special(letter).map_or_else(|| vec![letter], |pair| pair.to_vec());
        for label in labels {
            if let Some(value) = latin_value(label) {
                tokens.push(LetterToken {
                    label,
                    original,
                    value,
                    class,
                });
            }
        }
    }

    if !ignored.is_empty() {
        trace!("event=letters_ignored script=latin count={}", ignored.len());
    }

    PreparedLetters {
        tokens,
        ignored,
        normalized: collapse_whitespace(&normalized),
        script: Script::Latin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(p: &PreparedLetters) -> String {
        p.tokens.iter().map(|t| t.label).collect()
    }

    #[test]
    fn value_table_cycles() {
        let expected = [
            ('A', 1),
            ('I', 9),
            ('J', 1),
            ('R', 9),
            ('S', 1),
            ('Y', 7),
            ('Z', 8),
        ];
        for (c, v) in expected {
            assert_eq!(latin_value(c), Some(v), "{c}");
        }
        assert_eq!(latin_value('a'), None);
        assert_eq!(latin_value('Æ'), None);
    }

    #[test]
    fn all_26_letters_valued() {
        for c in 'A'..='Z' {
            let v = latin_value(c).unwrap();
            assert!((1..=9).contains(&v));
        }
    }

    #[test]
    fn diacritics_are_stripped() {
        assert_eq!(normalize_latin_char('é'), Some('E'));
        assert_eq!(normalize_latin_char('ñ'), Some('N'));
        assert_eq!(normalize_latin_char('Ü'), Some('U'));
        assert_eq!(normalize_latin_char('ç'), Some('C'));
    }

    #[test]
    fn specials_are_kept() {
        assert_eq!(normalize_latin_char('å'), Some('Å'));
        assert_eq!(normalize_latin_char('Ø'), Some('Ø'));
        assert_eq!(normalize_latin_char('æ'), Some('Æ'));
    }

    #[test]
    fn non_letters_rejected() {
        assert_eq!(normalize_latin_char('3'), None);
        assert_eq!(normalize_latin_char('.'), None);
        // Uppercases to two letters.
        assert_eq!(normalize_latin_char('ß'), None);
        // No decomposition to a plain letter.
        assert_eq!(normalize_latin_char('ł'), None);
    }

    #[test]
    fn y_between_consonants_is_vowel() {
        assert_eq!(
            classify_latin_letter('Y', Some('L'), Some('N')),
            LetterClass::Vowel
        );
        assert_eq!(classify_latin_letter('Y', None, None), LetterClass::Vowel);
    }

    #[test]
    fn y_next_to_vowel_is_consonant() {
        assert_eq!(
            classify_latin_letter('Y', Some('A'), None),
            LetterClass::Consonant
        );
        assert_eq!(
            classify_latin_letter('Y', None, Some('O')),
            LetterClass::Consonant
        );
        assert_eq!(
            classify_latin_letter('Y', Some('T'), Some('Å')),
            LetterClass::Consonant
        );
    }

    #[test]
    fn special_letters_are_vowels() {
        for c in ['Æ', 'Ø', 'Å'] {
            assert_eq!(classify_latin_letter(c, None, None), LetterClass::Vowel);
        }
    }

    #[test]
    fn expansion_preserves_order_and_original() {
        let p = prepare_latin("Bjørn");
        assert_eq!(labels(&p), "BJOERN");
        let o: Vec<_> = p.tokens.iter().filter(|t| t.original == 'ø').collect();
        assert_eq!(o.len(), 2);
        assert_eq!(o[0].label, 'O');
        assert_eq!(o[1].label, 'E');
        assert!(o.iter().all(|t| t.class == LetterClass::Vowel));
        assert_eq!(p.normalized, "BJØRN");
    }

    #[test]
    fn separators_become_spaces() {
        let p = prepare_latin("Anne-Marie O’Neil");
        assert_eq!(p.normalized, "ANNE MARIE O NEIL");
        assert!(p.ignored.is_empty());
    }

    #[test]
    fn ignored_characters_recorded_once() {
        let p = prepare_latin("Jo3hn 3.");
        assert_eq!(labels(&p), "JOHN");
        assert_eq!(p.ignored, vec!['3', '.']);
        assert_eq!(p.normalized, "JOHN");
    }

    #[test]
    fn y_neighbours_cross_word_boundary() {
        // "LY" + "ANNA": Y's next letter is A from the next word.
        let p = prepare_latin("Ly Anna");
        let y = p.tokens.iter().find(|t| t.label == 'Y').unwrap();
        assert_eq!(y.class, LetterClass::Consonant);
    }

    #[test]
    fn word_final_y_before_vowel_word() {
        let p = prepare_latin("Henry Adams");
        let y = p.tokens.iter().find(|t| t.label == 'Y').unwrap();
        assert_eq!(y.class, LetterClass::Consonant);
        // Without a following word the same Y sits after a consonant.
        let p = prepare_latin("Henry");
        assert_eq!(p.tokens[4].class, LetterClass::Vowel);
    }

    #[test]
    fn y_neighbours_skip_ignored_characters() {
        // The digit is dropped, so Y sits next to E.
        let p = prepare_latin("Y7E");
        assert_eq!(p.tokens[0].class, LetterClass::Consonant);
    }
}
