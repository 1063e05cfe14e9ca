// src/view/collate.rs

//! Collation keys for German course names.
//!
//! Primary-strength comparison in the spirit of the CLDR root order that
//! German uses:
//!
//! - case and diacritics are ignored: "Übung", "ubung" and "UBUNG" share a key
//! - letters without a decomposition fold to their base (`ø` -> `o`,
//!   `ł` -> `l`, `đ` -> `d`), `ß` compares like `ss`
//! - whitespace sorts before punctuation, punctuation before digits, digits
//!   before letters

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Punctuation and symbols in collation order. Anything not listed sorts
/// after these, by code point, but still before digits.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

// Character classes, in primary order. Packed into the top byte of a weight.
const CLASS_SPACE: u32 = 1;
const CLASS_PUNCT: u32 = 2;
const CLASS_DIGIT: u32 = 3;
const CLASS_LETTER: u32 = 4;

/// Sort key of a string. Compare keys, not the strings they came from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollationKey(Vec<u32>);

/// Build the comparison key for `s`.
pub fn collation_key(s: &str) -> CollationKey {
    let mut weights = Vec::with_capacity(s.len());
    for c in s.nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            'ß' | 'ẞ' => weights.extend([letter('s'), letter('s')]),
            _ if c.is_whitespace() => weights.push(weight(CLASS_SPACE, 0)),
            _ if c.is_ascii_digit() => weights.push(weight(CLASS_DIGIT, c as u32 - '0' as u32)),
            _ if c.is_alphanumeric() => {
                for lower in c.to_lowercase() {
                    weights.push(letter(fold_base_letter(lower)));
                }
            }
            _ => weights.push(weight(CLASS_PUNCT, punctuation_rank(c))),
        }
    }
    CollationKey(weights)
}

/// Compare two strings by their collation keys.
pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

fn weight(class: u32, value: u32) -> u32 {
    (class << 24) | (value & 0x00FF_FFFF)
}

fn letter(c: char) -> u32 {
    weight(CLASS_LETTER, c as u32)
}

/// Lowercase letters whose diacritic is part of the code point itself.
fn fold_base_letter(c: char) -> char {
    match c {
        'ø' => 'o',
        'ł' | 'ŀ' => 'l',
        'đ' => 'd',
        'ħ' => 'h',
        'ŧ' => 't',
        'ı' => 'i',
        other => other,
    }
}

fn punctuation_rank(c: char) -> u32 {
    match PUNCTUATION_ORDER.chars().position(|p| p == c) {
        Some(idx) => idx as u32,
        None => PUNCTUATION_ORDER.len() as u32 + c as u32,
    }
}
