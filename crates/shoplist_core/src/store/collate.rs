//! Locale-aware text ordering for listings.
//!
//! Approximates the default collation used by interactive list views:
//! - primary: whitespace, then punctuation and symbols, then digits, then
//!   letters compared case-insensitively with accents ignored and ligatures
//!   expanded (`œ` as `oe`, `ß` as `ss`);
//! - secondary: unaccented before accented;
//! - tertiary: lowercase before uppercase;
//! - finally raw code points, so distinct strings never compare equal.

use std::cmp::Ordering;
use std::iter;

/// ASCII punctuation and symbols in default collation order.
const VARIABLE_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Character classes by primary weight.
const CLASS_WHITESPACE: u8 = 0;
const CLASS_ASCII_SYMBOL: u8 = 1;
const CLASS_OTHER_SYMBOL: u8 = 2;
const CLASS_DIGIT: u8 = 3;
const CLASS_LETTER: u8 = 4;

/// Compares two labels for display ordering.
pub fn collate(left: &str, right: &str) -> Ordering {
    primary_key(left)
        .cmp(primary_key(right))
        .then_with(|| lowercase(left).cmp(lowercase(right)))
        .then_with(|| case_rank(left).cmp(case_rank(right)))
        .then_with(|| left.cmp(right))
}

fn primary_key(value: &str) -> impl Iterator<Item = (u8, u32)> + '_ {
    lowercase(value).flat_map(expand).map(primary_weight)
}

fn lowercase(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().flat_map(char::to_lowercase)
}

fn case_rank(value: &str) -> impl Iterator<Item = u8> + '_ {
    value.chars().map(|ch| u8::from(ch.is_uppercase()))
}

fn primary_weight(ch: char) -> (u8, u32) {
    if ch.is_whitespace() {
        (CLASS_WHITESPACE, u32::from(ch))
    } else if let Some(position) = VARIABLE_ORDER.find(ch) {
        (CLASS_ASCII_SYMBOL, position as u32)
    } else if let Some(digit) = ch.to_digit(10) {
        (CLASS_DIGIT, digit)
    } else if ch.is_alphanumeric() {
        (CLASS_LETTER, u32::from(ch))
    } else {
        (CLASS_OTHER_SYMBOL, u32::from(ch))
    }
}

fn expand(ch: char) -> impl Iterator<Item = char> {
    let (first, second) = match ch {
        'œ' => ('o', Some('e')),
        'æ' => ('a', Some('e')),
        'ß' => ('s', Some('s')),
        other => (fold_accent(other), None),
    };
    iter::once(first).chain(second)
}

fn fold_accent(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
