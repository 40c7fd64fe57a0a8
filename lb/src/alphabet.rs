//! The closed Persian symbol set
//!
//! Every page and every search text is drawn from these 35 symbols. A symbol's
//! digit value is its position in [`SYMBOLS`]; the first symbol is digit zero.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{LibraryError, Result};

/// Number of symbols (the radix of a page numeral)
pub const SIZE: usize = 35;

/// Symbols in digit order
pub const SYMBOLS: [char; SIZE] = [
    'ا', 'ب', 'پ', 'ت', 'ث', 'ج', 'چ', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'ژ', 'س', 'ش', 'ص', 'ض', 'ط', 'ظ', 'ع', 'غ', 'ف',
    'ق', 'ک', 'گ', 'ل', 'م', 'ن', 'و', 'ه', 'ی', ' ', '،', '۔',
];

/// The zero digit, used for left padding
pub const ZERO_SYMBOL: char = SYMBOLS[0];

static DIGITS: LazyLock<HashMap<char, u8>> = LazyLock::new(|| {
    SYMBOLS
        .iter()
        .enumerate()
        .map(|(digit, &symbol)| (symbol, digit as u8))
        .collect()
});

/// Number of symbols in the alphabet
pub fn size() -> usize {
    SIZE
}

/// Digit value of `symbol`
///
/// `None` for a symbol outside the alphabet. Use [`digit_at`] where the symbol
/// comes from caller text and should surface as `InvalidCharacter`.
pub fn digit_of(symbol: char) -> Option<u8> {
    DIGITS.get(&symbol).copied()
}

/// Digit value of `symbol` found at `position` in some text
pub fn digit_at(symbol: char, position: usize) -> Result<u8> {
    digit_of(symbol).ok_or(LibraryError::InvalidCharacter { ch: symbol, position })
}

/// Symbol for `digit`
///
/// # Panics
///
/// Panics if `digit >= SIZE`.
pub fn symbol_of(digit: u8) -> char {
    SYMBOLS[usize::from(digit)]
}

/// Check if `symbol` belongs to the alphabet
pub fn contains(symbol: char) -> bool {
    DIGITS.contains_key(&symbol)
}

/// Convert text to digits, reporting the first symbol outside the alphabet
pub fn to_digits(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| digit_at(ch, position))
        .collect()
}
