//! Pages and the index <-> page transform
//!
//! A page is its linear index written as a base-35 numeral of exactly
//! `CHARS_PER_PAGE` digits, most significant first, left-padded with the
//! alphabet's zero symbol. Fixed-width numerals biject onto `[0, 35^3200)`.

use std::fmt;
use std::sync::LazyLock;

use num_bigint::BigUint;
use serde::Serialize;

use crate::CHARS_PER_PAGE;
use crate::alphabet;
use crate::error::{LibraryError, Result};

const RADIX: u32 = alphabet::SIZE as u32;

static CAPACITY: LazyLock<BigUint> = LazyLock::new(|| BigUint::from(RADIX).pow(CHARS_PER_PAGE as u32));

/// Number of distinct pages (`35^CHARS_PER_PAGE`)
pub fn capacity() -> &'static BigUint {
    &CAPACITY
}

/// Largest index a page can represent
pub fn max_index() -> BigUint {
    capacity().clone() - 1u32
}

/// One page of `CHARS_PER_PAGE` symbols, held as digit values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageContent {
    digits: Vec<u8>,
}

impl PageContent {
    /// Build a page from digit values
    ///
    /// Callers guarantee `CHARS_PER_PAGE` digits, each below the alphabet size.
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert_eq!(digits.len(), CHARS_PER_PAGE);
        debug_assert!(digits.iter().all(|&d| usize::from(d) < alphabet::SIZE));
        Self { digits }
    }

    /// Digit values, most significant first
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Page length in symbols (always `CHARS_PER_PAGE`)
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Iterate the page's symbols
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.digits.iter().map(|&d| alphabet::symbol_of(d))
    }

    /// Split the page into display lines of `width` symbols
    pub fn lines(&self, width: usize) -> Vec<String> {
        self.digits
            .chunks(width.max(1))
            .map(|line| line.iter().map(|&d| alphabet::symbol_of(d)).collect())
            .collect()
    }

    /// Symbol offset of the first occurrence of `text`
    ///
    /// Text containing symbols outside the alphabet never occurs.
    pub fn find(&self, text: &str) -> Option<usize> {
        let needle = alphabet::to_digits(text).ok()?;
        if needle.is_empty() {
            return Some(0);
        }
        self.digits.windows(needle.len()).position(|window| window == needle.as_slice())
    }

    /// Encode a linear index as a page
    ///
    /// Fails with `IndexOutOfRange` when the index is at or past `capacity()`,
    /// before any radix conversion.
    pub fn from_index(index: &BigUint) -> Result<Self> {
        if index >= capacity() {
            return Err(LibraryError::IndexOutOfRange { bits: index.bits() });
        }

        let numeral = index.to_radix_be(RADIX);

        let mut digits = vec![0u8; CHARS_PER_PAGE - numeral.len()];
        digits.extend_from_slice(&numeral);
        Ok(Self::from_digits(digits))
    }

    /// Decode this page back into its linear index
    pub fn to_index(&self) -> BigUint {
        self.digits
            .iter()
            .fold(BigUint::default(), |index, &d| index * RADIX + u32::from(d))
    }
}

impl fmt::Display for PageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols().try_for_each(|symbol| fmt::Write::write_char(f, symbol))
    }
}

impl Serialize for PageContent {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
