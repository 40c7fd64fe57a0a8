//! Library error types

use thiserror::Error;

/// Errors that can occur while addressing or searching the library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("Invalid hex id: {0:?} (expected \"hex\" followed by decimal digits)")]
    InvalidHexId(String),

    #[error("{field} {value} out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    /// Index at or past the page capacity; carries its bit length
    #[error("Index of {bits} bits lies past the last page")]
    IndexOutOfRange { bits: u64 },

    #[error("Text is {len} symbols long, a page holds at most {max}")]
    TooLong { len: usize, max: usize },

    #[error("Character {ch:?} at position {position} is not in the alphabet")]
    InvalidCharacter { ch: char, position: usize },

    #[error("Invalid address: {0:?} (expected hex<id>:<wall>:<shelf>:<volume>:<page>)")]
    InvalidAddress(String),
}

impl LibraryError {
    /// Check if a value fell outside the addressable space
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, LibraryError::OutOfRange { .. } | LibraryError::IndexOutOfRange { .. })
    }

    /// Check if this error was caused by malformed caller input
    pub fn is_invalid_input(&self) -> bool {
        match self {
            LibraryError::InvalidHexId(_) => true,
            LibraryError::InvalidAddress(_) => true,
            LibraryError::InvalidCharacter { .. } => true,
            LibraryError::TooLong { .. } => true,
            LibraryError::OutOfRange { .. } => true,
            LibraryError::IndexOutOfRange { .. } => false,
        }
    }
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;
