//! Library of Babel - every page of Persian text, addressed by shelf position
//!
//! The library holds every possible page of `CHARS_PER_PAGE` symbols drawn from
//! a fixed 35-symbol Persian alphabet. Nothing is stored: a page is computed from
//! its address, and an address is computed from a page.
//!
//! # Core Concepts
//!
//! - **Address**: `hex` (unbounded) / wall / shelf / volume / page, a mixed-radix number
//! - **Linear index**: the arbitrary-precision integer both transforms route through
//! - **Page**: the index written as a fixed-width base-35 numeral
//! - **Search**: embed text into a reproducible page and decode that page's address
//!
//! # Architecture
//!
//! ```text
//! generate:  LibraryAddress -> index -> PageContent
//! search:    text -> synthesized PageContent -> index -> LibraryAddress
//! ```
//!
//! # Modules
//!
//! - [`alphabet`] - Symbol set and digit lookup
//! - [`address`] - Address <-> index transform
//! - [`content`] - Index <-> page transform
//! - [`search`] - Deterministic text placement
//! - [`library`] - The two public operations
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use libraryofbabel::{find_address_for_text, generate_page};
//!
//! let address = find_address_for_text("سلام دنیا").unwrap();
//! let page = generate_page(&address).unwrap();
//! assert!(page.find("سلام دنیا").is_some());
//! ```

pub mod address;
pub mod alphabet;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod library;
pub mod search;

// Re-export commonly used types
pub use address::{HexId, LibraryAddress};
pub use config::Config;
pub use content::PageContent;
pub use error::{LibraryError, Result};
pub use library::{find_address_for_text, generate_page, generate_page_from_parts};
pub use search::{SearchHit, locate};

/// Lines on one page
pub const LINES_PER_PAGE: usize = 40;

/// Symbols on one line
pub const CHARS_PER_LINE: usize = 80;

/// Symbols on one page (40 x 80)
pub const CHARS_PER_PAGE: usize = LINES_PER_PAGE * CHARS_PER_LINE;

/// Pages in one volume
pub const PAGES_PER_BOOK: u32 = 410;

/// Walls in one hex
pub const MAX_WALLS: u32 = 4;

/// Shelves on one wall
pub const MAX_SHELVES: u32 = 5;

/// Volumes on one shelf
pub const MAX_VOLUMES: u32 = 32;

/// Pages held by a single hex (4 * 5 * 32 * 410 = 262,400)
pub const PAGES_PER_HEX: u64 = MAX_WALLS as u64 * MAX_SHELVES as u64 * MAX_VOLUMES as u64 * PAGES_PER_BOOK as u64;
