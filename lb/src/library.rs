//! The library's two operations: read a page, and find the page holding a text

use tracing::debug;

use crate::address::{HexId, LibraryAddress};
use crate::content::PageContent;
use crate::error::Result;
use crate::search;

/// Generate the page stored at `address`
///
/// Fails with `IndexOutOfRange` when the hex id is so large the address lies
/// beyond the last representable page.
pub fn generate_page(address: &LibraryAddress) -> Result<PageContent> {
    let page = PageContent::from_index(&address.to_index())?;
    debug!(%address, "generate_page: generated");
    Ok(page)
}

/// Generate a page from textual address parts (`hex` as `hex<decimal>`)
pub fn generate_page_from_parts(hex: &str, wall: u32, shelf: u32, volume: u32, page: u32) -> Result<PageContent> {
    debug!(hex, wall, shelf, volume, page, "generate_page_from_parts: called");
    let hex: HexId = hex.parse()?;
    let address = LibraryAddress::new(hex, wall, shelf, volume, page)?;
    generate_page(&address)
}

/// Find an address whose page contains `text`
pub fn find_address_for_text(text: &str) -> Result<LibraryAddress> {
    search::locate(text).map(|hit| hit.address)
}
