//! Library addresses and the address <-> index transform
//!
//! An address is a mixed-radix number: the bounded fields use the radices
//! `(MAX_WALLS, MAX_SHELVES, MAX_VOLUMES, PAGES_PER_BOOK)`, most significant
//! first, and the hex id is an unbounded leading digit.
//!
//! ```text
//! index = hex * PAGES_PER_HEX
//!       + (wall - 1)   * MAX_SHELVES * MAX_VOLUMES * PAGES_PER_BOOK
//!       + (shelf - 1)  * MAX_VOLUMES * PAGES_PER_BOOK
//!       + (volume - 1) * PAGES_PER_BOOK
//!       + (page - 1)
//! ```

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::Serialize;

use crate::error::{LibraryError, Result};
use crate::{MAX_SHELVES, MAX_VOLUMES, MAX_WALLS, PAGES_PER_BOOK, PAGES_PER_HEX};

const HEX_PREFIX: &str = "hex";

/// Identifier of a hex (book-case), rendered as `hex<decimal>`
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexId(BigUint);

impl HexId {
    /// Create from the numeric id
    pub fn new(id: BigUint) -> Self {
        Self(id)
    }

    /// Get the numeric id
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Consume into the numeric id
    pub fn into_value(self) -> BigUint {
        self.0
    }
}

impl fmt::Display for HexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", HEX_PREFIX, self.0)
    }
}

impl FromStr for HexId {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix(HEX_PREFIX)
            .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| LibraryError::InvalidHexId(s.to_string()))?;

        digits
            .parse::<BigUint>()
            .map(Self)
            .map_err(|_| LibraryError::InvalidHexId(s.to_string()))
    }
}

impl From<BigUint> for HexId {
    fn from(id: BigUint) -> Self {
        Self(id)
    }
}

impl From<u64> for HexId {
    fn from(id: u64) -> Self {
        Self(BigUint::from(id))
    }
}

impl serde::Serialize for HexId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for HexId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Position of one page in the library
///
/// Fields are validated on construction, so every `LibraryAddress` encodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LibraryAddress {
    hex: HexId,
    wall: u32,
    shelf: u32,
    volume: u32,
    page: u32,
}

fn check(field: &'static str, value: u32, max: u32) -> Result<u32> {
    if (1..=max).contains(&value) {
        Ok(value)
    } else {
        Err(LibraryError::OutOfRange {
            field,
            value: u64::from(value),
            min: 1,
            max: u64::from(max),
        })
    }
}

impl LibraryAddress {
    /// Create an address, rejecting any bounded field outside its range
    pub fn new(hex: impl Into<HexId>, wall: u32, shelf: u32, volume: u32, page: u32) -> Result<Self> {
        Ok(Self {
            hex: hex.into(),
            wall: check("wall", wall, MAX_WALLS)?,
            shelf: check("shelf", shelf, MAX_SHELVES)?,
            volume: check("volume", volume, MAX_VOLUMES)?,
            page: check("page", page, PAGES_PER_BOOK)?,
        })
    }

    /// Hexagon holding the page (unbounded)
    pub fn hex(&self) -> &HexId {
        &self.hex
    }

    /// Wall within the hexagon, `1..=4`
    pub fn wall(&self) -> u32 {
        self.wall
    }

    /// Shelf on the wall, `1..=5`
    pub fn shelf(&self) -> u32 {
        self.shelf
    }

    /// Volume on the shelf, `1..=32`
    pub fn volume(&self) -> u32 {
        self.volume
    }

    /// Page within the volume, `1..=410`
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Encode this address as its linear index
    pub fn to_index(&self) -> BigUint {
        let offset = u64::from(self.wall - 1) * u64::from(MAX_SHELVES * MAX_VOLUMES * PAGES_PER_BOOK)
            + u64::from(self.shelf - 1) * u64::from(MAX_VOLUMES * PAGES_PER_BOOK)
            + u64::from(self.volume - 1) * u64::from(PAGES_PER_BOOK)
            + u64::from(self.page - 1);

        self.hex.value() * BigUint::from(PAGES_PER_HEX) + offset
    }

    /// Decode a linear index into its address
    ///
    /// Total over the non-negative integers: every index has exactly one address.
    pub fn from_index(index: &BigUint) -> Self {
        let per_hex = BigUint::from(PAGES_PER_HEX);
        let hex = index / &per_hex;
        // The remainder is below PAGES_PER_HEX, so it fits in the low limb
        let mut rest = (index % &per_hex).iter_u64_digits().next().unwrap_or(0);

        let mut take = |radix: u32| {
            let digit = (rest % u64::from(radix)) as u32 + 1;
            rest /= u64::from(radix);
            digit
        };
        let page = take(PAGES_PER_BOOK);
        let volume = take(MAX_VOLUMES);
        let shelf = take(MAX_SHELVES);
        let wall = take(MAX_WALLS);

        Self {
            hex: HexId(hex),
            wall,
            shelf,
            volume,
            page,
        }
    }
}

/// Largest hex whose every page fits on a page numeral
pub fn max_hex_id() -> HexId {
    HexId(crate::content::capacity() / BigUint::from(PAGES_PER_HEX) - 1u32)
}

/// Compact form: `hex<id>:<wall>:<shelf>:<volume>:<page>`
impl fmt::Display for LibraryAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.hex, self.wall, self.shelf, self.volume, self.page
        )
    }
}

impl FromStr for LibraryAddress {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let [hex, wall, shelf, volume, page] = parts.as_slice() else {
            return Err(LibraryError::InvalidAddress(s.to_string()));
        };

        let hex: HexId = hex.parse()?;
        let field = |value: &str| {
            value
                .parse::<u32>()
                .map_err(|_| LibraryError::InvalidAddress(s.to_string()))
        };

        Self::new(hex, field(*wall)?, field(*shelf)?, field(*volume)?, field(*page)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(hex: u64, wall: u32, shelf: u32, volume: u32, page: u32) -> LibraryAddress {
        LibraryAddress::new(hex, wall, shelf, volume, page).unwrap()
    }

    #[test]
    fn test_origin_is_index_zero() {
        assert_eq!(addr(0, 1, 1, 1, 1).to_index(), BigUint::default());
        assert_eq!(LibraryAddress::from_index(&BigUint::default()), addr(0, 1, 1, 1, 1));
    }

    #[test]
    fn test_field_weights() {
        assert_eq!(addr(0, 1, 1, 1, 2).to_index(), BigUint::from(1u32));
        assert_eq!(addr(0, 1, 1, 2, 1).to_index(), BigUint::from(410u32));
        assert_eq!(addr(0, 1, 2, 1, 1).to_index(), BigUint::from(32u32 * 410));
        assert_eq!(addr(0, 2, 1, 1, 1).to_index(), BigUint::from(5u32 * 32 * 410));
        assert_eq!(addr(1, 1, 1, 1, 1).to_index(), BigUint::from(262_400u32));
    }

    #[test]
    fn test_last_page_of_hex() {
        let last = addr(0, 4, 5, 32, 410);
        assert_eq!(last.to_index(), BigUint::from(PAGES_PER_HEX - 1));
        assert_eq!(LibraryAddress::from_index(&BigUint::from(PAGES_PER_HEX)), addr(1, 1, 1, 1, 1));
    }

    #[test]
    fn test_round_trip_large_hex() {
        let hex: HexId = "hex482910573920184756392018475639201847".parse().unwrap();
        let address = LibraryAddress::new(hex, 3, 2, 17, 205).unwrap();
        assert_eq!(LibraryAddress::from_index(&address.to_index()), address);
    }

    #[test]
    fn test_out_of_range_fields() {
        let err = LibraryAddress::new(0u64, 0, 1, 1, 1).unwrap_err();
        assert_eq!(
            err,
            LibraryError::OutOfRange {
                field: "wall",
                value: 0,
                min: 1,
                max: 4
            }
        );
        assert!(LibraryAddress::new(0u64, 5, 1, 1, 1).is_err());
        assert!(LibraryAddress::new(0u64, 1, 6, 1, 1).is_err());
        assert!(LibraryAddress::new(0u64, 1, 1, 33, 1).is_err());
        assert!(LibraryAddress::new(0u64, 1, 1, 1, 411).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_max_hex_id() {
        let last = LibraryAddress::new(max_hex_id(), 4, 5, 32, 410).unwrap();
        assert!(last.to_index() <= crate::content::max_index());

        let next = LibraryAddress::new(max_hex_id().into_value() + 1u32, 4, 5, 32, 410).unwrap();
        assert!(next.to_index() > crate::content::max_index());
    }

    #[test]
    fn test_hex_id_parse() {
        assert_eq!("hex0".parse::<HexId>().unwrap(), HexId::from(0u64));
        assert_eq!("hex0042".parse::<HexId>().unwrap(), HexId::from(42u64));
        assert_eq!(HexId::from(42u64).to_string(), "hex42");

        for bad in ["", "hex", "42", "hex-1", "hex+1", "hex1_000", "hex 1", "HEX1", "hex1a"] {
            assert_eq!(
                bad.parse::<HexId>().unwrap_err(),
                LibraryError::InvalidHexId(bad.to_string()),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_id_serde() {
        let json = serde_json::to_string(&HexId::from(7u64)).unwrap();
        assert_eq!(json, "\"hex7\"");

        let hex: HexId = serde_json::from_str("\"hex123\"").unwrap();
        assert_eq!(hex, HexId::from(123u64));
        assert!(serde_json::from_str::<HexId>("\"123\"").is_err());
    }

    #[test]
    fn test_address_display_parse() {
        let address = addr(9, 4, 5, 32, 410);
        assert_eq!(address.to_string(), "hex9:4:5:32:410");
        assert_eq!("hex9:4:5:32:410".parse::<LibraryAddress>().unwrap(), address);
        assert_eq!(" hex9:4:5:32:410\n".parse::<LibraryAddress>().unwrap(), address);
    }

    #[test]
    fn test_address_parse_errors() {
        assert!(matches!(
            "hex1:1:1:1".parse::<LibraryAddress>(),
            Err(LibraryError::InvalidAddress(_))
        ));
        assert!(matches!(
            "hex1:x:1:1:1".parse::<LibraryAddress>(),
            Err(LibraryError::InvalidAddress(_))
        ));
        assert!(matches!(
            "1:1:1:1:1".parse::<LibraryAddress>(),
            Err(LibraryError::InvalidHexId(_))
        ));
        assert!(matches!(
            "hex1:1:1:1:999".parse::<LibraryAddress>(),
            Err(LibraryError::OutOfRange { field: "page", .. })
        ));
    }

    #[test]
    fn test_address_serialize() {
        let json = serde_json::to_value(addr(5, 1, 2, 3, 4)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"hex": "hex5", "wall": 1, "shelf": 2, "volume": 3, "page": 4})
        );
    }
}
