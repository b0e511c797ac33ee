//! Validated postcode value type
//!
//! A `Postcode` can only be obtained by parsing, so every instance holds a
//! consistent outward/inward pair. The grammar that accepted the input is
//! recorded once, as the variant of the inner representation, and every
//! derivation matches on it instead of re-running a pattern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::error::PostcodeError;
use crate::grammar::{self, PostcodeKind, BFPO_MARKER, INWARD_CODE_LEN, NI_AREA_CODE};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Parts {
    Standard { outward: String, inward: String },
    Bfpo { number: String },
}

/// A syntactically valid UK postcode
///
/// Equality, ordering and hashing work on the normalized components, so
/// `"sw1a1aa"` and `"SW1A 1AA"` parse to equal values.
///
/// # Examples
///
/// ```rust
/// use postcode_core::Postcode;
///
/// let postcode: Postcode = "sw1a1aa".parse().unwrap();
/// assert_eq!(postcode.outward_code(), "SW1A");
/// assert_eq!(postcode.inward_code(), "1AA");
/// assert_eq!(postcode.area(), Some("SW"));
/// assert_eq!(postcode.district(), Some("1A"));
/// assert_eq!(postcode.to_string(), "SW1A 1AA");
///
/// let bfpo = Postcode::parse("BFPO123").unwrap();
/// assert!(bfpo.is_bfpo());
/// assert_eq!(bfpo.area(), None);
/// assert_eq!(bfpo.full_postcode(), "BFPO 123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Postcode {
    parts: Parts,
}

impl Postcode {
    /// Parses a raw postcode.
    ///
    /// Spaces are ignored and letters may be in any case. The error carries
    /// the input exactly as given.
    pub fn parse(input: &str) -> Result<Self, PostcodeError> {
        if input.is_empty() {
            debug!("Rejected empty postcode");
            return Err(PostcodeError::invalid_format(input));
        }

        let normalized = grammar::normalize(input);
        let parts = match grammar::classify(&normalized) {
            Some(PostcodeKind::Bfpo) => Parts::Bfpo {
                number: normalized[BFPO_MARKER.len()..].trim_start().to_string(),
            },
            // The standard grammar guarantees an ASCII string ending in a
            // 3-character inward code, so a byte split is safe
            Some(PostcodeKind::Standard) => {
                let (outward, inward) = normalized.split_at(normalized.len() - INWARD_CODE_LEN);
                Parts::Standard {
                    outward: outward.to_string(),
                    inward: inward.to_string(),
                }
            }
            None => {
                debug!(input, "Rejected postcode");
                return Err(PostcodeError::invalid_format(input));
            }
        };

        let postcode = Self { parts };
        trace!(postcode = %postcode, kind = %postcode.kind(), "Parsed postcode");
        Ok(postcode)
    }

    /// Returns true if the input would parse
    pub fn is_valid(input: &str) -> bool {
        grammar::is_valid_format(Some(input))
    }

    /// Returns the grammar that accepted this postcode
    pub fn kind(&self) -> PostcodeKind {
        match self.parts {
            Parts::Standard { .. } => PostcodeKind::Standard,
            Parts::Bfpo { .. } => PostcodeKind::Bfpo,
        }
    }

    /// Returns true for British Forces Post Office codes
    pub fn is_bfpo(&self) -> bool {
        self.kind() == PostcodeKind::Bfpo
    }

    /// Returns the outward code (the part before the space), or `"BFPO"`
    pub fn outward_code(&self) -> &str {
        match &self.parts {
            Parts::Standard { outward, .. } => outward.as_str(),
            Parts::Bfpo { .. } => BFPO_MARKER,
        }
    }

    /// Returns the inward code (the part after the space), or the BFPO digits
    pub fn inward_code(&self) -> &str {
        match &self.parts {
            Parts::Standard { inward, .. } => inward.as_str(),
            Parts::Bfpo { number } => number.as_str(),
        }
    }

    /// Returns the BFPO number, if this is a BFPO code
    pub fn bfpo_number(&self) -> Option<&str> {
        match &self.parts {
            Parts::Standard { .. } => None,
            Parts::Bfpo { number } => Some(number.as_str()),
        }
    }

    /// Returns the canonical form: outward code, one space, inward code
    pub fn full_postcode(&self) -> String {
        format!("{} {}", self.outward_code(), self.inward_code())
    }

    /// Returns the 1 or 2 letter postal area. `None` for BFPO codes.
    pub fn area(&self) -> Option<&str> {
        match &self.parts {
            Parts::Standard { outward, .. } => Some(&outward[..area_len(outward)]),
            Parts::Bfpo { .. } => None,
        }
    }

    /// Returns the district: the outward code after the area. `None` for BFPO codes.
    pub fn district(&self) -> Option<&str> {
        match &self.parts {
            Parts::Standard { outward, .. } => Some(&outward[area_len(outward)..]),
            Parts::Bfpo { .. } => None,
        }
    }

    /// Returns the sector digit. `None` for BFPO codes.
    pub fn sector(&self) -> Option<&str> {
        match &self.parts {
            Parts::Standard { inward, .. } => Some(&inward[..1]),
            Parts::Bfpo { .. } => None,
        }
    }

    /// Returns the two unit letters. `None` for BFPO codes.
    pub fn unit(&self) -> Option<&str> {
        match &self.parts {
            Parts::Standard { inward, .. } => Some(&inward[1..]),
            Parts::Bfpo { .. } => None,
        }
    }

    /// Returns true if the postal area is Northern Ireland (`BT`).
    ///
    /// Always false for BFPO codes, whose location is unknown.
    pub fn is_northern_ireland(&self) -> bool {
        self.area().is_some_and(|area| area.contains(NI_AREA_CODE))
    }
}

/// Length of the area prefix of a standard outward code.
///
/// Looks at the second character of the outward code: a letter there means a
/// two-letter area.
fn area_len(outward: &str) -> usize {
    match outward.as_bytes().get(1) {
        Some(b) if b.is_ascii_uppercase() => 2,
        _ => 1,
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.outward_code(), self.inward_code())
    }
}

impl FromStr for Postcode {
    type Err = PostcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Postcode {
    type Error = PostcodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Postcode {
    type Error = PostcodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Postcode> for String {
    fn from(postcode: Postcode) -> String {
        postcode.full_postcode()
    }
}
