//! Postcode grammars and input normalization
//!
//! Two grammars are recognised, each anchored at both ends of the normalized
//! input:
//!
//! - **Standard**: an outward code of 2-4 characters followed by an inward
//!   code of exactly 3 characters (sector digit + two unit letters). Letters
//!   are restricted per position:
//!   - position 1 never uses `Q`, `V` or `X`;
//!   - a second-position letter never uses `I`, `J` or `Z`;
//!   - a trailing district letter after `A9` is one of `ABCDEFGHJKPSTUW`;
//!   - a trailing district letter after `AA9` is one of `ABEHMNPRVWXY`;
//!   - the unit letters never use `C`, `I`, `K`, `M`, `O` or `V`.
//! - **BFPO**: the literal `BFPO`, an optional space and 1 to 4 digits.
//!
//! Patterns are compiled once on first use.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outward code used for every British Forces Post Office postcode
pub const BFPO_MARKER: &str = "BFPO";

/// Postcode area assigned to Northern Ireland
pub const NI_AREA_CODE: &str = "BT";

/// Length of the inward code of a standard postcode
pub const INWARD_CODE_LEN: usize = 3;

static STANDARD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Z--QVX]",
        r"(?:[A-Z--IJZ][0-9](?:[0-9]|[ABEHMNPRVWXY])?",
        r"|[0-9](?:[0-9]|[ABCDEFGHJKPSTUW])?)",
        r"[0-9][A-Z--CIKMOV]{2}$",
    ))
    .expect("standard postcode pattern is valid")
});

static BFPO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^BFPO ?[0-9]{1,4}$").expect("BFPO pattern is valid"));

/// Which grammar a postcode was accepted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostcodeKind {
    /// Geographic postcode, e.g. `SW1A 1AA`
    Standard,
    /// British Forces Post Office number, e.g. `BFPO 123`
    Bfpo,
}

impl PostcodeKind {
    /// Returns a stable name for logging and display
    pub fn as_str(&self) -> &'static str {
        match self {
            PostcodeKind::Standard => "standard",
            PostcodeKind::Bfpo => "bfpo",
        }
    }
}

impl fmt::Display for PostcodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strips every space and upper-cases ASCII letters.
///
/// Only U+0020 is removed; tabs and other whitespace are kept and will fail
/// both grammars. Non-ASCII characters pass through unchanged.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Returns true if an already-normalized string is a standard postcode
pub fn matches_standard(normalized: &str) -> bool {
    STANDARD_PATTERN.is_match(normalized)
}

/// Returns true if an already-normalized string is a BFPO code
pub fn matches_bfpo(normalized: &str) -> bool {
    BFPO_PATTERN.is_match(normalized)
}

/// Classifies an already-normalized string, or returns `None` if it
/// matches neither grammar
pub fn classify(normalized: &str) -> Option<PostcodeKind> {
    if matches_bfpo(normalized) {
        Some(PostcodeKind::Bfpo)
    } else if matches_standard(normalized) {
        Some(PostcodeKind::Standard)
    } else {
        None
    }
}

/// Returns true if the input is a syntactically valid UK or BFPO postcode.
///
/// `None` and the empty string are rejected before normalization.
///
/// # Examples
///
/// ```rust
/// use postcode_core::is_valid_format;
///
/// assert!(is_valid_format(Some("sw1a 1aa")));
/// assert!(is_valid_format(Some("BFPO 123")));
/// assert!(!is_valid_format(Some("")));
/// assert!(!is_valid_format(None));
/// ```
pub fn is_valid_format(input: Option<&str>) -> bool {
    match input {
        None => false,
        Some(raw) if raw.is_empty() => false,
        Some(raw) => classify(&normalize(raw)).is_some(),
    }
}
