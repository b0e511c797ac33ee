//! Re-settable postcode holder
//!
//! `PostcodeRecord` has two states:
//!
//! - **Unset**: nothing has been accepted yet. Accessors return `None`
//!   (or `false` for the predicates).
//! - **Set**: holds a validated [`Postcode`].
//!
//! A set operation parses the new input into a fresh `Postcode` and only then
//! replaces the held value, so a failed set leaves the record exactly as it
//! was.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PostcodeError;
use crate::grammar::PostcodeKind;
use crate::postcode::Postcode;

/// A postcode slot that can be (re)assigned from raw input
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostcodeRecord {
    postcode: Option<Postcode>,
}

impl PostcodeRecord {
    /// Creates an unset record
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record already set from `input`
    pub fn from_input(input: &str) -> Result<Self, PostcodeError> {
        Ok(Self::from(Postcode::parse(input)?))
    }

    /// Replaces the held postcode with `input`, or returns the parse error
    /// and keeps the current state
    pub fn set(&mut self, input: &str) -> Result<(), PostcodeError> {
        let postcode = Postcode::parse(input)?;
        debug!(
            from = ?self.postcode.as_ref().map(Postcode::full_postcode),
            to = %postcode,
            "Postcode record set"
        );
        self.postcode = Some(postcode);
        Ok(())
    }

    /// Replaces the held postcode with `input`.
    ///
    /// Returns whether the assignment happened.
    pub fn try_set(&mut self, input: &str) -> bool {
        self.set(input).is_ok()
    }

    /// Returns the record to the unset state, yielding the previous value
    pub fn clear(&mut self) -> Option<Postcode> {
        self.postcode.take()
    }

    /// Returns true once a postcode has been accepted
    pub fn is_set(&self) -> bool {
        self.postcode.is_some()
    }

    /// Returns the held postcode
    pub fn postcode(&self) -> Option<&Postcode> {
        self.postcode.as_ref()
    }

    /// Consumes the record, returning the held postcode
    pub fn into_postcode(self) -> Option<Postcode> {
        self.postcode
    }

    /// Returns the grammar that accepted the held postcode
    pub fn kind(&self) -> Option<PostcodeKind> {
        self.postcode.as_ref().map(Postcode::kind)
    }

    /// Returns the outward code, or `"BFPO"`
    pub fn outward_code(&self) -> Option<&str> {
        self.postcode.as_ref().map(Postcode::outward_code)
    }

    /// Returns the inward code, or the BFPO digits
    pub fn inward_code(&self) -> Option<&str> {
        self.postcode.as_ref().map(Postcode::inward_code)
    }

    /// Returns the canonical form: outward code, one space, inward code
    pub fn full_postcode(&self) -> Option<String> {
        self.postcode.as_ref().map(Postcode::full_postcode)
    }

    /// Returns the postal area. `None` while unset or for BFPO codes.
    pub fn area(&self) -> Option<&str> {
        self.postcode.as_ref().and_then(Postcode::area)
    }

    /// Returns the district. `None` while unset or for BFPO codes.
    pub fn district(&self) -> Option<&str> {
        self.postcode.as_ref().and_then(Postcode::district)
    }

    /// Returns the sector digit. `None` while unset or for BFPO codes.
    pub fn sector(&self) -> Option<&str> {
        self.postcode.as_ref().and_then(Postcode::sector)
    }

    /// Returns the unit letters. `None` while unset or for BFPO codes.
    pub fn unit(&self) -> Option<&str> {
        self.postcode.as_ref().and_then(Postcode::unit)
    }

    /// False while unset
    pub fn is_bfpo(&self) -> bool {
        self.postcode.as_ref().is_some_and(Postcode::is_bfpo)
    }

    /// False while unset
    pub fn is_northern_ireland(&self) -> bool {
        self.postcode.as_ref().is_some_and(Postcode::is_northern_ireland)
    }
}

impl From<Postcode> for PostcodeRecord {
    fn from(postcode: Postcode) -> Self {
        Self {
            postcode: Some(postcode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_unset() {
        let record = PostcodeRecord::new();
        assert!(!record.is_set());
        assert_eq!(record.outward_code(), None);
        assert_eq!(record.full_postcode(), None);
        assert!(!record.is_bfpo());
        assert!(!record.is_northern_ireland());
    }

    #[test]
    fn test_clear_returns_previous_value() {
        let mut record = PostcodeRecord::from_input("AA9B 9DD").unwrap();
        let previous = record.clear();
        assert_eq!(previous.map(|p| p.full_postcode()), Some("AA9B 9DD".to_string()));
        assert!(!record.is_set());
    }
}
