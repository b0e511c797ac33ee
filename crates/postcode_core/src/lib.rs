//! Postcode Core - UK postcode validation and decomposition
//!
//! This crate validates raw strings against the UK postcode grammar (including
//! British Forces Post Office codes) and breaks valid postcodes into their
//! structural parts:
//!
//! - **Outward code**: area + district, e.g. `SW1A`, or the `BFPO` marker
//! - **Inward code**: sector + unit, e.g. `1AA`, or the BFPO number
//! - **Area** / **District** / **Sector** / **Unit**: derived on demand,
//!   `None` for BFPO codes
//!
//! Parsing ignores spaces and letter case. Nothing is looked up: a postcode
//! that passes is well-formed, not necessarily in use.
//!
//! # Examples
//!
//! ```rust
//! use postcode_core::{Postcode, PostcodeRecord, PostcodeError};
//!
//! let postcode = Postcode::parse("bt9b 9dd").unwrap();
//! assert_eq!(postcode.area(), Some("BT"));
//! assert_eq!(postcode.sector(), Some("9"));
//! assert_eq!(postcode.unit(), Some("DD"));
//! assert!(postcode.is_northern_ireland());
//!
//! let error = Postcode::parse("bad-bad-postcode").unwrap_err();
//! assert_eq!(error, PostcodeError::InvalidFormat("bad-bad-postcode".to_string()));
//!
//! // A record only changes when the new input is valid
//! let mut record = PostcodeRecord::new();
//! assert!(record.try_set("AA99 9DD"));
//! assert!(!record.try_set("12345678"));
//! assert_eq!(record.full_postcode().as_deref(), Some("AA99 9DD"));
//! ```

pub mod grammar;
pub mod postcode;
pub mod record;
pub mod error;

pub use grammar::{is_valid_format, normalize, PostcodeKind};
pub use postcode::Postcode;
pub use record::PostcodeRecord;
pub use error::PostcodeError;
