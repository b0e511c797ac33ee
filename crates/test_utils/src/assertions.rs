//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for postcode types that give
//! more meaningful error messages than standard assertions.

use postcode_core::{Postcode, PostcodeError};

/// Asserts the structural parts of a standard postcode
///
/// # Arguments
///
/// * `postcode` - The parsed postcode
/// * `area` / `district` / `sector` / `unit` - The expected parts
///
/// # Panics
///
/// Panics if the postcode is a BFPO code or any part differs
pub fn assert_postcode_parts(
    postcode: &Postcode,
    area: &str,
    district: &str,
    sector: &str,
    unit: &str,
) {
    assert!(
        !postcode.is_bfpo(),
        "Expected a standard postcode, got BFPO code {}",
        postcode
    );
    assert_eq!(postcode.area(), Some(area), "Area mismatch for {}", postcode);
    assert_eq!(postcode.district(), Some(district), "District mismatch for {}", postcode);
    assert_eq!(postcode.sector(), Some(sector), "Sector mismatch for {}", postcode);
    assert_eq!(postcode.unit(), Some(unit), "Unit mismatch for {}", postcode);
}

/// Asserts that a postcode carries no area, district, sector or unit
pub fn assert_structure_not_applicable(postcode: &Postcode) {
    assert_eq!(postcode.area(), None, "Expected no area for {}", postcode);
    assert_eq!(postcode.district(), None, "Expected no district for {}", postcode);
    assert_eq!(postcode.sector(), None, "Expected no sector for {}", postcode);
    assert_eq!(postcode.unit(), None, "Expected no unit for {}", postcode);
}

/// Asserts that parsing `input` fails with an error that reports `input`
///
/// # Panics
///
/// Panics if the input parses, or the error does not carry the raw input
pub fn assert_rejected(input: &str) {
    match Postcode::parse(input) {
        Ok(postcode) => panic!("Expected '{}' to be rejected, parsed as {}", input, postcode),
        Err(error) => {
            assert_eq!(
                error,
                PostcodeError::InvalidFormat(input.to_string()),
                "Error should carry the raw input"
            );
            assert!(
                error.to_string().contains(input),
                "Error message '{}' should contain '{}'",
                error,
                input
            );
        }
    }
}

/// Asserts that `input` parses to the given outward and inward codes
pub fn assert_split(input: &str, outward: &str, inward: &str) {
    let postcode = Postcode::parse(input)
        .unwrap_or_else(|e| panic!("Expected '{}' to parse: {}", input, e));
    assert_eq!(postcode.outward_code(), outward, "Outward code mismatch for '{}'", input);
    assert_eq!(postcode.inward_code(), inward, "Inward code mismatch for '{}'", input);
}
