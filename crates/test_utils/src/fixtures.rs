//! Pre-built Test Fixtures
//!
//! Provides known postcode inputs grouped by the behaviour they exercise.
//! These fixtures are consistent and predictable for unit tests.

use postcode_core::Postcode;

/// Fixture for standard (geographic) postcodes
pub struct StandardFixtures;

impl StandardFixtures {
    /// One example of every outward code shape, without spaces
    pub fn all_shapes() -> [&'static str; 6] {
        [
            "AA9B9DD", // AA9A 9AA
            "A9B9DD",  // A9A 9AA
            "A99DD",   // A9 9AA
            "A999DD",  // A99 9AA
            "AA99DD",  // AA9 9AA
            "AA999DD", // AA99 9AA
        ]
    }

    /// Real-world postcodes in canonical form
    pub fn well_known() -> [&'static str; 8] {
        [
            "SW1A 1AA",
            "EC1A 1BB",
            "W1A 0AX",
            "M1 1AE",
            "B33 8TH",
            "CR2 6XH",
            "DN55 1PT",
            "BT7 1NN",
        ]
    }

    /// A two-letter area postcode with a lettered district
    pub fn two_letter_area() -> Postcode {
        Postcode::parse("AA9B 9DD").expect("fixture postcode is valid")
    }

    /// A one-letter area postcode with a numeric district
    pub fn one_letter_area() -> Postcode {
        Postcode::parse("A9 9DD").expect("fixture postcode is valid")
    }

    /// A Northern Ireland postcode
    pub fn northern_ireland() -> Postcode {
        Postcode::parse("BT9B 9DD").expect("fixture postcode is valid")
    }
}

/// Fixture for British Forces Post Office codes
pub struct BfpoFixtures;

impl BfpoFixtures {
    /// Valid BFPO inputs, with and without the optional space
    pub fn valid() -> [&'static str; 4] {
        ["BFPO 1", "BFPO 1234", "BFPO123", "bfpo 57"]
    }

    /// Malformed BFPO inputs
    pub fn invalid() -> [&'static str; 4] {
        ["BFPO 12345", "BFPO ", "BFPO", "BFPO 12A"]
    }

    /// A parsed BFPO code
    pub fn bfpo_123() -> Postcode {
        Postcode::parse("BFPO 123").expect("fixture postcode is valid")
    }
}

/// Fixture for inputs that must be rejected
pub struct InvalidFixtures;

impl InvalidFixtures {
    /// Inputs that match neither grammar
    pub fn malformed() -> [&'static str; 6] {
        [
            "12345678",
            "bad-bad-postcode",
            "AA99B9DD", // outward code too long
            "A9",       // no inward code
            "AA9B 9D",  // unit too short
            "GIR 0AA",  // Girobank code breaks the second-position rule
        ]
    }

    /// Inputs that each break exactly one letter-position rule
    pub fn excluded_letters() -> [&'static str; 8] {
        [
            "QA9B9DD", // Q in position 1
            "VA9B9DD", // V in position 1
            "XA9B9DD", // X in position 1
            "AZ9B9DD", // Z in position 2
            "A9L9DD",  // L after A9
            "AA9C9DD", // C after AA9
            "AA9B9DK", // K in the last position
            "AA9B9MD", // M in the penultimate position
        ]
    }
}
