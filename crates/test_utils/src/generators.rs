//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating postcode input that
//! respects (or deliberately ignores) the per-position letter rules.

use proptest::prelude::*;
use proptest::sample::select;

/// Letters allowed in the first position
pub const FIRST_LETTERS: &str = "ABCDEFGHIJKLMNOPRSTUWYZ";
/// Letters allowed in the second position
pub const SECOND_LETTERS: &str = "ABCDEFGHKLMNOPQRSTUVWXY";
/// Letters allowed after an `A9` district
pub const A9_SUFFIX_LETTERS: &str = "ABCDEFGHJKPSTUW";
/// Letters allowed after an `AA9` district
pub const AA9_SUFFIX_LETTERS: &str = "ABEHMNPRVWXY";
/// Letters allowed in the unit
pub const UNIT_LETTERS: &str = "ABDEFGHJLNPQRSTUWXYZ";

fn letter_from(allowed: &'static str) -> impl Strategy<Value = char> {
    select(allowed.chars().collect::<Vec<_>>())
}

fn digit_strategy() -> impl Strategy<Value = char> {
    select(('0'..='9').collect::<Vec<_>>())
}

/// Strategy for generating valid outward codes of every shape
pub fn outward_code_strategy() -> impl Strategy<Value = String> {
    let first = || letter_from(FIRST_LETTERS);
    let second = || letter_from(SECOND_LETTERS);
    prop_oneof![
        // A9
        (first(), digit_strategy()).prop_map(|(a, d)| format!("{}{}", a, d)),
        // A99
        (first(), digit_strategy(), digit_strategy())
            .prop_map(|(a, d1, d2)| format!("{}{}{}", a, d1, d2)),
        // A9A
        (first(), digit_strategy(), letter_from(A9_SUFFIX_LETTERS))
            .prop_map(|(a, d, s)| format!("{}{}{}", a, d, s)),
        // AA9
        (first(), second(), digit_strategy())
            .prop_map(|(a1, a2, d)| format!("{}{}{}", a1, a2, d)),
        // AA99
        (first(), second(), digit_strategy(), digit_strategy())
            .prop_map(|(a1, a2, d1, d2)| format!("{}{}{}{}", a1, a2, d1, d2)),
        // AA9A
        (first(), second(), digit_strategy(), letter_from(AA9_SUFFIX_LETTERS))
            .prop_map(|(a1, a2, d, s)| format!("{}{}{}{}", a1, a2, d, s)),
    ]
}

/// Strategy for generating valid inward codes
pub fn inward_code_strategy() -> impl Strategy<Value = String> {
    (digit_strategy(), letter_from(UNIT_LETTERS), letter_from(UNIT_LETTERS))
        .prop_map(|(d, u1, u2)| format!("{}{}{}", d, u1, u2))
}

/// Strategy for generating (outward, inward) pairs of valid standard postcodes
pub fn standard_parts_strategy() -> impl Strategy<Value = (String, String)> {
    (outward_code_strategy(), inward_code_strategy())
}

/// Strategy for generating valid standard postcodes in canonical form
pub fn standard_postcode_strategy() -> impl Strategy<Value = String> {
    standard_parts_strategy().prop_map(|(outward, inward)| format!("{} {}", outward, inward))
}

/// Strategy for generating BFPO numbers (1 to 4 digits, leading zeros allowed)
pub fn bfpo_number_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,4}"
}

/// Strategy for generating valid BFPO codes with or without the space
pub fn bfpo_postcode_strategy() -> impl Strategy<Value = String> {
    (bfpo_number_strategy(), any::<bool>()).prop_map(|(number, spaced)| {
        if spaced {
            format!("BFPO {}", number)
        } else {
            format!("BFPO{}", number)
        }
    })
}

/// Strategy for re-writing `canonical` with random spaces and letter case.
///
/// Every generated variant normalizes back to `canonical` without spaces.
pub fn messy_variant_strategy(canonical: String) -> impl Strategy<Value = String> {
    let len = canonical.chars().count();
    (
        proptest::collection::vec(any::<bool>(), len),
        proptest::collection::vec(0usize..3, len + 1),
    )
        .prop_map(move |(lower, spaces)| {
            let mut out = String::new();
            for (i, c) in canonical.chars().enumerate() {
                out.push_str(&" ".repeat(spaces[i]));
                if lower[i] {
                    out.push(c.to_ascii_lowercase());
                } else {
                    out.push(c);
                }
            }
            out.push_str(&" ".repeat(spaces[len]));
            out
        })
}

/// Strategy for generating arbitrary printable strings, mostly invalid
pub fn arbitrary_input_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,12}",
        "[A-Za-z0-9 ]{0,10}",
        any::<String>(),
    ]
}
