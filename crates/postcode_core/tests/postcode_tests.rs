//! Comprehensive unit tests for the Postcode value type
//!
//! Tests cover splitting into outward/inward codes, the area/district
//! boundary, sector and unit, Northern Ireland detection and BFPO codes.

use postcode_core::{Postcode, PostcodeError, PostcodeKind};
use std::collections::HashSet;
use test_utils::{
    assert_postcode_parts, assert_rejected, assert_split, assert_structure_not_applicable,
    init_test_tracing, BfpoFixtures, InvalidFixtures, Spacing, StandardFixtures,
    TestPostcodeBuilder,
};

mod splitting {
    use super::*;

    #[test]
    fn test_inward_code_is_last_three_characters() {
        assert_split("AA999DD", "AA99", "9DD");
    }

    #[test]
    fn test_split_ignores_space() {
        assert_split("AA99 9DD", "AA99", "9DD");
        assert_split("AA9B 9DD", "AA9B", "9DD");
    }

    #[test]
    fn test_split_shortest_shape() {
        assert_split("A99DD", "A9", "9DD");
    }

    #[test]
    fn test_split_normalizes_case_and_spacing() {
        let builder = TestPostcodeBuilder::new()
            .area("ec")
            .district("1a")
            .sector('1')
            .unit("bb")
            .spacing(Spacing::Everywhere)
            .lowercase();
        assert_split(&builder.build(), &builder.expected_outward(), &builder.expected_inward());
    }

    #[test]
    fn test_full_postcode_inserts_single_space() {
        let postcode = Postcode::parse("AA9B9DD").unwrap();
        assert_eq!(postcode.full_postcode(), "AA9B 9DD");
    }

    #[test]
    fn test_full_postcode_collapses_extra_spaces() {
        let postcode = Postcode::parse("  AA9B    9DD ").unwrap();
        assert_eq!(postcode.full_postcode(), "AA9B 9DD");
    }

    #[test]
    fn test_standard_kind() {
        let postcode = Postcode::parse("M1 1AE").unwrap();
        assert_eq!(postcode.kind(), PostcodeKind::Standard);
        assert!(!postcode.is_bfpo());
    }
}

mod derivations {
    use super::*;

    #[test]
    fn test_two_letter_area() {
        assert_postcode_parts(&StandardFixtures::two_letter_area(), "AA", "9B", "9", "DD");
    }

    #[test]
    fn test_one_letter_area_with_lettered_district() {
        let postcode = Postcode::parse("A9B 9DD").unwrap();
        assert_eq!(postcode.area(), Some("A"));
        assert_eq!(postcode.district(), Some("9B"));
    }

    #[test]
    fn test_one_letter_area_with_numeric_district() {
        assert_postcode_parts(&StandardFixtures::one_letter_area(), "A", "9", "9", "DD");
    }

    #[test]
    fn test_two_digit_districts() {
        assert_postcode_parts(&Postcode::parse("A999DD").unwrap(), "A", "99", "9", "DD");
        assert_postcode_parts(&Postcode::parse("AA999DD").unwrap(), "AA", "99", "9", "DD");
    }

    #[test]
    fn test_sector_zero() {
        let postcode = Postcode::parse("AA9B 0DD").unwrap();
        assert_eq!(postcode.sector(), Some("0"));
        assert_eq!(postcode.unit(), Some("DD"));
    }

    #[test]
    fn test_well_known_postcodes() {
        assert_postcode_parts(&Postcode::parse("SW1A 1AA").unwrap(), "SW", "1A", "1", "AA");
        assert_postcode_parts(&Postcode::parse("W1A 0AX").unwrap(), "W", "1A", "0", "AX");
        assert_postcode_parts(&Postcode::parse("DN55 1PT").unwrap(), "DN", "55", "1", "PT");
        assert_postcode_parts(&Postcode::parse("b33 8th").unwrap(), "B", "33", "8", "TH");
    }

    #[test]
    fn test_area_and_district_rebuild_outward_code() {
        for raw in StandardFixtures::well_known() {
            let postcode = Postcode::parse(raw).unwrap();
            let rebuilt = format!("{}{}", postcode.area().unwrap(), postcode.district().unwrap());
            assert_eq!(rebuilt, postcode.outward_code());
        }
    }
}

mod northern_ireland {
    use super::*;

    #[test]
    fn test_bt_area_is_northern_ireland() {
        assert!(StandardFixtures::northern_ireland().is_northern_ireland());
    }

    #[test]
    fn test_other_area_is_not_northern_ireland() {
        assert!(!StandardFixtures::two_letter_area().is_northern_ireland());
    }

    #[test]
    fn test_single_letter_b_area_is_not_northern_ireland() {
        assert!(!Postcode::parse("B33 8TH").unwrap().is_northern_ireland());
    }

    #[test]
    fn test_lowercase_bt_is_northern_ireland() {
        assert!(Postcode::parse("bt7 1nn").unwrap().is_northern_ireland());
    }
}

mod bfpo {
    use super::*;

    #[test]
    fn test_bfpo_is_flagged() {
        assert!(BfpoFixtures::bfpo_123().is_bfpo());
        assert_eq!(BfpoFixtures::bfpo_123().kind(), PostcodeKind::Bfpo);
    }

    #[test]
    fn test_bfpo_outward_code_is_marker() {
        assert_eq!(BfpoFixtures::bfpo_123().outward_code(), "BFPO");
    }

    #[test]
    fn test_bfpo_inward_code_is_number() {
        assert_eq!(BfpoFixtures::bfpo_123().inward_code(), "123");
        assert_eq!(BfpoFixtures::bfpo_123().bfpo_number(), Some("123"));
    }

    #[test]
    fn test_bfpo_has_no_structure() {
        assert_structure_not_applicable(&BfpoFixtures::bfpo_123());
    }

    #[test]
    fn test_bfpo_full_postcode_reinserts_space() {
        let postcode = Postcode::parse("BFPO123").unwrap();
        assert_eq!(postcode.full_postcode(), "BFPO 123");
    }

    #[test]
    fn test_bfpo_is_not_northern_ireland() {
        assert!(!Postcode::parse("BFPO123").unwrap().is_northern_ireland());
    }

    #[test]
    fn test_bfpo_keeps_leading_zeros() {
        let postcode = Postcode::parse("bfpo 0042").unwrap();
        assert_eq!(postcode.inward_code(), "0042");
        assert_eq!(postcode.full_postcode(), "BFPO 0042");
    }
}

mod construction {
    use super::*;

    #[test]
    fn test_digits_only_is_rejected() {
        init_test_tracing();
        assert_rejected("12345678");
    }

    #[test]
    fn test_error_carries_raw_input() {
        init_test_tracing();
        assert_rejected("bad-bad-postcode");
    }

    #[test]
    fn test_error_keeps_original_spacing_and_case() {
        let error = Postcode::parse(" qa9b 9dd").unwrap_err();
        assert_eq!(error.input(), " qa9b 9dd");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(
            Postcode::parse(""),
            Err(PostcodeError::InvalidFormat(String::new()))
        );
    }

    #[test]
    fn test_all_malformed_fixtures_are_rejected() {
        for raw in InvalidFixtures::malformed() {
            assert_rejected(raw);
        }
    }

    #[test]
    fn test_from_str_and_try_from_agree() {
        let parsed: Postcode = "sw1a1aa".parse().unwrap();
        let from_str_ref = Postcode::try_from("SW1A 1AA").unwrap();
        let from_string = Postcode::try_from("sw1a 1aa".to_string()).unwrap();
        assert_eq!(parsed, from_str_ref);
        assert_eq!(parsed, from_string);
    }

    #[test]
    fn test_into_string_is_canonical() {
        let text: String = Postcode::parse("a9b9dd").unwrap().into();
        assert_eq!(text, "A9B 9DD");
    }
}

mod value_semantics {
    use super::*;

    #[test]
    fn test_spacing_and_case_variants_hash_equal() {
        let set: HashSet<Postcode> = ["SW1A 1AA", "sw1a1aa", " Sw1A  1aA "]
            .into_iter()
            .map(|raw| Postcode::parse(raw).unwrap())
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_bfpo_variants_are_equal() {
        assert_eq!(
            Postcode::parse("BFPO123").unwrap(),
            Postcode::parse("bfpo 123").unwrap()
        );
    }

    #[test]
    fn test_ordering_is_stable() {
        let mut postcodes: Vec<Postcode> = ["M1 1AE", "B33 8TH", "BFPO 1", "AA9B 9DD"]
            .into_iter()
            .map(|raw| Postcode::parse(raw).unwrap())
            .collect();
        postcodes.sort();
        let first = postcodes.first().unwrap();
        assert_eq!(first.full_postcode(), "AA9B 9DD");
        assert!(postcodes.last().unwrap().is_bfpo());
    }
}
