//! # Value Object Behaviour — Cross-Type Integration Tests
//!
//! Exercises the public surface of every single value object through the
//! shared façade: sentinel exclusivity, ordering, equality over the
//! normalized payload, country gating of postal codes and culture-aware
//! percentage parsing.

use std::cmp::Ordering;
use std::fmt::Debug;

use svo_core::prelude::*;
use svo_core::{iban, ArgumentError, FormatError, RejectReason, SvoError};

/// Sentinel rules that hold for every type, given one valid input.
fn assert_sentinels<T: SingleValueObject + Debug>(valid: &str) {
    let value = T::parse(valid).unwrap();
    assert_ne!(T::EMPTY, T::UNKNOWN);
    assert_ne!(T::EMPTY, value);
    assert_ne!(T::UNKNOWN, value);

    assert!(T::EMPTY.is_empty());
    assert!(!T::UNKNOWN.is_empty());
    assert!(T::UNKNOWN.is_unknown());
    assert!(!T::EMPTY.is_unknown());
    assert!(T::EMPTY.is_empty_or_unknown());
    assert!(T::UNKNOWN.is_empty_or_unknown());
    assert!(!value.is_empty_or_unknown());

    assert_eq!(T::default(), T::EMPTY);
    assert_eq!(T::parse("").unwrap(), T::EMPTY);
    assert_eq!(T::parse("   ").unwrap(), T::EMPTY);
    assert_eq!(T::parse("?").unwrap(), T::UNKNOWN);
    assert_eq!(T::EMPTY.to_string(), "");
    assert_eq!(T::UNKNOWN.to_string(), "?");

    assert!(T::EMPTY < T::UNKNOWN);
    assert!(T::UNKNOWN < value);
}

#[test]
fn sentinel_exclusivity_for_every_type() {
    assert_sentinels::<Iban>("NL20INGB0001234567");
    assert_sentinels::<Bic>("AEGONL2UXXX");
    assert_sentinels::<Country>("NL");
    assert_sentinels::<PostalCode>("1234AB");
    assert_sentinels::<Percentage>("17.51%");
    assert_sentinels::<HouseNumber>("42");
}

#[test]
fn try_parse_defaults_to_empty() {
    assert_eq!(Iban::try_parse("NL20INGB0001234568"), None);
    assert_eq!(
        Iban::try_parse("NL20INGB0001234568").unwrap_or_default(),
        Iban::EMPTY
    );
    assert!(Iban::try_parse("NL20INGB0001234567").is_some());
}

#[test]
fn blank_is_not_valid_but_unknown_is() {
    assert!(!Bic::is_valid(""));
    assert!(!Bic::is_valid("  "));
    assert!(Bic::is_valid("?"));
}

#[test]
fn iban_checksum() {
    assert!(Iban::is_valid("NL20INGB0001234567"));
    assert!(Iban::is_valid("NL20 INGB 0001 2345 67"));
    assert!(!Iban::is_valid("NL20INGB0001234568"));
}

#[test]
fn iban_adjacent_transpositions_are_detected() {
    let valid: Vec<char> = "NL20INGB0001234567".chars().collect();
    let mut checked = 0;
    for i in 0..valid.len() - 1 {
        let (a, b) = (valid[i], valid[i + 1]);
        if !a.is_ascii_digit() || !b.is_ascii_digit() || a == b {
            continue;
        }
        let mut swapped = valid.clone();
        swapped.swap(i, i + 1);
        let swapped: String = swapped.into_iter().collect();
        assert!(!Iban::is_valid(&swapped), "{swapped} must be rejected");
        checked += 1;
    }
    assert_eq!(checked, 8);
}

#[test]
fn iban_unknown_country_short_circuits() {
    assert_eq!(
        iban::verdict("QQ20INGB0001234567").reason,
        Some(RejectReason::UnknownCountry)
    );
    assert_eq!(
        iban::verdict("US20INGB0001234567").reason,
        Some(RejectReason::UnknownCountry)
    );
}

#[test]
fn bic_equality_is_over_full_string() {
    assert_eq!(Bic::parse("AEGONL2UXXX").unwrap(), Bic::parse("AEgonL2Uxxx").unwrap());
    assert_ne!(Bic::parse("AEGONL2UXXX").unwrap(), Bic::parse("AEGONL2U").unwrap());
}

#[test]
fn postal_code_country_gating() {
    let code = PostalCode::parse("H0H0H0").unwrap();
    assert!(code.is_valid_for(&Country::CA));
    assert!(!code.is_valid_for(&Country::BE));
    assert!(PostalCode::is_valid("1234AB"));
}

#[test]
fn postal_code_for_country_without_postal_codes_is_invalid() {
    assert!(!Country::AO.has_postal_codes());
    let code = PostalCode::parse("1000").unwrap();
    assert!(PostalCode::is_valid("1000"));
    assert!(!code.is_valid_for(&Country::AO));
    assert!(!code.is_valid_for(&Country::UNKNOWN));
}

#[test]
fn postal_code_formatting() {
    let ca = PostalCode::parse("h0h0h0").unwrap();
    assert_eq!(ca.format_for(&Country::CA), "H0H 0H0");
    let ad = PostalCode::parse("765").unwrap();
    assert_eq!(ad.format_for(&Country::AD), "AD-765");
    let de = PostalCode::parse("10117").unwrap();
    assert_eq!(de.format_for(&Country::DE), "10117");
}

#[test]
fn every_country_example_is_valid() {
    for country in Country::all() {
        if let Some(example) = country.postal_code_example() {
            let code = PostalCode::parse(example).unwrap();
            assert!(code.is_valid_for(&country), "{example} for {country}");
        } else {
            assert!(!country.has_postal_codes());
        }
    }
}

#[test]
fn percentage_markers_across_cultures() {
    let dutch = Percentage::parse_with("17,51%", &Culture::NL_NL).unwrap();
    let french = Percentage::parse_with("%17,51", &Culture::FR_FR).unwrap();
    assert_eq!(dutch, french);
    assert_eq!(dutch.fraction(), Some(rust_decimal::Decimal::new(1751, 4)));
    assert!(Percentage::parse("2%2").is_err());
}

#[test]
fn sorting_places_empty_first() {
    let mut codes = vec![
        PostalCode::parse("9999").unwrap(),
        PostalCode::EMPTY,
        PostalCode::parse("1000").unwrap(),
        PostalCode::EMPTY,
        PostalCode::parse("5000").unwrap(),
    ];
    codes.sort();
    let rendered: Vec<String> = codes.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["", "", "1000", "5000", "9999"]);

    let mut numbers = vec![
        HouseNumber::create(10).unwrap(),
        HouseNumber::EMPTY,
        HouseNumber::create(9).unwrap(),
    ];
    numbers.sort();
    let rendered: Vec<String> = numbers.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["", "9", "10"]);
}

#[test]
fn compare_with_foreign_type_is_an_argument_error() {
    let nl = Country::NL;
    assert_eq!(nl.compare_any(&Country::BE), Ok(Ordering::Greater));
    let err = nl.compare_any(&"NL").unwrap_err();
    assert_eq!(err, ArgumentError { kind: svo_core::SvoKind::Country });
    assert_eq!(err.to_string(), "Argument must be a country.");
    assert!(nl.compare_any(&Bic::EMPTY).is_err());
}

#[test]
fn format_error_carries_input() {
    let err: FormatError = "NL20INGB0001234568".parse::<Iban>().unwrap_err();
    assert_eq!(err.input, "NL20INGB0001234568");
    assert_eq!(err.to_string(), "Not a valid IBAN: \"NL20INGB0001234568\"");
    let unified: SvoError = err.into();
    assert!(matches!(unified, SvoError::Format(_)));
}

#[test]
fn range_error_from_numeric_create() {
    let err = HouseNumber::create(0).unwrap_err();
    let unified: SvoError = err.into();
    assert!(matches!(unified, SvoError::Range(_)));
    assert!(Percentage::create(f64::NAN).is_err());
}

#[test]
fn unknown_phrase_is_culture_specific() {
    assert_eq!(
        Country::parse_with("não sabe", &Culture::PT_PT).unwrap(),
        Country::UNKNOWN
    );
    assert!(Country::parse_with("não sabe", &Culture::INVARIANT).is_err());
}

#[test]
fn json_sentinels() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Account {
        iban: Iban,
        bic: Bic,
        house_number: HouseNumber,
    }

    let account = Account {
        iban: Iban::parse("NL20INGB0001234567").unwrap(),
        bic: Bic::UNKNOWN,
        house_number: HouseNumber::EMPTY,
    };
    let json = serde_json::to_value(&account).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "iban": "NL20INGB0001234567",
            "bic": "?",
            "house_number": null,
        })
    );
    let back: Account = serde_json::from_value(json).unwrap();
    assert_eq!(back, account);
}

#[test]
fn json_rejects_numbers_for_string_types() {
    let err = serde_json::from_str::<Iban>("12").unwrap_err().to_string();
    assert!(err.contains("JSON deserialization from integer is not supported for IBAN"), "{err}");
    let err = serde_json::from_str::<PostalCode>("1.5").unwrap_err().to_string();
    assert!(err.contains("from number"), "{err}");
    assert!(serde_json::from_str::<HouseNumber>("12").is_ok());
    assert!(serde_json::from_str::<Percentage>("0.5").is_ok());
}
