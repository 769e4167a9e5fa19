//! # End-to-End Pipeline Tests
//!
//! Exercise the public free functions against the process-wide registry:
//! normalization, resolution, validation and formatting together.
//!
//! Overrides registered here use codes no built-in country claims, so they
//! cannot disturb the other tests sharing the global registry.

use std::sync::Arc;

use postcode_core::{
    fallback_postal_code, format, format_or_none, has_postal_code, hint, is_supported_country,
    register_override, validate, Country, CountryCode, NormalizedCode, PatternStrategy,
    PostalCode, PostcodeError, PostcodeStrategy,
};

#[test]
fn us_five_digit() {
    assert!(validate("90210", "US").unwrap());
    assert_eq!(format("90210", "US").unwrap(), "90210");
}

#[test]
fn us_zip_plus_four() {
    assert!(validate("123456789", "US").unwrap());
    assert_eq!(format("123456789", "US").unwrap(), "12345-6789");
    assert_eq!(format("12345-6789", "us").unwrap(), "12345-6789");
}

#[test]
fn gb_westminster() {
    assert!(validate("sw1a1aa", "GB").unwrap());
    assert_eq!(format("sw1a1aa", "GB").unwrap(), "SW1A 1AA");
    assert!(!validate("QV1A1AA", "GB").unwrap());
}

#[test]
fn hong_kong_has_no_postal_code() {
    assert!(!has_postal_code("HK"));
    assert_eq!(fallback_postal_code(), "00000");
    assert!(!is_supported_country("HK"));
}

#[test]
fn unknown_country_is_signalled() {
    let err = format("invalid", "XX").unwrap_err();
    assert!(matches!(err, PostcodeError::UnknownCountry(ref raw) if raw == "XX"));
    assert_eq!(err.error_code(), "unknown_country");
    assert!(validate("12345", "XX").is_err());
    assert!(hint("XX").is_err());
}

#[test]
fn format_or_none_on_wrong_grammar() {
    assert_eq!(format_or_none("abcde", "US").unwrap(), None);
    assert!(format_or_none("abcde", "XX").is_err());
}

#[test]
fn invalid_code_message_includes_hint() {
    let err = format("abcde", "US").unwrap_err();
    assert_eq!(err.error_code(), "invalid_code");
    assert_eq!(
        err.to_string(),
        "invalid postcode \"abcde\" for US (expected 99999 or 99999-9999)"
    );
}

#[test]
fn country_code_is_case_insensitive() {
    assert!(is_supported_country("fr"));
    assert!(is_supported_country("Fr"));
    assert_eq!(hint("de").unwrap(), hint("DE").unwrap());
}

#[test]
fn malformed_country_codes_are_unsupported() {
    for raw in ["", "U", "USA", "U1", " US", "ÜS"] {
        assert!(!is_supported_country(raw), "{raw:?}");
        assert!(matches!(validate("90210", raw), Err(PostcodeError::UnknownCountry(_))));
    }
}

#[test]
fn every_builtin_country_is_supported() {
    for country in Country::ALL {
        assert!(is_supported_country(country.as_str()), "{country}");
        assert!(!hint(country.as_str()).unwrap().is_empty(), "{country}");
    }
}

#[test]
fn pattern_override_on_global_registry() {
    let strategy = PatternStrategy::new(
        CountryCode::new("QX").unwrap(),
        r"^(\d{2})(\d{3})$",
        Some("$1-$2".to_string()),
        "99-999",
    )
    .unwrap();
    assert!(!is_supported_country("QX"));
    register_override("qx", Arc::new(strategy)).unwrap();
    assert!(is_supported_country("QX"));
    assert_eq!(format("12 345", "QX").unwrap(), "12-345");
    assert_eq!(hint("QX").unwrap(), "99-999");
}

#[derive(Debug)]
struct Upper;

impl PostcodeStrategy for Upper {
    fn attempt(&self, code: &NormalizedCode) -> Option<String> {
        (!code.is_empty()).then(|| code.to_string())
    }

    fn hint(&self) -> &str {
        "anything"
    }
}

#[test]
fn custom_strategy_sees_normalized_input() {
    register_override("QY", Arc::new(Upper)).unwrap();
    assert_eq!(format("a-b c", "qy").unwrap(), "ABC");
    assert!(!validate(" - ", "QY").unwrap());
}

#[test]
fn postal_code_value_uses_global_registry() {
    let code = PostalCode::new("ec1a 1bb", "gb").unwrap();
    assert!(code.is_valid());
    assert_eq!(code.to_string(), "EC1A 1BB");
    assert_eq!(code.original(), "ec1a 1bb");
    assert!(PostalCode::new("12345", "XX").is_err());
}

#[test]
fn representative_countries() {
    let cases = [
        ("CA", "k1a0b1", "K1A 0B1"),
        ("NL", "1234ab", "1234 AB"),
        ("BR", "01310100", "01310-100"),
        ("JP", "1000001", "100-0001"),
        ("PL", "00950", "00-950"),
        ("SE", "11455", "114 55"),
        ("DE", "10115", "10115"),
        ("FR", "75001", "75001"),
    ];
    for (country, raw, expected) in cases {
        assert_eq!(format(raw, country).unwrap(), expected, "{country} {raw}");
    }
}
