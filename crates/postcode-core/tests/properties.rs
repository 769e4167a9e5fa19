//! # Catalog-Wide Properties
//!
//! Property tests over every built-in country: formatting is idempotent,
//! separators and letter case never change the outcome, and formatting is
//! total for supported countries.

use postcode_core::{
    format, format_or_none, normalize, registry, validate, Country, NormalizedCode,
};
use proptest::prelude::*;

fn any_country() -> impl Strategy<Value = Country> {
    prop::sample::select(Country::ALL.to_vec())
}

/// Re-render `code` with separators sprinkled in and letters lower-cased
/// according to `noise`.
fn scramble(code: &str, noise: &[u8]) -> String {
    let mut out = String::new();
    for (i, c) in code.chars().enumerate() {
        let n = noise.get(i).copied().unwrap_or(0);
        match n % 4 {
            1 => out.push(' '),
            2 => out.push('-'),
            _ => {}
        }
        if n & 0x10 != 0 {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn every_sample_formats_idempotently() {
    for country in Country::ALL {
        let sample = country.sample_code();
        let once = format(&sample, country.as_str())
            .unwrap_or_else(|e| panic!("{country}: sample {sample:?} rejected: {e}"));
        let twice = format(&once, country.as_str()).unwrap();
        assert_eq!(once, twice, "{country}");
    }
}

proptest! {
    /// Separators and case never change validity or the canonical form.
    #[test]
    fn separator_and_case_insensitive(
        country in any_country(),
        noise in prop::collection::vec(any::<u8>(), 0..12),
    ) {
        let sample = country.sample_code();
        let scrambled = scramble(&sample, &noise);
        prop_assert!(validate(&scrambled, country.as_str()).unwrap());
        prop_assert_eq!(
            format(&scrambled, country.as_str()).unwrap(),
            format(&sample, country.as_str()).unwrap()
        );
    }

    /// Validation of arbitrary input is unaffected by scrambling.
    #[test]
    fn scrambling_preserves_validation(
        country in any_country(),
        raw in "[A-Za-z0-9]{0,9}",
        noise in prop::collection::vec(any::<u8>(), 0..12),
    ) {
        let scrambled = scramble(&raw, &noise);
        prop_assert_eq!(
            validate(&raw, country.as_str()).unwrap(),
            validate(&scrambled, country.as_str()).unwrap()
        );
    }

    /// Strategies are total: invalid input formats to the normalized input.
    #[test]
    fn strategy_format_is_total(country in any_country(), raw in "\\PC{0,12}") {
        let strategy = registry().resolve(country.as_str()).unwrap();
        let code = NormalizedCode::new(&raw);
        let formatted = strategy.format(&code);
        if !strategy.validate(&code) {
            prop_assert_eq!(formatted, normalize(&raw));
        }
        prop_assert!(format_or_none(&raw, country.as_str()).is_ok());
    }

    /// Whatever `format` accepts, it accepts again in canonical form.
    #[test]
    fn format_is_idempotent(country in any_country(), raw in "[A-Z0-9 -]{0,10}") {
        if let Some(once) = format_or_none(&raw, country.as_str()).unwrap() {
            prop_assert_eq!(format(&once, country.as_str()).unwrap(), once);
        }
    }
}
