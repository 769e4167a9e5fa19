//! # Single-Code Commands
//!
//! `validate`, `format`, `hint` and `has-postal-code`: each answers one
//! question about one code or country.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use postcode_core::{fallback_postal_code, has_postal_code, PostalCode, PostcodeError, Registry};

use crate::{EXIT_NEGATIVE, EXIT_OK};

/// Arguments for `postcode validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// The postal code to check.
    pub code: String,

    /// ISO 3166-1 alpha-2 country code (case-insensitive).
    #[arg(short, long)]
    pub country: String,

    /// Print the full result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `postcode format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// The postal code to format.
    pub code: String,

    /// ISO 3166-1 alpha-2 country code (case-insensitive).
    #[arg(short, long)]
    pub country: String,

    /// Print nothing and succeed when the code is invalid.
    #[arg(long)]
    pub or_none: bool,
}

/// Arguments for `postcode hint`.
#[derive(Args, Debug)]
pub struct HintArgs {
    /// ISO 3166-1 alpha-2 country code (case-insensitive).
    pub country: String,
}

/// Arguments for `postcode has-postal-code`.
#[derive(Args, Debug)]
pub struct HasPostalCodeArgs {
    /// ISO 3166-1 alpha-2 country code (case-insensitive).
    pub country: String,
}

/// Execute `postcode validate`.
pub fn run_validate(args: &ValidateArgs, registry: &Registry, out: &mut impl Write) -> Result<u8> {
    let code = PostalCode::with_registry(registry, args.code.as_str(), &args.country)?;
    let valid = code.is_valid();
    if args.json {
        serde_json::to_writer(&mut *out, &code)?;
        writeln!(out)?;
    } else if valid {
        writeln!(out, "valid")?;
    } else {
        writeln!(out, "invalid (expected {})", code.hint())?;
    }
    tracing::debug!(country = %code.country(), valid, "validated postcode");
    Ok(if valid { EXIT_OK } else { EXIT_NEGATIVE })
}

/// Execute `postcode format`.
pub fn run_format(args: &FormatArgs, registry: &Registry, out: &mut impl Write) -> Result<u8> {
    match registry.format(&args.code, &args.country) {
        Ok(formatted) => {
            writeln!(out, "{formatted}")?;
            Ok(EXIT_OK)
        }
        Err(PostcodeError::InvalidCode { .. }) if args.or_none => Ok(EXIT_OK),
        Err(err @ PostcodeError::InvalidCode { .. }) => {
            writeln!(out, "{err}")?;
            Ok(EXIT_NEGATIVE)
        }
        Err(err) => Err(err.into()),
    }
}

/// Execute `postcode hint`.
pub fn run_hint(args: &HintArgs, registry: &Registry, out: &mut impl Write) -> Result<u8> {
    writeln!(out, "{}", registry.hint(&args.country)?)?;
    Ok(EXIT_OK)
}

/// Execute `postcode has-postal-code`.
pub fn run_has_postal_code(args: &HasPostalCodeArgs, out: &mut impl Write) -> Result<u8> {
    if has_postal_code(&args.country) {
        writeln!(out, "yes")?;
        Ok(EXIT_OK)
    } else {
        writeln!(out, "no (fallback: {})", fallback_postal_code())?;
        Ok(EXIT_NEGATIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use postcode_core::{CountryCode, PatternStrategy};

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    fn validate_args(code: &str, country: &str) -> ValidateArgs {
        ValidateArgs {
            code: code.into(),
            country: country.into(),
            json: false,
        }
    }

    fn format_args(code: &str, country: &str, or_none: bool) -> FormatArgs {
        FormatArgs {
            code: code.into(),
            country: country.into(),
            or_none,
        }
    }

    #[test]
    fn validate_valid_code() {
        let mut out = Vec::new();
        let code =
            run_validate(&validate_args("sw1a1aa", "gb"), &Registry::new(), &mut out).unwrap();
        assert_eq!(code, EXIT_OK);
        assert_eq!(output(out), "valid\n");
    }

    #[test]
    fn validate_invalid_code_shows_hint() {
        let mut out = Vec::new();
        let code = run_validate(&validate_args("abcde", "US"), &Registry::new(), &mut out).unwrap();
        assert_eq!(code, EXIT_NEGATIVE);
        assert_eq!(output(out), "invalid (expected 99999 or 99999-9999)\n");
    }

    #[test]
    fn validate_unknown_country_is_an_error() {
        let mut out = Vec::new();
        let err =
            run_validate(&validate_args("12345", "XX"), &Registry::new(), &mut out).unwrap_err();
        assert!(err.to_string().contains("unknown country code"));
        assert!(out.is_empty());
    }

    #[test]
    fn validate_json_output() {
        let mut args = validate_args("123456789", "us");
        args.json = true;
        let mut out = Vec::new();
        run_validate(&args, &Registry::new(), &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["country"], "US");
        assert_eq!(json["valid"], true);
        assert_eq!(json["formatted"], "12345-6789");
    }

    #[test]
    fn format_valid_code() {
        let mut out = Vec::new();
        let code =
            run_format(&format_args("123456789", "US", false), &Registry::new(), &mut out).unwrap();
        assert_eq!(code, EXIT_OK);
        assert_eq!(output(out), "12345-6789\n");
    }

    #[test]
    fn format_invalid_code() {
        let mut out = Vec::new();
        let code =
            run_format(&format_args("abcde", "US", false), &Registry::new(), &mut out).unwrap();
        assert_eq!(code, EXIT_NEGATIVE);
        assert!(output(out).starts_with("invalid postcode \"abcde\" for US"));
    }

    #[test]
    fn format_or_none_prints_nothing() {
        let mut out = Vec::new();
        let code =
            run_format(&format_args("abcde", "US", true), &Registry::new(), &mut out).unwrap();
        assert_eq!(code, EXIT_OK);
        assert!(out.is_empty());
    }

    #[test]
    fn format_unknown_country_is_an_error_even_with_or_none() {
        let mut out = Vec::new();
        let result = run_format(&format_args("invalid", "XX", true), &Registry::new(), &mut out);
        assert!(result.is_err());
    }

    #[test]
    fn format_uses_overrides() {
        let registry = Registry::new();
        let strategy = PatternStrategy::new(
            CountryCode::new("XK").unwrap(),
            r"^(\d{2})(\d{3})$",
            Some("$1.$2".into()),
            "99.999",
        )
        .unwrap();
        registry.register_override("XK", Arc::new(strategy)).unwrap();
        let mut out = Vec::new();
        run_format(&format_args("10000", "xk", false), &registry, &mut out).unwrap();
        assert_eq!(output(out), "10.000\n");
    }

    #[test]
    fn hint_for_country() {
        let mut out = Vec::new();
        let args = HintArgs { country: "gb".into() };
        run_hint(&args, &Registry::new(), &mut out).unwrap();
        assert_eq!(
            output(out),
            "A9 9AA, A9A 9AA, A99 9AA, AA9 9AA, AA9A 9AA or AA99 9AA\n"
        );
        let args = HintArgs { country: "XX".into() };
        assert!(run_hint(&args, &Registry::new(), &mut Vec::new()).is_err());
    }

    #[test]
    fn has_postal_code_answers() {
        let mut out = Vec::new();
        let code =
            run_has_postal_code(&HasPostalCodeArgs { country: "hk".into() }, &mut out).unwrap();
        assert_eq!(code, EXIT_NEGATIVE);
        assert_eq!(output(out), "no (fallback: 00000)\n");

        let mut out = Vec::new();
        let code =
            run_has_postal_code(&HasPostalCodeArgs { country: "US".into() }, &mut out).unwrap();
        assert_eq!(code, EXIT_OK);
        assert_eq!(output(out), "yes\n");
    }
}
