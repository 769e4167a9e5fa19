//! # Error Hierarchy
//!
//! Structured error types for postal code handling, built with `thiserror`.
//!
//! Only two failure kinds exist at the public surface: an unknown country
//! and an invalid code for a known country. Strategies never fail; every
//! error originates at the [`Registry`](crate::Registry) boundary or while
//! applying a configuration.

use thiserror::Error;

use crate::country::CountryCode;

/// Top-level error type for postal code operations.
#[derive(Error, Debug)]
pub enum PostcodeError {
    /// The country code is malformed, or no strategy exists for it.
    #[error("unknown country code: \"{0}\"")]
    UnknownCountry(String),

    /// The country is supported but the code does not match its grammar.
    #[error("invalid postcode \"{code}\" for {country} (expected {hint})")]
    InvalidCode {
        /// The code as supplied by the caller.
        code: String,
        /// The country the code was checked against.
        country: CountryCode,
        /// Human-readable description of the accepted format.
        hint: String,
    },

    /// An override configuration could not be applied.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PostcodeError {
    /// Static error code string for logs and machine-readable output.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCountry(_) => "unknown_country",
            Self::InvalidCode { .. } => "invalid_code",
            Self::Config(_) => "config",
        }
    }
}

/// Errors raised while turning override configuration into strategies.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An override key is not a two-letter country code.
    #[error("malformed country code in overrides: \"{0}\"")]
    MalformedCountry(String),

    /// A pattern override does not compile.
    #[error("invalid pattern for {country}: {source}")]
    InvalidPattern {
        /// The overridden country.
        country: CountryCode,
        /// The regex compilation failure.
        #[source]
        source: regex::Error,
    },

    /// A format template references a capture group the pattern lacks.
    #[error("format template for {country} references unknown group: \"{template}\"")]
    InvalidTemplate {
        /// The overridden country.
        country: CountryCode,
        /// The offending template.
        template: String,
    },

    /// An alias override names a country without a built-in strategy.
    #[error("override for {country} aliases unsupported country \"{target}\"")]
    UnknownAlias {
        /// The overridden country.
        country: CountryCode,
        /// The alias target as written in the configuration.
        target: String,
    },
}
