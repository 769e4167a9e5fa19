//! # postcode-core: Postal Code Validation and Formatting
//!
//! Validates postal/ZIP codes against the syntax of their country and
//! renders them in canonical form. This checks syntactic conformance only;
//! it never verifies that a code exists.
//!
//! ## Pipeline
//!
//! raw input + country → [`normalize()`] → [`Registry::resolve`] →
//! [`PostcodeStrategy::attempt`] → canonical string, or "invalid".
//!
//! ## Key Design Principles
//!
//! 1. **One operation per strategy.** Every strategy implements a single
//!    `attempt`; `validate` and `format` are derived from it, so the two can
//!    never disagree about what counts as valid.
//!
//! 2. **Closed country set.** [`Country`] lists every built-in country and
//!    the catalog matches on it exhaustively. Adding a variant forces a
//!    grammar for it.
//!
//! 3. **Grammars are data.** Built-in countries are described by a small
//!    set of composable [`Rule`] building blocks. Only the United Kingdom
//!    needs bespoke code ([`UkStrategy`]).
//!
//! 4. **Errors at one boundary.** Strategies are total functions. Unknown
//!    countries and invalid codes are signalled only by the [`Registry`].
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - Strategies hold no mutable state and are shared across threads.
//! - Overrides are administrative operations; lookups take a read lock only.

pub mod catalog;
pub mod config;
pub mod country;
pub mod error;
pub mod no_postal;
pub mod normalize;
pub mod postal_code;
pub mod registry;
pub mod rule;
pub mod strategy;
pub mod uk;

use std::sync::{Arc, LazyLock};

// Re-export primary types for ergonomic imports.
pub use config::{OverrideSpec, PostcodeConfig};
pub use country::{Country, CountryCode};
pub use error::{ConfigError, PostcodeError};
pub use no_postal::{countries_without_postal_code, fallback_postal_code, has_postal_code};
pub use normalize::{normalize, NormalizedCode};
pub use postal_code::PostalCode;
pub use registry::Registry;
pub use rule::Rule;
pub use strategy::{PatternStrategy, PostcodeStrategy, RuleStrategy};
pub use uk::UkStrategy;

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide registry used by the free functions below.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Whether `code` is a valid postal code for `country`.
///
/// # Errors
///
/// [`PostcodeError::UnknownCountry`] if `country` is not supported.
pub fn validate(code: &str, country: &str) -> Result<bool, PostcodeError> {
    registry().validate(code, country)
}

/// The canonical rendering of `code` for `country`.
///
/// ```
/// assert_eq!(postcode_core::format("123456789", "US").unwrap(), "12345-6789");
/// ```
///
/// # Errors
///
/// [`PostcodeError::UnknownCountry`] or [`PostcodeError::InvalidCode`].
pub fn format(code: &str, country: &str) -> Result<String, PostcodeError> {
    registry().format(code, country)
}

/// The canonical rendering of `code`, or `None` if it is invalid.
///
/// # Errors
///
/// [`PostcodeError::UnknownCountry`] if `country` is not supported.
pub fn format_or_none(code: &str, country: &str) -> Result<Option<String>, PostcodeError> {
    registry().format_or_none(code, country)
}

/// Human-readable description of the format expected for `country`.
///
/// # Errors
///
/// [`PostcodeError::UnknownCountry`] if `country` is not supported.
pub fn hint(country: &str) -> Result<String, PostcodeError> {
    registry().hint(country)
}

/// Whether any strategy exists for `country`.
pub fn is_supported_country(country: &str) -> bool {
    registry().is_supported_country(country)
}

/// Install or replace the override for `country` in the process-wide registry.
///
/// # Errors
///
/// [`PostcodeError::UnknownCountry`] if `country` is not a two-letter code.
pub fn register_override(
    country: &str,
    strategy: Arc<dyn PostcodeStrategy>,
) -> Result<(), PostcodeError> {
    registry().register_override(country, strategy)
}
