//! # Postal Code Value
//!
//! [`PostalCode`] binds one input string to one country. The country's
//! strategy is resolved at construction, so an unknown country fails early;
//! the strategy itself runs at most once per value, on first use.

use std::sync::{Arc, OnceLock};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::country::CountryCode;
use crate::error::PostcodeError;
use crate::normalize::NormalizedCode;
use crate::registry::Registry;
use crate::strategy::PostcodeStrategy;

/// A postal code bound to a country.
///
/// ```
/// use postcode_core::PostalCode;
///
/// let code = PostalCode::new("sw1a1aa", "gb").unwrap();
/// assert!(code.is_valid());
/// assert_eq!(code.format().unwrap(), "SW1A 1AA");
/// assert_eq!(code.original(), "sw1a1aa");
/// assert_eq!(code.normalized(), "SW1A1AA");
/// ```
#[derive(Debug)]
pub struct PostalCode {
    original: String,
    normalized: NormalizedCode,
    country: CountryCode,
    strategy: Arc<dyn PostcodeStrategy>,
    formatted: OnceLock<Option<String>>,
}

impl PostalCode {
    /// Bind `code` to `country` using the process-wide registry.
    ///
    /// # Errors
    ///
    /// [`PostcodeError::UnknownCountry`] if no strategy exists for `country`.
    pub fn new(code: impl Into<String>, country: &str) -> Result<Self, PostcodeError> {
        Self::with_registry(crate::registry(), code, country)
    }

    /// Bind `code` to `country` using a specific registry.
    ///
    /// # Errors
    ///
    /// [`PostcodeError::UnknownCountry`] if no strategy exists for `country`.
    pub fn with_registry(
        registry: &Registry,
        code: impl Into<String>,
        country: &str,
    ) -> Result<Self, PostcodeError> {
        let unknown = || PostcodeError::UnknownCountry(country.to_string());
        let country = CountryCode::new(country).map_err(|_| unknown())?;
        let strategy = registry.resolve_code(&country).ok_or_else(unknown)?;
        let original = code.into();
        Ok(Self {
            normalized: NormalizedCode::new(&original),
            original,
            country,
            strategy,
            formatted: OnceLock::new(),
        })
    }

    /// The input exactly as supplied.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The input with spaces and hyphens removed, upper-cased.
    pub fn normalized(&self) -> &str {
        self.normalized.as_str()
    }

    pub fn country(&self) -> &CountryCode {
        &self.country
    }

    fn attempt(&self) -> Option<&str> {
        self.formatted
            .get_or_init(|| self.strategy.attempt(&self.normalized))
            .as_deref()
    }

    /// Whether the code is valid for its country.
    pub fn is_valid(&self) -> bool {
        self.attempt().is_some()
    }

    /// The canonical rendering.
    ///
    /// # Errors
    ///
    /// [`PostcodeError::InvalidCode`] if the code is invalid for its country.
    pub fn format(&self) -> Result<&str, PostcodeError> {
        self.attempt().ok_or_else(|| PostcodeError::InvalidCode {
            code: self.original.clone(),
            country: self.country.clone(),
            hint: self.strategy.hint().to_string(),
        })
    }

    /// The canonical rendering, or `None` if the code is invalid.
    pub fn format_or_none(&self) -> Option<&str> {
        self.attempt()
    }

    /// Format hint for the bound country.
    pub fn hint(&self) -> &str {
        self.strategy.hint()
    }
}

/// Shows the canonical rendering, or the normalized input if invalid.
impl std::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.attempt().unwrap_or(self.normalized()))
    }
}

impl Serialize for PostalCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PostalCode", 5)?;
        state.serialize_field("original", &self.original)?;
        state.serialize_field("normalized", &self.normalized)?;
        state.serialize_field("country", &self.country)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("formatted", &self.attempt())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    impl PostcodeStrategy for Counting {
        fn attempt(&self, code: &NormalizedCode) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            code.as_str().starts_with('K').then(|| code.as_str().to_lowercase())
        }

        fn hint(&self) -> &str {
            "K..."
        }
    }

    fn counting_registry() -> (Registry, Arc<Counting>) {
        let registry = Registry::new();
        let counting = Arc::new(Counting::default());
        registry.register_override("XK", counting.clone()).unwrap();
        (registry, counting)
    }

    #[test]
    fn strategy_runs_once_per_value() {
        let (registry, counting) = counting_registry();
        let code = PostalCode::with_registry(&registry, "k-1", "xk").unwrap();
        assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
        for _ in 0..3 {
            assert!(code.is_valid());
            assert_eq!(code.format().unwrap(), "k1");
            assert_eq!(code.format_or_none(), Some("k1"));
        }
        assert_eq!(code.to_string(), "k1");
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn invalid_result_is_memoized_too() {
        let (registry, counting) = counting_registry();
        let code = PostalCode::with_registry(&registry, "a 1", "XK").unwrap();
        assert!(!code.is_valid());
        assert!(code.format().is_err());
        assert_eq!(code.format_or_none(), None);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn accessors_do_not_run_the_strategy() {
        let (registry, counting) = counting_registry();
        let code = PostalCode::with_registry(&registry, "k 1-2", "xk").unwrap();
        assert_eq!(code.original(), "k 1-2");
        assert_eq!(code.normalized(), "K12");
        assert_eq!(code.country().as_str(), "XK");
        assert_eq!(code.hint(), "K...");
        assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unknown_country_fails_at_construction() {
        let registry = Registry::new();
        let err = PostalCode::with_registry(&registry, "12345", "XX").unwrap_err();
        assert!(matches!(err, PostcodeError::UnknownCountry(raw) if raw == "XX"));
        let err = PostalCode::with_registry(&registry, "12345", "USA").unwrap_err();
        assert!(matches!(err, PostcodeError::UnknownCountry(raw) if raw == "USA"));
    }

    #[test]
    fn display_falls_back_to_normalized() {
        let registry = Registry::new();
        let code = PostalCode::with_registry(&registry, "ab-cde", "US").unwrap();
        assert_eq!(code.to_string(), "ABCDE");
        let code = PostalCode::with_registry(&registry, "123456789", "us").unwrap();
        assert_eq!(code.to_string(), "12345-6789");
    }

    #[test]
    fn invalid_code_error_carries_original_and_hint() {
        let registry = Registry::new();
        let code = PostalCode::with_registry(&registry, "abcde", "US").unwrap();
        match code.format() {
            Err(PostcodeError::InvalidCode { code, country, hint }) => {
                assert_eq!(code, "abcde");
                assert_eq!(country.as_str(), "US");
                assert_eq!(hint, "99999 or 99999-9999");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn serializes_with_outcome() {
        let registry = Registry::new();
        let code = PostalCode::with_registry(&registry, "sw1a 1aa", "gb").unwrap();
        let json = serde_json::to_value(&code).unwrap();
        assert_eq!(json["original"], "sw1a 1aa");
        assert_eq!(json["normalized"], "SW1A1AA");
        assert_eq!(json["country"], "GB");
        assert_eq!(json["valid"], true);
        assert_eq!(json["formatted"], "SW1A 1AA");

        let code = PostalCode::with_registry(&registry, "nope", "gb").unwrap();
        let json = serde_json::to_value(&code).unwrap();
        assert_eq!(json["valid"], false);
        assert!(json["formatted"].is_null());
    }
}
