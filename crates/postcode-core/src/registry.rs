//! # Strategy Registry
//!
//! Resolves a country code to its [`PostcodeStrategy`] and runs the
//! normalize → resolve → attempt pipeline behind every public operation.
//!
//! ## Resolution
//!
//! 1. An override registered for the country, if any.
//! 2. Otherwise the built-in strategy, if the country is in the catalog.
//! 3. Otherwise nothing: the country is unsupported.
//!
//! The outcome, including "unsupported", is cached per country on first
//! lookup. Registering an override evicts only that country's entry.
//!
//! ## Concurrency
//!
//! Overrides and cache live under one `parking_lot::RwLock`. Lookups that
//! hit the cache take the read lock only. A miss takes the write lock,
//! re-checks, and resolves; registration takes the write lock to install
//! the override and evict the cache entry in one step, so no resolution can
//! cache a strategy that an override has already replaced.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::country::{Country, CountryCode};
use crate::error::PostcodeError;
use crate::normalize::NormalizedCode;
use crate::strategy::{self, PostcodeStrategy};

type SharedStrategy = Arc<dyn PostcodeStrategy>;

#[derive(Debug, Default)]
struct Tables {
    overrides: HashMap<CountryCode, SharedStrategy>,
    cache: HashMap<CountryCode, Option<SharedStrategy>>,
}

/// Country-to-strategy dispatcher with runtime overrides.
///
/// Most callers use the process-wide instance from [`crate::registry()`];
/// separate instances are useful when overrides must not leak between
/// components (and in tests).
#[derive(Debug, Default)]
pub struct Registry {
    tables: RwLock<Tables>,
}

impl Registry {
    /// Create a registry with built-in strategies only.
    pub fn new() -> Self {
        Self::default()
    }

    /// The strategy for `country`, or `None` if the code is malformed or
    /// unsupported.
    pub fn resolve(&self, country: &str) -> Option<SharedStrategy> {
        let code = CountryCode::new(country).ok()?;
        self.resolve_code(&code)
    }

    /// The strategy for an already-validated country code.
    pub fn resolve_code(&self, code: &CountryCode) -> Option<SharedStrategy> {
        if let Some(cached) = self.tables.read().cache.get(code) {
            return cached.clone();
        }

        let mut tables = self.tables.write();
        if let Some(cached) = tables.cache.get(code) {
            return cached.clone();
        }
        let (resolved, source) = match tables.overrides.get(code) {
            Some(strategy) => (Some(Arc::clone(strategy)), "override"),
            None => match code.builtin() {
                Some(country) => (Some(strategy::builtin(country)), "builtin"),
                None => (None, "none"),
            },
        };
        tracing::debug!(country = %code, source, "resolved postcode strategy");
        tables.cache.insert(code.clone(), resolved.clone());
        resolved
    }

    /// Install or replace the override for `country`.
    ///
    /// The override takes precedence over any built-in strategy. Only this
    /// country's cache entry is evicted.
    ///
    /// # Errors
    ///
    /// [`PostcodeError::UnknownCountry`] if `country` is not a two-letter code.
    pub fn register_override(
        &self,
        country: &str,
        strategy: SharedStrategy,
    ) -> Result<(), PostcodeError> {
        let code = CountryCode::new(country)?;
        let mut tables = self.tables.write();
        let replaced = tables.overrides.insert(code.clone(), strategy).is_some();
        let evicted = tables.cache.remove(&code).is_some();
        tracing::info!(
            country = %code,
            replaced,
            builtin = code.builtin().is_some(),
            "registered postcode override"
        );
        tracing::debug!(country = %code, evicted, "evicted cached strategy");
        Ok(())
    }

    /// Whether a resolution outcome for `country` is currently cached.
    pub fn is_cached(&self, country: &str) -> bool {
        CountryCode::new(country)
            .map(|code| self.tables.read().cache.contains_key(&code))
            .unwrap_or(false)
    }

    /// Every country with a strategy: built-ins plus overrides, sorted.
    pub fn countries(&self) -> Vec<CountryCode> {
        let mut all: BTreeSet<CountryCode> =
            Country::ALL.iter().map(|c| CountryCode::from(*c)).collect();
        all.extend(self.tables.read().overrides.keys().cloned());
        all.into_iter().collect()
    }

    /// Countries with a registered override, sorted.
    pub fn overridden(&self) -> Vec<CountryCode> {
        let mut codes: Vec<CountryCode> = self.tables.read().overrides.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Whether any strategy exists for `country`.
    pub fn is_supported_country(&self, country: &str) -> bool {
        self.resolve(country).is_some()
    }

    /// Whether `code` is valid for `country`.
    ///
    /// # Errors
    ///
    /// [`PostcodeError::UnknownCountry`] if no strategy exists. An invalid
    /// code is reported as `Ok(false)`, never as an error.
    pub fn validate(&self, code: &str, country: &str) -> Result<bool, PostcodeError> {
        let (_, strategy) = self.strategy_for(country)?;
        Ok(strategy.validate(&NormalizedCode::new(code)))
    }

    /// The canonical rendering of `code` for `country`.
    ///
    /// # Errors
    ///
    /// [`PostcodeError::UnknownCountry`] if no strategy exists, and
    /// [`PostcodeError::InvalidCode`] if the strategy rejects the code.
    pub fn format(&self, code: &str, country: &str) -> Result<String, PostcodeError> {
        let (country, strategy) = self.strategy_for(country)?;
        strategy
            .attempt(&NormalizedCode::new(code))
            .ok_or_else(|| PostcodeError::InvalidCode {
                code: code.to_string(),
                country,
                hint: strategy.hint().to_string(),
            })
    }

    /// Like [`format`](Self::format), but an invalid code yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`PostcodeError::UnknownCountry`] if no strategy exists.
    pub fn format_or_none(
        &self,
        code: &str,
        country: &str,
    ) -> Result<Option<String>, PostcodeError> {
        let (_, strategy) = self.strategy_for(country)?;
        Ok(strategy.attempt(&NormalizedCode::new(code)))
    }

    /// The format hint for `country`.
    ///
    /// # Errors
    ///
    /// [`PostcodeError::UnknownCountry`] if no strategy exists.
    pub fn hint(&self, country: &str) -> Result<String, PostcodeError> {
        let (_, strategy) = self.strategy_for(country)?;
        Ok(strategy.hint().to_string())
    }

    fn strategy_for(&self, country: &str) -> Result<(CountryCode, SharedStrategy), PostcodeError> {
        let unknown = || PostcodeError::UnknownCountry(country.to_string());
        let code = CountryCode::new(country).map_err(|_| unknown())?;
        let strategy = self.resolve_code(&code).ok_or_else(unknown)?;
        Ok((code, strategy))
    }
}
