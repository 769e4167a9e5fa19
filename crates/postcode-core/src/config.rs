//! # Override Configuration
//!
//! Declarative overrides, deserialized from any serde format (the CLI reads
//! YAML):
//!
//! ```yaml
//! overrides:
//!   XK:
//!     pattern: '^(\d{2})(\d{3})$'
//!     format: '$1$2'
//!     hint: '99999'
//!   gb:
//!     alias: JE
//! ```
//!
//! A `pattern` entry becomes a [`PatternStrategy`]. An `alias` entry reuses
//! another country's built-in strategy. Country keys are case-insensitive.
//! [`PostcodeConfig::apply`] compiles every entry before registering any, so
//! a bad entry leaves the registry untouched.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::country::CountryCode;
use crate::error::{ConfigError, PostcodeError};
use crate::registry::Registry;
use crate::strategy::{self, PatternStrategy, PostcodeStrategy};

/// Top-level override configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostcodeConfig {
    /// Overrides keyed by country code.
    #[serde(default)]
    pub overrides: BTreeMap<String, OverrideSpec>,
}

/// A single country override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideSpec {
    /// Regex-driven strategy with an optional output template.
    Pattern {
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
        #[serde(default)]
        hint: String,
    },
    /// Reuse the built-in strategy of another country.
    Alias { alias: String },
}

impl PostcodeConfig {
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Compile every override into a strategy, keyed by country.
    ///
    /// # Errors
    ///
    /// The first [`ConfigError`] encountered, in country-key order.
    pub fn compile(&self) -> Result<Vec<(CountryCode, Arc<dyn PostcodeStrategy>)>, ConfigError> {
        self.overrides
            .iter()
            .map(|(key, spec)| -> Result<_, ConfigError> {
                let country = CountryCode::new(key)
                    .map_err(|_| ConfigError::MalformedCountry(key.clone()))?;
                let strategy = spec.compile(&country)?;
                Ok((country, strategy))
            })
            .collect()
    }

    /// Register every override with `registry`.
    ///
    /// Nothing is registered unless every entry compiles.
    ///
    /// # Errors
    ///
    /// [`PostcodeError::Config`] if any entry is invalid.
    pub fn apply(&self, registry: &Registry) -> Result<usize, PostcodeError> {
        let compiled = self.compile()?;
        let count = compiled.len();
        for (country, strategy) in compiled {
            if country.builtin().is_some() {
                tracing::warn!(
                    country = %country,
                    "configured override replaces built-in strategy"
                );
            }
            registry.register_override(country.as_str(), strategy)?;
        }
        Ok(count)
    }
}

impl OverrideSpec {
    fn compile(&self, country: &CountryCode) -> Result<Arc<dyn PostcodeStrategy>, ConfigError> {
        match self {
            Self::Pattern {
                pattern,
                format,
                hint,
            } => Ok(Arc::new(PatternStrategy::new(
                country.clone(),
                pattern,
                format.clone(),
                hint.as_str(),
            )?)),
            Self::Alias { alias } => {
                let target = CountryCode::new(alias)
                    .ok()
                    .and_then(|code| code.builtin())
                    .ok_or_else(|| ConfigError::UnknownAlias {
                        country: country.clone(),
                        target: alias.clone(),
                    })?;
                Ok(strategy::builtin(target))
            }
        }
    }
}
