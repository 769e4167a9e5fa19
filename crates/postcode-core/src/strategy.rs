//! # Strategy Contract
//!
//! A [`PostcodeStrategy`] validates and formats codes for one country. Each
//! implementation provides a single [`attempt`](PostcodeStrategy::attempt)
//! operation; `validate` and `format` are derived from it, so validation and
//! formatting agree on what counts as valid.
//!
//! Strategies are pure and total. They never fail: an invalid code makes
//! `validate` return `false` and `format` return the input unchanged. All
//! error signalling happens in the [`Registry`](crate::Registry).
//!
//! Three implementations ship with the crate:
//! - [`RuleStrategy`] evaluates a built-in country's [`Rule`].
//! - [`UkStrategy`](crate::uk::UkStrategy) handles the United Kingdom.
//! - [`PatternStrategy`] is built at runtime from a regex and an optional
//!   format template, for configured overrides.

use regex::Regex;

use crate::catalog::Grammar;
use crate::country::{Country, CountryCode};
use crate::error::ConfigError;
use crate::normalize::NormalizedCode;
use crate::rule::{join_alternatives, Rule};
use crate::uk::UkStrategy;

/// Validation and formatting for a single country.
pub trait PostcodeStrategy: Send + Sync + std::fmt::Debug {
    /// The canonical rendering of `code` if it is valid, else `None`.
    fn attempt(&self, code: &NormalizedCode) -> Option<String>;

    /// Human-readable description of the expected format.
    fn hint(&self) -> &str;

    /// Whether `code` conforms to the country's grammar.
    fn validate(&self, code: &NormalizedCode) -> bool {
        self.attempt(code).is_some()
    }

    /// The canonical rendering of `code`, or `code` unchanged if invalid.
    fn format(&self, code: &NormalizedCode) -> String {
        self.attempt(code)
            .unwrap_or_else(|| code.as_str().to_string())
    }
}

/// Build the built-in strategy for `country`.
pub fn builtin(country: Country) -> std::sync::Arc<dyn PostcodeStrategy> {
    match country.grammar() {
        Grammar::Rule(rule) => std::sync::Arc::new(RuleStrategy::new(country, rule)),
        Grammar::UnitedKingdom => std::sync::Arc::new(UkStrategy::new()),
    }
}

/// Strategy for a built-in country described by a [`Rule`].
#[derive(Debug, Clone)]
pub struct RuleStrategy {
    country: Country,
    rule: &'static Rule,
    hint: String,
}

impl RuleStrategy {
    /// Bind a rule to its country. The hint is derived once, here.
    pub fn new(country: Country, rule: &'static Rule) -> Self {
        Self {
            country,
            rule,
            hint: join_alternatives(rule.describe()),
        }
    }

    pub fn country(&self) -> Country {
        self.country
    }

    /// A code this strategy accepts, in normalized form.
    pub fn sample(&self) -> String {
        self.rule.sample()
    }
}

impl PostcodeStrategy for RuleStrategy {
    fn attempt(&self, code: &NormalizedCode) -> Option<String> {
        self.rule.attempt(code.as_str())
    }

    fn hint(&self) -> &str {
        &self.hint
    }
}

/// Regex-driven strategy, typically built from configuration.
///
/// The pattern must match the whole normalized code: it is compiled as
/// `^(?:pattern)$`, so every alternative is tried against the full code.
/// The optional template renders the match using `$1` / `${name}` capture
/// references; without one the normalized code is returned as-is.
#[derive(Debug, Clone)]
pub struct PatternStrategy {
    country: CountryCode,
    regex: Regex,
    template: Option<String>,
    hint: String,
}

impl PatternStrategy {
    /// Compile a pattern strategy.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPattern`] if the regex does not compile, and
    /// [`ConfigError::InvalidTemplate`] if the template names a capture
    /// group the pattern does not define.
    pub fn new(
        country: CountryCode,
        pattern: &str,
        template: Option<String>,
        hint: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let anchored = format!("^(?:{pattern})$");
        let regex = Regex::new(&anchored).map_err(|source| ConfigError::InvalidPattern {
            country: country.clone(),
            source,
        })?;
        if let Some(ref template) = template {
            if !template_refs_resolve(&regex, template) {
                return Err(ConfigError::InvalidTemplate {
                    country,
                    template: template.clone(),
                });
            }
        }
        let hint = hint.into();
        let hint = if hint.is_empty() {
            format!("a code matching {pattern}")
        } else {
            hint
        };
        Ok(Self {
            country,
            regex,
            template,
            hint,
        })
    }

    pub fn country(&self) -> &CountryCode {
        &self.country
    }
}

impl PostcodeStrategy for PatternStrategy {
    fn attempt(&self, code: &NormalizedCode) -> Option<String> {
        let code = code.as_str();
        let caps = self.regex.captures(code)?;
        Some(match self.template {
            Some(ref template) => {
                let mut out = String::new();
                caps.expand(template, &mut out);
                out
            }
            None => code.to_string(),
        })
    }

    fn hint(&self) -> &str {
        &self.hint
    }
}

/// Check every `$ref` / `${ref}` in `template` against the regex's groups.
///
/// Mirrors the reference syntax of [`regex::Captures::expand`]: `$$` is a
/// literal dollar, a bare reference takes the longest run of `[_0-9A-Za-z]`.
fn template_refs_resolve(regex: &Regex, template: &str) -> bool {
    let resolves = |name: &str| match name.parse::<usize>() {
        Ok(index) => index < regex.captures_len(),
        Err(_) => regex.capture_names().flatten().any(|n| n == name),
    };

    let mut rest = template;
    while let Some(pos) = rest.find('$') {
        rest = &rest[pos + 1..];
        if let Some(after) = rest.strip_prefix('$') {
            rest = after;
            continue;
        }
        let name = if let Some(braced) = rest.strip_prefix('{') {
            let Some(end) = braced.find('}') else {
                // Unterminated braces are emitted literally by `expand`.
                continue;
            };
            let name = &braced[..end];
            rest = &braced[end + 1..];
            name
        } else {
            let end = rest
                .find(|c: char| !(c == '_' || c.is_ascii_alphanumeric()))
                .unwrap_or(rest.len());
            let name = &rest[..end];
            rest = &rest[end..];
            name
        };
        if !name.is_empty() && !resolves(name) {
            return false;
        }
    }
    true
}
