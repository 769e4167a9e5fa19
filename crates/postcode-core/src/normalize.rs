//! # Input Normalization
//!
//! Every entry point strips ASCII spaces and hyphens and upper-cases the
//! input before a strategy sees it. [`NormalizedCode`] is the only string
//! type the [`PostcodeStrategy`](crate::PostcodeStrategy) trait accepts, so
//! a strategy cannot be handed un-normalized input by accident.

use serde::Serialize;

/// Remove every ASCII space and hyphen, then upper-case.
///
/// Case mapping uses Unicode default rules, which do not depend on the
/// process locale. This function cannot fail and is idempotent.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != ' ' && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

/// A postal code that has been through [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedCode(String);

impl NormalizedCode {
    /// Normalize raw user input.
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    /// Access the normalized string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NormalizedCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NormalizedCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_spaces_and_hyphens() {
        assert_eq!(normalize("sw1a 1aa"), "SW1A1AA");
        assert_eq!(normalize("12345-6789"), "123456789");
        assert_eq!(normalize(" - 9 0-2 1 0 - "), "90210");
    }

    #[test]
    fn keeps_other_whitespace_and_punctuation() {
        assert_eq!(normalize("a\tb"), "A\tB");
        assert_eq!(normalize("a.b_c"), "A.B_C");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
        assert!(NormalizedCode::new(" - ").is_empty());
    }

    #[test]
    fn unicode_upper_case() {
        assert_eq!(normalize("straße"), "STRASSE");
        assert_eq!(NormalizedCode::new("é-1").as_str(), "É1");
    }

    #[test]
    fn serializes_as_string() {
        let code = NormalizedCode::new("ab-1");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"AB1\"");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "[ -~]{0,24}") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn output_never_contains_separators(raw in "\\PC{0,24}") {
            let out = normalize(&raw);
            prop_assert!(!out.contains(' '));
            prop_assert!(!out.contains('-'));
        }

        #[test]
        fn separators_do_not_matter(
            parts in prop::collection::vec("[a-zA-Z0-9]{1,4}", 1..5),
            seps in prop::collection::vec(
                prop_oneof![Just(""), Just(" "), Just("-"), Just(" - ")],
                5,
            ),
        ) {
            let plain: String = parts.concat();
            let spaced: String = parts
                .iter()
                .zip(seps.iter().cycle())
                .map(|(p, s)| format!("{p}{s}"))
                .collect();
            prop_assert_eq!(normalize(&plain), normalize(&spaced));
        }
    }
}
