//! Countries without a postal code system.
//!
//! Address forms for these countries should not require a postal code.
//! Where a downstream system insists on one, [`fallback_postal_code`]
//! provides a placeholder.

/// ISO 3166-1 alpha-2 codes of countries with no postal code system.
/// Sorted for binary search.
static NO_POSTAL_CODE: &[&str] = &[
    "AE", "AG", "AN", "AO", "AQ", "AW", "BF", "BI", "BJ", "BO", "BQ", "BS", "BV", "BW", "BZ", "CD",
    "CF", "CG", "CI", "CK", "CM", "CW", "DJ", "DM", "ER", "FJ", "GA", "GD", "GH", "GM", "GQ", "GY",
    "HK", "HM", "JM", "KI", "KM", "KN", "KP", "LY", "ML", "MO", "MR", "MW", "NR", "NU", "QA", "RW",
    "SB", "SC", "SL", "SR", "SS", "ST", "SX", "SY", "TD", "TF", "TG", "TK", "TL", "TO", "TV", "UG",
    "UM", "VU", "YE", "ZW",
];

const FALLBACK_POSTAL_CODE: &str = "00000";

/// Whether `country` uses postal codes.
///
/// Matching is case-insensitive. Codes that are not in the list, including
/// malformed ones, are assumed to have a postal system.
pub fn has_postal_code(country: &str) -> bool {
    let upper = country.to_ascii_uppercase();
    NO_POSTAL_CODE.binary_search(&upper.as_str()).is_err()
}

/// Placeholder for countries where [`has_postal_code`] is `false`.
pub fn fallback_postal_code() -> &'static str {
    FALLBACK_POSTAL_CODE
}

/// Every country without a postal code system, sorted.
pub fn countries_without_postal_code() -> &'static [&'static str] {
    NO_POSTAL_CODE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::CountryCode;

    #[test]
    fn hong_kong_has_none() {
        assert!(!has_postal_code("HK"));
        assert!(!has_postal_code("hk"));
        assert_eq!(fallback_postal_code(), "00000");
    }

    #[test]
    fn common_countries_have_postal_codes() {
        for country in ["US", "GB", "FR", "DE", "JP"] {
            assert!(has_postal_code(country), "{country}");
        }
    }

    #[test]
    fn unlisted_and_malformed_assume_postal_code() {
        assert!(has_postal_code("XX"));
        assert!(has_postal_code("HKG"));
        assert!(has_postal_code(""));
    }

    #[test]
    fn list_is_sorted_and_well_formed() {
        assert!(NO_POSTAL_CODE.windows(2).all(|w| w[0] < w[1]));
        for code in NO_POSTAL_CODE {
            assert!(CountryCode::new(code).is_ok(), "{code}");
        }
    }

    #[test]
    fn no_listed_country_has_a_builtin_strategy() {
        for code in countries_without_postal_code() {
            let code = CountryCode::new(code).unwrap();
            assert!(code.builtin().is_none(), "{code} has a built-in strategy");
        }
    }
}
