//! # United Kingdom Postcodes
//!
//! A UK postcode is an outward code (area letters plus district) and an
//! inward code (sector digit plus two unit letters). Validation happens in
//! two steps:
//!
//! 1. The normalized code must match one of six positional grammars, tried
//!    in a fixed order. Each grammar restricts the letters legal at each
//!    position.
//! 2. The letter-only area prefix of the outward code must be a real postal
//!    area.
//!
//! Keeping the area list separate from the grammars avoids a grammar per
//! area, and lets the list change without touching the patterns.
//!
//! `GIR 0AA` is reserved and accepted as-is.

use regex::Regex;

use crate::normalize::NormalizedCode;
use crate::strategy::PostcodeStrategy;

/// Letters legal in the first outward position (everything but Q and V).
const FIRST: &str = "ABCDEFGHIJKLMNOPRSTUWXYZ";
/// Letters legal in the second outward position (no I, J or Z).
const SECOND: &str = "ABCDEFGHKLMNOPQRSTUVWXY";
/// Letters legal in the third position of an `A9A` outward code.
const THIRD: &str = "ABCDEFGHJKPSTUW";
/// Letters legal in the fourth position of an `AA9A` outward code.
const FOURTH: &str = "ABEHMNPRVWXY";
/// Inward-code letters: excludes C, I, K, M, O and V.
const INWARD: &str = "ABDEFGHJLNPQRSTUWXYZ";

const RESERVED: &str = "GIR0AA";
const RESERVED_DISPLAY: &str = "GIR 0AA";

/// Outward-code shapes in trial order.
const OUTWARD_SHAPES: [&str; 6] = [
    // A9
    "[{FIRST}][0-9]",
    // A9A
    "[{FIRST}][0-9][{THIRD}]",
    // A99
    "[{FIRST}][0-9]{2}",
    // AA9
    "[{FIRST}][{SECOND}][0-9]",
    // AA9A
    "[{FIRST}][{SECOND}][0-9][{FOURTH}]",
    // AA99
    "[{FIRST}][{SECOND}][0-9]{2}",
];

/// Postal areas, geographic and non-geographic. Sorted for binary search.
static AREAS: &[&str] = &[
    "AB", "AL", "B", "BA", "BB", "BD", "BF", "BH", "BL", "BN", "BR", "BS", "BT", "BX", "CA", "CB",
    "CF", "CH", "CM", "CO", "CR", "CT", "CV", "CW", "DA", "DD", "DE", "DG", "DH", "DL", "DN", "DT",
    "DY", "E", "EC", "EH", "EN", "EX", "FK", "FY", "G", "GL", "GU", "GY", "HA", "HD", "HG", "HP",
    "HR", "HS", "HU", "HX", "IG", "IM", "IP", "IV", "JE", "KA", "KT", "KW", "KY", "L", "LA", "LD",
    "LE", "LL", "LN", "LS", "LU", "M", "ME", "MK", "ML", "N", "NE", "NG", "NN", "NP", "NR", "NW",
    "OL", "OX", "PA", "PE", "PH", "PL", "PO", "PR", "RG", "RH", "RM", "S", "SA", "SE", "SG", "SK",
    "SL", "SM", "SN", "SO", "SP", "SR", "SS", "ST", "SW", "SY", "TA", "TD", "TF", "TN", "TQ", "TR",
    "TS", "TW", "UB", "W", "WA", "WC", "WD", "WF", "WN", "WR", "WS", "WV", "XX", "YO", "ZE",
];

/// Whether `area` is a known UK postal area.
pub fn is_postal_area(area: &str) -> bool {
    AREAS.binary_search(&area).is_ok()
}

/// Validation and formatting for United Kingdom postcodes.
#[derive(Debug, Clone)]
pub struct UkStrategy {
    grammars: Vec<Regex>,
}

impl UkStrategy {
    /// Compile the six grammars.
    pub fn new() -> Self {
        let grammars = OUTWARD_SHAPES
            .iter()
            .map(|shape| {
                let outward = shape
                    .replace("{FIRST}", FIRST)
                    .replace("{SECOND}", SECOND)
                    .replace("{THIRD}", THIRD)
                    .replace("{FOURTH}", FOURTH);
                let pattern = format!("^({outward})([0-9][{INWARD}]{{2}})$");
                Regex::new(&pattern).expect("UK grammar is a fixed, valid pattern")
            })
            .collect();
        Self { grammars }
    }

    /// Split a code into outward and inward parts using the first grammar
    /// that matches. The area whitelist is not consulted.
    fn split<'a>(&self, code: &'a str) -> Option<(&'a str, &'a str)> {
        self.grammars.iter().find_map(|grammar| {
            let caps = grammar.captures(code)?;
            Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
        })
    }
}

impl Default for UkStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PostcodeStrategy for UkStrategy {
    fn attempt(&self, code: &NormalizedCode) -> Option<String> {
        let code = code.as_str();
        if code == RESERVED {
            return Some(RESERVED_DISPLAY.to_string());
        }
        let (outward, inward) = self.split(code)?;
        let area_len = outward
            .bytes()
            .take_while(u8::is_ascii_alphabetic)
            .count();
        if !is_postal_area(&outward[..area_len]) {
            return None;
        }
        Some(format!("{outward} {inward}"))
    }

    fn hint(&self) -> &str {
        "A9 9AA, A9A 9AA, A99 9AA, AA9 9AA, AA9A 9AA or AA99 9AA"
    }
}
