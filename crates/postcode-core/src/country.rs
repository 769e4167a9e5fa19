//! # Country Identifiers
//!
//! [`CountryCode`] is the validated ISO 3166-1 alpha-2 newtype every public
//! operation accepts. Input is case-insensitive; the stored form is always
//! upper-case, so registry lookups are keyed consistently.
//!
//! [`Country`] is the closed set of countries with a built-in strategy.
//! Adding a variant forces the catalog's exhaustive `match` to provide a
//! grammar for it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PostcodeError;

/// An ISO 3166-1 alpha-2 country code, upper-cased.
///
/// # Validation
///
/// After ASCII upper-casing, the value must be exactly two letters `A-Z`.
/// Whether the country is *supported* is a separate question answered by
/// the [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CountryCode(String);

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

impl CountryCode {
    /// Create a country code, upper-casing and validating the two-letter shape.
    ///
    /// # Errors
    ///
    /// Returns [`PostcodeError::UnknownCountry`] if the value is not two
    /// ASCII letters. A malformed code can never name a supported country.
    pub fn new(value: impl AsRef<str>) -> Result<Self, PostcodeError> {
        let raw = value.as_ref();
        let upper = raw.to_ascii_uppercase();
        if upper.len() != 2 || !upper.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(PostcodeError::UnknownCountry(raw.to_string()));
        }
        Ok(Self(upper))
    }

    /// Access the upper-case two-letter code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The built-in country for this code, if one exists.
    pub fn builtin(&self) -> Option<Country> {
        self.0.parse().ok()
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = PostcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Country> for CountryCode {
    fn from(country: Country) -> Self {
        Self(country.as_str().to_string())
    }
}

/// Declares the [`Country`] enum together with its code and name tables.
macro_rules! countries {
    ($($code:ident => $name:literal,)+) => {
        /// Every country with a built-in postal code strategy.
        ///
        /// Variant names are the ISO 3166-1 alpha-2 codes and match the
        /// serde representation.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Country {
            $(
                #[doc = $name]
                $code,
            )+
        }

        impl Country {
            /// All built-in countries in alphabetical code order.
            pub const ALL: &'static [Country] = &[$(Self::$code,)+];

            /// The upper-case two-letter code.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$code => stringify!($code),)+
                }
            }

            /// English short name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$code => $name,)+
                }
            }
        }

        impl FromStr for Country {
            type Err = PostcodeError;

            /// Parse an upper-case code. Use [`CountryCode`] for
            /// case-insensitive input.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($code) => Ok(Self::$code),)+
                    other => Err(PostcodeError::UnknownCountry(other.to_string())),
                }
            }
        }
    };
}

countries! {
    AD => "Andorra",
    AF => "Afghanistan",
    AI => "Anguilla",
    AL => "Albania",
    AM => "Armenia",
    AR => "Argentina",
    AS => "American Samoa",
    AT => "Austria",
    AU => "Australia",
    AX => "Åland Islands",
    AZ => "Azerbaijan",
    BA => "Bosnia and Herzegovina",
    BB => "Barbados",
    BD => "Bangladesh",
    BE => "Belgium",
    BG => "Bulgaria",
    BH => "Bahrain",
    BL => "Saint Barthélemy",
    BM => "Bermuda",
    BN => "Brunei",
    BR => "Brazil",
    BT => "Bhutan",
    BY => "Belarus",
    CA => "Canada",
    CC => "Cocos (Keeling) Islands",
    CH => "Switzerland",
    CL => "Chile",
    CN => "China",
    CO => "Colombia",
    CR => "Costa Rica",
    CU => "Cuba",
    CV => "Cabo Verde",
    CX => "Christmas Island",
    CY => "Cyprus",
    CZ => "Czechia",
    DE => "Germany",
    DK => "Denmark",
    DO => "Dominican Republic",
    DZ => "Algeria",
    EC => "Ecuador",
    EE => "Estonia",
    EG => "Egypt",
    ES => "Spain",
    ET => "Ethiopia",
    FI => "Finland",
    FK => "Falkland Islands",
    FM => "Micronesia",
    FO => "Faroe Islands",
    FR => "France",
    GB => "United Kingdom",
    GE => "Georgia",
    GF => "French Guiana",
    GG => "Guernsey",
    GI => "Gibraltar",
    GL => "Greenland",
    GN => "Guinea",
    GP => "Guadeloupe",
    GR => "Greece",
    GS => "South Georgia and the South Sandwich Islands",
    GT => "Guatemala",
    GU => "Guam",
    GW => "Guinea-Bissau",
    HN => "Honduras",
    HR => "Croatia",
    HT => "Haiti",
    HU => "Hungary",
    ID => "Indonesia",
    IE => "Ireland",
    IL => "Israel",
    IM => "Isle of Man",
    IN => "India",
    IO => "British Indian Ocean Territory",
    IQ => "Iraq",
    IR => "Iran",
    IS => "Iceland",
    IT => "Italy",
    JE => "Jersey",
    JO => "Jordan",
    JP => "Japan",
    KE => "Kenya",
    KG => "Kyrgyzstan",
    KH => "Cambodia",
    KR => "South Korea",
    KW => "Kuwait",
    KY => "Cayman Islands",
    KZ => "Kazakhstan",
    LA => "Laos",
    LB => "Lebanon",
    LC => "Saint Lucia",
    LI => "Liechtenstein",
    LK => "Sri Lanka",
    LR => "Liberia",
    LS => "Lesotho",
    LT => "Lithuania",
    LU => "Luxembourg",
    LV => "Latvia",
    MA => "Morocco",
    MC => "Monaco",
    MD => "Moldova",
    ME => "Montenegro",
    MF => "Saint Martin",
    MG => "Madagascar",
    MH => "Marshall Islands",
    MK => "North Macedonia",
    MM => "Myanmar",
    MN => "Mongolia",
    MP => "Northern Mariana Islands",
    MQ => "Martinique",
    MS => "Montserrat",
    MT => "Malta",
    MU => "Mauritius",
    MV => "Maldives",
    MX => "Mexico",
    MY => "Malaysia",
    MZ => "Mozambique",
    NA => "Namibia",
    NC => "New Caledonia",
    NE => "Niger",
    NF => "Norfolk Island",
    NG => "Nigeria",
    NI => "Nicaragua",
    NL => "Netherlands",
    NO => "Norway",
    NP => "Nepal",
    NZ => "New Zealand",
    OM => "Oman",
    PA => "Panama",
    PE => "Peru",
    PF => "French Polynesia",
    PG => "Papua New Guinea",
    PH => "Philippines",
    PK => "Pakistan",
    PL => "Poland",
    PM => "Saint Pierre and Miquelon",
    PN => "Pitcairn Islands",
    PR => "Puerto Rico",
    PS => "Palestine",
    PT => "Portugal",
    PW => "Palau",
    PY => "Paraguay",
    RE => "Réunion",
    RO => "Romania",
    RS => "Serbia",
    RU => "Russia",
    SA => "Saudi Arabia",
    SD => "Sudan",
    SE => "Sweden",
    SG => "Singapore",
    SH => "Saint Helena, Ascension and Tristan da Cunha",
    SI => "Slovenia",
    SJ => "Svalbard and Jan Mayen",
    SK => "Slovakia",
    SM => "San Marino",
    SN => "Senegal",
    SO => "Somalia",
    SV => "El Salvador",
    SZ => "Eswatini",
    TC => "Turks and Caicos Islands",
    TH => "Thailand",
    TJ => "Tajikistan",
    TM => "Turkmenistan",
    TN => "Tunisia",
    TR => "Türkiye",
    TT => "Trinidad and Tobago",
    TW => "Taiwan",
    TZ => "Tanzania",
    UA => "Ukraine",
    US => "United States",
    UY => "Uruguay",
    UZ => "Uzbekistan",
    VA => "Vatican City",
    VC => "Saint Vincent and the Grenadines",
    VE => "Venezuela",
    VG => "British Virgin Islands",
    VI => "United States Virgin Islands",
    VN => "Vietnam",
    WF => "Wallis and Futuna",
    WS => "Samoa",
    YT => "Mayotte",
    ZA => "South Africa",
    ZM => "Zambia",
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
