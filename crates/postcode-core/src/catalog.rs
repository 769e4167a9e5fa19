//! # Country Grammar Catalog
//!
//! Per-country postal code grammars expressed with the [`Rule`] building
//! blocks. This is data: one `match` arm per [`Country`] variant, so a new
//! country does not compile until it has a grammar. The United Kingdom is
//! the one country whose grammar needs its own matcher (see [`crate::uk`]).

use crate::country::Country;
use crate::rule::{Class, Keep, Rule};

/// How a built-in country is validated.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Grammar {
    Rule(&'static Rule),
    UnitedKingdom,
}

// -- Shared building blocks ---------------------------------------------------

const D3: Rule = Rule::Digits {
    len: 3,
    nonzero_lead: false,
};
const D4: Rule = Rule::Digits {
    len: 4,
    nonzero_lead: false,
};
const D5: Rule = Rule::Digits {
    len: 5,
    nonzero_lead: false,
};
const D6: Rule = Rule::Digits {
    len: 6,
    nonzero_lead: false,
};
const D7: Rule = Rule::Digits {
    len: 7,
    nonzero_lead: false,
};
const N3: Rule = Rule::Digits {
    len: 3,
    nonzero_lead: true,
};
const N4: Rule = Rule::Digits {
    len: 4,
    nonzero_lead: true,
};
const N5: Rule = Rule::Digits {
    len: 5,
    nonzero_lead: true,
};
const N6: Rule = Rule::Digits {
    len: 6,
    nonzero_lead: true,
};

/// US ZIP or ZIP+4; also used by US territories and freely associated states.
const US_ZIP: Rule = Rule::AnyOf(&[
    D5,
    Rule::SplitDigits {
        len: 9,
        at: 5,
        sep: "-",
    },
]);

const L: Class = Class::Letter;
const D: Class = Class::Digit;

/// Inward-code letters used across the British postcode system.
const UK_INWARD: Class = Class::Among("ABDEFGHJLNPQRSTUWXYZ");

/// French overseas departments and collectivities: five digits behind a
/// fixed three-digit territory prefix.
const fn french_overseas(prefix: &'static [&'static str]) -> Rule {
    Rule::Leading {
        allowed: prefix,
        inner: &D5,
    }
}

// -- Countries with a dedicated grammar -----------------------------------------

static AD: Rule = Rule::Prefixed {
    prefix: "AD",
    sep: "",
    keep: Keep::Always,
    inner: &Rule::Shape {
        slots: &[Class::Among("1234567"), D, D],
        split: None,
    },
};

static AI: Rule = Rule::Single {
    code: "AI2640",
    display: "AI-2640",
};

/// Four-digit legacy code, or the CPA: province letter, four digits,
/// three letters.
static AR: Rule = Rule::AnyOf(&[
    D4,
    Rule::Shape {
        slots: &[
            Class::Among("ABCDEFGHJKLMNPQRSTUVWXYZ"),
            D,
            D,
            D,
            D,
            L,
            L,
            L,
        ],
        split: None,
    },
]);

static AS: Rule = Rule::Leading {
    allowed: &["96799"],
    inner: &US_ZIP,
};

static AX: Rule = Rule::Prefixed {
    prefix: "AX",
    sep: "-",
    keep: Keep::Always,
    inner: &Rule::Leading {
        allowed: &["22"],
        inner: &D5,
    },
};

static AZ: Rule = Rule::Prefixed {
    prefix: "AZ",
    sep: " ",
    keep: Keep::Always,
    inner: &D4,
};

static BB: Rule = Rule::Prefixed {
    prefix: "BB",
    sep: "",
    keep: Keep::Always,
    inner: &D5,
};

static BH: Rule = Rule::AnyOf(&[N3, N4]);

static BL: Rule = Rule::Single {
    code: "97133",
    display: "97133",
};

static BM: Rule = Rule::AnyOf(&[
    Rule::Shape {
        slots: &[L, L, D, D],
        split: Some((2, " ")),
    },
    Rule::Shape {
        slots: &[L, L, L, L],
        split: Some((2, " ")),
    },
]);

static BN: Rule = Rule::Shape {
    slots: &[L, L, D, D, D, D],
    split: None,
};

static BR: Rule = Rule::SplitDigits {
    len: 8,
    at: 5,
    sep: "-",
};

static CA: Rule = Rule::Shape {
    slots: &[
        Class::Among("ABCEGHJKLMNPRSTVXY"),
        D,
        Class::Among("ABCEGHJKLMNPRSTVWXYZ"),
        D,
        Class::Among("ABCEGHJKLMNPRSTVWXYZ"),
        D,
    ],
    split: Some((3, " ")),
};

static CC: Rule = Rule::Single {
    code: "6799",
    display: "6799",
};

static CX: Rule = Rule::Single {
    code: "6798",
    display: "6798",
};

static CZ: Rule = Rule::Shape {
    slots: &[Class::Among("1234567"), D, D, D, D],
    split: Some((3, " ")),
};

static ES: Rule = Rule::DigitRange {
    min: "01000",
    max: "52999",
};

static FK: Rule = Rule::Single {
    code: "FIQQ1ZZ",
    display: "FIQQ 1ZZ",
};

static FM: Rule = Rule::Leading {
    allowed: &["9694"],
    inner: &US_ZIP,
};

static FO: Rule = Rule::Prefixed {
    prefix: "FO",
    sep: "-",
    keep: Keep::Always,
    inner: &D3,
};

static GF: Rule = french_overseas(&["973"]);
static GP: Rule = french_overseas(&["971"]);
static MC: Rule = french_overseas(&["980"]);
static MQ: Rule = french_overseas(&["972"]);
static NC: Rule = french_overseas(&["988"]);
static PF: Rule = french_overseas(&["987"]);
static RE: Rule = french_overseas(&["974"]);
static WF: Rule = french_overseas(&["986"]);
static YT: Rule = french_overseas(&["976"]);

static GG: Rule = Rule::AnyOf(&[
    Rule::Shape {
        slots: &[Class::Among("G"), Class::Among("Y"), D, D, UK_INWARD, UK_INWARD],
        split: Some((3, " ")),
    },
    Rule::Shape {
        slots: &[
            Class::Among("G"),
            Class::Among("Y"),
            D,
            D,
            D,
            UK_INWARD,
            UK_INWARD,
        ],
        split: Some((4, " ")),
    },
]);

static GI: Rule = Rule::Single {
    code: "GX111AA",
    display: "GX11 1AA",
};

static GL: Rule = Rule::Leading {
    allowed: &["39"],
    inner: &D4,
};

static GR: Rule = Rule::SplitDigits {
    len: 5,
    at: 3,
    sep: " ",
};

static GS: Rule = Rule::Single {
    code: "SIQQ1ZZ",
    display: "SIQQ 1ZZ",
};

static GU: Rule = Rule::Leading {
    allowed: &["969"],
    inner: &US_ZIP,
};

static HR: Rule = Rule::Shape {
    slots: &[Class::Among("12345"), D, D, D, D],
    split: None,
};

static HT: Rule = Rule::Prefixed {
    prefix: "HT",
    sep: "",
    keep: Keep::Always,
    inner: &D4,
};

const IE_ID: Class = Class::Among("0123456789ACDEFHKNPRTVWXY");

/// Eircode: routing key and four-character unique identifier.
static IE: Rule = Rule::AnyOf(&[
    Rule::Shape {
        slots: &[
            Class::Among("ACDEFHKNPRTVWXY"),
            D,
            D,
            IE_ID,
            IE_ID,
            IE_ID,
            IE_ID,
        ],
        split: Some((3, " ")),
    },
    Rule::Shape {
        slots: &[
            Class::Among("D"),
            Class::Among("6"),
            Class::Among("W"),
            IE_ID,
            IE_ID,
            IE_ID,
            IE_ID,
        ],
        split: Some((3, " ")),
    },
]);

static IM: Rule = Rule::AnyOf(&[
    Rule::Shape {
        slots: &[Class::Among("I"), Class::Among("M"), D, D, UK_INWARD, UK_INWARD],
        split: Some((3, " ")),
    },
    Rule::Shape {
        slots: &[
            Class::Among("I"),
            Class::Among("M"),
            D,
            D,
            D,
            UK_INWARD,
            UK_INWARD,
        ],
        split: Some((4, " ")),
    },
]);

static IO: Rule = Rule::Single {
    code: "BBND1ZZ",
    display: "BBND 1ZZ",
};

static IR: Rule = Rule::SplitDigits {
    len: 10,
    at: 5,
    sep: "-",
};

static JE: Rule = Rule::AnyOf(&[
    Rule::Shape {
        slots: &[Class::Among("J"), Class::Among("E"), D, D, UK_INWARD, UK_INWARD],
        split: Some((3, " ")),
    },
    Rule::Shape {
        slots: &[
            Class::Among("J"),
            Class::Among("E"),
            D,
            D,
            D,
            UK_INWARD,
            UK_INWARD,
        ],
        split: Some((4, " ")),
    },
]);

static JP: Rule = Rule::SplitDigits {
    len: 7,
    at: 3,
    sep: "-",
};

static KH: Rule = Rule::AnyOf(&[D5, D6]);

static KY: Rule = Rule::Shape {
    slots: &[Class::Among("K"), Class::Among("Y"), D, D, D, D, D],
    split: Some((3, "-")),
};

static LB: Rule = Rule::AnyOf(&[
    D4,
    Rule::SplitDigits {
        len: 8,
        at: 4,
        sep: " ",
    },
]);

static LC: Rule = Rule::Shape {
    slots: &[Class::Among("L"), Class::Among("C"), D, D, D, D, D],
    split: Some((4, " ")),
};

static LI: Rule = Rule::DigitRange {
    min: "9485",
    max: "9498",
};

static LT: Rule = Rule::Prefixed {
    prefix: "LT",
    sep: "-",
    keep: Keep::Always,
    inner: &D5,
};

static LU: Rule = Rule::Prefixed {
    prefix: "L",
    sep: "-",
    keep: Keep::IfPresent,
    inner: &N4,
};

static LV: Rule = Rule::Prefixed {
    prefix: "LV",
    sep: "-",
    keep: Keep::Always,
    inner: &D4,
};

static MD: Rule = Rule::Prefixed {
    prefix: "MD",
    sep: "-",
    keep: Keep::Always,
    inner: &D4,
};

static MF: Rule = Rule::Single {
    code: "97150",
    display: "97150",
};

static MH: Rule = Rule::Leading {
    allowed: &["96960", "96970"],
    inner: &US_ZIP,
};

static MP: Rule = Rule::Leading {
    allowed: &["96950", "96951", "96952"],
    inner: &US_ZIP,
};

static MS: Rule = Rule::Prefixed {
    prefix: "MSR",
    sep: " ",
    keep: Keep::Always,
    inner: &Rule::DigitRange {
        min: "1110",
        max: "1350",
    },
};

static MT: Rule = Rule::Shape {
    slots: &[L, L, L, D, D, D, D],
    split: Some((3, " ")),
};

static NF: Rule = Rule::Single {
    code: "2899",
    display: "2899",
};

static NL: Rule = Rule::Shape {
    slots: &[Class::NonZero, D, D, D, L, L],
    split: Some((4, " ")),
};

static PL: Rule = Rule::SplitDigits {
    len: 5,
    at: 2,
    sep: "-",
};

static PM: Rule = Rule::Single {
    code: "97500",
    display: "97500",
};

static PN: Rule = Rule::Single {
    code: "PCRN1ZZ",
    display: "PCRN 1ZZ",
};

static PR: Rule = Rule::Leading {
    allowed: &["006", "007", "009"],
    inner: &US_ZIP,
};

static PT: Rule = Rule::SplitDigits {
    len: 7,
    at: 4,
    sep: "-",
};

static PW: Rule = Rule::Leading {
    allowed: &["96939", "96940"],
    inner: &US_ZIP,
};

static SE: Rule = Rule::Shape {
    slots: &[Class::NonZero, D, D, D, D],
    split: Some((3, " ")),
};

static SH: Rule = Rule::AnyOf(&[
    Rule::Single {
        code: "STHL1ZZ",
        display: "STHL 1ZZ",
    },
    Rule::Single {
        code: "ASCN1ZZ",
        display: "ASCN 1ZZ",
    },
    Rule::Single {
        code: "TDCU1ZZ",
        display: "TDCU 1ZZ",
    },
]);

static SI: Rule = Rule::Prefixed {
    prefix: "SI",
    sep: "-",
    keep: Keep::IfPresent,
    inner: &N4,
};

static SJ: Rule = Rule::DigitRange {
    min: "9170",
    max: "9179",
};

static SK: Rule = Rule::Shape {
    slots: &[Class::Among("089"), D, D, D, D],
    split: Some((3, " ")),
};

static SM: Rule = Rule::Leading {
    allowed: &["4789"],
    inner: &D5,
};

static SO: Rule = Rule::Shape {
    slots: &[L, L, D, D, D, D, D],
    split: Some((2, " ")),
};

static SZ: Rule = Rule::Shape {
    slots: &[L, D, D, D],
    split: None,
};

static TC: Rule = Rule::Single {
    code: "TKCA1ZZ",
    display: "TKCA 1ZZ",
};

static TR: Rule = Rule::DigitRange {
    min: "01000",
    max: "81999",
};

static TW: Rule = Rule::AnyOf(&[D3, D5, D6]);

static VA: Rule = Rule::Single {
    code: "00120",
    display: "00120",
};

static VC: Rule = Rule::Prefixed {
    prefix: "VC",
    sep: "",
    keep: Keep::Always,
    inner: &D4,
};

static VG: Rule = Rule::Prefixed {
    prefix: "VG",
    sep: "",
    keep: Keep::Always,
    inner: &Rule::DigitRange {
        min: "1110",
        max: "1160",
    },
};

static VI: Rule = Rule::Leading {
    allowed: &["008"],
    inner: &US_ZIP,
};

static WS: Rule = Rule::Prefixed {
    prefix: "WS",
    sep: "",
    keep: Keep::Always,
    inner: &D4,
};

impl Country {
    /// The grammar for this country.
    pub(crate) fn grammar(self) -> Grammar {
        let rule: &'static Rule = match self {
            Country::AD => &AD,
            Country::AF => &D4,
            Country::AI => &AI,
            Country::AL => &D4,
            Country::AM => &D4,
            Country::AR => &AR,
            Country::AS => &AS,
            Country::AT => &N4,
            Country::AU => &D4,
            Country::AX => &AX,
            Country::AZ => &AZ,
            Country::BA => &D5,
            Country::BB => &BB,
            Country::BD => &D4,
            Country::BE => &N4,
            Country::BG => &N4,
            Country::BH => &BH,
            Country::BL => &BL,
            Country::BM => &BM,
            Country::BN => &BN,
            Country::BR => &BR,
            Country::BT => &D5,
            Country::BY => &D6,
            Country::CA => &CA,
            Country::CC => &CC,
            Country::CH => &N4,
            Country::CL => &D7,
            Country::CN => &D6,
            Country::CO => &D6,
            Country::CR => &D5,
            Country::CU => &D5,
            Country::CV => &D4,
            Country::CX => &CX,
            Country::CY => &N4,
            Country::CZ => &CZ,
            Country::DE => &D5,
            Country::DK => &N4,
            Country::DO => &D5,
            Country::DZ => &D5,
            Country::EC => &D6,
            Country::EE => &N5,
            Country::EG => &D5,
            Country::ES => &ES,
            Country::ET => &D4,
            Country::FI => &D5,
            Country::FK => &FK,
            Country::FM => &FM,
            Country::FO => &FO,
            Country::FR => &D5,
            Country::GB => return Grammar::UnitedKingdom,
            Country::GE => &D4,
            Country::GF => &GF,
            Country::GG => &GG,
            Country::GI => &GI,
            Country::GL => &GL,
            Country::GN => &D3,
            Country::GP => &GP,
            Country::GR => &GR,
            Country::GS => &GS,
            Country::GT => &D5,
            Country::GU => &GU,
            Country::GW => &D4,
            Country::HN => &D5,
            Country::HR => &HR,
            Country::HT => &HT,
            Country::HU => &N4,
            Country::ID => &N5,
            Country::IE => &IE,
            Country::IL => &D7,
            Country::IM => &IM,
            Country::IN => &N6,
            Country::IO => &IO,
            Country::IQ => &D5,
            Country::IR => &IR,
            Country::IS => &N3,
            Country::IT => &D5,
            Country::JE => &JE,
            Country::JO => &D5,
            Country::JP => &JP,
            Country::KE => &D5,
            Country::KG => &D6,
            Country::KH => &KH,
            Country::KR => &D5,
            Country::KW => &D5,
            Country::KY => &KY,
            Country::KZ => &D6,
            Country::LA => &D5,
            Country::LB => &LB,
            Country::LC => &LC,
            Country::LI => &LI,
            Country::LK => &D5,
            Country::LR => &D4,
            Country::LS => &D3,
            Country::LT => &LT,
            Country::LU => &LU,
            Country::LV => &LV,
            Country::MA => &D5,
            Country::MC => &MC,
            Country::MD => &MD,
            Country::ME => &D5,
            Country::MF => &MF,
            Country::MG => &D3,
            Country::MH => &MH,
            Country::MK => &D4,
            Country::MM => &D5,
            Country::MN => &D5,
            Country::MP => &MP,
            Country::MQ => &MQ,
            Country::MS => &MS,
            Country::MT => &MT,
            Country::MU => &D5,
            Country::MV => &D5,
            Country::MX => &D5,
            Country::MY => &D5,
            Country::MZ => &D4,
            Country::NA => &D5,
            Country::NC => &NC,
            Country::NE => &D4,
            Country::NF => &NF,
            Country::NG => &D6,
            Country::NI => &D5,
            Country::NL => &NL,
            Country::NO => &D4,
            Country::NP => &D5,
            Country::NZ => &D4,
            Country::OM => &D3,
            Country::PA => &D4,
            Country::PE => &D5,
            Country::PF => &PF,
            Country::PG => &D3,
            Country::PH => &D4,
            Country::PK => &D5,
            Country::PL => &PL,
            Country::PM => &PM,
            Country::PN => &PN,
            Country::PR => &PR,
            Country::PS => &D3,
            Country::PT => &PT,
            Country::PW => &PW,
            Country::PY => &D4,
            Country::RE => &RE,
            Country::RO => &D6,
            Country::RS => &D5,
            Country::RU => &D6,
            Country::SA => &US_ZIP,
            Country::SD => &D5,
            Country::SE => &SE,
            Country::SG => &D6,
            Country::SH => &SH,
            Country::SI => &SI,
            Country::SJ => &SJ,
            Country::SK => &SK,
            Country::SM => &SM,
            Country::SN => &D5,
            Country::SO => &SO,
            Country::SV => &D4,
            Country::SZ => &SZ,
            Country::TC => &TC,
            Country::TH => &N5,
            Country::TJ => &D6,
            Country::TM => &D6,
            Country::TN => &D4,
            Country::TR => &TR,
            Country::TT => &D6,
            Country::TW => &TW,
            Country::TZ => &D5,
            Country::UA => &D5,
            Country::US => &US_ZIP,
            Country::UY => &D5,
            Country::UZ => &D6,
            Country::VA => &VA,
            Country::VC => &VC,
            Country::VE => &D4,
            Country::VG => &VG,
            Country::VI => &VI,
            Country::VN => &D6,
            Country::WF => &WF,
            Country::WS => &WS,
            Country::YT => &YT,
            Country::ZA => &D4,
            Country::ZM => &D5,
        };
        Grammar::Rule(rule)
    }

    /// A normalized code the built-in strategy accepts.
    pub fn sample_code(self) -> String {
        match self.grammar() {
            Grammar::Rule(rule) => rule.sample(),
            Grammar::UnitedKingdom => "SW1A1AA".to_string(),
        }
    }
}
