//! # Grammar Building Blocks
//!
//! Nearly every country's postal code grammar is one of a handful of
//! shapes: a fixed run of digits, a digit range, digits with a separator
//! inserted, per-position character classes, an optional country prefix,
//! a single legal value, or a whitelist of leading fragments. [`Rule`] is
//! that closed set. The catalog describes each country as a `static` rule
//! and [`RuleStrategy`](crate::strategy::RuleStrategy) evaluates it.
//!
//! Rules operate on normalized codes only. Anything outside ASCII letters
//! and digits is rejected by every block.

/// Character class for a single position of a [`Rule::Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// `0-9`.
    Digit,
    /// `1-9`.
    NonZero,
    /// `A-Z`.
    Letter,
    /// `A-Z` or `0-9`.
    Alnum,
    /// Any of the listed characters.
    Among(&'static str),
}

impl Class {
    fn admits(self, b: u8) -> bool {
        match self {
            Self::Digit => b.is_ascii_digit(),
            Self::NonZero => matches!(b, b'1'..=b'9'),
            Self::Letter => b.is_ascii_uppercase(),
            Self::Alnum => b.is_ascii_digit() || b.is_ascii_uppercase(),
            Self::Among(set) => b.is_ascii_alphanumeric() && set.as_bytes().contains(&b),
        }
    }

    /// Placeholder used in hints: `9` for digits, `A` for letters, `X` for
    /// either. A single-character set is shown literally.
    fn mask(self) -> char {
        match self {
            Self::Digit | Self::NonZero => '9',
            Self::Letter => 'A',
            Self::Alnum => 'X',
            Self::Among(set) => {
                let bytes = set.as_bytes();
                match bytes {
                    [only] => char::from(*only),
                    _ if bytes.iter().all(u8::is_ascii_digit) => '9',
                    _ if bytes.iter().all(u8::is_ascii_uppercase) => 'A',
                    _ => 'X',
                }
            }
        }
    }

    fn sample(self) -> char {
        match self {
            Self::Digit => '0',
            Self::NonZero => '1',
            Self::Letter | Self::Alnum => 'A',
            Self::Among(set) => set.chars().next().unwrap_or('0'),
        }
    }
}

/// Whether a [`Rule::Prefixed`] country prefix appears in formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    /// Always render the prefix, whether or not the input had it.
    Always,
    /// Render the prefix only if the input carried it.
    IfPresent,
    /// Strip the prefix from output.
    Never,
}

/// One country's postal code grammar.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Exactly `len` digits, optionally with a non-zero first digit.
    Digits { len: usize, nonzero_lead: bool },
    /// Digits between `min` and `max` inclusive. Both bounds have the
    /// code's length, so string comparison orders them numerically.
    DigitRange { min: &'static str, max: &'static str },
    /// Exactly `len` digits, rendered with `sep` inserted at offset `at`.
    SplitDigits { len: usize, at: usize, sep: &'static str },
    /// One class per position, optionally rendered with `sep` at an offset.
    Shape {
        slots: &'static [Class],
        split: Option<(usize, &'static str)>,
    },
    /// `inner`, optionally preceded on input by a country prefix.
    Prefixed {
        prefix: &'static str,
        sep: &'static str,
        keep: Keep,
        inner: &'static Rule,
    },
    /// The single legal code for a territory.
    Single {
        code: &'static str,
        display: &'static str,
    },
    /// `inner`, restricted to codes starting with one of `allowed`.
    Leading {
        allowed: &'static [&'static str],
        inner: &'static Rule,
    },
    /// The first alternative that matches wins.
    AnyOf(&'static [Rule]),
}

fn is_digits(code: &str, len: usize) -> bool {
    code.len() == len && code.bytes().all(|b| b.is_ascii_digit())
}

fn split_at(code: &str, at: usize, sep: &str) -> String {
    format!("{}{sep}{}", &code[..at], &code[at..])
}

impl Rule {
    /// Match a normalized code, returning its canonical rendering.
    ///
    /// `validate` and `format` are both derived from this single function,
    /// so they cannot disagree about what is valid.
    pub fn attempt(&self, code: &str) -> Option<String> {
        match *self {
            Self::Digits { len, nonzero_lead } => {
                let ok = is_digits(code, len) && !(nonzero_lead && code.starts_with('0'));
                ok.then(|| code.to_string())
            }
            Self::DigitRange { min, max } => {
                let ok = is_digits(code, min.len()) && min <= code && code <= max;
                ok.then(|| code.to_string())
            }
            Self::SplitDigits { len, at, sep } => {
                is_digits(code, len).then(|| split_at(code, at, sep))
            }
            Self::Shape { slots, split } => {
                let bytes = code.as_bytes();
                if bytes.len() != slots.len()
                    || !slots.iter().zip(bytes).all(|(class, b)| class.admits(*b))
                {
                    return None;
                }
                Some(match split {
                    Some((at, sep)) => split_at(code, at, sep),
                    None => code.to_string(),
                })
            }
            Self::Prefixed {
                prefix,
                sep,
                keep,
                inner,
            } => {
                let (present, rest) = match code.strip_prefix(prefix) {
                    Some(rest) => (true, rest),
                    None => (false, code),
                };
                let body = inner.attempt(rest)?;
                Some(match keep {
                    Keep::Always => format!("{prefix}{sep}{body}"),
                    Keep::IfPresent if present => format!("{prefix}{sep}{body}"),
                    Keep::IfPresent | Keep::Never => body,
                })
            }
            Self::Single {
                code: only,
                display,
            } => (code == only).then(|| display.to_string()),
            Self::Leading { allowed, inner } => {
                if !allowed.iter().any(|fragment| code.starts_with(fragment)) {
                    return None;
                }
                inner.attempt(code)
            }
            Self::AnyOf(rules) => rules.iter().find_map(|rule| rule.attempt(code)),
        }
    }

    /// Human-readable alternatives accepted by this rule.
    pub fn describe(&self) -> Vec<String> {
        match *self {
            Self::Digits { len, nonzero_lead } => {
                let mask = "9".repeat(len);
                if nonzero_lead {
                    vec![format!("{mask} not starting with 0")]
                } else {
                    vec![mask]
                }
            }
            Self::DigitRange { min, max } => vec![format!("{min} to {max}")],
            Self::SplitDigits { len, at, sep } => vec![split_at(&"9".repeat(len), at, sep)],
            Self::Shape { slots, split } => {
                let mask: String = slots.iter().map(|c| c.mask()).collect();
                match split {
                    Some((at, sep)) => vec![split_at(&mask, at, sep)],
                    None => vec![mask],
                }
            }
            Self::Prefixed {
                prefix,
                sep,
                keep,
                inner,
            } => inner
                .describe()
                .into_iter()
                .flat_map(|alt| match keep {
                    Keep::Always => vec![format!("{prefix}{sep}{alt}")],
                    Keep::IfPresent => vec![alt.clone(), format!("{prefix}{sep}{alt}")],
                    Keep::Never => vec![alt],
                })
                .collect(),
            Self::Single { display, .. } => vec![display.to_string()],
            Self::Leading { allowed, inner } => {
                let fragments = join_alternatives(allowed.iter().map(|s| s.to_string()).collect());
                inner
                    .describe()
                    .into_iter()
                    .map(|alt| format!("{alt} starting with {fragments}"))
                    .collect()
            }
            Self::AnyOf(rules) => rules.iter().flat_map(Rule::describe).collect(),
        }
    }

    /// A normalized code this rule accepts.
    pub fn sample(&self) -> String {
        match *self {
            Self::Digits { len, nonzero_lead } => {
                if nonzero_lead && len > 0 {
                    format!("1{}", "0".repeat(len - 1))
                } else {
                    "0".repeat(len)
                }
            }
            Self::DigitRange { min, .. } => min.to_string(),
            Self::SplitDigits { len, .. } => "0".repeat(len),
            Self::Shape { slots, .. } => slots.iter().map(|c| c.sample()).collect(),
            Self::Prefixed { inner, .. } => inner.sample(),
            Self::Single { code, .. } => code.to_string(),
            Self::Leading { allowed, inner } => {
                let base = inner.sample();
                match allowed.first() {
                    Some(fragment) if base.len() >= fragment.len() => {
                        format!("{fragment}{}", &base[fragment.len()..])
                    }
                    Some(fragment) => fragment.to_string(),
                    None => base,
                }
            }
            Self::AnyOf(rules) => rules.first().map(Rule::sample).unwrap_or_default(),
        }
    }
}

/// `a`, `a or b`, `a, b or c`.
pub(crate) fn join_alternatives(mut alts: Vec<String>) -> String {
    match alts.len() {
        0 => String::new(),
        1 => alts.remove(0),
        _ => {
            let last = alts.pop().unwrap_or_default();
            format!("{} or {last}", alts.join(", "))
        }
    }
}
