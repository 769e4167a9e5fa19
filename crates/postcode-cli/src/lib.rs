//! # postcode-cli: Postal Code Command-Line Interface
//!
//! Provides the `postcode` command: single-code checks, catalog listing and
//! batch validation of CSV input, on top of `postcode-core`.
//!
//! ## Subcommands
//!
//! - `postcode validate`: Check one code against a country.
//! - `postcode format`: Print the canonical rendering of one code.
//! - `postcode hint`: Describe the format a country expects.
//! - `postcode has-postal-code`: Whether a country uses postal codes.
//! - `postcode countries`: List every supported country.
//! - `postcode batch`: Check `COUNTRY,CODE` lines from a file or stdin.
//!
//! ```bash
//! postcode validate "SW1A 1AA" --country GB
//! postcode format 123456789 -c us
//! postcode --config overrides.yaml batch addresses.csv
//! ```
//!
//! ## Exit Codes
//!
//! `0` on success, `1` when the answer is negative (invalid code, no postal
//! system), `2` on operational errors such as an unknown country or an
//! unreadable configuration file.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live in this library.
//! - Handlers write to a caller-supplied `Write` and take the registry as a
//!   parameter, so they can be tested without touching process state.

pub mod batch;
pub mod check;
pub mod countries;
pub mod settings;

/// The command succeeded with a positive answer.
pub const EXIT_OK: u8 = 0;
/// The command ran, but the answer is negative.
pub const EXIT_NEGATIVE: u8 = 1;
/// The command could not run.
pub const EXIT_ERROR: u8 = 2;
