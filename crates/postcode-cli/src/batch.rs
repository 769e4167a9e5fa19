//! # Batch Validation
//!
//! `postcode batch [PATH]` reads `COUNTRY,CODE` lines from a file or stdin
//! and writes one JSON record per input line:
//!
//! ```text
//! US,90210 → {"line":1,"country":"US","code":"90210","valid":true,"formatted":"90210"}
//! XX,12345 → {"line":2,"country":"XX","code":"12345","valid":false,"error":"unknown_country"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A bad line never
//! stops the batch; the exit code is `1` if any record is invalid.

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use postcode_core::Registry;
use serde::Serialize;

use crate::{EXIT_NEGATIVE, EXIT_OK};

/// Arguments for `postcode batch`.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input file of `COUNTRY,CODE` lines. Reads stdin when omitted or `-`.
    pub path: Option<PathBuf>,
}

/// Outcome for one input line.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BatchRecord {
    pub line: usize,
    pub country: String,
    pub code: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchRecord {
    fn malformed(line: usize, text: &str) -> Self {
        Self {
            line,
            country: String::new(),
            code: text.to_string(),
            valid: false,
            formatted: None,
            error: Some("malformed_line".to_string()),
        }
    }

    fn check(registry: &Registry, line: usize, text: &str) -> Self {
        let Some((country, code)) = text.split_once(',') else {
            return Self::malformed(line, text);
        };
        let (country, code) = (country.trim(), code.trim());
        let (formatted, error) = match registry.format_or_none(code, country) {
            Ok(Some(formatted)) => (Some(formatted), None),
            Ok(None) => (None, Some("invalid_code".to_string())),
            Err(err) => (None, Some(err.error_code().to_string())),
        };
        Self {
            line,
            country: country.to_ascii_uppercase(),
            code: code.to_string(),
            valid: formatted.is_some(),
            formatted,
            error,
        }
    }
}

/// Check every line of `input`, writing one JSON record per checked line.
///
/// A line that is not valid UTF-8 is reported as `malformed_line`.
pub fn check_lines(
    registry: &Registry,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> Result<u8> {
    let (mut total, mut invalid) = (0usize, 0usize);
    let mut buf = Vec::new();
    let mut line = 0usize;
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("failed to read line {}", line + 1))?;
        if read == 0 {
            break;
        }
        line += 1;
        let record = match std::str::from_utf8(&buf) {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() || text.starts_with('#') {
                    continue;
                }
                BatchRecord::check(registry, line, text)
            }
            Err(_) => BatchRecord::malformed(line, String::from_utf8_lossy(&buf).trim()),
        };
        if !record.valid {
            tracing::debug!(line = record.line, error = ?record.error, "rejected batch line");
            invalid += 1;
        }
        total += 1;
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    }
    tracing::info!(total, invalid, "batch complete");
    Ok(if invalid == 0 { EXIT_OK } else { EXIT_NEGATIVE })
}

/// Execute `postcode batch`.
pub fn run_batch(args: &BatchArgs, registry: &Registry, out: &mut impl Write) -> Result<u8> {
    match args.path.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open batch input: {}", path.display()))?;
            check_lines(registry, BufReader::new(file), out)
        }
        _ => check_lines(registry, std::io::stdin().lock(), out),
    }
}
