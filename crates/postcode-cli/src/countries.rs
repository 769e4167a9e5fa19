//! `postcode countries`: list every supported country with its format.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use postcode_core::Registry;
use serde::Serialize;

use crate::EXIT_OK;

/// Arguments for `postcode countries`.
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Print a JSON array instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// One row of the listing.
#[derive(Debug, Serialize)]
pub struct CountryEntry {
    pub code: String,
    pub name: String,
    pub hint: String,
    /// A formatted code the country accepts. Absent for overrides, which
    /// have no known sample.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<String>,
    pub overridden: bool,
}

/// Collect the listing from `registry`, sorted by country code.
pub fn list_countries(registry: &Registry) -> Result<Vec<CountryEntry>> {
    let overridden = registry.overridden();
    registry
        .countries()
        .into_iter()
        .map(|code| -> Result<CountryEntry> {
            let builtin = code.builtin();
            let is_override = overridden.binary_search(&code).is_ok();
            let sample = match builtin {
                Some(country) if !is_override => {
                    registry.format_or_none(&country.sample_code(), code.as_str())?
                }
                _ => None,
            };
            Ok(CountryEntry {
                name: builtin.map_or_else(|| code.to_string(), |c| c.name().to_string()),
                hint: registry.hint(code.as_str())?,
                code: code.to_string(),
                sample,
                overridden: is_override,
            })
        })
        .collect()
}

/// Execute `postcode countries`.
pub fn run_countries(
    args: &CountriesArgs,
    registry: &Registry,
    out: &mut impl Write,
) -> Result<u8> {
    let entries = list_countries(registry)?;
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(EXIT_OK);
    }
    for entry in &entries {
        let marker = if entry.overridden { "*" } else { " " };
        writeln!(
            out,
            "{marker} {:<3} {:<32} {:<12} {}",
            entry.code,
            entry.name,
            entry.sample.as_deref().unwrap_or("-"),
            entry.hint
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Total: {} countries", entries.len())?;
    Ok(EXIT_OK)
}
