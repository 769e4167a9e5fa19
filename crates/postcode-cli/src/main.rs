//! # postcode CLI entry point
//!
//! Parses command-line arguments, loads override configuration, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use postcode_cli::batch::{run_batch, BatchArgs};
use postcode_cli::check::{
    run_format, run_has_postal_code, run_hint, run_validate, FormatArgs, HasPostalCodeArgs,
    HintArgs, ValidateArgs,
};
use postcode_cli::countries::{run_countries, CountriesArgs};
use postcode_cli::settings::configure;
use postcode_cli::EXIT_ERROR;

/// Postal code validation and formatting.
///
/// Checks postal/ZIP codes against the format of their country and prints
/// them in canonical form.
#[derive(Parser, Debug)]
#[command(name = "postcode", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// YAML file of per-country overrides.
    #[arg(long, global = true, env = "POSTCODE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a code is valid for a country.
    Validate(ValidateArgs),

    /// Print the canonical rendering of a code.
    Format(FormatArgs),

    /// Describe the format a country expects.
    Hint(HintArgs),

    /// Whether a country uses postal codes at all.
    HasPostalCode(HasPostalCodeArgs),

    /// List every supported country.
    Countries(CountriesArgs),

    /// Check COUNTRY,CODE lines from a file or stdin.
    Batch(BatchArgs),
}

fn init_tracing(verbose: u8, json: bool) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!("postcode CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let registry = postcode_core::registry();
    if let Err(e) = configure(registry, cli.config.as_deref()) {
        tracing::error!("{e:#}");
        return ExitCode::from(EXIT_ERROR);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, registry, &mut out),
        Commands::Format(args) => run_format(args, registry, &mut out),
        Commands::Hint(args) => run_hint(args, registry, &mut out),
        Commands::HasPostalCode(args) => run_has_postal_code(args, &mut out),
        Commands::Countries(args) => run_countries(args, registry, &mut out),
        Commands::Batch(args) => run_batch(args, registry, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_validate() {
        let cli =
            Cli::try_parse_from(["postcode", "validate", "SW1A 1AA", "--country", "GB"]).unwrap();
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.code, "SW1A 1AA");
                assert_eq!(args.country, "GB");
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_validate_requires_country() {
        assert!(Cli::try_parse_from(["postcode", "validate", "90210"]).is_err());
    }

    #[test]
    fn cli_parse_format_short_country() {
        let cli =
            Cli::try_parse_from(["postcode", "format", "123456789", "-c", "us", "--or-none"])
                .unwrap();
        match cli.command {
            Commands::Format(args) => {
                assert_eq!(args.country, "us");
                assert!(args.or_none);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_hint() {
        let cli = Cli::try_parse_from(["postcode", "hint", "gb"]).unwrap();
        assert!(matches!(cli.command, Commands::Hint(ref args) if args.country == "gb"));
    }

    #[test]
    fn cli_parse_has_postal_code() {
        let cli = Cli::try_parse_from(["postcode", "has-postal-code", "HK"]).unwrap();
        assert!(matches!(cli.command, Commands::HasPostalCode(_)));
    }

    #[test]
    fn cli_parse_countries_json() {
        let cli = Cli::try_parse_from(["postcode", "countries", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Countries(ref args) if args.json));
    }

    #[test]
    fn cli_parse_batch_with_and_without_path() {
        let cli = Cli::try_parse_from(["postcode", "batch", "codes.csv"]).unwrap();
        let expected = Some(PathBuf::from("codes.csv"));
        assert!(matches!(cli.command, Commands::Batch(ref args) if args.path == expected));
        let cli = Cli::try_parse_from(["postcode", "batch"]).unwrap();
        assert!(matches!(cli.command, Commands::Batch(ref args) if args.path.is_none()));
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["postcode", "countries"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli1 = Cli::try_parse_from(["postcode", "-v", "countries"]).unwrap();
        assert_eq!(cli1.verbose, 1);

        let cli3 = Cli::try_parse_from(["postcode", "countries", "-vvv"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_config_option() {
        let cli =
            Cli::try_parse_from(["postcode", "--config", "overrides.yaml", "hint", "GB"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("overrides.yaml")));
    }

    #[test]
    fn cli_parse_log_json() {
        let cli = Cli::try_parse_from(["postcode", "--log-json", "countries"]).unwrap();
        assert!(cli.log_json);
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["postcode"]).is_err());
    }

    #[test]
    fn cli_parse_invalid_subcommand_errors() {
        assert!(Cli::try_parse_from(["postcode", "nonexistent"]).is_err());
    }
}
