//! # svo CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use svo_cli::countries::{run_countries, CountriesArgs};
use svo_cli::format::{run_format, FormatArgs};
use svo_cli::resolve_culture;
use svo_cli::validate::{run_validate, ValidateArgs};

/// Validate and format single value objects: IBAN, BIC, country, postal
/// code, percentage and house number.
#[derive(Parser, Debug)]
#[command(name = "svo", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Culture used to read and write numbers, e.g. `nl-NL`.
    #[arg(long, env = "SVO_CULTURE", global = true)]
    culture: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a value is valid.
    Validate(ValidateArgs),

    /// Print the canonical form of a value.
    Format(FormatArgs),

    /// List the countries whose format accepts a postal code.
    Countries(CountriesArgs),
}

fn init_tracing(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json_logs);

    let result = resolve_culture(cli.culture.as_deref()).and_then(|culture| {
        tracing::debug!(%culture, "resolved culture");
        match &cli.command {
            Commands::Validate(args) => run_validate(args, culture),
            Commands::Format(args) => run_format(args, culture),
            Commands::Countries(args) => run_countries(args, culture),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
