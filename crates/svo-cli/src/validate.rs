//! # Validate Subcommand
//!
//! `svo validate <kind> <value>` prints `valid` or `invalid` and exits
//! with status 1 for invalid input. `--json` prints a report instead.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use svo_core::Culture;

use crate::kind::Kind;
use crate::resolve_country;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Kind of value.
    #[arg(value_enum)]
    pub kind: Kind,

    /// The value to check.
    pub value: String,

    /// Country a postal code must be valid in.
    #[arg(long)]
    pub country: Option<String>,

    /// Print a JSON report.
    #[arg(long)]
    pub json: bool,
}

/// Outcome of one validation.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Report {
    /// Kind name.
    pub kind: &'static str,
    /// The input as given.
    pub input: String,
    /// Whether the input is valid.
    pub valid: bool,
    /// Canonical form of a valid input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    /// Why an invalid input was rejected, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Build the report for `args`.
pub fn check(args: &ValidateArgs, culture: &Culture) -> Result<Report> {
    let country = args.country.as_deref().map(resolve_country).transpose()?;
    if country.is_some() && args.kind != Kind::PostalCode {
        tracing::warn!("--country only applies to postal codes");
    }
    let verdict = args.kind.verdict(&args.value, culture, country.as_ref());
    let canonical = verdict
        .is_valid
        .then(|| args.kind.canonical(&args.value, culture, country.as_ref()).ok())
        .flatten();
    tracing::debug!(kind = %args.kind.svo_kind(), valid = verdict.is_valid, "validated");
    Ok(Report {
        kind: args.kind.svo_kind().as_str(),
        input: args.value.clone(),
        valid: verdict.is_valid,
        canonical,
        reason: verdict.reason.map(|r| r.to_string()),
    })
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, culture: &Culture) -> Result<u8> {
    let report = check(args, culture)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.valid {
        println!("valid");
    } else {
        match &report.reason {
            Some(reason) => println!("invalid: {reason}"),
            None => println!("invalid"),
        }
    }
    Ok(if report.valid { 0 } else { 1 })
}
