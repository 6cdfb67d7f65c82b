//! # Format Subcommand
//!
//! `svo format <kind> <value>` prints the canonical form of a value.

use anyhow::Result;
use clap::Args;

use svo_core::Culture;

use crate::kind::Kind;
use crate::resolve_country;

/// Arguments for the format subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Kind of value.
    #[arg(value_enum)]
    pub kind: Kind,

    /// The value to format.
    pub value: String,

    /// Country whose postal code layout to use.
    #[arg(long)]
    pub country: Option<String>,
}

/// Canonical form of `args.value`.
pub fn render(args: &FormatArgs, culture: &Culture) -> Result<String> {
    let country = args.country.as_deref().map(resolve_country).transpose()?;
    Ok(args.kind.canonical(&args.value, culture, country.as_ref())?)
}

/// Execute the format subcommand.
pub fn run_format(args: &FormatArgs, culture: &Culture) -> Result<u8> {
    println!("{}", render(args, culture)?);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: Kind, value: &str, country: Option<&str>) -> FormatArgs {
        FormatArgs {
            kind,
            value: value.to_string(),
            country: country.map(str::to_string),
        }
    }

    #[test]
    fn formats_postal_code_for_country() {
        let out = render(&args(Kind::PostalCode, "765", Some("AD")), &Culture::INVARIANT).unwrap();
        assert_eq!(out, "AD-765");
    }

    #[test]
    fn formats_percentage_in_culture() {
        let out = render(&args(Kind::Percentage, "%17,51", None), &Culture::FR_FR).unwrap();
        assert_eq!(out, "17,51 %");
    }

    #[test]
    fn invalid_value_is_an_error() {
        let err = render(&args(Kind::Iban, "NL00", None), &Culture::INVARIANT).unwrap_err();
        assert_eq!(err.to_string(), "Not a valid IBAN: \"NL00\"");
    }
}
