//! # Countries Subcommand
//!
//! `svo countries <postal-code>` lists every country whose postal code
//! format accepts the code.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use svo_core::prelude::*;

/// Arguments for the countries subcommand.
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// The postal code to look up.
    pub postal_code: String,

    /// Print a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// One matching country.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CountryMatch {
    /// ISO 3166-1 alpha-2.
    pub code: &'static str,
    /// English short name.
    pub name: &'static str,
    /// The code as written in that country.
    pub formatted: String,
}

/// Countries accepting `postal_code`.
pub fn matches(postal_code: &str, culture: &Culture) -> Result<Vec<CountryMatch>> {
    let code = PostalCode::parse_with(postal_code, culture)?;
    Ok(code
        .countries()
        .into_iter()
        .filter_map(|country| {
            Some(CountryMatch {
                code: country.iso_alpha2()?,
                name: country.english_name()?,
                formatted: code.format_for(&country),
            })
        })
        .collect())
}

/// Execute the countries subcommand.
pub fn run_countries(args: &CountriesArgs, culture: &Culture) -> Result<u8> {
    let found = matches(&args.postal_code, culture)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        for m in &found {
            println!("  {:<4} {:<12} {}", m.code, m.formatted, m.name);
        }
        println!();
        println!("Total: {} countries", found.len());
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canadian_code_matches_canada_only() {
        let found = matches("H0H 0H0", &Culture::INVARIANT).unwrap();
        assert_eq!(
            found,
            vec![CountryMatch {
                code: "CA",
                name: "Canada",
                formatted: "H0H 0H0".to_string(),
            }]
        );
    }

    #[test]
    fn four_digits_match_many() {
        let found = matches("1000", &Culture::INVARIANT).unwrap();
        assert!(found.iter().any(|m| m.code == "BE"));
        assert!(found.iter().all(|m| m.code != "AO"));
    }

    #[test]
    fn sentinel_matches_nothing() {
        assert!(matches("?", &Culture::INVARIANT).unwrap().is_empty());
    }

    #[test]
    fn malformed_code_is_an_error() {
        assert!(matches("1", &Culture::INVARIANT).is_err());
    }
}
