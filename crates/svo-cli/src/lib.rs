//! # svo-cli — Command-Line Front End for svo-core
//!
//! Provides the `svo` command-line interface over the single value objects
//! in `svo-core`.
//!
//! ## Subcommands
//!
//! - `svo validate`: Check a value of a given kind.
//! - `svo format`: Print the canonical form of a value.
//! - `svo countries`: List the countries whose format accepts a postal code.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `svo-core`; no validation logic lives here.
//!
//! ```bash
//! svo validate iban "NL20 INGB 0001 2345 67"
//! svo validate postal-code H0H0H0 --country CA --json
//! svo --culture nl-NL format percentage "17,51%"
//! svo countries 1000
//! ```

pub mod countries;
pub mod format;
pub mod kind;
pub mod validate;

use anyhow::{anyhow, Result};
use svo_core::prelude::*;

/// Resolve a culture name such as `nl-NL`.
///
/// `None` and the empty string select the invariant culture.
pub fn resolve_culture(name: Option<&str>) -> Result<&'static Culture> {
    let name = name.unwrap_or_default();
    Culture::by_name(name).ok_or_else(|| {
        let known = Culture::all()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        anyhow!("unknown culture '{name}'. Known: {known}")
    })
}

/// Resolve a `--country` argument (alpha-2, alpha-3 or English name).
pub fn resolve_country(input: &str) -> Result<Country> {
    let country = Country::parse(input)?;
    if country.is_empty_or_unknown() {
        return Err(anyhow!("--country must name a country, got '{input}'"));
    }
    Ok(country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_culture_default_is_invariant() {
        assert_eq!(resolve_culture(None).unwrap(), &Culture::INVARIANT);
        assert_eq!(resolve_culture(Some("nl-NL")).unwrap(), &Culture::NL_NL);
    }

    #[test]
    fn resolve_culture_unknown_lists_known() {
        let err = resolve_culture(Some("xx-YY")).unwrap_err().to_string();
        assert!(err.contains("xx-YY"));
        assert!(err.contains("nl-NL"));
    }

    #[test]
    fn resolve_country_forms() {
        assert_eq!(resolve_country("ca").unwrap(), Country::CA);
        assert_eq!(resolve_country("CAN").unwrap(), Country::CA);
        assert!(resolve_country("?").is_err());
        assert!(resolve_country("Atlantis").is_err());
    }
}
