//! Value kinds selectable on the command line.

use clap::ValueEnum;

use svo_core::prelude::*;
use svo_core::{bic, iban, percentage, postal, FormatError, SvoKind, ValidationVerdict};

/// A single value object kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// International Bank Account Number.
    Iban,
    /// Bank Identifier Code.
    Bic,
    /// ISO 3166-1 country.
    Country,
    /// Postal code, optionally checked against `--country`.
    PostalCode,
    /// Percentage, read with the `--culture` separators.
    Percentage,
    /// House number.
    HouseNumber,
}

impl Kind {
    /// The library kind, used for display.
    pub fn svo_kind(self) -> SvoKind {
        match self {
            Self::Iban => SvoKind::Iban,
            Self::Bic => SvoKind::Bic,
            Self::Country => SvoKind::Country,
            Self::PostalCode => SvoKind::PostalCode,
            Self::Percentage => SvoKind::Percentage,
            Self::HouseNumber => SvoKind::HouseNumber,
        }
    }

    fn is_valid(self, input: &str, culture: &Culture) -> bool {
        match self {
            Self::Iban => Iban::is_valid_with(input, culture),
            Self::Bic => Bic::is_valid_with(input, culture),
            Self::Country => Country::is_valid_with(input, culture),
            Self::PostalCode => PostalCode::is_valid_with(input, culture),
            Self::Percentage => Percentage::is_valid_with(input, culture),
            Self::HouseNumber => HouseNumber::is_valid_with(input, culture),
        }
    }

    /// Verdict for `input`. A postal code is checked against `country`
    /// when one is given.
    pub fn verdict(
        self,
        input: &str,
        culture: &Culture,
        country: Option<&Country>,
    ) -> ValidationVerdict {
        if let (Self::PostalCode, Some(country)) = (self, country) {
            return match PostalCode::parse_with(input, culture) {
                Ok(code) => code.verdict_for(country),
                Err(_) => postal::verdict(input, country),
            };
        }
        if self.is_valid(input, culture) {
            return ValidationVerdict::VALID;
        }
        let reason = match self {
            Self::Iban => iban::verdict(input).reason,
            Self::Bic => bic::verdict(input).reason,
            Self::Percentage => percentage::verdict(input, culture).reason,
            Self::Country | Self::PostalCode | Self::HouseNumber => None,
        };
        ValidationVerdict {
            is_valid: false,
            reason,
        }
    }

    /// Parse `input` and render its canonical form. A postal code is
    /// rendered the way `country` writes it.
    pub fn canonical(
        self,
        input: &str,
        culture: &Culture,
        country: Option<&Country>,
    ) -> Result<String, FormatError> {
        Ok(match self {
            Self::Iban => Iban::parse_with(input, culture)?.to_string(),
            Self::Bic => Bic::parse_with(input, culture)?.to_string(),
            Self::Country => Country::parse_with(input, culture)?.to_string(),
            Self::PostalCode => {
                let code = PostalCode::parse_with(input, culture)?;
                match country {
                    Some(country) => code.format_for(country),
                    None => code.to_string(),
                }
            }
            Self::Percentage => Percentage::parse_with(input, culture)?.format_with(culture),
            Self::HouseNumber => HouseNumber::parse_with(input, culture)?.to_string(),
        })
    }
}
