//! # Postal Code
//!
//! A [`PostalCode`] stores its normalized form: upper-case, without
//! whitespace or separators. Without a country, a postal code is valid when
//! it has 2 to 10 letters and digits. [`PostalCode::is_valid_for`] checks
//! it against the country format table, and [`PostalCode::format_for`]
//! renders it the way that country writes it.
//!
//! ## Countries without a postal code system
//!
//! A code is never valid for a country that has no postal codes, for an
//! unrecognized country or for an empty/unknown country. A country hint
//! that cannot apply is treated as a mismatch rather than a waiver.

pub mod matcher;
pub mod rules;

use std::fmt;

use crate::country::Country;
use crate::culture::{Culture, UNKNOWN_MARKER};
use crate::error::SvoKind;
use crate::normalize::Normalizer;
use crate::sentinel::SvoState;
use crate::svo::impl_svo;
use crate::verdict::{RejectReason, ValidationVerdict};

/// Shortest generically valid code.
pub const MIN_LENGTH: usize = 2;
/// Longest generically valid code.
pub const MAX_LENGTH: usize = 10;

/// A postal code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostalCode(SvoState<String>);

impl_svo!(PostalCode, String, SvoKind::PostalCode);

impl PostalCode {
    fn normalize_candidate(candidate: &str, _culture: &Culture) -> Result<String, RejectReason> {
        let normalized = Normalizer::POSTAL_CODE.apply(candidate);
        if !normalized
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        {
            return Err(RejectReason::Character);
        }
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&normalized.len()) {
            return Err(RejectReason::Length);
        }
        Ok(normalized)
    }

    /// Normalized form, `""` for Empty and `?` for Unknown.
    pub fn as_str(&self) -> &str {
        match &self.0 {
            SvoState::Empty => "",
            SvoState::Unknown => UNKNOWN_MARKER,
            SvoState::Value(s) => s,
        }
    }

    /// Whether this code is valid in `country`.
    pub fn is_valid_for(&self, country: &Country) -> bool {
        self.verdict_for(country).is_valid
    }

    /// Diagnostic verdict of this code for `country`.
    pub fn verdict_for(&self, country: &Country) -> ValidationVerdict {
        let Some(code) = self.0.value() else {
            return ValidationVerdict::rejected(RejectReason::Sentinel);
        };
        let Some(alpha2) = country.iso_alpha2() else {
            return ValidationVerdict::rejected(RejectReason::UnknownCountry);
        };
        matcher::find(code, alpha2).map(|_| ()).into()
    }

    /// Whether raw `input` is a valid postal code in `country`.
    pub fn is_valid_in(input: &str, country: &Country) -> bool {
        verdict(input, country).is_valid
    }

    /// Render for `country`, inserting its separators.
    ///
    /// When the code does not match the country, the normalized form is
    /// returned unchanged.
    pub fn format_for(&self, country: &Country) -> String {
        let (Some(code), Some(alpha2)) = (self.0.value(), country.iso_alpha2()) else {
            return self.as_str().to_string();
        };
        match matcher::find(code, alpha2) {
            Ok(matched) => matcher::render(code, &matched),
            Err(_) => code.clone(),
        }
    }

    /// Every country in which this code is valid.
    pub fn countries(&self) -> Vec<Country> {
        let Some(code) = self.0.value() else {
            return Vec::new();
        };
        rules::all()
            .iter()
            .filter(|r| matcher::find(code, r.country).is_ok())
            .filter_map(|r| Country::from_alpha2(r.country))
            .collect()
    }
}

/// Diagnostic verdict for raw `input` in `country`.
pub fn verdict(input: &str, country: &Country) -> ValidationVerdict {
    let normalized = Normalizer::POSTAL_CODE.apply(input);
    let Some(alpha2) = country.iso_alpha2() else {
        return ValidationVerdict::rejected(RejectReason::UnknownCountry);
    };
    matcher::find(&normalized, alpha2).map(|_| ()).into()
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
