//! # BIC — Bank Identifier Code (ISO 9362)
//!
//! Layout of a normalized BIC:
//!
//! ```text
//! AEGO NL 2U XXX
//! │    │  │  └── branch (optional, 3 alphanumerics)
//! │    │  └───── location (letter or digit 2-9, then anything but O)
//! │    └──────── country (must exist in the country table)
//! └───────────── business party (4 letters)
//! ```
//!
//! Equality is over the full normalized string: `AEGONL2U` and
//! `AEGONL2UXXX` are different values.

use std::fmt;

use crate::country::Country;
use crate::culture::{Culture, UNKNOWN_MARKER};
use crate::error::SvoKind;
use crate::normalize::Normalizer;
use crate::sentinel::SvoState;
use crate::svo::impl_svo;
use crate::verdict::{RejectReason, ValidationVerdict};

/// A Bank Identifier Code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bic(SvoState<String>);

impl_svo!(Bic, String, SvoKind::Bic);

fn location_first(c: char) -> bool {
    c.is_ascii_uppercase() || ('2'..='9').contains(&c)
}

fn location_second(c: char) -> bool {
    (c.is_ascii_uppercase() && c != 'O') || c.is_ascii_digit()
}

fn check(bic: &str) -> Result<(), RejectReason> {
    if !bic.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
        return Err(RejectReason::Character);
    }
    if bic.len() != 8 && bic.len() != 11 {
        return Err(RejectReason::Length);
    }
    let bytes = bic.as_bytes();
    if !bytes[..6].iter().all(u8::is_ascii_uppercase) {
        return Err(RejectReason::Pattern);
    }
    if !location_first(char::from(bytes[6])) || !location_second(char::from(bytes[7])) {
        return Err(RejectReason::Pattern);
    }
    if Country::from_alpha2(&bic[4..6]).is_none() {
        return Err(RejectReason::UnknownCountry);
    }
    Ok(())
}

/// Diagnostic verdict for raw `input`.
pub fn verdict(input: &str) -> ValidationVerdict {
    check(&Normalizer::BIC.apply(input.trim())).into()
}

impl Bic {
    fn normalize_candidate(candidate: &str, _culture: &Culture) -> Result<String, RejectReason> {
        let normalized = Normalizer::BIC.apply(candidate);
        check(&normalized)?;
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

    fn part(&self, from: usize, to: usize) -> Option<&str> {
        self.0.value().and_then(|s| s.get(from..to))
    }

    /// Institution code, e.g. `AEGO`.
    pub fn business_party(&self) -> Option<&str> {
        self.part(0, 4)
    }

    /// The country of the institution.
    ///
    /// Sentinels map to the matching [`Country`] sentinel.
    pub fn country(&self) -> Country {
        match &self.0 {
            SvoState::Empty => Country::EMPTY,
            SvoState::Unknown => Country::UNKNOWN,
            SvoState::Value(s) => s
                .get(4..6)
                .and_then(Country::from_alpha2)
                .unwrap_or(Country::UNKNOWN),
        }
    }

    /// Location code, e.g. `2U`.
    pub fn location(&self) -> Option<&str> {
        self.part(6, 8)
    }

    /// Branch code. `None` for an 8-character BIC.
    pub fn branch(&self) -> Option<&str> {
        self.part(8, 11)
    }

    /// A location code ending in `0` marks a test BIC.
    pub fn is_test(&self) -> bool {
        self.location().is_some_and(|l| l.ends_with('0'))
    }

    /// Number of characters: 0 for sentinels, otherwise 8 or 11.
    pub fn length(&self) -> usize {
        self.0.value().map_or(0, String::len)
    }
}

impl fmt::Display for Bic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
