//! Validity verdicts with a diagnostic reason.
//!
//! The reason is for tests and debug logging only; public validation APIs
//! return a plain `bool` or a [`crate::FormatError`].

use std::fmt;

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// A character outside the allowed set.
    Character,
    /// Length not permitted.
    Length,
    /// Characters do not match the required class at some position.
    Pattern,
    /// A required prefix is missing.
    Prefix,
    /// Country code not in the lookup table.
    UnknownCountry,
    /// The country has no postal code system.
    NoPostalCodes,
    /// IBAN check digits outside `02..=98`.
    CheckDigits,
    /// MOD 97-10 checksum failed.
    Checksum,
    /// Percent marker misplaced or repeated.
    Marker,
    /// Malformed number.
    Number,
    /// Number outside the domain of the type.
    Range,
    /// The value is Empty or Unknown, so there is nothing to check.
    Sentinel,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Character => "invalid character",
            Self::Length => "invalid length",
            Self::Pattern => "pattern mismatch",
            Self::Prefix => "missing prefix",
            Self::UnknownCountry => "unknown country",
            Self::NoPostalCodes => "country has no postal codes",
            Self::CheckDigits => "invalid check digits",
            Self::Checksum => "checksum mismatch",
            Self::Marker => "misplaced marker",
            Self::Number => "malformed number",
            Self::Range => "out of range",
            Self::Sentinel => "empty or unknown value",
        };
        f.write_str(s)
    }
}

/// Structured validity verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationVerdict {
    /// Whether the candidate is valid.
    pub is_valid: bool,
    /// Why it was rejected, when it was.
    pub reason: Option<RejectReason>,
}

impl ValidationVerdict {
    /// A passing verdict.
    pub const VALID: ValidationVerdict = ValidationVerdict {
        is_valid: true,
        reason: None,
    };

    /// A failing verdict.
    pub fn rejected(reason: RejectReason) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason),
        }
    }
}

impl From<Result<(), RejectReason>> for ValidationVerdict {
    fn from(result: Result<(), RejectReason>) -> Self {
        match result {
            Ok(()) => Self::VALID,
            Err(reason) => Self::rejected(reason),
        }
    }
}
