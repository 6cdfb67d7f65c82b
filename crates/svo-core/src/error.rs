//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types raised by the single value objects. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - [`FormatError`] is raised by `parse` for a non-empty candidate that is
//!   not the unknown marker and fails validation. It carries the offending
//!   input. `try_parse` and `is_valid` swallow it into `None`/`false`.
//! - [`RangeError`] is raised by numeric `create` constructors.
//! - [`ArgumentError`] is raised when comparing an SVO with a value of a
//!   different type.
//! - [`SvoError`] unifies all of the above for callers that handle them
//!   together.

use std::fmt;

use thiserror::Error;

/// The kind of single value object, used to name the type in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SvoKind {
    /// International Bank Account Number.
    Iban,
    /// Bank Identifier Code (ISO 9362).
    Bic,
    /// ISO 3166-1 country.
    Country,
    /// Postal code.
    PostalCode,
    /// Percentage.
    Percentage,
    /// House number.
    HouseNumber,
}

impl SvoKind {
    /// Human-readable name of the kind, as used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iban => "IBAN",
            Self::Bic => "BIC",
            Self::Country => "country",
            Self::PostalCode => "postal code",
            Self::Percentage => "percentage",
            Self::HouseNumber => "house number",
        }
    }
}

impl fmt::Display for SvoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error type for single value objects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SvoError {
    /// Input could not be parsed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Numeric input outside the domain of the type.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Comparison with an incompatible type.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// JSON token of a type the SVO cannot be deserialized from.
    #[error("JSON deserialization from {from} is not supported for {kind}")]
    UnsupportedJson {
        /// The SVO kind being deserialized.
        kind: SvoKind,
        /// The JSON token kind that was encountered.
        from: &'static str,
    },
}

/// A candidate string failed normalization or validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Not a valid {kind}: \"{input}\"")]
pub struct FormatError {
    /// The SVO kind that rejected the input.
    pub kind: SvoKind,
    /// The raw input, as supplied by the caller.
    pub input: String,
}

impl FormatError {
    pub(crate) fn new(kind: SvoKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}

/// A numeric constructor was called with a value outside the domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{value} is out of range for {kind}")]
pub struct RangeError {
    /// The SVO kind that rejected the value.
    pub kind: SvoKind,
    /// The rejected value, rendered as text.
    pub value: String,
}

/// An SVO was compared with a value of another type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Argument must be a {kind}.")]
pub struct ArgumentError {
    /// The SVO kind the argument was required to be.
    pub kind: SvoKind,
}
