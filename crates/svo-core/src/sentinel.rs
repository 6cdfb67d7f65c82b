//! # Sentinel Model
//!
//! Every single value object is in one of three states: [`SvoState::Empty`]
//! (no value supplied), [`SvoState::Unknown`] (explicitly not applicable)
//! or [`SvoState::Value`] (a normalized, validated payload).
//!
//! The derived ordering places `Empty` first, then `Unknown`, then values in
//! payload order.

use crate::culture::Culture;

/// Lifecycle state shared by all single value objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SvoState<T> {
    /// No value supplied. Renders as the empty string.
    #[default]
    Empty,
    /// Explicitly marked as not applicable. Renders as `?`.
    Unknown,
    /// A validated payload.
    Value(T),
}

impl<T> SvoState<T> {
    /// True for [`SvoState::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True for [`SvoState::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// True for either sentinel.
    pub fn is_empty_or_unknown(&self) -> bool {
        !matches!(self, Self::Value(_))
    }

    /// The payload, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the payload.
    pub fn as_ref(&self) -> SvoState<&T> {
        match self {
            Self::Empty => SvoState::Empty,
            Self::Unknown => SvoState::Unknown,
            Self::Value(v) => SvoState::Value(v),
        }
    }
}

/// Outcome of classifying raw input before type-specific validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel<'a> {
    /// Null, empty or whitespace-only input.
    Empty,
    /// The culture's unknown marker.
    Unknown,
    /// Trimmed input that must be validated by the concrete type.
    Candidate(&'a str),
}

/// Decide which state raw input represents.
///
/// Pure function of `(input, culture)`; never fails.
pub fn classify<'a>(input: Option<&'a str>, culture: &Culture) -> Sentinel<'a> {
    let Some(input) = input else {
        return Sentinel::Empty;
    };
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Sentinel::Empty
    } else if culture.is_unknown_marker(trimmed) {
        Sentinel::Unknown
    } else {
        Sentinel::Candidate(trimmed)
    }
}
