//! # House Number
//!
//! A positive integer of at most nine digits. Serializes as a JSON integer
//! and deserializes from integers, integral floats and strings.

use std::fmt;

use crate::culture::{Culture, UNKNOWN_MARKER};
use crate::error::{RangeError, SvoError, SvoKind};
use crate::sentinel::SvoState;
use crate::svo::{impl_svo, JsonForm};
use crate::verdict::RejectReason;

/// Smallest house number.
pub const MIN: u32 = 1;
/// Largest house number.
pub const MAX: u32 = 999_999_999;

/// A house number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HouseNumber(SvoState<u32>);

impl_svo!(HouseNumber, u32, SvoKind::HouseNumber, {
    fn json_form(&self) -> JsonForm {
        match self.0 {
            SvoState::Empty => JsonForm::Null,
            SvoState::Unknown => JsonForm::Text(UNKNOWN_MARKER.to_string()),
            SvoState::Value(n) => JsonForm::Integer(u64::from(n)),
        }
    }

    fn from_json_integer(value: i64) -> Result<Self, SvoError> {
        Ok(HouseNumber::create(value)?)
    }

    fn from_json_number(value: f64) -> Result<Self, SvoError> {
        if value.is_finite() && value.fract() == 0.0 {
            Ok(HouseNumber::create(value as i64)?)
        } else {
            Err(SvoError::UnsupportedJson {
                kind: SvoKind::HouseNumber,
                from: "non-integral number",
            })
        }
    }
});

fn in_domain(n: u64) -> Option<u32> {
    u32::try_from(n).ok().filter(|n| (MIN..=MAX).contains(n))
}

impl HouseNumber {
    fn normalize_candidate(candidate: &str, _culture: &Culture) -> Result<u32, RejectReason> {
        if !candidate.chars().all(|c| c.is_ascii_digit()) {
            return Err(RejectReason::Number);
        }
        let digits = candidate.trim_start_matches('0');
        if digits.len() > 9 {
            return Err(RejectReason::Range);
        }
        let n: u64 = if digits.is_empty() {
            0
        } else {
            digits.parse().map_err(|_| RejectReason::Number)?
        };
        in_domain(n).ok_or(RejectReason::Range)
    }

    /// Create from a number.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] outside `1..=999_999_999`.
    pub fn create(value: i64) -> Result<Self, RangeError> {
        u64::try_from(value)
            .ok()
            .and_then(in_domain)
            .map(|n| HouseNumber(SvoState::Value(n)))
            .ok_or_else(|| RangeError {
                kind: SvoKind::HouseNumber,
                value: value.to_string(),
            })
    }

    /// The number, `None` for sentinels.
    pub fn value(&self) -> Option<u32> {
        self.0.value().copied()
    }

    /// False for sentinels.
    pub fn is_odd(&self) -> bool {
        self.value().is_some_and(|n| n % 2 == 1)
    }

    /// False for sentinels.
    pub fn is_even(&self) -> bool {
        self.value().is_some_and(|n| n % 2 == 0)
    }
}

impl fmt::Display for HouseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            SvoState::Empty => Ok(()),
            SvoState::Unknown => f.write_str(UNKNOWN_MARKER),
            SvoState::Value(n) => write!(f, "{n}"),
        }
    }
}
