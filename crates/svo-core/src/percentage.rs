//! # Percentage
//!
//! Stored as a [`Decimal`] fraction: `17.51%` is `0.1751`. Parsing accepts
//! one `%`, `‰` or `‱` marker as prefix or suffix and divides the written
//! magnitude by 100, 1000 or 10000. A bare number is read as percent.
//! Decimal and group separators come from the [`Culture`].
//!
//! JSON uses the invariant string form (`"17.51%"`). JSON numbers are read
//! as fractions, so `0.1751` and `"17.51%"` deserialize to the same value.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::culture::{Culture, MarkerPosition, UNKNOWN_MARKER};
use crate::error::{RangeError, SvoError, SvoKind};
use crate::normalize::{invariant_number, split_marker};
use crate::sentinel::SvoState;
use crate::svo::impl_svo;
use crate::verdict::{RejectReason, ValidationVerdict};

/// A percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(SvoState<Decimal>);

impl_svo!(Percentage, Decimal, SvoKind::Percentage, {
    fn from_json_integer(value: i64) -> Result<Self, SvoError> {
        Ok(Percentage::new(Decimal::from(value))?)
    }

    fn from_json_number(value: f64) -> Result<Self, SvoError> {
        Ok(Percentage::create(value)?)
    }
});

fn parse_fraction(candidate: &str, culture: &Culture) -> Result<Decimal, RejectReason> {
    let (number, marker) = split_marker(candidate).ok_or(RejectReason::Marker)?;
    let invariant = invariant_number(number, culture.decimal_separator, culture.group_separator)
        .ok_or(RejectReason::Number)?;
    let magnitude = Decimal::from_str(&invariant).map_err(|_| RejectReason::Number)?;
    Ok(magnitude / marker.divisor())
}

/// Diagnostic verdict for raw `input` in `culture`.
pub fn verdict(input: &str, culture: &Culture) -> ValidationVerdict {
    parse_fraction(input.trim(), culture).map(|_| ()).into()
}

impl Percentage {
    /// 0%.
    pub const ZERO: Percentage = Percentage(SvoState::Value(Decimal::ZERO));

    /// 100%.
    pub const HUNDRED: Percentage = Percentage(SvoState::Value(Decimal::ONE));

    fn normalize_candidate(candidate: &str, culture: &Culture) -> Result<Decimal, RejectReason> {
        parse_fraction(candidate, culture)
    }

    /// From a fraction: `0.5` is 50%.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] when the percent magnitude (`fraction * 100`)
    /// does not fit in a [`Decimal`].
    pub fn new(fraction: Decimal) -> Result<Self, RangeError> {
        if fraction.checked_mul(Decimal::ONE_HUNDRED).is_none() {
            return Err(RangeError {
                kind: SvoKind::Percentage,
                value: fraction.to_string(),
            });
        }
        Ok(Percentage(SvoState::Value(fraction)))
    }

    /// From a percent magnitude: `50` is 50%.
    pub fn from_percent(percent: Decimal) -> Self {
        Percentage(SvoState::Value(percent / Decimal::ONE_HUNDRED))
    }

    /// From a per mille magnitude: `5` is 0.5%.
    pub fn from_per_mille(per_mille: Decimal) -> Self {
        Percentage(SvoState::Value(per_mille / Decimal::ONE_THOUSAND))
    }

    /// From a floating-point fraction.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] for NaN, infinities and values a
    /// [`Decimal`] cannot hold.
    pub fn create(fraction: f64) -> Result<Self, RangeError> {
        let decimal = Decimal::from_f64(fraction).ok_or_else(|| RangeError {
            kind: SvoKind::Percentage,
            value: fraction.to_string(),
        })?;
        Self::new(decimal)
    }

    /// The fraction, `None` for sentinels.
    pub fn fraction(&self) -> Option<Decimal> {
        self.0.value().copied()
    }

    /// The percent magnitude, `None` for sentinels.
    pub fn percent(&self) -> Option<Decimal> {
        self.fraction()
            .map(|f| f.saturating_mul(Decimal::ONE_HUNDRED))
    }

    /// Round to `decimals` places of the percent magnitude.
    pub fn round(&self, decimals: u32) -> Self {
        match self.0 {
            SvoState::Value(f) => Percentage(SvoState::Value(f.round_dp(decimals.saturating_add(2)))),
            _ => *self,
        }
    }

    /// Render as a percent using the separators and marker position of
    /// `culture`. Empty renders as `""`, Unknown as `?`.
    pub fn format_with(&self, culture: &Culture) -> String {
        let Some(percent) = self.percent() else {
            return match self.0 {
                SvoState::Unknown => UNKNOWN_MARKER.to_string(),
                _ => String::new(),
            };
        };
        let number: String = percent
            .normalize()
            .to_string()
            .chars()
            .map(|c| if c == '.' { culture.decimal_separator } else { c })
            .collect();
        match culture.marker_position {
            MarkerPosition::Suffix => format!("{number}%"),
            MarkerPosition::SpacedSuffix => format!("{number} %"),
            MarkerPosition::Prefix => format!("%{number}"),
        }
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(&Culture::INVARIANT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svo::SingleValueObject;

    fn dec(num: i64, scale: u32) -> Decimal {
        Decimal::new(num, scale)
    }

    fn pct(num: i64, scale: u32) -> Percentage {
        Percentage::new(dec(num, scale)).unwrap()
    }

    #[test]
    fn dutch_suffix_equals_french_prefix() {
        let dutch = Percentage::parse_with("17,51%", &Culture::NL_NL).unwrap();
        let french = Percentage::parse_with("%17,51", &Culture::FR_FR).unwrap();
        assert_eq!(dutch, french);
        assert_eq!(dutch.fraction(), Some(dec(1751, 4)));
    }

    #[test]
    fn misplaced_marker_fails() {
        assert!(Percentage::parse("2%2").is_err());
        assert_eq!(
            Percentage::normalize_candidate("2%2", &Culture::INVARIANT),
            Err(RejectReason::Marker)
        );
        assert_eq!(verdict("%2%", &Culture::INVARIANT).reason, Some(RejectReason::Marker));
        assert_eq!(verdict("2x", &Culture::INVARIANT).reason, Some(RejectReason::Number));
    }

    #[test]
    fn markers_divide() {
        assert_eq!(Percentage::parse("50%").unwrap().fraction(), Some(dec(5, 1)));
        assert_eq!(Percentage::parse("5‰").unwrap().fraction(), Some(dec(5, 3)));
        assert_eq!(Percentage::parse("5‱").unwrap().fraction(), Some(dec(5, 4)));
        assert_eq!(Percentage::parse("50").unwrap().fraction(), Some(dec(5, 1)));
        assert_eq!(Percentage::parse("-2.5%").unwrap().fraction(), Some(dec(-25, 3)));
    }

    #[test]
    fn group_separators() {
        let p = Percentage::parse_with("1.017,5%", &Culture::DE_DE).unwrap();
        assert_eq!(p.percent(), Some(dec(10175, 1)));
        let p = Percentage::parse("1,017.5%").unwrap();
        assert_eq!(p.percent(), Some(dec(10175, 1)));
    }

    #[test]
    fn format_per_culture() {
        let p = pct(1751, 4);
        assert_eq!(p.to_string(), "17.51%");
        assert_eq!(p.format_with(&Culture::NL_NL), "17,51%");
        assert_eq!(p.format_with(&Culture::FR_FR), "17,51 %");
        assert_eq!(p.format_with(&Culture::TR_TR), "%17,51");
        assert_eq!(Percentage::EMPTY.to_string(), "");
        assert_eq!(Percentage::UNKNOWN.to_string(), "?");
        assert_eq!(Percentage::ZERO.to_string(), "0%");
        assert_eq!(Percentage::HUNDRED.to_string(), "100%");
    }

    #[test]
    fn formatted_reparses_in_same_culture() {
        let p = pct(-12345, 5);
        for culture in Culture::all() {
            let text = p.format_with(culture);
            assert_eq!(Percentage::parse_with(&text, culture).unwrap(), p, "{culture}");
        }
    }

    #[test]
    fn constructors() {
        assert_eq!(Percentage::from_percent(dec(50, 0)), pct(5, 1));
        assert_eq!(Percentage::from_per_mille(dec(5, 0)), pct(5, 3));
        assert_eq!(Percentage::create(0.5).unwrap(), pct(5, 1));
        assert!(Percentage::create(f64::NAN).is_err());
        assert!(Percentage::create(f64::INFINITY).is_err());
        assert!(Percentage::create(1e300).is_err());
    }

    #[test]
    fn new_rejects_fractions_without_a_percent_form() {
        let err = Percentage::new(Decimal::MAX).unwrap_err();
        assert_eq!(err.kind, SvoKind::Percentage);
        assert!(Percentage::new(Decimal::MIN).is_err());

        let largest = Decimal::MAX / Decimal::ONE_HUNDRED;
        let p = Percentage::new(largest).unwrap();
        assert_eq!(Percentage::parse(&p.to_string()).unwrap(), p);
    }

    #[test]
    fn rounding() {
        let p = pct(17514, 5);
        assert_eq!(p.round(1).percent(), Some(dec(175, 1)));
        assert_eq!(Percentage::UNKNOWN.round(1), Percentage::UNKNOWN);
    }

    #[test]
    fn unknown_phrases() {
        assert_eq!(
            Percentage::parse_with("não sabe", &Culture::PT_PT).unwrap(),
            Percentage::UNKNOWN
        );
        assert!(Percentage::parse("não sabe").is_err());
    }

    #[test]
    fn ordering_is_numeric() {
        let mut values = vec![
            Percentage::parse("10%").unwrap(),
            Percentage::EMPTY,
            Percentage::parse("-5%").unwrap(),
            Percentage::UNKNOWN,
            Percentage::parse("2%").unwrap(),
        ];
        values.sort();
        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["", "?", "-5%", "2%", "10%"]);
    }

    #[test]
    fn json() {
        let p = pct(1751, 4);
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"17.51%\"");
        assert_eq!(serde_json::from_str::<Percentage>("\"17.51%\"").unwrap(), p);
        assert_eq!(
            serde_json::from_str::<Percentage>("1").unwrap(),
            Percentage::HUNDRED
        );
        assert_eq!(
            serde_json::from_str::<Percentage>("0.5").unwrap(),
            Percentage::create(0.5).unwrap()
        );
        assert_eq!(serde_json::from_str::<Percentage>("null").unwrap(), Percentage::EMPTY);
        assert!(serde_json::from_str::<Percentage>("true").is_err());
    }
}
