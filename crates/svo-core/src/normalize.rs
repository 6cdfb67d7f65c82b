//! # Normalizer
//!
//! Transforms a trimmed candidate into the canonical form used for
//! validation and storage. Each value object kind has its own separator set
//! and casing rule; percentages additionally have their marker located and
//! stripped here.

use rust_decimal::Decimal;

/// Separator and casing rules for one value object kind.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Normalizer {
    separators: &'static [char],
    upper: bool,
}

impl Normalizer {
    pub(crate) const IBAN: Normalizer = Normalizer {
        separators: &['-', '.'],
        upper: true,
    };

    pub(crate) const BIC: Normalizer = Normalizer {
        separators: &['-', '.'],
        upper: true,
    };

    pub(crate) const POSTAL_CODE: Normalizer = Normalizer {
        separators: &['-', '.', '_', '/'],
        upper: true,
    };

    /// Remove whitespace and separators, upper-casing ASCII letters when
    /// configured. Non-ASCII characters pass through unchanged.
    pub(crate) fn apply(&self, candidate: &str) -> String {
        let kept = candidate
            .chars()
            .filter(|c| !c.is_whitespace() && !self.separators.contains(c));
        if self.upper {
            kept.map(|c| c.to_ascii_uppercase()).collect()
        } else {
            kept.collect()
        }
    }
}

/// Percent-like marker found on a percentage candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// No marker; the number is read as percent.
    None,
    /// `%`, parts per hundred.
    Percent,
    /// `‰`, parts per thousand.
    PerMille,
    /// `‱`, parts per ten thousand.
    PerTenThousand,
}

impl Marker {
    const ALL: [Marker; 3] = [Marker::Percent, Marker::PerMille, Marker::PerTenThousand];

    /// The marker character, if any.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Percent => Some('%'),
            Self::PerMille => Some('‰'),
            Self::PerTenThousand => Some('‱'),
        }
    }

    /// Divisor that turns the written magnitude into a fraction.
    pub fn divisor(&self) -> Decimal {
        match self {
            Self::None | Self::Percent => Decimal::ONE_HUNDRED,
            Self::PerMille => Decimal::ONE_THOUSAND,
            Self::PerTenThousand => Decimal::from(10_000),
        }
    }

    fn of(c: char) -> Option<Marker> {
        Self::ALL.into_iter().find(|m| m.symbol() == Some(c))
    }
}

/// Locate and strip exactly one marker at the start or end of `candidate`.
///
/// Returns `None` when a marker appears anywhere else or more than once.
pub(crate) fn split_marker(candidate: &str) -> Option<(&str, Marker)> {
    let count = candidate.chars().filter(|c| Marker::of(*c).is_some()).count();
    match count {
        0 => Some((candidate, Marker::None)),
        1 => {
            let first = candidate.chars().next()?;
            let last = candidate.chars().next_back()?;
            if let Some(marker) = Marker::of(first) {
                Some((candidate[first.len_utf8()..].trim(), marker))
            } else if let Some(marker) = Marker::of(last) {
                Some((candidate[..candidate.len() - last.len_utf8()].trim(), marker))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Rewrite a culture-formatted number into invariant form.
///
/// Group separators and whitespace are dropped, the decimal separator
/// becomes `.`. Returns `None` unless the result is an optionally signed
/// run of digits with at most one decimal point.
pub(crate) fn invariant_number(number: &str, decimal: char, group: char) -> Option<String> {
    let mut out = String::with_capacity(number.len());
    let mut seen_point = false;
    let mut seen_digit = false;
    for (i, c) in number.chars().enumerate() {
        match c {
            '+' | '-' if i == 0 => out.push(c),
            c if c.is_ascii_digit() => {
                seen_digit = true;
                out.push(c);
            }
            c if c == decimal => {
                if seen_point {
                    return None;
                }
                seen_point = true;
                out.push('.');
            }
            c if c == group || c.is_whitespace() => {
                if seen_point {
                    return None;
                }
            }
            _ => return None,
        }
    }
    seen_digit.then_some(out)
}
