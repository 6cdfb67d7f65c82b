//! # IBAN — International Bank Account Number
//!
//! Validation is structural first, arithmetic second:
//!
//! 1. Country code (two letters) and check digits (two digits).
//! 2. The country must have an [`IbanLayout`]; unknown countries are
//!    rejected without computing the checksum.
//! 3. Total length and the BBAN character classes must match the layout.
//! 4. Check digits `00`, `01` and `99` are never issued.
//! 5. The ISO 7064 MOD 97-10 checksum must equal 1.
//!
//! BBAN layouts use the IBAN registry notation: a sequence of
//! `<count>!<class>` segments where the class is `n` (digits), `a`
//! (upper-case letters) or `c` (upper-case alphanumerics).

use std::fmt;

use crate::checksum;
use crate::country::Country;
use crate::culture::{Culture, UNKNOWN_MARKER};
use crate::error::SvoKind;
use crate::normalize::Normalizer;
use crate::sentinel::SvoState;
use crate::svo::{impl_svo, JsonForm, SingleValueObject};
use crate::verdict::{RejectReason, ValidationVerdict};

/// Per-country IBAN structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IbanLayout {
    /// ISO 3166-1 alpha-2 code.
    pub country: &'static str,
    /// Total IBAN length, including country code and check digits.
    pub length: usize,
    /// BBAN structure in registry notation, e.g. `4!a10!n`.
    pub bban: &'static str,
}

impl IbanLayout {
    /// Total IBAN length.
    pub fn total_length(&self) -> usize {
        self.length
    }

    /// Length implied by the BBAN notation plus the four leading characters.
    pub fn notation_length(&self) -> usize {
        4 + segments(self.bban).map(|(count, _)| count).sum::<usize>()
    }

    /// Whether `bban` matches the layout's character classes.
    pub fn matches_bban(&self, bban: &str) -> bool {
        let mut chars = bban.chars();
        for (count, class) in segments(self.bban) {
            for _ in 0..count {
                let Some(c) = chars.next() else {
                    return false;
                };
                let ok = match class {
                    'n' => c.is_ascii_digit(),
                    'a' => c.is_ascii_uppercase(),
                    'c' => c.is_ascii_digit() || c.is_ascii_uppercase(),
                    _ => false,
                };
                if !ok {
                    return false;
                }
            }
        }
        chars.next().is_none()
    }
}

/// Parse `<count>!<class>` segments. Malformed notation yields no segments
/// past the fault, which makes the layout reject everything.
fn segments(notation: &'static str) -> impl Iterator<Item = (usize, char)> {
    let mut rest = notation;
    std::iter::from_fn(move || {
        let bang = rest.find('!')?;
        let count = rest[..bang].parse().ok()?;
        let class = rest[bang + 1..].chars().next()?;
        rest = &rest[bang + 1 + class.len_utf8()..];
        Some((count, class))
    })
}

const fn layout(country: &'static str, length: usize, bban: &'static str) -> IbanLayout {
    IbanLayout {
        country,
        length,
        bban,
    }
}

/// IBAN layouts, sorted by country code.
static LAYOUTS: &[IbanLayout] = &[
    layout("AD", 24, "4!n4!n12!c"),
    layout("AE", 23, "3!n16!n"),
    layout("AL", 28, "8!n16!c"),
    layout("AT", 20, "5!n11!n"),
    layout("AZ", 28, "4!a20!c"),
    layout("BA", 20, "3!n3!n8!n2!n"),
    layout("BE", 16, "3!n7!n2!n"),
    layout("BG", 22, "4!a4!n2!n8!c"),
    layout("BH", 22, "4!a14!c"),
    layout("BI", 27, "5!n5!n11!n2!n"),
    layout("BR", 29, "8!n5!n10!n1!a1!c"),
    layout("BY", 28, "4!c4!n16!c"),
    layout("CH", 21, "5!n12!c"),
    layout("CR", 22, "4!n14!n"),
    layout("CY", 28, "3!n5!n16!c"),
    layout("CZ", 24, "4!n6!n10!n"),
    layout("DE", 22, "8!n10!n"),
    layout("DJ", 27, "5!n5!n11!n2!n"),
    layout("DK", 18, "4!n9!n1!n"),
    layout("DO", 28, "4!c20!n"),
    layout("EE", 20, "2!n2!n11!n1!n"),
    layout("EG", 29, "4!n4!n17!n"),
    layout("ES", 24, "4!n4!n1!n1!n10!n"),
    layout("FI", 18, "3!n11!n"),
    layout("FK", 18, "2!a12!n"),
    layout("FO", 18, "4!n9!n1!n"),
    layout("FR", 27, "5!n5!n11!c2!n"),
    layout("GB", 22, "4!a6!n8!n"),
    layout("GE", 22, "2!a16!n"),
    layout("GI", 23, "4!a15!c"),
    layout("GL", 18, "4!n9!n1!n"),
    layout("GR", 27, "3!n4!n16!c"),
    layout("GT", 28, "4!c20!c"),
    layout("HR", 21, "7!n10!n"),
    layout("HU", 28, "3!n4!n1!n15!n1!n"),
    layout("IE", 22, "4!a6!n8!n"),
    layout("IL", 23, "3!n3!n13!n"),
    layout("IQ", 23, "4!a3!n12!n"),
    layout("IS", 26, "4!n2!n6!n10!n"),
    layout("IT", 27, "1!a5!n5!n12!c"),
    layout("JO", 30, "4!a4!n18!c"),
    layout("KW", 30, "4!a22!c"),
    layout("KZ", 20, "3!n13!c"),
    layout("LB", 28, "4!n20!c"),
    layout("LC", 32, "4!a24!c"),
    layout("LI", 21, "5!n12!c"),
    layout("LT", 20, "5!n11!n"),
    layout("LU", 20, "3!n13!c"),
    layout("LV", 21, "4!a13!c"),
    layout("LY", 25, "3!n3!n15!n"),
    layout("MC", 27, "5!n5!n11!c2!n"),
    layout("MD", 24, "2!c18!c"),
    layout("ME", 22, "3!n13!n2!n"),
    layout("MK", 19, "3!n10!c2!n"),
    layout("MN", 20, "4!n12!n"),
    layout("MR", 27, "5!n5!n11!n2!n"),
    layout("MT", 31, "4!a5!n18!c"),
    layout("MU", 30, "4!a2!n2!n12!n3!n3!a"),
    layout("NI", 28, "4!a20!n"),
    layout("NL", 18, "4!a10!n"),
    layout("NO", 15, "4!n6!n1!n"),
    layout("OM", 23, "3!n16!c"),
    layout("PK", 24, "4!a16!c"),
    layout("PL", 28, "8!n16!n"),
    layout("PS", 29, "4!a21!c"),
    layout("PT", 25, "4!n4!n11!n2!n"),
    layout("QA", 29, "4!a21!c"),
    layout("RO", 24, "4!a16!c"),
    layout("RS", 22, "3!n13!n2!n"),
    layout("RU", 33, "9!n5!n15!c"),
    layout("SA", 24, "2!n18!c"),
    layout("SC", 31, "4!a2!n2!n16!n3!a"),
    layout("SD", 18, "2!n12!n"),
    layout("SE", 24, "3!n16!n1!n"),
    layout("SI", 19, "5!n8!n2!n"),
    layout("SK", 24, "4!n6!n10!n"),
    layout("SM", 27, "1!a5!n5!n12!c"),
    layout("SO", 23, "4!n3!n12!n"),
    layout("ST", 25, "8!n11!n2!n"),
    layout("SV", 28, "4!a20!n"),
    layout("TL", 23, "3!n14!n2!n"),
    layout("TN", 24, "2!n3!n13!n2!n"),
    layout("TR", 26, "5!n1!n16!c"),
    layout("UA", 29, "6!n19!c"),
    layout("VA", 22, "3!n15!n"),
    layout("VG", 24, "4!a16!n"),
    layout("XK", 20, "4!n10!n2!n"),
];

/// All IBAN layouts, sorted by country code.
pub fn layouts() -> &'static [IbanLayout] {
    LAYOUTS
}

/// The IBAN layout for an alpha-2 country code.
pub fn layout_for(country: &str) -> Option<&'static IbanLayout> {
    LAYOUTS
        .binary_search_by(|l| l.country.cmp(country))
        .ok()
        .map(|i| &LAYOUTS[i])
}

/// Validate an already normalized IBAN.
fn check(normalized: &str) -> Result<(), RejectReason> {
    if !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(RejectReason::Character);
    }
    if normalized.len() < 5 {
        return Err(RejectReason::Length);
    }
    let (country, rest) = normalized.split_at(2);
    let (check_digits, bban) = rest.split_at(2);
    if !country.chars().all(|c| c.is_ascii_uppercase())
        || !check_digits.chars().all(|c| c.is_ascii_digit())
    {
        return Err(RejectReason::Pattern);
    }
    let layout = layout_for(country).ok_or(RejectReason::UnknownCountry)?;
    if normalized.len() != layout.total_length() {
        return Err(RejectReason::Length);
    }
    if !layout.matches_bban(bban) {
        return Err(RejectReason::Pattern);
    }
    if matches!(check_digits, "00" | "01" | "99") {
        return Err(RejectReason::CheckDigits);
    }
    if !checksum::verify_checksum(normalized) {
        return Err(RejectReason::Checksum);
    }
    Ok(())
}

fn normalize(candidate: &str) -> String {
    let normalized = Normalizer::IBAN.apply(candidate);
    match normalized.strip_prefix("IBAN") {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => normalized,
    }
}

/// Diagnostic verdict for raw IBAN input.
pub fn verdict(input: &str) -> ValidationVerdict {
    check(&normalize(input)).into()
}

/// International Bank Account Number.
///
/// Stored in machine form (`NL20INGB0001234567`); displayed in groups of
/// four (`NL20 INGB 0001 2345 67`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iban(SvoState<String>);

impl_svo!(Iban, String, SvoKind::Iban, {
    fn json_form(&self) -> JsonForm {
        match &self.0 {
            SvoState::Empty => JsonForm::Null,
            SvoState::Unknown => JsonForm::Text(UNKNOWN_MARKER.to_string()),
            SvoState::Value(s) => JsonForm::Text(s.clone()),
        }
    }
});

impl Iban {
    fn normalize_candidate(candidate: &str, _culture: &Culture) -> Result<String, RejectReason> {
        let normalized = normalize(candidate);
        check(&normalized)?;
        Ok(normalized)
    }

    /// Machine form, `""` for Empty and `?` for Unknown.
    pub fn as_str(&self) -> &str {
        match &self.0 {
            SvoState::Empty => "",
            SvoState::Unknown => UNKNOWN_MARKER,
            SvoState::Value(s) => s,
        }
    }

    /// Country of the account. Unknown IBANs have an unknown country.
    pub fn country(&self) -> Country {
        match &self.0 {
            SvoState::Empty => Country::EMPTY,
            SvoState::Unknown => Country::UNKNOWN,
            SvoState::Value(s) => Country::from_alpha2(&s[..2]).unwrap_or(Country::UNKNOWN),
        }
    }

    /// The two check digits.
    pub fn check_digits(&self) -> Option<u8> {
        self.0.value().and_then(|s| s[2..4].parse().ok())
    }

    /// The Basic Bank Account Number.
    pub fn bban(&self) -> Option<&str> {
        self.0.value().map(|s| &s[4..])
    }

    /// Human-readable form in groups of four characters.
    pub fn formatted(&self) -> String {
        match &self.0 {
            SvoState::Value(s) => {
                let mut out = String::with_capacity(s.len() + s.len() / 4);
                for (i, c) in s.chars().enumerate() {
                    if i > 0 && i % 4 == 0 {
                        out.push(' ');
                    }
                    out.push(c);
                }
                out
            }
            _ => self.as_str().to_string(),
        }
    }

    /// Build an IBAN from its country and BBAN, computing the check digits.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FormatError`] if the result is not a valid IBAN.
    pub fn from_parts(country: &Country, bban: &str) -> Result<Self, crate::FormatError> {
        let code = country.iso_alpha2().unwrap_or_default();
        let bban = Normalizer::IBAN.apply(bban);
        let digits = checksum::check_digits(code, &bban)
            .ok_or_else(|| crate::FormatError::new(SvoKind::Iban, format!("{code}{bban}")))?;
        Self::parse(&format!("{code}{digits:02}{bban}"))
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_are_sorted_and_consistent() {
        for pair in layouts().windows(2) {
            assert!(pair[0].country < pair[1].country);
        }
        for layout in layouts() {
            assert_eq!(
                layout.notation_length(),
                layout.length,
                "notation of {} disagrees with its length",
                layout.country
            );
            assert!(
                Country::from_alpha2(layout.country).is_some(),
                "{} is not a country",
                layout.country
            );
        }
    }

    #[test]
    fn parse_normalizes() {
        let iban = Iban::parse("nl20 ingb 0001 2345 67").unwrap();
        assert_eq!(iban.as_str(), "NL20INGB0001234567");
        assert_eq!(iban.to_string(), "NL20 INGB 0001 2345 67");
    }

    #[test]
    fn parse_strips_label() {
        let iban = Iban::parse("IBAN NL20INGB0001234567").unwrap();
        assert_eq!(iban.as_str(), "NL20INGB0001234567");
    }

    #[test]
    fn accessors() {
        let iban = Iban::parse("DE89370400440532013000").unwrap();
        assert_eq!(iban.country(), Country::DE);
        assert_eq!(iban.check_digits(), Some(89));
        assert_eq!(iban.bban(), Some("370400440532013000"));
    }

    #[test]
    fn sentinel_accessors() {
        assert_eq!(Iban::EMPTY.country(), Country::EMPTY);
        assert_eq!(Iban::UNKNOWN.country(), Country::UNKNOWN);
        assert_eq!(Iban::UNKNOWN.to_string(), "?");
        assert_eq!(Iban::EMPTY.bban(), None);
    }

    #[test]
    fn verdict_reasons() {
        assert_eq!(verdict("NL20INGB0001234567"), ValidationVerdict::VALID);
        assert_eq!(verdict("QQ20INGB0001234567").reason, Some(RejectReason::UnknownCountry));
        assert_eq!(verdict("NL20INGB000123456").reason, Some(RejectReason::Length));
        assert_eq!(verdict("NL20INGB000123456X").reason, Some(RejectReason::Pattern));
        assert_eq!(verdict("NL21INGB0001234567").reason, Some(RejectReason::Checksum));
        assert_eq!(verdict("NL20INGB00012345#7").reason, Some(RejectReason::Character));
        assert_eq!(verdict("2020INGB0001234567").reason, Some(RejectReason::Pattern));
    }

    #[test]
    fn non_ascii_letters_are_rejected() {
        assert!(Iban::parse("nl20\u{131}ngb0001234567").is_err());
        assert_eq!(
            verdict("nl20\u{131}ngb0001234567").reason,
            Some(RejectReason::Character)
        );
    }

    #[test]
    fn check_digits_99_rejected_even_if_congruent() {
        // 99 is congruent to 02 modulo 97.
        assert_eq!(checksum::check_digits("NL", "ABNA0000000039"), Some(2));
        assert!(verdict("NL02ABNA0000000039").is_valid);
        assert!(checksum::verify_checksum("NL99ABNA0000000039"));
        assert_eq!(
            verdict("NL99ABNA0000000039").reason,
            Some(RejectReason::CheckDigits)
        );
        assert_eq!(verdict("NL00INGB0001234567").reason, Some(RejectReason::CheckDigits));
    }

    #[test]
    fn from_parts_computes_check_digits() {
        let iban = Iban::from_parts(&Country::NL, "INGB 0001 2345 67").unwrap();
        assert_eq!(iban.as_str(), "NL20INGB0001234567");
        assert!(Iban::from_parts(&Country::US, "12345678").is_err());
    }

    #[test]
    fn serde_uses_machine_form() {
        let iban = Iban::parse("NL20 INGB 0001 2345 67").unwrap();
        assert_eq!(serde_json::to_string(&iban).unwrap(), "\"NL20INGB0001234567\"");
        assert_eq!(serde_json::to_string(&Iban::EMPTY).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Iban::UNKNOWN).unwrap(), "\"?\"");
        let back: Iban = serde_json::from_str("\"NL20INGB0001234567\"").unwrap();
        assert_eq!(back, iban);
        let empty: Iban = serde_json::from_str("null").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn json_number_is_rejected() {
        let err = serde_json::from_str::<Iban>("12.5").unwrap_err();
        assert!(err
            .to_string()
            .contains("JSON deserialization from number is not supported for IBAN"));
    }
}
