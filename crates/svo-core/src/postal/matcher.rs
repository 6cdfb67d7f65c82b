//! Pattern matcher for the postal code format table.
//!
//! Matching is a linear scan over the rules of one country and, per rule,
//! over the characters of at most two candidate bodies (with and without an
//! optional prefix). There is no backtracking, so worst-case time is bounded
//! by the table size times the input length.

use crate::country::Country;
use crate::postal::rules::{self, FormatRule};
use crate::verdict::RejectReason;

/// The rule that accepted a code, and the body it matched after any
/// prefix was stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// The first rule that matched.
    pub rule: &'static FormatRule,
    /// The code without its prefix.
    pub body: &'a str,
}

/// Bodies to try for `rule`: the prefix-stripped code and, if the prefix is
/// optional, the code as-is.
fn bodies<'a>(rule: &FormatRule, code: &'a str) -> [Option<&'a str>; 2] {
    match rule.prefix {
        None => [Some(code), None],
        Some(prefix) => {
            let stripped = code.strip_prefix(prefix);
            if rule.prefix_required {
                [stripped, None]
            } else {
                [stripped, Some(code)]
            }
        }
    }
}

fn rank(reason: RejectReason) -> u8 {
    match reason {
        RejectReason::Pattern => 2,
        RejectReason::Prefix => 1,
        _ => 0,
    }
}

/// Find the first rule of `country` that accepts the normalized `code`.
///
/// # Errors
///
/// - [`RejectReason::Character`] for anything but upper-case letters and digits.
/// - [`RejectReason::UnknownCountry`] if `country` is not a known code.
/// - [`RejectReason::NoPostalCodes`] if the country has no postal codes.
/// - The most specific of [`RejectReason::Pattern`], [`RejectReason::Prefix`]
///   and [`RejectReason::Length`] otherwise.
pub fn find<'a>(code: &'a str, country: &str) -> Result<Match<'a>, RejectReason> {
    if code.is_empty()
        || !code
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    {
        return Err(RejectReason::Character);
    }
    let Some(country_rules) = rules::rules_for(country) else {
        return Err(if Country::from_alpha2(country).is_some() {
            RejectReason::NoPostalCodes
        } else {
            RejectReason::UnknownCountry
        });
    };

    let mut reason = RejectReason::Length;
    for rule in country_rules.rules {
        let candidates = bodies(rule, code);
        if candidates.iter().all(Option::is_none) {
            if rank(RejectReason::Prefix) > rank(reason) {
                reason = RejectReason::Prefix;
            }
            continue;
        }
        for body in candidates.into_iter().flatten() {
            if !rule.accepts_length(body.len()) {
                continue;
            }
            if rule.accepts_chars(body) {
                return Ok(Match { rule, body });
            }
            reason = RejectReason::Pattern;
        }
    }
    Err(reason)
}

/// Render a match through its rule's template.
///
/// Without a template the normalized code is returned unchanged.
pub fn render(code: &str, matched: &Match<'_>) -> String {
    let Some(template) = matched.rule.template else {
        return code.to_string();
    };
    let mut body = matched.body.chars();
    template
        .chars()
        .filter_map(|c| if c == '#' { body.next() } else { Some(c) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canada() {
        assert!(find("H0H0H0", "CA").is_ok());
        assert_eq!(find("D0H0H0", "CA").unwrap_err(), RejectReason::Pattern);
        assert_eq!(find("W0H0H0", "CA").unwrap_err(), RejectReason::Pattern);
        assert_eq!(find("H0H0H", "CA").unwrap_err(), RejectReason::Length);
    }

    #[test]
    fn belgium_rejects_letters() {
        assert_eq!(find("H0H0H0", "BE").unwrap_err(), RejectReason::Length);
        assert_eq!(find("0100", "BE").unwrap_err(), RejectReason::Pattern);
        assert!(find("1000", "BE").is_ok());
    }

    #[test]
    fn optional_prefix_both_ways() {
        let with = find("AD765", "AD").unwrap();
        assert_eq!(with.body, "765");
        let without = find("765", "AD").unwrap();
        assert_eq!(without.body, "765");
    }

    #[test]
    fn required_prefix() {
        assert!(find("KY11100", "KY").is_ok());
        assert_eq!(find("11100", "KY").unwrap_err(), RejectReason::Prefix);
        assert!(find("GY11AA", "GG").is_ok());
        assert!(find("GY101AA", "GG").is_ok());
        assert_eq!(find("JE11AA", "GG").unwrap_err(), RejectReason::Prefix);
    }

    #[test]
    fn first_rule_wins() {
        let matched = find("12345", "US").unwrap();
        assert_eq!(matched.rule.template, None);
        let matched = find("123456789", "US").unwrap();
        assert_eq!(matched.rule.template, Some("#####-####"));
    }

    #[test]
    fn united_kingdom_forms() {
        for code in ["M11AE", "B338TH", "CR26XH", "W1A1HQ", "DN551PT", "EC1A1BB"] {
            assert!(find(code, "GB").is_ok(), "{code}");
        }
        assert_eq!(find("EC1A1BC", "GB").unwrap_err(), RejectReason::Pattern);
    }

    #[test]
    fn country_reasons() {
        assert_eq!(find("1000", "QQ").unwrap_err(), RejectReason::UnknownCountry);
        assert_eq!(find("1000", "AO").unwrap_err(), RejectReason::NoPostalCodes);
        assert_eq!(find("10-00", "NL").unwrap_err(), RejectReason::Character);
        assert_eq!(find("", "NL").unwrap_err(), RejectReason::Character);
    }

    #[test]
    fn render_templates() {
        let m = find("H0H0H0", "CA").unwrap();
        assert_eq!(render("H0H0H0", &m), "H0H 0H0");
        let m = find("765", "AD").unwrap();
        assert_eq!(render("765", &m), "AD-765");
        let m = find("AD765", "AD").unwrap();
        assert_eq!(render("AD765", &m), "AD-765");
        let m = find("10117", "DE").unwrap();
        assert_eq!(render("10117", &m), "10117");
        let m = find("SW1A1AA", "GB").unwrap();
        assert_eq!(render("SW1A1AA", &m), "SW1A 1AA");
    }
}
