//! # Checksum Engine — ISO 7064 MOD 97-10
//!
//! Computes the IBAN checksum over an arbitrarily long alphanumeric string
//! without materializing it as a number. Letters expand to two digits
//! (`A` = 10 … `Z` = 35) and the remainder is reduced one digit at a time,
//! so the running value never exceeds `96 * 10 + 9`.

const MODULUS: u32 = 97;

/// Fold one decimal digit into the running remainder.
fn step(remainder: u32, digit: u32) -> u32 {
    (remainder * 10 + digit) % MODULUS
}

/// Fold one alphanumeric character into the running remainder.
///
/// Returns `None` for anything other than an ASCII digit or upper-case letter.
fn fold(remainder: u32, c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(step(remainder, c as u32 - '0' as u32)),
        'A'..='Z' => {
            let value = c as u32 - 'A' as u32 + 10;
            Some(step(step(remainder, value / 10), value % 10))
        }
        _ => None,
    }
}

/// Remainder of the digit expansion of `s` modulo 97.
///
/// Returns `None` when `s` contains a character outside `[0-9A-Z]`.
pub fn mod97<I>(chars: I) -> Option<u32>
where
    I: IntoIterator<Item = char>,
{
    chars.into_iter().try_fold(0, fold)
}

/// Verify the checksum of a normalized IBAN.
///
/// The first four characters (country code and check digits) are moved to
/// the end before reduction; the IBAN is valid iff the remainder is 1.
pub fn verify_checksum(normalized_iban: &str) -> bool {
    if normalized_iban.len() < 5 || !normalized_iban.is_ascii() {
        return false;
    }
    let (head, tail) = normalized_iban.split_at(4);
    mod97(tail.chars().chain(head.chars())) == Some(1)
}

/// Compute the two check digits for `country` and `bban`.
///
/// Returns `None` when either part contains an invalid character.
pub fn check_digits(country: &str, bban: &str) -> Option<u8> {
    let remainder = mod97(bban.chars().chain(country.chars()).chain("00".chars()))?;
    u8::try_from(98 - remainder).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_valid_ibans() {
        for iban in [
            "NL20INGB0001234567",
            "DE89370400440532013000",
            "GB29NWBK60161331926819",
            "BE68539007547034",
            "FR1420041010050500013M02606",
            "MT84MALT011000012345MTLCAST001S",
            "LC55HEMM000100010012001200023015",
        ] {
            assert!(verify_checksum(iban), "{iban}");
        }
    }

    #[test]
    fn wrong_check_digits() {
        assert!(!verify_checksum("NL21INGB0001234567"));
        assert!(!verify_checksum("DE88370400440532013000"));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(!verify_checksum("NL20INGB000123456*"));
        assert!(!verify_checksum("NL20ingb0001234567"));
        assert!(!verify_checksum("NL20"));
    }

    #[test]
    fn mod97_of_plain_number() {
        assert_eq!(mod97("97".chars()), Some(0));
        assert_eq!(mod97("98".chars()), Some(1));
        assert_eq!(mod97("A".chars()), Some(10));
        assert_eq!(mod97("Z".chars()), Some(35));
    }

    #[test]
    fn mod97_handles_long_input() {
        let long: String = std::iter::repeat('9').take(500).collect();
        assert!(mod97(long.chars()).is_some_and(|r| r < 97));
    }

    #[test]
    fn check_digits_match_known_iban() {
        assert_eq!(check_digits("NL", "INGB0001234567"), Some(20));
        assert_eq!(check_digits("DE", "370400440532013000"), Some(89));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Incremental reduction agrees with native arithmetic where it fits.
        #[test]
        fn mod97_matches_native(n in any::<u64>()) {
            let expected = u32::try_from(n % 97).unwrap();
            prop_assert_eq!(mod97(n.to_string().chars()), Some(expected));
        }

        /// Computed check digits always verify.
        #[test]
        fn computed_check_digits_verify(
            country in "[A-Z]{2}",
            bban in "[0-9A-Z]{8,30}",
        ) {
            let digits = check_digits(&country, &bban).unwrap();
            prop_assert!((2..=98).contains(&digits));
            let iban = format!("{country}{digits:02}{bban}");
            prop_assert!(verify_checksum(&iban), "{}", iban);
        }

        /// Replacing one character with a different one is always detected.
        #[test]
        fn single_substitution_detected(
            bban in "[0-9]{10,20}",
            index in any::<prop::sample::Index>(),
            replacement in 0u32..10,
        ) {
            let digits = check_digits("NL", &bban).unwrap();
            let mut chars: Vec<char> = format!("NL{digits:02}{bban}").chars().collect();
            let i = 4 + index.index(chars.len() - 4);
            let new = char::from_digit(replacement, 10).unwrap();
            prop_assume!(chars[i] != new);
            chars[i] = new;
            let mutated: String = chars.into_iter().collect();
            prop_assert!(!verify_checksum(&mutated), "{}", mutated);
        }
    }
}
