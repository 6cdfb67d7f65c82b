//! Country format table for postal codes.
//!
//! Each country with a postal code system owns one or more [`FormatRule`]s.
//! A rule describes the body of a normalized code (no whitespace, no
//! separators, upper-case) and an optional alphabetic prefix. Rule order is
//! authoritative: the first rule that matches wins, and its template is
//! used for formatting.
//!
//! Countries that are absent from the table have no postal codes.

/// Character class of one position in a positional body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// `0-9`
    Digit,
    /// `A-Z`
    Letter,
    /// `0-9A-Z`
    AlphaNum,
    /// Any character of the set.
    OneOf(&'static str),
    /// A letter not in the set.
    LetterExcept(&'static str),
}

impl Class {
    /// Whether `c` belongs to the class.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Letter => c.is_ascii_uppercase(),
            Self::AlphaNum => c.is_ascii_digit() || c.is_ascii_uppercase(),
            Self::OneOf(set) => set.contains(c),
            Self::LetterExcept(set) => c.is_ascii_uppercase() && !set.contains(c),
        }
    }
}

/// Body pattern of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    /// Digits only, length from [`FormatRule::lengths`].
    Digits,
    /// One class per position; the length is the number of positions.
    Positions(&'static [Class]),
    /// A single fixed code.
    Exact(&'static str),
}

/// One postal code format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRule {
    /// Allowed body lengths for [`Body::Digits`].
    pub lengths: &'static [usize],
    /// Body pattern.
    pub body: Body,
    /// Alphabetic prefix, e.g. `AD`.
    pub prefix: Option<&'static str>,
    /// Whether the prefix must be present.
    pub prefix_required: bool,
    /// Display template. `#` consumes one body character; anything else is
    /// written literally.
    pub template: Option<&'static str>,
}

impl FormatRule {
    /// Whether a body of `len` characters can match.
    pub fn accepts_length(&self, len: usize) -> bool {
        match self.body {
            Body::Digits => self.lengths.contains(&len),
            Body::Positions(classes) => classes.len() == len,
            Body::Exact(code) => code.len() == len,
        }
    }

    /// Whether the characters of `body` match, given its length is accepted.
    pub fn accepts_chars(&self, body: &str) -> bool {
        match self.body {
            Body::Digits => body.chars().all(|c| c.is_ascii_digit()),
            Body::Positions(classes) => body.chars().zip(classes).all(|(c, class)| class.accepts(c)),
            Body::Exact(code) => body == code,
        }
    }

    const fn prefixed(self, prefix: &'static str) -> Self {
        FormatRule {
            prefix: Some(prefix),
            prefix_required: false,
            ..self
        }
    }

    const fn required(self, prefix: &'static str) -> Self {
        FormatRule {
            prefix: Some(prefix),
            prefix_required: true,
            ..self
        }
    }

    const fn shown(self, template: &'static str) -> Self {
        FormatRule {
            template: Some(template),
            ..self
        }
    }
}

/// The rule set of one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRules {
    /// ISO 3166-1 alpha-2 code.
    pub country: &'static str,
    /// A valid sample code.
    pub example: &'static str,
    /// Rules, in priority order.
    pub rules: &'static [FormatRule],
}

const fn digits(lengths: &'static [usize]) -> FormatRule {
    FormatRule {
        lengths,
        body: Body::Digits,
        prefix: None,
        prefix_required: false,
        template: None,
    }
}

const fn positions(classes: &'static [Class]) -> FormatRule {
    FormatRule {
        lengths: &[],
        body: Body::Positions(classes),
        prefix: None,
        prefix_required: false,
        template: None,
    }
}

const fn exact(code: &'static str) -> FormatRule {
    FormatRule {
        lengths: &[],
        body: Body::Exact(code),
        prefix: None,
        prefix_required: false,
        template: None,
    }
}

const fn country(
    country: &'static str,
    example: &'static str,
    rules: &'static [FormatRule],
) -> CountryRules {
    CountryRules {
        country,
        example,
        rules,
    }
}

const D: Class = Class::Digit;
const L: Class = Class::Letter;
const X: Class = Class::AlphaNum;
const NON_ZERO: Class = Class::OneOf("123456789");
/// Unit letters of a British inward code.
const INWARD: Class = Class::LetterExcept("CIKMOV");
/// Letters used in Canadian codes.
const CANADA: Class = Class::LetterExcept("DFIOQU");
/// First letter of a Canadian code.
const CANADA_FIRST: Class = Class::LetterExcept("DFIOQUWZ");

const fn one(set: &'static str) -> Class {
    Class::OneOf(set)
}

const ZIP: [FormatRule; 2] = [digits(&[5]), digits(&[9]).shown("#####-####")];

/// Crown dependency codes: `XX9 9AA` and `XX99 9AA`.
macro_rules! crown {
    ($prefix:literal) => {
        &[
            positions(&[D, D, INWARD, INWARD])
                .required($prefix)
                .shown(concat!($prefix, "# ###")),
            positions(&[D, D, D, INWARD, INWARD])
                .required($prefix)
                .shown(concat!($prefix, "## ###")),
        ]
    };
}

/// Postal code rules, sorted by country code.
static RULES: &[CountryRules] = &[
    country("AD", "AD500", &[digits(&[3]).prefixed("AD").shown("AD-###")]),
    country("AF", "1001", &[digits(&[4])]),
    country("AI", "AI-2640", &[exact("2640").prefixed("AI").shown("AI-####")]),
    country("AL", "1001", &[digits(&[4])]),
    country("AM", "0010", &[digits(&[4])]),
    country(
        "AR",
        "C1425DKD",
        &[digits(&[4]), positions(&[L, D, D, D, D, L, L, L])],
    ),
    country("AS", "96799", &ZIP),
    country("AT", "1010", &[positions(&[NON_ZERO, D, D, D])]),
    country("AU", "2000", &[digits(&[4])]),
    country("AX", "22100", &[digits(&[5]).prefixed("AX").shown("AX-#####")]),
    country("AZ", "AZ 1000", &[digits(&[4]).prefixed("AZ").shown("AZ ####")]),
    country("BA", "71000", &[digits(&[5])]),
    country("BB", "BB15094", &[digits(&[5]).prefixed("BB").shown("BB#####")]),
    country("BD", "1000", &[digits(&[4])]),
    country("BE", "1000", &[positions(&[NON_ZERO, D, D, D])]),
    country("BG", "1000", &[digits(&[4])]),
    country("BH", "317", &[digits(&[3, 4])]),
    country("BL", "97133", &[digits(&[5])]),
    country(
        "BM",
        "HM 02",
        &[
            positions(&[L, L, D, D]).shown("## ##"),
            positions(&[L, L, L, L]).shown("## ##"),
        ],
    ),
    country("BN", "BS8811", &[positions(&[L, L, D, D, D, D])]),
    country(
        "BR",
        "01310-200",
        &[digits(&[8]).shown("#####-###"), digits(&[5])],
    ),
    country("BT", "11001", &[digits(&[5])]),
    country("BY", "220050", &[digits(&[6])]),
    country(
        "CA",
        "H0H 0H0",
        &[positions(&[CANADA_FIRST, D, CANADA, D, CANADA, D]).shown("### ###")],
    ),
    country("CC", "6799", &[digits(&[4])]),
    country("CH", "8001", &[positions(&[NON_ZERO, D, D, D])]),
    country("CL", "8320000", &[digits(&[7]).shown("###-####")]),
    country("CN", "100000", &[digits(&[6])]),
    country("CO", "110111", &[digits(&[6])]),
    country("CR", "10101", &ZIP),
    country("CU", "10400", &[digits(&[5]).prefixed("CP").shown("CP #####")]),
    country("CV", "7600", &[digits(&[4])]),
    country("CX", "6798", &[digits(&[4])]),
    country("CY", "1010", &[digits(&[4])]),
    country("CZ", "110 00", &[digits(&[5]).shown("### ##")]),
    country("DE", "10117", &[digits(&[5])]),
    country("DK", "1050", &[digits(&[4]).prefixed("DK").shown("DK-####")]),
    country("DO", "10101", &[digits(&[5])]),
    country("DZ", "16000", &[digits(&[5])]),
    country("EC", "170150", &[digits(&[6])]),
    country("EE", "10111", &[digits(&[5])]),
    country("EG", "11511", &[digits(&[5])]),
    country("ES", "28013", &[positions(&[one("012345"), D, D, D, D])]),
    country("ET", "1000", &[digits(&[4])]),
    country("FI", "00100", &[digits(&[5]).prefixed("FI").shown("FI-#####")]),
    country("FK", "FIQQ 1ZZ", &[exact("FIQQ1ZZ").shown("#### ###")]),
    country("FM", "96941", &ZIP),
    country("FO", "100", &[digits(&[3]).prefixed("FO").shown("FO-###")]),
    country("FR", "75008", &[digits(&[5])]),
    country(
        "GB",
        "SW1A 1AA",
        &[
            positions(&[L, D, D, INWARD, INWARD]).shown("## ###"),
            positions(&[L, D, D, D, INWARD, INWARD]).shown("### ###"),
            positions(&[L, L, D, D, INWARD, INWARD]).shown("### ###"),
            positions(&[L, D, L, D, INWARD, INWARD]).shown("### ###"),
            positions(&[L, L, D, D, D, INWARD, INWARD]).shown("#### ###"),
            positions(&[L, L, D, L, D, INWARD, INWARD]).shown("#### ###"),
        ],
    ),
    country("GE", "0100", &[digits(&[4])]),
    country("GF", "97300", &[digits(&[5])]),
    country("GG", "GY1 1AA", crown!("GY")),
    country("GI", "GX11 1AA", &[exact("GX111AA").shown("#### ###")]),
    country("GL", "3900", &[positions(&[one("3"), one("9"), D, D])]),
    country("GP", "97100", &[digits(&[5])]),
    country("GR", "104 31", &[digits(&[5]).shown("### ##")]),
    country("GS", "SIQQ 1ZZ", &[exact("SIQQ1ZZ").shown("#### ###")]),
    country("GT", "01001", &[digits(&[5])]),
    country("GU", "96910", &ZIP),
    country("GW", "1000", &[digits(&[4])]),
    country("HM", "7151", &[digits(&[4])]),
    country("HN", "11101", &[digits(&[5])]),
    country("HR", "10000", &[digits(&[5]).prefixed("HR").shown("HR-#####")]),
    country("HT", "6110", &[digits(&[4]).prefixed("HT").shown("HT####")]),
    country("HU", "1051", &[positions(&[NON_ZERO, D, D, D])]),
    country("ID", "10110", &[digits(&[5])]),
    country("IE", "D02 X285", &[positions(&[L, D, X, X, X, X, X]).shown("### ####")]),
    country("IL", "9614303", &[digits(&[7]), digits(&[5])]),
    country("IM", "IM1 1AA", crown!("IM")),
    country("IN", "110 001", &[positions(&[NON_ZERO, D, D, D, D, D]).shown("### ###")]),
    country("IO", "BBND 1ZZ", &[exact("BBND1ZZ").shown("#### ###")]),
    country("IQ", "10001", &[digits(&[5])]),
    country("IR", "11936-53471", &[digits(&[10]).shown("#####-#####")]),
    country("IS", "101", &[digits(&[3])]),
    country("IT", "00144", &[digits(&[5])]),
    country("JE", "JE2 3AB", crown!("JE")),
    country("JO", "11118", &[digits(&[5])]),
    country("JP", "100-0001", &[digits(&[7]).shown("###-####")]),
    country("KE", "00100", &[digits(&[5])]),
    country("KG", "720001", &[digits(&[6])]),
    country("KH", "12000", &[digits(&[5])]),
    country("KR", "03051", &[digits(&[5])]),
    country("KW", "13001", &[digits(&[5])]),
    country("KY", "KY1-1100", &[digits(&[5]).required("KY").shown("KY#-####")]),
    country("KZ", "010000", &[digits(&[6])]),
    country("LA", "01000", &[digits(&[5])]),
    country(
        "LB",
        "2038 3054",
        &[digits(&[8]).shown("#### ####"), digits(&[4])],
    ),
    country("LI", "9490", &[positions(&[one("9"), one("4"), one("89"), D])]),
    country("LK", "00100", &[digits(&[5])]),
    country("LR", "1000", &[digits(&[4])]),
    country("LS", "100", &[digits(&[3])]),
    country("LT", "01100", &[digits(&[5]).prefixed("LT").shown("LT-#####")]),
    country("LU", "1009", &[digits(&[4])]),
    country("LV", "1050", &[digits(&[4]).prefixed("LV").shown("LV-####")]),
    country("MA", "10000", &[digits(&[5])]),
    country(
        "MC",
        "98000",
        &[positions(&[one("9"), one("8"), one("0"), D, D])
            .prefixed("MC")
            .shown("MC-#####")],
    ),
    country("MD", "2001", &[digits(&[4]).prefixed("MD").shown("MD-####")]),
    country("ME", "81000", &[digits(&[5])]),
    country("MF", "97150", &[digits(&[5])]),
    country("MG", "101", &[digits(&[3])]),
    country("MH", "96960", &ZIP),
    country("MK", "1000", &[digits(&[4])]),
    country("MM", "11181", &[digits(&[5])]),
    country("MN", "14200", &[digits(&[5])]),
    country("MP", "96950", &ZIP),
    country("MQ", "97200", &[digits(&[5])]),
    country("MS", "MSR 1110", &[digits(&[4]).required("MSR").shown("MSR ####")]),
    country("MT", "VLT 1117", &[positions(&[L, L, L, D, D, D, D]).shown("### ####")]),
    country("MU", "42602", &[digits(&[5])]),
    country("MV", "20026", &[digits(&[5])]),
    country("MW", "101100", &[digits(&[6])]),
    country("MX", "06500", &[digits(&[5])]),
    country("MY", "50050", &[digits(&[5])]),
    country("MZ", "1100", &[digits(&[4])]),
    country("NC", "98800", &[digits(&[5])]),
    country("NE", "8001", &[digits(&[4])]),
    country("NF", "2899", &[digits(&[4])]),
    country("NG", "100001", &[digits(&[6])]),
    country("NI", "11001", &[digits(&[5])]),
    country("NL", "1234 AB", &[positions(&[NON_ZERO, D, D, D, L, L]).shown("#### ##")]),
    country("NO", "0150", &[digits(&[4])]),
    country("NP", "44600", &[digits(&[5])]),
    country("NZ", "6011", &[digits(&[4])]),
    country("OM", "112", &[digits(&[3])]),
    country("PA", "0801", &[digits(&[4])]),
    country("PE", "15001", &[digits(&[5])]),
    country("PF", "98714", &[digits(&[5])]),
    country("PG", "111", &[digits(&[3])]),
    country("PH", "1000", &[digits(&[4])]),
    country("PK", "44000", &[digits(&[5])]),
    country("PL", "00-950", &[digits(&[5]).shown("##-###")]),
    country("PM", "97500", &[digits(&[5])]),
    country("PN", "PCRN 1ZZ", &[exact("PCRN1ZZ").shown("#### ###")]),
    country("PR", "00901", &ZIP),
    country("PS", "600", &[digits(&[3])]),
    country(
        "PT",
        "1000-001",
        &[digits(&[7]).shown("####-###"), digits(&[4])],
    ),
    country("PW", "96940", &ZIP),
    country("PY", "1209", &[digits(&[4])]),
    country("RE", "97400", &[digits(&[5])]),
    country("RO", "010011", &[digits(&[6])]),
    country("RS", "11000", &[digits(&[5])]),
    country("RU", "101000", &[digits(&[6])]),
    country("SA", "11564", &ZIP),
    country("SD", "11111", &[digits(&[5])]),
    country(
        "SE",
        "114 55",
        &[positions(&[NON_ZERO, D, D, D, D]).prefixed("SE").shown("SE-### ##")],
    ),
    country("SG", "018956", &[digits(&[6])]),
    country(
        "SH",
        "STHL 1ZZ",
        &[
            exact("STHL1ZZ").shown("#### ###"),
            exact("ASCN1ZZ").shown("#### ###"),
            exact("TDCU1ZZ").shown("#### ###"),
        ],
    ),
    country("SI", "1000", &[digits(&[4]).prefixed("SI").shown("SI-####")]),
    country("SJ", "9170", &[digits(&[4])]),
    country("SK", "811 01", &[digits(&[5]).shown("### ##")]),
    country(
        "SM",
        "47890",
        &[positions(&[one("4"), one("7"), one("8"), one("9"), D])],
    ),
    country("SN", "12500", &[digits(&[5])]),
    country("SO", "JH 09010", &[positions(&[L, L, D, D, D, D, D]).shown("## #####")]),
    country("SV", "1101", &[digits(&[4]).prefixed("CP").shown("CP ####")]),
    country("SZ", "H100", &[positions(&[L, D, D, D])]),
    country("TC", "TKCA 1ZZ", &[exact("TKCA1ZZ").shown("#### ###")]),
    country("TH", "10200", &[digits(&[5])]),
    country("TJ", "734000", &[digits(&[6])]),
    country("TM", "744000", &[digits(&[6])]),
    country("TN", "1000", &[digits(&[4])]),
    country("TR", "06100", &[digits(&[5])]),
    country("TT", "100110", &[digits(&[6])]),
    country("TW", "10001", &[digits(&[3, 5])]),
    country("TZ", "11101", &[digits(&[5])]),
    country("UA", "01001", &[digits(&[5])]),
    country("US", "20500", &ZIP),
    country("UY", "11000", &[digits(&[5])]),
    country("UZ", "100000", &[digits(&[6])]),
    country("VA", "00120", &[exact("00120")]),
    country("VC", "VC0100", &[digits(&[4]).required("VC").shown("VC####")]),
    country("VE", "1010", &[digits(&[4])]),
    country("VG", "VG1110", &[digits(&[4]).required("VG").shown("VG####")]),
    country("VI", "00802", &ZIP),
    country("VN", "100000", &[digits(&[6])]),
    country("WF", "98600", &[digits(&[5])]),
    country("XK", "10000", &[digits(&[5])]),
    country("YT", "97600", &[digits(&[5])]),
    country("ZA", "0001", &[digits(&[4])]),
    country("ZM", "10101", &[digits(&[5])]),
];

/// All country rule sets, sorted by country code.
pub fn all() -> &'static [CountryRules] {
    RULES
}

/// Rules for an alpha-2 code (upper-case), if the country has postal codes.
pub fn rules_for(country: &str) -> Option<&'static CountryRules> {
    RULES
        .binary_search_by(|r| r.country.cmp(country))
        .ok()
        .map(|i| &RULES[i])
}
