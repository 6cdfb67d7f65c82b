//! # Culture — Explicit Locale Configuration
//!
//! A [`Culture`] carries the locale-dependent pieces the value objects need:
//! the decimal and group separators for percentages, where the percent
//! marker goes when formatting, and the phrases that mean "unknown".
//!
//! There is no ambient current culture. Every `*_with` operation takes a
//! culture argument; the culture-less convenience wrappers use
//! [`Culture::INVARIANT`].

use std::fmt;

/// Position of the percent marker when formatting a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerPosition {
    /// `17.51%`
    Suffix,
    /// `17,51 %`
    SpacedSuffix,
    /// `%17,51`
    Prefix,
}

/// Locale settings used when parsing and formatting value objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Culture {
    /// BCP 47 style name, e.g. `nl-NL`. Empty for the invariant culture.
    pub name: &'static str,
    /// Decimal separator.
    pub decimal_separator: char,
    /// Digit group separator.
    pub group_separator: char,
    /// Where the percent marker is written.
    pub marker_position: MarkerPosition,
    /// Lower-case phrases, besides `?`, that parse as Unknown.
    pub unknown_phrases: &'static [&'static str],
}

/// The universal unknown marker, accepted in every culture.
pub const UNKNOWN_MARKER: &str = "?";

impl Culture {
    /// Culture-neutral settings.
    pub const INVARIANT: Culture = Culture {
        name: "",
        decimal_separator: '.',
        group_separator: ',',
        marker_position: MarkerPosition::Suffix,
        unknown_phrases: &["unknown"],
    };

    /// English (United States).
    pub const EN_US: Culture = Culture {
        name: "en-US",
        ..Self::INVARIANT
    };

    /// English (United Kingdom).
    pub const EN_GB: Culture = Culture {
        name: "en-GB",
        ..Self::INVARIANT
    };

    /// Dutch (Netherlands).
    pub const NL_NL: Culture = Culture {
        name: "nl-NL",
        decimal_separator: ',',
        group_separator: '.',
        marker_position: MarkerPosition::Suffix,
        unknown_phrases: &["onbekend"],
    };

    /// Dutch (Belgium).
    pub const NL_BE: Culture = Culture {
        name: "nl-BE",
        marker_position: MarkerPosition::SpacedSuffix,
        ..Self::NL_NL
    };

    /// French (France).
    pub const FR_FR: Culture = Culture {
        name: "fr-FR",
        decimal_separator: ',',
        group_separator: '\u{202F}',
        marker_position: MarkerPosition::SpacedSuffix,
        unknown_phrases: &["inconnu"],
    };

    /// German (Germany).
    pub const DE_DE: Culture = Culture {
        name: "de-DE",
        decimal_separator: ',',
        group_separator: '.',
        marker_position: MarkerPosition::SpacedSuffix,
        unknown_phrases: &["unbekannt"],
    };

    /// Spanish (Spain).
    pub const ES_ES: Culture = Culture {
        name: "es-ES",
        decimal_separator: ',',
        group_separator: '.',
        marker_position: MarkerPosition::SpacedSuffix,
        unknown_phrases: &["desconocido"],
    };

    /// Portuguese (Portugal).
    pub const PT_PT: Culture = Culture {
        name: "pt-PT",
        decimal_separator: ',',
        group_separator: '\u{A0}',
        marker_position: MarkerPosition::Suffix,
        unknown_phrases: &["não sabe", "desconhecido"],
    };

    /// Portuguese (Brazil).
    pub const PT_BR: Culture = Culture {
        name: "pt-BR",
        group_separator: '.',
        ..Self::PT_PT
    };

    /// Turkish (Turkey).
    pub const TR_TR: Culture = Culture {
        name: "tr-TR",
        decimal_separator: ',',
        group_separator: '.',
        marker_position: MarkerPosition::Prefix,
        unknown_phrases: &["bilinmiyor"],
    };

    /// All predefined cultures.
    pub fn all() -> &'static [Culture] {
        &[
            Self::INVARIANT,
            Self::EN_US,
            Self::EN_GB,
            Self::NL_NL,
            Self::NL_BE,
            Self::FR_FR,
            Self::DE_DE,
            Self::ES_ES,
            Self::PT_PT,
            Self::PT_BR,
            Self::TR_TR,
        ]
    }

    /// Resolve a culture by name, case-insensitively.
    ///
    /// An exact match wins; otherwise `xx-YY` falls back to the first
    /// culture with language `xx`. The empty string and `"invariant"`
    /// resolve to [`Culture::INVARIANT`].
    pub fn by_name(name: &str) -> Option<&'static Culture> {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("invariant") {
            return Self::all().first();
        }
        if let Some(exact) = Self::all()
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
        {
            return Some(exact);
        }
        let language = name.split(['-', '_']).next().unwrap_or(name);
        Self::all().iter().find(|c| {
            c.language()
                .is_some_and(|l| l.eq_ignore_ascii_case(language))
        })
    }

    /// The language part of the name (`nl` for `nl-BE`).
    pub fn language(&self) -> Option<&'static str> {
        self.name.split('-').next().filter(|l| !l.is_empty())
    }

    /// Whether `trimmed` is the unknown marker in this culture.
    pub fn is_unknown_marker(&self, trimmed: &str) -> bool {
        if trimmed == UNKNOWN_MARKER {
            return true;
        }
        let lower = trimmed.to_lowercase();
        self.unknown_phrases.iter().any(|p| *p == lower)
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::INVARIANT
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str("invariant")
        } else {
            f.write_str(self.name)
        }
    }
}
