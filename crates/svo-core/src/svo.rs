//! # SVO Façade
//!
//! [`SingleValueObject`] binds the sentinel model, a type's normalizer and
//! its validator into the shared `parse` / `try_parse` / `is_valid`
//! contract. Concrete types implement only [`SingleValueObject::parse_candidate`];
//! the `impl_svo!` macro supplies the rest of the boilerplate (sentinel
//! constants, `Default`, `FromStr`, `TryFrom<&str>` and serde).
//!
//! ## JSON
//!
//! `Empty` serializes as `null`, `Unknown` as `"?"`, values through
//! [`SingleValueObject::json_form`]. Deserialization accepts strings and
//! `null`; numeric JSON is rejected unless the type overrides
//! [`SingleValueObject::from_json_integer`] or
//! [`SingleValueObject::from_json_number`].

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::Serializer;

use crate::culture::{Culture, UNKNOWN_MARKER};
use crate::error::{ArgumentError, FormatError, SvoError, SvoKind};
use crate::sentinel::{classify, Sentinel, SvoState};
use crate::verdict::RejectReason;

/// JSON shape of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonForm {
    /// `null`
    Null,
    /// A JSON string.
    Text(String),
    /// A JSON integer.
    Integer(u64),
}

/// Shared contract of every single value object.
pub trait SingleValueObject:
    Sized + Clone + Eq + Ord + Hash + Default + fmt::Display + 'static
{
    /// Normalized payload of the `Value` state.
    type Payload: Clone + Eq + Ord + Hash;

    /// Kind name used in error messages.
    const KIND: SvoKind;

    /// The Empty sentinel.
    const EMPTY: Self;

    /// The Unknown sentinel.
    const UNKNOWN: Self;

    /// Wrap a state.
    fn from_state(state: SvoState<Self::Payload>) -> Self;

    /// The current state.
    fn state(&self) -> &SvoState<Self::Payload>;

    /// Normalize and validate a trimmed candidate that is neither empty nor
    /// the unknown marker.
    fn parse_candidate(candidate: &str, culture: &Culture) -> Result<Self::Payload, RejectReason>;

    /// Parse `input` using `culture`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when the input is not empty, not the unknown
    /// marker and fails validation.
    fn parse_with(input: &str, culture: &Culture) -> Result<Self, FormatError> {
        match classify(Some(input), culture) {
            Sentinel::Empty => Ok(Self::EMPTY),
            Sentinel::Unknown => Ok(Self::UNKNOWN),
            Sentinel::Candidate(candidate) => match Self::parse_candidate(candidate, culture) {
                Ok(payload) => Ok(Self::from_state(SvoState::Value(payload))),
                Err(reason) => {
                    tracing::debug!(kind = %Self::KIND, ?reason, "rejected candidate");
                    Err(FormatError::new(Self::KIND, input))
                }
            },
        }
    }

    /// Parse `input` using the invariant culture.
    ///
    /// # Errors
    ///
    /// See [`SingleValueObject::parse_with`].
    fn parse(input: &str) -> Result<Self, FormatError> {
        Self::parse_with(input, &Culture::INVARIANT)
    }

    /// Parse `input`, returning `None` on failure.
    ///
    /// `unwrap_or_default()` on the result yields `Empty`.
    fn try_parse_with(input: &str, culture: &Culture) -> Option<Self> {
        Self::parse_with(input, culture).ok()
    }

    /// [`SingleValueObject::try_parse_with`] using the invariant culture.
    fn try_parse(input: &str) -> Option<Self> {
        Self::try_parse_with(input, &Culture::INVARIANT)
    }

    /// True if `input` is the unknown marker or a valid value. Blank input
    /// is not valid.
    fn is_valid_with(input: &str, culture: &Culture) -> bool {
        match classify(Some(input), culture) {
            Sentinel::Empty => false,
            Sentinel::Unknown => true,
            Sentinel::Candidate(candidate) => Self::parse_candidate(candidate, culture).is_ok(),
        }
    }

    /// [`SingleValueObject::is_valid_with`] using the invariant culture.
    fn is_valid(input: &str) -> bool {
        Self::is_valid_with(input, &Culture::INVARIANT)
    }

    /// True for the Empty sentinel.
    fn is_empty(&self) -> bool {
        self.state().is_empty()
    }

    /// True for the Unknown sentinel.
    fn is_unknown(&self) -> bool {
        self.state().is_unknown()
    }

    /// True for either sentinel.
    fn is_empty_or_unknown(&self) -> bool {
        self.state().is_empty_or_unknown()
    }

    /// Compare with an arbitrary value.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] when `other` is not of type `Self`.
    fn compare_any(&self, other: &dyn Any) -> Result<Ordering, ArgumentError> {
        other
            .downcast_ref::<Self>()
            .map(|other| self.cmp(other))
            .ok_or(ArgumentError { kind: Self::KIND })
    }

    /// JSON shape of this value.
    fn json_form(&self) -> JsonForm {
        match self.state() {
            SvoState::Empty => JsonForm::Null,
            SvoState::Unknown => JsonForm::Text(UNKNOWN_MARKER.to_string()),
            SvoState::Value(_) => JsonForm::Text(self.to_string()),
        }
    }

    /// Build from a JSON integer.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn from_json_integer(_value: i64) -> Result<Self, SvoError> {
        Err(SvoError::UnsupportedJson {
            kind: Self::KIND,
            from: "integer",
        })
    }

    /// Build from a JSON floating-point number.
    ///
    /// # Errors
    ///
    /// Unsupported unless overridden.
    fn from_json_number(_value: f64) -> Result<Self, SvoError> {
        Err(SvoError::UnsupportedJson {
            kind: Self::KIND,
            from: "number",
        })
    }
}

pub(crate) fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: SingleValueObject,
    S: Serializer,
{
    match value.json_form() {
        JsonForm::Null => serializer.serialize_none(),
        JsonForm::Text(text) => serializer.serialize_str(&text),
        JsonForm::Integer(n) => serializer.serialize_u64(n),
    }
}

pub(crate) struct SvoVisitor<T>(PhantomData<T>);

impl<T> SvoVisitor<T> {
    pub(crate) fn new() -> Self {
        Self(PhantomData)
    }
}

impl<'de, T: SingleValueObject> Visitor<'de> for SvoVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} string or null", T::KIND)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        T::parse(v).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<T, E> {
        Ok(T::EMPTY)
    }

    fn visit_none<E: de::Error>(self) -> Result<T, E> {
        Ok(T::EMPTY)
    }

    fn visit_some<D: de::Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        T::from_json_integer(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        match i64::try_from(v) {
            Ok(v) => self.visit_i64(v),
            Err(_) => T::from_json_number(v as f64).map_err(E::custom),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<T, E> {
        T::from_json_number(v).map_err(E::custom)
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<T, E> {
        Err(E::custom(SvoError::UnsupportedJson {
            kind: T::KIND,
            from: "boolean",
        }))
    }
}

/// Implements the sentinel boilerplate of a single value object newtype
/// `$ty(SvoState<$payload>)`. The type must provide an inherent
/// `fn normalize_candidate(&str, &Culture) -> Result<$payload, RejectReason>`.
///
/// Extra trait items (`json_form`, `from_json_*`) can be passed in braces.
macro_rules! impl_svo {
    ($ty:ident, $payload:ty, $kind:expr) => {
        impl_svo!($ty, $payload, $kind, {});
    };
    ($ty:ident, $payload:ty, $kind:expr, { $($extra:item)* }) => {
        impl $ty {
            /// The Empty sentinel.
            pub const EMPTY: Self = $ty($crate::sentinel::SvoState::Empty);

            /// The Unknown sentinel.
            pub const UNKNOWN: Self = $ty($crate::sentinel::SvoState::Unknown);
        }

        impl $crate::svo::SingleValueObject for $ty {
            type Payload = $payload;
            const KIND: $crate::error::SvoKind = $kind;
            const EMPTY: Self = $ty($crate::sentinel::SvoState::Empty);
            const UNKNOWN: Self = $ty($crate::sentinel::SvoState::Unknown);

            fn from_state(state: $crate::sentinel::SvoState<$payload>) -> Self {
                $ty(state)
            }

            fn state(&self) -> &$crate::sentinel::SvoState<$payload> {
                &self.0
            }

            fn parse_candidate(
                candidate: &str,
                culture: &$crate::culture::Culture,
            ) -> Result<$payload, $crate::verdict::RejectReason> {
                $ty::normalize_candidate(candidate, culture)
            }

            $($extra)*
        }

        impl Default for $ty {
            fn default() -> Self {
                $ty($crate::sentinel::SvoState::Empty)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::FormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::svo::SingleValueObject>::parse(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = $crate::error::FormatError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                <$ty as $crate::svo::SingleValueObject>::parse(s)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                $crate::svo::serialize(self, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer.deserialize_any($crate::svo::SvoVisitor::<$ty>::new())
            }
        }
    };
}

pub(crate) use impl_svo;
