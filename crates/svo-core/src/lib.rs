#![deny(missing_docs)]

//! # svo-core — Single Value Objects
//!
//! Immutable, validated wrappers around one primitive payload: [`Iban`],
//! [`Bic`], [`Country`], [`PostalCode`], [`Percentage`] and
//! [`HouseNumber`]. Construction validates, so downstream code never needs
//! to re-check a value.
//!
//! ## Design Principles
//!
//! 1. **Three states, one ordering.** Every value is Empty, Unknown or a
//!    validated payload ([`SvoState`]). Empty sorts first, then Unknown,
//!    then values in payload order.
//!
//! 2. **One façade.** [`SingleValueObject`] supplies `parse`, `try_parse`
//!    and `is_valid` for every type. A type only contributes its normalizer
//!    and validator.
//!
//! 3. **Static tables, linear matching.** Country, IBAN layout and postal
//!    code tables are sorted `static` slices. Postal codes are matched with
//!    per-position character classes, never a backtracking regex.
//!
//! 4. **Explicit culture.** There is no ambient locale; see [`Culture`].
//!
//! 5. **[`SvoError`] hierarchy.** Structured errors with `thiserror`, no
//!    `.unwrap()` outside tests.

pub mod bic;
pub mod checksum;
pub mod country;
pub mod culture;
pub mod error;
pub mod house_number;
pub mod iban;
mod normalize;
pub mod percentage;
pub mod postal;
pub mod sentinel;
pub mod svo;
pub mod verdict;

// Re-export primary types at crate root for ergonomic imports.
pub use bic::Bic;
pub use country::Country;
pub use culture::{Culture, MarkerPosition};
pub use error::{ArgumentError, FormatError, RangeError, SvoError, SvoKind};
pub use house_number::HouseNumber;
pub use iban::Iban;
pub use normalize::Marker;
pub use percentage::Percentage;
pub use postal::PostalCode;
pub use sentinel::SvoState;
pub use svo::SingleValueObject;
pub use verdict::{RejectReason, ValidationVerdict};

/// Glob import for callers: the types plus the façade trait.
pub mod prelude {
    pub use crate::{
        Bic, Country, Culture, HouseNumber, Iban, Percentage, PostalCode, SingleValueObject,
    };
}
