//! Detection and conversion of identifier notations.
//!
//! Five notations are supported: `UPPER_CASE`, `PascalCase`, `camelCase`,
//! `kebab-case` and `snake_case`. Any identifier valid in one of them can be
//! rewritten in any other while keeping its words, numerals and leading or
//! trailing padding.
//!
//! ```
//! use notation::{NotationKind, to};
//!
//! assert_eq!(to("HELLO_WORLD_MATRIX", NotationKind::CamelCase).unwrap(), "helloWorldMatrix");
//! assert_eq!(notation::to_snake_case("__helloWorldMatrix").unwrap(), "__hello_world_matrix");
//! assert!(!notation::is_upper_case("HELLO__WORLD"));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod classify;
mod error;
mod kind;
mod render;
mod rules;
mod segment;

pub use classify::{
    detect, is_camel_case, is_kebab_case, is_pascal_case, is_snake_case, is_upper_case,
};
pub use error::{Error, Result};
pub use kind::NotationKind;
pub use rules::{NotationRules, WordCase};
pub use segment::{Segment, SegmentKind, SegmentSequence, segment};

/// Convert an identifier to the given notation.
///
/// Fails if `s` is not valid in any supported notation.
pub fn to(s: &str, target: NotationKind) -> Result<String> {
    tracing::trace!(input = s, notation = %target, "converting identifier");
    if !NotationKind::ALL.iter().any(|kind| kind.matches(s)) {
        tracing::debug!(input = s, "rejecting identifier in no known notation");
        return Err(Error::unrecognized(s));
    }
    Ok(segment(s).render(target))
}

/// Convert an identifier to `UPPER_CASE`.
pub fn to_upper_case(s: &str) -> Result<String> {
    to(s, NotationKind::UpperCase)
}

/// Convert an identifier to `kebab-case`.
pub fn to_kebab_case(s: &str) -> Result<String> {
    to(s, NotationKind::KebabCase)
}

/// Convert an identifier to `snake_case`.
pub fn to_snake_case(s: &str) -> Result<String> {
    to(s, NotationKind::SnakeCase)
}

/// Convert an identifier to `camelCase`.
pub fn to_camel_case(s: &str) -> Result<String> {
    to(s, NotationKind::CamelCase)
}

/// Convert an identifier to `PascalCase`.
pub fn to_pascal_case(s: &str) -> Result<String> {
    to(s, NotationKind::PascalCase)
}
