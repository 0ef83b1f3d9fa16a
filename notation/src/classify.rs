//! Notation grammars.
//!
//! Every notation is checked by the same scanner, parametrized by its
//! [`NotationRules`]. Leading and trailing padding runs of any length are
//! accepted; everything between them (the core) must follow the notation's
//! word structure exactly.

use crate::{
    NotationKind,
    rules::{self, NotationRules, WordCase},
};

/// Check whether `s` is a valid identifier under `rules`.
pub(crate) fn matches(s: &str, rules: &NotationRules) -> bool {
    let core = s.trim_matches(|c: char| rules.is_padding(c));
    if core.is_empty() {
        return false;
    }
    match rules.separator {
        Some(separator) => matches_delimited(core, separator, rules.first),
        None => matches_capitalized(core, rules.first),
    }
}

/// Words of `[a-z0-9]+` (or `[A-Z0-9]+`) separated by exactly one separator.
fn matches_delimited(core: &str, separator: char, case: WordCase) -> bool {
    let is_letter = |c: char| match case {
        WordCase::Upper => c.is_ascii_uppercase(),
        WordCase::Lower | WordCase::Capitalized => c.is_ascii_lowercase(),
    };

    let mut has_letter = false;
    for word in core.split(separator) {
        // An empty word means two separators in a row
        if word.is_empty() {
            return false;
        }
        for c in word.chars() {
            if is_letter(c) {
                has_letter = true;
            } else if !c.is_ascii_digit() {
                return false;
            }
        }
    }
    has_letter
}

/// Words of `[A-Z][a-z0-9]*`, the first one possibly lowercase-led.
fn matches_capitalized(core: &str, first: WordCase) -> bool {
    let mut chars = core.chars();
    match (chars.next(), first) {
        (Some(c), WordCase::Lower) if c.is_ascii_lowercase() => {}
        (Some(c), WordCase::Capitalized | WordCase::Upper) if c.is_ascii_uppercase() => {}
        _ => return false,
    }

    let mut has_lower = core.starts_with(|c: char| c.is_ascii_lowercase());
    // A word is "bare" while it holds a single capital and nothing else
    let mut word_is_bare = !has_lower;
    let mut prev_word_bare = false;
    for c in chars {
        if c.is_ascii_uppercase() {
            if word_is_bare && prev_word_bare {
                return false;
            }
            prev_word_bare = word_is_bare;
            word_is_bare = true;
        } else if c.is_ascii_lowercase() {
            has_lower = true;
            word_is_bare = false;
        } else if c.is_ascii_digit() {
            word_is_bare = false;
        } else {
            return false;
        }
    }
    if word_is_bare && prev_word_bare {
        return false;
    }
    has_lower
}

/// Check if `s` is `UPPER_CASE`.
pub fn is_upper_case(s: &str) -> bool {
    matches(s, &rules::UPPER_CASE)
}

/// Check if `s` is `PascalCase`.
pub fn is_pascal_case(s: &str) -> bool {
    matches(s, &rules::PASCAL_CASE)
}

/// Check if `s` is `camelCase`.
pub fn is_camel_case(s: &str) -> bool {
    matches(s, &rules::CAMEL_CASE)
}

/// Check if `s` is `kebab-case`.
pub fn is_kebab_case(s: &str) -> bool {
    matches(s, &rules::KEBAB_CASE)
}

/// Check if `s` is `snake_case`.
pub fn is_snake_case(s: &str) -> bool {
    matches(s, &rules::SNAKE_CASE)
}

/// Every notation `s` is valid in, in [`NotationKind::ALL`] order.
///
/// A single lowercase word such as `hello` is valid in several notations at
/// once; an empty result means the string is not an identifier at all.
pub fn detect(s: &str) -> Vec<NotationKind> {
    NotationKind::ALL
        .into_iter()
        .filter(|kind| kind.matches(s))
        .collect()
}
