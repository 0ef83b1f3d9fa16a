//! Per-notation grammar and rendering descriptors.

use crate::NotationKind;

/// How the letters of a word are cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCase {
    /// `HELLO`
    Upper,
    /// `hello`
    Lower,
    /// `Hello`
    Capitalized,
}

impl WordCase {
    /// Apply this casing to an ASCII word. Digits pass through unchanged.
    pub fn apply(&self, word: &str) -> String {
        match self {
            WordCase::Upper => word.to_ascii_uppercase(),
            WordCase::Lower => word.to_ascii_lowercase(),
            WordCase::Capitalized => {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(c) => std::iter::once(c.to_ascii_uppercase())
                        .chain(chars.map(|c| c.to_ascii_lowercase()))
                        .collect(),
                }
            }
        }
    }
}

/// Notation descriptor.
///
/// A single record drives both classification and rendering, so the five
/// notations differ only in the values of these fields.
#[derive(Debug, Clone, Copy)]
pub struct NotationRules {
    /// The notation described by these rules
    pub kind: NotationKind,
    /// Character placed between words, `None` when boundaries are carried by capitals
    pub separator: Option<char>,
    /// Casing of the first word
    pub first: WordCase,
    /// Casing of every following word
    pub rest: WordCase,
    /// Characters allowed in leading and trailing runs
    pub padding: &'static [char],
}

impl NotationRules {
    /// Casing of letters that continue a word after a digit run.
    pub fn continuation(&self) -> WordCase {
        match self.rest {
            WordCase::Upper => WordCase::Upper,
            WordCase::Lower | WordCase::Capitalized => WordCase::Lower,
        }
    }

    /// Check if `c` may appear in a leading or trailing run.
    pub fn is_padding(&self, c: char) -> bool {
        self.padding.contains(&c)
    }
}

/// `HELLO_WORLD`
pub const UPPER_CASE: NotationRules = NotationRules {
    kind: NotationKind::UpperCase,
    separator: Some('_'),
    first: WordCase::Upper,
    rest: WordCase::Upper,
    padding: &['_'],
};

/// `HelloWorld`
pub const PASCAL_CASE: NotationRules = NotationRules {
    kind: NotationKind::PascalCase,
    separator: None,
    first: WordCase::Capitalized,
    rest: WordCase::Capitalized,
    padding: &['_'],
};

/// `helloWorld`
pub const CAMEL_CASE: NotationRules = NotationRules {
    kind: NotationKind::CamelCase,
    separator: None,
    first: WordCase::Lower,
    rest: WordCase::Capitalized,
    padding: &['_'],
};

/// `hello-world`
pub const KEBAB_CASE: NotationRules = NotationRules {
    kind: NotationKind::KebabCase,
    separator: Some('-'),
    first: WordCase::Lower,
    rest: WordCase::Lower,
    padding: &['_', '-'],
};

/// `hello_world`
pub const SNAKE_CASE: NotationRules = NotationRules {
    kind: NotationKind::SnakeCase,
    separator: Some('_'),
    first: WordCase::Lower,
    rest: WordCase::Lower,
    padding: &['_'],
};

impl NotationKind {
    /// Get the descriptor for this notation.
    pub fn rules(&self) -> &'static NotationRules {
        match self {
            NotationKind::UpperCase => &UPPER_CASE,
            NotationKind::PascalCase => &PASCAL_CASE,
            NotationKind::CamelCase => &CAMEL_CASE,
            NotationKind::KebabCase => &KEBAB_CASE,
            NotationKind::SnakeCase => &SNAKE_CASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_case_apply() {
        assert_eq!(WordCase::Upper.apply("world1"), "WORLD1");
        assert_eq!(WordCase::Lower.apply("WoRlD"), "world");
        assert_eq!(WordCase::Capitalized.apply("wORLD"), "World");
        assert_eq!(WordCase::Capitalized.apply("123"), "123");
        assert_eq!(WordCase::Capitalized.apply(""), "");
    }

    #[test]
    fn test_rules_table_is_consistent() {
        for kind in NotationKind::ALL {
            assert_eq!(kind.rules().kind, kind);
            assert!(kind.rules().is_padding('_'));
        }
    }

    #[test]
    fn test_continuation() {
        assert_eq!(UPPER_CASE.continuation(), WordCase::Upper);
        assert_eq!(PASCAL_CASE.continuation(), WordCase::Lower);
        assert_eq!(CAMEL_CASE.continuation(), WordCase::Lower);
        assert_eq!(KEBAB_CASE.continuation(), WordCase::Lower);
    }

    #[test]
    fn test_kebab_accepts_dash_padding() {
        assert!(KEBAB_CASE.is_padding('-'));
        assert!(!SNAKE_CASE.is_padding('-'));
        assert!(!CAMEL_CASE.is_padding('-'));
    }
}
