//! Notation selector.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported identifier notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum NotationKind {
    /// `HELLO_WORLD`
    UpperCase,
    /// `HelloWorld`
    PascalCase,
    /// `helloWorld`
    CamelCase,
    /// `hello-world`
    KebabCase,
    /// `hello_world`
    SnakeCase,
}

impl NotationKind {
    /// All notations, in detection order.
    pub const ALL: [NotationKind; 5] = [
        NotationKind::UpperCase,
        NotationKind::PascalCase,
        NotationKind::CamelCase,
        NotationKind::KebabCase,
        NotationKind::SnakeCase,
    ];

    /// Returns the canonical name, itself written in the notation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotationKind::UpperCase => "UPPER_CASE",
            NotationKind::PascalCase => "PascalCase",
            NotationKind::CamelCase => "camelCase",
            NotationKind::KebabCase => "kebab-case",
            NotationKind::SnakeCase => "snake_case",
        }
    }

    /// Check whether `s` is a valid identifier in this notation.
    pub fn matches(&self, s: &str) -> bool {
        crate::classify::matches(s, self.rules())
    }
}

impl fmt::Display for NotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "uppercase" | "upper" | "screamingsnakecase" => Ok(NotationKind::UpperCase),
            "pascalcase" | "pascal" => Ok(NotationKind::PascalCase),
            "camelcase" | "camel" => Ok(NotationKind::CamelCase),
            "kebabcase" | "kebab" => Ok(NotationKind::KebabCase),
            "snakecase" | "snake" => Ok(NotationKind::SnakeCase),
            _ => Err(format!(
                "unknown notation '{}', expected one of UPPER_CASE, PascalCase, camelCase, kebab-case, snake_case",
                s
            )),
        }
    }
}

impl TryFrom<String> for NotationKind {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<NotationKind> for &'static str {
    fn from(kind: NotationKind) -> Self {
        kind.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            NotationKind::from_str("UPPER_CASE").unwrap(),
            NotationKind::UpperCase
        );
        assert_eq!(
            NotationKind::from_str("screaming_snake_case").unwrap(),
            NotationKind::UpperCase
        );
        assert_eq!(
            NotationKind::from_str("PascalCase").unwrap(),
            NotationKind::PascalCase
        );
        assert_eq!(
            NotationKind::from_str("camel").unwrap(),
            NotationKind::CamelCase
        );
        assert_eq!(
            NotationKind::from_str("kebab-case").unwrap(),
            NotationKind::KebabCase
        );
        assert_eq!(
            NotationKind::from_str("Snake_Case").unwrap(),
            NotationKind::SnakeCase
        );
        assert!(NotationKind::from_str("train-case").is_err());
        assert!(NotationKind::from_str("").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in NotationKind::ALL {
            assert_eq!(kind.to_string().parse::<NotationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_display_is_written_in_its_own_notation() {
        for kind in NotationKind::ALL {
            assert!(kind.matches(kind.as_str()), "{} should match itself", kind);
        }
    }

    #[test]
    fn test_serialize() {
        #[derive(Serialize)]
        struct Config {
            notation: NotationKind,
        }
        let config = Config {
            notation: NotationKind::KebabCase,
        };
        let toml = toml::to_string(&config).unwrap();
        assert_eq!(toml.trim(), r#"notation = "kebab-case""#);
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Config {
            notation: NotationKind,
        }
        let config: Config = toml::from_str(r#"notation = "camelCase""#).unwrap();
        assert_eq!(config.notation, NotationKind::CamelCase);

        let err = toml::from_str::<Config>(r#"notation = "Title Case""#);
        assert!(err.is_err());
    }
}
