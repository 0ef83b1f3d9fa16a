use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Result type for conversions
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("'{input}' is not written in any supported notation")]
    #[diagnostic(
        code(notation::unrecognized),
        help(
            "use UPPER_CASE, PascalCase, camelCase, kebab-case or snake_case; separators may not repeat between words"
        )
    )]
    UnrecognizedNotation {
        #[source_code]
        src: String,
        #[label("unrecognized identifier")]
        span: SourceSpan,
        input: String,
    },
}

impl Error {
    /// Create an unrecognized notation error covering the whole input
    pub fn unrecognized(input: impl Into<String>) -> Self {
        let input = input.into();
        Error::UnrecognizedNotation {
            src: input.clone(),
            span: SourceSpan::from((0, input.len())),
            input,
        }
    }

    /// The input that was rejected
    pub fn input(&self) -> &str {
        match self {
            Error::UnrecognizedNotation { input, .. } => input,
        }
    }
}
