//! Diagnostic types for tokenizing and parsing failures.

use thiserror::Error;

/// A single problem found in the input.
///
/// Lexical diagnostics carry the 1-based line number (and byte position)
/// where scanning stopped; syntactic diagnostics identify tokens only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Input ended before a string literal's closing quote.
    #[error("unterminated string \"{span}\" at line {line}, position {position}")]
    UnterminatedString {
        span: String,
        line: usize,
        position: usize,
    },

    /// A backslash escape outside the accepted set `" / \ b f n r t`.
    #[error("invalid escape character '{found}' in string \"{span}\" at line {line}, position {position}")]
    InvalidEscape {
        found: char,
        span: String,
        line: usize,
        position: usize,
    },

    /// A character no lexical rule accepts.
    #[error("unrecognized character '{found}' at line {line}")]
    UnrecognizedCharacter { found: char, line: usize },

    /// A token that cannot start a value. `found` is a rendered description
    /// such as `'}'` or `end of input`.
    #[error("unexpected token {found}")]
    UnexpectedToken { found: String },

    /// A container was not closed by the delimiter the grammar requires.
    #[error("expected '{expected}' but found {found}")]
    MissingDelimiter { expected: char, found: String },

    /// A numeric literal the lexical rules let through but that does not
    /// convert to a float (e.g. `1..2`).
    #[error("could not parse '{literal}' as a number")]
    InvalidNumber { literal: String },
}

/// Ordered list of every diagnostic a failed pass accumulated.
pub type Diagnostics = Vec<Diagnostic>;

/// Convenience alias used throughout jot-core.
pub type Result<T> = std::result::Result<T, Diagnostics>;
