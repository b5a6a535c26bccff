//! Error types for JSON parsing.

use crate::lexer::Tag;
use thiserror::Error;

/// Result type for JSON parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the tokenizer.
///
/// Each variant names the offending character or input so the caller can see
/// exactly what the lexer choked on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    /// End of input reached before the closing quote of a string literal.
    #[error("unterminated string")]
    UnterminatedString,

    /// Backslash followed by a character that is not a recognized escape.
    #[error("invalid escape sequence '{0}'")]
    InvalidEscape(char),

    /// Raw (unescaped) control character inside a string literal.
    #[error("unexpected control sequence '{0}'")]
    ControlCharacter(u32),

    /// Fewer than 4 characters remaining after `\u`.
    #[error("expected at least 4 characters, but got {0}")]
    UnicodeEscapeTooShort(usize),

    /// Non-hexadecimal digit inside a `\u` escape.
    #[error("expected hexadecimal digit, but got '{0}'")]
    ExpectedHexDigit(char),

    /// Surrogate half whose partner escape is missing or mismatched.
    #[error("unpaired surrogate escape '\\u{0:04X}'")]
    UnpairedSurrogate(u16),

    /// Alphabetic run that is not `false`, `true`, or `null`.
    #[error("invalid keyword '{0}'")]
    InvalidKeyword(String),

    /// Character that cannot start any token.
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),

    /// Missing digit in a number literal, with `'\0'` standing for the
    /// input terminator.
    #[error("expected digit, but got '{0}'")]
    ExpectedDigit(char),
}

/// Error type for the value parser.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The next token's tag did not match what the grammar requires.
    #[error("expected {expected}, but got {found}")]
    UnexpectedToken { expected: Tag, found: Tag },

    /// A token that cannot begin a value.
    #[error("unexpected start of expression '{0}'")]
    UnexpectedExpressionStart(String),

    /// An object member re-used the key of an earlier member.
    #[error("duplicate object key '{0}'")]
    DuplicateKey(String),

    /// Input nesting exceeded the configured limit.
    #[error("maximum nesting depth of {0} exceeded")]
    DepthLimitExceeded(usize),
}

/// Any failure a `parse_from_*` entry point can return.
#[derive(Error, Debug)]
pub enum Error {
    /// The tokenizer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The value parser rejected the token stream.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The input file could not be read.
    #[error("cannot read file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
