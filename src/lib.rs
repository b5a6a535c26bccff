//! JSON parser implementation.
//!
//! Converts raw JSON text into an in-memory [`Json`] value tree, rejecting
//! malformed input with a precise diagnostic.
//!
//! # Parsing Pipeline
//!
//! The parser operates in two strictly layered phases:
//!
//! 1. **Lexer**: scans the input buffer and produces typed tokens through a
//!    one-token lookahead interface, decoding string and number literals as
//!    it goes.
//!
//! 2. **Value Parser**: pulls tokens on demand and builds the value tree by
//!    recursive descent.
//!
//! The whole input is held in memory and processed synchronously; a call
//! either returns one complete tree or one error. Each parse owns its own
//! lexer and buffer, so parses of independent inputs never share state.

mod error;
mod lexer;
mod parser;
mod value;

pub use error::{Error, LexError, ParseError, Result};
pub use lexer::{Lexer, Payload, Tag, Token, LOOKAHEAD};
pub use parser::DEFAULT_MAX_DEPTH;
pub use value::Json;

/// Parse a JSON document from a string.
///
/// Rejects anything after the top-level value and limits nesting to
/// [`DEFAULT_MAX_DEPTH`].
///
/// # Example
///
/// ```
/// use libjson::{parse_from_string, Json};
///
/// let value = parse_from_string("[42, null]").unwrap();
/// assert_eq!(value.as_array().unwrap()[0], Json::Number(42.0));
/// ```
pub fn parse_from_string(input: &str) -> Result<Json> {
    parser::Parser::new(input, DEFAULT_MAX_DEPTH).parse_document()
}

/// Parse a JSON document from a string with a caller-chosen nesting limit.
pub fn parse_from_string_with_depth(input: &str, max_depth: usize) -> Result<Json> {
    parser::Parser::new(input, max_depth).parse_document()
}

/// Parse a JSON document from a file.
///
/// Reads the whole file into memory first; there is no streaming.
pub fn parse_from_file(path: &str) -> Result<Json> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_string(),
        source,
    })?;
    parse_from_string(&text)
}
