//! Value Parser
//!
//! The parser pulls tokens from the lexer on demand and builds the value tree
//! by recursive descent: one routine per grammar production, each resolved by
//! the current token's tag alone. There is no backtracking and no separate
//! tokenization pass.

use crate::error::{ParseError, Result};
use crate::lexer::{Lexer, Tag};
use crate::value::Json;
use std::collections::HashMap;

/// Nesting depth allowed by the plain `parse_from_*` entry points.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Recursive-descent parser over a lexer's token stream.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, max_depth: usize) -> Self {
        Self {
            lexer: Lexer::new(source),
            max_depth,
        }
    }

    /// Parse exactly one top-level value and verify nothing follows it.
    pub fn parse_document(mut self) -> Result<Json> {
        let value = self.parse_value(0)?;
        self.lexer.expect(Tag::EndOfFile)?;
        Ok(value)
    }

    /// Parse a single value, dispatching on the next token's tag.
    fn parse_value(&mut self, depth: usize) -> Result<Json> {
        if depth >= self.max_depth {
            return Err(ParseError::DepthLimitExceeded(self.max_depth).into());
        }

        match self.lexer.peek()? {
            Tag::OpenCurly => self.parse_object(depth),
            Tag::OpenBracket => self.parse_array(depth),
            Tag::False => {
                self.lexer.consume();
                Ok(Json::Bool(false))
            }
            Tag::True => {
                self.lexer.consume();
                Ok(Json::Bool(true))
            }
            Tag::Null => {
                self.lexer.consume();
                Ok(Json::Null)
            }
            Tag::String => {
                let token = self.lexer.take()?;
                self.lexer.consume();
                Ok(Json::String(token.into_string()))
            }
            Tag::Number => {
                let token = self.lexer.take()?;
                self.lexer.consume();
                Ok(Json::Number(token.number()))
            }
            _ => {
                let token = self.lexer.take()?;
                Err(ParseError::UnexpectedExpressionStart(token.text.to_string()).into())
            }
        }
    }

    /// Parse the members of an object; the `{` is the current token.
    fn parse_object(&mut self, depth: usize) -> Result<Json> {
        self.lexer.consume();

        let mut fields = HashMap::new();
        let mut is_first = true;

        loop {
            let tag = self.lexer.peek()?;
            if tag == Tag::CloseCurly || tag == Tag::EndOfFile {
                break;
            }
            if !is_first {
                self.lexer.expect(Tag::Comma)?;
            }

            let key = self.lexer.expect(Tag::String)?.into_string();
            self.lexer.expect(Tag::Colon)?;
            let value = self.parse_value(depth + 1)?;

            if fields.contains_key(&key) {
                return Err(ParseError::DuplicateKey(key).into());
            }
            fields.insert(key, value);
            is_first = false;
        }

        self.lexer.expect(Tag::CloseCurly)?;
        Ok(Json::Object(fields))
    }

    /// Parse the elements of an array; the `[` is the current token.
    fn parse_array(&mut self, depth: usize) -> Result<Json> {
        self.lexer.consume();

        let mut values = Vec::new();
        let mut is_first = true;

        loop {
            let tag = self.lexer.peek()?;
            if tag == Tag::CloseBracket || tag == Tag::EndOfFile {
                break;
            }
            if !is_first {
                self.lexer.expect(Tag::Comma)?;
            }

            values.push(self.parse_value(depth + 1)?);
            is_first = false;
        }

        self.lexer.expect(Tag::CloseBracket)?;
        Ok(Json::Array(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::{parse_from_string, parse_from_string_with_depth};

    fn parse_err(input: &str) -> String {
        parse_from_string(input).unwrap_err().to_string()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(parse_from_string("false").unwrap(), Json::Bool(false));
        assert_eq!(parse_from_string("true").unwrap(), Json::Bool(true));
        assert_eq!(parse_from_string("null").unwrap(), Json::Null);
        assert_eq!(
            parse_from_string("\"foo\"").unwrap(),
            Json::String("foo".to_string())
        );
        assert_eq!(parse_from_string("42").unwrap(), Json::Number(42.0));
        assert_eq!(parse_from_string("-69.042").unwrap(), Json::Number(-69.042));
        assert_eq!(parse_from_string("6e+42").unwrap(), Json::Number(6e42));
    }

    #[test]
    fn test_empty_compounds() {
        assert_eq!(
            parse_from_string("{ }").unwrap(),
            Json::Object(HashMap::new())
        );
        assert_eq!(parse_from_string("[ ]").unwrap(), Json::Array(Vec::new()));
    }

    #[test]
    fn test_object_members() {
        let value = parse_from_string("{ \"foo\": null, \"bar\": 69 }").unwrap();
        let fields = value.as_object().unwrap();
        assert_eq!(fields.len(), 2);
        assert!(fields.get("foo").unwrap().is_null());
        assert_eq!(fields.get("bar").unwrap().as_f64(), Some(69.0));
    }

    #[test]
    fn test_array_order_preserved() {
        let value = parse_from_string("[ 42, null, \"x\", false ]").unwrap();
        let values = value.as_array().unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values[0], Json::Number(42.0));
        assert_eq!(values[1], Json::Null);
        assert_eq!(values[2], Json::String("x".to_string()));
        assert_eq!(values[3], Json::Bool(false));
    }

    #[test]
    fn test_nested_structures() {
        let value = parse_from_string("{\"a\": [1, {\"b\": [true]}], \"c\": {}}").unwrap();
        let fields = value.as_object().unwrap();
        let a = fields.get("a").unwrap().as_array().unwrap();
        assert_eq!(a[0], Json::Number(1.0));
        let b = a[1].as_object().unwrap().get("b").unwrap().as_array().unwrap();
        assert_eq!(b[0], Json::Bool(true));
        assert!(fields.get("c").unwrap().as_object().unwrap().is_empty());
    }

    #[test]
    fn test_unexpected_expression_start() {
        assert_eq!(parse_err(":"), "unexpected start of expression ':'");
        assert_eq!(parse_err(","), "unexpected start of expression ','");
        assert_eq!(parse_err("]"), "unexpected start of expression ']'");
        // At end of input the offending token has no source text.
        assert_eq!(parse_err(""), "unexpected start of expression ''");
    }

    #[test]
    fn test_token_mismatches() {
        assert_eq!(parse_err("{\"a\" 1}"), "expected ':', but got a number");
        assert_eq!(parse_err("{\"a\": 1 \"b\": 2}"), "expected ',', but got a string");
        assert_eq!(parse_err("{1: 2}"), "expected a string, but got a number");
        assert_eq!(parse_err("[1 2]"), "expected ',', but got a number");
        assert_eq!(parse_err("[1, 2"), "expected ']', but got end of file");
        assert_eq!(parse_err("{\"a\": 1"), "expected '}', but got end of file");
        // A comma before the closer demands another member.
        assert_eq!(parse_err("[1,]"), "unexpected start of expression ']'");
        assert_eq!(parse_err("{\"a\": 1,}"), "expected a string, but got '}'");
    }

    #[test]
    fn test_trailing_input_rejected() {
        assert_eq!(parse_err("42 43"), "expected end of file, but got a number");
        assert_eq!(parse_err("{} []"), "expected end of file, but got '['");
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = parse_from_string("{\"a\": 1, \"a\": 2}").unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::DuplicateKey(ref key)) if key == "a"
        ));
        assert_eq!(err.to_string(), "duplicate object key 'a'");
    }

    #[test]
    fn test_depth_limit() {
        let deep = |n: usize| format!("{}null{}", "[".repeat(n), "]".repeat(n));

        assert!(parse_from_string(&deep(100)).is_ok());
        let err = parse_from_string(&deep(200)).unwrap_err();
        assert_eq!(err.to_string(), "maximum nesting depth of 128 exceeded");

        assert!(parse_from_string_with_depth(&deep(8), 16).is_ok());
        let err = parse_from_string_with_depth(&deep(20), 16).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::DepthLimitExceeded(16))
        ));
    }

    #[test]
    fn test_lex_errors_propagate() {
        let err = parse_from_string("[\"foo]").unwrap_err();
        assert_eq!(err.to_string(), "unterminated string");
        assert!(matches!(err, Error::Lex(_)));
    }

    #[test]
    fn test_decoded_payloads_reach_the_tree() {
        let value = parse_from_string("{\"text\": \"a\\u0041\\n\"}").unwrap();
        let fields = value.as_object().unwrap();
        assert_eq!(fields.get("text").unwrap().as_str(), Some("aA\n"));
    }
}
