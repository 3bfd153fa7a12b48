//! A strict, recursive-descent RFC 8259 parser.

mod number;
mod string;

use crate::error::{Error, ErrorKind};
use crate::map::Map;
use crate::value::Value;

/// Values nested deeper than this are rejected with
/// [`ErrorKind::RecursionLimitExceeded`] instead of exhausting the call
/// stack. A recursive-descent parser over untrusted input has to bound its
/// own recursion depth.
const MAX_DEPTH: usize = 128;

/// Parses `text` as a single JSON value.
///
/// On success, every byte of `text` other than leading/trailing whitespace
/// has been consumed by exactly one value. On failure, no partial `Value`
/// is returned: the `Result` signature makes that the type system's job
/// rather than a "reset the output to Null" step the caller could forget.
pub fn parse(text: &str) -> Result<Value, Error> {
    let mut parser = Parser {
        bytes: text.as_bytes(),
        text,
        pos: 0,
        depth: 0,
    };
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos != parser.bytes.len() {
        return Err(Error::new(ErrorKind::RootNotSingular, parser.pos));
    }
    Ok(value)
}

struct Parser<'a> {
    bytes: &'a [u8],
    text: &'a str,
    pos: usize,
    depth: usize,
}

type PResult<T> = Result<T, (ErrorKind, usize)>;

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn parse_value(&mut self) -> Result<Value, Error> {
        self.parse_value_inner()
            .map_err(|(kind, position)| Error::new(kind, position))
    }

    fn parse_value_inner(&mut self) -> PResult<Value> {
        match self.peek() {
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b't') => self.parse_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Bool(false)),
            Some(b'"') => {
                let (s, end) = string::parse_string_body(self.text, self.pos + 1)?;
                self.pos = end;
                Ok(Value::String(s))
            }
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            None => Err((ErrorKind::ExpectValue, self.pos)),
            Some(_) => self.parse_number(),
        }
    }

    fn parse_literal(&mut self, literal: &'static [u8], value: Value) -> PResult<Value> {
        let start = self.pos;
        if self.bytes.len() < start + literal.len() || &self.bytes[start..start + literal.len()] != literal {
            return Err((ErrorKind::InvalidValue, start));
        }
        self.pos += literal.len();
        Ok(value)
    }

    fn parse_number(&mut self) -> PResult<Value> {
        let start = self.pos;
        let end = number::validate(self.bytes, start)?;
        let value = number::to_f64(self.bytes, start, end)?;
        self.pos = end;
        Ok(Value::Number(value))
    }

    fn enter(&mut self) -> PResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err((ErrorKind::RecursionLimitExceeded, self.pos));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_array(&mut self) -> PResult<Value> {
        self.enter()?;
        self.pos += 1; // consume '['
        self.skip_whitespace();

        let mut elements = Vec::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            self.leave();
            return Ok(Value::Array(elements));
        }

        loop {
            let element = self.parse_value_inner()?;
            elements.push(element);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.pos += 1;
                    self.leave();
                    return Ok(Value::Array(elements));
                }
                _ => return Err((ErrorKind::MissCommaOrSquareBracket, self.pos)),
            }
        }
    }

    fn parse_object(&mut self) -> PResult<Value> {
        self.enter()?;
        self.pos += 1; // consume '{'
        self.skip_whitespace();

        let mut members = Map::new();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            self.leave();
            return Ok(Value::Object(members));
        }

        loop {
            if self.peek() != Some(b'"') {
                return Err((ErrorKind::MissKey, self.pos));
            }
            let (key, end) = string::parse_string_body(self.text, self.pos + 1)?;
            self.pos = end;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err((ErrorKind::MissColon, self.pos));
            }
            self.pos += 1;
            self.skip_whitespace();
            let value = self.parse_value_inner()?;
            members.push(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.pos += 1;
                    self.leave();
                    return Ok(Value::Object(members));
                }
                _ => return Err((ErrorKind::MissCommaOrCurlyBracket, self.pos)),
            }
        }
    }
}
