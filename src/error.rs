//! When parsing JSON goes wrong.

use std::error;
use std::fmt::{self, Debug, Display};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Describes why [`crate::parse`] failed.
///
/// This is a dense, flat enumeration: every parse failure is exactly one of
/// these kinds, with no further subcategories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty input or whitespace-only input.
    ExpectValue,
    /// Malformed literal/number, or an unrecognized starting byte.
    InvalidValue,
    /// Extra non-whitespace after the root value.
    RootNotSingular,
    /// Numeric literal overflows `f64` to `+-inf`.
    NumberTooBig,
    /// String terminator absent before end of input.
    MissQuotationMark,
    /// Unknown `\x` escape.
    InvalidStringEscape,
    /// Unescaped control byte (`< 0x20`) inside a string.
    InvalidStringChar,
    /// `\uXXXX` contains a non-hex digit.
    InvalidUnicodeHex,
    /// High surrogate not followed by `\u` + valid low surrogate, or a lone
    /// low surrogate.
    InvalidUnicodeSurrogate,
    /// Array malformed between or after elements.
    MissCommaOrSquareBracket,
    /// Object member does not start with `"`.
    MissKey,
    /// Object member key not followed by `:`.
    MissColon,
    /// Object malformed between or after members.
    MissCommaOrCurlyBracket,
    /// Nesting deeper than the parser's recursion limit.
    RecursionLimitExceeded,
}

impl ErrorKind {
    fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ExpectValue => "expected a value",
            ErrorKind::InvalidValue => "invalid value",
            ErrorKind::RootNotSingular => "trailing characters after the root value",
            ErrorKind::NumberTooBig => "number out of range",
            ErrorKind::MissQuotationMark => "missing closing quotation mark",
            ErrorKind::InvalidStringEscape => "invalid escape sequence",
            ErrorKind::InvalidStringChar => {
                "control character (\\u0000-\\u001F) found while parsing a string"
            }
            ErrorKind::InvalidUnicodeHex => "invalid \\u hex digits",
            ErrorKind::InvalidUnicodeSurrogate => "invalid unicode surrogate pair",
            ErrorKind::MissCommaOrSquareBracket => "expected `,` or `]`",
            ErrorKind::MissKey => "expected object key as a string",
            ErrorKind::MissColon => "expected `:`",
            ErrorKind::MissCommaOrCurlyBracket => "expected `,` or `}`",
            ErrorKind::RecursionLimitExceeded => "recursion limit exceeded",
        }
    }
}

/// An error encountered while parsing JSON text.
///
/// Carries the [`ErrorKind`] plus the byte offset into the source at which
/// the problem was detected, in the spirit of a conventional JSON parser
/// error (line/column would require re-scanning the input for newlines on
/// every error; a byte offset is cheap to produce during the parse itself
/// and callers can translate it to a line/column if they need to).
pub struct Error {
    kind: ErrorKind,
    position: usize,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, position: usize) -> Self {
        Error { kind, position }
    }

    /// The kind of parse failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The byte offset into the source text at which the error was detected.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind.as_str(), self.position)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, position: {})",
            self.kind, self.position
        )
    }
}

impl error::Error for Error {}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.position == other.position
    }
}
