//! # json_dom
//!
//! A small, strict JSON library: a Document Object Model ([`Value`]), an
//! RFC 8259-conformant parser ([`parse`]), and a pretty-printing
//! stringifier ([`to_string_pretty`]).
//!
//! ```rust
//! use json_dom::Value;
//!
//! let value = json_dom::parse(r#"{"a": 1, "b": [true, null]}"#).unwrap();
//! assert_eq!(value.find_object_value("a"), Some(&Value::Number(1.0)));
//!
//! let text = json_dom::to_string_pretty(&value);
//! assert_eq!(json_dom::parse(&text).unwrap(), value);
//! ```
//!
//! The parser is strict RFC 8259: no comments, no trailing commas, no
//! unquoted keys, no `NaN`/`Infinity` literals. See [`ErrorKind`] for the
//! full taxonomy of ways a parse can fail.

mod map;
mod parser;
mod stringify;
mod value;

pub mod error;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::map::{Iter, Map, Member};
pub use crate::parser::parse;
pub use crate::stringify::{to_string_pretty, write_pretty};
pub use crate::value::{Type, Value};
