//! Pretty-printed JSON text output.

use crate::value::Value;
use std::fmt::{self, Write};

const INDENT_WIDTH: usize = 2;

/// Serializes `value` as pretty-printed JSON text.
///
/// Arrays and objects are printed one member per line with a two-space
/// indent per nesting level; `null`, booleans, numbers and strings are
/// always printed inline.
pub fn to_string_pretty(value: &Value) -> String {
    let mut out = String::with_capacity(256);
    // A `String` can't fail to grow (barring allocation failure, which Rust
    // turns into an abort), so the `fmt::Result` here is always `Ok`.
    write_pretty(value, &mut out).expect("writing to a String cannot fail");
    out
}

/// Writes `value` as pretty-printed JSON text into `out`.
pub fn write_pretty<W: Write>(value: &Value, out: &mut W) -> fmt::Result {
    write_value(value, out, 1)
}

fn write_value<W: Write>(value: &Value, out: &mut W, indent_level: usize) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(true) => out.write_str("true"),
        Value::Bool(false) => out.write_str("false"),
        Value::Number(n) => write_number(*n, out),
        Value::String(s) => write_string(s, out),
        Value::Array(elements) => write_array(elements, out, indent_level),
        Value::Object(members) => write_object(members, out, indent_level),
    }
}

fn write_number<W: Write>(n: f64, out: &mut W) -> fmt::Result {
    if !n.is_finite() {
        // JSON has no literal for NaN/Infinity; a `Value` built by hand with
        // such a payload still has to serialize to *something* parseable, so
        // it degrades to `null` rather than panicking (`ryu` itself is
        // documented to reject non-finite input).
        return out.write_str("null");
    }
    if n == 0.0 && n.is_sign_negative() {
        return out.write_str("-0");
    }
    if n.fract() == 0.0 && n.abs() < 1e17 {
        // Whole numbers print without a trailing ".0" or exponent, matching
        // what every other JSON emitter does for integral values.
        let mut buffer = itoa::Buffer::new();
        return out.write_str(buffer.format(n as i64));
    }
    let mut buffer = ryu::Buffer::new();
    out.write_str(buffer.format(n))
}

fn write_string<W: Write>(s: &str, out: &mut W) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\u{8}' => out.write_str("\\b")?,
            '\u{c}' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04X}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

fn write_array<W: Write>(elements: &[Value], out: &mut W, indent_level: usize) -> fmt::Result {
    out.write_char('[')?;
    if elements.is_empty() {
        return out.write_char(']');
    }
    out.write_char('\n')?;
    for (i, element) in elements.iter().enumerate() {
        write_indent(out, indent_level)?;
        write_value(element, out, indent_level + 1)?;
        if i + 1 < elements.len() {
            out.write_char(',')?;
        }
        out.write_char('\n')?;
    }
    write_indent(out, indent_level - 1)?;
    out.write_char(']')
}

fn write_object<W: Write>(members: &crate::map::Map, out: &mut W, indent_level: usize) -> fmt::Result {
    out.write_char('{')?;
    if members.is_empty() {
        return out.write_char('}');
    }
    out.write_char('\n')?;
    let len = members.len();
    for (i, (key, value)) in members.iter().enumerate() {
        write_indent(out, indent_level)?;
        write_string(key, out)?;
        out.write_str(" : ")?;
        write_value(value, out, indent_level + 1)?;
        if i + 1 < len {
            out.write_char(',')?;
        }
        out.write_char('\n')?;
    }
    write_indent(out, indent_level - 1)?;
    out.write_char('}')
}

fn write_indent<W: Write>(out: &mut W, indent_level: usize) -> fmt::Result {
    for _ in 0..indent_level * INDENT_WIDTH {
        out.write_char(' ')?;
    }
    Ok(())
}
