//! Validation and parsing of JSON number literals.

use crate::error::ErrorKind;

/// Validates the number grammar starting at `start` and returns the index
/// just past the last byte of the number.
///
/// Grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`. A
/// leading zero followed directly by another digit is rejected by this
/// grammar itself: after consuming a bare `0`, the loop simply stops, so
/// `0123` validates only the leading `0` and leaves `123` as unconsumed
/// trailing input (the caller turns that into `RootNotSingular` or a
/// `MissComma...` depending on context).
pub(crate) fn validate(bytes: &[u8], start: usize) -> Result<usize, (ErrorKind, usize)> {
    let mut i = start;
    let len = bytes.len();

    if i < len && bytes[i] == b'-' {
        i += 1;
    }

    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            i += 1;
            while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
        _ => return Err((ErrorKind::InvalidValue, start)),
    }

    if bytes.get(i) == Some(&b'.') {
        let digits_start = i + 1;
        let mut j = digits_start;
        while matches!(bytes.get(j), Some(b'0'..=b'9')) {
            j += 1;
        }
        if j == digits_start {
            return Err((ErrorKind::InvalidValue, start));
        }
        i = j;
    }

    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let digits_start = j;
        while matches!(bytes.get(j), Some(b'0'..=b'9')) {
            j += 1;
        }
        if j == digits_start {
            return Err((ErrorKind::InvalidValue, start));
        }
        i = j;
    }

    Ok(i)
}

/// Parses the already-validated substring `bytes[start..end]` to `f64`.
pub(crate) fn to_f64(bytes: &[u8], start: usize, end: usize) -> Result<f64, (ErrorKind, usize)> {
    let text = std::str::from_utf8(&bytes[start..end]).expect("validated number is ASCII");
    let value: f64 = text
        .parse()
        .map_err(|_| (ErrorKind::InvalidValue, start))?;
    if value.is_infinite() {
        return Err((ErrorKind::NumberTooBig, start));
    }
    Ok(value)
}
