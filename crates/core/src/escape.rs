//! Textual escape form for characters outside ASCII.
//!
//! A non-ASCII character travels as the body of its backslash escape
//! (without the backslash), using the shortest of three widths:
//!
//! | code point       | form              |
//! |------------------|-------------------|
//! | `..=0xFF`        | `x` + 2 hex       |
//! | `..=0xFFFF`      | `u` + 4 hex       |
//! | above            | `U` + 8 hex       |
//!
//! Every character of the uppercased form is in the symbol table, so the
//! body can be carried as ordinary morse. Case does not survive the trip,
//! so [`unescape`] picks the width from the digit count, not the prefix case.

use crate::error::EscapeError;

/// Escape body for `c`, lowercase hex (e.g. `u597d` for `好`).
pub fn escape_form(c: char) -> String {
    let cp = c as u32;
    if cp <= 0xFF {
        format!("x{cp:02x}")
    } else if cp <= 0xFFFF {
        format!("u{cp:04x}")
    } else {
        format!("U{cp:08x}")
    }
}

/// Reverse [`escape_form`], accepting any letter case.
///
/// # Errors
/// Returns an [`EscapeError`] when the body is empty, has an unknown prefix,
/// a width other than 2/4/8 hex digits, non-hex content, or names a value
/// that is not a Unicode scalar value.
pub fn unescape(body: &str) -> Result<char, EscapeError> {
    let mut chars = body.chars();
    let prefix = chars.next().ok_or(EscapeError::Empty)?;
    if !matches!(prefix, 'x' | 'X' | 'u' | 'U') {
        return Err(EscapeError::UnknownPrefix(prefix));
    }

    let digits = chars.as_str();
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EscapeError::NotHex(digits.to_string()));
    }

    match digits.len() {
        2 | 4 | 8 => {}
        n => return Err(EscapeError::BadLength(n)),
    }

    let cp =
        u32::from_str_radix(digits, 16).map_err(|_| EscapeError::NotHex(digits.to_string()))?;
    char::from_u32(cp).ok_or(EscapeError::InvalidCodePoint(cp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_widths() {
        assert_eq!(escape_form('é'), "xe9");
        assert_eq!(escape_form('好'), "u597d");
        assert_eq!(escape_form('😀'), "U0001f600");
    }

    #[test]
    fn test_unescape_uppercased() {
        assert_eq!(unescape("XE9"), Ok('é'));
        assert_eq!(unescape("U597D"), Ok('好'));
        assert_eq!(unescape("U0001F600"), Ok('😀'));
    }

    #[test]
    fn test_unescape_inverts_escape() {
        for c in ['ü', 'ß', 'Ω', '世', '界', '🦀', '\u{10FFFF}'] {
            assert_eq!(unescape(&escape_form(c).to_uppercase()), Ok(c));
        }
    }

    #[test]
    fn test_unescape_errors() {
        assert_eq!(unescape(""), Err(EscapeError::Empty));
        assert_eq!(unescape("Z12"), Err(EscapeError::UnknownPrefix('Z')));
        assert_eq!(unescape("U123"), Err(EscapeError::BadLength(3)));
        assert_eq!(unescape("U"), Err(EscapeError::BadLength(0)));
        assert!(matches!(unescape("U59[ERROR]"), Err(EscapeError::NotHex(_))));
        assert_eq!(unescape("UD800"), Err(EscapeError::InvalidCodePoint(0xD800)));
        assert_eq!(unescape("U00110000"), Err(EscapeError::InvalidCodePoint(0x110000)));
    }
}
