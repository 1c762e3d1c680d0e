//! The fixed morse symbol table.
//!
//! 54 entries: letters, digits and punctuation. Patterns are stored in their
//! canonical text form (`.` for a dot, `-` for a dash). The table is a
//! bijection, so lookups in either direction are unambiguous.
//!
//! # Example
//! ```
//! use unimorse_core::table::{char_of, morse_of};
//!
//! assert_eq!(morse_of('S').unwrap().as_str(), "...");
//! assert_eq!(char_of("---"), Some('O'));
//! assert_eq!(char_of("......."), None);
//! ```

use std::fmt;

/// Canonical text of a dot mark
pub const DOT: char = '.';

/// Canonical text of a dash mark
pub const DASH: char = '-';

const TABLE: [(char, &str); 54] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "----.."),
    ('=', "-.-.-."),
    ('-', "-...-"),
    ('+', ".-.-."),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

/// One unit of a morse pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Dot,
    Dash,
}

impl Mark {
    /// Canonical single-character form.
    pub fn as_char(self) -> char {
        match self {
            Mark::Dot => DOT,
            Mark::Dash => DASH,
        }
    }
}

/// An ordered sequence of marks representing one table character.
///
/// Only obtainable from the table, so every `Pattern` is well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(&'static str);

impl Pattern {
    /// Canonical text, e.g. `".-"`.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Iterate the marks in order.
    pub fn marks(&self) -> impl Iterator<Item = Mark> + 'static {
        self.0
            .chars()
            .map(|c| if c == DOT { Mark::Dot } else { Mark::Dash })
    }

    /// Number of marks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Look up the pattern for a character.
///
/// Lookup is exact: callers uppercase letters first.
pub fn morse_of(c: char) -> Option<Pattern> {
    TABLE
        .iter()
        .find(|(ch, _)| *ch == c)
        .map(|(_, pattern)| Pattern(pattern))
}

/// Look up the character for a canonical pattern string.
pub fn char_of(pattern: &str) -> Option<char> {
    TABLE
        .iter()
        .find(|(_, p)| *p == pattern)
        .map(|(ch, _)| *ch)
}

/// All table entries, in table order.
pub fn entries() -> impl Iterator<Item = (char, Pattern)> {
    TABLE.iter().map(|(ch, pattern)| (*ch, Pattern(pattern)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_size() {
        assert_eq!(entries().count(), 54);
    }

    #[test]
    fn test_bijection() {
        let chars: HashSet<char> = entries().map(|(c, _)| c).collect();
        let patterns: HashSet<&str> = entries().map(|(_, p)| p.as_str()).collect();

        assert_eq!(chars.len(), 54);
        assert_eq!(patterns.len(), 54);

        for (c, p) in entries() {
            assert_eq!(morse_of(c), Some(p));
            assert_eq!(char_of(p.as_str()), Some(c));
        }
    }

    #[test]
    fn test_patterns_use_two_marks() {
        for (c, p) in entries() {
            assert!(!p.is_empty(), "empty pattern for {c:?}");
            assert!(
                p.as_str().chars().all(|m| m == DOT || m == DASH),
                "bad mark in pattern for {c:?}"
            );
        }
    }

    #[test]
    fn test_marks() {
        let marks: Vec<Mark> = morse_of('K').unwrap().marks().collect();
        assert_eq!(marks, vec![Mark::Dash, Mark::Dot, Mark::Dash]);

        let text: String = morse_of('Q').unwrap().marks().map(Mark::as_char).collect();
        assert_eq!(text, "--.-");
    }

    #[test]
    fn test_unknown_symbols() {
        assert_eq!(morse_of('a'), None);
        assert_eq!(morse_of('#'), None);
        assert_eq!(morse_of(' '), None);
        assert_eq!(char_of(""), None);
        assert_eq!(char_of("........"), None);
        assert_eq!(char_of("[ERROR]"), None);
    }

    #[test]
    fn test_escape_alphabet_covered() {
        for c in "XU0123456789ABCDEF".chars() {
            assert!(morse_of(c).is_some(), "{c:?} missing from table");
        }
    }
}
