//! Error types for the unimorse engine.
//!
//! Transcoding itself never fails: unresolved symbols degrade to an inline
//! error token. The errors here cover the checked preconditions (scheme
//! validation) and the I/O done by callers around the engine.

use thiserror::Error;

/// Top-level error type for all fallible operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Scheme failed validation at construction time
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File or terminal I/O performed by a caller
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be obtained or was unusable
    #[error("input error: {0}")]
    Input(String),
}

/// Scheme validation errors.
///
/// Each variant names one invariant that keeps decoding unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A rendering or marker is the empty string
    #[error("{field} rendering must not be empty")]
    EmptyRendering { field: &'static str },

    /// A marker carries leading or trailing whitespace (decoder trims groups)
    #[error("{field} marker {value:?} must not have surrounding whitespace")]
    PaddedMarker { field: &'static str, value: String },

    /// Two renderings that must differ are equal
    #[error("{first} and {second} renderings are both {value:?}")]
    DuplicateRendering {
        first: &'static str,
        second: &'static str,
        value: String,
    },

    /// One rendering is a proper prefix of another
    #[error("{first} rendering {value:?} is a prefix of the {second} rendering {other_value:?}")]
    PrefixRendering {
        first: &'static str,
        value: String,
        second: &'static str,
        other_value: String,
    },

    /// A rendering or set member could be read as the start of the error token
    #[error("{field} rendering {value:?} clashes with the error token")]
    ErrorTokenClash { field: &'static str, value: String },

    /// A marker contains `.` or `-`, which decoded groups reserve for marks
    #[error("{field} marker {value:?} contains a canonical mark ('.' or '-')")]
    CanonicalMark { field: &'static str, value: String },

    /// A takeover symbol set has no members
    #[error("{field} set must not be empty")]
    EmptySet { field: &'static str },

    /// Two takeover symbol sets share a member
    #[error("{first} and {second} sets both contain {symbol:?}")]
    OverlappingSets {
        first: &'static str,
        second: &'static str,
        symbol: char,
    },
}

/// Escape-form decoding errors.
///
/// Never surfaced to transcoder callers; the transcoder logs them and emits
/// the error token instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeError {
    /// Escape unit closed without any content
    #[error("empty escape sequence")]
    Empty,

    /// First character is not one of `x`, `u`, `U`
    #[error("unknown escape prefix {0:?}")]
    UnknownPrefix(char),

    /// Hex digit count is not 2, 4 or 8
    #[error("escape body has {0} hex digits, expected 2, 4 or 8")]
    BadLength(usize),

    /// Body contains a non-hex character
    #[error("escape body {0:?} is not hexadecimal")]
    NotHex(String),

    /// Hex value is not a Unicode scalar value
    #[error("code point {0:#x} is not a valid character")]
    InvalidCodePoint(u32),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
