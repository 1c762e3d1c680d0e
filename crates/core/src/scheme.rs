//! Engine configuration: how marks, separators and markers are rendered.
//!
//! A [`Scheme`] is either
//! - `Fixed`: every mark, separator and marker has one literal rendering, or
//! - `Takeover`: every dot, dash and separator is drawn at random from a
//!   character set, and decoding classifies characters by set membership.
//!
//! Validation runs when a [`crate::Transcoder`] is built. The rules keep
//! decoding unambiguous; they do not protect against decoding with a scheme
//! other than the one used to encode, which stays the caller's job.

use crate::error::ConfigError;
use crate::table::{DASH, DOT};
use crate::transcoder::ERROR_TOKEN;

/// Literal renderings for [`Scheme::Fixed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub dot: String,
    pub dash: String,
    /// Placed after every rendered unit
    pub separator: String,
    /// Unit standing for a word break
    pub space: String,
    /// Opens a unicode escape unit
    pub unicode_start: String,
    /// Closes a unicode escape unit
    pub unicode_end: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            dot: ".".to_string(),
            dash: "-".to_string(),
            separator: " ".to_string(),
            space: "/".to_string(),
            unicode_start: "\\".to_string(),
            unicode_end: "|".to_string(),
        }
    }
}

/// Character sets and markers for [`Scheme::Takeover`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabets {
    pub dot: Vec<char>,
    pub dash: Vec<char>,
    pub separator: Vec<char>,
    pub space: char,
    pub unicode_start: char,
    pub unicode_end: char,
}

impl Default for Alphabets {
    /// Lowercase letters for dots, uppercase for dashes, digits for
    /// separators.
    fn default() -> Self {
        Self {
            dot: ('a'..='z').collect(),
            dash: ('A'..='Z').collect(),
            separator: ('0'..='9').collect(),
            space: '/',
            unicode_start: '\\',
            unicode_end: '|',
        }
    }
}

/// Mode-tagged engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    Fixed(Symbols),
    Takeover(Alphabets),
}

impl Default for Scheme {
    fn default() -> Self {
        Scheme::Fixed(Symbols::default())
    }
}

impl Scheme {
    /// Takeover mode with the standard alphabets.
    pub fn takeover() -> Self {
        Scheme::Takeover(Alphabets::default())
    }

    pub fn is_takeover(&self) -> bool {
        matches!(self, Scheme::Takeover(_))
    }

    /// Check the invariants that make decoding unambiguous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Scheme::Fixed(symbols) => symbols.validate(),
            Scheme::Takeover(alphabets) => alphabets.validate(),
        }
    }
}

impl Symbols {
    fn renderings(&self) -> [(&'static str, &str); 6] {
        [
            ("dot", self.dot.as_str()),
            ("dash", self.dash.as_str()),
            ("separator", self.separator.as_str()),
            ("space", self.space.as_str()),
            ("unicode start", self.unicode_start.as_str()),
            ("unicode end", self.unicode_end.as_str()),
        ]
    }

    /// See [`Scheme::validate`].
    ///
    /// The renderings must form a prefix code: the decoder reads the stream
    /// left to right and takes the one rendering that starts at each
    /// position, so no rendering may be a prefix of another (or of the error
    /// token).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let renderings = self.renderings();

        for &(field, value) in &renderings {
            if value.is_empty() {
                return Err(ConfigError::EmptyRendering { field });
            }
        }

        for &(field, value) in &renderings {
            if ERROR_TOKEN.starts_with(value) || value.starts_with(ERROR_TOKEN) {
                return Err(ConfigError::ErrorTokenClash {
                    field,
                    value: value.to_string(),
                });
            }
        }

        // Decoded groups hold canonical marks or a marker verbatim.
        for &(field, value) in &renderings[3..] {
            if value.trim() != value {
                return Err(ConfigError::PaddedMarker {
                    field,
                    value: value.to_string(),
                });
            }
            if value.contains([DOT, DASH]) {
                return Err(ConfigError::CanonicalMark {
                    field,
                    value: value.to_string(),
                });
            }
        }

        for (i, &(first, value)) in renderings.iter().enumerate() {
            for &(second, other) in &renderings[i + 1..] {
                if value == other {
                    return Err(ConfigError::DuplicateRendering {
                        first,
                        second,
                        value: value.to_string(),
                    });
                }
                let prefix = if other.starts_with(value) {
                    Some((first, value, second, other))
                } else if value.starts_with(other) {
                    Some((second, other, first, value))
                } else {
                    None
                };
                if let Some((first, value, second, other)) = prefix {
                    return Err(ConfigError::PrefixRendering {
                        first,
                        value: value.to_string(),
                        second,
                        other_value: other.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Alphabets {
    /// See [`Scheme::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let space = [self.space];
        let start = [self.unicode_start];
        let end = [self.unicode_end];
        let sets: [(&'static str, &[char]); 6] = [
            ("dot", self.dot.as_slice()),
            ("dash", self.dash.as_slice()),
            ("separator", self.separator.as_slice()),
            ("space marker", &space[..]),
            ("unicode start marker", &start[..]),
            ("unicode end marker", &end[..]),
        ];

        for &(field, set) in &sets[..3] {
            if set.is_empty() {
                return Err(ConfigError::EmptySet { field });
            }
        }

        for (field, marker) in [
            ("space", self.space),
            ("unicode start", self.unicode_start),
            ("unicode end", self.unicode_end),
        ] {
            if marker.is_whitespace() {
                return Err(ConfigError::PaddedMarker {
                    field,
                    value: marker.to_string(),
                });
            }
            if marker == DOT || marker == DASH {
                return Err(ConfigError::CanonicalMark {
                    field,
                    value: marker.to_string(),
                });
            }
        }

        for &(field, set) in &sets {
            if let Some(symbol) = set.iter().find(|&&c| ERROR_TOKEN.starts_with(c)) {
                return Err(ConfigError::ErrorTokenClash {
                    field,
                    value: symbol.to_string(),
                });
            }
        }

        for (i, &(first, set)) in sets.iter().enumerate() {
            for &(second, other) in &sets[i + 1..] {
                if let Some(symbol) = set.iter().find(|c| other.contains(*c)) {
                    return Err(ConfigError::OverlappingSets {
                        first,
                        second,
                        symbol: *symbol,
                    });
                }
            }
        }

        Ok(())
    }
}
