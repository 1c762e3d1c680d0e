//! Text ⇄ morse transcoding over a validated [`Scheme`].
//!
//! # Encoding
//!
//! Every character becomes one *unit* followed by a separator:
//! - ASCII characters are uppercased and looked up in the symbol table
//! - a word break becomes the space marker
//! - a non-ASCII character becomes a unicode escape unit: the start marker,
//!   one unit per character of its uppercased escape form, the end marker
//! - anything else becomes the literal [`ERROR_TOKEN`]
//!
//! In takeover mode every dot, dash and separator is an independent uniform
//! draw from its set. Fixed mode strips one trailing separator from the
//! output; takeover mode keeps it.
//!
//! # Decoding
//!
//! The stream is read left to right into groups of canonical marks, one per
//! unit, and each group resolved in order. The error token is read as one
//! unit whatever the scheme. Unresolvable groups turn into [`ERROR_TOKEN`]
//! in place, so one garbled group never costs the rest of the message.
//!
//! # Example
//! ```
//! use unimorse_core::Transcoder;
//!
//! let transcoder = Transcoder::default();
//! assert_eq!(transcoder.encode("SOS"), "... --- ...");
//! assert_eq!(transcoder.decode("... --- ..."), "SOS");
//! ```

use crate::error::Result;
use crate::escape;
use crate::metrics::Metrics;
use crate::scheme::{Alphabets, Scheme, Symbols};
use crate::table::{self, Mark, Pattern, DASH, DOT};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

/// Emitted in place of any unit that cannot be encoded or decoded.
pub const ERROR_TOKEN: &str = "[ERROR]";

/// Default word separator for [`Transcoder::encode`].
pub const DEFAULT_WORD_SEPARATOR: &str = " ";

/// Marker units as plain strings, whatever the mode.
#[derive(Debug, Clone)]
struct Markers {
    space: String,
    unicode_start: String,
    unicode_end: String,
}

impl Markers {
    fn of(scheme: &Scheme) -> Self {
        match scheme {
            Scheme::Fixed(symbols) => Self {
                space: symbols.space.clone(),
                unicode_start: symbols.unicode_start.clone(),
                unicode_end: symbols.unicode_end.clone(),
            },
            Scheme::Takeover(alphabets) => Self {
                space: alphabets.space.to_string(),
                unicode_start: alphabets.unicode_start.to_string(),
                unicode_end: alphabets.unicode_end.to_string(),
            },
        }
    }
}

/// Bidirectional morse transcoder.
///
/// Immutable once built; encode and decode only read it. Decoding assumes
/// the stream was produced with an equal scheme. Nothing in the stream
/// records the scheme, so a mismatch yields garbage rather than an error.
#[derive(Debug, Clone)]
pub struct Transcoder {
    scheme: Scheme,
    markers: Markers,
}

impl Transcoder {
    /// Build a transcoder, validating the scheme.
    ///
    /// # Errors
    /// Returns [`crate::Error::Config`] if the scheme would make decoding
    /// ambiguous (see [`Scheme::validate`]).
    pub fn new(scheme: Scheme) -> Result<Self> {
        scheme.validate()?;
        debug!(takeover = scheme.is_takeover(), "transcoder ready");

        Ok(Self {
            markers: Markers::of(&scheme),
            scheme,
        })
    }

    /// Takeover mode with the standard alphabets.
    pub fn takeover() -> Self {
        let scheme = Scheme::takeover();
        Self {
            markers: Markers::of(&scheme),
            scheme,
        }
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Encode `text`, breaking words on single spaces.
    pub fn encode(&self, text: &str) -> String {
        self.encode_with(text, DEFAULT_WORD_SEPARATOR)
    }

    /// Encode `text`, breaking words on `word_separator`.
    ///
    /// Each call draws from its own entropy-seeded generator. Use
    /// [`Transcoder::encode_with_rng`] for reproducible takeover output.
    pub fn encode_with(&self, text: &str, word_separator: &str) -> String {
        let mut rng = ChaCha8Rng::from_entropy();
        self.encode_with_rng(text, word_separator, &mut rng)
    }

    /// Encode `text` drawing takeover symbols from `rng`.
    ///
    /// Fixed mode never touches `rng`.
    pub fn encode_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        word_separator: &str,
        rng: &mut R,
    ) -> String {
        self.encode_metered(text, word_separator, rng, &mut Metrics::new())
    }

    /// Encode and record counters into `metrics`.
    ///
    /// Text between occurrences of `word_separator` is encoded word by word,
    /// with the space marker in between. An empty `word_separator` encodes
    /// the text as a single word.
    pub fn encode_metered<R: Rng + ?Sized>(
        &self,
        text: &str,
        word_separator: &str,
        rng: &mut R,
        metrics: &mut Metrics,
    ) -> String {
        trace!(chars = text.chars().count(), "encoding");

        let mut out = Emitter {
            scheme: &self.scheme,
            rng,
            out: String::new(),
        };

        let words: Vec<&str> = if word_separator.is_empty() {
            vec![text]
        } else {
            text.split(word_separator).collect()
        };

        for (i, word) in words.into_iter().enumerate() {
            if i > 0 {
                out.literal(&self.markers.space);
                metrics.spaces += 1;
            }
            for c in word.chars() {
                self.encode_char(c, &mut out, metrics);
            }
        }

        let mut encoded = out.out;
        if let Scheme::Fixed(symbols) = &self.scheme {
            if encoded.ends_with(&symbols.separator) {
                encoded.truncate(encoded.len() - symbols.separator.len());
            }
        }

        metrics.input_chars += text.chars().count() as u64;
        metrics.output_chars += encoded.chars().count() as u64;
        encoded
    }

    fn encode_char<R: Rng + ?Sized>(
        &self,
        c: char,
        out: &mut Emitter<'_, R>,
        metrics: &mut Metrics,
    ) {
        if c == ' ' {
            out.literal(&self.markers.space);
            metrics.spaces += 1;
            return;
        }

        // Multi-char uppercase forms (ß -> SS) are ASCII and stay on the table path.
        let upper: String = c.to_uppercase().collect();
        if upper.is_ascii() {
            for u in upper.chars() {
                match table::morse_of(u) {
                    Some(pattern) => {
                        out.pattern(pattern);
                        metrics.symbols += 1;
                    }
                    None => {
                        debug!(symbol = ?u, "no morse pattern, emitting error token");
                        out.literal(ERROR_TOKEN);
                        metrics.unresolved += 1;
                    }
                }
            }
            return;
        }

        out.literal(&self.markers.unicode_start);
        for e in escape::escape_form(c).to_uppercase().chars() {
            match table::morse_of(e) {
                Some(pattern) => out.pattern(pattern),
                None => out.literal(ERROR_TOKEN),
            }
        }
        out.literal(&self.markers.unicode_end);
        metrics.escapes += 1;
    }

    /// Decode a morse stream produced with this transcoder's scheme.
    ///
    /// Never fails; unresolvable groups come back as [`ERROR_TOKEN`].
    pub fn decode(&self, morse: &str) -> String {
        self.decode_metered(morse, &mut Metrics::new())
    }

    /// Decode and record counters into `metrics`.
    pub fn decode_metered(&self, morse: &str, metrics: &mut Metrics) -> String {
        trace!(chars = morse.chars().count(), "decoding");

        let mut decoder = GroupDecoder {
            markers: &self.markers,
            metrics: &mut *metrics,
            out: String::new(),
            escape: None,
        };

        match &self.scheme {
            Scheme::Fixed(symbols) => {
                tokenize_fixed(morse, symbols, |group| decoder.feed(group));
            }
            Scheme::Takeover(alphabets) => {
                tokenize_takeover(morse, alphabets, |group| decoder.feed(group));
            }
        }

        let decoded = decoder.finish();
        metrics.input_chars += morse.chars().count() as u64;
        metrics.output_chars += decoded.chars().count() as u64;
        decoded
    }
}

impl Default for Transcoder {
    /// Fixed mode with the default symbols.
    fn default() -> Self {
        let scheme = Scheme::default();
        Self {
            markers: Markers::of(&scheme),
            scheme,
        }
    }
}

/// Appends rendered units to the output.
struct Emitter<'a, R: Rng + ?Sized> {
    scheme: &'a Scheme,
    rng: &'a mut R,
    out: String,
}

impl<R: Rng + ?Sized> Emitter<'_, R> {
    fn pattern(&mut self, pattern: Pattern) {
        let scheme = self.scheme;
        for mark in pattern.marks() {
            match (scheme, mark) {
                (Scheme::Fixed(symbols), Mark::Dot) => self.out.push_str(&symbols.dot),
                (Scheme::Fixed(symbols), Mark::Dash) => self.out.push_str(&symbols.dash),
                (Scheme::Takeover(alphabets), Mark::Dot) => self.draw(&alphabets.dot),
                (Scheme::Takeover(alphabets), Mark::Dash) => self.draw(&alphabets.dash),
            }
        }
        self.separator();
    }

    fn draw(&mut self, set: &[char]) {
        if let Some(c) = set.choose(&mut *self.rng) {
            self.out.push(*c);
        }
    }

    fn literal(&mut self, unit: &str) {
        self.out.push_str(unit);
        self.separator();
    }

    fn separator(&mut self) {
        let scheme = self.scheme;
        match scheme {
            Scheme::Fixed(symbols) => self.out.push_str(&symbols.separator),
            Scheme::Takeover(alphabets) => self.draw(&alphabets.separator),
        }
    }
}

/// Read a fixed-mode stream into groups: dot and dash renderings become
/// canonical marks, markers are kept verbatim and each separator ends a
/// group. Validation makes the renderings a prefix code, so at most one of
/// them starts at any position.
fn tokenize_fixed(morse: &str, symbols: &Symbols, mut emit: impl FnMut(&str)) {
    let marks = [(symbols.dot.as_str(), DOT), (symbols.dash.as_str(), DASH)];
    let markers = [
        symbols.space.as_str(),
        symbols.unicode_start.as_str(),
        symbols.unicode_end.as_str(),
    ];

    let mut group = String::new();
    let mut rest = morse;
    while let Some(c) = rest.chars().next() {
        if let Some(tail) = rest.strip_prefix(ERROR_TOKEN) {
            group.push_str(ERROR_TOKEN);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(symbols.separator.as_str()) {
            emit(&group);
            group.clear();
            rest = tail;
        } else if let Some((tail, mark)) = marks
            .iter()
            .find_map(move |&(rendering, mark)| Some((rest.strip_prefix(rendering)?, mark)))
        {
            group.push(mark);
            rest = tail;
        } else if let Some((tail, marker)) = markers
            .iter()
            .find_map(move |&marker| Some((rest.strip_prefix(marker)?, marker)))
        {
            group.push_str(marker);
            rest = tail;
        } else {
            group.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    emit(&group);
}

/// Classify each character by set membership: dot-set members become `.`,
/// dash-set members `-`, separator-set members end the current group, and
/// anything else passes through. The error token passes through whole.
fn tokenize_takeover(morse: &str, alphabets: &Alphabets, mut emit: impl FnMut(&str)) {
    let mut group = String::new();
    let mut rest = morse;
    while let Some(c) = rest.chars().next() {
        if let Some(tail) = rest.strip_prefix(ERROR_TOKEN) {
            group.push_str(ERROR_TOKEN);
            rest = tail;
            continue;
        }
        rest = &rest[c.len_utf8()..];

        if alphabets.separator.contains(&c) {
            emit(&group);
            group.clear();
        } else if alphabets.dot.contains(&c) {
            group.push(DOT);
        } else if alphabets.dash.contains(&c) {
            group.push(DASH);
        } else {
            group.push(c);
        }
    }
    emit(&group);
}

/// Resolves groups in stream order.
struct GroupDecoder<'a> {
    markers: &'a Markers,
    metrics: &'a mut Metrics,
    out: String,
    /// Escape body collected since the last start marker
    escape: Option<String>,
}

impl GroupDecoder<'_> {
    fn feed(&mut self, group: &str) {
        let group = group.trim();
        if group.is_empty() {
            return;
        }

        if group == self.markers.unicode_start {
            if self.escape.is_some() {
                self.unresolved("unicode escape reopened before it was closed");
            }
            self.escape = Some(String::new());
            return;
        }

        if group == self.markers.unicode_end {
            match self.escape.take() {
                Some(body) => match escape::unescape(&body) {
                    Ok(c) => {
                        self.out.push(c);
                        self.metrics.escapes += 1;
                    }
                    Err(err) => {
                        debug!(%err, body = %body, "bad unicode escape");
                        self.unresolved("bad unicode escape");
                    }
                },
                None => self.unresolved("unicode end marker outside an escape"),
            }
            return;
        }

        if let Some(body) = self.escape.as_mut() {
            match table::char_of(group) {
                Some(c) => body.push(c),
                None => body.push_str(ERROR_TOKEN),
            }
            return;
        }

        if group == self.markers.space {
            self.out.push(' ');
            self.metrics.spaces += 1;
            return;
        }

        match table::char_of(group) {
            Some(c) => {
                self.out.push(c);
                self.metrics.symbols += 1;
            }
            None => {
                debug!(group, "no character for morse group");
                self.unresolved("unknown morse group");
            }
        }
    }

    fn unresolved(&mut self, reason: &'static str) {
        trace!(reason, "emitting error token");
        self.out.push_str(ERROR_TOKEN);
        self.metrics.unresolved += 1;
    }

    fn finish(mut self) -> String {
        if self.escape.take().is_some() {
            self.unresolved("unicode escape still open at end of input");
        }
        self.out
    }
}
