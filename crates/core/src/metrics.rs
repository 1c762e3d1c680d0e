//! Counters collected while transcoding.
//!
//! The engine never fails on bad symbols, so these counters are how a caller
//! finds out how much of a run degraded to error tokens:
//! - Characters in and out
//! - Table symbols rendered (encode) or resolved (decode)
//! - Unicode escape units
//! - Unresolved units (each one shows up as an error token in the output)
//! - Timing
//!
//! # Thread Safety
//!
//! `Metrics` is a plain struct owned by the caller and passed by `&mut`
//! into the metered transcoder calls. For multi-threaded use keep one per
//! thread and [`Metrics::merge`] them at the end.

use std::time::{Duration, Instant};

/// Counters for one or more transcoding calls.
#[derive(Debug, Clone)]
pub struct Metrics {
    // === Timing ===
    /// When collection started
    pub start_time: Instant,

    /// When collection ended (set on completion)
    pub end_time: Option<Instant>,

    // === Input/Output ===
    /// Characters handed to the engine
    pub input_chars: u64,

    /// Characters returned by the engine
    pub output_chars: u64,

    // === Units ===
    /// Table symbols rendered or resolved
    pub symbols: u64,

    /// Space markers rendered or resolved
    pub spaces: u64,

    /// Unicode escape units rendered or resolved
    pub escapes: u64,

    /// Units that degraded to the error token
    pub unresolved: u64,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_chars: 0,
            output_chars: 0,
            symbols: 0,
            spaces: 0,
            escapes: 0,
            unresolved: 0,
        }
    }

    /// Mark collection as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Fold another set of counters into this one.
    ///
    /// Keeps the earlier start and the later end.
    pub fn merge(&mut self, other: &Metrics) {
        self.start_time = self.start_time.min(other.start_time);
        self.end_time = match (self.end_time, other.end_time) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        self.input_chars += other.input_chars;
        self.output_chars += other.output_chars;
        self.symbols += other.symbols;
        self.spaces += other.spaces;
        self.escapes += other.escapes;
        self.unresolved += other.unresolved;
    }

    /// Output characters per input character.
    ///
    /// Returns 0.0 if nothing was transcoded.
    pub fn expansion_ratio(&self) -> f64 {
        if self.input_chars == 0 {
            0.0
        } else {
            self.output_chars as f64 / self.input_chars as f64
        }
    }

    /// Share of units that degraded to the error token.
    pub fn unresolved_rate(&self) -> f64 {
        let units = self.symbols + self.spaces + self.escapes + self.unresolved;
        if units == 0 {
            0.0
        } else {
            self.unresolved as f64 / units as f64
        }
    }

    /// True when no unit degraded.
    pub fn is_clean(&self) -> bool {
        self.unresolved == 0
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Transcode Summary ===");
        println!("Duration: {} µs", self.duration().as_micros());
        println!();
        println!("Input:  {} chars", self.input_chars);
        println!("Output: {} chars ({:.2}x)", self.output_chars, self.expansion_ratio());
        println!();
        println!("Symbols: {}", self.symbols);
        println!("Spaces: {}", self.spaces);
        println!("Unicode escapes: {}", self.escapes);
        println!(
            "Unresolved: {} ({:.2}%)",
            self.unresolved,
            self.unresolved_rate() * 100.0
        );
        println!();
    }

    /// Print just the final result (clean or degraded).
    pub fn print_result(&self) {
        if self.is_clean() {
            println!("✓ Transcoded {} chars cleanly", self.input_chars);
        } else {
            println!(
                "✗ {} unit(s) could not be transcoded and were replaced by error tokens",
                self.unresolved
            );
        }
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_us={}\n\
             input_chars={}\n\
             output_chars={}\n\
             expansion_ratio={:.4}\n\
             symbols={}\n\
             spaces={}\n\
             escapes={}\n\
             unresolved={}\n\
             unresolved_rate={:.4}\n",
            self.duration().as_micros(),
            self.input_chars,
            self.output_chars,
            self.expansion_ratio(),
            self.symbols,
            self.spaces,
            self.escapes,
            self.unresolved,
            self.unresolved_rate(),
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert!(metrics.end_time.is_none());
        assert!(metrics.is_clean());
        assert!(metrics.duration().as_millis() < 100);
    }

    #[test]
    fn test_expansion_ratio() {
        let mut metrics = Metrics::new();
        assert_eq!(metrics.expansion_ratio(), 0.0);

        metrics.input_chars = 4;
        metrics.output_chars = 10;
        assert_eq!(metrics.expansion_ratio(), 2.5);
    }

    #[test]
    fn test_unresolved_rate() {
        let mut metrics = Metrics::new();
        metrics.symbols = 15;
        metrics.spaces = 2;
        metrics.escapes = 2;
        metrics.unresolved = 1;

        assert_eq!(metrics.unresolved_rate(), 0.05);
        assert!(!metrics.is_clean());
    }

    #[test]
    fn test_merge() {
        let mut a = Metrics::new();
        a.input_chars = 3;
        a.symbols = 3;

        let mut b = Metrics::new();
        b.input_chars = 2;
        b.unresolved = 1;
        b.complete();

        a.merge(&b);
        assert_eq!(a.input_chars, 5);
        assert_eq!(a.symbols, 3);
        assert_eq!(a.unresolved, 1);
        assert_eq!(a.end_time, b.end_time);
    }

    #[test]
    fn test_export_text() {
        let mut metrics = Metrics::new();
        metrics.input_chars = 3;
        metrics.output_chars = 11;
        metrics.symbols = 3;
        metrics.complete();

        let text = metrics.export_text();
        assert!(text.contains("input_chars=3"));
        assert!(text.contains("output_chars=11"));
        assert!(text.contains("symbols=3"));
        assert!(text.contains("unresolved=0"));
    }
}
