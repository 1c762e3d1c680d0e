//! unimorse-core: text ⇄ morse transcoding with unicode escapes
//!
//! This library provides the engine of a morse transcoder that:
//! - Maps letters, digits and punctuation through a fixed symbol table
//! - Carries any non-ASCII character as a morse-encoded escape unit
//! - Renders marks either with fixed strings or, in takeover mode, with
//!   random members of disjoint character sets
//! - Degrades unknown symbols to a visible error token instead of failing
//!
//! # Architecture
//!
//! - `table`: the 54-entry symbol table
//! - `escape`: escape form of non-ASCII characters
//! - `scheme`: mode-tagged configuration and its validation
//! - `transcoder`: encode/decode
//! - `metrics`: counters for a transcoding run
//!
//! # Design Principles
//!
//! - **No panics**: bad input degrades locally, bad configuration is an error
//! - **No I/O**: callers supply strings and consume strings
//! - **Deterministic on demand**: takeover randomness comes from an injected
//!   generator

pub mod error;
pub mod escape;
pub mod metrics;
pub mod scheme;
pub mod table;
pub mod transcoder;

// Re-export commonly used types
pub use error::{ConfigError, Error, Result};
pub use metrics::Metrics;
pub use scheme::{Alphabets, Scheme, Symbols};
pub use transcoder::{Transcoder, ERROR_TOKEN};
