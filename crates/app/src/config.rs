//! Configuration for the unimorse command-line tool.
//!
//! Parses command-line arguments with clap and resolves them into a
//! [`Config`], filling in defaults (including a time-based seed that is
//! printed so takeover runs are reproducible).
//!
//! # Philosophy
//!
//! The tool should work with nothing but a direction: it prompts for the
//! text like an interactive session, and every rendering has a default.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::warn;
use unimorse_core::{Error, Result, Scheme, Symbols};

/// Which way to transcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Text to morse
    Encode,
    /// Morse to text
    Decode,
}

/// Raw command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "unimorse",
    version,
    about = "Text ⇄ morse transcoder with unicode escapes and a takeover mode",
    after_help = "EXAMPLES:\n    \
        unimorse encode \"SOS\"                      # ... --- ...\n    \
        unimorse decode \"... --- ...\"              # SOS\n    \
        unimorse encode --takeover --seed 42 \"你好\" # reproducible takeover output\n    \
        unimorse encode --in message.txt --out message.morse"
)]
pub struct Cli {
    /// Transcoding direction
    #[arg(value_enum)]
    pub direction: Direction,

    /// Text (or morse) to transcode; prompts when absent
    #[arg(allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Read input from a file
    #[arg(long = "in", value_name = "PATH", conflicts_with_all = ["text", "sample"])]
    pub input_file: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(long = "out", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Encode a generated sample of N words
    #[arg(long, value_name = "N", conflicts_with = "text")]
    pub sample: Option<usize>,

    /// Randomized takeover rendering (ignores the symbol options)
    #[arg(long)]
    pub takeover: bool,

    /// Random seed for takeover rendering and sample generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dot rendering (default ".")
    #[arg(long, allow_hyphen_values = true)]
    pub dot: Option<String>,

    /// Dash rendering (default "-")
    #[arg(long, allow_hyphen_values = true)]
    pub dash: Option<String>,

    /// Separator after each unit (default " ")
    #[arg(long = "sep")]
    pub separator: Option<String>,

    /// Space marker (default "/")
    #[arg(long)]
    pub space: Option<String>,

    /// Unicode escape start marker (default "\")
    #[arg(long)]
    pub unicode_start: Option<String>,

    /// Unicode escape end marker (default "|")
    #[arg(long)]
    pub unicode_end: Option<String>,

    /// Input text that separates words when encoding
    #[arg(long = "word-sep", value_name = "S", default_value = " ")]
    pub word_separator: String,

    /// Print resolved configuration
    #[arg(long)]
    pub print_config: bool,

    /// Print transcoding counters after the result
    #[arg(long)]
    pub stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where the input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Text(String),
    File(PathBuf),
    /// Generated sample with this many words
    Sample(usize),
    /// Ask on stdin
    Prompt,
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    pub direction: Direction,
    pub source: Source,

    /// Output file path (None = stdout)
    pub output_file: Option<PathBuf>,

    /// Engine scheme (not yet validated)
    pub scheme: Scheme,

    pub word_separator: String,

    /// Seed for takeover draws and sample text
    pub seed: u64,

    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print the metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Resolve parsed arguments into a run configuration.
    ///
    /// If `--seed` is absent a time-based seed is used.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let source = match (cli.text, cli.input_file, cli.sample) {
            (Some(text), None, None) => Source::Text(text),
            (None, Some(path), None) => Source::File(path),
            (None, None, Some(words)) => Source::Sample(words),
            (None, None, None) => Source::Prompt,
            _ => return Err(Error::Input("choose one of TEXT, --in or --sample".to_string())),
        };

        if cli.direction == Direction::Decode && matches!(source, Source::Sample(_)) {
            return Err(Error::Input("--sample only applies to encode".to_string()));
        }

        let custom = [
            &cli.dot,
            &cli.dash,
            &cli.separator,
            &cli.space,
            &cli.unicode_start,
            &cli.unicode_end,
        ];

        let scheme = if cli.takeover {
            if custom.iter().any(|option| option.is_some()) {
                warn!("takeover mode uses its own alphabets; symbol options are ignored");
            }
            Scheme::takeover()
        } else {
            let defaults = Symbols::default();
            Scheme::Fixed(Symbols {
                dot: cli.dot.unwrap_or(defaults.dot),
                dash: cli.dash.unwrap_or(defaults.dash),
                separator: cli.separator.unwrap_or(defaults.separator),
                space: cli.space.unwrap_or(defaults.space),
                unicode_start: cli.unicode_start.unwrap_or(defaults.unicode_start),
                unicode_end: cli.unicode_end.unwrap_or(defaults.unicode_end),
            })
        };

        // Determine seed (explicit or time-based)
        let seed = cli.seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        Ok(Config {
            direction: cli.direction,
            source,
            output_file: cli.output_file,
            scheme,
            word_separator: cli.word_separator,
            seed,
            print_config: cli.print_config,
            print_metrics: cli.stats,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Direction: {:?}", self.direction);
        match &self.source {
            Source::Text(text) => println!("Input: argument ({} chars)", text.chars().count()),
            Source::File(path) => println!("Input: {}", path.display()),
            Source::Sample(words) => println!("Input: generated sample ({words} words)"),
            Source::Prompt => println!("Input: prompt"),
        }
        match &self.output_file {
            Some(path) => println!("Output: {}", path.display()),
            None => println!("Output: stdout"),
        }
        println!();
        println!("=== Scheme ===");
        match &self.scheme {
            Scheme::Fixed(symbols) => {
                println!("Mode: fixed");
                println!("Dot: {:?}", symbols.dot);
                println!("Dash: {:?}", symbols.dash);
                println!("Separator: {:?}", symbols.separator);
                println!("Space: {:?}", symbols.space);
                println!("Unicode start: {:?}", symbols.unicode_start);
                println!("Unicode end: {:?}", symbols.unicode_end);
            }
            Scheme::Takeover(alphabets) => {
                println!("Mode: takeover");
                println!("Dot set: {}", alphabets.dot.iter().collect::<String>());
                println!("Dash set: {}", alphabets.dash.iter().collect::<String>());
                println!("Separator set: {}", alphabets.separator.iter().collect::<String>());
                println!("Space: {:?}", alphabets.space);
                println!("Unicode start: {:?}", alphabets.unicode_start);
                println!("Unicode end: {:?}", alphabets.unicode_end);
            }
        }
        println!("Word separator: {:?}", self.word_separator);
        println!("Seed: {}", self.seed);
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("unimorse").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_cli(parse(&["encode"])).unwrap();
        assert_eq!(config.direction, Direction::Encode);
        assert_eq!(config.source, Source::Prompt);
        assert_eq!(config.scheme, Scheme::default());
        assert_eq!(config.word_separator, " ");
        assert!(config.output_file.is_none());
        assert!(!config.print_metrics);
    }

    #[test]
    fn test_text_and_seed() {
        let config = Config::from_cli(parse(&["decode", "... --- ...", "--seed", "42"])).unwrap();
        assert_eq!(config.direction, Direction::Decode);
        assert_eq!(config.source, Source::Text("... --- ...".to_string()));
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_custom_symbols() {
        let config = Config::from_cli(parse(&[
            "encode", "--dot", "咕", "--dash", "噜", "--sep", "，", "--space", "哝",
        ]))
        .unwrap();

        match config.scheme {
            Scheme::Fixed(symbols) => {
                assert_eq!(symbols.dot, "咕");
                assert_eq!(symbols.dash, "噜");
                assert_eq!(symbols.separator, "，");
                assert_eq!(symbols.space, "哝");
                assert_eq!(symbols.unicode_start, "\\");
                assert_eq!(symbols.unicode_end, "|");
            }
            other => panic!("expected fixed scheme, got {other:?}"),
        }
    }

    #[test]
    fn test_takeover_ignores_symbols() {
        let config = Config::from_cli(parse(&["encode", "--takeover", "--dot", "x"])).unwrap();
        assert_eq!(config.scheme, Scheme::takeover());
    }

    #[test]
    fn test_file_source() {
        let config =
            Config::from_cli(parse(&["encode", "--in", "msg.txt", "--out", "msg.morse"])).unwrap();
        assert_eq!(config.source, Source::File(PathBuf::from("msg.txt")));
        assert_eq!(config.output_file, Some(PathBuf::from("msg.morse")));
    }

    #[test]
    fn test_text_conflicts_with_file() {
        let result = Cli::try_parse_from(["unimorse", "encode", "hi", "--in", "msg.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sample_only_for_encode() {
        assert!(Config::from_cli(parse(&["encode", "--sample", "5"])).is_ok());
        assert!(matches!(
            Config::from_cli(parse(&["decode", "--sample", "5"])),
            Err(Error::Input(_))
        ));
    }

    #[test]
    fn test_morse_text_starting_with_dash() {
        let config = Config::from_cli(parse(&["decode", "-.- --.-"])).unwrap();
        assert_eq!(config.source, Source::Text("-.- --.-".to_string()));
    }

    #[test]
    fn test_verbosity_counts() {
        assert_eq!(parse(&["encode", "-vvv"]).verbose, 3);
    }
}
