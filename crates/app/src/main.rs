//! unimorse: command-line shell around the transcoding engine.
//!
//! Obtains text (argument, file, generated sample or prompt), runs it through
//! a [`Transcoder`] and writes the result to stdout or a file. All
//! transcoding semantics live in `unimorse-core`.

mod config;
mod input_gen;

use clap::Parser;
use config::{Cli, Config, Direction, Source};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unimorse_core::{Error, Metrics, Result, Transcoder};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;
    if config.print_config {
        config.print();
    }

    let transcoder = Transcoder::new(config.scheme.clone())?;
    let input = read_input(&config)?;
    info!(chars = input.chars().count(), direction = ?config.direction, "input ready");

    let mut metrics = Metrics::new();
    let output = match config.direction {
        Direction::Encode => {
            let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
            transcoder.encode_metered(&input, &config.word_separator, &mut rng, &mut metrics)
        }
        Direction::Decode => transcoder.decode_metered(&input, &mut metrics),
    };
    metrics.complete();

    write_output(&config, &output)?;

    if config.print_metrics {
        metrics.print_summary();
        metrics.print_result();
    }
    Ok(())
}

fn read_input(config: &Config) -> Result<String> {
    let raw = match &config.source {
        Source::Text(text) => return Ok(text.clone()),
        Source::Sample(words) => return Ok(input_gen::generate_sample_text(config.seed, *words)),
        Source::File(path) => {
            info!(path = %path.display(), "reading input file");
            std::fs::read_to_string(path)?
        }
        Source::Prompt => {
            let prompt = match config.direction {
                Direction::Encode => "Enter text to encode: ",
                Direction::Decode => "Enter morse code to decode: ",
            };
            let mut stdout = io::stdout();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;

            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line)? == 0 {
                return Err(Error::Input("no input on stdin".to_string()));
            }
            line
        }
    };

    // A single trailing line break belongs to the file or terminal, not the message.
    let trimmed = raw
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(&raw);
    Ok(trimmed.to_string())
}

fn write_output(config: &Config, output: &str) -> Result<()> {
    match &config.output_file {
        Some(path) => {
            std::fs::write(path, output)?;
            info!(path = %path.display(), chars = output.chars().count(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{output}")?;
        }
    }
    Ok(())
}
