//! Command line front end: encodes one line of text on the wheel drum
//! and prints the 27 candidate rows.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use wheelcypher::{alphabet, Drum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One row per line.
    Text,
    /// A single JSON object with the padded message and the rows.
    Json,
}

/// Encode text with a 12-wheel Jefferson disk drum.
#[derive(Debug, Parser)]
#[command(name = "wheelcypher", version, about)]
struct Args {
    /// Message to encode. Read from stdin when omitted.
    message: Option<String>,

    /// Drop symbols that are not on the wheels instead of failing.
    #[arg(long)]
    strip: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    message: &'a str,
    padded: String,
    rows: &'a [String],
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_message() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("Enter string to encode: ");
        io::stderr().flush().ok();
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("failed to read message from stdin")?;
    Ok(line)
}

/// Uppercases the raw line and drops the line terminator.
fn normalize(raw: &str, strip: bool) -> String {
    let upper = raw.trim_end_matches(['\r', '\n']).to_uppercase();
    if !strip {
        return upper;
    }
    let kept: String = upper.chars().filter(|&c| alphabet::contains(c)).collect();
    let dropped = upper.chars().count() - kept.chars().count();
    if dropped > 0 {
        warn!(dropped, "removed symbols that are not on the wheels");
    }
    kept
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let raw = match args.message {
        Some(message) => message,
        None => read_message()?,
    };
    let message = normalize(&raw, args.strip);
    debug!(message = %message, "normalized input");

    let rows = Drum::new()
        .encode(&message)
        .with_context(|| format!("cannot encode {:?}", message))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => {
            for row in &rows {
                writeln!(out, "{}", row)?;
            }
        }
        Format::Json => {
            let report = Report {
                message: &message,
                padded: Drum::pad(&message).into_iter().collect(),
                rows: &rows,
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
