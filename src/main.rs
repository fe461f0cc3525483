//! Command-line entry point.
//!
//! Thin I/O shell around [`unveil::cases`]: reads one JSON document,
//! recovers every test case, and prints the reconstructed secrets to
//! stdout, newline-joined, after the whole batch has completed. All
//! diagnostics go to stderr so stdout carries nothing but results.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unveil::cases;

#[derive(Parser, Debug)]
#[command(name = "unveil")]
#[command(about = "Reconstructs threshold-shared secrets from a JSON share file", long_about = None)]
struct Cli {
    /// Path to the JSON document holding the test case(s)
    #[arg(default_value = "input.json")]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let test_cases = cases::parse_cases(&text)?;
    let secrets = cases::recover_all(&test_cases)?;

    println!("{}", secrets.join("\n"));

    Ok(())
}
