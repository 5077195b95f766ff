//! silabeo command-line entry point

use anyhow::Result;
use clap::Parser;
use silabeo_cli::commands::Commands;

/// Syllable division and tokenization for Spanish text
#[derive(Debug, Parser)]
#[command(name = "silabeo", version)]
#[command(about = "Syllable division and tokenization for Spanish text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
