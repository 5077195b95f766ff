//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use silabeo_api::{split_preset, syllabify_preset, ResolvedOptions};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match self.check() {
            Ok((split, syllabify)) => {
                println!("✓ Configuration is valid!");
                print_resolved("split", &split);
                print_resolved("syllabify", &syllabify);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }

    /// Parse the file and resolve it strictly against both presets
    fn check(&self) -> Result<(ResolvedOptions, ResolvedOptions)> {
        let config = CliConfig::load(Some(self.config.as_path()))?;
        let split = config.tokenizer.resolve_strict(&split_preset())?;
        let syllabify = config.tokenizer.resolve_strict(&syllabify_preset())?;
        Ok((
            ResolvedOptions::from(&split),
            ResolvedOptions::from(&syllabify),
        ))
    }
}

fn print_resolved(command: &str, options: &ResolvedOptions) {
    println!(
        "  {command}: attach_punct={}, keep_punct={}, keep_hyphens={}, include_numbers={}, \
         lower={}, min_len={}, unique={}, normalize_ellipsis={}",
        options.attach_punct,
        options.keep_punct,
        options.keep_hyphens,
        options.include_numbers,
        options.lower,
        options.min_len,
        options.unique,
        options.normalize_ellipsis
    );
}
