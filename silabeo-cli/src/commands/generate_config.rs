//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Uncomment and edit the tokenizer options you want to change");
        println!("2. Validate your configuration:");
        println!("   silabeo validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   silabeo syllabify -i input.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# silabeo configuration
#
# Keys under [tokenizer] override the defaults of both `split` and
# `syllabify`. Leave a key commented out to keep each command's own default.
# Command-line flags take precedence over this file.

[tokenizer]
# Treat ASCII digits as word characters
# include_numbers = true

# Keep hyphenated compounds such as "coche-cama" as one word
# keep_hyphens = false

# Emit punctuation tokens
# keep_punct = true

# Attach punctuation to words: separate, left, right or auto
# (split defaults to separate, syllabify to auto)
# attach_punct = "separate"

# Lowercase every token
# lower = false

# Minimum word length in characters (at least 1)
# min_len = 1

# Drop repeated tokens, keeping the first occurrence
# unique = false

# Rewrite runs of "..." as "…"
# normalize_ellipsis = true

[output]
# Default format: text, json or markdown
format = "text"

# Pretty-print JSON output
pretty_json = true

# Separator between syllables in text and markdown output
syllable_separator = "-"
"#
    }
}
