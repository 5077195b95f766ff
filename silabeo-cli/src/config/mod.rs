//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use silabeo_api::Options;
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Tokenizer defaults; unset fields keep each command's preset
    #[serde(default, deserialize_with = "strict_tokenizer")]
    pub tokenizer: Options,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Separator placed between syllables in text and markdown output
    pub syllable_separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
            syllable_separator: "-".to_string(),
        }
    }
}

/// `[tokenizer]` table as written in a config file. Unlike request options,
/// unknown keys here are an error.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TokenizerTable {
    include_numbers: Option<bool>,
    keep_hyphens: Option<bool>,
    keep_punct: Option<bool>,
    attach_punct: Option<String>,
    lower: Option<bool>,
    min_len: Option<usize>,
    unique: Option<bool>,
    normalize_ellipsis: Option<bool>,
}

impl From<TokenizerTable> for Options {
    fn from(table: TokenizerTable) -> Self {
        Options {
            include_numbers: table.include_numbers,
            keep_hyphens: table.keep_hyphens,
            keep_punct: table.keep_punct,
            attach_punct: table.attach_punct,
            lower: table.lower,
            min_len: table.min_len,
            unique: table.unique,
            normalize_ellipsis: table.normalize_ellipsis,
        }
    }
}

fn strict_tokenizer<'de, D>(deserializer: D) -> std::result::Result<Options, D::Error>
where
    D: Deserializer<'de>,
{
    TokenizerTable::deserialize(deserializer).map(Options::from)
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load the configuration at `path`, or the defaults when there is none
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        log::info!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}
