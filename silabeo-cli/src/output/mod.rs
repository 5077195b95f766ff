//! Output formatting module

use crate::config::OutputConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use silabeo_api::{DivideResponse, ItemKind, SplitResponse, SyllabifyResponse};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Output the syllables of one word
    fn format_division(&mut self, division: &DivideResponse) -> Result<()>;

    /// Output the tokens of one source
    fn format_split(&mut self, source: &str, response: &SplitResponse) -> Result<()>;

    /// Output the syllabified items of one source
    fn format_breakdown(&mut self, source: &str, response: &SyllabifyResponse) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, syllables joined by a separator
    #[default]
    Text,
    /// JSON documents shaped like the API responses
    Json,
    /// Markdown lists and tables
    Markdown,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text with syllables joined by a separator",
            OutputFormat::Json => "JSON objects with the same fields as the API responses",
            OutputFormat::Markdown => "Markdown lists and tables",
        }
    }
}

/// Destination writer: `path` when given, stdout otherwise
pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    config: &OutputConfig,
) -> Box<dyn OutputFormatter> {
    let separator = config.syllable_separator.clone();
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, separator)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, separator)),
    }
}

/// Label of an item kind, as it appears in JSON
pub(crate) fn kind_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Word => "word",
        ItemKind::Punct => "punct",
        ItemKind::PunctOpen => "punct_open",
        ItemKind::PunctClose => "punct_close",
    }
}
