//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use silabeo_api::Input;
use std::path::PathBuf;

/// Where a command's text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Inline text from `--text`
    Text(String),
    /// A resolved input file
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl Source {
    /// Name shown in headings and progress messages
    pub fn name(&self) -> String {
        match self {
            Source::Text(_) => "<text>".to_string(),
            Source::File(path) => path.display().to_string(),
            Source::Stdin => "<stdin>".to_string(),
        }
    }

    /// API input reading this source
    pub fn to_input(&self) -> Input {
        match self {
            Source::Text(text) => Input::from_text(text.as_str()),
            Source::File(path) => Input::from_file(path.as_path()),
            Source::Stdin => Input::from_reader(std::io::stdin()),
        }
    }
}

/// Sources for `--text` and `-i` patterns, falling back to stdin
pub fn collect_sources(patterns: &[String], text: Option<&str>) -> Result<Vec<Source>> {
    if let Some(text) = text {
        return Ok(vec![Source::Text(text.to_string())]);
    }
    if patterns.is_empty() {
        return Ok(vec![Source::Stdin]);
    }

    Ok(resolve_patterns(patterns)?
        .into_iter()
        .map(Source::File)
        .collect())
}
