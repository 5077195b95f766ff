//! Markdown output formatter

use super::{kind_label, OutputFormatter};
use anyhow::Result;
use silabeo_api::{DivideResponse, SplitResponse, SyllabifyResponse};
use std::io::Write;

/// Markdown formatter
///
/// Divisions are collected into one table; each text source gets its own
/// section.
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    separator: String,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
            word_count: 0,
        }
    }
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_division(&mut self, division: &DivideResponse) -> Result<()> {
        if self.word_count == 0 {
            writeln!(self.writer, "| Word | Syllables | Count |")?;
            writeln!(self.writer, "|------|-----------|-------|")?;
        }
        self.word_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} |",
            escape(&division.word),
            escape(&division.syllables.join(&self.separator)),
            division.syllables.len()
        )?;
        Ok(())
    }

    fn format_split(&mut self, source: &str, response: &SplitResponse) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        for (i, token) in response.tokens.iter().enumerate() {
            writeln!(self.writer, "{}. `{}`", i + 1, token)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "*Total tokens: {}*", response.count)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_breakdown(&mut self, source: &str, response: &SyllabifyResponse) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Token | Type | Syllables |")?;
        writeln!(self.writer, "|-------|------|-----------|")?;
        for item in &response.items {
            let syllables = item
                .syllables()
                .map(|s| s.join(&self.separator))
                .unwrap_or_default();
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                escape(item.token()),
                kind_label(item.kind()),
                escape(&syllables)
            )?;
        }
        writeln!(self.writer)?;
        let counts = &response.counts;
        writeln!(
            self.writer,
            "*Words: {}, syllables: {}, punctuation: {}*",
            counts.words, counts.syllables_total, counts.punct
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.word_count > 0 {
            writeln!(self.writer)?;
            writeln!(self.writer, "---")?;
            writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
