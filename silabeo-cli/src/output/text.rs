//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use silabeo_api::{DivideResponse, SplitResponse, SyllabifyResponse};
use std::io::Write;

/// Plain text formatter
///
/// Divisions print as `word: syl-la-bles`, tokens one per line, and
/// breakdowns as a single line followed by a count summary.
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_division(&mut self, division: &DivideResponse) -> Result<()> {
        writeln!(
            self.writer,
            "{}: {}",
            division.word,
            division.syllables.join(&self.separator)
        )?;
        Ok(())
    }

    fn format_split(&mut self, _source: &str, response: &SplitResponse) -> Result<()> {
        for token in &response.tokens {
            writeln!(self.writer, "{token}")?;
        }
        Ok(())
    }

    fn format_breakdown(&mut self, _source: &str, response: &SyllabifyResponse) -> Result<()> {
        let line: Vec<String> = response
            .items
            .iter()
            .map(|item| match item.syllables() {
                Some(syllables) => syllables.join(&self.separator),
                None => item.token().to_string(),
            })
            .collect();
        writeln!(self.writer, "{}", line.join(" "))?;

        let counts = &response.counts;
        writeln!(
            self.writer,
            "words: {}, syllables: {}, punctuation: {} (opening: {}, closing: {})",
            counts.words, counts.syllables_total, counts.punct, counts.punct_open, counts.punct_close
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silabeo_api::{divide_word, split_text, syllabify_text};

    fn render(f: impl FnOnce(&mut TextFormatter<Vec<u8>>) -> Result<()>) -> String {
        let mut formatter = TextFormatter::new(Vec::new(), "-");
        f(&mut formatter).unwrap();
        formatter.finish().unwrap();
        String::from_utf8(formatter.writer).unwrap()
    }

    #[test]
    fn test_division_line() {
        let out = render(|f| f.format_division(&divide_word("palabra")));
        assert_eq!(out, "palabra: pa-la-bra\n");
    }

    #[test]
    fn test_tokens_one_per_line() {
        let out = render(|f| f.format_split("<text>", &split_text("¡Hola!")));
        assert_eq!(out, "¡\nHola\n!\n");
    }

    #[test]
    fn test_breakdown_line_and_summary() {
        let out = render(|f| f.format_breakdown("<text>", &syllabify_text("¡Hola, amigo!")));
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("¡ Ho-la , a-mi-go !"));
        assert_eq!(
            lines.next(),
            Some("words: 2, syllables: 5, punctuation: 3 (opening: 1, closing: 2)")
        );
    }

    #[test]
    fn test_custom_separator() {
        let mut formatter = TextFormatter::new(Vec::new(), "·");
        formatter.format_division(&divide_word("luna")).unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "luna: lu·na\n");
    }
}
