//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde_json::Value;
use silabeo_api::{DivideResponse, SplitResponse, SyllabifyResponse};
use std::io::Write;

/// JSON formatter
///
/// Collects one document per word or source. A single document is written
/// as an object, anything else as an array in input order.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_division(&mut self, division: &DivideResponse) -> Result<()> {
        self.documents.push(serde_json::to_value(division)?);
        Ok(())
    }

    fn format_split(&mut self, _source: &str, response: &SplitResponse) -> Result<()> {
        self.documents.push(serde_json::to_value(response)?);
        Ok(())
    }

    fn format_breakdown(&mut self, _source: &str, response: &SyllabifyResponse) -> Result<()> {
        self.documents.push(serde_json::to_value(response)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let output = if self.documents.len() == 1 {
            self.documents.remove(0)
        } else {
            Value::Array(std::mem::take(&mut self.documents))
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &output)?;
        } else {
            serde_json::to_writer(&mut self.writer, &output)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silabeo_api::{divide_word, syllabify_text};

    fn finish(mut formatter: JsonFormatter<Vec<u8>>) -> Value {
        formatter.finish().unwrap();
        serde_json::from_slice(&formatter.writer).unwrap()
    }

    #[test]
    fn test_single_document_is_object() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.format_division(&divide_word("aire")).unwrap();
        let value = finish(formatter);
        assert_eq!(value["word"], "aire");
        assert_eq!(value["syllables"], serde_json::json!(["ai", "re"]));
    }

    #[test]
    fn test_many_documents_are_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.format_division(&divide_word("sol")).unwrap();
        formatter.format_division(&divide_word("luna")).unwrap();
        let value = finish(formatter);
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["word"], "luna");
    }

    #[test]
    fn test_breakdown_document() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_breakdown("<text>", &syllabify_text("¿Sí?"))
            .unwrap();
        let value = finish(formatter);
        assert_eq!(value["items"][0]["type"], "punct_open");
        assert_eq!(value["counts"]["words"], 1);
        assert_eq!(value["options"]["attach_punct"], "auto");
    }

    #[test]
    fn test_nothing_written_is_empty_array() {
        let value = finish(JsonFormatter::new(Vec::new(), false));
        assert_eq!(value, serde_json::json!([]));
    }
}
