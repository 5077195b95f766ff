//! Divide command implementation

use super::IoArgs;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, open_writer};
use anyhow::{Context, Result};
use clap::Args;
use silabeo_api::{Input, SyllableProcessor};

/// Arguments for the divide command
#[derive(Debug, Args)]
pub struct DivideArgs {
    /// Words to divide; read from `-i` files or stdin when absent
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    #[command(flatten)]
    pub io: IoArgs,
}

impl DivideArgs {
    /// Execute the divide command
    pub fn execute(&self) -> Result<()> {
        self.io.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.io.config.as_deref())?;
        let words = self.collect_words()?;
        log::info!("Dividing {} words", words.len());

        let pool = self.io.thread_pool()?;
        let processor = SyllableProcessor::new();
        let divisions = pool.install(|| processor.divide_batch(&words));

        let format = self.io.format.unwrap_or(config.output.format);
        let writer = open_writer(self.io.output.as_deref())?;
        let mut formatter = create_formatter(format, writer, &config.output);
        for division in &divisions {
            formatter.format_division(division)?;
        }
        formatter.finish()
    }

    /// Positional words, then words from `-i` files; stdin when both are empty
    fn collect_words(&self) -> Result<Vec<String>> {
        let mut words = self.words.clone();
        if !self.io.input.is_empty() {
            for path in resolve_patterns(&self.io.input)? {
                words.extend(FileReader::read_words(&path)?);
            }
        } else if words.is_empty() {
            let text = Input::from_reader(std::io::stdin())
                .read_text()
                .context("Failed to read words from stdin")?;
            words = FileReader::words(&text);
        }
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_words_from_arguments_and_files() {
        let temp_dir = TempDir::new().unwrap();
        let list = temp_dir.path().join("words.txt");
        fs::write(&list, "cohete\naire\n").unwrap();

        let args = DivideArgs {
            words: vec!["palabra".to_string()],
            io: IoArgs {
                input: vec![list.display().to_string()],
                ..Default::default()
            },
        };
        assert_eq!(
            args.collect_words().unwrap(),
            vec!["palabra", "cohete", "aire"]
        );
    }

    #[test]
    fn test_execute_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.txt");

        let args = DivideArgs {
            words: vec!["palabra".to_string(), "buey".to_string()],
            io: IoArgs {
                output: Some(output.clone()),
                quiet: true,
                threads: Some(1),
                ..Default::default()
            },
        };
        args.execute().unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "palabra: pa-la-bra\nbuey: buey\n"
        );
    }
}
