//! Split and syllabify command implementation

use super::{IoArgs, TokenizerArgs};
use crate::config::CliConfig;
use crate::input::{collect_sources, Source};
use crate::output::{create_formatter, open_writer};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use silabeo_api::{Input, SyllableProcessor};

/// What `ProcessArgs` produces for each source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Tokens only
    Split,
    /// Items with syllabified words and counts
    Syllabify,
}

/// Arguments for the split and syllabify commands
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Text to process instead of files or stdin
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    #[command(flatten)]
    pub io: IoArgs,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,
}

impl ProcessArgs {
    /// Execute the command in `mode`
    pub fn execute(&self, mode: Mode) -> Result<()> {
        self.io.init_logging();

        log::info!("Starting {:?}", mode);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.io.config.as_deref())?;
        let options = config.tokenizer.clone().merge(&self.tokenizer.to_options());
        let processor =
            SyllableProcessor::with_options(&options).context("Invalid tokenizer options")?;

        let sources = collect_sources(&self.io.input, self.text.as_deref())?;
        let pool = self.io.thread_pool()?;
        let progress = ProgressReporter::for_files(sources.len(), self.io.quiet);

        let format = self.io.format.unwrap_or(config.output.format);
        match mode {
            Mode::Split => {
                let responses = pool.install(|| {
                    run_sources(&sources, &progress, |input| processor.split_input(input))
                })?;
                progress.finish();

                let writer = open_writer(self.io.output.as_deref())?;
                let mut formatter = create_formatter(format, writer, &config.output);
                for (source, response) in sources.iter().zip(&responses) {
                    formatter.format_split(&source.name(), response)?;
                }
                formatter.finish()?;
            }
            Mode::Syllabify => {
                let responses = pool.install(|| {
                    run_sources(&sources, &progress, |input| processor.syllabify_input(input))
                })?;
                progress.finish();

                let writer = open_writer(self.io.output.as_deref())?;
                let mut formatter = create_formatter(format, writer, &config.output);
                for (source, response) in sources.iter().zip(&responses) {
                    formatter.format_breakdown(&source.name(), response)?;
                }
                formatter.finish()?;
            }
        }

        log::info!("Processed {} source(s)", sources.len());
        Ok(())
    }
}

/// Run `process` over every source in parallel; results keep source order
fn run_sources<T, F>(sources: &[Source], progress: &ProgressReporter, process: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(Input) -> silabeo_api::error::Result<T> + Sync,
{
    sources
        .par_iter()
        .map(|source| {
            let name = source.name();
            let result =
                process(source.to_input()).with_context(|| format!("Failed to process {name}"));
            progress.file_completed(&name);
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    fn args(text: Option<&str>, input: Vec<String>) -> ProcessArgs {
        ProcessArgs {
            text: text.map(str::to_string),
            io: IoArgs {
                input,
                quiet: true,
                threads: Some(2),
                ..Default::default()
            },
            tokenizer: TokenizerArgs::default(),
        }
    }

    #[test]
    fn test_run_sources_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut sources = Vec::new();
        for (i, text) in ["uno", "dos tres", "cuatro cinco seis"].iter().enumerate() {
            let path = temp_dir.path().join(format!("{i}.txt"));
            fs::write(&path, text).unwrap();
            sources.push(Source::File(path));
        }

        let processor = SyllableProcessor::new();
        let progress = ProgressReporter::for_files(sources.len(), true);
        let counts = run_sources(&sources, &progress, |input| {
            processor.split_input(input).map(|r| r.count)
        })
        .unwrap();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_file_names_source() {
        let sources = vec![Source::File("/nonexistent/in.txt".into())];
        let processor = SyllableProcessor::new();
        let progress = ProgressReporter::for_files(1, true);
        let err = run_sources(&sources, &progress, |input| processor.split_input(input))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/in.txt"));
    }

    #[test]
    fn test_execute_writes_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.json");

        let mut args = args(Some("¡Hola, amigo!"), Vec::new());
        args.io.output = Some(output.clone());
        args.io.format = Some(OutputFormat::Json);
        args.execute(Mode::Syllabify).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["counts"]["syllables_total"], 5);
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("silabeo.toml");
        fs::write(&config, "[tokenizer]\nlower = true\nkeep_punct = false\n").unwrap();
        let output = temp_dir.path().join("out.txt");

        let mut args = args(Some("Hola, Mundo."), Vec::new());
        args.io.config = Some(config);
        args.io.output = Some(output.clone());
        args.tokenizer.keep_punct = true;
        args.execute(Mode::Split).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "hola\n,\nmundo\n.\n");
    }

    #[test]
    fn test_invalid_min_len_fails() {
        let mut args = args(Some("hola"), Vec::new());
        args.tokenizer.min_len = Some(0);
        let err = args.execute(Mode::Split).unwrap_err();
        assert!(err.to_string().contains("Invalid tokenizer options"));
    }
}
