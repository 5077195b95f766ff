//! CLI command implementations

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Args, Subcommand};
use rayon::ThreadPool;
use silabeo_api::{AttachMode, Options};
use std::path::PathBuf;

pub mod divide;
pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Divide words into syllables
    Divide(divide::DivideArgs),

    /// Split text into word and punctuation tokens
    Split(process::ProcessArgs),

    /// Split text and divide its words into syllables
    Syllabify(process::ProcessArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Divide(args) => args.execute(),
            Commands::Split(args) => args.execute(process::Mode::Split),
            Commands::Syllabify(args) => args.execute(process::Mode::Syllabify),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List punctuation attachment modes
    AttachModes,
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => OutputFormat::ALL
                .iter()
                .map(|f| format!("{:<10} {}", f.as_str(), f.description()))
                .collect(),
            ListCommands::AttachModes => AttachMode::ALL
                .iter()
                .map(|m| format!("{:<10} {}", m.as_str(), attach_mode_description(*m)))
                .collect(),
        }
    }
}

fn attach_mode_description(mode: AttachMode) -> &'static str {
    match mode {
        AttachMode::Separate => "Punctuation stays a token of its own",
        AttachMode::Left => "Punctuation joins the word before it",
        AttachMode::Right => "Punctuation joins the word after it",
        AttachMode::Auto => "Opening marks join the next word, closing marks the previous one",
    }
}

/// Input, output and runtime options shared by the processing commands
#[derive(Debug, Default, Args)]
pub struct IoArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from the config file, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SILABEO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Worker threads for multi-file input (default: number of CPUs)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress logging and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl IoArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Worker pool sized by `--threads`, or the CPU count
    pub fn thread_pool(&self) -> Result<ThreadPool> {
        let threads = match self.threads {
            Some(0) => {
                return Err(CliError::ThreadPool("thread count must be at least 1".into()).into())
            }
            Some(n) => n,
            None => num_cpus::get(),
        };
        log::debug!("Using {} worker threads", threads);

        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| CliError::ThreadPool(e.to_string()).into())
    }
}

/// Tokenizer flags; each one only overrides when given, and every switch
/// has a negated form so config file values can be turned off
#[derive(Debug, Default, Args)]
pub struct TokenizerArgs {
    /// Treat digits as word characters
    #[arg(long, conflicts_with = "no_numbers")]
    pub numbers: bool,

    /// Do not treat digits as word characters
    #[arg(long)]
    pub no_numbers: bool,

    /// Keep hyphenated compounds as one word
    #[arg(long, conflicts_with = "no_keep_hyphens")]
    pub keep_hyphens: bool,

    /// Split hyphenated compounds at the hyphen
    #[arg(long)]
    pub no_keep_hyphens: bool,

    /// Emit punctuation tokens
    #[arg(long, conflicts_with = "no_punct")]
    pub keep_punct: bool,

    /// Drop punctuation tokens
    #[arg(long)]
    pub no_punct: bool,

    /// Attach punctuation to neighbouring words
    #[arg(long, value_name = "MODE", value_parser = parse_attach_mode)]
    pub attach: Option<AttachMode>,

    /// Lowercase every token
    #[arg(long, conflicts_with = "no_lower")]
    pub lower: bool,

    /// Keep the original case
    #[arg(long)]
    pub no_lower: bool,

    /// Minimum word length in characters
    #[arg(long, value_name = "N")]
    pub min_len: Option<usize>,

    /// Drop repeated tokens, keeping the first occurrence
    #[arg(long, conflicts_with = "no_unique")]
    pub unique: bool,

    /// Keep repeated tokens
    #[arg(long)]
    pub no_unique: bool,

    /// Rewrite "..." runs as a single ellipsis
    #[arg(long, conflicts_with = "no_ellipsis")]
    pub ellipsis: bool,

    /// Leave "..." runs as separate periods
    #[arg(long)]
    pub no_ellipsis: bool,
}

impl TokenizerArgs {
    /// Options set by the given flags
    pub fn to_options(&self) -> Options {
        Options {
            include_numbers: switch(self.numbers, self.no_numbers),
            keep_hyphens: switch(self.keep_hyphens, self.no_keep_hyphens),
            keep_punct: switch(self.keep_punct, self.no_punct),
            attach_punct: self.attach.map(|m| m.as_str().to_string()),
            lower: switch(self.lower, self.no_lower),
            min_len: self.min_len,
            unique: switch(self.unique, self.no_unique),
            normalize_ellipsis: switch(self.ellipsis, self.no_ellipsis),
        }
    }
}

/// `Some` only when one side of a flag pair was given; the negated side wins
fn switch(on: bool, off: bool) -> Option<bool> {
    if off {
        Some(false)
    } else {
        on.then_some(true)
    }
}

fn parse_attach_mode(value: &str) -> std::result::Result<AttachMode, String> {
    value.parse().map_err(|e: silabeo_api::CoreError| e.to_string())
}
