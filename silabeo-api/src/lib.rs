//! Public request/response API for silabeo
//!
//! This crate wraps the algorithms of `silabeo-core` behind three operations
//! mirroring a small web service:
//!
//! - **divide**: syllables of one word
//! - **split**: tokens of a text
//! - **syllabify**: tokens of a text, with its words syllabified
//!
//! Requests carry optional tokenizer fields; absent fields take the
//! processor's configured defaults, and every response echoes the options
//! actually used.
//!
//! ```rust
//! use silabeo_api::{SyllableProcessor, SyllabifyRequest};
//!
//! let processor = SyllableProcessor::new();
//! let response = processor.syllabify(SyllabifyRequest::new("¡Hola, amigo!")).unwrap();
//! assert_eq!(response.counts.words, 2);
//! assert_eq!(response.counts.syllables_total, 5);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use log::debug;
use silabeo_core::{divide_into_syllables, divide_words, TextComposer, Tokenizer, TokenizerConfig};

// Re-export key types
pub use config::{split_preset, syllabify_preset, Options, ResolvedOptions};
pub use dto::{
    DivideRequest, DivideResponse, Input, SplitRequest, SplitResponse, SyllabifyRequest,
    SyllabifyResponse, SyllableRecord,
};
pub use error::ApiError;
pub use silabeo_core::{AttachMode, CoreError, Counts, Item, ItemKind};

/// Main entry point for syllable division and tokenization
///
/// Holds one tokenizer per operation, built once from the configured
/// defaults. Requests that carry their own options get a tokenizer resolved
/// on the fly against those defaults.
#[derive(Debug, Clone)]
pub struct SyllableProcessor {
    splitter: Tokenizer,
    composer: TextComposer,
}

impl SyllableProcessor {
    /// Processor with the default presets for each operation
    pub fn new() -> Self {
        Self::from_configs(split_preset(), syllabify_preset())
    }

    /// Processor whose defaults are the presets overlaid with `options`
    pub fn with_options(options: &Options) -> Result<Self> {
        let split = options.resolve(&split_preset())?;
        let syllabify = options.resolve(&syllabify_preset())?;
        Ok(Self::from_configs(split, syllabify))
    }

    /// Processor from explicit configurations
    pub fn from_configs(split: TokenizerConfig, syllabify: TokenizerConfig) -> Self {
        Self {
            splitter: Tokenizer::new(split),
            composer: TextComposer::new(syllabify),
        }
    }

    /// Default configuration of `split`
    pub fn split_config(&self) -> &TokenizerConfig {
        self.splitter.config()
    }

    /// Default configuration of `syllabify`
    pub fn syllabify_config(&self) -> &TokenizerConfig {
        self.composer.tokenizer().config()
    }

    /// Divide one word into syllables
    pub fn divide(&self, request: DivideRequest) -> Result<DivideResponse> {
        let word = request.into_word()?;
        let syllables = divide_into_syllables(&word);
        Ok(DivideResponse { word, syllables })
    }

    /// Divide many words, preserving their order
    pub fn divide_batch<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<DivideResponse> {
        divide_words(words)
            .into_iter()
            .map(|(word, syllables)| DivideResponse { word, syllables })
            .collect()
    }

    /// Tokenize a text
    pub fn split(&self, request: SplitRequest) -> Result<SplitResponse> {
        let text = request.text.ok_or(ApiError::InvalidInput("text"))?;
        if request.options.is_empty() {
            return Ok(split_with(&self.splitter, text));
        }

        let config = request.options.resolve(self.splitter.config())?;
        Ok(split_with(&Tokenizer::new(config), text))
    }

    /// Tokenize a text and syllabify its words
    pub fn syllabify(&self, request: SyllabifyRequest) -> Result<SyllabifyResponse> {
        let text = request.text.ok_or(ApiError::InvalidInput("text"))?;
        if request.options.is_empty() {
            return Ok(syllabify_with(&self.composer, text));
        }

        let config = request.options.resolve(self.syllabify_config())?;
        Ok(syllabify_with(&TextComposer::new(config), text))
    }

    /// Tokenize text read from `input` with the default configuration
    pub fn split_input(&self, input: Input) -> Result<SplitResponse> {
        let text = input.read_text()?;
        Ok(split_with(&self.splitter, text))
    }

    /// Syllabify text read from `input` with the default configuration
    pub fn syllabify_input(&self, input: Input) -> Result<SyllabifyResponse> {
        let text = input.read_text()?;
        Ok(syllabify_with(&self.composer, text))
    }
}

impl Default for SyllableProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn split_with(tokenizer: &Tokenizer, text: String) -> SplitResponse {
    let tokens = tokenizer.split(&text);
    debug!("Split {} bytes into {} tokens", text.len(), tokens.len());
    SplitResponse {
        count: tokens.len(),
        tokens,
        options: ResolvedOptions::from(tokenizer.config()),
        text,
    }
}

fn syllabify_with(composer: &TextComposer, text: String) -> SyllabifyResponse {
    let breakdown = composer.compose(&text);
    debug!(
        "Composed {} items with {} syllables",
        breakdown.counts.total, breakdown.counts.syllables_total
    );
    SyllabifyResponse {
        items: breakdown.items,
        counts: breakdown.counts,
        options: ResolvedOptions::from(composer.tokenizer().config()),
        text,
    }
}

// Convenience functions

/// Syllables of `word`
pub fn divide_word(word: &str) -> DivideResponse {
    DivideResponse {
        word: word.to_string(),
        syllables: divide_into_syllables(word),
    }
}

/// Tokenize `text` with the `split` defaults
pub fn split_text(text: &str) -> SplitResponse {
    split_with(&Tokenizer::new(split_preset()), text.to_string())
}

/// Syllabify `text` with the `syllabify` defaults
pub fn syllabify_text(text: &str) -> SyllabifyResponse {
    syllabify_with(&TextComposer::new(syllabify_preset()), text.to_string())
}

/// Syllabify the contents of a file with the `syllabify` defaults
pub fn syllabify_file<P: AsRef<std::path::Path>>(path: P) -> Result<SyllabifyResponse> {
    SyllableProcessor::new().syllabify_input(Input::from_file(path.as_ref()))
}
