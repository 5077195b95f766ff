//! Tokenizer configuration

use crate::error::{CoreError, Result};
use core::fmt;
use core::str::FromStr;

/// How punctuation tokens are merged into neighbouring words
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AttachMode {
    /// Punctuation stays a token of its own
    #[default]
    Separate,
    /// Merge into the preceding word
    Left,
    /// Merge into the following word
    Right,
    /// Opening marks go right, closing marks go left
    Auto,
}

impl AttachMode {
    /// All modes, in documentation order
    pub const ALL: [AttachMode; 4] = [
        AttachMode::Separate,
        AttachMode::Left,
        AttachMode::Right,
        AttachMode::Auto,
    ];

    /// Lower-case name used in configuration files and requests
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachMode::Separate => "separate",
            AttachMode::Left => "left",
            AttachMode::Right => "right",
            AttachMode::Auto => "auto",
        }
    }

    /// Parse a mode name, falling back to [`AttachMode::Separate`] for
    /// anything unrecognised. Use [`str::parse`] for strict validation.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for AttachMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "separate" => Ok(AttachMode::Separate),
            "left" => Ok(AttachMode::Left),
            "right" => Ok(AttachMode::Right),
            "auto" => Ok(AttachMode::Auto),
            _ => Err(CoreError::UnknownAttachMode(s.to_string())),
        }
    }
}

impl fmt::Display for AttachMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokenizer options.
///
/// Construct through [`TokenizerConfig::builder`] (validated) or one of the
/// presets. `Default` gives the plain word-splitting defaults;
/// [`TokenizerConfig::composed`] gives the defaults used when tokens are
/// syllabified afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TokenizerConfig {
    include_numbers: bool,
    keep_hyphens: bool,
    keep_punct: bool,
    attach_punct: AttachMode,
    lower: bool,
    min_len: usize,
    unique: bool,
    normalize_ellipsis: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            include_numbers: true,
            keep_hyphens: false,
            keep_punct: false,
            attach_punct: AttachMode::Separate,
            lower: false,
            min_len: 1,
            unique: false,
            normalize_ellipsis: true,
        }
    }
}

impl TokenizerConfig {
    /// Defaults for text that is split and then syllabified: punctuation is
    /// kept and attached automatically.
    pub fn composed() -> Self {
        Self {
            keep_punct: true,
            attach_punct: AttachMode::Auto,
            ..Self::default()
        }
    }

    /// Builder starting from [`TokenizerConfig::default`]
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::default()
    }

    /// Builder starting from this configuration
    pub fn to_builder(&self) -> TokenizerConfigBuilder {
        TokenizerConfigBuilder {
            config: self.clone(),
        }
    }

    /// Digits are word characters
    pub fn include_numbers(&self) -> bool {
        self.include_numbers
    }

    /// Hyphens join word parts instead of being punctuation
    pub fn keep_hyphens(&self) -> bool {
        self.keep_hyphens
    }

    /// Punctuation tokens are emitted
    pub fn keep_punct(&self) -> bool {
        self.keep_punct
    }

    /// Attachment policy for punctuation
    pub fn attach_punct(&self) -> AttachMode {
        self.attach_punct
    }

    /// Words are lower-cased
    pub fn lower(&self) -> bool {
        self.lower
    }

    /// Minimum word length in characters
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Repeated tokens are dropped
    pub fn unique(&self) -> bool {
        self.unique
    }

    /// Runs of three periods become `…`
    pub fn normalize_ellipsis(&self) -> bool {
        self.normalize_ellipsis
    }
}

/// Builder for [`TokenizerConfig`]
#[derive(Debug, Default, Clone)]
pub struct TokenizerConfigBuilder {
    config: TokenizerConfig,
}

impl TokenizerConfigBuilder {
    /// Create a new builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat digits as word characters
    pub fn include_numbers(mut self, value: bool) -> Self {
        self.config.include_numbers = value;
        self
    }

    /// Keep hyphenated words together
    pub fn keep_hyphens(mut self, value: bool) -> Self {
        self.config.keep_hyphens = value;
        self
    }

    /// Emit punctuation tokens
    pub fn keep_punct(mut self, value: bool) -> Self {
        self.config.keep_punct = value;
        self
    }

    /// Set the attachment policy
    pub fn attach_punct(mut self, mode: AttachMode) -> Self {
        self.config.attach_punct = mode;
        self
    }

    /// Lower-case words
    pub fn lower(mut self, value: bool) -> Self {
        self.config.lower = value;
        self
    }

    /// Drop words shorter than `len` characters
    pub fn min_len(mut self, len: usize) -> Self {
        self.config.min_len = len;
        self
    }

    /// Drop repeated tokens
    pub fn unique(mut self, value: bool) -> Self {
        self.config.unique = value;
        self
    }

    /// Normalize runs of periods into ellipsis characters
    pub fn normalize_ellipsis(mut self, value: bool) -> Self {
        self.config.normalize_ellipsis = value;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<TokenizerConfig> {
        if self.config.min_len == 0 {
            return Err(CoreError::InvalidMinLength(0));
        }
        Ok(self.config)
    }
}
