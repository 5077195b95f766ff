//! Option bag resolved against per-operation presets

use crate::error::{ApiError, Result};
use log::{debug, warn};
use silabeo_core::{AttachMode, CoreError, TokenizerConfig};

/// Defaults for `split` requests: the library defaults with punctuation kept
pub fn split_preset() -> TokenizerConfig {
    TokenizerConfig::default()
        .to_builder()
        .keep_punct(true)
        .build()
        .unwrap_or_default()
}

/// Defaults for `syllabify` requests
pub fn syllabify_preset() -> TokenizerConfig {
    TokenizerConfig::composed()
}

/// Tokenizer options as they arrive in a request
///
/// Every field is optional. Absent fields keep the value of whatever preset
/// the options are resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Accept ASCII digits as word characters
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub include_numbers: Option<bool>,
    /// Treat `-` as a connector inside words
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub keep_hyphens: Option<bool>,
    /// Emit punctuation tokens
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub keep_punct: Option<bool>,
    /// Attachment mode name; unknown names fall back to `separate`
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub attach_punct: Option<String>,
    /// Lowercase every token
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lower: Option<bool>,
    /// Minimum word length in characters
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min_len: Option<usize>,
    /// Drop repeated tokens
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub unique: Option<bool>,
    /// Rewrite `...` runs as `…`
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub normalize_ellipsis: Option<bool>,
}

impl Options {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Options::default()
    }

    /// Overlay `other` on top of `self`; fields set in `other` win
    pub fn merge(mut self, other: &Options) -> Self {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field.clone();
                })*
            };
        }
        overlay!(
            include_numbers,
            keep_hyphens,
            keep_punct,
            attach_punct,
            lower,
            min_len,
            unique,
            normalize_ellipsis
        );
        self
    }

    /// Resolve against `preset`, mapping unknown attachment modes to `separate`
    pub fn resolve(&self, preset: &TokenizerConfig) -> Result<TokenizerConfig> {
        let mode = self.attach_punct.as_deref().map(|raw| {
            raw.parse::<AttachMode>().unwrap_or_else(|_| {
                warn!("Unknown attachment mode '{}', using separate", raw);
                AttachMode::Separate
            })
        });
        self.apply(preset, mode)
    }

    /// Resolve against `preset`, rejecting unknown attachment modes
    pub fn resolve_strict(&self, preset: &TokenizerConfig) -> Result<TokenizerConfig> {
        let mode = self
            .attach_punct
            .as_deref()
            .map(str::parse::<AttachMode>)
            .transpose()?;
        self.apply(preset, mode)
    }

    fn apply(&self, preset: &TokenizerConfig, mode: Option<AttachMode>) -> Result<TokenizerConfig> {
        let mut builder = preset.to_builder();
        if let Some(value) = self.include_numbers {
            builder = builder.include_numbers(value);
        }
        if let Some(value) = self.keep_hyphens {
            builder = builder.keep_hyphens(value);
        }
        if let Some(value) = self.keep_punct {
            builder = builder.keep_punct(value);
        }
        if let Some(mode) = mode {
            builder = builder.attach_punct(mode);
        }
        if let Some(value) = self.lower {
            builder = builder.lower(value);
        }
        if let Some(len) = self.min_len {
            builder = builder.min_len(len);
        }
        if let Some(value) = self.unique {
            builder = builder.unique(value);
        }
        if let Some(value) = self.normalize_ellipsis {
            builder = builder.normalize_ellipsis(value);
        }

        let config = builder.build().map_err(|e| match e {
            CoreError::InvalidMinLength(_) => ApiError::InvalidOption(e.to_string()),
            other => ApiError::Core(other),
        })?;
        debug!("Resolved tokenizer options: {:?}", config);
        Ok(config)
    }
}

/// Resolved option values, echoed back in responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedOptions {
    /// Digits counted as word characters
    pub include_numbers: bool,
    /// Hyphen used as a word connector
    pub keep_hyphens: bool,
    /// Punctuation tokens emitted
    pub keep_punct: bool,
    /// Attachment mode in effect
    pub attach_punct: AttachMode,
    /// Tokens lowercased
    pub lower: bool,
    /// Minimum word length
    pub min_len: usize,
    /// Repeated tokens dropped
    pub unique: bool,
    /// Ellipsis normalization applied
    pub normalize_ellipsis: bool,
}

impl From<&TokenizerConfig> for ResolvedOptions {
    fn from(config: &TokenizerConfig) -> Self {
        Self {
            include_numbers: config.include_numbers(),
            keep_hyphens: config.keep_hyphens(),
            keep_punct: config.keep_punct(),
            attach_punct: config.attach_punct(),
            lower: config.lower(),
            min_len: config.min_len(),
            unique: config.unique(),
            normalize_ellipsis: config.normalize_ellipsis(),
        }
    }
}

impl From<ResolvedOptions> for Options {
    fn from(resolved: ResolvedOptions) -> Self {
        Self {
            include_numbers: Some(resolved.include_numbers),
            keep_hyphens: Some(resolved.keep_hyphens),
            keep_punct: Some(resolved.keep_punct),
            attach_punct: Some(resolved.attach_punct.as_str().to_string()),
            lower: Some(resolved.lower),
            min_len: Some(resolved.min_len),
            unique: Some(resolved.unique),
            normalize_ellipsis: Some(resolved.normalize_ellipsis),
        }
    }
}
