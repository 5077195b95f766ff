//! Request and response records

use crate::config::{Options, ResolvedOptions};
use crate::error::{ApiError, Result};
use silabeo_core::{Counts, Item};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Text source for `split` and `syllabify`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path, read as UTF-8
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Input::Bytes(bytes.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Consume the source and return its text
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => {
                log::debug!("Reading input from {}", path.display());
                Ok(fs::read_to_string(&path)?)
            }
            Input::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
            Input::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes)?;
                Ok(String::from_utf8(bytes)?)
            }
        }
    }
}

/// Syllabify a single word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DivideRequest {
    /// Word to divide
    #[cfg_attr(feature = "serde", serde(default))]
    pub word: Option<String>,
}

impl DivideRequest {
    /// Request for `word`
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
        }
    }

    pub(crate) fn into_word(self) -> Result<String> {
        self.word.ok_or(ApiError::InvalidInput("word"))
    }
}

/// Syllables of a single word
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DivideResponse {
    /// The word as given
    pub word: String,
    /// Its syllables, in order
    pub syllables: Vec<String>,
}

/// Word with its syllables, the shape stored by persistence collaborators
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyllableRecord {
    /// The word
    pub word: String,
    /// Its syllables, in order
    pub syllables: Vec<String>,
}

impl From<DivideResponse> for SyllableRecord {
    fn from(response: DivideResponse) -> Self {
        Self {
            word: response.word,
            syllables: response.syllables,
        }
    }
}

/// Tokenize a text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitRequest {
    /// Text to tokenize
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<String>,
    /// Tokenizer options, flattened into the request object
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub options: Options,
}

impl SplitRequest {
    /// Request for `text` with default options
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            options: Options::default(),
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}

/// Tokens of a text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitResponse {
    /// The text as given
    pub text: String,
    /// Tokens in order
    pub tokens: Vec<String>,
    /// Number of tokens
    pub count: usize,
    /// Options in effect
    pub options: ResolvedOptions,
}

/// Tokenize a text and syllabify its words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyllabifyRequest {
    /// Text to process
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<String>,
    /// Tokenizer options, flattened into the request object
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub options: Options,
}

impl SyllabifyRequest {
    /// Request for `text` with default options
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            options: Options::default(),
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}

/// Word and punctuation items of a text, with counts
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyllabifyResponse {
    /// The text as given
    pub text: String,
    /// Items in token order
    pub items: Vec<Item>,
    /// Item and punctuation counts
    pub counts: Counts,
    /// Options in effect
    pub options: ResolvedOptions,
}
