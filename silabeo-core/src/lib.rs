//! Syllable division and text tokenization for Spanish-like orthography
//!
//! This crate holds the pure algorithms behind silabeo:
//!
//! - [`vowel`]: vowel strength and accent classification
//! - [`nucleus`]: single vowels, diphthongs and triphthongs
//! - [`syllable`]: syllable boundaries from consonant clusters
//! - [`tokenizer`]: configurable word/punctuation tokenizer
//! - [`composer`]: tokenization followed by syllabification of the words
//!
//! Every operation is a synchronous function over borrowed input with no
//! shared state, so all of them are safe to call from any thread.
//!
//! # Example
//!
//! ```rust
//! use silabeo_core::{divide_into_syllables, split_and_syllabify, TokenizerConfig};
//!
//! assert_eq!(divide_into_syllables("cohete"), vec!["co", "he", "te"]);
//!
//! let breakdown = split_and_syllabify("¡Buen día!", &TokenizerConfig::composed());
//! assert_eq!(breakdown.counts.words, 2);
//! assert_eq!(breakdown.counts.syllables_total, 3);
//! ```

pub mod composer;
pub mod error;
pub mod nucleus;
pub mod syllable;
pub mod tokenizer;
pub mod vowel;

pub use composer::{split_and_syllabify, Counts, Item, ItemKind, TextBreakdown, TextComposer};
pub use error::{CoreError, Result};
pub use nucleus::{scan_nucleus, Nucleus, NucleusKind};
pub use syllable::{divide_into_syllables, divide_words, ConsonantUnit};
pub use tokenizer::{
    split_words, AttachMode, Token, TokenKind, Tokenizer, TokenizerConfig, TokenizerConfigBuilder,
};
