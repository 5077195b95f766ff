//! Tokenize-then-syllabify composition
//!
//! Each token is split into leading punctuation, a core and trailing
//! punctuation. A core that is a word is syllabified; punctuation is emitted
//! one character per item and tagged as opening, closing or plain.

use crate::syllable::divide_into_syllables;
use crate::tokenizer::{Token, Tokenizer, TokenizerConfig, WordGrammar};

/// Kind of a composed item, without its payload
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Syllabified word
    Word,
    /// Punctuation that neither opens nor closes
    Punct,
    /// Opening punctuation
    PunctOpen,
    /// Closing punctuation
    PunctClose,
}

/// One unit of a [`TextBreakdown`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Item {
    /// Word core with hyphens removed, and its syllables
    Word {
        /// Word text
        token: String,
        /// Syllables, concatenating to `token`
        syllables: Vec<String>,
    },
    /// Plain punctuation character
    Punct {
        /// The character
        token: String,
    },
    /// Opening punctuation character
    PunctOpen {
        /// The character
        token: String,
    },
    /// Closing punctuation character
    PunctClose {
        /// The character
        token: String,
    },
}

impl Item {
    /// Payload-free kind
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Word { .. } => ItemKind::Word,
            Item::Punct { .. } => ItemKind::Punct,
            Item::PunctOpen { .. } => ItemKind::PunctOpen,
            Item::PunctClose { .. } => ItemKind::PunctClose,
        }
    }

    /// Item text
    pub fn token(&self) -> &str {
        match self {
            Item::Word { token, .. }
            | Item::Punct { token }
            | Item::PunctOpen { token }
            | Item::PunctClose { token } => token,
        }
    }

    /// Syllables of a word item
    pub fn syllables(&self) -> Option<&[String]> {
        match self {
            Item::Word { syllables, .. } => Some(syllables),
            Item::Punct { .. } | Item::PunctOpen { .. } | Item::PunctClose { .. } => None,
        }
    }
}

/// Summary counts of a breakdown.
///
/// `words`, `punct` and `syllables_total` tally the item stream.
/// `punct_open` and `punct_close` count marks in the original input text and
/// therefore need not match the tags in the item stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counts {
    /// Number of items
    pub total: usize,
    /// Word items
    pub words: usize,
    /// Punctuation items of any tag
    pub punct: usize,
    /// Opening marks in the input text
    pub punct_open: usize,
    /// Closing marks in the input text
    pub punct_close: usize,
    /// `punct_open + punct_close`
    pub punct_total: usize,
    /// Syllables across all word items
    pub syllables_total: usize,
}

/// Composed output: items plus counts
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextBreakdown {
    /// Items in text order
    pub items: Vec<Item>,
    /// Summary counts
    pub counts: Counts,
}

/// Tokenizes text and syllabifies the word tokens
#[derive(Clone, Debug)]
pub struct TextComposer {
    tokenizer: Tokenizer,
}

impl Default for TextComposer {
    fn default() -> Self {
        Self::new(TokenizerConfig::composed())
    }
}

impl TextComposer {
    /// Composer for `config`
    pub fn new(config: TokenizerConfig) -> Self {
        Self::with_tokenizer(Tokenizer::new(config))
    }

    /// Composer reusing an existing tokenizer
    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Underlying tokenizer
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Break `text` down into items and counts
    pub fn compose(&self, text: &str) -> TextBreakdown {
        let grammar = self.tokenizer.grammar();
        let mut breakdown = TextBreakdown::default();

        for token in self.tokenizer.tokenize(text) {
            push_token(&mut breakdown, grammar, &token);
        }

        let counts = &mut breakdown.counts;
        counts.total = breakdown.items.len();
        counts.punct_open = text.chars().filter(|&c| grammar.is_opening(c)).count();
        counts.punct_close = text.chars().filter(|&c| grammar.is_closing(c)).count();
        counts.punct_total = counts.punct_open + counts.punct_close;

        breakdown
    }
}

/// Tokenize `text` under `config` and syllabify its words
pub fn split_and_syllabify(text: &str, config: &TokenizerConfig) -> TextBreakdown {
    TextComposer::new(config.clone()).compose(text)
}

fn push_token(breakdown: &mut TextBreakdown, grammar: &WordGrammar, token: &Token) {
    let chars: Vec<char> = token.text.chars().collect();
    let prefix_len = chars.iter().take_while(|&&c| grammar.is_punct(c)).count();
    let suffix_len = chars.iter().rev().take_while(|&&c| grammar.is_punct(c)).count();

    // an all-punctuation token leaves no core
    let core: String = if prefix_len + suffix_len <= chars.len() {
        chars[prefix_len..chars.len() - suffix_len].iter().collect()
    } else {
        String::new()
    };
    let dehyphenated = core.replace('-', "");

    if !core.is_empty() && (grammar.is_word(&core) || grammar.is_word(&dehyphenated)) {
        push_punct(breakdown, grammar, &chars[..prefix_len]);

        let syllables = divide_into_syllables(&dehyphenated);
        breakdown.counts.words += 1;
        breakdown.counts.syllables_total += syllables.len();
        breakdown.items.push(Item::Word {
            token: dehyphenated,
            syllables,
        });

        push_punct(breakdown, grammar, &chars[chars.len() - suffix_len..]);
    } else {
        push_punct(breakdown, grammar, &chars);
    }
}

fn push_punct(breakdown: &mut TextBreakdown, grammar: &WordGrammar, marks: &[char]) {
    for &mark in marks {
        let token = mark.to_string();
        let item = if grammar.is_opening(mark) {
            Item::PunctOpen { token }
        } else if grammar.is_closing(mark) {
            Item::PunctClose { token }
        } else {
            Item::Punct { token }
        };
        breakdown.counts.punct += 1;
        breakdown.items.push(item);
    }
}
