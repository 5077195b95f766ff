//! Word and punctuation tokenizer
//!
//! Text is scanned left to right. At each position the tokenizer tries the
//! word grammar first, then a single punctuation character; anything else
//! (whitespace, symbols outside the alphabet) is skipped. Afterwards the
//! configured transforms run in a fixed order: filtering, case folding and
//! length checks on words, punctuation attachment, and finally
//! deduplication.

mod attach;
pub mod config;
pub mod ellipsis;
pub mod grammar;

use std::borrow::Cow;
use std::collections::HashSet;

pub use config::{AttachMode, TokenizerConfig, TokenizerConfigBuilder};
pub use ellipsis::normalize_ellipsis;
pub use grammar::{PunctRole, WordGrammar};

/// Kind of a token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// Bare word matching the grammar
    Word,
    /// Single punctuation character
    Punctuation,
    /// Word with punctuation merged in by an attachment policy
    Attached,
}

/// Token produced by the [`Tokenizer`]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Token text
    pub text: String,
    /// Word, punctuation or attached
    pub kind: TokenKind,
}

impl Token {
    /// Bare word token
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Word,
        }
    }

    /// Punctuation token
    pub fn punct(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Punctuation,
        }
    }

    /// Token text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Tokenizer bound to one configuration.
///
/// The grammar is derived from the configuration once, at construction, and
/// reused for every call. A `Tokenizer` holds no mutable state and can be
/// shared between threads.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    config: TokenizerConfig,
    grammar: WordGrammar,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

impl Tokenizer {
    /// Create a tokenizer for `config`
    pub fn new(config: TokenizerConfig) -> Self {
        let grammar = WordGrammar::new(config.include_numbers(), config.keep_hyphens());
        Self { config, grammar }
    }

    /// Active configuration
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Grammar derived from the configuration
    pub fn grammar(&self) -> &WordGrammar {
        &self.grammar
    }

    /// Tokenize `text`
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let config = &self.config;
        let text = if config.normalize_ellipsis() {
            normalize_ellipsis(text)
        } else {
            Cow::Borrowed(text)
        };

        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            if let Some(end) = self.grammar.match_word(&chars, i) {
                let word: String = chars[i..end].iter().collect();
                i = end;
                let word = if config.lower() {
                    word.to_lowercase()
                } else {
                    word
                };
                if word.chars().count() >= config.min_len() {
                    tokens.push(Token::word(word));
                }
            } else {
                let ch = chars[i];
                i += 1;
                if config.keep_punct() && self.grammar.is_punct(ch) {
                    tokens.push(Token::punct(ch));
                }
            }
        }

        if config.keep_punct() {
            tokens = attach::attach(tokens, config.attach_punct(), &self.grammar);
        }

        if config.unique() {
            let mut seen = HashSet::with_capacity(tokens.len());
            tokens.retain(|token| seen.insert(token.text.clone()));
        }

        tokens
    }

    /// Tokenize and return only the token texts
    pub fn split(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .into_iter()
            .map(|token| token.text)
            .collect()
    }
}

/// Split `text` into token strings under `config`.
///
/// ```
/// use silabeo_core::{split_words, AttachMode, TokenizerConfig};
///
/// let config = TokenizerConfig::builder()
///     .keep_punct(true)
///     .attach_punct(AttachMode::Left)
///     .build()
///     .unwrap();
/// assert_eq!(split_words("Hola, mundo.", &config), vec!["Hola,", "mundo."]);
/// ```
pub fn split_words(text: &str, config: &TokenizerConfig) -> Vec<String> {
    Tokenizer::new(config.clone()).split(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer(build: impl FnOnce(TokenizerConfigBuilder) -> TokenizerConfigBuilder) -> Tokenizer {
        Tokenizer::new(build(TokenizerConfig::builder()).build().unwrap())
    }

    #[test]
    fn test_words_only_by_default() {
        let t = Tokenizer::default();
        assert_eq!(
            t.split("¡Hola, mundo! ¿Qué tal?"),
            vec!["Hola", "mundo", "Qué", "tal"]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(Tokenizer::default().split("ISO 9001 v2"), vec!["ISO", "9001", "v2"]);
        let t = tokenizer(|b| b.include_numbers(false));
        assert_eq!(t.split("ISO 9001 v2"), vec!["ISO", "v"]);
    }

    #[test]
    fn test_hyphens() {
        assert_eq!(
            Tokenizer::default().split("auto-estima"),
            vec!["auto", "estima"]
        );
        let t = tokenizer(|b| b.keep_hyphens(true));
        assert_eq!(t.split("auto-estima"), vec!["auto-estima"]);

        let t = tokenizer(|b| b.keep_punct(true));
        assert_eq!(t.split("auto-estima"), vec!["auto", "-", "estima"]);
    }

    #[test]
    fn test_contractions() {
        assert_eq!(
            Tokenizer::default().split("don't it's"),
            vec!["don't", "it's"]
        );
    }

    #[test]
    fn test_lower_and_min_len() {
        let t = tokenizer(|b| b.lower(true).min_len(3).keep_punct(true));
        assert_eq!(t.split("El Sol, y LA Luna."), vec!["sol", ",", "luna", "."]);
    }

    #[test]
    fn test_ellipsis_toggle() {
        let t = tokenizer(|b| b.keep_punct(true));
        assert_eq!(t.split("Espera...."), vec!["Espera", "…", "."]);

        let t = tokenizer(|b| b.keep_punct(true).normalize_ellipsis(false));
        assert_eq!(t.split("Espera..."), vec!["Espera", ".", ".", "."]);
    }

    #[test]
    fn test_unique_after_attachment() {
        let t = tokenizer(|b| b.keep_punct(true).attach_punct(AttachMode::Left).unique(true));
        assert_eq!(t.split("sí, sí, sí."), vec!["sí,", "sí."]);
    }

    #[test]
    fn test_token_kinds() {
        let t = Tokenizer::new(TokenizerConfig::composed());
        let tokens = t.tokenize("¿Vienes?");
        assert_eq!(
            tokens,
            vec![
                Token {
                    text: "¿Vienes".into(),
                    kind: TokenKind::Attached
                },
                Token::punct("?"),
            ]
        );
    }

    #[test]
    fn test_whitespace_only() {
        let t = tokenizer(|b| b.keep_punct(true));
        assert!(t.tokenize("  \n\t ").is_empty());
        assert!(t.tokenize("").is_empty());
    }
}
