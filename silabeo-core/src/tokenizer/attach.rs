//! Punctuation attachment
//!
//! Merges punctuation tokens into a neighbouring word. Only bare words accept
//! punctuation: once a word has absorbed a mark it becomes
//! [`TokenKind::Attached`] and further marks on that side stay separate.

use super::config::AttachMode;
use super::grammar::{PunctRole, WordGrammar};
use super::{Token, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

fn direction(mode: AttachMode, grammar: &WordGrammar, mark: char) -> Option<Direction> {
    match mode {
        AttachMode::Separate => None,
        AttachMode::Left => Some(Direction::Backward),
        AttachMode::Right => Some(Direction::Forward),
        AttachMode::Auto => match grammar.punct_role(mark) {
            PunctRole::Opening | PunctRole::Dash => Some(Direction::Forward),
            PunctRole::Closing => Some(Direction::Backward),
            PunctRole::Neutral => None,
        },
    }
}

/// Apply the attachment policy to a token sequence
pub(crate) fn attach(tokens: Vec<Token>, mode: AttachMode, grammar: &WordGrammar) -> Vec<Token> {
    if mode == AttachMode::Separate {
        return tokens;
    }

    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let mark = match (token.kind, token.text.chars().next()) {
            (TokenKind::Punctuation, Some(mark)) => mark,
            _ => {
                merged.push(token);
                continue;
            }
        };

        match direction(mode, grammar, mark) {
            Some(Direction::Backward) => match merged.last_mut() {
                Some(prev) if prev.kind == TokenKind::Word => {
                    prev.text.push_str(&token.text);
                    prev.kind = TokenKind::Attached;
                }
                _ => merged.push(token),
            },
            Some(Direction::Forward) => match iter.next_if(|next| next.kind == TokenKind::Word) {
                Some(next) => merged.push(Token {
                    text: token.text + &next.text,
                    kind: TokenKind::Attached,
                }),
                None => merged.push(token),
            },
            None => merged.push(token),
        }
    }

    merged
}
