//! Lexical grammar for words and punctuation
//!
//! The grammar is fixed once per configuration: which characters make up a
//! word, which join word parts, and which count as punctuation.

/// Opening marks; under `auto` attachment they join the following word
pub const OPENING: [char; 8] = ['¿', '¡', '(', '[', '{', '«', '“', '‘'];

/// Closing marks; under `auto` attachment they join the preceding word
pub const CLOSING: [char; 13] = [
    '?', '!', ')', ']', '}', '»', '”', '’', ',', '.', ';', ':', '…',
];

/// Dash-like marks; under `auto` attachment they join the following word
pub const DASHLIKE: [char; 3] = ['—', '–', '_'];

/// Every punctuation character except the hyphen
const PUNCTUATION: [char; 25] = [
    '?', '!', '¡', '¿', ',', '.', ';', ':', '…', '(', ')', '[', ']', '{', '}', '"', '“', '”',
    '‘', '’', '«', '»', '—', '–', '_',
];

const APOSTROPHE: char = '\'';
const HYPHEN: char = '-';

/// Role of a punctuation character for attachment and tagging
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PunctRole {
    /// Opens a clause or quote
    Opening,
    /// Closes a clause or quote
    Closing,
    /// Dash-like connector
    Dash,
    /// Anything else (straight double quote)
    Neutral,
}

/// Word and punctuation matcher for one configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordGrammar {
    include_numbers: bool,
    keep_hyphens: bool,
}

impl WordGrammar {
    /// Build the grammar
    pub fn new(include_numbers: bool, keep_hyphens: bool) -> Self {
        Self {
            include_numbers,
            keep_hyphens,
        }
    }

    /// Letter from the Spanish/English alphabet, or a digit when numbers are
    /// included
    #[inline]
    pub fn is_word_char(&self, ch: char) -> bool {
        matches!(
            ch,
            'A'..='Z'
                | 'a'..='z'
                | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú' | 'Ü'
                | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü'
                | 'Ñ' | 'ñ'
        ) || (self.include_numbers && ch.is_ascii_digit())
    }

    /// Character that may join two runs of word characters
    #[inline]
    pub fn is_connector(&self, ch: char) -> bool {
        ch == APOSTROPHE || (self.keep_hyphens && ch == HYPHEN)
    }

    /// Single-character punctuation token. The hyphen is punctuation only
    /// when hyphens are not kept inside words.
    #[inline]
    pub fn is_punct(&self, ch: char) -> bool {
        PUNCTUATION.contains(&ch) || (!self.keep_hyphens && ch == HYPHEN)
    }

    /// Attachment role of a punctuation character
    pub fn punct_role(&self, ch: char) -> PunctRole {
        if OPENING.contains(&ch) {
            PunctRole::Opening
        } else if DASHLIKE.contains(&ch) || (!self.keep_hyphens && ch == HYPHEN) {
            PunctRole::Dash
        } else if CLOSING.contains(&ch) {
            PunctRole::Closing
        } else {
            PunctRole::Neutral
        }
    }

    /// Closing mark for tagging and counting; includes the hyphen when it
    /// is punctuation
    pub fn is_closing(&self, ch: char) -> bool {
        CLOSING.contains(&ch) || (!self.keep_hyphens && ch == HYPHEN)
    }

    /// Opening mark for tagging and counting
    pub fn is_opening(&self, ch: char) -> bool {
        OPENING.contains(&ch)
    }

    /// Longest word starting at `start`, as an exclusive end index.
    ///
    /// A word is a run of word characters optionally continued by a
    /// connector followed by another run. A trailing connector is not part
    /// of the word.
    pub fn match_word(&self, chars: &[char], start: usize) -> Option<usize> {
        let mut end = self.run_end(chars, start);
        if end == start {
            return None;
        }
        while end + 1 < chars.len()
            && self.is_connector(chars[end])
            && self.is_word_char(chars[end + 1])
        {
            end = self.run_end(chars, end + 1);
        }
        Some(end)
    }

    /// Whole-string match against the word grammar
    pub fn is_word(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        self.match_word(&chars, 0) == Some(chars.len())
    }

    fn run_end(&self, chars: &[char], start: usize) -> usize {
        let mut end = start;
        while end < chars.len() && self.is_word_char(chars[end]) {
            end += 1;
        }
        end
    }
}
