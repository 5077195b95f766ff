//! Property-based tests for segmentation invariants:
//!
//! 1. **Concatenation**: joining the syllables of a word gives the word back
//! 2. **Fallback**: a word without vowels is a single syllable
//! 3. **Determinism**: tokenizing the same text twice gives the same tokens
//! 4. **Attachment**: `left` only ever merges a word with the mark after it
//! 5. **Counts**: composed counts agree with the item stream

use proptest::prelude::*;
use silabeo_core::{
    divide_into_syllables, split_and_syllabify, split_words, AttachMode, Item, Token, TokenKind,
    Tokenizer, TokenizerConfig,
};

fn arb_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-ZáéíóúüñÁÉÍÓÚÜÑy'-]{0,16}").unwrap()
}

fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..20).prop_map(|chars| chars.into_iter().collect())
}

fn arb_consonants() -> impl Strategy<Value = String> {
    prop::string::string_regex("[bcdfghjklmnpqrstvwxzBCDFGHJKLMNPQRSTVWXZñÑ]{1,10}").unwrap()
}

fn arb_text() -> impl Strategy<Value = String> {
    let fragments = vec![
        "hola", "Qué", "perro", "don't", "auto", "estima", "7", "años", " ", " ", "\n", ",", ".",
        "...", "¿", "?", "¡", "!", "(", ")", "«", "»", "\"", "—", "-", "_", ";", ":", "…",
    ];
    prop::collection::vec(prop::sample::select(fragments), 0..24).prop_map(|parts| parts.concat())
}

fn config(keep_punct: bool, mode: AttachMode, unique: bool) -> TokenizerConfig {
    TokenizerConfig::builder()
        .keep_punct(keep_punct)
        .attach_punct(mode)
        .unique(unique)
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn syllables_concatenate_to_word(word in arb_word()) {
        let syllables = divide_into_syllables(&word);
        prop_assert_eq!(syllables.concat(), word.clone());
        prop_assert!(syllables.iter().all(|s| !s.is_empty()));
        prop_assert_eq!(syllables.is_empty(), word.is_empty());
    }

    #[test]
    fn syllables_concatenate_for_any_text(text in arb_unicode_string()) {
        prop_assert_eq!(divide_into_syllables(&text).concat(), text);
    }

    #[test]
    fn consonant_only_words_stay_whole(word in arb_consonants()) {
        prop_assert_eq!(divide_into_syllables(&word), vec![word.clone()]);
    }

    #[test]
    fn unique_split_is_deterministic(text in arb_text()) {
        let cfg = config(true, AttachMode::Auto, true);
        prop_assert_eq!(split_words(&text, &cfg), split_words(&text, &cfg));
    }

    #[test]
    fn words_only_split_is_idempotent(text in arb_text()) {
        let cfg = config(false, AttachMode::Separate, true);
        let once = split_words(&text, &cfg);
        let twice = split_words(&once.join(" "), &cfg);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn left_attachment_merges_word_with_following_mark(text in arb_text()) {
        let separate: Vec<Token> =
            Tokenizer::new(config(true, AttachMode::Separate, false)).tokenize(&text);
        let left: Vec<Token> =
            Tokenizer::new(config(true, AttachMode::Left, false)).tokenize(&text);

        let mut j = 0;
        for token in &left {
            if token.kind == TokenKind::Attached {
                prop_assert_eq!(separate[j].kind, TokenKind::Word);
                prop_assert_eq!(separate[j + 1].kind, TokenKind::Punctuation);
                prop_assert_eq!(
                    token.text.clone(),
                    format!("{}{}", separate[j].text, separate[j + 1].text)
                );
                j += 2;
            } else {
                prop_assert_eq!(token, &separate[j]);
                j += 1;
            }
        }
        prop_assert_eq!(j, separate.len());
    }

    #[test]
    fn composed_counts_are_consistent(text in arb_text()) {
        let breakdown = split_and_syllabify(&text, &TokenizerConfig::composed());
        let counts = breakdown.counts;
        prop_assert_eq!(counts.words + counts.punct, counts.total);
        prop_assert_eq!(counts.total, breakdown.items.len());

        let syllables: usize = breakdown
            .items
            .iter()
            .filter_map(Item::syllables)
            .map(|s| s.len())
            .sum();
        prop_assert_eq!(counts.syllables_total, syllables);
        prop_assert_eq!(counts.punct_total, counts.punct_open + counts.punct_close);
    }
}
