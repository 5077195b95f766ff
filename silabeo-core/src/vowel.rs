//! Vowel classification
//!
//! Classifies single characters by vowel strength and accent. Strength follows
//! Spanish orthography: `a e o` are strong, `i u ü` are weak. An acute accent on
//! a weak vowel marks a hiatus, which is why accent status is reported
//! separately from strength.

/// Strength of a vowel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strength {
    /// `a e o` and their accented forms
    Strong,
    /// `i u ü` and their accented forms
    Weak,
}

/// Classification of a single vowel character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VowelClass {
    /// Strong or weak
    pub strength: Strength,
    /// Carries an acute accent (`á é í ó ú`)
    pub accented: bool,
}

impl VowelClass {
    const fn new(strength: Strength, accented: bool) -> Self {
        Self { strength, accented }
    }

    /// Strong vowel, accented or not
    #[inline]
    pub fn is_strong(&self) -> bool {
        self.strength == Strength::Strong
    }

    /// Weak vowel without an accent; the only kind that may glide into a
    /// neighbouring vowel
    #[inline]
    pub fn is_unaccented_weak(&self) -> bool {
        self.strength == Strength::Weak && !self.accented
    }
}

/// Classify a character. Returns `None` for anything that is not one of
/// `a e i o u á é í ó ú ü` in either case.
///
/// `y` is never classified here; whether it acts as a vowel depends on its
/// position in the word, see [`is_vowel_like`].
pub fn classify(ch: char) -> Option<VowelClass> {
    use Strength::{Strong, Weak};

    let class = match ch {
        'a' | 'A' | 'e' | 'E' | 'o' | 'O' => VowelClass::new(Strong, false),
        'á' | 'Á' | 'é' | 'É' | 'ó' | 'Ó' => VowelClass::new(Strong, true),
        'i' | 'I' | 'u' | 'U' | 'ü' | 'Ü' => VowelClass::new(Weak, false),
        'í' | 'Í' | 'ú' | 'Ú' => VowelClass::new(Weak, true),
        _ => return None,
    };
    Some(class)
}

/// True vowel (no positional `y`)
#[inline]
pub fn is_vowel(ch: char) -> bool {
    classify(ch).is_some()
}

/// Strong vowel: `a e o`, accented or not
#[inline]
pub fn is_strong(ch: char) -> bool {
    classify(ch).is_some_and(|c| c.is_strong())
}

/// Weak vowel: `i u ü`, accented or not
#[inline]
pub fn is_weak(ch: char) -> bool {
    classify(ch).is_some_and(|c| c.strength == Strength::Weak)
}

/// Vowel carrying an acute accent
#[inline]
pub fn is_accented(ch: char) -> bool {
    classify(ch).is_some_and(|c| c.accented)
}

/// `y` closing a word right after a true vowel, as in "buey" or "hoy".
/// In that position it behaves like a weak vowel.
pub fn is_terminal_y(word: &[char], idx: usize) -> bool {
    idx > 0
        && idx + 1 == word.len()
        && matches!(word[idx], 'y' | 'Y')
        && is_vowel(word[idx - 1])
}

/// True vowel or terminal semivowel `y`. Out-of-range indices are not
/// vowel-like.
pub fn is_vowel_like(word: &[char], idx: usize) -> bool {
    match word.get(idx) {
        Some(&ch) => is_vowel(ch) || is_terminal_y(word, idx),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_strength_classification() {
        for ch in ['a', 'E', 'ó', 'Á'] {
            assert!(is_strong(ch), "{ch} should be strong");
            assert!(!is_weak(ch), "{ch} should not be weak");
        }
        for ch in ['i', 'U', 'ü', 'Ü', 'í', 'ú'] {
            assert!(is_weak(ch), "{ch} should be weak");
            assert!(!is_strong(ch), "{ch} should not be strong");
        }
    }

    #[test]
    fn test_accents() {
        assert!(is_accented('á'));
        assert!(is_accented('Í'));
        assert!(!is_accented('ü'));
        assert!(!is_accented('a'));

        let dieresis = classify('ü').unwrap();
        assert!(dieresis.is_unaccented_weak());
        assert!(!classify('ú').unwrap().is_unaccented_weak());
    }

    #[test]
    fn test_non_vowels() {
        for ch in ['b', 'ñ', 'y', 'Y', '1', '-', ' ', '…'] {
            assert_eq!(classify(ch), None, "{ch:?} is not a vowel");
        }
    }

    #[test]
    fn test_terminal_y() {
        let buey = chars("buey");
        assert!(is_terminal_y(&buey, 3));
        assert!(is_vowel_like(&buey, 3));

        // not final
        let playa = chars("playa");
        assert!(!is_vowel_like(&playa, 3));
        assert!(!is_vowel_like(&chars("rhythm"), 2));

        // final but after a consonant
        let ly = chars("ly");
        assert!(!is_vowel_like(&ly, 1));
        let ferry = chars("ferry");
        assert!(!is_terminal_y(&ferry, 4));
        assert!(!is_vowel_like(&ferry, 4));

        // a lone "y" has nothing before it
        assert!(!is_vowel_like(&chars("y"), 0));
    }

    #[test]
    fn test_out_of_range_is_not_vowel_like() {
        let word = chars("a");
        assert!(is_vowel_like(&word, 0));
        assert!(!is_vowel_like(&word, 1));
    }
}
