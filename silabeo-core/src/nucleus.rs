//! Vowel nucleus detection
//!
//! Given a word and the index of a vowel, determine how far the nucleus that
//! starts there extends: a single vowel, a diphthong or a triphthong.

use crate::vowel::{classify, is_terminal_y, is_vowel_like, VowelClass};

/// Shape of a vowel nucleus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NucleusKind {
    /// One vowel
    Single,
    /// Two vowel-like characters pronounced together
    Diphthong,
    /// Three vowel-like characters pronounced together
    Triphthong,
}

impl NucleusKind {
    /// Number of characters spanned
    pub fn len(&self) -> usize {
        match self {
            NucleusKind::Single => 1,
            NucleusKind::Diphthong => 2,
            NucleusKind::Triphthong => 3,
        }
    }
}

/// Half-open character range `[start, end)` of a nucleus within a word
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nucleus {
    /// First character of the nucleus
    pub start: usize,
    /// One past the last character
    pub end: usize,
    /// Single, diphthong or triphthong
    pub kind: NucleusKind,
}

impl Nucleus {
    fn new(start: usize, kind: NucleusKind) -> Self {
        Self {
            start,
            end: start + kind.len(),
            kind,
        }
    }
}

/// Scan the nucleus starting at `start`.
///
/// `start` must point at a vowel-like character. Rules are tried in order and
/// the first match wins; an accented weak vowel never joins a neighbour, so it
/// falls through to a single-vowel nucleus.
pub fn scan_nucleus(word: &[char], start: usize) -> Nucleus {
    let v1 = class_at(word, start);
    let v2 = class_at(word, start + 1);
    let v3 = class_at(word, start + 2);

    let weak_glide = |v: Option<VowelClass>| v.is_some_and(|c| c.is_unaccented_weak());
    let strong = |v: Option<VowelClass>| v.is_some_and(|c| c.is_strong());

    if is_vowel_like(word, start)
        && is_vowel_like(word, start + 1)
        && is_vowel_like(word, start + 2)
        && weak_glide(v1)
        && strong(v2)
        && (weak_glide(v3) || is_terminal_y(word, start + 2))
    {
        return Nucleus::new(start, NucleusKind::Triphthong);
    }

    if is_vowel_like(word, start) && is_vowel_like(word, start + 1) {
        let y_final = is_terminal_y(word, start + 1);
        let diphthong = (weak_glide(v1) && weak_glide(v2))
            || (strong(v1) && weak_glide(v2))
            || (weak_glide(v1) && strong(v2))
            || (strong(v1) && y_final)
            || (weak_glide(v1) && y_final);
        if diphthong {
            return Nucleus::new(start, NucleusKind::Diphthong);
        }
    }

    Nucleus::new(start, NucleusKind::Single)
}

#[inline]
fn class_at(word: &[char], idx: usize) -> Option<VowelClass> {
    word.get(idx).copied().and_then(classify)
}
