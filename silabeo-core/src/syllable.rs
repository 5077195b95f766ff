//! Syllable segmentation
//!
//! A word is scanned for vowel nuclei; syllable boundaries are then placed
//! according to the consonant material between each pair of consecutive
//! nuclei. Consonants are grouped into units first so that the digraphs
//! `ch`, `ll` and `rr` are never split.

use crate::nucleus::{scan_nucleus, Nucleus};
use crate::vowel::is_vowel;
use smallvec::SmallVec;

/// Two-letter sequences allowed to open a syllable
const ONSET_CLUSTERS: [&str; 15] = [
    "pr", "pl", "br", "bl", "tr", "dr", "cr", "cl", "gr", "gl", "fr", "fl", "ch", "ll", "rr",
];

/// Digraphs that behave as a single consonant
const DIGRAPHS: [&str; 3] = ["ch", "ll", "rr"];

/// Atomic consonant: one character, or two for a digraph
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsonantUnit {
    /// Character offset within the word
    pub start: usize,
    /// 1, or 2 for `ch`/`ll`/`rr`
    pub len: usize,
}

type Units = SmallVec<[ConsonantUnit; 4]>;

/// Split `word[start..end]` into consonant units, left to right.
pub fn consonant_units(word: &[char], start: usize, end: usize) -> Units {
    let mut units = Units::new();
    let mut k = start;
    while k < end {
        let len = if k + 1 < end && is_digraph(word[k], word[k + 1]) {
            2
        } else {
            1
        };
        units.push(ConsonantUnit { start: k, len });
        k += len;
    }
    units
}

/// Every nucleus in the word, in order
pub fn find_nuclei(word: &[char]) -> SmallVec<[Nucleus; 8]> {
    let mut nuclei = SmallVec::new();
    let mut i = 0;
    while i < word.len() {
        if is_vowel(word[i]) {
            let nucleus = scan_nucleus(word, i);
            i = nucleus.end;
            nuclei.push(nucleus);
        } else {
            i += 1;
        }
    }
    nuclei
}

/// Divide a word into syllables.
///
/// The concatenation of the result always equals `word`. An empty word gives
/// an empty list and a word without vowels comes back whole.
///
/// ```
/// use silabeo_core::divide_into_syllables;
///
/// assert_eq!(divide_into_syllables("palabra"), vec!["pa", "la", "bra"]);
/// assert_eq!(divide_into_syllables("brr"), vec!["brr"]);
/// ```
pub fn divide_into_syllables(word: &str) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = word.chars().collect();
    let nuclei = find_nuclei(&chars);
    if nuclei.is_empty() {
        return vec![word.to_string()];
    }

    let mut syllables = Vec::with_capacity(nuclei.len());
    let mut syllable_start = 0;
    for pair in nuclei.windows(2) {
        let split = boundary_between(&chars, pair[0].end, pair[1].start);
        push_syllable(&mut syllables, &chars[syllable_start..split]);
        syllable_start = split;
    }
    push_syllable(&mut syllables, &chars[syllable_start..]);

    syllables
}

/// Word paired with its syllables, in input order.
///
/// With the `parallel` feature the words are divided on the rayon pool.
pub fn divide_words<S>(words: &[S]) -> Vec<(String, Vec<String>)>
where
    S: AsRef<str> + Sync,
{
    let divide = |word: &S| {
        let word = word.as_ref();
        (word.to_string(), divide_into_syllables(word))
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        words.par_iter().map(divide).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        words.iter().map(divide).collect()
    }
}

/// Character index where the syllable ending at `cons_start` gives way to the
/// next one, given consonants in `cons_start..cons_end`.
fn boundary_between(word: &[char], cons_start: usize, cons_end: usize) -> usize {
    let units = consonant_units(word, cons_start, cons_end);

    match units.len() {
        // hiatus, or a single consonant which opens the next syllable
        0 | 1 => cons_start,
        2 => {
            if is_onset_cluster(word, &units[0], &units[1]) {
                cons_start
            } else {
                units[1].start
            }
        }
        k => {
            let (penultimate, last) = (&units[k - 2], &units[k - 1]);
            if is_onset_cluster(word, penultimate, last) {
                penultimate.start
            } else {
                last.start
            }
        }
    }
}

fn push_syllable(syllables: &mut Vec<String>, chars: &[char]) {
    if !chars.is_empty() {
        syllables.push(chars.iter().collect());
    }
}

fn is_digraph(a: char, b: char) -> bool {
    let pair = lower_pair(&[a, b]);
    DIGRAPHS.contains(&pair.as_str())
}

fn is_onset_cluster(word: &[char], first: &ConsonantUnit, second: &ConsonantUnit) -> bool {
    let mut joined = String::with_capacity(4);
    joined.push_str(&lower_pair(&word[first.start..first.start + first.len]));
    joined.push_str(&lower_pair(&word[second.start..second.start + second.len]));
    ONSET_CLUSTERS.contains(&joined.as_str())
}

fn lower_pair(chars: &[char]) -> String {
    chars.iter().flat_map(|c| c.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syllables(word: &str) -> Vec<String> {
        divide_into_syllables(word)
    }

    #[test]
    fn test_single_consonant_moves_forward() {
        assert_eq!(syllables("casa"), vec!["ca", "sa"]);
        assert_eq!(syllables("cohete"), vec!["co", "he", "te"]);
    }

    #[test]
    fn test_onset_clusters() {
        assert_eq!(syllables("palabra"), vec!["pa", "la", "bra"]);
        assert_eq!(syllables("otro"), vec!["o", "tro"]);
        assert_eq!(syllables("Atlas"), vec!["At", "las"]);
    }

    #[test]
    fn test_two_consonants_split() {
        assert_eq!(syllables("canto"), vec!["can", "to"]);
        assert_eq!(syllables("perla"), vec!["per", "la"]);
    }

    #[test]
    fn test_digraphs_stay_together() {
        assert_eq!(syllables("perro"), vec!["pe", "rro"]);
        assert_eq!(syllables("calle"), vec!["ca", "lle"]);
        assert_eq!(syllables("noche"), vec!["no", "che"]);
        assert_eq!(syllables("CHICHARRA"), vec!["CHI", "CHA", "RRA"]);
    }

    #[test]
    fn test_three_or_more_consonants() {
        // last two form an onset
        assert_eq!(syllables("hombre"), vec!["hom", "bre"]);
        assert_eq!(syllables("ancla"), vec!["an", "cla"]);
        // last two do not
        assert_eq!(syllables("instante"), vec!["ins", "tan", "te"]);
        assert_eq!(syllables("perspectiva"), vec!["pers", "pec", "ti", "va"]);
    }

    #[test]
    fn test_nuclei_and_hiatus() {
        assert_eq!(syllables("aire"), vec!["ai", "re"]);
        assert_eq!(syllables("buey"), vec!["buey"]);
        assert_eq!(syllables("leo"), vec!["le", "o"]);
        assert_eq!(syllables("país"), vec!["pa", "ís"]);
        assert_eq!(syllables("día"), vec!["dí", "a"]);
    }

    #[test]
    fn test_degenerate_words() {
        assert!(syllables("").is_empty());
        assert_eq!(syllables("brr"), vec!["brr"]);
        assert_eq!(syllables("a"), vec!["a"]);
        assert_eq!(syllables("y"), vec!["y"]);
    }

    #[test]
    fn test_leading_and_trailing_consonants() {
        assert_eq!(syllables("transporte"), vec!["trans", "por", "te"]);
        assert_eq!(syllables("vals"), vec!["vals"]);
    }

    #[test]
    fn test_consonant_units() {
        let word: Vec<char> = "nchr".chars().collect();
        let units = consonant_units(&word, 0, word.len());
        assert_eq!(
            units.as_slice(),
            &[
                ConsonantUnit { start: 0, len: 1 },
                ConsonantUnit { start: 1, len: 2 },
                ConsonantUnit { start: 3, len: 1 },
            ]
        );
    }

    #[test]
    fn test_divide_words_preserves_order() {
        let divided = divide_words(&["casa", "brr", ""]);
        assert_eq!(divided.len(), 3);
        assert_eq!(divided[0], ("casa".to_string(), vec!["ca".into(), "sa".into()]));
        assert_eq!(divided[1].1, vec!["brr".to_string()]);
        assert!(divided[2].1.is_empty());
    }
}
