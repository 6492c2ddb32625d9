//! Handling of the progressive prefixes "می" and "نمی".
use crate::common::ZWNJ;
use crate::errors::Result;
use crate::lexicon::trie::Trie;
use crate::lexicon::VerbLexicon;
use crate::utils::word_start;

use super::rules::PrefixJoiner;

/// Progressive prefixes, longer first.
const PREFIXES: [&str; 2] = ["نمی", "می"];

/// Preverbal particles that may precede a progressive prefix in one word,
/// as in "برمیگردد".
const PREVERBS: [&str; 6] = ["بر", "در", "باز", "فرا", "ور", "وا"];

/// Separator and joiner of the progressive prefixes.
pub struct VerbPrefixer {
    prefixes: Vec<Vec<char>>,
    stems: Trie,
    joiner: PrefixJoiner,
}

impl VerbPrefixer {
    pub fn new(verbs: &VerbLexicon) -> Result<Self> {
        Ok(Self {
            prefixes: PREFIXES.iter().map(|p| p.chars().collect()).collect(),
            stems: Trie::from_words(verbs.stems())?,
            joiner: PrefixJoiner::new(&PREFIXES)?,
        })
    }

    /// Inserts a half-space between a progressive prefix and a verb stem glued to it.
    ///
    /// The prefix must open the word or follow a preverbal particle opening
    /// the word. Endings after the stem, such as object clitics, are allowed.
    pub fn separate(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut result = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars.len() {
            if let Some(len) = self.glued_prefix_len(&chars, i) {
                result.extend(&chars[i..i + len]);
                result.push(ZWNJ);
                i += len;
            } else {
                result.push(chars[i]);
                i += 1;
            }
        }
        result
    }

    /// Replaces whitespace after a free-standing progressive prefix with a half-space.
    pub fn join(&self, text: &str) -> String {
        self.joiner.join(text)
    }

    fn glued_prefix_len(&self, chars: &[char], pos: usize) -> Option<usize> {
        let start = word_start(chars, pos);
        if start != pos {
            let head: String = chars[start..pos].iter().collect();
            if !PREVERBS.contains(&head.as_str()) {
                return None;
            }
        }
        for prefix in &self.prefixes {
            let stem_start = pos + prefix.len();
            if !chars[pos..].starts_with(prefix) {
                continue;
            }
            if self.stems.first_listed(&chars[stem_start..], |_| true).is_some() {
                return Some(prefix.len());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixer(stems: &[&str]) -> VerbPrefixer {
        VerbPrefixer::new(&VerbLexicon::from_stems(stems).unwrap()).unwrap()
    }

    #[test]
    fn test_separate() {
        let prefixer = prefixer(&["روم", "خورد", "گردد"]);
        assert_eq!(prefixer.separate("میروم"), "می\u{200C}روم");
        assert_eq!(prefixer.separate("من نمیخورد."), "من نمی\u{200C}خورد.");
        assert_eq!(prefixer.separate("برمیگردد"), "برمی\u{200C}گردد");
    }

    #[test]
    fn test_separate_prefix_boundary() {
        let prefixer = prefixer(&["روم", "گردد"]);
        assert_eq!(prefixer.separate("کمیروم"), "کمیروم");
        assert_eq!(prefixer.separate("می\u{200C}روم"), "می\u{200C}روم");
        assert_eq!(prefixer.separate("میگرددم"), "می\u{200C}گرددم");
    }

    #[test]
    fn test_separate_with_clitic() {
        let prefixer = prefixer(&["خوردم", "کنیم"]);
        assert_eq!(prefixer.separate("میخوردمش"), "می\u{200C}خوردمش");
        assert_eq!(prefixer.separate("نمیکنیمش"), "نمی\u{200C}کنیمش");
    }

    #[test]
    fn test_separate_first_listed() {
        let prefixer = prefixer(&["رو", "روم"]);
        assert_eq!(prefixer.separate("میروم"), "می\u{200C}روم");
        assert_eq!(prefixer.separate("میرو"), "می\u{200C}رو");
    }

    #[test]
    fn test_empty_lexicon() {
        let prefixer = prefixer(&[]);
        assert_eq!(prefixer.separate("میروم"), "میروم");
        assert_eq!(prefixer.join("می روم"), "می\u{200C}روم");
    }
}
