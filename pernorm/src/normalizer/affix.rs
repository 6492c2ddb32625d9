//! Joining of suffixes to their host words with a half-space.
use crate::common::{HEH, ZWNJ};
use crate::errors::Result;
use crate::lexicon::trie::Trie;

/// Punctuation that may follow a plural suffix.
pub const PLURAL_BOUNDARIES: &str = ".!?؟،,؛()[]";

/// Punctuation that may follow a postfix clitic.
pub const CLITIC_BOUNDARIES: &str = "!؟،؛()[]";

/// Joiner of a list of suffixes.
///
/// A suffix matches only when followed by whitespace, one of the boundary
/// punctuation marks or the end of text. When several suffixes match at one
/// position, the earliest listed one is taken.
pub struct SuffixJoiner {
    trie: Trie,
    boundaries: &'static str,
    glued: bool,
}

impl SuffixJoiner {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    ///  - `suffixes`: Suffixes in priority order.
    ///  - `boundaries`: Punctuation marks accepted after a suffix.
    ///  - `glued`: Whether to split suffixes glued to a host ending with heh.
    pub fn new(suffixes: &[&str], boundaries: &'static str, glued: bool) -> Result<Self> {
        Ok(Self {
            trie: Trie::from_words(suffixes)?,
            boundaries,
            glued,
        })
    }

    pub fn join(&self, text: &str) -> String {
        let text = self.join_detached(text);
        if self.glued {
            self.split_glued(&text)
        } else {
            text
        }
    }

    /// Replaces the whitespace before a free-standing suffix with a half-space.
    ///
    /// The suffix is then separated from the next word by exactly one space.
    fn join_detached(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut result = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars.len() {
            if i != 0 && chars[i].is_whitespace() && !chars[i - 1].is_whitespace() {
                let start = chars[i..]
                    .iter()
                    .position(|c| !c.is_whitespace())
                    .map_or(chars.len(), |p| i + p);
                if let Some(len) = self.suffix_len(&chars, start) {
                    let end = start + len;
                    result.push(ZWNJ);
                    result.extend(&chars[start..end]);
                    let next = chars[end..]
                        .iter()
                        .position(|c| !c.is_whitespace())
                        .map_or(chars.len(), |p| end + p);
                    if next < chars.len() && !self.closes(chars[next]) {
                        result.push(' ');
                    }
                    i = next;
                    continue;
                }
            }
            result.push(chars[i]);
            i += 1;
        }
        result
    }

    /// Inserts a half-space between a final heh of the host and a glued suffix.
    fn split_glued(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut result = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars.len() {
            result.push(chars[i]);
            if chars[i] == HEH && i != 0 && chars[i - 1].is_alphabetic() {
                if let Some(len) = self.suffix_len(&chars, i + 1) {
                    result.push(ZWNJ);
                    result.extend(&chars[i + 1..i + 1 + len]);
                    i += 1 + len;
                    continue;
                }
            }
            i += 1;
        }
        result
    }

    /// Gets the length of the earliest listed suffix starting at `pos` and
    /// followed by a boundary.
    fn suffix_len(&self, chars: &[char], pos: usize) -> Option<usize> {
        self.trie
            .first_listed(&chars[pos..], |m| self.is_boundary(chars.get(pos + m.end_char)))
            .map(|m| m.end_char)
    }

    fn is_boundary(&self, c: Option<&char>) -> bool {
        c.map_or(true, |&c| c.is_whitespace() || self.boundaries.contains(c))
    }

    /// Checks if no space is needed before the punctuation mark.
    fn closes(&self, c: char) -> bool {
        self.boundaries.contains(c) && !matches!(c, '(' | '[')
    }
}
