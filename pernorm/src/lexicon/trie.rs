use std::collections::BTreeMap;

use crate::errors::{PernormError, Result};

/// Double-array trie over a list of words, valued by list positions.
pub struct Trie {
    da: Option<crawdad::Trie>,
}

impl Trie {
    /// Builds a trie from the words in listing order.
    ///
    /// A duplicated word keeps its first position.
    pub fn from_words<I, W>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for (i, w) in words.into_iter().enumerate() {
            let w = w.as_ref();
            if w.is_empty() {
                continue;
            }
            let id = u32::try_from(i)
                .map_err(|_| PernormError::invalid_argument("words", "too many words"))?;
            map.entry(w.to_string()).or_insert(id);
        }
        if map.is_empty() {
            return Ok(Self { da: None });
        }
        let da = crawdad::Trie::from_records(map.iter().map(|(k, v)| (k, *v)))
            .map_err(|e| PernormError::invalid_argument("words", e.to_string()))?;
        Ok(Self { da: Some(da) })
    }

    #[inline(always)]
    pub fn common_prefix_iterator<'a>(
        &'a self,
        input: &'a [char],
    ) -> impl Iterator<Item = TrieMatch> + 'a {
        self.da.iter().flat_map(move |da| {
            da.common_prefix_search(input.iter().cloned())
                .map(|(value, end_char)| TrieMatch::new(value, end_char as usize))
        })
    }

    /// Returns the earliest listed word that starts `input` and is accepted by `accept`.
    ///
    /// Word lengths are not considered.
    pub fn first_listed<F>(&self, input: &[char], mut accept: F) -> Option<TrieMatch>
    where
        F: FnMut(&TrieMatch) -> bool,
    {
        self.common_prefix_iterator(input)
            .filter(|m| accept(m))
            .min_by_key(|m| m.value)
    }
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct TrieMatch {
    pub value: u32,
    pub end_char: usize,
}

impl TrieMatch {
    #[inline(always)]
    pub const fn new(value: u32, end_char: usize) -> Self {
        Self { value, end_char }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix_iterator() {
        let trie = Trie::from_words(["رو", "روم", "خور", "رو"]).unwrap();
        let input: Vec<_> = "رومی".chars().collect();
        let mut matches: Vec<_> = trie.common_prefix_iterator(&input).collect();
        matches.sort_by_key(|m| m.end_char);
        assert_eq!(matches, vec![TrieMatch::new(0, 2), TrieMatch::new(1, 3)]);
    }

    #[test]
    fn test_first_listed() {
        let trie = Trie::from_words(["رو", "روم"]).unwrap();
        let input: Vec<_> = "روم".chars().collect();
        assert_eq!(trie.first_listed(&input, |_| true), Some(TrieMatch::new(0, 2)));
        assert_eq!(
            trie.first_listed(&input, |m| m.end_char == 3),
            Some(TrieMatch::new(1, 3))
        );
        assert_eq!(trie.first_listed(&input, |_| false), None);
    }

    #[test]
    fn test_empty() {
        let trie = Trie::from_words(Vec::<String>::new()).unwrap();
        let input: Vec<_> = "روم".chars().collect();
        assert_eq!(trie.common_prefix_iterator(&input).count(), 0);
    }
}
