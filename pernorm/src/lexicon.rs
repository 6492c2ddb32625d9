//! Lexicon of verb stems.
pub(crate) mod trie;

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use hashbrown::HashSet;

use crate::errors::{PernormError, Result};

const BUNDLED_VERBS: &str = include_str!("../resources/verbs.dict");

/// Ordered set of verb stems that may follow the progressive prefixes.
///
/// The order is significant: when several stems fit at one position,
/// the earlier listed one is chosen.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VerbLexicon {
    stems: Vec<String>,
}

impl VerbLexicon {
    /// Creates a lexicon from the stems in the given order.
    ///
    /// Surrounding spaces are trimmed. Blank and duplicate stems are skipped.
    ///
    /// # Errors
    ///
    /// [`PernormError`] is returned when a stem contains whitespace.
    pub fn from_stems<I, S>(stems: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut result = vec![];
        for (i, stem) in stems.into_iter().enumerate() {
            let stem = stem.as_ref().trim();
            if stem.is_empty() {
                continue;
            }
            if stem.contains(char::is_whitespace) {
                let msg = format!("A stem must be a single word, {:?} (at line {})", stem, i + 1);
                return Err(PernormError::invalid_format("verbs.dict", msg));
            }
            if seen.insert(stem.to_string()) {
                result.push(stem.to_string());
            }
        }
        Ok(Self { stems: result })
    }

    /// Creates a lexicon from a line-oriented reader, one stem per line.
    ///
    /// # Errors
    ///
    /// [`PernormError`] is returned when reading fails or a line is malformed.
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let lines = BufReader::new(rdr).lines().collect::<std::io::Result<Vec<_>>>()?;
        Self::from_stems(lines)
    }

    /// Loads a lexicon file, or returns an empty lexicon if it cannot be loaded.
    ///
    /// With an empty lexicon the verb-prefix separation leaves text unchanged.
    pub fn from_path_or_empty<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        match File::open(path)
            .map_err(PernormError::from)
            .and_then(Self::from_reader)
        {
            Ok(lexicon) => lexicon,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to load the verb lexicon; continuing without verb stems"
                );
                Self::default()
            }
        }
    }

    /// Creates the lexicon bundled with this crate.
    pub fn bundled() -> Self {
        Self {
            stems: BUNDLED_VERBS
                .lines()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Gets the stems in the listing order.
    #[inline(always)]
    pub fn stems(&self) -> &[String] {
        &self.stems
    }

    /// Gets the number of stems.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.stems.len()
    }

    /// Checks if the lexicon has no stems.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader() {
        let data = "روم\n\n  کنم \nروم\nگردد\n";
        let lexicon = VerbLexicon::from_reader(data.as_bytes()).unwrap();
        assert_eq!(lexicon.stems(), &["روم", "کنم", "گردد"]);
    }

    #[test]
    fn test_invalid_stem() {
        let data = "روم\nمی روم\n";
        let err = VerbLexicon::from_reader(data.as_bytes()).unwrap_err();
        assert!(err.to_string().ends_with("(at line 2)"), "{}", err);
    }

    #[test]
    fn test_missing_file() {
        let lexicon = VerbLexicon::from_path_or_empty("/nonexistent/verbs.dict");
        assert!(lexicon.is_empty());
    }

    #[test]
    fn test_bundled() {
        let lexicon = VerbLexicon::bundled();
        assert!(!lexicon.is_empty());
        assert!(lexicon.stems().iter().any(|s| s == "گردد"));
        assert_eq!(VerbLexicon::from_stems(lexicon.stems()).unwrap(), lexicon);
    }
}
