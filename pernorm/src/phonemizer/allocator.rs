use crate::utils::is_punctuation;

/// Subword token produced by a tokenizer for one word.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubwordToken {
    /// Rendered text without continuation markers.
    pub text: String,
    /// Whether the token continues the previous token.
    pub continuation: bool,
    /// Whether the token is a reserved special token.
    pub special: bool,
}

impl SubwordToken {
    /// Creates a token from the raw tokenizer output.
    ///
    /// Every occurrence of `marker` is removed from the rendered text.
    pub fn from_raw(raw: &str, marker: &str, special: bool) -> Self {
        if marker.is_empty() {
            return Self {
                text: raw.to_string(),
                continuation: false,
                special,
            };
        }
        Self {
            text: raw.replace(marker, ""),
            continuation: raw.starts_with(marker),
            special,
        }
    }

    /// Gets the number of characters of the rendered text.
    #[inline(always)]
    pub fn rendered_len(&self) -> usize {
        self.text.chars().count()
    }

    fn is_punctuation(&self) -> bool {
        !self.special && !self.text.is_empty() && self.text.chars().all(is_punctuation)
    }
}

/// Splits the phoneme string of one word over the word's subword tokens.
///
/// One assignment is returned per token. Special tokens get empty
/// assignments, and the other assignments concatenate to `phonemes`.
///
/// A trailing punctuation token takes the final phoneme character if that
/// character is a punctuation mark. The rest of the string is shared in
/// proportion to the rendered lengths, and the last non-special token takes
/// whatever remains.
pub fn allocate(phonemes: &str, tokens: &[SubwordToken]) -> Vec<String> {
    let phonemes: Vec<char> = phonemes.chars().collect();
    let mut assignments = Vec::with_capacity(tokens.len());
    allocate_chars(&phonemes, tokens, &mut assignments);
    assignments
}

fn allocate_chars(phonemes: &[char], tokens: &[SubwordToken], assignments: &mut Vec<String>) {
    if let (Some((last, rest)), Some((&mark, head))) = (tokens.split_last(), phonemes.split_last())
    {
        if last.is_punctuation() && is_punctuation(mark) && rest.iter().any(|t| !t.special) {
            allocate_chars(head, rest, assignments);
            assignments.push(mark.to_string());
            return;
        }
    }

    let total_len = tokens
        .iter()
        .filter(|t| !t.special)
        .map(SubwordToken::rendered_len)
        .sum::<usize>()
        .max(1);
    let final_idx = tokens.iter().rposition(|t| !t.special);
    let mut num_remaining = tokens.iter().filter(|t| !t.special).count();
    let mut pos = 0;
    for (i, token) in tokens.iter().enumerate() {
        if token.special {
            assignments.push(String::new());
            continue;
        }
        let remaining = phonemes.len() - pos;
        let share = if Some(i) == final_idx {
            remaining
        } else {
            let mut share = phonemes.len() * token.rendered_len() / total_len;
            if share == 0 && remaining > num_remaining {
                share = 1;
            }
            share.min(remaining)
        };
        assignments.push(phonemes[pos..pos + share].iter().collect());
        pos += share;
        num_remaining -= 1;
    }
}
