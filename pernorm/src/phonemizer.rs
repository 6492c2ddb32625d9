//! Phonemization of normalized text aligned with subword tokens.
mod allocator;

use std::error::Error;

pub use allocator::{allocate, SubwordToken};

use crate::common::CONTINUATION_MARKER;
use crate::errors::Result;
use crate::normalizer::Normalizer;
use crate::numeral::{NumberSpeller, PersianNumberSpeller};

/// Grapheme-to-phoneme converter of single words.
pub trait Transcriber {
    /// Transcribes the word into a phoneme string.
    ///
    /// # Errors
    ///
    /// Any error makes the phonemizer fall back to the raw word.
    fn transcribe(&self, word: &str) -> Result<String, Box<dyn Error + Send + Sync>>;
}

/// Subword tokenizer of single words.
pub trait SubwordTokenizer {
    /// Splits the word into raw subword tokens.
    fn tokenize(&self, word: &str) -> Vec<String>;

    /// Gets the vocabulary id of the raw token.
    fn id_of(&self, token: &str) -> u32;

    /// Checks if the raw token is a reserved special token.
    fn is_special(&self, token: &str) -> bool;

    /// Gets the prefix marking a continuation token.
    fn continuation_marker(&self) -> &str {
        CONTINUATION_MARKER
    }
}

/// Phoneme string of a word.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Transcription {
    /// Output of the transcriber.
    Phonemes(String),
    /// The raw word, used when the transcriber failed or returned a blank string.
    Fallback(String),
}

impl Transcription {
    /// Gets the phoneme string.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Phonemes(s) | Self::Fallback(s) => s,
        }
    }

    /// Checks if the raw word was used.
    #[inline(always)]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Token ids and phoneme strings aligned by index.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PhonemizedText {
    /// Token ids.
    pub input_ids: Vec<u32>,
    /// Phoneme string assigned to each token.
    pub phonemes: Vec<String>,
    /// Number of words transcribed by the fallback.
    pub num_fallbacks: usize,
}

/// Handle normalizing text and aligning phonemes with subword tokens.
pub struct Phonemizer<T, S = PersianNumberSpeller> {
    normalizer: Normalizer<S>,
    transcriber: T,
}

impl<T, S> Phonemizer<T, S>
where
    T: Transcriber,
    S: NumberSpeller,
{
    /// Creates a new instance.
    pub const fn new(normalizer: Normalizer<S>, transcriber: T) -> Self {
        Self {
            normalizer,
            transcriber,
        }
    }

    /// Gets the reference to the normalizer.
    #[inline(always)]
    pub const fn normalizer(&self) -> &Normalizer<S> {
        &self.normalizer
    }

    /// Transcribes a word, falling back to the word itself.
    pub fn transcribe(&self, word: &str) -> Transcription {
        match self.transcriber.transcribe(word) {
            Ok(phonemes) if !phonemes.trim().is_empty() => Transcription::Phonemes(phonemes),
            Ok(_) => {
                tracing::debug!(word, "blank transcription; using the raw word");
                Transcription::Fallback(word.to_string())
            }
            Err(e) => {
                tracing::debug!(word, error = %e, "transcription failed; using the raw word");
                Transcription::Fallback(word.to_string())
            }
        }
    }

    /// Normalizes the text and assigns a phoneme string to each subword token.
    ///
    /// Words are delimited by whitespace. Words the tokenizer yields no token
    /// for are skipped.
    ///
    /// # Errors
    ///
    /// [`PernormError`](crate::errors::PernormError) is returned when the
    /// normalization fails.
    pub fn phonemize<K>(&self, text: &str, tokenizer: &K) -> Result<PhonemizedText>
    where
        K: SubwordTokenizer + ?Sized,
    {
        let text = self.normalizer.normalize(text)?;
        let marker = tokenizer.continuation_marker();
        let mut result = PhonemizedText::default();
        for word in text.split_whitespace() {
            let raws = tokenizer.tokenize(word);
            if raws.is_empty() {
                continue;
            }
            let transcription = self.transcribe(word);
            if transcription.is_fallback() {
                result.num_fallbacks += 1;
            }
            let tokens: Vec<_> = raws
                .iter()
                .map(|raw| SubwordToken::from_raw(raw, marker, tokenizer.is_special(raw)))
                .collect();
            let assignments = allocate(transcription.as_str(), &tokens);
            result
                .input_ids
                .extend(raws.iter().map(|raw| tokenizer.id_of(raw)));
            result.phonemes.extend(assignments);
        }
        Ok(result)
    }
}
