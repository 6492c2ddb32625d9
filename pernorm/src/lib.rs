//! # Pernorm
//!
//! Pernorm is a normalizer of Persian text for speech corpora. It also aligns
//! word-level phoneme strings with the subword tokens of a language-model
//! tokenizer.
//!
//! ## Examples
//!
//! ```
//! use pernorm::{Normalizer, NormalizerConfig, VerbLexicon};
//!
//! let normalizer = Normalizer::new(NormalizerConfig::default(), VerbLexicon::bundled())?;
//!
//! assert_eq!(normalizer.normalize("(سلام")?, "سلام");
//! # Ok::<(), pernorm::errors::PernormError>(())
//! ```
#![deny(missing_docs)]

pub mod common;
pub mod errors;
pub mod lexicon;
pub mod normalizer;
pub mod numeral;
pub mod phonemizer;
pub mod tables;
mod utils;

#[cfg(test)]
mod tests;

pub use lexicon::VerbLexicon;
pub use normalizer::{Normalizer, NormalizerConfig, Stage};
pub use numeral::{NumberSpeller, PersianNumberSpeller};
pub use phonemizer::{PhonemizedText, Phonemizer, SubwordTokenizer, Transcriber};
