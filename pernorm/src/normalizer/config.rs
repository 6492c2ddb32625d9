use std::fmt;
use std::str::FromStr;

use crate::errors::{PernormError, Result};

/// Optional rewrite stage of the [`Normalizer`](super::Normalizer).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Stage {
    /// Folds archaic and presentation-form glyphs into canonical Persian letters.
    ScriptTranslation,
    /// Rewrites digits and percent signs in the Persian script.
    DigitLocalization,
    /// Spells out `year/month/day` dates.
    DateToWords,
    /// Spells out the remaining numbers.
    NumberToWords,
    /// Canonicalizes punctuation and spacing.
    PunctuationCleanup,
    /// Splits number words that were glued with a half-space.
    MergedNumberRepair,
    /// Inserts a half-space between "می"/"نمی" and a glued verb stem.
    VerbPrefixSeparation,
    /// Replaces the space after a free-standing "می"/"نمی" with a half-space.
    VerbPrefixJoining,
    /// Contracts "ه ی" into "ۀ".
    GenitiveContraction,
    /// Joins plural "ها" suffixes to their host words.
    PluralSuffixJoining,
    /// Joins possessive and copula clitics to their host words.
    PostfixCliticJoining,
    /// Joins a free-standing "بی" to the following word.
    BiPrefixJoining,
    /// Removes emoji.
    EmojiStripping,
    /// Expands honorific, era and citation abbreviations.
    AbbreviationExpansion,
    /// Removes unbalanced brackets.
    BracketBalancing,
}

impl Stage {
    /// All the stages in the order the normalizer runs them.
    pub const ALL: [Self; 15] = [
        Self::ScriptTranslation,
        Self::DigitLocalization,
        Self::DateToWords,
        Self::NumberToWords,
        Self::PunctuationCleanup,
        Self::MergedNumberRepair,
        Self::VerbPrefixSeparation,
        Self::VerbPrefixJoining,
        Self::GenitiveContraction,
        Self::PluralSuffixJoining,
        Self::PostfixCliticJoining,
        Self::BiPrefixJoining,
        Self::EmojiStripping,
        Self::AbbreviationExpansion,
        Self::BracketBalancing,
    ];

    /// Gets the name of the stage.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ScriptTranslation => "script-translation",
            Self::DigitLocalization => "digit-localization",
            Self::DateToWords => "date-to-words",
            Self::NumberToWords => "number-to-words",
            Self::PunctuationCleanup => "punctuation-cleanup",
            Self::MergedNumberRepair => "merged-number-repair",
            Self::VerbPrefixSeparation => "verb-prefix-separation",
            Self::VerbPrefixJoining => "verb-prefix-joining",
            Self::GenitiveContraction => "genitive-contraction",
            Self::PluralSuffixJoining => "plural-suffix-joining",
            Self::PostfixCliticJoining => "postfix-clitic-joining",
            Self::BiPrefixJoining => "bi-prefix-joining",
            Self::EmojiStripping => "emoji-stripping",
            Self::AbbreviationExpansion => "abbreviation-expansion",
            Self::BracketBalancing => "bracket-balancing",
        }
    }

    #[inline(always)]
    const fn bit(self) -> u32 {
        1 << self as u32
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = PernormError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|stage| stage.name() == s)
            .ok_or_else(|| PernormError::invalid_argument("stage", format!("unknown stage {:?}", s)))
    }
}

/// Set of stages enabled in a [`Normalizer`](super::Normalizer).
///
/// All the stages are enabled by default.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NormalizerConfig {
    enabled: u32,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizerConfig {
    /// Creates a configuration enabling all the stages.
    pub const fn new() -> Self {
        Self {
            enabled: (1 << Stage::ALL.len()) - 1,
        }
    }

    /// Creates a configuration enabling no stage.
    ///
    /// Markup stripping and whitespace collapsing still run.
    pub const fn none() -> Self {
        Self { enabled: 0 }
    }

    /// Enables or disables the stage.
    pub const fn enable(mut self, stage: Stage, yes: bool) -> Self {
        if yes {
            self.enabled |= stage.bit();
        } else {
            self.enabled &= !stage.bit();
        }
        self
    }

    /// Checks if the stage is enabled.
    #[inline(always)]
    pub const fn is_enabled(&self, stage: Stage) -> bool {
        self.enabled & stage.bit() != 0
    }
}
