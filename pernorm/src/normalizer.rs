//! The normalization pipeline.
mod affix;
mod brackets;
mod config;
mod numbers;
mod punctuation;
mod rules;
mod verbs;

pub use config::{NormalizerConfig, Stage};

use crate::errors::Result;
use crate::lexicon::VerbLexicon;
use crate::numeral::{NumberSpeller, PersianNumberSpeller};
use crate::tables::{LookupTables, PLURAL_SUFFIXES, POSTFIX_CLITICS};

use affix::{SuffixJoiner, CLITIC_BOUNDARIES, PLURAL_BOUNDARIES};
use numbers::NumeralRewriter;
use punctuation::PunctuationCleaner;
use rules::{
    collapse_whitespace, AbbreviationExpander, EmojiStripper, GenitiveContractor,
    MarkupStripper, PrefixJoiner,
};
use verbs::VerbPrefixer;

/// Normalizer of Persian text.
///
/// Markup stripping and whitespace collapsing always run first. The stages
/// enabled in [`NormalizerConfig`] then run in the order of [`Stage::ALL`].
///
/// # Examples
///
/// ```
/// use pernorm::{Normalizer, NormalizerConfig, Stage, VerbLexicon};
///
/// let config = NormalizerConfig::new().enable(Stage::NumberToWords, false);
/// let normalizer = Normalizer::new(config, VerbLexicon::bundled())?;
///
/// assert_eq!(normalizer.normalize("کتاب ها را آوردم")?, "کتاب\u{200C}ها را آوردم");
/// # Ok::<(), pernorm::errors::PernormError>(())
/// ```
pub struct Normalizer<S = PersianNumberSpeller> {
    config: NormalizerConfig,
    tables: LookupTables,
    speller: S,

    markup: MarkupStripper,
    numerals: NumeralRewriter,
    punctuation: PunctuationCleaner,
    verb_prefixes: VerbPrefixer,
    genitive: GenitiveContractor,
    plurals: SuffixJoiner,
    clitics: SuffixJoiner,
    bi_prefix: PrefixJoiner,
    emoji: EmojiStripper,
    abbreviations: AbbreviationExpander,
}

impl Normalizer {
    /// Creates a new instance spelling numbers with [`PersianNumberSpeller`].
    ///
    /// # Arguments
    ///
    ///  - `config`: Stages to run.
    ///  - `verbs`: Verb stems for the verb-prefix stages.
    ///
    /// # Errors
    ///
    /// [`PernormError`](crate::errors::PernormError) is returned when the
    /// matchers cannot be built.
    pub fn new(config: NormalizerConfig, verbs: VerbLexicon) -> Result<Self> {
        Self::with_speller(config, verbs, PersianNumberSpeller::new())
    }
}

impl<S> Normalizer<S>
where
    S: NumberSpeller,
{
    /// Creates a new instance with a custom number speller.
    ///
    /// # Errors
    ///
    /// [`PernormError`](crate::errors::PernormError) is returned when the
    /// matchers cannot be built.
    pub fn with_speller(config: NormalizerConfig, verbs: VerbLexicon, speller: S) -> Result<Self> {
        let verb_prefixes = VerbPrefixer::new(&verbs)?;
        Ok(Self {
            config,
            tables: LookupTables::new(verbs),
            speller,
            markup: MarkupStripper::new()?,
            numerals: NumeralRewriter::new()?,
            punctuation: PunctuationCleaner::new()?,
            verb_prefixes,
            genitive: GenitiveContractor::new()?,
            plurals: SuffixJoiner::new(&PLURAL_SUFFIXES, PLURAL_BOUNDARIES, true)?,
            clitics: SuffixJoiner::new(&POSTFIX_CLITICS, CLITIC_BOUNDARIES, false)?,
            bi_prefix: PrefixJoiner::new(&["بی"])?,
            emoji: EmojiStripper::new()?,
            abbreviations: AbbreviationExpander::new()?,
        })
    }

    /// Gets the reference to the config.
    #[inline(always)]
    pub const fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Gets the reference to the lookup tables.
    #[inline(always)]
    pub const fn tables(&self) -> &LookupTables {
        &self.tables
    }

    /// Normalizes the text.
    ///
    /// # Errors
    ///
    /// [`PernormError`](crate::errors::PernormError) is returned when a date
    /// or a number cannot be spelled out.
    pub fn normalize<T>(&self, text: T) -> Result<String>
    where
        T: AsRef<str>,
    {
        let mut text = collapse_whitespace(&self.markup.strip(text.as_ref()));
        for stage in Stage::ALL {
            if self.config.is_enabled(stage) {
                text = self.apply(stage, &text)?;
            }
        }
        Ok(text)
    }

    fn apply(&self, stage: Stage, text: &str) -> Result<String> {
        let text = match stage {
            Stage::ScriptTranslation => self.tables.translate(text),
            Stage::DigitLocalization => self.tables.localize_digits(text),
            Stage::DateToWords => self.numerals.dates_to_words(text, &self.speller)?,
            Stage::NumberToWords => self.numerals.numbers_to_words(text, &self.speller)?,
            Stage::PunctuationCleanup => self.punctuation.clean(text),
            Stage::MergedNumberRepair => numbers::split_merged_numbers(text, &self.tables),
            Stage::VerbPrefixSeparation => self.verb_prefixes.separate(text),
            Stage::VerbPrefixJoining => self.verb_prefixes.join(text),
            Stage::GenitiveContraction => self.genitive.contract(text),
            Stage::PluralSuffixJoining => self.plurals.join(text),
            Stage::PostfixCliticJoining => self.clitics.join(text),
            Stage::BiPrefixJoining => self.bi_prefix.join(text),
            Stage::EmojiStripping => self.emoji.strip(text),
            Stage::AbbreviationExpansion => self.abbreviations.expand(text),
            Stage::BracketBalancing => brackets::balance_brackets(text),
        };
        Ok(text)
    }
}
