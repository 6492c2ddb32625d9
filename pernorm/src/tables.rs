//! Immutable lookup tables shared by the normalization stages.
mod glyphs;

use hashbrown::HashSet;

use crate::lexicon::VerbLexicon;
use glyphs::GLYPH_TABLE;

/// Plural suffix variants of "ها", listed in matching priority.
pub const PLURAL_SUFFIXES: [&str; 21] = [
    "هایمان", "هایم", "هایت", "هایش", "هایتان", "هایشان", "هام", "هات", "هاتان", "هامون", "هامان",
    "هاش", "هاتون", "هاشان", "هاشون", "هایی", "های", "هاس", "ها", "هاست", "هاشو",
];

/// Possessive and copula clitics attached after a word, listed in matching priority.
pub const POSTFIX_CLITICS: [&str; 13] = [
    "ای", "ایم", "اید", "اند", "اش", "ام", "ات", "تان", "شان", "مان", "مون", "تون", "شون",
];

/// Words that may appear in a spelled-out number.
pub const NUMBER_WORDS: &[&str] = &[
    // ones
    "صفر", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه",
    // teens
    "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
    // tens
    "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود",
    // hundreds
    "صد", "یکصد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
    // scales
    "هزار", "میلیون", "میلیارد", "بیلیون", "تریلیون", "کوادریلیون",
    // connectors
    "و", "منفی", "ممیز",
];

/// Folds a character into its canonical Persian form.
///
/// Characters out of the table are returned as is, so folding is idempotent.
#[inline(always)]
pub fn fold_glyph(c: char) -> char {
    GLYPH_TABLE
        .binary_search_by_key(&c, |&(src, _)| src)
        .map_or(c, |i| GLYPH_TABLE[i].1)
}

/// Maps ASCII and Arabic-Indic digits and the percent sign to their Persian forms.
#[inline(always)]
pub fn localize_digit(c: char) -> char {
    match c {
        '0'..='9' => char::from_u32(u32::from(c) - u32::from('0') + 0x06F0).unwrap_or(c),
        '\u{0660}'..='\u{0669}' => char::from_u32(u32::from(c) - 0x0660 + 0x06F0).unwrap_or(c),
        '%' => '٪',
        _ => c,
    }
}

/// Lookup tables built once and only read afterwards.
pub struct LookupTables {
    verbs: VerbLexicon,
    number_words: HashSet<&'static str>,
}

impl LookupTables {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    ///  - `verbs`: Verb stems used by the verb-prefix stages.
    pub fn new(verbs: VerbLexicon) -> Self {
        Self {
            verbs,
            number_words: NUMBER_WORDS.iter().copied().collect(),
        }
    }

    /// Gets the reference to the verb lexicon.
    #[inline(always)]
    pub const fn verbs(&self) -> &VerbLexicon {
        &self.verbs
    }

    /// Checks if the word is a number word.
    #[inline(always)]
    pub fn is_number_word(&self, word: &str) -> bool {
        self.number_words.contains(word)
    }

    /// Folds archaic and presentation-form glyphs into canonical Persian letters.
    pub fn translate(&self, text: &str) -> String {
        text.chars().map(fold_glyph).collect()
    }

    /// Rewrites digits and percent signs in the Persian script.
    pub fn localize_digits(&self, text: &str) -> String {
        text.chars().map(localize_digit).collect()
    }
}
