//! Regex rewrites that need no lexicon.
use regex::{Captures, NoExpand, Regex};

use crate::common::ZWNJ;
use crate::errors::Result;

/// Replaces HTML tags, URLs and e-mail addresses with spaces.
pub struct MarkupStripper {
    patterns: [Regex; 4],
}

impl MarkupStripper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: [
                Regex::new(r"<[^>]+>")?,
                Regex::new(r"http\S+")?,
                Regex::new(r"www\.\S+")?,
                Regex::new(r"\S+@\S+")?,
            ],
        })
    }

    pub fn strip(&self, text: &str) -> String {
        let mut text = text.to_string();
        for pattern in &self.patterns {
            text = pattern.replace_all(&text, " ").into_owned();
        }
        text
    }
}

/// Replaces whitespace runs with a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Contracts a final heh followed by a detached "ی" into "ۀ".
pub struct GenitiveContractor {
    pattern: Regex,
}

impl GenitiveContractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"ه(?:\s+|\x{200C})ی\s+")?,
        })
    }

    pub fn contract(&self, text: &str) -> String {
        self.pattern.replace_all(text, NoExpand("ۀ ")).into_owned()
    }
}

/// Glues a free-standing word to the next word with a half-space.
///
/// It is used for "بی" and for the progressive prefixes "می"/"نمی".
pub struct PrefixJoiner {
    pattern: Regex,
}

impl PrefixJoiner {
    pub fn new(prefixes: &[&str]) -> Result<Self> {
        let alternation = prefixes
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        Ok(Self {
            pattern: Regex::new(&format!(r"(^|\s+)({})\s+", alternation))?,
        })
    }

    pub fn join(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                let lead = if caps[1].is_empty() { "" } else { " " };
                format!("{}{}{}", lead, &caps[2], ZWNJ)
            })
            .into_owned()
    }
}

/// Removes emoji and pictographs.
pub struct EmojiStripper {
    pattern: Regex,
}

impl EmojiStripper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(
                r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F900}-\x{1F9FF}\x{1FA70}-\x{1FAFF}\x{1F1E6}-\x{1F1FF}\x{2600}-\x{27BF}\x{FE0F}]",
            )?,
        })
    }

    pub fn strip(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}

const ABBREVIATIONS: [(&str, &str); 12] = [
    (r"\(ص\)", " صلی\u{200C}الله\u{200C}علیه\u{200C}وآله "),
    (r"\(ع\)", " علیه\u{200C}السلام "),
    (r"\(س\)", " سلام\u{200C}الله\u{200C}علیها "),
    (r"\(ره\)", " رحمت\u{200C}الله\u{200C}علیه "),
    (r"\(رض\)", " رضی\u{200C}الله\u{200C}عنه "),
    (r"\(عج\)", " عجل\u{200C}الله\u{200C}تعالی\u{200C}فرجه "),
    (r"\bه\.\s*ق\.?", " هجری قمری "),
    (r"\bه\.\s*ش\.?", " هجری شمسی "),
    (r"\bق\.\s*م\.?", " قبل از میلاد "),
    (r"\bر\.\s*ک\.?", " رجوع کنید به "),
    (r"\bص\.", " صفحه "),
    (r"\bج\.", " جلد "),
];

/// Expands honorific parentheticals, era markers and citation markers.
pub struct AbbreviationExpander {
    rules: Vec<(Regex, &'static str)>,
}

impl AbbreviationExpander {
    pub fn new() -> Result<Self> {
        let mut rules = Vec::with_capacity(ABBREVIATIONS.len());
        for (pattern, phrase) in ABBREVIATIONS {
            rules.push((Regex::new(pattern)?, phrase));
        }
        Ok(Self { rules })
    }

    pub fn expand(&self, text: &str) -> String {
        let mut text = text.to_string();
        for (pattern, phrase) in &self.rules {
            text = pattern.replace_all(&text, NoExpand(*phrase)).into_owned();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        let stripper = MarkupStripper::new().unwrap();
        assert_eq!(
            collapse_whitespace(&stripper.strip("<b>سلام</b> https://example.com/x و a@b.ir")),
            "سلام و"
        );
        assert_eq!(collapse_whitespace(&stripper.strip("www.example.ir متن")), "متن");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  یک \n\t دو  "), "یک دو");
        assert_eq!(collapse_whitespace("یک\u{200C}دو"), "یک\u{200C}دو");
    }

    #[test]
    fn test_genitive() {
        let contractor = GenitiveContractor::new().unwrap();
        assert_eq!(contractor.contract("خانه ی من"), "خانۀ من");
        assert_eq!(contractor.contract("خانه\u{200C}ی من"), "خانۀ من");
        assert_eq!(contractor.contract("خانه یک"), "خانه یک");
    }

    #[test]
    fn test_bi_prefix() {
        let joiner = PrefixJoiner::new(&["بی"]).unwrap();
        assert_eq!(joiner.join("بی کار"), "بی\u{200C}کار");
        assert_eq!(joiner.join("مرد بی  کار"), "مرد بی\u{200C}کار");
        assert_eq!(joiner.join("بیکار است"), "بیکار است");
    }

    #[test]
    fn test_progressive_prefix() {
        let joiner = PrefixJoiner::new(&["نمی", "می"]).unwrap();
        assert_eq!(joiner.join("می روم"), "می\u{200C}روم");
        assert_eq!(joiner.join("او نمی خواهد"), "او نمی\u{200C}خواهد");
        assert_eq!(joiner.join("کمی راه"), "کمی راه");
    }

    #[test]
    fn test_emoji() {
        let stripper = EmojiStripper::new().unwrap();
        assert_eq!(stripper.strip("سلام😀🚀"), "سلام");
    }

    #[test]
    fn test_abbreviations() {
        let expander = AbbreviationExpander::new().unwrap();
        assert_eq!(
            expander.expand("امام علی(ع)"),
            "امام علی علیه\u{200C}السلام "
        );
        assert_eq!(expander.expand("سال ۶۱ ه.ق"), "سال ۶۱  هجری قمری ");
        assert_eq!(expander.expand("ج. ۲"), " جلد  ۲");
    }
}
