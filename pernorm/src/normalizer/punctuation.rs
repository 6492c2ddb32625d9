//! Punctuation cleanup.
use regex::{Captures, Regex};

use crate::common::ZWNJ;
use crate::errors::Result;

/// Marks followed by exactly one space unless they end the text.
const CLAUSE_MARKS: &str = "،؟.؛:!";

const SYMBOL_RULES: [(&str, &str); 12] = [
    (r"[,‘’']", "،"),
    (r";", "؛"),
    (r"/", " یا "),
    (r"#", " هشتگ "),
    (r"=", " برابر است با "),
    (r"[٪%]", " درصد "),
    (r"،\s*", "، "),
    (r"[*\\]", ""),
    (r"\?", "؟"),
    (r" +", " "),
    (r"([:؛،])\n", "$1"),
    (r"\s([،؟.؛:!](?:\s|$))", "$1"),
];

const PAIRS: [&str; 6] = [
    r"\s?(\(.*?\))\s?",
    r"\s?(\{.*?\})\s?",
    r"\s?(\[.*?\])\s?",
    r"\s?(«.*?»)\s?",
    r"\s?(‹.*?›)\s?",
    r#"\s?(".*?")\s?"#,
];

const SPACING_RULES: [(&str, &str); 5] = [
    (r" {2,}", " "),
    (r"\n+", "\n"),
    (r"\x{200C}{2,}", "\u{200C}"),
    (r"\x{200C}+ ", " "),
    (r" \x{200C}+", " "),
];

const LETTERS: &str = "آابپتثجچحخدذرزژسشصضطظعغفقکگلمنوهی";

/// Rewriter of punctuation marks and the spaces around them.
pub struct PunctuationCleaner {
    symbols: Vec<(Regex, &'static str)>,
    pairs: Vec<Regex>,
    inner_space: Regex,
    space_before_mark: Regex,
    spacing: Vec<(Regex, &'static str)>,
    tail: Vec<(Regex, String)>,
}

impl PunctuationCleaner {
    pub fn new() -> Result<Self> {
        let symbols = SYMBOL_RULES
            .iter()
            .map(|&(p, r)| -> Result<_> { Ok((Regex::new(p)?, r)) })
            .collect::<Result<_>>()?;
        let pairs = PAIRS.iter().map(|p| Regex::new(p)).collect::<Result<_, _>>()?;
        let spacing = SPACING_RULES
            .iter()
            .map(|&(p, r)| -> Result<_> { Ok((Regex::new(p)?, r)) })
            .collect::<Result<_>>()?;
        let tail = vec![
            (Regex::new(r"[ـ\r]")?, String::new()),
            (Regex::new(r" ?\.\.\.")?, " …".to_string()),
            (
                Regex::new(&format!(r"(\d)([{}])", LETTERS))?,
                "$1 $2".to_string(),
            ),
            (
                Regex::new(&format!(r"([{}])(\d)", LETTERS))?,
                "$1 $2".to_string(),
            ),
        ];
        Ok(Self {
            symbols,
            pairs,
            inner_space: Regex::new(r"([\[(\{«])([^\n]*?)([)\]\}»])")?,
            space_before_mark: Regex::new(r"\s([?,.!])")?,
            spacing,
            tail,
        })
    }

    pub fn clean(&self, text: &str) -> String {
        let mut text = text.to_string();
        for (pattern, rep) in &self.symbols {
            text = pattern.replace_all(&text, *rep).into_owned();
        }
        text = space_after_marks(&text);
        for pattern in &self.pairs {
            text = pattern.replace_all(&text, " $1 ").into_owned();
        }
        text = self
            .inner_space
            .replace_all(&text, |caps: &Captures| {
                format!("{}{}{}", &caps[1], caps[2].trim(), &caps[3])
            })
            .into_owned();
        text = self.space_before_mark.replace_all(&text, "$1").into_owned();
        for (pattern, rep) in &self.spacing {
            text = pattern.replace_all(&text, *rep).into_owned();
        }
        text = remove_stray_zwnj(&text);
        for (pattern, rep) in &self.tail {
            text = pattern.replace_all(&text, rep.as_str()).into_owned();
        }
        text.trim().to_string()
    }
}

/// Inserts a space after a clause mark glued to the next character.
///
/// Consecutive marks stay together.
fn space_after_marks(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut it = text.chars().peekable();
    while let Some(c) = it.next() {
        result.push(c);
        if CLAUSE_MARKS.contains(c) {
            if let Some(&next) = it.peek() {
                if !next.is_whitespace() && !CLAUSE_MARKS.contains(next) {
                    result.push(' ');
                }
            }
        }
    }
    result
}

/// Removes half-spaces that are not between two letters.
fn remove_stray_zwnj(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            c != ZWNJ
                || (i != 0
                    && chars[i - 1].is_alphabetic()
                    && chars.get(i + 1).map_or(false, |n| n.is_alphabetic()))
        })
        .map(|(_, &c)| c)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_marks() {
        let cleaner = PunctuationCleaner::new().unwrap();
        assert_eq!(cleaner.clean("سلام , خوبی ?"), "سلام، خوبی؟");
        assert_eq!(cleaner.clean("الف;ب"), "الف؛ ب");
        assert_eq!(cleaner.clean("تمام.بعد"), "تمام. بعد");
        assert_eq!(cleaner.clean("واقعا؟!"), "واقعا؟!");
    }

    #[test]
    fn test_symbols() {
        let cleaner = PunctuationCleaner::new().unwrap();
        assert_eq!(cleaner.clean("ده٪"), "ده درصد");
        assert_eq!(cleaner.clean("من/تو"), "من یا تو");
        assert_eq!(cleaner.clean("#ایران"), "هشتگ ایران");
        assert_eq!(cleaner.clean("الف=ب"), "الف برابر است با ب");
        assert_eq!(cleaner.clean("*مهم*"), "مهم");
    }

    #[test]
    fn test_pairs() {
        let cleaner = PunctuationCleaner::new().unwrap();
        assert_eq!(cleaner.clean("(سلام )دنیا"), "(سلام) دنیا");
        assert_eq!(cleaner.clean("او«  گفت »رفت"), "او «گفت» رفت");
    }

    #[test]
    fn test_zwnj() {
        let cleaner = PunctuationCleaner::new().unwrap();
        assert_eq!(cleaner.clean("می\u{200C}\u{200C}روم"), "می\u{200C}روم");
        assert_eq!(cleaner.clean("کتاب\u{200C} من"), "کتاب من");
        assert_eq!(cleaner.clean("\u{200C}کتاب"), "کتاب");
    }

    #[test]
    fn test_misc() {
        let cleaner = PunctuationCleaner::new().unwrap();
        assert_eq!(cleaner.clean("طول۹"), "طول ۹");
        assert_eq!(cleaner.clean("۹متر"), "۹ متر");
        assert_eq!(cleaner.clean("کشـیده"), "کشیده");
        assert_eq!(cleaner.clean("و سپس..."), "و سپس …");
    }
}
