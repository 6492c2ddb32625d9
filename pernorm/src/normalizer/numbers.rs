use regex::Regex;

use crate::common::{GENITIVE_LINKER, ZWNJ};
use crate::errors::Result;
use crate::numeral::NumberSpeller;
use crate::tables::LookupTables;
use crate::utils::{is_persian_letter, word_end, word_start};

/// Digits the number speller reads: ASCII, Arabic-Indic and Persian-Indic.
const DIGIT: &str = r"[0-9\x{0660}-\x{0669}\x{06F0}-\x{06F9}]";

/// Rewriter of dates and numbers into words.
pub struct NumeralRewriter {
    date: Regex,
    number: Regex,
}

impl NumeralRewriter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            date: Regex::new(&format!("{d}{{2,4}}/{d}{{1,2}}/{d}{{1,2}}", d = DIGIT))?,
            number: Regex::new(&format!(r"-?{d}*\.?{d}+", d = DIGIT))?,
        })
    }

    /// Replaces each `year/month/day` date with its spelled-out form.
    pub fn dates_to_words<S>(&self, text: &str, speller: &S) -> Result<String>
    where
        S: NumberSpeller,
    {
        let mut result = String::with_capacity(text.len());
        let mut last = 0;
        for m in self.date.find_iter(text) {
            let mut parts = m.as_str().split('/');
            let (year, month, day) = match (parts.next(), parts.next(), parts.next()) {
                (Some(year), Some(month), Some(day)) => (year, month, day),
                _ => continue,
            };
            result.push_str(&text[last..m.start()]);
            result.push_str(&speller.ordinal(day)?);
            result.push(GENITIVE_LINKER);
            result.push(' ');
            result.push_str(&speller.cardinal(month)?);
            result.push(GENITIVE_LINKER);
            result.push(' ');
            result.push_str(&speller.cardinal(year)?);
            last = m.end();
        }
        result.push_str(&text[last..]);
        Ok(result)
    }

    /// Replaces each number literal with its cardinal form.
    ///
    /// Literals right after a Persian letter are left intact, except that a
    /// leading minus sign there is read as a hyphen and only the digits after
    /// it are spelled out.
    pub fn numbers_to_words<S>(&self, text: &str, speller: &S) -> Result<String>
    where
        S: NumberSpeller,
    {
        let mut result = String::with_capacity(text.len());
        let mut last = 0;
        for m in self.number.find_iter(text) {
            let after_letter = text[..m.start()]
                .chars()
                .next_back()
                .map_or(false, is_persian_letter);
            let literal = if after_letter {
                match m.as_str().strip_prefix('-') {
                    Some(unsigned) => unsigned,
                    None => continue,
                }
            } else {
                m.as_str()
            };
            result.push_str(&text[last..m.end() - literal.len()]);
            result.push_str(&speller.cardinal(literal)?);
            last = m.end();
        }
        result.push_str(&text[last..]);
        Ok(result)
    }
}

/// Replaces half-spaces fusing two number words with spaces.
///
/// Passes are repeated until nothing changes, at most once per half-space
/// plus one.
pub fn split_merged_numbers(text: &str, tables: &LookupTables) -> String {
    let max_passes = text.chars().filter(|&c| c == ZWNJ).count() + 1;
    let mut text = text.to_string();
    for _ in 0..max_passes {
        let next = split_merged_numbers_once(&text, tables);
        if next == text {
            break;
        }
        text = next;
    }
    text
}

fn split_merged_numbers_once(text: &str, tables: &LookupTables) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut left = String::new();
    let mut right = String::new();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if c != ZWNJ || i == 0 || i + 1 == chars.len() {
                return c;
            }
            left.clear();
            left.extend(&chars[word_start(&chars, i)..i]);
            right.clear();
            right.extend(&chars[i + 1..word_end(&chars, i + 1)]);
            if tables.is_number_word(&left) && tables.is_number_word(&right) {
                ' '
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::errors::PernormError;
    use crate::lexicon::VerbLexicon;
    use crate::numeral::PersianNumberSpeller;

    #[test]
    fn test_dates() {
        let rewriter = NumeralRewriter::new().unwrap();
        let speller = PersianNumberSpeller::new();
        assert_eq!(
            rewriter
                .dates_to_words("در ۱۴۰۲/۱۱/۲۹ آمد", &speller)
                .unwrap(),
            "در بیست و نهمِ یازدهِ هزار و چهارصد و دو آمد"
        );
        assert_eq!(
            rewriter.dates_to_words("بدون تاریخ", &speller).unwrap(),
            "بدون تاریخ"
        );
    }

    #[test]
    fn test_numbers() {
        let rewriter = NumeralRewriter::new().unwrap();
        let speller = PersianNumberSpeller::new();
        assert_eq!(
            rewriter.numbers_to_words("۱۲ و ۱۲ سیب", &speller).unwrap(),
            "دوازده و دوازده سیب"
        );
        assert_eq!(
            rewriter.numbers_to_words("دما -۵ است", &speller).unwrap(),
            "دما منفی پنج است"
        );
        assert_eq!(
            rewriter.numbers_to_words("۳.۵ کیلو", &speller).unwrap(),
            "سه ممیز پنج کیلو"
        );
    }

    #[test]
    fn test_numbers_after_letter() {
        let rewriter = NumeralRewriter::new().unwrap();
        let speller = PersianNumberSpeller::new();
        assert_eq!(
            rewriter.numbers_to_words("مدل-۲", &speller).unwrap(),
            "مدل-دو"
        );
        assert_eq!(
            rewriter.numbers_to_words("طول۹", &speller).unwrap(),
            "طول۹"
        );
    }

    #[test]
    fn test_other_script_digits() {
        let rewriter = NumeralRewriter::new().unwrap();
        let speller = PersianNumberSpeller::new();
        assert_eq!(
            rewriter.numbers_to_words("قیمت ৫ تومان", &speller).unwrap(),
            "قیمت ৫ تومان"
        );
        assert_eq!(
            rewriter.numbers_to_words("قیمت ５ تومان", &speller).unwrap(),
            "قیمت ５ تومان"
        );
        assert_eq!(
            rewriter.dates_to_words("١٤٠٢/١١/٢٩ و ১৪০২/১১/২৯", &speller).unwrap(),
            "بیست و نهم\u{0650} یازده\u{0650} هزار و چهارصد و دو و ১৪০২/১১/২৯"
        );
    }

    struct FailingSpeller;

    impl NumberSpeller for FailingSpeller {
        fn cardinal(&self, literal: &str) -> Result<String> {
            Err(PernormError::invalid_argument("literal", literal))
        }

        fn ordinal(&self, literal: &str) -> Result<String> {
            Err(PernormError::invalid_argument("literal", literal))
        }
    }

    #[test]
    fn test_speller_failure() {
        let rewriter = NumeralRewriter::new().unwrap();
        assert!(rewriter.numbers_to_words("۱۲ سیب", &FailingSpeller).is_err());
        assert!(rewriter.dates_to_words("۱۴۰۲/۱۱/۲۹", &FailingSpeller).is_err());
        assert_eq!(
            rewriter.numbers_to_words("بدون عدد", &FailingSpeller).unwrap(),
            "بدون عدد"
        );
    }

    #[test]
    fn test_split_merged_numbers() {
        let tables = LookupTables::new(VerbLexicon::default());
        assert_eq!(
            split_merged_numbers("بیست\u{200C}و\u{200C}پنج", &tables),
            "بیست و پنج"
        );
        assert_eq!(
            split_merged_numbers("خانه\u{200C}ها", &tables),
            "خانه\u{200C}ها"
        );
        assert_eq!(
            split_merged_numbers("سه\u{200C}شنبه", &tables),
            "سه\u{200C}شنبه"
        );
    }

    #[test]
    fn test_split_merged_numbers_fixed_point() {
        let tables = LookupTables::new(VerbLexicon::default());
        let once = split_merged_numbers("صد\u{200C}و\u{200C}بیست\u{200C}و\u{200C}یک", &tables);
        assert_eq!(once, "صد و بیست و یک");
        assert_eq!(split_merged_numbers(&once, &tables), once);
    }
}
