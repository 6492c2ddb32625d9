//! Spelling out numerals in Persian words.
use crate::common::ZWNJ;
use crate::errors::{PernormError, Result};
use crate::utils::digit_value;

/// Converter from numeral literals to words.
///
/// Literals consist of ASCII, Arabic-Indic or Persian-Indic digits with an
/// optional leading minus sign and an optional decimal point.
pub trait NumberSpeller {
    /// Spells out the cardinal form of the literal.
    ///
    /// # Errors
    ///
    /// [`PernormError`] is returned when the literal cannot be spelled out.
    fn cardinal(&self, literal: &str) -> Result<String>;

    /// Spells out the ordinal form of the literal.
    ///
    /// # Errors
    ///
    /// [`PernormError`] is returned when the literal cannot be spelled out.
    fn ordinal(&self, literal: &str) -> Result<String>;
}

const ONES: [&str; 10] = ["صفر", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه"];
const TEENS: [&str; 10] = [
    "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
];
const TENS: [&str; 10] = [
    "", "", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود",
];
const HUNDREDS: [&str; 10] = [
    "", "صد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
];
const SCALES: [&str; 6] = ["", "هزار", "میلیون", "میلیارد", "تریلیون", "کوادریلیون"];

const CONNECTOR: &str = " و ";
const NEGATIVE: &str = "منفی";
const DECIMAL_POINT: &str = "ممیز";

/// Longest digit run spelled as one number; longer runs are read digit by digit.
const MAX_DIGITS: usize = 18;

/// Speller producing Persian cardinal and ordinal words.
///
/// Digit runs of up to 18 digits are spelled as numbers, and longer runs as
/// digit sequences. Fractional digits are read after the word "ممیز".
#[derive(Clone, Copy, Debug, Default)]
pub struct PersianNumberSpeller;

impl PersianNumberSpeller {
    /// Creates a new instance.
    pub const fn new() -> Self {
        Self
    }
}

impl NumberSpeller for PersianNumberSpeller {
    fn cardinal(&self, literal: &str) -> Result<String> {
        let (negative, body) = match literal.strip_prefix('-') {
            Some(body) => (true, body),
            None => (false, literal),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(PernormError::invalid_argument(
                "literal",
                format!("no digits in {:?}", literal),
            ));
        }

        let mut words = spell_run(int_part)?;
        if !frac_part.is_empty() {
            words.push(' ');
            words.push_str(DECIMAL_POINT);
            let significant = frac_part.trim_start_matches(|c| digit_value(c) == Some(0));
            for _ in 0..frac_part.chars().count() - significant.chars().count() {
                words.push(' ');
                words.push_str(ONES[0]);
            }
            if !significant.is_empty() {
                words.push(' ');
                words.push_str(&spell_run(significant)?);
            }
        }
        if negative {
            words = format!("{} {}", NEGATIVE, words);
        }
        Ok(words)
    }

    fn ordinal(&self, literal: &str) -> Result<String> {
        if literal.is_empty() {
            return Err(PernormError::invalid_argument("literal", "empty literal"));
        }
        let mut words = spell_integer(parse_digits(literal)?)?;
        if let Some(stem) = words.strip_suffix(ONES[3]) {
            words = format!("{}سوم", stem);
        } else if words.ends_with('ی') {
            words.push(ZWNJ);
            words.push_str("ام");
        } else {
            words.push('م');
        }
        Ok(words)
    }
}

fn spell_run(digits: &str) -> Result<String> {
    if digits.chars().count() <= MAX_DIGITS {
        return spell_integer(parse_digits(digits)?);
    }
    let words = digits
        .chars()
        .map(|c| {
            digit_value(c).map(|d| ONES[d as usize]).ok_or_else(|| {
                PernormError::invalid_argument("literal", format!("{:?} is not a digit", c))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(words.join(" "))
}

fn parse_digits(digits: &str) -> Result<u64> {
    let mut n = 0u64;
    for c in digits.chars() {
        let d = digit_value(c).ok_or_else(|| {
            PernormError::invalid_argument("literal", format!("{:?} is not a digit", c))
        })?;
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(u64::from(d)))
            .ok_or_else(|| {
                PernormError::invalid_argument("literal", format!("{} is too large", digits))
            })?;
    }
    Ok(n)
}

fn spell_below_thousand(n: u64) -> String {
    debug_assert!(n < 1000);
    let mut parts = vec![];
    let (hundreds, rest) = ((n / 100) as usize, (n % 100) as usize);
    if hundreds != 0 {
        parts.push(HUNDREDS[hundreds]);
    }
    match rest {
        0 => {}
        1..=9 => parts.push(ONES[rest]),
        10..=19 => parts.push(TEENS[rest - 10]),
        _ => {
            parts.push(TENS[rest / 10]);
            if rest % 10 != 0 {
                parts.push(ONES[rest % 10]);
            }
        }
    }
    parts.join(CONNECTOR)
}

fn spell_integer(n: u64) -> Result<String> {
    if n == 0 {
        return Ok(ONES[0].to_string());
    }
    let mut groups = vec![];
    let mut rest = n;
    let mut scale = 0;
    while rest != 0 {
        let group = rest % 1000;
        if group != 0 {
            let scale_word = SCALES.get(scale).ok_or_else(|| {
                PernormError::invalid_argument("literal", format!("{} is too large", n))
            })?;
            // "هزار" rather than "یک هزار"
            let mut words = if scale == 1 && group == 1 {
                String::new()
            } else {
                spell_below_thousand(group)
            };
            if !scale_word.is_empty() {
                if !words.is_empty() {
                    words.push(' ');
                }
                words.push_str(scale_word);
            }
            groups.push(words);
        }
        rest /= 1000;
        scale += 1;
    }
    groups.reverse();
    Ok(groups.join(CONNECTOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal() {
        let speller = PersianNumberSpeller::new();
        assert_eq!(speller.cardinal("0").unwrap(), "صفر");
        assert_eq!(speller.cardinal("7").unwrap(), "هفت");
        assert_eq!(speller.cardinal("15").unwrap(), "پانزده");
        assert_eq!(speller.cardinal("120").unwrap(), "صد و بیست");
        assert_eq!(speller.cardinal("۱۴۰۲").unwrap(), "هزار و چهارصد و دو");
        assert_eq!(speller.cardinal("1001").unwrap(), "هزار و یک");
        assert_eq!(speller.cardinal("2000").unwrap(), "دو هزار");
        assert_eq!(speller.cardinal("1000000").unwrap(), "یک میلیون");
        assert_eq!(speller.cardinal("٢٥").unwrap(), "بیست و پنج");
    }

    #[test]
    fn test_cardinal_signed_and_fractional() {
        let speller = PersianNumberSpeller::new();
        assert_eq!(speller.cardinal("-5").unwrap(), "منفی پنج");
        assert_eq!(speller.cardinal("3.5").unwrap(), "سه ممیز پنج");
        assert_eq!(speller.cardinal("0.05").unwrap(), "صفر ممیز صفر پنج");
        assert_eq!(speller.cardinal(".5").unwrap(), "صفر ممیز پنج");
    }

    #[test]
    fn test_cardinal_fail() {
        let speller = PersianNumberSpeller::new();
        assert!(speller.cardinal("").is_err());
        assert!(speller.cardinal("-").is_err());
        assert!(speller.cardinal("12a").is_err());
        assert!(speller.cardinal("12345678901234567890a").is_err());
        assert!(speller.ordinal("1000000000000000000").is_err());
    }

    #[test]
    fn test_cardinal_long_run() {
        let speller = PersianNumberSpeller::new();
        assert_eq!(
            speller.cardinal("999999999999999999").unwrap(),
            "نهصد و نود و نه کوادریلیون و نهصد و نود و نه تریلیون و نهصد و نود و نه میلیارد \
             و نهصد و نود و نه میلیون و نهصد و نود و نه هزار و نهصد و نود و نه"
        );
        assert_eq!(
            speller.cardinal("1000000000000000000").unwrap(),
            "یک صفر صفر صفر صفر صفر صفر صفر صفر صفر صفر صفر صفر صفر صفر صفر صفر صفر صفر"
        );
        assert_eq!(
            speller.cardinal("-۱۲۳۴۵۶۷۸۹۰۱۲۳۴۵۶۷۸۹۰").unwrap(),
            "منفی یک دو سه چهار پنج شش هفت هشت نه صفر یک دو سه چهار پنج شش هفت هشت نه صفر"
        );
    }

    #[test]
    fn test_ordinal() {
        let speller = PersianNumberSpeller::new();
        assert_eq!(speller.ordinal("1").unwrap(), "یکم");
        assert_eq!(speller.ordinal("3").unwrap(), "سوم");
        assert_eq!(speller.ordinal("23").unwrap(), "بیست و سوم");
        assert_eq!(speller.ordinal("۲۹").unwrap(), "بیست و نهم");
        assert_eq!(speller.ordinal("30").unwrap(), "سی\u{200C}ام");
        assert_eq!(speller.ordinal("12").unwrap(), "دوازدهم");
        assert!(speller.ordinal("1.5").is_err());
    }
}
