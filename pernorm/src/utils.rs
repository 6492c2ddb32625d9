/// Checks if the character is in the basic Persian letter block, i.e.,
/// from alef-madda (U+0622) to Farsi yeh (U+06CC).
#[inline(always)]
pub fn is_persian_letter(c: char) -> bool {
    ('\u{0622}'..='\u{06CC}').contains(&c)
}

/// Checks if the character is ASCII or Persian punctuation.
#[inline(always)]
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '،' | '؛' | '؟' | '«' | '»')
}

/// Gets the value of an ASCII, Arabic-Indic or Persian-Indic digit.
#[inline(always)]
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(u32::from(c) - u32::from('0')),
        '\u{0660}'..='\u{0669}' => Some(u32::from(c) - 0x0660),
        '\u{06F0}'..='\u{06F9}' => Some(u32::from(c) - 0x06F0),
        _ => None,
    }
}

/// Gets the start position of the alphabetic run ending at `pos`.
pub fn word_start(chars: &[char], pos: usize) -> usize {
    chars[..pos]
        .iter()
        .rposition(|c| !c.is_alphabetic())
        .map_or(0, |p| p + 1)
}

/// Gets the end position of the alphabetic run starting at `pos`.
pub fn word_end(chars: &[char], pos: usize) -> usize {
    chars[pos..]
        .iter()
        .position(|c| !c.is_alphabetic())
        .map_or(chars.len(), |p| pos + p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value('7'), Some(7));
        assert_eq!(digit_value('٣'), Some(3));
        assert_eq!(digit_value('۹'), Some(9));
        assert_eq!(digit_value('a'), None);
    }

    #[test]
    fn test_persian_letter() {
        assert!(is_persian_letter('آ'));
        assert!(is_persian_letter('ی'));
        assert!(is_persian_letter('پ'));
        assert!(!is_persian_letter('-'));
        assert!(!is_persian_letter('۱'));
    }

    #[test]
    fn test_word_span() {
        let chars: Vec<_> = "یک\u{200C}دو سه".chars().collect();
        assert_eq!(word_start(&chars, 2), 0);
        assert_eq!(word_end(&chars, 3), 5);
        assert_eq!(word_start(&chars, 8), 6);
        assert_eq!(word_end(&chars, 6), 8);
    }
}
