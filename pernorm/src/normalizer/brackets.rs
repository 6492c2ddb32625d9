const PAIRS: [(char, char); 4] = [('(', ')'), ('[', ']'), ('{', '}'), ('«', '»')];

#[inline(always)]
fn opener_of(c: char) -> Option<char> {
    PAIRS.iter().find(|&&(_, close)| close == c).map(|&(open, _)| open)
}

#[inline(always)]
fn is_opener(c: char) -> bool {
    PAIRS.iter().any(|&(open, _)| open == c)
}

/// Drops brackets without a matching partner.
///
/// A closer matches only the opener on the top of the stack. Unmatched
/// closers are dropped without popping, and openers left on the stack at the
/// end are dropped.
pub fn balance_brackets(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut valid = vec![false; chars.len()];
    let mut stack = vec![];
    for (i, &c) in chars.iter().enumerate() {
        if is_opener(c) {
            stack.push(i);
        } else if let Some(open) = opener_of(c) {
            if stack.last().map_or(false, |&j| chars[j] == open) {
                if let Some(j) = stack.pop() {
                    valid[j] = true;
                    valid[i] = true;
                }
            }
        } else {
            valid[i] = true;
        }
    }
    chars
        .into_iter()
        .zip(valid)
        .filter_map(|(c, keep)| keep.then_some(c))
        .collect()
}
